use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;

/// Generate the boilerplate for a color model: a struct with exactly three
/// named components that share a single scalar type parameter.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 3 {
        return quote! {
            compile_error!("Models must have exactly 3 fields, one for each component of the color.");
        }
        .into();
    }

    let scalars = input
        .generics
        .type_params()
        .map(|p| p.ident.clone())
        .collect::<Vec<_>>();
    if scalars.len() != 1 {
        return quote! {
            compile_error!("Models must have exactly one type parameter for the component scalar.");
        }
        .into();
    }
    let scalar = &scalars[0];

    let field_names = input
        .fields
        .iter()
        .filter_map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    if field_names.len() != 3 {
        return quote! {
            compile_error!("Model components must be named.");
        }
        .into();
    }

    let field1 = &field_names[0];
    let field2 = &field_names[1];
    let field3 = &field_names[2];

    // Make sure the 3 specified fields are public.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let attr = syn::Attribute::parse_outer
        .parse2(syn::parse_quote! {
            #[derive(Clone, Copy, Debug, PartialEq)]
        })
        .unwrap();
    input.attrs.extend(attr);

    // The bound only applies to the generated impls, the struct itself stays
    // unconstrained.
    let mut generics = input.generics.clone();
    generics
        .make_where_clause()
        .predicates
        .push(syn::parse_quote!(#scalar: crate::math::Precision));

    let struct_name = input.ident.clone();
    let (impl_gen, type_gen, where_clause) = generics.split_for_impl();

    let new_impl = quote! {
        impl #impl_gen #struct_name #type_gen #where_clause {
            /// Create a new color in this model.
            pub fn new(#field1: #scalar, #field2: #scalar, #field3: #scalar) -> Self {
                Self {
                    #field1,
                    #field2,
                    #field3,
                }
            }

            /// Convert this model into generic components.
            pub fn to_components(&self) -> crate::color::Components<#scalar> {
                crate::color::Components(self.#field1, self.#field2, self.#field3)
            }
        }

        impl #impl_gen From<crate::color::Components<#scalar>> for #struct_name #type_gen #where_clause {
            fn from(value: crate::color::Components<#scalar>) -> Self {
                Self::new(value.0, value.1, value.2)
            }
        }

        impl #impl_gen From<#struct_name #type_gen> for crate::color::Components<#scalar> #where_clause {
            fn from(value: #struct_name #type_gen) -> Self {
                value.to_components()
            }
        }
    };

    quote! {
        #input
        #new_impl
    }
    .into()
}
