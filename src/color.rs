//! The value type every conversion consumes and produces.

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that model components default to.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that model components default to.
pub type Component = f64;

/// Represent the three components that describe any color sample. What the
/// components mean depends on the conversion that produced them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components<T = Component>(pub T, pub T, pub T);

impl<T: Copy> Components<T> {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> Components<U> {
        Components(f(self.0), f(self.1), f(self.2))
    }

    /// Combine these components pairwise with another set.
    pub fn zip_with<U, V>(&self, other: &Components<U>, f: impl Fn(T, U) -> V) -> Components<V>
    where
        U: Copy,
    {
        Components(f(self.0, other.0), f(self.1, other.1), f(self.2, other.2))
    }
}

impl<T> From<[T; 3]> for Components<T> {
    fn from([c0, c1, c2]: [T; 3]) -> Self {
        Self(c0, c1, c2)
    }
}

impl<T> From<Components<T>> for [T; 3] {
    fn from(value: Components<T>) -> Self {
        [value.0, value.1, value.2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_applies_to_every_component() {
        let c = Components(0.25, 0.5, 0.75).map(|v: f32| v * 2.0);
        assert_eq!(c, Components(0.5, 1.0, 1.5));
    }

    #[test]
    fn zip_with_pairs_components_in_order() {
        let c = Components(1.0_f32, 2.0, 3.0)
            .zip_with(&Components(4.0_f32, 5.0, 6.0), |a, b| b - a);
        assert_eq!(c, Components(3.0, 3.0, 3.0));
    }

    #[test]
    fn arrays_convert_both_ways() {
        let c = Components::from([0.25_f32, 0.5, 0.75]);
        assert_eq!(c, Components(0.25, 0.5, 0.75));
        let back: [f32; 3] = c.into();
        assert_eq!(back, [0.25, 0.5, 0.75]);
    }
}
