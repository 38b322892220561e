//! Fixed-size lists indexed by the variants of a small enum.

/// Defines a fixed-size list containing one value per variant of an enum
/// that derives [`strum::EnumCount`] and [`strum::VariantArray`].
macro_rules! per_variant_list {
    {
        $(#[$attr:meta])*
        $vis:vis struct $struct_name:ident<T> for $enum_name:ident;
    } => {
        $(#[$attr])*
        #[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
        $vis struct $struct_name<T>([T; <$enum_name as strum::EnumCount>::COUNT]);

        impl<T> $struct_name<T> {
            /// Constructs a list from an array in variant order.
            pub const fn new(values: [T; <$enum_name as strum::EnumCount>::COUNT]) -> Self {
                Self(values)
            }

            /// Constructs a list by calling `f` once for each variant.
            pub fn from_fn(mut f: impl FnMut($enum_name) -> T) -> Self {
                Self(std::array::from_fn(|i| {
                    f(<$enum_name as strum::VariantArray>::VARIANTS[i])
                }))
            }

            /// Iterates over variants and their values.
            pub fn iter(&self) -> impl Iterator<Item = ($enum_name, &T)> {
                <$enum_name as strum::VariantArray>::VARIANTS
                    .iter()
                    .copied()
                    .zip(&self.0)
            }

            /// Iterates over the values in variant order.
            pub fn values(&self) -> impl Iterator<Item = &T> {
                self.0.iter()
            }

            /// Applies `f` to each value.
            pub fn map<U>(self, mut f: impl FnMut($enum_name, T) -> U) -> $struct_name<U> {
                let mut i = 0;
                $struct_name(self.0.map(|value| {
                    let variant = <$enum_name as strum::VariantArray>::VARIANTS[i];
                    i += 1;
                    f(variant, value)
                }))
            }
        }

        impl<T> std::ops::Index<$enum_name> for $struct_name<T> {
            type Output = T;

            fn index(&self, index: $enum_name) -> &Self::Output {
                &self.0[index as usize]
            }
        }

        impl<T> std::ops::IndexMut<$enum_name> for $struct_name<T> {
            fn index_mut(&mut self, index: $enum_name) -> &mut Self::Output {
                &mut self.0[index as usize]
            }
        }
    };
}
