//! Token enumeration macro
//!
//! Request fields carry lowercase string tokens. `define_tokens!` turns a
//! token table into a closed enum with a static lookup table, so unknown
//! tokens fall out of a table miss instead of a catch-all match arm.

/// Define a closed token enum with its canonical spelling and accepted aliases
///
/// ```ignore
/// define_tokens! {
///     /// Vehicle profile
///     TravelMode {
///         Car => "car",
///         Truck => "truck" | "trucks",
///     }
/// }
/// ```
macro_rules! define_tokens {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $canonical:literal $(| $alias:literal)*
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            serde::Serialize,
            serde::Deserialize
        )]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $canonical)]
                $(#[serde(alias = $alias)])*
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Lookup table of accepted tokens, aliases included
            pub const TOKENS: &'static [(&'static str, $name)] = &[
                $(
                    ($canonical, $name::$variant),
                    $(($alias, $name::$variant),)*
                )+
            ];

            /// Canonical token for this variant
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $canonical,)+
                }
            }

            /// Exact lookup of an already normalized token
            pub fn from_token(token: &str) -> Option<Self> {
                Self::TOKENS
                    .iter()
                    .find(|(candidate, _)| *candidate == token)
                    .map(|(_, value)| *value)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use define_tokens;
