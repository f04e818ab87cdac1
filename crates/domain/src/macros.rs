//! Macro for implementing string conversions on wire enums
//!
//! Square sends enum values as SCREAMING_SNAKE_CASE strings and adds new
//! values over time. Every wire enum therefore carries an `Unknown(String)`
//! variant that keeps the raw value instead of failing deserialization.
//!
//! # Example
//!
//! ```rust
//! use squarely_domain::impl_wire_enum;
//!
//! #[derive(Debug, Clone, PartialEq, Eq)]
//! pub enum CardKind {
//!     Credit,
//!     Debit,
//!     Unknown(String),
//! }
//!
//! impl_wire_enum!(CardKind {
//!     Credit => "CREDIT",
//!     Debit => "DEBIT",
//! });
//!
//! assert_eq!("debit".parse::<CardKind>().unwrap(), CardKind::Debit);
//! assert_eq!(CardKind::Unknown("PREPAID".into()).to_string(), "PREPAID");
//! ```

/// Implements `Display`, `FromStr`, `Serialize` and `Deserialize` for a wire
/// enum with an `Unknown(String)` fallback variant.
///
/// # Features
///
/// - Case-insensitive parsing (e.g., "VISA", "visa", "Visa" all work)
/// - Unrecognised values round-trip unchanged through `Unknown`
/// - Serializes to the canonical wire string
#[macro_export]
macro_rules! impl_wire_enum {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl $enum_name {
            /// Canonical wire representation.
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $str,)+
                    Self::Unknown(raw) => raw.as_str(),
                }
            }

            /// Returns true when the value was not recognised.
            pub fn is_unknown(&self) -> bool {
                matches!(self, Self::Unknown(_))
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($str) {
                        return Ok(Self::$variant);
                    }
                )+
                Ok(Self::Unknown(s.to_string()))
            }
        }

        impl ::serde::Serialize for $enum_name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $enum_name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let raw = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                match raw.parse::<$enum_name>() {
                    Ok(value) => Ok(value),
                    Err(never) => match never {},
                }
            }
        }
    };
}
