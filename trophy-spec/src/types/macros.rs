//! Declaration macros for wire types.
//!
//! - `record!` declares a struct once as `field: Type => "wireKey"` and
//!   derives serde encode/decode, optional-field omission, the
//!   unrecognized-field bag and the `Record` field table.
//! - `string_enum!` declares a closed string set that still accepts values
//!   the server adds later.
//! - `union_record!` declares a payload resolved by ordered shape matching.

macro_rules! record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident: $ty:ty => $wire:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                #[serde(
                    rename = $wire,
                    default,
                    deserialize_with = "crate::types::record::lenient",
                    skip_serializing_if = "crate::types::record::Presence::is_absent"
                )]
                pub $field: $ty,
            )*
            /// Wire fields not mapped to a declared field.
            #[serde(flatten)]
            pub additional_properties: std::collections::HashMap<String, serde_json::Value>,
        }

        impl crate::types::record::Record for $name {
            const NAME: &'static str = stringify!($name);
            const FIELDS: &'static [crate::types::record::FieldSpec] = &[
                $(
                    crate::types::record::FieldSpec {
                        name: stringify!($field),
                        wire: $wire,
                        optional: <$ty as crate::types::record::Presence>::OPTIONAL,
                    },
                )*
            ];

            fn additional_properties(
                &self,
            ) -> &std::collections::HashMap<String, serde_json::Value> {
                &self.additional_properties
            }

            fn additional_properties_mut(
                &mut self,
            ) -> &mut std::collections::HashMap<String, serde_json::Value> {
                &mut self.additional_properties
            }
        }

        impl crate::types::record::Presence for $name {}
    };
}

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
            /// A value this SDK version does not recognise, kept verbatim.
            Unknown(String),
        }

        impl $name {
            /// Wire values known to this SDK version.
            pub const KNOWN: &'static [&'static str] = &[$($wire),+];

            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $wire,)+
                    Self::Unknown(value) => value.as_str(),
                }
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Unknown(_))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $($wire => Self::$variant,)+
                    other => Self::Unknown(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::from(value.as_str())
            }
        }

        // Unset, as produced by lenient decoding of a missing field.
        impl Default for $name {
            fn default() -> Self {
                Self::Unknown(String::new())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                <String as serde::Deserialize>::deserialize(deserializer).map(Self::from)
            }
        }

        impl crate::types::record::Presence for $name {}
    };
}

macro_rules! union_record {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident($ty:ty)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant($ty),
            )+
            /// Payload that matched none of the known shapes.
            Raw(serde_json::Value),
        }

        impl $name {
            /// Resolve a payload against each candidate shape in declaration
            /// order; the first match wins, no match yields `Raw`.
            pub fn resolve(value: serde_json::Value) -> Result<Self, crate::error::TrophyError> {
                $(
                    if <$ty as crate::types::record::Record>::matches(&value) {
                        return <$ty as crate::types::record::Record>::from_value(value)
                            .map(Self::$variant);
                    }
                )+
                Ok(Self::Raw(value))
            }

            pub fn is_raw(&self) -> bool {
                matches!(self, Self::Raw(_))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::Raw(serde_json::Value::Null)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                match self {
                    $(Self::$variant(inner) => serde::Serialize::serialize(inner, serializer),)+
                    Self::Raw(value) => serde::Serialize::serialize(value, serializer),
                }
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
                Self::resolve(value).map_err(<D::Error as serde::de::Error>::custom)
            }
        }

        impl crate::types::record::Presence for $name {}
    };
}
