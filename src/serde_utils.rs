use std::fmt;

use crate::{DnaLine, SequenceText};

/// Make "string-like" implementations of `serde::Deserialize` and
/// `serde::Serialize` for the given type, using that type's `Display`
/// and `FromStr` impls.
///
/// (This is used to serialize a line as `"GCAT"` rather than
/// `["G","C","A","T"]`.)
macro_rules! impl_stringlike {
    ($type:ty) => {
        impl<'de> serde::Deserialize<'de> for $type {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct Helper;
                impl<'de> serde::de::Visitor<'de> for Helper {
                    type Value = $type;

                    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                        write!(formatter, "a string")
                    }

                    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        value
                            .parse::<Self::Value>()
                            .map_err(serde::de::Error::custom)
                    }
                }

                deserializer.deserialize_str(Helper)
            }
        }

        impl serde::Serialize for $type {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }
    };
}

impl_stringlike!(DnaLine);
impl_stringlike!(SequenceText);
