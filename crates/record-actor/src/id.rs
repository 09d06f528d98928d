//! # Record Identifiers
//!
//! Store keys are always strings. The [`record_id!`](crate::record_id) macro
//! generates one newtype per entity kind so that a hotel id cannot be passed where
//! a customer id is expected, while every id still converts to and from its string
//! key.
//!
//! ```rust
//! record_actor::record_id!(Guest);
//!
//! let by_number = GuestId::from(101u32);
//! let by_text = GuestId::from("101");
//! assert_eq!(by_number, by_text);
//! assert_eq!(by_number.to_string(), "101");
//! ```

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawKey {
    Text(String),
    Unsigned(u64),
    Signed(i64),
}

/// Deserializes a key that may have been written as a JSON string or integer.
#[doc(hidden)]
pub fn deserialize_key<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawKey::deserialize(deserializer)? {
        RawKey::Text(text) => text,
        RawKey::Unsigned(n) => n.to_string(),
        RawKey::Signed(n) => n.to_string(),
    })
}

/// Declares string-backed identifier newtypes, one per entity name.
///
/// `record_id!(Hotel)` produces `HotelId`.
#[macro_export]
macro_rules! record_id {
    ($($entity:ident),+ $(,)?) => {
        $crate::paste::paste! {
            $(
                #[doc = "Identifier of a stored `" $entity "` record."]
                #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
                pub struct [<$entity Id>](pub String);

                impl [<$entity Id>] {
                    pub fn as_str(&self) -> &str {
                        &self.0
                    }
                }

                impl ::std::fmt::Display for [<$entity Id>] {
                    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                        f.write_str(&self.0)
                    }
                }

                impl From<String> for [<$entity Id>] {
                    fn from(id: String) -> Self {
                        Self(id)
                    }
                }

                impl From<&str> for [<$entity Id>] {
                    fn from(id: &str) -> Self {
                        Self(id.to_string())
                    }
                }

                impl From<u32> for [<$entity Id>] {
                    fn from(id: u32) -> Self {
                        Self(id.to_string())
                    }
                }

                impl From<u64> for [<$entity Id>] {
                    fn from(id: u64) -> Self {
                        Self(id.to_string())
                    }
                }

                impl $crate::serde::Serialize for [<$entity Id>] {
                    fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
                    where
                        S: $crate::serde::Serializer,
                    {
                        serializer.serialize_str(&self.0)
                    }
                }

                impl<'de> $crate::serde::Deserialize<'de> for [<$entity Id>] {
                    fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
                    where
                        D: $crate::serde::Deserializer<'de>,
                    {
                        $crate::id::deserialize_key(deserializer).map(Self)
                    }
                }
            )+
        }
    };
}
