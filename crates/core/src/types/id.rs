//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `i32` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_i32()`
/// - `From<i32>` and `Into<i32>` implementations
/// - `FromStr`, so IDs can be parsed straight from command-line arguments
///
/// # Example
///
/// ```rust
/// # use gamestore_core::define_id;
/// define_id!(GameId);
/// define_id!(OrderLineId);
///
/// let game_id = GameId::new(1);
/// let line_id = OrderLineId::new(1);
///
/// // These are different types, so this won't compile:
/// // let _: GameId = line_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Create a new ID from an i32 value.
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// Get the underlying i32 value.
            #[must_use]
            pub const fn as_i32(&self) -> i32 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = ::core::num::ParseIntError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                s.trim().parse::<i32>().map(Self)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Catalog entries, one per purchasable edition. The same title listed for
// several platforms gets one id per platform.
define_id!(GameId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_game_id_roundtrip_i32() {
        let id = GameId::new(104);
        assert_eq!(id.as_i32(), 104);
        assert_eq!(i32::from(id), 104);
        assert_eq!(GameId::from(104), id);
    }

    #[test]
    fn test_game_id_serializes_as_bare_integer() {
        let json = serde_json::to_string(&GameId::new(7)).unwrap();
        assert_eq!(json, "7");

        let parsed: GameId = serde_json::from_str("7").unwrap();
        assert_eq!(parsed, GameId::new(7));
    }

    #[test]
    fn test_game_id_from_str() {
        assert_eq!(" 203 ".parse::<GameId>().unwrap(), GameId::new(203));
        assert!("abc".parse::<GameId>().is_err());
    }

    #[test]
    fn test_game_id_display() {
        assert_eq!(GameId::new(11).to_string(), "11");
    }
}
