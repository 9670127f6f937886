//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.

/// Macro to define a type-safe ID wrapper over a given integer type.
///
/// Creates a newtype with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `get()`
/// - `From` implementations in both directions
///
/// # Example
///
/// ```rust
/// # use fashionista_core::define_id;
/// define_id!(ProductId, i32);
/// define_id!(OrderId, i64);
///
/// let product_id = ProductId::new(1);
/// let order_id = OrderId::new(1);
///
/// // These are different types, so this won't compile:
/// // let _: ProductId = order_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident, $int:ty) => {
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
        pub struct $name($int);

        impl $name {
            /// Create a new ID from the underlying integer value.
            #[must_use]
            pub const fn new(id: $int) -> Self {
                Self(id)
            }

            /// Get the underlying integer value.
            #[must_use]
            pub const fn get(&self) -> $int {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$int> for $name {
            fn from(id: $int) -> Self {
                Self(id)
            }
        }

        impl From<$name> for $int {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Catalog products carry small sequential ids.
define_id!(ProductId, i32);

// Users and orders are stamped by the host with epoch-millisecond ids,
// so these are wide enough for a Unix timestamp in milliseconds.
define_id!(UserId, i64);
define_id!(OrderId, i64);
