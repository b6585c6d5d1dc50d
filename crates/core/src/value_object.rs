//! Value object trait: equality by value, not identity.
//!
//! Catalog records have **no identity** - they are defined entirely by their
//! attribute values. Two products with the same name, price and category are
//! the same product as far as every query is concerned.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// construct a new one.
///
/// The trait requires:
/// - **Clone**: providers hand out fresh copies on every call
/// - **PartialEq**: values are compared by their attributes
/// - **Debug**: values show up in logs and test failures
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Money(u64);
///
/// impl ValueObject for Money {}
///
/// assert_eq!(Money(100), Money(100));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
