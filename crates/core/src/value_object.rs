//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two item names
/// with the same text are the same item. To "modify" one, build a new one.
///
/// The trait requires:
/// - **Clone**: values are cheap to copy around
/// - **PartialEq**: comparison is by attribute values
/// - **Debug**: values show up in logs and test failures
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
