//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. A looked-up
/// product has no identity of its own: two entries with the same name and
/// price are equal, yet both stay in the purchase list as separate lines.
///
/// To "modify" a value object, build a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
