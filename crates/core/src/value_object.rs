//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; they are defined entirely by their
//! attribute values. Two value objects with the same values are equal.

/// Marker trait for value objects.
///
/// - **Value Object**: no identity (a price range `50-100` equals any other `50-100`)
/// - **Entity**: has identity (two products with the same id are the same product)
///
/// Value objects are immutable: to "modify" one, build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Installments { count: u32, amount: f64 }
///
/// impl ValueObject for Installments {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
