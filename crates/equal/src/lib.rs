//! valeq-equal - Deep structural equality for [`valeq_value::Value`] graphs.
//!
//! Two comparison policies are exposed as separately named operations:
//!
//! - [`deep_equal`] compares sequences and map entries position for
//!   position.
//! - [`deep_equal_unordered`] treats sequences and maps as bags, matching
//!   elements one to one regardless of order.
//!
//! The split is deliberate: the policies disagree on reordered collections
//! and on map insertion order, so callers commit to one explicitly. Both
//! share the same scalar rules: no coercion across scalar kinds, and nil is
//! equal only to nil.
//!
//! Opaque values cannot be compared; both policies return
//! [`ShapeError::Opaque`] instead of a silent boolean.

mod error;
mod ordered;
mod unordered;

pub use error::ShapeError;
pub use ordered::deep_equal;
pub use unordered::deep_equal_unordered;
