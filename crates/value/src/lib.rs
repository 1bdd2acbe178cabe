//! valeq-value - Dynamic value model for structural comparison.
//!
//! Defines [`Value`], the runtime shape every comparable object is lowered
//! into, and [`ToValue`], the capability trait structured types implement to
//! expose their comparable fields. Field listing is explicit and
//! compile-time checked; nothing here reflects over memory layout.

mod to_value;
mod value;

pub use to_value::ToValue;
pub use value::{Kind, Value};
