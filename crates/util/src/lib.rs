//! valeq-util - Helpers built on the valeq value model.

pub mod merge;

pub use merge::{merge, merge_into};
