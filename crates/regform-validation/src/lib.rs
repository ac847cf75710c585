//! regform validation primitives
//!
//! Pure validation functions with no knowledge of any particular form.
//! The registration schema in `regform` composes these into field constraints.

pub mod date;
pub mod email;
pub mod phone;
pub mod string;

// Re-export all validators
pub use date::*;
pub use email::*;
pub use phone::*;
pub use string::*;
