//! Command module
//!
//! Callables, their declared signatures, type resolution and the resulting
//! command descriptors

pub mod descriptor;
pub mod function;
pub mod inspect;
pub mod types;

pub use descriptor::*;
pub use function::*;
pub use inspect::*;
pub use types::*;
