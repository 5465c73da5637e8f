//! Product storage concerns: how products are keyed and validated in the
//! store actor, and the errors the store surfaces.

pub mod entity;
pub mod error;

pub use error::*;
