//! The property-value optimizer: classification, transform folding, stroke reduction.

pub(crate) mod canonicalize;
pub mod classify;
pub mod describe;
pub mod pass;
pub(crate) mod stroke;
