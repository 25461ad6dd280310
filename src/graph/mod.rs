//! Scene graph arena and the collaborators the optimizer consumes.

pub mod defaults;
pub mod model;
pub mod property;
pub mod traverse;
