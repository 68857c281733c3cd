mod backup;
mod solver;
mod data;
mod internal_error;

pub use backup::*;
pub use solver::*;
pub use data::*;
pub use internal_error::*;
