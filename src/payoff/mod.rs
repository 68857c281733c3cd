mod q_value;
mod matrix;

pub use q_value::*;
pub use matrix::*;
