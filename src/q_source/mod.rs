mod source;
mod map;
mod tabular;

pub use source::*;
pub use map::*;
pub use tabular::*;
