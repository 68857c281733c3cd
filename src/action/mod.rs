mod grounded;
mod joint;
mod enumerator;

pub use grounded::*;
pub use joint::*;
pub use enumerator::*;
