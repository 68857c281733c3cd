mod action;
mod identifier;
mod game_scheme;

pub use action::*;
pub use identifier::*;
pub use game_scheme::*;
