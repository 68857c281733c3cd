use std::fmt::{Debug, Display};

/// This trait does not do anything particular, however it marks a type as
/// usable as a single agent's move in the game.
pub trait Action: Debug + Send + Clone + Display{}
