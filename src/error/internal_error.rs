use std::error::Error;
use std::fmt::Debug;
use crate::scheme::GameScheme;

pub trait InternalGameError<S: GameScheme>: Error + Clone + PartialEq + Debug + Send{

}


impl<T: Error + Clone + PartialEq + Debug + Send, S: GameScheme> InternalGameError<S> for T{

}
