use std::fmt::{Display, Formatter};
use crate::scheme::GameScheme;

/// A concrete, fully parameterized action bound to the agent performing it.
/// This is just named tuple (pair in this case).
#[derive(Debug, Clone)]
pub struct GroundedAction<S: GameScheme>{
    pub agent: S::AgentId,
    pub action: S::ActionType,
}

impl<S: GameScheme> GroundedAction<S>{
    pub fn new(agent: S::AgentId, action: S::ActionType) -> Self { Self{agent, action}}

    pub fn action(&self) -> &S::ActionType { &self.action}
    pub fn agent(&self) -> &S::AgentId {&self.agent}
}

impl<S: GameScheme> PartialEq for GroundedAction<S>
where S::ActionType: PartialEq{
    fn eq(&self, other: &Self) -> bool {
        self.agent == other.agent && self.action == other.action
    }
}

impl<S: GameScheme> Display for GroundedAction<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[agent: {} performs action {}]", self.agent, self.action)
    }
}
