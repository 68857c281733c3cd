use std::fmt::{Display, Formatter};
use crate::action::GroundedAction;
use crate::scheme::GameScheme;

/// Ordered pair of grounded actions executed simultaneously, one per agent.
/// The first entry always belongs to the agent being evaluated by the backup
/// operator, the second to its opponent. Restricted to exactly two entries.
#[derive(Debug, Clone)]
pub struct JointAction<S: GameScheme>{
    evaluated: GroundedAction<S>,
    opponent: GroundedAction<S>,
}

impl<S: GameScheme> JointAction<S>{
    pub fn new(evaluated: GroundedAction<S>, opponent: GroundedAction<S>) -> Self{
        Self{evaluated, opponent}
    }

    /// Action of the agent the backup is performed for.
    pub fn evaluated(&self) -> &GroundedAction<S>{
        &self.evaluated
    }
    /// Action of the other agent.
    pub fn opponent(&self) -> &GroundedAction<S>{
        &self.opponent
    }

    /// Action of the given agent, if it takes part in this profile.
    pub fn action_of(&self, agent: &S::AgentId) -> Option<&S::ActionType>{
        if self.evaluated.agent() == agent{
            Some(self.evaluated.action())
        } else if self.opponent.agent() == agent{
            Some(self.opponent.action())
        } else {
            None
        }
    }
}

impl<S: GameScheme> PartialEq for JointAction<S>
where S::ActionType: PartialEq{
    fn eq(&self, other: &Self) -> bool {
        self.evaluated == other.evaluated && self.opponent == other.opponent
    }
}

impl<S: GameScheme> Display for JointAction<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.evaluated, self.opponent)
    }
}
