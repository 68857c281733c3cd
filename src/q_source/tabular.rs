use std::collections::HashMap;
use std::hash::Hash;
use crate::action::JointAction;
use crate::error::BackupError;
use crate::payoff::QValue;
use crate::q_source::QSource;
use crate::scheme::GameScheme;

/// Exact Q-value source backed by a hash table, for schemes with hashable
/// states and actions.
///
/// Entries are keyed by `(state, evaluated agent's action, opponent's action)`
/// following the order of the queried [`JointAction`]; pairs never inserted
/// report the configured default (e.g. an optimistic initial value).
#[derive(Debug, Clone)]
pub struct TabularQSource<S: GameScheme>
where S::State: Hash + Eq, S::ActionType: Hash + Eq{
    table: HashMap<(S::State, S::ActionType, S::ActionType), QValue>,
    default: QValue,
}

impl<S: GameScheme> TabularQSource<S>
where S::State: Hash + Eq, S::ActionType: Hash + Eq{

    pub fn new(default: QValue) -> Self{
        Self{
            table: HashMap::new(),
            default,
        }
    }

    pub fn insert(
        &mut self,
        state: S::State,
        evaluated_action: S::ActionType,
        opponent_action: S::ActionType,
        q: QValue,
    ) -> Option<QValue>{
        self.table.insert((state, evaluated_action, opponent_action), q)
    }

    pub fn len(&self) -> usize{
        self.table.len()
    }
    pub fn is_empty(&self) -> bool{
        self.table.is_empty()
    }
}

impl<S: GameScheme> QSource<S> for TabularQSource<S>
where S::State: Hash + Eq, S::ActionType: Hash + Eq{
    fn q_value(
        &self,
        state: &S::State,
        joint_action: &JointAction<S>,
    ) -> Result<QValue, BackupError<S>> {
        let key = (
            state.clone(),
            joint_action.evaluated().action().clone(),
            joint_action.opponent().action().clone(),
        );
        Ok(self.table.get(&key).copied().unwrap_or(self.default))
    }
}
