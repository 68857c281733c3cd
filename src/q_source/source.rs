use crate::action::JointAction;
use crate::error::BackupError;
use crate::payoff::QValue;
use crate::scheme::GameScheme;

/// Q-value oracle of a single agent: estimated value of performing a joint
/// action in a state, from this agent's perspective.
///
/// Implementations may be exact lookup tables or trained function estimators;
/// the backup operators treat them as opaque numeric oracles and propagate
/// their failures unmodified.
pub trait QSource<S: GameScheme>{
    fn q_value(
        &self,
        state: &S::State,
        joint_action: &JointAction<S>,
    ) -> Result<QValue, BackupError<S>>;
}

impl<S: GameScheme, T: QSource<S>> QSource<S> for Box<T>{
    fn q_value(
        &self,
        state: &S::State,
        joint_action: &JointAction<S>,
    ) -> Result<QValue, BackupError<S>> {
        self.as_ref().q_value(state, joint_action)
    }
}
