use std::collections::HashMap;
use std::fmt::Debug;
use crate::scheme::action::Action;
use crate::scheme::identifier::AgentIdentifier;
use crate::error::InternalGameError;

/// Trait locking game scheme parameters, to ensure operators and their
/// collaborators (enumerator, Q-sources, solver) agree on the types in play.
///
/// The state is opaque here; it is only handed through to the collaborators.
pub trait GameScheme: Clone + Debug + Send + Sync + 'static{
    /// Game state token. Never inspected by the operators themselves.
    type State: Debug + Clone + Send + Sync;
    type ActionType: Action;
    /// Action-type specification of an agent role, consumed by the
    /// [`ActionEnumerator`](crate::action::ActionEnumerator) to ground actions.
    type ActionSpec: Debug + Clone + Send + Sync;
    type AgentId: AgentIdentifier;
    type GameErrorType: InternalGameError<Self>;
}

/// Mapping from agent identifier to its action-type specification.
/// Exactly the set of agents participating in the game; the backup operators
/// require it to contain exactly two entries.
pub type AgentRoleMap<S> = HashMap<<S as GameScheme>::AgentId, <S as GameScheme>::ActionSpec>;
