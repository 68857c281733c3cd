use crate::action::GroundedAction;
use crate::error::BackupError;
use crate::scheme::GameScheme;

/// Collaborator producing the full list of legal grounded actions of one agent
/// in a state.
///
/// Content must be deterministic within a call; the order of the returned list
/// defines matrix row/column indices and only needs to be internally
/// consistent, it carries no semantic meaning.
pub trait ActionEnumerator<S: GameScheme>{
    fn list_actions(
        &self,
        state: &S::State,
        agent: &S::AgentId,
        spec: &S::ActionSpec,
    ) -> Result<Vec<GroundedAction<S>>, BackupError<S>>;
}

/// Enumerator for schemes whose action specification is already the listed set
/// of actions (the tabular case). Grounds every listed action to the agent,
/// in listing order, regardless of state.
#[derive(Debug, Clone, Default)]
pub struct ListedActionEnumerator{}

impl ListedActionEnumerator{
    pub fn new() -> Self{
        Self{}
    }
}

impl<S> ActionEnumerator<S> for ListedActionEnumerator
where S: GameScheme<ActionSpec = Vec<<S as GameScheme>::ActionType>>{
    fn list_actions(
        &self,
        _state: &S::State,
        agent: &S::AgentId,
        spec: &S::ActionSpec,
    ) -> Result<Vec<GroundedAction<S>>, BackupError<S>> {
        Ok(spec.iter()
            .map(|a| GroundedAction::new(agent.clone(), a.clone()))
            .collect())
    }
}

#[cfg(test)]
mod tests{
    use crate::action::{ActionEnumerator, GroundedAction, ListedActionEnumerator};
    use crate::demo::{DemoAction, DemoAgentId, DemoError};
    use crate::scheme::GameScheme;

    #[derive(Clone, Debug)]
    struct ListedScheme{}

    impl GameScheme for ListedScheme{
        type State = u32;
        type ActionType = DemoAction;
        type ActionSpec = Vec<DemoAction>;
        type AgentId = DemoAgentId;
        type GameErrorType = DemoError;
    }

    #[test]
    fn grounds_listed_actions_in_listing_order(){
        let spec = vec![DemoAction(4), DemoAction(0), DemoAction(2)];
        let actions: Vec<GroundedAction<ListedScheme>> = ListedActionEnumerator::new()
            .list_actions(&7, &DemoAgentId::Red, &spec)
            .unwrap();
        assert_eq!(actions.len(), 3);
        assert_eq!(actions[0].action(), &DemoAction(4));
        assert_eq!(actions[2].action(), &DemoAction(2));
        assert!(actions.iter().all(|a| a.agent() == &DemoAgentId::Red));
    }
}
