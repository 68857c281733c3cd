use std::marker::PhantomData;
use crate::action::{ActionEnumerator, JointAction};
use crate::backup::{BackupOperator, resolve_opponent};
use crate::error::BackupError;
use crate::q_source::{QSource, QSourceMap};
use crate::scheme::{AgentRoleMap, GameScheme};

/// Cooperative ("friend") backup operator: the backed-up value is the maximum
/// of the evaluated agent's own Q over the full joint action space, assuming
/// the opponent helps to reach it. Needs no equilibrium solver.
pub struct MaxQ<S: GameScheme, E: ActionEnumerator<S>>{
    enumerator: E,
    _scheme: PhantomData<S>,
}

impl<S: GameScheme, E: ActionEnumerator<S>> MaxQ<S, E>{
    pub fn new(enumerator: E) -> Self{
        Self{
            enumerator,
            _scheme: PhantomData,
        }
    }

    pub fn enumerator(&self) -> &E{
        &self.enumerator
    }
}

impl<S: GameScheme, E: ActionEnumerator<S>> BackupOperator<S> for MaxQ<S, E>{
    fn perform_backup<M: QSourceMap<S>>(
        &self,
        state: &S::State,
        for_agent: &S::AgentId,
        agent_definitions: &AgentRoleMap<S>,
        q_sources: &M,
    ) -> Result<f64, BackupError<S>> {

        let opponent = resolve_opponent::<S>(for_agent, agent_definitions)?;
        let evaluated_q_source = q_sources.q_source(for_agent)?;

        let evaluated_spec = agent_definitions.get(for_agent)
            .ok_or_else(|| BackupError::UnknownAgent {agent: for_agent.clone()})?;
        let opponent_spec = agent_definitions.get(opponent)
            .ok_or_else(|| BackupError::UnknownAgent {agent: opponent.clone()})?;

        let evaluated_actions = self.enumerator.list_actions(state, for_agent, evaluated_spec)?;
        let opponent_actions = self.enumerator.list_actions(state, opponent, opponent_spec)?;

        let mut max_q = f64::NEG_INFINITY;
        let mut any_joint_action = false;

        for evaluated_action in &evaluated_actions{
            for opponent_action in &opponent_actions{
                let joint_action = JointAction::new(
                    evaluated_action.clone(), opponent_action.clone());
                let q = evaluated_q_source.q_value(state, &joint_action)?.q;
                if q > max_q{
                    max_q = q;
                }
                any_joint_action = true;
            }
        }

        if !any_joint_action{
            #[cfg(feature = "log_warn")]
            log::warn!("MaxQ backup for agent {} found an empty joint action space", for_agent);
            return Err(BackupError::NoActionAvailable {
                context: format!("MaxQ backup for agent {for_agent}"),
            });
        }

        Ok(max_q)
    }
}
