use std::marker::PhantomData;
use crate::action::{ActionEnumerator, JointAction};
use crate::backup::{BackupOperator, resolve_opponent};
use crate::error::BackupError;
use crate::payoff::PayoffMatrix;
use crate::q_source::{QSource, QSourceMap};
use crate::scheme::{AgentRoleMap, GameScheme};
use crate::solver::BimatrixSolver;

/// Adversarial ("foe") backup operator: the backed-up value is the evaluated
/// agent's equilibrium payoff of the zero-sum game built from its own Q alone
/// (`payoff2 = -q1`), assuming the opponent plays to hurt it.
pub struct MinMaxQ<S: GameScheme, E: ActionEnumerator<S>, V: BimatrixSolver>{
    enumerator: E,
    solver: V,
    _scheme: PhantomData<S>,
}

impl<S: GameScheme, E: ActionEnumerator<S>, V: BimatrixSolver> MinMaxQ<S, E, V>{
    pub fn new(enumerator: E, solver: V) -> Self{
        Self{
            enumerator,
            solver,
            _scheme: PhantomData,
        }
    }

    pub fn enumerator(&self) -> &E{
        &self.enumerator
    }
    pub fn solver(&self) -> &V{
        &self.solver
    }
}

impl<S: GameScheme, E: ActionEnumerator<S>, V: BimatrixSolver> BackupOperator<S>
for MinMaxQ<S, E, V>{
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

        let mut payoff_evaluated = PayoffMatrix::zeroed(
            evaluated_actions.len(), opponent_actions.len());
        let mut payoff_opponent = PayoffMatrix::zeroed(
            evaluated_actions.len(), opponent_actions.len());

        for (i, evaluated_action) in evaluated_actions.iter().enumerate(){
            for (j, opponent_action) in opponent_actions.iter().enumerate(){
                let joint_action = JointAction::new(
                    evaluated_action.clone(), opponent_action.clone());
                let q = evaluated_q_source.q_value(state, &joint_action)?.q;
                payoff_evaluated[(i, j)] = q;
                payoff_opponent[(i, j)] = -q;
            }
        }

        Ok(self.solver.solve(&payoff_evaluated, &payoff_opponent)?.row_value)
    }
}
