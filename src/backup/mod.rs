mod coco_q;
mod max_q;
mod min_max_q;

pub use coco_q::*;
pub use max_q::*;
pub use min_max_q::*;

use crate::error::BackupError;
use crate::q_source::QSourceMap;
use crate::scheme::{AgentRoleMap, GameScheme};

/// Operator computing an updated value estimate of a state for one agent,
/// from the agents' current joint-action value (Q) estimates. One step of a
/// multi-agent value/policy iteration loop.
///
/// Operators in this crate are stateless with respect to the call: action
/// lists and payoff matrices are call-local, so concurrent backups for
/// different `(state, agent)` pairs may run fully in parallel.
pub trait BackupOperator<S: GameScheme>{
    fn perform_backup<M: QSourceMap<S>>(
        &self,
        state: &S::State,
        for_agent: &S::AgentId,
        agent_definitions: &AgentRoleMap<S>,
        q_sources: &M,
    ) -> Result<f64, BackupError<S>>;
}

/// Checks the two-agent precondition and resolves the opponent of `for_agent`.
/// Must be called before any collaborator is invoked.
pub(crate) fn resolve_opponent<'a, S: GameScheme>(
    for_agent: &S::AgentId,
    agent_definitions: &'a AgentRoleMap<S>,
) -> Result<&'a S::AgentId, BackupError<S>>{
    if agent_definitions.len() != 2{
        #[cfg(feature = "log_error")]
        log::error!("Backup requested for {} agent definitions, only two are supported",
            agent_definitions.len());
        return Err(BackupError::InvalidConfiguration {
            agent_count: agent_definitions.len(),
        });
    }
    if !agent_definitions.contains_key(for_agent){
        return Err(BackupError::UnknownAgent {
            agent: for_agent.clone(),
        });
    }
    agent_definitions.keys()
        .find(|a| *a != for_agent)
        .ok_or_else(|| BackupError::UnknownAgent {
            agent: for_agent.clone(),
        })
}
