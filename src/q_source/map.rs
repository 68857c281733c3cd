use std::collections::HashMap;
use crate::error::BackupError;
use crate::q_source::QSource;
use crate::scheme::GameScheme;

/// Lookup resolving the Q-value source of each agent taking part in the game.
pub trait QSourceMap<S: GameScheme>{
    type Source: QSource<S>;

    fn q_source(&self, agent: &S::AgentId) -> Result<&Self::Source, BackupError<S>>;
}

impl<S: GameScheme, Q: QSource<S>> QSourceMap<S> for HashMap<S::AgentId, Q>{
    type Source = Q;

    fn q_source(&self, agent: &S::AgentId) -> Result<&Self::Source, BackupError<S>> {
        self.get(agent).ok_or_else(|| BackupError::MissingQSource {
            agent: agent.clone(),
        })
    }
}
