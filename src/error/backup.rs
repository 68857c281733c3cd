use thiserror::Error;
use crate::error::{DataError, SolverError};
use crate::scheme::GameScheme;

/// Top level crate error, constructed from more specific error.
///
/// Collaborator failures are wrapped in source-preserving variants and
/// propagate to the caller untouched; the operators perform no retries and
/// never substitute a fallback value.
#[derive(Debug, Clone, Error)]
pub enum BackupError<S: GameScheme>{
    /// The backup operators are defined only for two agents; raised before any
    /// collaborator is invoked. This is a misuse of the API by the caller.
    #[error("Backup operator is defined only for two agents, but {agent_count} are defined")]
    InvalidConfiguration{
        agent_count: usize
    },
    /// The evaluated agent is not a key of the agent role definitions.
    #[error("Agent {agent} is absent from the agent definitions")]
    UnknownAgent{
        agent: S::AgentId
    },
    /// No Q-value source registered for an agent that is part of the game.
    #[error("No Q source registered for agent {agent}")]
    MissingQSource{
        agent: S::AgentId
    },
    /// Error occurring in specific game logic, defined in generic parameter
    /// `S:` [`GameScheme`](crate::scheme::GameScheme). Typically raised by the
    /// action enumerator or a Q-value source.
    #[error("Game error: {source}")]
    Game{
        #[source]
        source: S::GameErrorType
    },
    /// Error raised by the bimatrix equilibrium solver.
    #[error("Equilibrium solver error: {source}")]
    Solver{
        #[source]
        source: SolverError
    },
    /// Error in general data processing, e.g. ragged matrix input.
    #[error("Data error: {source}")]
    Data{
        #[source]
        source: DataError
    },
    /// Special error for operators that need at least one joint action and
    /// found none.
    #[error("Impossible action")]
    NoActionAvailable{
        context: String
    },
    /// Custom error to return if error does not fit any other category.
    #[error("Custom: {0}")]
    Custom(String),
}

impl<S: GameScheme> From<SolverError> for BackupError<S>{
    fn from(source: SolverError) -> Self {
        Self::Solver {source}
    }
}
