use crate::error::SolverError;
use crate::payoff::PayoffMatrix;

/// Equilibrium payoffs of a bimatrix game, one value per player.
///
/// Solvers able to find multiple equilibria must select one canonical
/// equilibrium themselves; the backup operators do not disambiguate.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "speedy", derive(speedy::Writable, speedy::Readable))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquilibriumPayoffs{
    /// Value to the row player (the agent the backup is performed for).
    pub row_value: f64,
    /// Value to the column player. CoCo-Q discards it.
    pub column_value: f64,
}

impl EquilibriumPayoffs{
    pub fn new(row_value: f64, column_value: f64) -> Self{
        Self{row_value, column_value}
    }
}

/// Collaborator computing a Nash equilibrium of a general-sum bimatrix game.
///
/// Implementations (e.g. support enumeration, Lemke-Howson) are outside this
/// crate; they must accept arbitrary real matrices of equal shape with at
/// least one action per player and terminate with finite values for finite
/// inputs. Matrices with an empty action set may be rejected with
/// [`SolverError::DegenerateGame`](crate::error::SolverError::DegenerateGame).
pub trait BimatrixSolver{
    fn solve(
        &self,
        payoff_row: &PayoffMatrix,
        payoff_column: &PayoffMatrix,
    ) -> Result<EquilibriumPayoffs, SolverError>;
}
