use thiserror::Error;

/// Errors raised by [`BimatrixSolver`](crate::solver::BimatrixSolver)
/// implementations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError{
    #[error("Payoff matrices have mismatched shapes: {rows_a}x{cols_a} vs {rows_b}x{cols_b}")]
    ShapeMismatch{
        rows_a: usize,
        cols_a: usize,
        rows_b: usize,
        cols_b: usize,
    },
    /// A game where some player has no action has no equilibrium to report.
    #[error("Degenerate game of shape {rows}x{cols} has no equilibrium")]
    DegenerateGame{
        rows: usize,
        cols: usize,
    },
    #[error("Solver failed: {explanation}")]
    Failure{
        explanation: String,
    },
}
