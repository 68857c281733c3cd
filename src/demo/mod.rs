//! Demonstration scheme with stub collaborators, used in documentation
//! examples and in tests of the backup operators. The game state is a bare
//! `u32` token and every agent's action specification is just the number of
//! actions it may ground.

use std::fmt::{Display, Formatter};
use crate::action::{ActionEnumerator, GroundedAction};
use crate::error::{BackupError, SolverError};
use crate::payoff::PayoffMatrix;
use crate::scheme::{Action, AgentIdentifier, GameScheme};
use crate::solver::{BimatrixSolver, EquilibriumPayoffs};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DemoAction(pub u8);
impl Display for DemoAction{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
impl Action for DemoAction{}

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, )]
pub enum DemoAgentId{
    Blue,
    Red,
    Green,
}
impl Display for DemoAgentId{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl AgentIdentifier for DemoAgentId{}

#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("demo game error {}", .0)]
pub struct DemoError(pub u8);

/// Action specification of a demo agent role: how many actions it can ground.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DemoActionSpec{
    pub count: u8,
}

#[derive(Clone, Debug)]
pub struct DemoScheme{}

impl GameScheme for DemoScheme{
    type State = u32;
    type ActionType = DemoAction;
    type ActionSpec = DemoActionSpec;
    type AgentId = DemoAgentId;
    type GameErrorType = DemoError;
}

/// Grounds actions `0..count` for the agent, whatever the state.
#[derive(Debug, Clone, Default)]
pub struct DemoEnumerator{}

impl ActionEnumerator<DemoScheme> for DemoEnumerator{
    fn list_actions(
        &self,
        _state: &u32,
        agent: &DemoAgentId,
        spec: &DemoActionSpec,
    ) -> Result<Vec<GroundedAction<DemoScheme>>, BackupError<DemoScheme>> {
        Ok((0..spec.count)
            .map(|a| GroundedAction::new(*agent, DemoAction(a)))
            .collect())
    }
}

/// Stub solver reporting preset equilibrium payoffs after validating the
/// matrices, in place of a real bimatrix solver (e.g. support enumeration).
#[derive(Debug, Copy, Clone)]
pub struct FixedValueSolver{
    payoffs: EquilibriumPayoffs,
}

impl FixedValueSolver{
    pub fn new(row_value: f64, column_value: f64) -> Self{
        Self{
            payoffs: EquilibriumPayoffs::new(row_value, column_value),
        }
    }
}

impl BimatrixSolver for FixedValueSolver{
    fn solve(
        &self,
        payoff_row: &PayoffMatrix,
        payoff_column: &PayoffMatrix,
    ) -> Result<EquilibriumPayoffs, SolverError> {
        if payoff_row.shape() != payoff_column.shape(){
            return Err(SolverError::ShapeMismatch {
                rows_a: payoff_row.rows(),
                cols_a: payoff_row.cols(),
                rows_b: payoff_column.rows(),
                cols_b: payoff_column.cols(),
            });
        }
        if payoff_row.is_degenerate(){
            return Err(SolverError::DegenerateGame {
                rows: payoff_row.rows(),
                cols: payoff_row.cols(),
            });
        }
        Ok(self.payoffs)
    }
}
