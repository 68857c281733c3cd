use std::marker::PhantomData;
use crate::action::{ActionEnumerator, JointAction};
use crate::backup::{BackupOperator, resolve_opponent};
use crate::error::BackupError;
use crate::payoff::PayoffMatrix;
use crate::q_source::{QSource, QSourceMap};
use crate::scheme::{AgentRoleMap, GameScheme};
use crate::solver::BimatrixSolver;

/// The CoCo-Q backup operator for sequential stochastic games \[1\].
///
/// The backed-up value of the evaluated agent blends two terms:
/// * half of the best attainable joint welfare `max(q1 + q2)` over all joint
///   actions (its equal share of the cooperative optimum), and
/// * the Nash value of the purely competitive remainder, the zero-sum game
///   obtained by splitting every joint payoff around its mean:
///   `payoff1 = (q1 - q2)/2`, `payoff2 = (q2 - q1)/2`.
///
/// The equilibrium of the competitive game is delegated to the
/// [`BimatrixSolver`](crate::solver::BimatrixSolver) given at construction;
/// only the row (evaluated agent's) value is consumed.
///
/// 1. Sodomka, Eric, et al. "Coco-Q: Learning in Stochastic Games with Side Payments."
///    Proceedings of the 30th International Conference on Machine Learning (ICML-13). 2013.
pub struct CocoQ<S: GameScheme, E: ActionEnumerator<S>, V: BimatrixSolver>{
    enumerator: E,
    solver: V,
    _scheme: PhantomData<S>,
}

impl<S: GameScheme, E: ActionEnumerator<S>, V: BimatrixSolver> CocoQ<S, E, V>{
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
for CocoQ<S, E, V>{
    fn perform_backup<M: QSourceMap<S>>(
        &self,
        state: &S::State,
        for_agent: &S::AgentId,
        agent_definitions: &AgentRoleMap<S>,
        q_sources: &M,
    ) -> Result<f64, BackupError<S>> {

        let opponent = resolve_opponent::<S>(for_agent, agent_definitions)?;

        let evaluated_q_source = q_sources.q_source(for_agent)?;
        let opponent_q_source = q_sources.q_source(opponent)?;

        let evaluated_spec = agent_definitions.get(for_agent)
            .ok_or_else(|| BackupError::UnknownAgent {agent: for_agent.clone()})?;
        let opponent_spec = agent_definitions.get(opponent)
            .ok_or_else(|| BackupError::UnknownAgent {agent: opponent.clone()})?;

        let evaluated_actions = self.enumerator.list_actions(state, for_agent, evaluated_spec)?;
        let opponent_actions = self.enumerator.list_actions(state, opponent, opponent_spec)?;

        #[cfg(feature = "log_debug")]
        log::debug!("CoCo-Q backup for agent {} on a {}x{} joint action space",
            for_agent, evaluated_actions.len(), opponent_actions.len());

        let mut payoff_evaluated = PayoffMatrix::zeroed(
            evaluated_actions.len(), opponent_actions.len());
        let mut payoff_opponent = PayoffMatrix::zeroed(
            evaluated_actions.len(), opponent_actions.len());

        let mut maxmax = f64::NEG_INFINITY;

        for (i, evaluated_action) in evaluated_actions.iter().enumerate(){
            for (j, opponent_action) in opponent_actions.iter().enumerate(){
                let joint_action = JointAction::new(
                    evaluated_action.clone(), opponent_action.clone());

                let q1 = evaluated_q_source.q_value(state, &joint_action)?.q;
                let q2 = opponent_q_source.q_value(state, &joint_action)?.q;

                payoff_evaluated[(i, j)] = (q1 - q2) / 2.0;
                payoff_opponent[(i, j)] = (q2 - q1) / 2.0;

                if q1 + q2 > maxmax{
                    maxmax = q1 + q2;
                }
            }
        }

        let minmax = self.solver.solve(&payoff_evaluated, &payoff_opponent)?.row_value;

        let coco_q = (maxmax / 2.0) + minmax;
        #[cfg(feature = "log_debug")]
        log::debug!("CoCo-Q backup for agent {}: maxmax = {}, minmax = {}, value = {}",
            for_agent, maxmax, minmax, coco_q);

        Ok(coco_q)
    }
}

#[cfg(test)]
mod tests{
    use std::cell::RefCell;
    use std::collections::HashMap;
    use crate::action::{ActionEnumerator, GroundedAction};
    use crate::backup::{BackupOperator, CocoQ};
    use crate::demo::{DemoAction, DemoActionSpec, DemoAgentId, DemoEnumerator, DemoScheme, FixedValueSolver};
    use crate::error::{BackupError, SolverError};
    use crate::payoff::{PayoffMatrix, QValue};
    use crate::q_source::TabularQSource;
    use crate::scheme::AgentRoleMap;
    use crate::solver::{BimatrixSolver, EquilibriumPayoffs};

    struct RecordingSolver{
        payoffs: EquilibriumPayoffs,
        calls: RefCell<Vec<(PayoffMatrix, PayoffMatrix)>>,
    }

    impl RecordingSolver{
        fn returning(row_value: f64, column_value: f64) -> Self{
            Self{
                payoffs: EquilibriumPayoffs::new(row_value, column_value),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl BimatrixSolver for RecordingSolver{
        fn solve(&self, payoff_row: &PayoffMatrix, payoff_column: &PayoffMatrix)
            -> Result<EquilibriumPayoffs, SolverError> {
            self.calls.borrow_mut().push((payoff_row.clone(), payoff_column.clone()));
            Ok(self.payoffs)
        }
    }

    struct PanickingEnumerator{}
    impl ActionEnumerator<DemoScheme> for PanickingEnumerator{
        fn list_actions(&self, _state: &u32, _agent: &DemoAgentId, _spec: &DemoActionSpec)
            -> Result<Vec<GroundedAction<DemoScheme>>, BackupError<DemoScheme>> {
            panic!("enumerator invoked although configuration was invalid")
        }
    }

    fn definitions(blue_actions: u8, red_actions: u8) -> AgentRoleMap<DemoScheme>{
        let mut definitions = HashMap::new();
        definitions.insert(DemoAgentId::Blue, DemoActionSpec{count: blue_actions});
        definitions.insert(DemoAgentId::Red, DemoActionSpec{count: red_actions});
        definitions
    }

    /// Tabular sources for both agents with entries keyed by
    /// (evaluated action index, opponent action index) in the given grids.
    fn sources_for_grids(q1: &[&[f64]], q2: &[&[f64]])
        -> HashMap<DemoAgentId, TabularQSource<DemoScheme>>{
        let mut blue = TabularQSource::new(QValue::exact(0.0));
        let mut red = TabularQSource::new(QValue::exact(0.0));
        for (i, (row1, row2)) in q1.iter().zip(q2.iter()).enumerate(){
            for (j, (v1, v2)) in row1.iter().zip(row2.iter()).enumerate(){
                blue.insert(0, DemoAction(i as u8), DemoAction(j as u8), QValue::exact(*v1));
                red.insert(0, DemoAction(i as u8), DemoAction(j as u8), QValue::exact(*v2));
            }
        }
        let mut sources = HashMap::new();
        sources.insert(DemoAgentId::Blue, blue);
        sources.insert(DemoAgentId::Red, red);
        sources
    }

    #[test]
    fn rejects_single_agent_before_any_collaborator_runs(){
        let operator = CocoQ::<DemoScheme, _, _>::new(PanickingEnumerator{}, RecordingSolver::returning(0.0, 0.0));
        let mut definitions = HashMap::new();
        definitions.insert(DemoAgentId::Blue, DemoActionSpec{count: 2});
        let sources: HashMap<DemoAgentId, TabularQSource<DemoScheme>> = HashMap::new();

        let result = operator.perform_backup(&0, &DemoAgentId::Blue, &definitions, &sources);
        assert!(matches!(result, Err(BackupError::InvalidConfiguration {agent_count: 1})));
        assert!(operator.solver().calls.borrow().is_empty());
    }

    #[test]
    fn rejects_agent_absent_from_definitions(){
        let operator = CocoQ::<DemoScheme, _, _>::new(DemoEnumerator{}, RecordingSolver::returning(0.0, 0.0));
        let mut definitions = HashMap::new();
        definitions.insert(DemoAgentId::Red, DemoActionSpec{count: 1});
        definitions.insert(DemoAgentId::Green, DemoActionSpec{count: 1});
        let sources: HashMap<DemoAgentId, TabularQSource<DemoScheme>> = HashMap::new();

        let result = operator.perform_backup(&0, &DemoAgentId::Blue, &definitions, &sources);
        assert!(matches!(result, Err(BackupError::UnknownAgent {agent: DemoAgentId::Blue})));
    }

    #[test]
    fn missing_q_source_is_reported(){
        let operator = CocoQ::<DemoScheme, _, _>::new(DemoEnumerator{}, RecordingSolver::returning(0.0, 0.0));
        let mut sources = HashMap::new();
        sources.insert(DemoAgentId::Blue, TabularQSource::<DemoScheme>::new(QValue::exact(0.0)));

        let result = operator.perform_backup(&0, &DemoAgentId::Blue, &definitions(1, 1), &sources);
        assert!(matches!(result, Err(BackupError::MissingQSource {agent: DemoAgentId::Red})));
    }

    #[test]
    fn single_cell_game_blends_welfare_share_and_equilibrium(){
        let operator = CocoQ::<DemoScheme, _, _>::new(DemoEnumerator{}, RecordingSolver::returning(3.0, -3.0));
        let sources = sources_for_grids(&[&[10.0]], &[&[4.0]]);

        let value = operator.perform_backup(&0, &DemoAgentId::Blue, &definitions(1, 1), &sources)
            .unwrap();
        assert_eq!(value, 10.0);

        let calls = operator.solver().calls.borrow();
        let (evaluated, opponent) = &calls[0];
        assert_eq!(evaluated, &PayoffMatrix::from_rows(vec![vec![3.0]]).unwrap());
        assert_eq!(opponent, &PayoffMatrix::from_rows(vec![vec![-3.0]]).unwrap());
    }

    #[test]
    fn competitive_split_reaches_solver_unchanged(){
        let operator = CocoQ::<DemoScheme, _, _>::new(DemoEnumerator{}, RecordingSolver::returning(1.5, -1.5));
        let sources = sources_for_grids(
            &[&[8.0, 2.0], &[6.0, 10.0]],
            &[&[2.0, 8.0], &[6.0, 0.0]],
        );

        // maxmax = max(10, 10, 12, 10) = 12
        let value = operator.perform_backup(&0, &DemoAgentId::Blue, &definitions(2, 2), &sources)
            .unwrap();
        assert_eq!(value, 12.0 / 2.0 + 1.5);

        let calls = operator.solver().calls.borrow();
        assert_eq!(calls.len(), 1);
        let (evaluated, opponent) = &calls[0];
        assert_eq!(evaluated, &PayoffMatrix::from_rows(
            vec![vec![3.0, -3.0], vec![0.0, 5.0]]).unwrap());
        assert_eq!(opponent, &PayoffMatrix::from_rows(
            vec![vec![-3.0, 3.0], vec![0.0, -5.0]]).unwrap());
    }

    #[test]
    fn split_payoffs_sum_to_zero_cell_by_cell(){
        let operator = CocoQ::<DemoScheme, _, _>::new(DemoEnumerator{}, RecordingSolver::returning(0.0, 0.0));
        let sources = sources_for_grids(
            &[&[1.25, -4.0, 0.5], &[2.0, 7.75, -1.0]],
            &[&[0.75, 3.0, -2.5], &[1.0, -6.25, 4.0]],
        );

        operator.perform_backup(&0, &DemoAgentId::Blue, &definitions(2, 3), &sources).unwrap();

        let calls = operator.solver().calls.borrow();
        let (evaluated, opponent) = &calls[0];
        assert_eq!(evaluated.shape(), (2, 3));
        assert_eq!(opponent.shape(), (2, 3));
        for (a, b) in evaluated.iter().zip(opponent.iter()){
            assert!((a + b).abs() < 1e-12);
        }
        assert!((evaluated[(0, 0)] - (1.25 - 0.75) / 2.0).abs() < 1e-12);
    }

    #[test]
    fn pure_zero_sum_game_reduces_to_equilibrium_value(){
        let operator = CocoQ::<DemoScheme, _, _>::new(DemoEnumerator{}, RecordingSolver::returning(2.25, -2.25));
        let sources = sources_for_grids(
            &[&[4.0, -2.0], &[-6.0, 1.0]],
            &[&[-4.0, 2.0], &[6.0, -1.0]],
        );

        // q1 + q2 vanishes everywhere, so the welfare share is zero
        let value = operator.perform_backup(&0, &DemoAgentId::Blue, &definitions(2, 2), &sources)
            .unwrap();
        assert_eq!(value, 2.25);
    }

    #[test]
    fn exhaustive_scan_finds_welfare_maximum(){
        let q1: Vec<Vec<f64>> = (0..3).map(|i| (0..4)
            .map(|j| ((i * 7 + j * 3) % 11) as f64 - 5.0).collect()).collect();
        let q2: Vec<Vec<f64>> = (0..3).map(|i| (0..4)
            .map(|j| ((i * 5 + j * 2) % 13) as f64 - 6.0).collect()).collect();
        let reference_maxmax = q1.iter().zip(q2.iter())
            .flat_map(|(r1, r2)| r1.iter().zip(r2.iter()).map(|(a, b)| a + b))
            .fold(f64::NEG_INFINITY, f64::max);

        let q1_refs: Vec<&[f64]> = q1.iter().map(Vec::as_slice).collect();
        let q2_refs: Vec<&[f64]> = q2.iter().map(Vec::as_slice).collect();
        let operator = CocoQ::<DemoScheme, _, _>::new(DemoEnumerator{}, RecordingSolver::returning(0.0, 0.0));
        let sources = sources_for_grids(&q1_refs, &q2_refs);

        let value = operator.perform_backup(&0, &DemoAgentId::Blue, &definitions(3, 4), &sources)
            .unwrap();
        assert_eq!(value, reference_maxmax / 2.0);
    }

    #[test]
    fn swapping_agents_transposes_and_negates_competitive_payoffs(){
        let q_blue = [[8.0, 2.0], [6.0, 10.0]];
        let q_red = [[2.0, 8.0], [6.0, 0.0]];

        let blue_operator = CocoQ::<DemoScheme, _, _>::new(DemoEnumerator{}, RecordingSolver::returning(0.0, 0.0));
        let blue_sources = sources_for_grids(
            &[&q_blue[0], &q_blue[1]],
            &[&q_red[0], &q_red[1]],
        );
        let blue_value = blue_operator
            .perform_backup(&0, &DemoAgentId::Blue, &definitions(2, 2), &blue_sources)
            .unwrap();

        // evaluated from Red's side the same grids are indexed (red action, blue action)
        let mut red = TabularQSource::new(QValue::exact(0.0));
        let mut blue = TabularQSource::new(QValue::exact(0.0));
        for i in 0..2{
            for j in 0..2{
                red.insert(0, DemoAction(j as u8), DemoAction(i as u8),
                    QValue::exact(q_red[i][j]));
                blue.insert(0, DemoAction(j as u8), DemoAction(i as u8),
                    QValue::exact(q_blue[i][j]));
            }
        }
        let mut red_sources = HashMap::new();
        red_sources.insert(DemoAgentId::Blue, blue);
        red_sources.insert(DemoAgentId::Red, red);

        let red_operator = CocoQ::<DemoScheme, _, _>::new(DemoEnumerator{}, RecordingSolver::returning(0.0, 0.0));
        let red_value = red_operator
            .perform_backup(&0, &DemoAgentId::Red, &definitions(2, 2), &red_sources)
            .unwrap();

        // with the solver contribution fixed at zero both sides see the same welfare share
        assert_eq!(blue_value, red_value);

        let blue_calls = blue_operator.solver().calls.borrow();
        let red_calls = red_operator.solver().calls.borrow();
        let (blue_payoff, _) = &blue_calls[0];
        let (red_payoff, _) = &red_calls[0];
        for i in 0..2{
            for j in 0..2{
                assert_eq!(red_payoff[(j, i)], -blue_payoff[(i, j)]);
            }
        }
    }

    #[test]
    fn degenerate_action_set_is_delegated_to_solver(){
        let operator = CocoQ::<DemoScheme, _, _>::new(DemoEnumerator{}, FixedValueSolver::new(0.0, 0.0));
        let sources = sources_for_grids(&[], &[]);

        let result = operator.perform_backup(&0, &DemoAgentId::Blue, &definitions(0, 2), &sources);
        assert!(matches!(result,
            Err(BackupError::Solver {source: SolverError::DegenerateGame {rows: 0, cols: 2}})));
    }
}
