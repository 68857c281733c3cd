//! # cocoq
//!
//!
//! Crate providing value backup operators for two-agent stochastic games,
//! to be plugged into multi-agent value or policy iteration loops.
//! The flagship operator is CoCo-Q \[1\], which blends the best attainable joint
//! welfare with the Nash value of the competitive remainder of the game.
//! The cooperative ([`MaxQ`](crate::backup::MaxQ)) and adversarial
//! ([`MinMaxQ`](crate::backup::MinMaxQ)) operators are provided as well.
//!
//! Action enumeration, Q-value estimation and bimatrix equilibrium solving are
//! collaborator traits; the operators are parameterized over them and ship no
//! solver of their own.
//!
//! ## Example
//! ```
//! use std::collections::HashMap;
//! use cocoq::backup::{BackupOperator, CocoQ};
//! use cocoq::demo::{DemoAction, DemoAgentId, DemoScheme, DemoActionSpec, DemoEnumerator, FixedValueSolver};
//! use cocoq::payoff::QValue;
//! use cocoq::q_source::TabularQSource;
//!
//! let mut definitions = HashMap::new();
//! definitions.insert(DemoAgentId::Blue, DemoActionSpec{ count: 1 });
//! definitions.insert(DemoAgentId::Red, DemoActionSpec{ count: 1 });
//!
//! let mut q_blue = TabularQSource::<DemoScheme>::new(QValue::exact(0.0));
//! let mut q_red = TabularQSource::<DemoScheme>::new(QValue::exact(0.0));
//! q_blue.insert(0, DemoAction(0), DemoAction(0), QValue::exact(10.0));
//! q_red.insert(0, DemoAction(0), DemoAction(0), QValue::exact(4.0));
//! let mut sources = HashMap::new();
//! sources.insert(DemoAgentId::Blue, q_blue);
//! sources.insert(DemoAgentId::Red, q_red);
//!
//! // in a 1x1 game the only equilibrium pays the single competitive cell
//! let operator = CocoQ::<DemoScheme, _, _>::new(DemoEnumerator{}, FixedValueSolver::new(3.0, -3.0));
//! let value = operator.perform_backup(&0, &DemoAgentId::Blue, &definitions, &sources)
//!     .unwrap();
//! assert_eq!(value, 10.0);
//! ```
//!
//! 1. Sodomka, Eric, et al. "Coco-Q: Learning in Stochastic Games with Side Payments."
//!    Proceedings of the 30th International Conference on Machine Learning (ICML-13). 2013.
//! ## Licence: MIT

/// Traits and markers locking the scheme of a two-agent stochastic game.
pub mod scheme;
/// Grounded and joint actions, with the action enumeration collaborator.
pub mod action;
/// Q-values and dense payoff matrices.
pub mod payoff;
/// Collaborator traits for per-agent Q-value lookup.
pub mod q_source;
/// Collaborator trait for general-sum bimatrix equilibrium solving.
pub mod solver;
/// The backup operators themselves.
pub mod backup;
/// Structures used for error handling in the crate.
pub mod error;
/// Module with demonstration constructions
pub mod demo;
