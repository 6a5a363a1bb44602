//! Goals module - domain models, services, and traits.

mod goals_model;
mod goals_service;
mod goals_traits;

#[cfg(test)]
mod goals_model_tests;

// Re-export the public interface
pub use goals_model::{FinancialGoal, GoalUpdate, GoalWithProgress, NewGoal};
pub use goals_service::GoalService;
pub use goals_traits::{GoalChanges, GoalRepositoryTrait, GoalServiceTrait};
