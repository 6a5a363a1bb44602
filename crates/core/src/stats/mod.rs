//! Stats module - the aggregation engine and its service wrapper.

mod stats_model;
mod stats_service;

#[cfg(test)]
mod stats_model_tests;

// Re-export the public interface
pub use stats_model::{
    CategoryBreakdown, ExpenseByCategory, IncomeVsExpense, Summary, TypeBreakdown,
};
pub use stats_service::{StatsService, StatsServiceTrait};
