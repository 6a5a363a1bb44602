//! MongoDB storage implementation for financial goals.

mod model;
mod repository;

pub use model::GoalDocument;
pub use repository::{GoalRepository, COLLECTION};
