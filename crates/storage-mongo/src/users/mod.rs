//! MongoDB storage implementation for users.

mod model;
mod repository;

pub use model::UserDocument;
pub use repository::{UserRepository, COLLECTION};
