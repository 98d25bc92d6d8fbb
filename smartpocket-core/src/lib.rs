//! smartpocket-core: domain types shared by the parsers and the CLI

pub mod finance;
pub mod goals;
pub mod summary;

pub use finance::{Category, Direction, Transaction, UnknownKey};
pub use goals::{GoalName, GoalNameLookup, SavingsGoal, goal_key};
pub use summary::{Summary, balance};
