pub mod models;
pub mod repositories;

pub use models::MembershipLevel;
pub use repositories::{LevelRepository, MySqlLevelRepository};
