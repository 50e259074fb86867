pub mod level_repository;

pub use level_repository::{LevelRepository, MySqlLevelRepository};
