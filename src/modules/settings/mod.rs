pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::FeeSettings;
pub use repositories::{MySqlSettingsRepository, SettingsRepository};
pub use services::FeeSettingsService;
