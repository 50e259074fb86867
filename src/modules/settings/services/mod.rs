pub mod fee_settings_service;

pub use fee_settings_service::FeeSettingsService;
