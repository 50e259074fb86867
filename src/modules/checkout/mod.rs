pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{CheckoutPricing, CheckoutSelection, PaymentStatus, RegistrationSnapshot};
pub use repositories::{MySqlSnapshotRepository, SnapshotRepository};
pub use services::CheckoutService;
