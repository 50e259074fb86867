//! Pro-rata membership fee service
//!
//! Prices new memberships against a fixed annual renewal date, passing card
//! processor fees through to the member, and records what was charged.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::checkout;
pub use modules::levels;
pub use modules::prorata;
pub use modules::settings;
