pub mod checkout_controller;

pub use checkout_controller::{complete_registration, configure, list_levels, quote};
