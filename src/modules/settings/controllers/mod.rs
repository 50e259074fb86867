pub mod settings_controller;

pub use settings_controller::{
    configure, get_fee_settings, processor_fee_preview, update_fee_settings,
};
