pub mod fee_settings;
pub mod processor_fee_preview;

pub use fee_settings::{option_name, FeeSettings, FEE_SETTING_KEYS};
pub use processor_fee_preview::{ProcessorFeePreview, ProcessorFeePreviewQuery};
