use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Query for the settings page fee calculator
#[derive(Debug, Deserialize)]
pub struct ProcessorFeePreviewQuery {
    #[serde(default = "default_preview_amount")]
    pub amount: Decimal,
}

/// The settings page shows an R 300 membership by default
pub fn default_preview_amount() -> Decimal {
    Decimal::new(300, 0)
}

/// What a member is charged for `amount` once card fees are passed through
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessorFeePreview {
    pub amount: Decimal,
    pub total: Decimal,
    pub fee: Decimal,
    /// Fee as a percentage of the total charged
    pub effective_fee_percentage: Decimal,
    pub formula: String,
}
