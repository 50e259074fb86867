use std::collections::HashMap;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::Result;
use crate::modules::prorata::models::{validate_processor_fee, RenewalAnchor};

/// Prefix of every plugin option stored in the WordPress options table
pub const OPTION_PREFIX: &str = "dssa_pmpro_helper_";

pub const KEY_RENEWAL_MONTH: &str = "annual_renewal_month";
pub const KEY_RENEWAL_DAY: &str = "annual_renewal_day";
pub const KEY_THRESHOLD_DAYS: &str = "prorata_threshold_days";
pub const KEY_PROCESSOR_PERCENTAGE: &str = "paystack_percentage";
pub const KEY_PROCESSOR_FIXED: &str = "paystack_fixed";
pub const KEY_FEE_PASSTHROUGH: &str = "enable_fee_passthrough";

pub const FEE_SETTING_KEYS: [&str; 6] = [
    KEY_RENEWAL_MONTH,
    KEY_RENEWAL_DAY,
    KEY_THRESHOLD_DAYS,
    KEY_PROCESSOR_PERCENTAGE,
    KEY_PROCESSOR_FIXED,
    KEY_FEE_PASSTHROUGH,
];

/// Full option name for a setting key, e.g. `dssa_pmpro_helper_paystack_fixed`
pub fn option_name(key: &str) -> String {
    format!("{}{}", OPTION_PREFIX, key)
}

/// Configured pricing rules for new memberships
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeSettings {
    pub annual_renewal_month: u32,
    pub annual_renewal_day: u32,
    pub prorata_threshold_days: u32,
    /// Card processor percentage fee (Paystack), 0 <= p < 100
    pub paystack_percentage: Decimal,
    /// Card processor fixed fee per transaction
    pub paystack_fixed: Decimal,
    /// Pass card processor fees on to the member
    pub enable_fee_passthrough: bool,
}

impl Default for FeeSettings {
    fn default() -> Self {
        Self {
            annual_renewal_month: 3,
            annual_renewal_day: 1,
            prorata_threshold_days: 14,
            paystack_percentage: Decimal::new(29, 1),
            paystack_fixed: Decimal::new(100, 2),
            enable_fee_passthrough: true,
        }
    }
}

impl FeeSettings {
    pub fn anchor(&self) -> Result<RenewalAnchor> {
        RenewalAnchor::new(self.annual_renewal_month, self.annual_renewal_day)
    }

    /// Save-time validation; the same rules the calculator enforces
    pub fn validate(&self) -> Result<()> {
        self.anchor()?;
        validate_processor_fee(self.paystack_percentage, self.paystack_fixed)
    }

    /// Build settings from raw option values keyed by setting key.
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_options(options: &HashMap<String, String>) -> Self {
        let defaults = Self::default();

        Self {
            annual_renewal_month: parse_or(options, KEY_RENEWAL_MONTH, defaults.annual_renewal_month),
            annual_renewal_day: parse_or(options, KEY_RENEWAL_DAY, defaults.annual_renewal_day),
            prorata_threshold_days: parse_or(
                options,
                KEY_THRESHOLD_DAYS,
                defaults.prorata_threshold_days,
            ),
            paystack_percentage: parse_or(
                options,
                KEY_PROCESSOR_PERCENTAGE,
                defaults.paystack_percentage,
            ),
            paystack_fixed: parse_or(options, KEY_PROCESSOR_FIXED, defaults.paystack_fixed),
            enable_fee_passthrough: options
                .get(KEY_FEE_PASSTHROUGH)
                .map(|v| parse_flag(v))
                .unwrap_or(defaults.enable_fee_passthrough),
        }
    }

    /// Raw option values keyed by setting key, as WordPress stores them
    pub fn to_options(&self) -> Vec<(&'static str, String)> {
        vec![
            (KEY_RENEWAL_MONTH, self.annual_renewal_month.to_string()),
            (KEY_RENEWAL_DAY, self.annual_renewal_day.to_string()),
            (KEY_THRESHOLD_DAYS, self.prorata_threshold_days.to_string()),
            (KEY_PROCESSOR_PERCENTAGE, self.paystack_percentage.to_string()),
            (KEY_PROCESSOR_FIXED, self.paystack_fixed.to_string()),
            (
                KEY_FEE_PASSTHROUGH,
                (if self.enable_fee_passthrough { "1" } else { "0" }).to_string(),
            ),
        ]
    }
}

fn parse_or<T: FromStr + Copy>(options: &HashMap<String, String>, key: &str, default: T) -> T {
    match options.get(key) {
        None => default,
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                warn!("Ignoring unparsable setting {}={:?}", option_name(key), raw);
                default
            }
        },
    }
}

// WordPress checkboxes store "1" when ticked and "" or "0" otherwise
fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
