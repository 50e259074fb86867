use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::core::{AppError, Currency, Result};
use crate::modules::prorata::ProrataCalculator;
use crate::modules::settings::models::{FeeSettings, ProcessorFeePreview};
use crate::modules::settings::repositories::SettingsRepository;

/// Service for reading and updating fee settings
pub struct FeeSettingsService {
    settings_repo: Arc<dyn SettingsRepository>,
    currency: Currency,
}

impl FeeSettingsService {
    pub fn new(settings_repo: Arc<dyn SettingsRepository>, currency: Currency) -> Self {
        Self {
            settings_repo,
            currency,
        }
    }

    pub async fn get(&self) -> Result<FeeSettings> {
        self.settings_repo.load_fee_settings().await
    }

    /// Validate and persist new settings. Invalid settings are never written.
    pub async fn update(&self, settings: FeeSettings) -> Result<FeeSettings> {
        if let Err(err) = settings.validate() {
            warn!("Rejected fee settings update: {}", err);
            return Err(err);
        }

        self.settings_repo.save_fee_settings(&settings).await?;

        info!(
            "Fee settings updated: renewal {:02}-{:02}, threshold {} days, processor {}% + {}, passthrough {}",
            settings.annual_renewal_month,
            settings.annual_renewal_day,
            settings.prorata_threshold_days,
            settings.paystack_percentage,
            settings.paystack_fixed,
            settings.enable_fee_passthrough
        );

        Ok(settings)
    }

    /// Charge breakdown for `amount` under the current processor settings
    pub async fn processor_fee_preview(&self, amount: Decimal) -> Result<ProcessorFeePreview> {
        if amount < Decimal::ZERO {
            return Err(AppError::validation("Preview amount cannot be negative"));
        }

        let settings = self.get().await?;
        let (total, fee) = ProrataCalculator::apply_processor_fee(
            amount,
            settings.paystack_percentage,
            settings.paystack_fixed,
        )?;

        let effective_fee_percentage = if total > Decimal::ZERO {
            self.currency
                .round_half_up(fee / total * Decimal::ONE_HUNDRED)
        } else {
            Decimal::ZERO
        };

        let formula = format!(
            "({} + {}) / (1 - {}) = {}",
            self.currency.format_amount(amount),
            self.currency.format_amount(settings.paystack_fixed),
            (settings.paystack_percentage / Decimal::ONE_HUNDRED).normalize(),
            self.currency.format_amount(total)
        );

        Ok(ProcessorFeePreview {
            amount,
            total,
            fee,
            effective_fee_percentage,
            formula,
        })
    }
}
