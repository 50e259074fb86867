use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::info;

use crate::core::error::AppError;
use crate::core::{Clock, Currency, Result};
use crate::modules::checkout::models::{
    CheckoutPricing, CheckoutSelection, FeeBreakdown, RegistrationSnapshot,
};
use crate::modules::checkout::repositories::SnapshotRepository;
use crate::modules::levels::{LevelRepository, MembershipLevel};
use crate::modules::prorata::{FeeScheduleInput, ProrataCalculator};
use crate::modules::settings::SettingsRepository;

const LEGACY_NOTICE: &str = "As an existing member, no online payment is required. \
    Your membership fees are managed offline through your branch.";

/// Service that prices checkouts and records registration snapshots
pub struct CheckoutService {
    level_repo: Arc<dyn LevelRepository>,
    settings_repo: Arc<dyn SettingsRepository>,
    snapshot_repo: Arc<dyn SnapshotRepository>,
    clock: Arc<dyn Clock>,
    currency: Currency,
}

impl CheckoutService {
    pub fn new(
        level_repo: Arc<dyn LevelRepository>,
        settings_repo: Arc<dyn SettingsRepository>,
        snapshot_repo: Arc<dyn SnapshotRepository>,
        clock: Arc<dyn Clock>,
        currency: Currency,
    ) -> Self {
        Self {
            level_repo,
            settings_repo,
            snapshot_repo,
            clock,
            currency,
        }
    }

    pub async fn list_levels(&self) -> Result<Vec<MembershipLevel>> {
        self.level_repo.list_all().await
    }

    /// Price a checkout selection for today.
    ///
    /// Legacy members pay nothing online. Everyone else pays the pro-rata
    /// share of the annual fee, grossed up for card fees when passthrough is
    /// enabled, or nothing if renewal falls within the threshold.
    pub async fn quote(&self, selection: &CheckoutSelection) -> Result<CheckoutPricing> {
        let level = self
            .level_repo
            .find_by_id(selection.level_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Membership level {}", selection.level_id))
            })?;

        let today = self.clock.today();
        let settings = self.settings_repo.load_fee_settings().await?;

        if selection.exist_member {
            let renewal_date =
                ProrataCalculator::compute_next_renewal_date(today, settings.anchor()?)?;

            info!("Legacy member checkout for level {}: no online payment", level.id);

            return Ok(CheckoutPricing {
                level_id: level.id,
                level_name: level.name,
                currency: self.currency,
                annual_fee: level.initial_payment,
                initial_payment: Decimal::ZERO,
                billing_amount: Decimal::ZERO,
                legacy_member: true,
                priced_on: today,
                renewal_date,
                breakdown: None,
                notice: Some(LEGACY_NOTICE.to_string()),
            });
        }

        let fee_passthrough = selection.card_payments && settings.enable_fee_passthrough;

        let input = FeeScheduleInput {
            annual_fee: level.annual_fee(),
            today,
            anchor: settings.anchor()?,
            threshold_days: settings.prorata_threshold_days,
            pay_by_card: fee_passthrough,
            processor_percentage: settings.paystack_percentage,
            processor_fixed_fee: settings.paystack_fixed,
        };

        let calculation = ProrataCalculator::calculate(&input)?;

        let notice = if calculation.within_threshold {
            Some(format!(
                "No payment is due now. Your first annual payment of {} is due on {}.",
                self.currency.format_amount(level.annual_fee()),
                calculation.next_renewal_date.format("%-d %B %Y")
            ))
        } else {
            None
        };

        info!(
            "Checkout for level {} ({}): initial payment {}, within threshold {}, card fees {}",
            level.id,
            level.name,
            calculation.total_due,
            calculation.within_threshold,
            fee_passthrough
        );

        Ok(CheckoutPricing {
            level_id: level.id,
            level_name: level.name.clone(),
            currency: self.currency,
            annual_fee: level.annual_fee(),
            initial_payment: calculation.total_due,
            billing_amount: level.annual_fee(),
            legacy_member: false,
            priced_on: today,
            renewal_date: calculation.next_renewal_date,
            breakdown: Some(FeeBreakdown::new(
                calculation,
                fee_passthrough,
                self.currency,
            )),
            notice,
        })
    }

    /// Re-price the selection at registration time and persist the snapshot.
    ///
    /// Amounts shown earlier on the checkout page are never reused.
    pub async fn complete_registration(
        &self,
        user_id: i64,
        selection: &CheckoutSelection,
    ) -> Result<RegistrationSnapshot> {
        if user_id <= 0 {
            return Err(AppError::validation(format!("Invalid user id {}", user_id)));
        }

        let pricing = self.quote(selection).await?;
        let snapshot = RegistrationSnapshot::from_pricing(user_id, selection, &pricing);

        self.snapshot_repo.save(&snapshot).await?;

        info!(
            "Recorded registration snapshot for user {}: amount {}, payment {}, renews {}",
            user_id,
            snapshot.calculated_amount,
            snapshot.payment_status.as_str(),
            snapshot.renewal_date
        );

        Ok(snapshot)
    }
}
