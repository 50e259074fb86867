use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::Currency;
use crate::modules::prorata::FeeCalculationResult;

/// What the member picked on the checkout form.
///
/// Deliberately carries no amounts: the charge is always priced server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSelection {
    pub level_id: i64,
    /// Paying by card (fees may be passed through)
    #[serde(default)]
    pub card_payments: bool,
    /// Existing member migrating from the offline register
    #[serde(default)]
    pub exist_member: bool,
}

/// Display strings for the checkout fee table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayAmounts {
    pub pro_rata_amount: String,
    pub processor_fee: String,
    pub total_due: String,
}

/// Pro-rata breakdown shown before payment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeeBreakdown {
    #[serde(flatten)]
    pub calculation: FeeCalculationResult,
    /// Whether card fees were added to the charge
    pub fee_passthrough_applied: bool,
    pub display: DisplayAmounts,
}

impl FeeBreakdown {
    pub fn new(
        calculation: FeeCalculationResult,
        fee_passthrough_applied: bool,
        currency: Currency,
    ) -> Self {
        let display = DisplayAmounts {
            pro_rata_amount: currency.format_amount(calculation.pro_rata_amount),
            processor_fee: currency.format_amount(calculation.processor_fee),
            total_due: currency.format_amount(calculation.total_due),
        };

        Self {
            calculation,
            fee_passthrough_applied,
            display,
        }
    }
}

/// Server-side price of a checkout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutPricing {
    pub level_id: i64,
    pub level_name: String,
    pub currency: Currency,
    pub annual_fee: Decimal,
    /// Charged today
    pub initial_payment: Decimal,
    /// Charged on each renewal
    pub billing_amount: Decimal,
    pub legacy_member: bool,
    /// Site-local date the price was computed for
    pub priced_on: NaiveDate,
    /// Next annual renewal, also set for legacy members
    pub renewal_date: NaiveDate,
    pub breakdown: Option<FeeBreakdown>,
    pub notice: Option<String>,
}

impl CheckoutPricing {
    pub fn within_threshold(&self) -> bool {
        self.breakdown
            .as_ref()
            .map(|b| b.calculation.within_threshold)
            .unwrap_or(false)
    }

    /// Pro-rata amount before any card fees
    pub fn pro_rata_amount(&self) -> Decimal {
        self.breakdown
            .as_ref()
            .map(|b| b.calculation.pro_rata_amount)
            .unwrap_or(Decimal::ZERO)
    }
}

/// How the new member is expected to settle the initial payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Legacy member, fees handled offline
    NotRequired,
    CardSelected,
    /// Awaiting a bank transfer
    EftRequired,
}

impl PaymentStatus {
    pub fn for_selection(selection: &CheckoutSelection) -> Self {
        if selection.exist_member {
            PaymentStatus::NotRequired
        } else if selection.card_payments {
            PaymentStatus::CardSelected
        } else {
            PaymentStatus::EftRequired
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::NotRequired => "not_required",
            PaymentStatus::CardSelected => "card_selected",
            PaymentStatus::EftRequired => "eft_required",
        }
    }
}

/// Pricing outcome recorded against a new member for later display and audit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationSnapshot {
    pub user_id: i64,
    pub level_id: i64,
    pub calculated_amount: Decimal,
    pub within_threshold: bool,
    pub legacy_member: bool,
    pub initial_payment: Decimal,
    pub payment_status: PaymentStatus,
    pub renewal_date: NaiveDate,
    pub priced_on: NaiveDate,
}

impl RegistrationSnapshot {
    pub fn from_pricing(
        user_id: i64,
        selection: &CheckoutSelection,
        pricing: &CheckoutPricing,
    ) -> Self {
        Self {
            user_id,
            level_id: pricing.level_id,
            calculated_amount: pricing.pro_rata_amount(),
            within_threshold: pricing.within_threshold(),
            legacy_member: pricing.legacy_member,
            initial_payment: pricing.initial_payment,
            payment_status: PaymentStatus::for_selection(selection),
            renewal_date: pricing.renewal_date,
            priced_on: pricing.priced_on,
        }
    }
}
