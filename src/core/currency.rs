use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rounds `amount` up (towards positive infinity) to `scale` decimal places
/// and pads the result to exactly that scale.
pub fn round_up_to_scale(amount: Decimal, scale: u32) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(scale, RoundingStrategy::ToPositiveInfinity);
    rounded.rescale(scale);
    rounded
}

/// Currencies a membership fee can be charged in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// South African Rand (2 decimal places)
    ZAR,
    /// US Dollar (2 decimal places)
    USD,
}

impl Currency {
    /// Returns the decimal scale for this currency
    pub fn scale(&self) -> u32 {
        match self {
            Currency::ZAR | Currency::USD => 2,
        }
    }

    /// Display symbol used on checkout and in member emails
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::ZAR => "R",
            Currency::USD => "$",
        }
    }

    /// Rounds up to the next whole unit of this currency's scale.
    /// The result always carries exactly `scale()` decimal places.
    pub fn round_up(&self, amount: Decimal) -> Decimal {
        round_up_to_scale(amount, self.scale())
    }

    /// Rounds half-up for display of derived figures (percentages, previews)
    pub fn round_half_up(&self, amount: Decimal) -> Decimal {
        let mut rounded =
            amount.round_dp_with_strategy(self.scale(), RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(self.scale());
        rounded
    }

    /// Returns the smallest unit for this currency
    pub fn smallest_unit(&self) -> Decimal {
        Decimal::new(1, self.scale())
    }

    /// Formats an amount for display, e.g. `R 48.46`
    pub fn format_amount(&self, amount: Decimal) -> String {
        format!(
            "{} {:.width$}",
            self.symbol(),
            self.round_half_up(amount),
            width = self.scale() as usize
        )
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::ZAR
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::ZAR => write!(f, "ZAR"),
            Currency::USD => write!(f, "USD"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ZAR" => Ok(Currency::ZAR),
            "USD" => Ok(Currency::USD),
            _ => Err(format!("Invalid currency: {}", s)),
        }
    }
}
