use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Membership level (tier) a member signs up for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct MembershipLevel {
    pub id: i64,
    pub name: String,
    /// Full annual fee; pro-rating starts from this amount
    pub initial_payment: Decimal,
}

impl MembershipLevel {
    pub fn new(id: i64, name: impl Into<String>, initial_payment: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            initial_payment,
        }
    }

    pub fn annual_fee(&self) -> Decimal {
        self.initial_payment
    }
}
