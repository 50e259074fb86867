pub mod checkout;

pub use checkout::{
    CheckoutPricing, CheckoutSelection, DisplayAmounts, FeeBreakdown, PaymentStatus,
    RegistrationSnapshot,
};
