// Card processor fee gross-up tests

use proptest::prelude::*;
use prorata::core::AppError;
use prorata::prorata::ProrataCalculator;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// What the organisation keeps after the processor takes its cut
fn net_after_fees(total: Decimal, percentage: Decimal, fixed_fee: Decimal) -> Decimal {
    total - (total * percentage / dec!(100) + fixed_fee)
}

#[test]
fn test_paystack_defaults_on_settings_page_example() {
    // (300 + 1) / (1 - 0.029) = 309.9897...
    let (total, fee) =
        ProrataCalculator::apply_processor_fee(dec!(300), dec!(2.9), dec!(1.00)).unwrap();

    assert_eq!(total, dec!(309.99));
    assert_eq!(fee, dec!(9.99));
    assert!(net_after_fees(total, dec!(2.9), dec!(1.00)) >= dec!(300));
}

#[test]
fn test_fixed_fee_only() {
    let (total, fee) =
        ProrataCalculator::apply_processor_fee(dec!(100), dec!(0), dec!(1.50)).unwrap();

    assert_eq!(total, dec!(101.50));
    assert_eq!(fee, dec!(1.50));
}

#[test]
fn test_result_always_has_two_decimal_places() {
    let (total, fee) =
        ProrataCalculator::apply_processor_fee(dec!(100), dec!(0), dec!(0)).unwrap();

    assert_eq!(total.to_string(), "100.00");
    assert_eq!(fee.to_string(), "0.00");
}

#[test]
fn test_rejects_percentage_at_or_above_100() {
    for percentage in [dec!(100), dec!(150)] {
        let result = ProrataCalculator::apply_processor_fee(dec!(50), percentage, dec!(1));
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }
}

#[test]
fn test_rejects_negative_percentage_or_fixed_fee() {
    assert!(ProrataCalculator::apply_processor_fee(dec!(50), dec!(-1), dec!(1)).is_err());
    assert!(ProrataCalculator::apply_processor_fee(dec!(50), dec!(2.9), dec!(-1)).is_err());
}

#[test]
fn test_amount_too_large_to_gross_up() {
    for percentage in [dec!(2.9), dec!(0)] {
        let result = ProrataCalculator::apply_processor_fee(Decimal::MAX, percentage, dec!(1));
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }
}

proptest! {
    #[test]
    fn prop_gross_up_nets_the_base_amount(
        base_cents in 1i64..100_000_000,
        basis_points in 0i64..9_999,
        fixed_cents in 0i64..10_000,
    ) {
        let base = Decimal::new(base_cents, 2);
        let percentage = Decimal::new(basis_points, 2);
        let fixed_fee = Decimal::new(fixed_cents, 2);

        let (total, fee) =
            ProrataCalculator::apply_processor_fee(base, percentage, fixed_fee).unwrap();

        prop_assert!(total >= base);
        prop_assert_eq!(fee, total - base);
        prop_assert!((total * dec!(100)).fract().is_zero());

        let net = net_after_fees(total, percentage, fixed_fee);
        prop_assert!((net - base).abs() <= dec!(0.01), "net {} vs base {}", net, base);
    }

    #[test]
    fn prop_higher_percentage_never_lowers_total(
        base_cents in 1i64..10_000_000,
        basis_points in 0i64..9_000,
        increase in 0i64..900,
    ) {
        let base = Decimal::new(base_cents, 2);
        let (lower, _) = ProrataCalculator::apply_processor_fee(
            base,
            Decimal::new(basis_points, 2),
            dec!(1),
        )
        .unwrap();
        let (higher, _) = ProrataCalculator::apply_processor_fee(
            base,
            Decimal::new(basis_points + increase, 2),
            dec!(1),
        )
        .unwrap();

        prop_assert!(higher >= lower);
    }
}
