// Integration tests for the fee settings endpoints and processor fee preview

#[macro_use]
#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::{http::StatusCode, test};
use helpers::*;
use prorata::settings::FeeSettings;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

#[actix_web::test]
async fn test_get_returns_defaults() {
    let ctx = TestContext::with_defaults(date(2025, 1, 1));
    let app = init_app!(ctx).await;

    let req = test::TestRequest::get().uri("/api/v1/settings/fees").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["annual_renewal_month"], 3);
    assert_eq!(body["annual_renewal_day"], 1);
    assert_eq!(body["prorata_threshold_days"], 14);
    assert_eq!(decimal_field(&body["paystack_percentage"]), dec!(2.9));
    assert_eq!(decimal_field(&body["paystack_fixed"]), dec!(1.00));
    assert_eq!(body["enable_fee_passthrough"], true);
}

#[actix_web::test]
async fn test_put_saves_valid_settings() {
    let ctx = TestContext::with_defaults(date(2025, 1, 1));
    let app = init_app!(ctx).await;

    let req = test::TestRequest::put()
        .uri("/api/v1/settings/fees")
        .set_json(json!({
            "annual_renewal_month": 7,
            "annual_renewal_day": 1,
            "prorata_threshold_days": 30,
            "paystack_percentage": "3.5",
            "paystack_fixed": "2.00",
            "enable_fee_passthrough": false
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let stored = ctx.settings_repo.current();
    assert_eq!(stored.annual_renewal_month, 7);
    assert_eq!(stored.prorata_threshold_days, 30);
    assert_eq!(stored.paystack_percentage, dec!(3.5));
    assert_eq!(stored.paystack_fixed, dec!(2.00));
    assert!(!stored.enable_fee_passthrough);
}

#[actix_web::test]
async fn test_updated_settings_change_the_next_quote() {
    let ctx = TestContext::with_defaults(date(2025, 1, 1));
    let app = init_app!(ctx).await;

    let settings = FeeSettings {
        prorata_threshold_days: 60,
        ..FeeSettings::default()
    };
    let req = test::TestRequest::put()
        .uri("/api/v1/settings/fees")
        .set_json(&settings)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/api/v1/checkout/quote")
        .set_json(json!({ "level_id": STANDARD_LEVEL_ID }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    // 59 days to renewal is now inside the threshold
    assert_eq!(body["breakdown"]["within_threshold"], true);
    assert_eq!(decimal_field(&body["initial_payment"]), dec!(0));
}

#[actix_web::test]
async fn test_put_rejects_invalid_settings() {
    let ctx = TestContext::with_defaults(date(2025, 1, 1));
    let app = init_app!(ctx).await;

    let invalid = [
        FeeSettings {
            paystack_percentage: dec!(100),
            ..FeeSettings::default()
        },
        FeeSettings {
            paystack_fixed: dec!(-1),
            ..FeeSettings::default()
        },
        FeeSettings {
            annual_renewal_month: 13,
            ..FeeSettings::default()
        },
        FeeSettings {
            annual_renewal_day: 32,
            ..FeeSettings::default()
        },
    ];

    for settings in invalid {
        let req = test::TestRequest::put()
            .uri("/api/v1/settings/fees")
            .set_json(&settings)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(ctx.settings_repo.current(), FeeSettings::default());
    }
}

#[actix_web::test]
async fn test_processor_preview_defaults_to_300() {
    let ctx = TestContext::with_defaults(date(2025, 1, 1));
    let app = init_app!(ctx).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/fees/processor-preview")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(decimal_field(&body["amount"]), dec!(300));
    assert_eq!(decimal_field(&body["total"]), dec!(309.99));
    assert_eq!(decimal_field(&body["fee"]), dec!(9.99));
    assert_eq!(decimal_field(&body["effective_fee_percentage"]), dec!(3.22));
    assert_eq!(body["formula"], "(R 300.00 + R 1.00) / (1 - 0.029) = R 309.99");
}

#[actix_web::test]
async fn test_processor_preview_for_given_amount() {
    let ctx = TestContext::with_defaults(date(2025, 1, 1));
    let app = init_app!(ctx).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/fees/processor-preview?amount=48.46")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(decimal_field(&body["total"]), dec!(50.94));
    assert_eq!(decimal_field(&body["fee"]), dec!(2.48));
}

#[actix_web::test]
async fn test_processor_preview_rejects_negative_amount() {
    let ctx = TestContext::with_defaults(date(2025, 1, 1));
    let app = init_app!(ctx).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/fees/processor-preview?amount=-5")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_processor_preview_rejects_unrepresentable_amount() {
    let ctx = TestContext::with_defaults(date(2025, 1, 1));
    let app = init_app!(ctx).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/fees/processor-preview?amount=79228162514264337593543950335")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
