pub mod checkout;
pub mod health;
pub mod levels;
pub mod prorata;
pub mod settings;

use actix_web::web;

/// Mount every `/api/v1` route. Expects `web::Data<Arc<CheckoutService>>` and
/// `web::Data<Arc<FeeSettingsService>>` in app data.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(checkout::controllers::configure)
            .configure(settings::controllers::configure),
    );
}
