use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::checkout::models::CheckoutSelection;
use crate::modules::checkout::services::CheckoutService;

/// List membership levels with their annual fees
/// GET /levels
pub async fn list_levels(
    service: web::Data<Arc<CheckoutService>>,
) -> Result<HttpResponse, AppError> {
    let levels = service.list_levels().await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "levels": levels,
    })))
}

/// Preview what the member will be charged
/// POST /checkout/quote
pub async fn quote(
    service: web::Data<Arc<CheckoutService>>,
    request: web::Json<CheckoutSelection>,
) -> Result<HttpResponse, AppError> {
    let pricing = service.quote(&request).await?;

    Ok(HttpResponse::Ok().json(pricing))
}

/// Price the checkout again and record it against the new member
/// POST /registrations/{user_id}/complete
pub async fn complete_registration(
    service: web::Data<Arc<CheckoutService>>,
    path: web::Path<i64>,
    request: web::Json<CheckoutSelection>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    let snapshot = service.complete_registration(user_id, &request).await?;

    Ok(HttpResponse::Created().json(snapshot))
}

/// Configure checkout routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/levels", web::get().to(list_levels))
        .route("/checkout/quote", web::post().to(quote))
        .route(
            "/registrations/{user_id}/complete",
            web::post().to(complete_registration),
        );
}
