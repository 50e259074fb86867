use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::settings::models::{FeeSettings, ProcessorFeePreviewQuery};
use crate::modules::settings::services::FeeSettingsService;

/// Current fee settings
/// GET /settings/fees
pub async fn get_fee_settings(
    service: web::Data<Arc<FeeSettingsService>>,
) -> Result<HttpResponse, AppError> {
    let settings = service.get().await?;

    Ok(HttpResponse::Ok().json(settings))
}

/// Replace fee settings
/// PUT /settings/fees
pub async fn update_fee_settings(
    service: web::Data<Arc<FeeSettingsService>>,
    request: web::Json<FeeSettings>,
) -> Result<HttpResponse, AppError> {
    let settings = service.update(request.into_inner()).await?;

    Ok(HttpResponse::Ok().json(settings))
}

/// Card fee passthrough example
/// GET /fees/processor-preview?amount=300
pub async fn processor_fee_preview(
    service: web::Data<Arc<FeeSettingsService>>,
    query: web::Query<ProcessorFeePreviewQuery>,
) -> Result<HttpResponse, AppError> {
    let preview = service.processor_fee_preview(query.amount).await?;

    Ok(HttpResponse::Ok().json(preview))
}

/// Configure settings routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/settings/fees")
            .route(web::get().to(get_fee_settings))
            .route(web::put().to(update_fee_settings)),
    )
    .route("/fees/processor-preview", web::get().to(processor_fee_preview));
}
