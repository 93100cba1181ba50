use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};

use crate::configuration::AnalyticsSettings;

/// The page-analytics script tag for the site, or nothing when analytics is
/// not configured.
pub async fn analytics_script(settings: web::Data<AnalyticsSettings>) -> HttpResponse {
    match settings.script_tag() {
        Some(tag) => HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(tag),
        None => HttpResponse::NoContent().finish(),
    }
}
