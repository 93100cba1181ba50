use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::web::Data;
use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::configuration::AnalyticsSettings;
use crate::notification::QuoteNotifier;
use crate::routes;

pub fn run(
    listener: TcpListener,
    notifier: QuoteNotifier,
    analytics: AnalyticsSettings,
) -> Result<Server, std::io::Error> {
    let notifier = Data::new(notifier);
    let analytics = Data::new(analytics);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health", web::get().to(routes::health_check::health_check))
            .route("/analytics", web::get().to(routes::analytics::analytics_script))
            .route("/api/contact", web::post().to(routes::contact::submit_contact))
            .route("/api/quote", web::post().to(routes::quote::submit_quote))
            .app_data(notifier.clone())
            .app_data(analytics.clone())
    })
        .listen(listener)?
        .run();
    Ok(server)
}
