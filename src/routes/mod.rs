// Route exports
pub mod hello;

use actix_web::{error, web, HttpRequest};
use std::sync::Arc;

use crate::core::{GetHelloMessageByNameUseCase, GetHelloMessageUseCase, HelloMessageService};
use crate::models::ErrorResponse;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub get_hello_message: GetHelloMessageUseCase,
    pub get_hello_message_by_name: GetHelloMessageByNameUseCase,
}

impl AppState {
    /// Wire both use cases to a single port implementation
    pub fn new(service: Arc<dyn HelloMessageService>) -> Self {
        Self {
            get_hello_message: GetHelloMessageUseCase::new(Arc::clone(&service)),
            get_hello_message_by_name: GetHelloMessageByNameUseCase::new(service),
        }
    }
}

/// Register every route; `feature_name` is the segment of the plain-text route
pub fn configure_routes(cfg: &mut web::ServiceConfig, feature_name: &str) {
    cfg.app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
        .configure(|cfg| hello::configure(cfg, feature_name));
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Query payload error on {}: {}", req.path(), err);
    ErrorResponse {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}
