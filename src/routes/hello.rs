use actix_web::{http::header::ContentType, web, HttpResponse, Responder};

use super::AppState;
use crate::models::{HelloQuery, Name};

/// Configure all hello routes
pub fn configure(cfg: &mut web::ServiceConfig, feature_name: &str) {
    cfg
        .route("/hello", web::get().to(get_hello))
        .route("/hello/{name}", web::get().to(get_hello_by_path))
        .route(&format!("/{}", feature_name), web::get().to(get_feature_message));
}

/// Hello endpoint
///
/// GET /hello
/// GET /hello?name={name}
///
/// Response body:
/// ```json
/// { "value": "Hello, World!" }
/// ```
async fn get_hello(state: web::Data<AppState>, query: web::Query<HelloQuery>) -> impl Responder {
    let message = match query.name() {
        Some(name) => {
            tracing::debug!("Greeting by query name: {:?}", name.value());
            state.get_hello_message_by_name.execute(&name)
        }
        None => state.get_hello_message.execute(),
    };

    HttpResponse::Ok().json(message)
}

/// Hello by path endpoint
///
/// GET /hello/{name}
async fn get_hello_by_path(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let name = Name::from(path.into_inner());
    tracing::debug!("Greeting by path name: {:?}", name.value());

    HttpResponse::Ok().json(state.get_hello_message_by_name.execute(&name))
}

/// Single-layer feature endpoint, answers with plain text
///
/// GET /{feature}
async fn get_feature_message(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(state.get_hello_message.execute().into_value())
}
