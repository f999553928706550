//! CORS configuration

use actix_cors::Cors;
use actix_web::http::header;

/// Builds the CORS middleware from the `CORS_ALLOWED_ORIGINS` environment
/// variable (comma-separated). Defaults to permissive in development.
pub fn create_cors() -> Cors {
    match std::env::var("CORS_ALLOWED_ORIGINS") {
        Ok(origins) if !origins.trim().is_empty() => {
            let mut cors = Cors::default()
                .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
                .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE])
                .max_age(3600);
            for origin in origins.split(',').map(str::trim).filter(|o| !o.is_empty()) {
                cors = cors.allowed_origin(origin);
            }
            cors
        }
        _ => Cors::permissive(),
    }
}
