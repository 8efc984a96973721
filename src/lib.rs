pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod mapper;
pub mod models;
pub mod services;
pub mod utils;

use actix_web::web;

use crate::errors::{json_error_handler, method_not_allowed, path_error_handler, route_not_found};

/// Registers the department routes together with the extractor configs that
/// turn bad bodies and ids into error envelopes. Unknown paths and methods
/// get envelopes too.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(
            web::scope("/api/departments")
                .service(
                    web::resource("")
                        .route(web::get().to(handlers::department::get_departments))
                        .route(web::post().to(handlers::department::create_department))
                        .default_service(web::to(method_not_allowed)),
                )
                .service(
                    web::resource("/{id}")
                        .route(web::get().to(handlers::department::get_department))
                        .route(web::put().to(handlers::department::update_department))
                        .route(web::delete().to(handlers::department::delete_department))
                        .default_service(web::to(method_not_allowed)),
                )
                .default_service(web::to(route_not_found)),
        )
        .default_service(web::to(route_not_found));
}
