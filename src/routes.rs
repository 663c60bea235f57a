use crate::{api::employee, config::Config, error::payload_error};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config) {
    // Bad JSON bodies and path ids are reported in the same `{code, message, error}` shape.
    cfg.app_data(web::JsonConfig::default().error_handler(payload_error))
        .app_data(web::PathConfig::default().error_handler(payload_error));

    cfg.service(web::resource("/").route(web::get().to(employee::index)));

    // Destructive: drops and recreates the employees table.
    if config.seed_enabled {
        cfg.service(web::resource("/seed_db").route(web::get().to(employee::seed_db)));
    }

    cfg.service(web::resource("/employees").route(web::get().to(employee::list_employees)))
        .service(web::resource("/employee/new").route(web::post().to(employee::create_employee)))
        .service(
            web::resource("/employees/update/{id}")
                .route(web::post().to(employee::update_employee)),
        )
        .service(
            web::resource("/employees/delete").route(web::post().to(employee::delete_employee)),
        );
}
