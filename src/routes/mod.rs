use actix_web::web;

use crate::types::error::json_error_handler;

pub mod health;
pub mod mission;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler));

    cfg.service(web::scope("/health").service(health::health));
    cfg.service(
        web::scope("/users")
            .service(user::create::create)
            .service(user::list::list)
            .service(user::get::get)
            .service(user::update::update)
            .service(user::delete::delete),
    );
    cfg.service(
        web::scope("/missions")
            .service(mission::create::create)
            .service(mission::list::list)
            .service(mission::get::get)
            .service(mission::update::update)
            .service(mission::delete::delete),
    );
}
