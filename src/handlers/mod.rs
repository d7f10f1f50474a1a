pub mod health_handler;
pub mod search_handler;

pub use health_handler::health_check;
pub use search_handler::{
    get_confidence_levels, get_search_state, reset_search_state, search_company,
};

use actix_web::web;

/// Registers every route of the service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(search_handler::json_config())
        .service(health_check)
        .service(search_company)
        .service(get_search_state)
        .service(reset_search_state)
        .service(get_confidence_levels);
}
