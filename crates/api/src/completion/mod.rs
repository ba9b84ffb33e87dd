mod record_completion;

use actix_web::web;
use record_completion::record_completion_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/user/{user_id}/bundle/{bundle_id}/completion",
        web::post().to(record_completion_controller),
    );
}
