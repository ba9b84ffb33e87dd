mod create_assignment;
mod get_user_assignments;
mod remove_assignment;
mod update_assignment;

use actix_web::web;
use create_assignment::create_assignment_controller;
use get_user_assignments::get_user_assignments_controller;
use remove_assignment::remove_assignment_controller;
use update_assignment::update_assignment_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/user/{user_id}/bundle/{bundle_id}",
        web::post().to(create_assignment_controller),
    );
    cfg.route(
        "/user/{user_id}/bundle/{bundle_id}",
        web::put().to(update_assignment_controller),
    );
    cfg.route(
        "/user/{user_id}/bundle/{bundle_id}",
        web::delete().to(remove_assignment_controller),
    );
    cfg.route(
        "/user/{user_id}/assignments",
        web::get().to(get_user_assignments_controller),
    );
}
