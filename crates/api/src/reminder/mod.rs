mod get_weekly_reminders;

use actix_web::web;
use get_weekly_reminders::get_weekly_reminders_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/user/{user_id}/reminders",
        web::get().to(get_weekly_reminders_controller),
    );
}
