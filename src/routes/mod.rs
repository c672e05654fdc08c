pub mod auth;
pub mod health;
pub mod tasks;
pub mod users;

use actix_web::web;

pub fn config(cfg: &mut web::ServiceConfig) {
    // Paths are the client's fixed contract, registered at the root.
    cfg.service(health::health)
        .service(auth::register)
        .service(auth::check_email)
        .service(auth::login)
        .service(users::get_user)
        .service(tasks::add_task)
        .service(tasks::delete_task);
}
