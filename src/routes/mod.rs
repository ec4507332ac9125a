use actix_web::web;

pub mod account;
pub mod health;
pub mod module;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").service(health::health));
    cfg.service(
        web::scope("/account")
            .service(account::register::register)
            .service(account::activate::activate)
            .service(account::token::token)
            .service(account::list::list)
            .service(account::update::update)
            .service(account::delete::delete)
            // keep the {id} matcher last so literal segments win
            .service(account::retrieve::retrieve),
    );
    cfg.service(
        web::scope("/modules")
            .service(module::create::create)
            .service(module::list::list)
            .service(module::update::update)
            .service(module::delete::delete)
            .service(module::retrieve::retrieve),
    );
}
