use crate::auth::guard::validate_token;
use actix_web::web;
use actix_web_httpauth::middleware::HttpAuthentication;

pub mod health;
pub mod organization;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let bearer_auth = HttpAuthentication::bearer(validate_token);

    cfg.service(web::scope("/health").service(health::health));

    cfg.service(user::signup::signup);
    cfg.service(user::token::token);
    cfg.service(user::refresh::refresh);
    cfg.service(
        web::scope("/revoke-refresh-token")
            .service(user::revoke::revoke)
            .wrap(bearer_auth.clone()),
    );
    cfg.service(
        web::scope("/users")
            .service(user::me::me)
            .wrap(bearer_auth.clone()),
    );

    cfg.service(
        web::scope("/organizations")
            .service(organization::create::create)
            .service(organization::list::list)
            .service(organization::get::get)
            .service(organization::update::update)
            .service(organization::delete::delete)
            .service(organization::invite::invite)
            .wrap(bearer_auth),
    );
}
