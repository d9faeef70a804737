pub mod auth;
pub mod member;
pub mod project;
pub mod root;
pub mod task;
pub mod user;
pub mod workspace;

use actix_web::{web, Scope};

use crate::auth::AuthMiddleware;

/// Mounts every resource group under the configured base path.
///
/// The auth group is the only one reachable without a bearer token; each of
/// the other groups carries its own `AuthMiddleware`, so the guard runs per
/// mounted scope rather than globally.
pub fn api_scope(base_path: &str) -> Scope {
    web::scope(base_path)
        .service(web::scope("/auth").configure(auth::configure))
        .service(
            web::scope("/user")
                .wrap(AuthMiddleware)
                .configure(user::configure),
        )
        .service(
            web::scope("/workspace")
                .wrap(AuthMiddleware)
                .configure(workspace::configure),
        )
        .service(
            web::scope("/member")
                .wrap(AuthMiddleware)
                .configure(member::configure),
        )
        .service(
            web::scope("/project")
                .wrap(AuthMiddleware)
                .configure(project::configure),
        )
        .service(
            web::scope("/task")
                .wrap(AuthMiddleware)
                .configure(task::configure),
        )
}
