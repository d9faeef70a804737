use crate::{auth::AuthenticatedUserId, error::AppError, models::user::UserProfile};
use actix_web::{get, web, HttpResponse, Responder};
use sqlx::PgPool;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(current_user);
}

/// Returns the profile of the authenticated user.
#[get("/current")]
pub async fn current_user(
    pool: web::Data<PgPool>,
    user_id: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    let profile = sqlx::query_as::<_, UserProfile>(
        "SELECT id, name, email, created_at FROM users WHERE id = $1",
    )
    .bind(user_id.0)
    .fetch_optional(&**pool)
    .await?
    .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    Ok(HttpResponse::Ok().json(profile))
}
