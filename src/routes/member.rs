use crate::{
    auth::AuthenticatedUserId,
    error::AppError,
    models::member::{AddMemberRequest, Member, MemberRole},
    routes::workspace::require_membership,
};
use actix_web::{get, post, web, HttpResponse, Responder};
use sqlx::PgPool;
use uuid::Uuid;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_members).service(add_member);
}

/// List the members of a workspace. Any member may look.
#[get("/workspace/{workspace_id}")]
pub async fn list_members(
    pool: web::Data<PgPool>,
    user_id: AuthenticatedUserId,
    path: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    let workspace_id = path.into_inner();
    require_membership(&pool, workspace_id, user_id.0).await?;

    let members = sqlx::query_as::<_, Member>(
        "SELECT id, workspace_id, user_id, role, joined_at FROM members \
         WHERE workspace_id = $1 ORDER BY joined_at",
    )
    .bind(workspace_id)
    .fetch_all(&**pool)
    .await?;

    Ok(HttpResponse::Ok().json(members))
}

/// Add a user to a workspace. Owners and admins only; a second owner
/// cannot be minted this way.
#[post("/workspace/{workspace_id}")]
pub async fn add_member(
    pool: web::Data<PgPool>,
    user_id: AuthenticatedUserId,
    path: web::Path<Uuid>,
    request: web::Json<AddMemberRequest>,
) -> Result<impl Responder, AppError> {
    let workspace_id = path.into_inner();

    let role = require_membership(&pool, workspace_id, user_id.0).await?;
    if role == MemberRole::Member {
        return Err(AppError::Unauthorized(
            "Only owners and admins may add members".into(),
        ));
    }
    if request.role == MemberRole::Owner {
        return Err(AppError::BadRequest(
            "A workspace has exactly one owner".into(),
        ));
    }

    let existing = sqlx::query_scalar::<_, Uuid>(
        "SELECT id FROM members WHERE workspace_id = $1 AND user_id = $2",
    )
    .bind(workspace_id)
    .bind(request.user_id)
    .fetch_optional(&**pool)
    .await?;

    if existing.is_some() {
        return Err(AppError::BadRequest("User is already a member".into()));
    }

    let member = sqlx::query_as::<_, Member>(
        "INSERT INTO members (id, workspace_id, user_id, role) VALUES ($1, $2, $3, $4) \
         RETURNING id, workspace_id, user_id, role, joined_at",
    )
    .bind(Uuid::new_v4())
    .bind(workspace_id)
    .bind(request.user_id)
    .bind(request.role)
    .fetch_one(&**pool)
    .await?;

    Ok(HttpResponse::Created().json(member))
}
