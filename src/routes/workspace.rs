use crate::{
    auth::AuthenticatedUserId,
    error::AppError,
    models::{member::MemberRole, Workspace, WorkspaceInput},
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_workspace)
        .service(list_workspaces)
        .service(get_workspace)
        .service(update_workspace)
        .service(delete_workspace);
}

/// Looks up the caller's role in a workspace, rejecting non-members.
pub(crate) async fn require_membership(
    pool: &PgPool,
    workspace_id: Uuid,
    user_id: Uuid,
) -> Result<MemberRole, AppError> {
    sqlx::query_scalar::<_, MemberRole>(
        "SELECT role FROM members WHERE workspace_id = $1 AND user_id = $2",
    )
    .bind(workspace_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::Unauthorized("Not a member of this workspace".into()))
}

/// Create a workspace; the caller becomes its owner member.
#[post("")]
pub async fn create_workspace(
    pool: web::Data<PgPool>,
    user_id: AuthenticatedUserId,
    input: web::Json<WorkspaceInput>,
) -> Result<impl Responder, AppError> {
    input.validate()?;

    let mut tx = pool.begin().await?;

    let workspace = sqlx::query_as::<_, Workspace>(
        "INSERT INTO workspaces (id, name, description, owner_id) VALUES ($1, $2, $3, $4) \
         RETURNING id, name, description, owner_id, created_at",
    )
    .bind(Uuid::new_v4())
    .bind(&input.name)
    .bind(&input.description)
    .bind(user_id.0)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query("INSERT INTO members (id, workspace_id, user_id, role) VALUES ($1, $2, $3, $4)")
        .bind(Uuid::new_v4())
        .bind(workspace.id)
        .bind(user_id.0)
        .bind(MemberRole::Owner)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(HttpResponse::Created().json(workspace))
}

/// List every workspace the caller belongs to.
#[get("")]
pub async fn list_workspaces(
    pool: web::Data<PgPool>,
    user_id: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    let workspaces = sqlx::query_as::<_, Workspace>(
        "SELECT w.id, w.name, w.description, w.owner_id, w.created_at \
         FROM workspaces w JOIN members m ON m.workspace_id = w.id \
         WHERE m.user_id = $1 ORDER BY w.created_at",
    )
    .bind(user_id.0)
    .fetch_all(&**pool)
    .await?;

    Ok(HttpResponse::Ok().json(workspaces))
}

#[get("/{id}")]
pub async fn get_workspace(
    pool: web::Data<PgPool>,
    user_id: AuthenticatedUserId,
    path: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    let workspace_id = path.into_inner();
    require_membership(&pool, workspace_id, user_id.0).await?;

    let workspace = sqlx::query_as::<_, Workspace>(
        "SELECT id, name, description, owner_id, created_at FROM workspaces WHERE id = $1",
    )
    .bind(workspace_id)
    .fetch_one(&**pool)
    .await?;

    Ok(HttpResponse::Ok().json(workspace))
}

/// Update name/description. Owners and admins only.
#[put("/{id}")]
pub async fn update_workspace(
    pool: web::Data<PgPool>,
    user_id: AuthenticatedUserId,
    path: web::Path<Uuid>,
    input: web::Json<WorkspaceInput>,
) -> Result<impl Responder, AppError> {
    input.validate()?;
    let workspace_id = path.into_inner();

    let role = require_membership(&pool, workspace_id, user_id.0).await?;
    if role == MemberRole::Member {
        return Err(AppError::Unauthorized(
            "Only owners and admins may update a workspace".into(),
        ));
    }

    let workspace = sqlx::query_as::<_, Workspace>(
        "UPDATE workspaces SET name = $1, description = $2 WHERE id = $3 \
         RETURNING id, name, description, owner_id, created_at",
    )
    .bind(&input.name)
    .bind(&input.description)
    .bind(workspace_id)
    .fetch_one(&**pool)
    .await?;

    Ok(HttpResponse::Ok().json(workspace))
}

/// Delete a workspace and everything in it. Owner only.
#[delete("/{id}")]
pub async fn delete_workspace(
    pool: web::Data<PgPool>,
    user_id: AuthenticatedUserId,
    path: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    let workspace_id = path.into_inner();

    let role = require_membership(&pool, workspace_id, user_id.0).await?;
    if role != MemberRole::Owner {
        return Err(AppError::Unauthorized(
            "Only the owner may delete a workspace".into(),
        ));
    }

    sqlx::query("DELETE FROM workspaces WHERE id = $1")
        .bind(workspace_id)
        .execute(&**pool)
        .await?;

    Ok(HttpResponse::NoContent().finish())
}
