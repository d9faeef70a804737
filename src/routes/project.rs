use crate::{
    auth::AuthenticatedUserId,
    error::AppError,
    models::{Project, ProjectInput},
    routes::workspace::require_membership,
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_project)
        .service(list_projects)
        .service(get_project)
        .service(update_project)
        .service(delete_project);
}

/// Fetches a project and checks the caller belongs to its workspace.
async fn fetch_project_checked(
    pool: &PgPool,
    project_id: Uuid,
    user_id: Uuid,
) -> Result<Project, AppError> {
    let project = sqlx::query_as::<_, Project>(
        "SELECT id, workspace_id, name, description, created_by, created_at \
         FROM projects WHERE id = $1",
    )
    .bind(project_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound("Project not found".into()))?;

    require_membership(pool, project.workspace_id, user_id).await?;
    Ok(project)
}

#[post("/workspace/{workspace_id}")]
pub async fn create_project(
    pool: web::Data<PgPool>,
    user_id: AuthenticatedUserId,
    path: web::Path<Uuid>,
    input: web::Json<ProjectInput>,
) -> Result<impl Responder, AppError> {
    input.validate()?;
    let workspace_id = path.into_inner();
    require_membership(&pool, workspace_id, user_id.0).await?;

    let project = sqlx::query_as::<_, Project>(
        "INSERT INTO projects (id, workspace_id, name, description, created_by) \
         VALUES ($1, $2, $3, $4, $5) \
         RETURNING id, workspace_id, name, description, created_by, created_at",
    )
    .bind(Uuid::new_v4())
    .bind(workspace_id)
    .bind(&input.name)
    .bind(&input.description)
    .bind(user_id.0)
    .fetch_one(&**pool)
    .await?;

    Ok(HttpResponse::Created().json(project))
}

#[get("/workspace/{workspace_id}")]
pub async fn list_projects(
    pool: web::Data<PgPool>,
    user_id: AuthenticatedUserId,
    path: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    let workspace_id = path.into_inner();
    require_membership(&pool, workspace_id, user_id.0).await?;

    let projects = sqlx::query_as::<_, Project>(
        "SELECT id, workspace_id, name, description, created_by, created_at \
         FROM projects WHERE workspace_id = $1 ORDER BY created_at",
    )
    .bind(workspace_id)
    .fetch_all(&**pool)
    .await?;

    Ok(HttpResponse::Ok().json(projects))
}

#[get("/{id}")]
pub async fn get_project(
    pool: web::Data<PgPool>,
    user_id: AuthenticatedUserId,
    path: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    let project = fetch_project_checked(&pool, path.into_inner(), user_id.0).await?;
    Ok(HttpResponse::Ok().json(project))
}

#[put("/{id}")]
pub async fn update_project(
    pool: web::Data<PgPool>,
    user_id: AuthenticatedUserId,
    path: web::Path<Uuid>,
    input: web::Json<ProjectInput>,
) -> Result<impl Responder, AppError> {
    input.validate()?;
    let project = fetch_project_checked(&pool, path.into_inner(), user_id.0).await?;

    let updated = sqlx::query_as::<_, Project>(
        "UPDATE projects SET name = $1, description = $2 WHERE id = $3 \
         RETURNING id, workspace_id, name, description, created_by, created_at",
    )
    .bind(&input.name)
    .bind(&input.description)
    .bind(project.id)
    .fetch_one(&**pool)
    .await?;

    Ok(HttpResponse::Ok().json(updated))
}

#[delete("/{id}")]
pub async fn delete_project(
    pool: web::Data<PgPool>,
    user_id: AuthenticatedUserId,
    path: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    let project = fetch_project_checked(&pool, path.into_inner(), user_id.0).await?;

    sqlx::query("DELETE FROM projects WHERE id = $1")
        .bind(project.id)
        .execute(&**pool)
        .await?;

    Ok(HttpResponse::NoContent().finish())
}
