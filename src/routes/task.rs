use crate::{
    auth::AuthenticatedUserId,
    error::AppError,
    models::{Task, TaskInput},
    routes::workspace::require_membership,
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_task)
        .service(list_tasks)
        .service(get_task)
        .service(update_task)
        .service(delete_task);
}

const TASK_COLUMNS: &str = "id, project_id, workspace_id, title, description, priority, status, \
                            assigned_to, due_date, created_by, created_at, updated_at";

/// Fetches a task and checks the caller belongs to its workspace.
async fn fetch_task_checked(
    pool: &PgPool,
    task_id: Uuid,
    user_id: Uuid,
) -> Result<Task, AppError> {
    let task = sqlx::query_as::<_, Task>(&format!(
        "SELECT {} FROM tasks WHERE id = $1",
        TASK_COLUMNS
    ))
    .bind(task_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound("Task not found".into()))?;

    require_membership(pool, task.workspace_id, user_id).await?;
    Ok(task)
}

#[post("/project/{project_id}")]
pub async fn create_task(
    pool: web::Data<PgPool>,
    user_id: AuthenticatedUserId,
    path: web::Path<Uuid>,
    input: web::Json<TaskInput>,
) -> Result<impl Responder, AppError> {
    input.validate()?;
    let project_id = path.into_inner();

    let workspace_id = sqlx::query_scalar::<_, Uuid>(
        "SELECT workspace_id FROM projects WHERE id = $1",
    )
    .bind(project_id)
    .fetch_optional(&**pool)
    .await?
    .ok_or_else(|| AppError::NotFound("Project not found".into()))?;

    require_membership(&pool, workspace_id, user_id.0).await?;

    let task = sqlx::query_as::<_, Task>(&format!(
        "INSERT INTO tasks (id, project_id, workspace_id, title, description, priority, status, \
         assigned_to, due_date, created_by) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING {}",
        TASK_COLUMNS
    ))
    .bind(Uuid::new_v4())
    .bind(project_id)
    .bind(workspace_id)
    .bind(&input.title)
    .bind(&input.description)
    .bind(input.priority)
    .bind(input.status)
    .bind(input.assigned_to)
    .bind(input.due_date)
    .bind(user_id.0)
    .fetch_one(&**pool)
    .await?;

    Ok(HttpResponse::Created().json(task))
}

#[get("/project/{project_id}")]
pub async fn list_tasks(
    pool: web::Data<PgPool>,
    user_id: AuthenticatedUserId,
    path: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    let project_id = path.into_inner();

    let workspace_id = sqlx::query_scalar::<_, Uuid>(
        "SELECT workspace_id FROM projects WHERE id = $1",
    )
    .bind(project_id)
    .fetch_optional(&**pool)
    .await?
    .ok_or_else(|| AppError::NotFound("Project not found".into()))?;

    require_membership(&pool, workspace_id, user_id.0).await?;

    let tasks = sqlx::query_as::<_, Task>(&format!(
        "SELECT {} FROM tasks WHERE project_id = $1 ORDER BY created_at",
        TASK_COLUMNS
    ))
    .bind(project_id)
    .fetch_all(&**pool)
    .await?;

    Ok(HttpResponse::Ok().json(tasks))
}

#[get("/{id}")]
pub async fn get_task(
    pool: web::Data<PgPool>,
    user_id: AuthenticatedUserId,
    path: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    let task = fetch_task_checked(&pool, path.into_inner(), user_id.0).await?;
    Ok(HttpResponse::Ok().json(task))
}

#[put("/{id}")]
pub async fn update_task(
    pool: web::Data<PgPool>,
    user_id: AuthenticatedUserId,
    path: web::Path<Uuid>,
    input: web::Json<TaskInput>,
) -> Result<impl Responder, AppError> {
    input.validate()?;
    let task = fetch_task_checked(&pool, path.into_inner(), user_id.0).await?;

    let updated = sqlx::query_as::<_, Task>(&format!(
        "UPDATE tasks SET title = $1, description = $2, priority = $3, status = $4, \
         assigned_to = $5, due_date = $6, updated_at = now() WHERE id = $7 RETURNING {}",
        TASK_COLUMNS
    ))
    .bind(&input.title)
    .bind(&input.description)
    .bind(input.priority)
    .bind(input.status)
    .bind(input.assigned_to)
    .bind(input.due_date)
    .bind(task.id)
    .fetch_one(&**pool)
    .await?;

    Ok(HttpResponse::Ok().json(updated))
}

#[delete("/{id}")]
pub async fn delete_task(
    pool: web::Data<PgPool>,
    user_id: AuthenticatedUserId,
    path: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    let task = fetch_task_checked(&pool, path.into_inner(), user_id.0).await?;

    sqlx::query("DELETE FROM tasks WHERE id = $1")
        .bind(task.id)
        .execute(&**pool)
        .await?;

    Ok(HttpResponse::NoContent().finish())
}
