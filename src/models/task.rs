use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Represents the priority of a task.
/// Corresponds to the `task_priority` SQL enum.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "task_priority", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    Urgent,
}

/// Represents the status of a task.
/// Corresponds to the `task_status` SQL enum.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "task_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Review,
    Done,
}

/// Input structure for creating or updating a task.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct TaskInput {
    /// Must be between 1 and 200 characters.
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    /// Maximum length of 1000 characters if provided.
    #[validate(length(max = 1000))]
    pub description: Option<String>,

    pub priority: Option<TaskPriority>,

    pub assigned_to: Option<Uuid>,

    pub due_date: Option<DateTime<Utc>>,

    pub status: TaskStatus,
}

/// A task within a project.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: Uuid,
    pub project_id: Uuid,
    pub workspace_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<TaskPriority>,
    pub status: TaskStatus,
    pub assigned_to: Option<Uuid>,
    pub due_date: Option<DateTime<Utc>>,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_input_validation() {
        let valid = TaskInput {
            title: "Write release notes".into(),
            description: Some("Cover the auth changes".into()),
            priority: Some(TaskPriority::High),
            assigned_to: None,
            due_date: None,
            status: TaskStatus::Todo,
        };
        assert!(valid.validate().is_ok());

        let empty_title = TaskInput {
            title: "".into(),
            description: None,
            priority: None,
            assigned_to: None,
            due_date: None,
            status: TaskStatus::Todo,
        };
        assert!(empty_title.validate().is_err());

        let oversized_description = TaskInput {
            title: "ok".into(),
            description: Some("d".repeat(1001)),
            priority: None,
            assigned_to: None,
            due_date: None,
            status: TaskStatus::Todo,
        };
        assert!(oversized_description.validate().is_err());
    }

    #[test]
    fn test_status_serialization_is_snake_case() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        let status: TaskStatus = serde_json::from_str("\"done\"").unwrap();
        assert_eq!(status, TaskStatus::Done);
    }
}
