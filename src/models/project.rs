use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// A project inside a workspace, grouping related tasks.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Project {
    pub id: Uuid,
    pub workspace_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Input structure for creating or updating a project.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct ProjectInput {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(max = 1000))]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_input_validation() {
        let valid = ProjectInput {
            name: "Launch".into(),
            description: None,
        };
        assert!(valid.validate().is_ok());

        let empty = ProjectInput {
            name: "".into(),
            description: None,
        };
        assert!(empty.validate().is_err());
    }
}
