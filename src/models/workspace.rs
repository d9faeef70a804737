use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// A tenant boundary. Every project, task and membership belongs to exactly
/// one workspace.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Workspace {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Input structure for creating or updating a workspace.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct WorkspaceInput {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(max = 1000))]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_input_validation() {
        let valid = WorkspaceInput {
            name: "Engineering".into(),
            description: Some("Core platform team".into()),
        };
        assert!(valid.validate().is_ok());

        let empty_name = WorkspaceInput {
            name: "".into(),
            description: None,
        };
        assert!(empty_name.validate().is_err());

        let long_name = WorkspaceInput {
            name: "x".repeat(101),
            description: None,
        };
        assert!(long_name.validate().is_err());
    }
}
