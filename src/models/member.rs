use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Role a user holds within a workspace.
/// Corresponds to the `member_role` SQL enum.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "member_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    /// Created the workspace; may delete it.
    Owner,
    /// May manage projects and membership.
    Admin,
    /// May view and work on tasks.
    Member,
}

/// Membership of one user in one workspace.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Member {
    pub id: Uuid,
    pub workspace_id: Uuid,
    pub user_id: Uuid,
    pub role: MemberRole,
    pub joined_at: DateTime<Utc>,
}

/// Payload for adding a user to a workspace.
#[derive(Debug, Serialize, Deserialize)]
pub struct AddMemberRequest {
    pub user_id: Uuid,
    pub role: MemberRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_role_serialization() {
        assert_eq!(serde_json::to_string(&MemberRole::Owner).unwrap(), "\"owner\"");
        assert_eq!(serde_json::to_string(&MemberRole::Admin).unwrap(), "\"admin\"");
        let role: MemberRole = serde_json::from_str("\"member\"").unwrap();
        assert_eq!(role, MemberRole::Member);
    }
}
