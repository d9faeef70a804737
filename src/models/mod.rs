pub mod member;
pub mod project;
pub mod task;
pub mod user;
pub mod workspace;

pub use member::{Member, MemberRole};
pub use project::{Project, ProjectInput};
pub use task::{Task, TaskInput, TaskPriority, TaskStatus};
pub use user::User;
pub use workspace::{Workspace, WorkspaceInput};
