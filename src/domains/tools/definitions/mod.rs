//! Tool definitions module.
//!
//! Tools are grouped by AnythingLLM API area, one file per area.

pub mod auth;
pub mod chat;
pub mod common;
pub mod document;
pub mod search;
pub mod system;
pub mod thread;
pub mod workspace;

#[cfg(test)]
pub(crate) mod test_support;

pub use auth::CheckAuthTool;
pub use chat::{ChatParams, ChatTool, GetChatHistoryTool};
pub use common::{ChatMode, NoParams};
pub use document::{
    GetAcceptedFileTypesTool, ListDocumentsTool, UpdateEmbeddingsTool, UploadLinkTool,
    UploadRawTextTool,
};
pub use search::{SearchParams, SearchTool};
pub use system::{
    ExportChatsTool, GetSystemSettingsTool, GetVectorCountTool, ListEmbedsTool, ListModelsTool,
};
pub use thread::{ChatInThreadTool, CreateThreadTool, DeleteThreadTool, GetThreadChatsTool};
pub use workspace::{
    CreateWorkspaceTool, DeleteWorkspaceTool, GetWorkspaceTool, ListWorkspacesTool,
    UpdateWorkspaceParams, UpdateWorkspaceTool, WorkspaceSummary,
};
