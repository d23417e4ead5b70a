pub mod chat;
pub mod toolbar;

pub use chat::chat_panel;
pub use toolbar::{toolbar_panel, ToolbarAction};
