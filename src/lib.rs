pub mod cli;
pub mod config;
pub mod error;
pub mod list_state;
pub mod row;
pub mod store;
pub mod tui;
pub mod tui_state;
pub mod types;

// 公開API
pub use config::TodoConfig;
pub use error::TodoError;
pub use list_state::TodoList;
pub use row::{Affordance, RowContent, RowEditor, RowIntent, RowMode, RowView};
pub use store::{StoreEvent, SubscriberId, TodoIntent, TodoStore};
pub use tui_state::{TuiAction, TuiInput, TuiState};
pub use types::*;
