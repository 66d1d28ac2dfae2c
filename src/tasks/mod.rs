//! Task model and sidebar list rendering.

pub mod list_item;
pub mod model;

pub use list_item::{execution_path, render_sidebar, ListItemRender, StatusIcon, TaskListItem};
pub use model::{Task, TaskStatus};
