pub mod forms;
pub mod handlers;
pub mod views;

pub use handlers::{AppState, routes};
