mod form;
mod state;

pub use form::FormItem;
pub use state::{AppState, InputAction, Scene, Status, StatusKind};
