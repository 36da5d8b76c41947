pub mod input;
pub mod render;
pub mod runtime;
pub mod ui;

pub use ui::{App, Focus, NetEvent};
