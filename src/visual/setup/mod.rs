pub mod widget;

pub use widget::{ConfirmButton, EvasiveButton, MessageText, WidgetRoot, setup_widget};
