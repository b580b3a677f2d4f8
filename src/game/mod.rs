pub mod answer;
pub mod config;
pub mod evasion;

pub use answer::{Answer, AnswerState};
pub use config::WidgetConfig;
pub use evasion::{EvasionController, EvasionOutcome, Geometry};
