pub mod animations;

pub use animations::SlideAnimation;
