pub mod actions;
pub mod app;
pub mod input;
pub mod line_input;
pub mod render;
pub mod theme;

pub use app::run;
