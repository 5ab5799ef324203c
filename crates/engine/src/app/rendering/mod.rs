mod canvas;
mod display;

pub use canvas::Canvas;
pub use display::Display;
