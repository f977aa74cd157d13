mod command;
mod palette;
mod scene;


pub use command::DrawCommand;
pub use palette::{color_for, AXIS, BACKGROUND, GRID, NEUTRAL, PALETTE};
pub use scene::render;
