mod point;
mod projection;


pub use point::{random_points, round2, DataPoint, DATA_MAX, DATA_MIN};
pub use projection::{Projection, SurfaceSize, PADDING};
