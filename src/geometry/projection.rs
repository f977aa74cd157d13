use serde::{Deserialize, Serialize};

use super::point::{round2, DataPoint, DATA_MAX, DATA_MIN};

/// Pixels reserved on every side of the plot so axis labels have room.
pub const PADDING: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl SurfaceSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Bidirectional transform between the fixed data range and a pixel surface.
///
/// Surface Y grows downward while data Y grows upward, so the vertical axis
/// flips in both directions. The plotted region excludes `PADDING` pixels on
/// every side; a surface too small to leave any plot area degenerates to the
/// center point instead of dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    size: SurfaceSize,
}

impl Projection {
    pub fn new(size: SurfaceSize) -> Self {
        Self { size }
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    /// Adopt new pixel dimensions. Data-space coordinates are unaffected.
    pub fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
    }

    fn plot_extents(&self) -> (f64, f64) {
        (
            (self.size.width - 2.0 * PADDING).max(0.0),
            (self.size.height - 2.0 * PADDING).max(0.0),
        )
    }

    pub fn to_surface(&self, point: DataPoint) -> (f64, f64) {
        let (plot_w, plot_h) = self.plot_extents();
        if plot_w == 0.0 || plot_h == 0.0 {
            return (self.size.width / 2.0, self.size.height / 2.0);
        }

        let span = DATA_MAX - DATA_MIN;
        let sx = PADDING + (point.x - DATA_MIN) / span * plot_w;
        let sy = PADDING + (DATA_MAX - point.y) / span * plot_h;
        (sx, sy)
    }

    /// Map a surface position back into data space, rounded to 2 decimals.
    pub fn to_data(&self, sx: f64, sy: f64) -> DataPoint {
        let (plot_w, plot_h) = self.plot_extents();
        if plot_w == 0.0 || plot_h == 0.0 {
            return DataPoint::new(0.0, 0.0);
        }

        let span = DATA_MAX - DATA_MIN;
        let x = DATA_MIN + (sx - PADDING) / plot_w * span;
        let y = DATA_MAX - (sy - PADDING) / plot_h * span;
        DataPoint::new(round2(x), round2(y))
    }
}
