use serde::Serialize;

/// One drawing primitive. A scene is an ordered list of these, executed top
/// to bottom by whatever backend owns the actual surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Fill the whole surface.
    Clear { color: &'static str },
    Line {
        from: (f64, f64),
        to: (f64, f64),
        color: &'static str,
        width: f64,
    },
    /// Axis tick label, anchored at `at`.
    Label {
        text: String,
        at: (f64, f64),
        color: &'static str,
    },
    /// A plotted point.
    Dot {
        at: (f64, f64),
        radius: f64,
        color: &'static str,
    },
    /// A centroid marker, drawn as an X.
    Cross {
        at: (f64, f64),
        size: f64,
        color: &'static str,
    },
}
