/// Fixed categorical palette; stable identities map onto it modulo its size.
pub const PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Color for points with no usable assignment.
pub const NEUTRAL: &str = "#9e9e9e";

pub const BACKGROUND: &str = "#ffffff";
pub const GRID: &str = "#e0e0e0";
pub const AXIS: &str = "#424242";

pub fn color_for(stable_id: usize) -> &'static str {
    PALETTE[stable_id % PALETTE.len()]
}
