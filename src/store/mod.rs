mod points;
mod result;

#[cfg(test)]
mod tests;

pub use points::PointStore;
pub use result::{ClusterAssignment, ClusterResult, ResultStore};
