use crate::geometry::{DataPoint, Projection, SurfaceSize, DATA_MAX, DATA_MIN};
use crate::identity::IdentityMap;
use crate::store::ClusterResult;

use super::command::DrawCommand;
use super::palette;

/// Data units between grid lines.
const GRID_STEP: f64 = 2.0;
const GRID_WIDTH: f64 = 1.0;
const AXIS_WIDTH: f64 = 2.0;
const POINT_RADIUS: f64 = 4.0;
const CENTROID_SIZE: f64 = 7.0;
/// Pixel offset of tick labels from their axis.
const LABEL_OFFSET: f64 = 14.0;

/// Build the scene for the current state: background, grid, axes, points,
/// centroid markers. Pure: identical inputs yield identical command lists.
///
/// Points not covered by the result snapshot (no result yet, or a snapshot
/// that lags the point set) fall back to the neutral color; the assignment
/// list is never indexed past its end.
pub fn render(
    points: &[DataPoint],
    result: Option<&ClusterResult>,
    identities: &IdentityMap,
    size: SurfaceSize,
) -> Vec<DrawCommand> {
    let projection = Projection::new(size);
    let mut commands = vec![DrawCommand::Clear {
        color: palette::BACKGROUND,
    }];

    grid(&mut commands, &projection);
    axes(&mut commands, &projection);

    for (index, point) in points.iter().enumerate() {
        let color = result
            .and_then(|r| r.assignments.get(index))
            .and_then(|assignment| identities.stable_id(assignment.cluster))
            .map(palette::color_for)
            .unwrap_or(palette::NEUTRAL);

        commands.push(DrawCommand::Dot {
            at: projection.to_surface(*point),
            radius: POINT_RADIUS,
            color,
        });
    }

    if let Some(result) = result {
        for (index, centroid) in result.centroids.iter().enumerate() {
            let color = identities
                .stable_id(index)
                .map(palette::color_for)
                .unwrap_or(palette::NEUTRAL);

            commands.push(DrawCommand::Cross {
                at: projection.to_surface(*centroid),
                size: CENTROID_SIZE,
                color,
            });
        }
    }

    commands
}

fn grid(commands: &mut Vec<DrawCommand>, projection: &Projection) {
    let mut value = DATA_MIN;
    while value <= DATA_MAX {
        commands.push(DrawCommand::Line {
            from: projection.to_surface(DataPoint::new(value, DATA_MAX)),
            to: projection.to_surface(DataPoint::new(value, DATA_MIN)),
            color: palette::GRID,
            width: GRID_WIDTH,
        });
        commands.push(DrawCommand::Line {
            from: projection.to_surface(DataPoint::new(DATA_MIN, value)),
            to: projection.to_surface(DataPoint::new(DATA_MAX, value)),
            color: palette::GRID,
            width: GRID_WIDTH,
        });
        value += GRID_STEP;
    }
}

fn axes(commands: &mut Vec<DrawCommand>, projection: &Projection) {
    commands.push(DrawCommand::Line {
        from: projection.to_surface(DataPoint::new(DATA_MIN, 0.0)),
        to: projection.to_surface(DataPoint::new(DATA_MAX, 0.0)),
        color: palette::AXIS,
        width: AXIS_WIDTH,
    });
    commands.push(DrawCommand::Line {
        from: projection.to_surface(DataPoint::new(0.0, DATA_MIN)),
        to: projection.to_surface(DataPoint::new(0.0, DATA_MAX)),
        color: palette::AXIS,
        width: AXIS_WIDTH,
    });

    // tick labels along both axes; the origin is labeled once on the X axis
    let mut value = DATA_MIN;
    while value <= DATA_MAX {
        let (x, y) = projection.to_surface(DataPoint::new(value, 0.0));
        commands.push(DrawCommand::Label {
            text: format!("{}", value),
            at: (x, y + LABEL_OFFSET),
            color: palette::AXIS,
        });

        if value != 0.0 {
            let (x, y) = projection.to_surface(DataPoint::new(0.0, value));
            commands.push(DrawCommand::Label {
                text: format!("{}", value),
                at: (x - LABEL_OFFSET, y),
                color: palette::AXIS,
            });
        }
        value += GRID_STEP;
    }
}
