use serde::{Deserialize, Serialize};

use crate::core::scale::PolarScales;
use crate::core::types::SkillRecord;

/// Vertex in chart-centered pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Projects a polar coordinate into the chart-centered cartesian plane.
///
/// Sign convention: angle 0 points "up" (negative y) and angles increase
/// clockwise, so `(x, y) = (sin(angle)·distance, -cos(angle)·distance)`.
#[must_use]
pub fn polar_to_cartesian(angle: f64, distance: f64) -> (f64, f64) {
    (angle.sin() * distance, -angle.cos() * distance)
}

/// Data point per record: anchor angle at the record's scaled level.
#[must_use]
pub fn project_skill_points(records: &[SkillRecord], scales: &PolarScales) -> Vec<Vertex> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let angle = scales.angular.anchor_angle(index);
            let (x, y) = polar_to_cartesian(angle, scales.radial.map(record.level));
            Vertex::new(x, y)
        })
        .collect()
}

/// Closed polygon through every data point in dataset order.
///
/// The first vertex is explicitly repeated so consumers can render this as a
/// closed outline without implicit closure rules. Empty input yields an
/// empty polygon.
#[must_use]
pub fn project_area_polygon(records: &[SkillRecord], scales: &PolarScales) -> Vec<Vertex> {
    let mut vertices = project_skill_points(records, scales);
    if let Some(&first) = vertices.first() {
        vertices.push(first);
    }
    vertices
}
