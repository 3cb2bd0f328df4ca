use std::f64::consts::{FRAC_PI_2, PI};

use approx::assert_relative_eq;
use radar_rs::core::{
    ChartConfig, PolarScales, SkillRecord, polar_to_cartesian, project_area_polygon,
    project_skill_points,
};
use radar_rs::render::Color;

fn record(name: &str, level: f64) -> SkillRecord {
    SkillRecord::new(name, level, Color::rgb(0.5, 0.5, 0.5))
}

#[test]
fn angle_zero_points_up() {
    let (x, y) = polar_to_cartesian(0.0, 70.0);
    assert_relative_eq!(x, 0.0, epsilon = 1e-9);
    assert_relative_eq!(y, -70.0, epsilon = 1e-9);
}

#[test]
fn angle_pi_points_down() {
    let (x, y) = polar_to_cartesian(PI, 70.0);
    assert_relative_eq!(x, 0.0, epsilon = 1e-9);
    assert_relative_eq!(y, 70.0, epsilon = 1e-9);
}

#[test]
fn angles_increase_clockwise() {
    // A quarter turn from "up" lands on the positive x axis.
    let (x, y) = polar_to_cartesian(FRAC_PI_2, 10.0);
    assert_relative_eq!(x, 10.0, epsilon = 1e-9);
    assert_relative_eq!(y, 0.0, epsilon = 1e-9);
}

#[test]
fn single_record_point_lands_below_center() {
    let records = vec![record("X", 50.0)];
    let config = ChartConfig::new(400.0, 400.0, 60.0);
    let scales = PolarScales::build(&records, &config);

    let points = project_skill_points(&records, &scales);
    assert_eq!(points.len(), 1);
    assert_relative_eq!(points[0].x, 0.0, epsilon = 1e-9);
    assert_relative_eq!(points[0].y, 70.0, epsilon = 1e-9);
}

#[test]
fn point_distance_matches_scaled_level() {
    let records = vec![record("A", 95.0), record("B", 75.0), record("C", 30.0)];
    let config = ChartConfig::new(400.0, 400.0, 60.0);
    let scales = PolarScales::build(&records, &config);

    let points = project_skill_points(&records, &scales);
    for (record, point) in records.iter().zip(&points) {
        let distance = (point.x * point.x + point.y * point.y).sqrt();
        assert_relative_eq!(distance, scales.radial.map(record.level), epsilon = 1e-9);
    }
}

#[test]
fn area_polygon_closes_back_to_the_first_point() {
    let records = vec![
        record("A", 95.0),
        record("B", 75.0),
        record("C", 30.0),
        record("D", 60.0),
    ];
    let config = ChartConfig::new(400.0, 400.0, 60.0);
    let scales = PolarScales::build(&records, &config);

    let polygon = project_area_polygon(&records, &scales);
    assert_eq!(polygon.len(), records.len() + 1);
    assert_eq!(polygon.first(), polygon.last());
}

#[test]
fn empty_dataset_projects_an_empty_polygon() {
    let config = ChartConfig::new(400.0, 400.0, 60.0);
    let scales = PolarScales::build(&[], &config);

    assert!(project_skill_points(&[], &scales).is_empty());
    assert!(project_area_polygon(&[], &scales).is_empty());
}
