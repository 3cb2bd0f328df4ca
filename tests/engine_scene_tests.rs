use approx::assert_relative_eq;
use radar_rs::api::{ChartEngine, ChartEngineConfig, ScenePhase, Theme};
use radar_rs::core::{ChartConfig, SkillRecord};
use radar_rs::render::{AnimatedProperty, ChartLayerKind, Color, NullRenderer, RenderFrame};

fn demo_skills() -> Vec<SkillRecord> {
    [
        ("React", 95.0, "#61DAFB"),
        ("TypeScript", 90.0, "#3178C6"),
        ("Next.js", 88.0, "#ffffff"),
        ("JavaScript", 95.0, "#F7DF1E"),
        ("Tailwind", 92.0, "#06B6D4"),
        ("CSS/SCSS", 90.0, "#CC6699"),
        ("HTML5", 95.0, "#E34F26"),
        ("D3.js", 75.0, "#F9A03C"),
    ]
    .into_iter()
    .map(|(name, level, hex)| {
        SkillRecord::new(name, level, Color::from_hex(hex).expect("valid hex"))
    })
    .collect()
}

fn engine_with_demo_data() -> ChartEngine<NullRenderer> {
    let config = ChartEngineConfig::new(ChartConfig::new(400.0, 400.0, 60.0));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_skills(demo_skills()).expect("initial render");
    engine
}

fn layer_of(frame: &RenderFrame, kind: ChartLayerKind) -> &radar_rs::render::LayerPrimitives {
    frame.layer(kind).expect("canonical layer present")
}

#[test]
fn full_scene_contains_every_layer_in_expected_quantity() {
    let engine = engine_with_demo_data();
    let frame = engine.last_frame().expect("frame after render");

    let grid = layer_of(frame, ChartLayerKind::Grid);
    assert_eq!(grid.rings.len(), 4);
    assert_eq!(grid.texts.len(), 4);

    let spokes = layer_of(frame, ChartLayerKind::Spokes);
    assert_eq!(spokes.lines.len(), 8);
    assert_eq!(spokes.texts.len(), 8);

    let area = layer_of(frame, ChartLayerKind::Area);
    assert_eq!(area.polygons.len(), 1);
    // Closed polygon: eight data points plus the repeated first vertex.
    assert_eq!(area.polygons[0].vertices.len(), 9);

    let markers = layer_of(frame, ChartLayerKind::Markers);
    assert_eq!(markers.markers.len(), 8);
}

#[test]
fn grid_rings_sit_at_exact_scaled_radii() {
    let engine = engine_with_demo_data();
    let frame = engine.last_frame().expect("frame after render");

    let radii: Vec<f64> = layer_of(frame, ChartLayerKind::Grid)
        .rings
        .iter()
        .map(|ring| ring.radius)
        .collect();
    assert_eq!(radii, vec![35.0, 70.0, 105.0, 140.0]);

    let labels: Vec<&str> = layer_of(frame, ChartLayerKind::Grid)
        .texts
        .iter()
        .map(|text| text.text.as_str())
        .collect();
    assert_eq!(labels, vec!["25%", "50%", "75%", "100%"]);
}

#[test]
fn markers_keep_their_record_color_and_shared_entrance_timing() {
    let engine = engine_with_demo_data();
    let frame = engine.last_frame().expect("frame after render");
    let markers = &layer_of(frame, ChartLayerKind::Markers).markers;

    for (record, marker) in demo_skills().iter().zip(markers) {
        assert_eq!(marker.fill_color, record.color);

        let entrance = marker.entrance.expect("marker grow-in");
        assert_eq!(entrance.property, AnimatedProperty::Radius);
        assert_eq!(entrance.from, 0.0);
        assert_eq!(entrance.to, 6.0);
        assert_eq!(entrance.delay_ms, 500.0);
        assert_eq!(entrance.duration_ms, 500.0);
    }
}

#[test]
fn area_polygon_fades_in_without_stagger() {
    let engine = engine_with_demo_data();
    let frame = engine.last_frame().expect("frame after render");
    let polygon = &layer_of(frame, ChartLayerKind::Area).polygons[0];

    let entrance = polygon.entrance.expect("area fade");
    assert_eq!(entrance.property, AnimatedProperty::Opacity);
    assert_eq!(entrance.from, 0.0);
    assert_eq!(entrance.to, 1.0);
    assert_eq!(entrance.delay_ms, 0.0);
    assert_eq!(entrance.duration_ms, 1000.0);
}

#[test]
fn empty_dataset_draws_only_grid_rings() {
    let config = ChartEngineConfig::new(ChartConfig::new(400.0, 400.0, 60.0));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.render().expect("render empty chart");

    let frame = engine.last_frame().expect("frame after render");
    assert_eq!(layer_of(frame, ChartLayerKind::Grid).rings.len(), 4);
    assert!(layer_of(frame, ChartLayerKind::Spokes).is_empty());
    assert!(layer_of(frame, ChartLayerKind::Area).is_empty());
    assert!(layer_of(frame, ChartLayerKind::Markers).is_empty());
    assert_eq!(engine.scene_phase(), ScenePhase::Drawn);
}

#[test]
fn unready_surface_skips_rendering_silently() {
    let config = ChartEngineConfig::new(ChartConfig::new(0.0, 400.0, 60.0));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");

    engine.set_skills(demo_skills()).expect("no error expected");
    assert_eq!(engine.scene_phase(), ScenePhase::Empty);
    assert!(engine.last_frame().is_none());
}

#[test]
fn rendering_twice_with_identical_inputs_is_idempotent() {
    let mut engine = engine_with_demo_data();
    let first = engine.last_frame().expect("first frame").clone();
    let first_snapshot = engine.scene_snapshot();

    engine.render().expect("second render");
    let second = engine.last_frame().expect("second frame");

    assert_eq!(&first, second);
    assert_eq!(first_snapshot, engine.scene_snapshot());
}

#[test]
fn theme_switch_changes_colors_but_not_geometry() {
    let mut engine = engine_with_demo_data();
    let light_snapshot = engine.scene_snapshot();
    let light_frame = engine.last_frame().expect("light frame").clone();

    engine.set_theme(Theme::Dark).expect("theme toggle");
    let dark_snapshot = engine.scene_snapshot();
    let dark_frame = engine.last_frame().expect("dark frame");

    assert_eq!(light_snapshot.radius, dark_snapshot.radius);
    assert_eq!(light_snapshot.bandwidth, dark_snapshot.bandwidth);
    assert_eq!(light_snapshot.anchor_angles, dark_snapshot.anchor_angles);
    assert_eq!(light_snapshot.ring_radii, dark_snapshot.ring_radii);
    assert_eq!(light_snapshot.point_positions, dark_snapshot.point_positions);
    assert_ne!(light_snapshot.palette, dark_snapshot.palette);

    let light_grid = layer_of(&light_frame, ChartLayerKind::Grid);
    let dark_grid = layer_of(dark_frame, ChartLayerKind::Grid);
    assert_ne!(light_grid.rings[0].color, dark_grid.rings[0].color);
    assert_eq!(light_grid.rings[0].radius, dark_grid.rings[0].radius);

    // Marker fills are per-record, not theme-dependent.
    let light_markers = &layer_of(&light_frame, ChartLayerKind::Markers).markers;
    let dark_markers = &layer_of(dark_frame, ChartLayerKind::Markers).markers;
    for (light, dark) in light_markers.iter().zip(dark_markers) {
        assert_eq!(light.fill_color, dark.fill_color);
        assert_ne!(light.stroke_color, dark.stroke_color);
    }
}

#[test]
fn repeated_theme_value_is_a_no_op() {
    let mut engine = engine_with_demo_data();
    let before = engine.last_frame().expect("frame").clone();
    engine.set_theme(Theme::Light).expect("same theme");
    assert_eq!(&before, engine.last_frame().expect("frame"));
}

#[test]
fn out_of_range_level_extrapolates_past_the_outer_ring() {
    let config = ChartEngineConfig::new(ChartConfig::new(400.0, 400.0, 60.0));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine
        .set_skills(vec![SkillRecord::new(
            "overdriven",
            150.0,
            Color::rgb(0.0, 0.0, 0.0),
        )])
        .expect("render extrapolated level");

    let frame = engine.last_frame().expect("frame after render");
    let marker = &layer_of(frame, ChartLayerKind::Markers).markers[0];
    let dx = marker.cx - 200.0;
    let dy = marker.cy - 200.0;
    assert_relative_eq!((dx * dx + dy * dy).sqrt(), 210.0, epsilon = 1e-9);
}

#[test]
fn duplicate_names_pass_through_at_distinct_angles() {
    let config = ChartEngineConfig::new(ChartConfig::new(400.0, 400.0, 60.0));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine
        .set_skills(vec![
            SkillRecord::new("twin", 40.0, Color::rgb(0.1, 0.1, 0.1)),
            SkillRecord::new("twin", 80.0, Color::rgb(0.9, 0.9, 0.9)),
        ])
        .expect("render duplicate names");

    let snapshot = engine.scene_snapshot();
    assert_eq!(snapshot.anchor_angles.len(), 2);
    assert!(snapshot.anchor_angles[0] < snapshot.anchor_angles[1]);
}

#[test]
fn scene_snapshot_round_trips_through_json() {
    let engine = engine_with_demo_data();
    let snapshot = engine.scene_snapshot();

    let json = serde_json::to_string(&snapshot).expect("serialize snapshot");
    let restored: radar_rs::api::SceneSnapshot =
        serde_json::from_str(&json).expect("deserialize snapshot");
    assert_eq!(snapshot, restored);
}
