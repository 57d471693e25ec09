use super::*;

fn assert_point(actual: [f64; 2], expected: [f64; 2]) {
    assert!((actual[0] - expected[0]).abs() < 1e-9, "lat {} != {}", actual[0], expected[0]);
    assert!((actual[1] - expected[1]).abs() < 1e-9, "lng {} != {}", actual[1], expected[1]);
}

#[test]
fn parse_accepts_known_shapes() {
    assert_eq!(ShapeKind::parse("line"), Some(ShapeKind::Line));
    assert_eq!(ShapeKind::parse("triangle"), Some(ShapeKind::Triangle));
    assert_eq!(ShapeKind::parse("square"), Some(ShapeKind::Square));
}

#[test]
fn parse_fails_closed_on_unknown_input() {
    assert_eq!(ShapeKind::parse("circle"), None);
    assert_eq!(ShapeKind::parse("Line"), None);
    assert_eq!(ShapeKind::parse(""), None);
}

#[test]
fn shape_kind_round_trips_through_as_str() {
    for kind in ShapeKind::ALL {
        assert_eq!(ShapeKind::parse(kind.as_str()), Some(kind));
    }
}

#[test]
fn shape_kind_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&ShapeKind::Square).unwrap(), r#""square""#);
    assert_eq!(serde_json::to_string(&ShapeKind::Line).unwrap(), r#""line""#);
    assert_eq!(serde_json::to_string(&ShapeKind::Triangle).unwrap(), r#""triangle""#);
}

#[test]
fn square_overlay_is_rectangle_around_anchor() {
    let Overlay::Rectangle { bounds, color } = overlay_for(ShapeKind::Square) else {
        panic!("square should be a rectangle");
    };
    assert_point(bounds[0], [40.1128, -88.2259]);
    assert_point(bounds[1], [40.1148, -88.2239]);
    assert_eq!(color, "blue");
}

#[test]
fn triangle_overlay_is_polygon_around_anchor() {
    let Overlay::Polygon { positions, color } = overlay_for(ShapeKind::Triangle) else {
        panic!("triangle should be a polygon");
    };
    assert_eq!(positions.len(), 3);
    assert_point(positions[0], [40.1138, -88.2259]);
    assert_point(positions[1], [40.1128, -88.2239]);
    assert_point(positions[2], [40.1148, -88.2239]);
    assert_eq!(color, "red");
}

#[test]
fn line_overlay_is_polyline_through_anchor() {
    let Overlay::Polyline { positions, color } = overlay_for(ShapeKind::Line) else {
        panic!("line should be a polyline");
    };
    assert_eq!(positions.len(), 2);
    assert_point(positions[0], [40.1128, -88.2259]);
    assert_point(positions[1], [40.1148, -88.2239]);
    assert_eq!(color, "green");
}

#[test]
fn overlay_is_stateless_across_selections() {
    // Selecting a shape after other selections yields the identical geometry.
    let first = overlay_for(ShapeKind::Triangle);
    let _ = overlay_for(ShapeKind::Square);
    let _ = overlay_for(ShapeKind::Line);
    let again = overlay_for(ShapeKind::Triangle);
    assert_eq!(first, again);
}

#[test]
fn overlay_serializes_with_type_tag() {
    let json = serde_json::to_value(overlay_for(ShapeKind::Square)).unwrap();
    assert_eq!(json.get("type").and_then(|v| v.as_str()), Some("rectangle"));

    let json = serde_json::to_value(overlay_for(ShapeKind::Line)).unwrap();
    assert_eq!(json.get("type").and_then(|v| v.as_str()), Some("polyline"));
}

#[test]
fn latlng_pair_is_lat_then_lng() {
    let point = SIEBEL_CENTER.pair();
    assert_point(point, [40.1138, -88.2249]);
}
