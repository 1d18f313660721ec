//! Tests for the parallel-path offset routine.

use cairn_model::{Point, parallel_path};

const EPS: f64 = 1e-9;

fn assert_point_eq(actual: Point, expected: Point) {
    assert!(
        actual.distance(expected) < EPS,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn horizontal_line_offsets_downwards_for_positive_dy() {
    let line = [Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
    let offset = parallel_path(&line, 2.0);

    assert_eq!(offset.len(), 2);
    assert_point_eq(offset[0], Point::new(0.0, 2.0));
    assert_point_eq(offset[1], Point::new(10.0, 2.0));
}

#[test]
fn negative_dy_offsets_to_the_other_side() {
    let line = [Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
    let offset = parallel_path(&line, -2.0);

    assert_point_eq(offset[0], Point::new(0.0, -2.0));
    assert_point_eq(offset[1], Point::new(10.0, -2.0));
}

#[test]
fn vertical_line_offsets_horizontally() {
    let line = [Point::new(5.0, 0.0), Point::new(5.0, 10.0)];
    let offset = parallel_path(&line, 3.0);

    assert_point_eq(offset[0], Point::new(2.0, 0.0));
    assert_point_eq(offset[1], Point::new(2.0, 10.0));
}

#[test]
fn output_has_same_topology_as_input() {
    let path = [
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(20.0, 10.0),
    ];
    let offset = parallel_path(&path, 1.5);
    assert_eq!(offset.len(), path.len());
}

#[test]
fn right_angle_join_sits_on_the_miter() {
    // An L-shape turning down: the interior point must be offset along
    // both segment normals at once, i.e. diagonally.
    let path = [
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
    ];
    let offset = parallel_path(&path, 2.0);

    assert_point_eq(offset[0], Point::new(0.0, 2.0));
    assert_point_eq(offset[1], Point::new(8.0, 2.0));
    assert_point_eq(offset[2], Point::new(8.0, 10.0));
}

#[test]
fn offset_path_keeps_distance_on_straight_segments() {
    let path = [
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(20.0, 0.0),
    ];
    let offset = parallel_path(&path, 4.0);

    for (original, moved) in path.iter().zip(&offset) {
        assert!((original.distance(*moved) - 4.0).abs() < EPS);
    }
}

#[test]
fn degenerate_inputs_are_returned_unchanged() {
    assert!(parallel_path(&[], 5.0).is_empty());

    let single = [Point::new(3.0, 4.0)];
    let offset = parallel_path(&single, 5.0);
    assert_eq!(offset.len(), 1);
    assert_point_eq(offset[0], single[0]);
}

#[test]
fn zero_length_segment_does_not_produce_nan() {
    let path = [
        Point::new(0.0, 0.0),
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
    ];
    let offset = parallel_path(&path, 2.0);

    for point in offset {
        assert!(point.x.is_finite());
        assert!(point.y.is_finite());
    }
}
