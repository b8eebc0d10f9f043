mod common;

use common::point;
use transit_usage::{analysis::measure, analysis::path_length, shared::Coordinate};

const KM_PER_DEGREE: f64 = 40_075.0 / 360.0;

/// The projection passes degrees to `cos`. These expectations follow that
/// formula, not a true geodesic.
fn planar(lat: f64, lon: f64) -> (f64, f64) {
    (KM_PER_DEGREE * lon * f64::cos(lat), KM_PER_DEGREE * lat)
}

#[test]
fn one_degree_along_equator_test() {
    let lengths = measure(&[point("S2", 0.0, 0.0, 1), point("S2", 0.0, 1.0, 2)]);
    assert_eq!(lengths.len(), 1);
    assert_eq!(lengths[0].shape_id, "S2");
    assert!((lengths[0].distance - KM_PER_DEGREE).abs() < 1e-9);
}

#[test]
fn single_point_has_no_length_test() {
    let lengths = measure(&[point("S1", 47.3, 8.5, 1)]);
    assert_eq!(lengths[0].distance, 0.0);
}

#[test]
fn sum_of_consecutive_distances_test() {
    let coords = [(47.37, 8.54), (47.38, 8.55), (47.39, 8.55), (47.40, 8.53)];
    let points: Vec<_> = coords
        .iter()
        .enumerate()
        .map(|(i, (lat, lon))| point("S1", *lat, *lon, i as u32 + 1))
        .collect();

    let expected: f64 = coords
        .windows(2)
        .map(|pair| {
            let (ax, ay) = planar(pair[0].0, pair[0].1);
            let (bx, by) = planar(pair[1].0, pair[1].1);
            f64::sqrt((bx - ax).powi(2) + (by - ay).powi(2))
        })
        .sum();

    let lengths = measure(&points);
    assert!((lengths[0].distance - expected).abs() < 1e-9);
}

#[test]
fn cos_takes_degrees_test() {
    // One degree of longitude at latitude 60. A radian based projection would
    // give half a degree of distance; this one uses cos(60 rad).
    let d = path_length([Coordinate::new(60.0, 0.0), Coordinate::new(60.0, 1.0)]);
    let expected = KM_PER_DEGREE * f64::cos(60.0).abs();
    assert!((d.as_kilometers() - expected).abs() < 1e-9);
}

#[test]
fn points_keep_file_order_test() {
    // Out of sequence points are measured as they appear.
    let points = [
        point("S1", 0.0, 0.0, 1),
        point("S1", 0.0, 2.0, 3),
        point("S1", 0.0, 1.0, 2),
    ];
    let lengths = measure(&points);
    assert!((lengths[0].distance - 3.0 * KM_PER_DEGREE).abs() < 1e-9);
}

#[test]
fn shapes_in_order_of_first_appearance_test() {
    let points = [
        point("B", 0.0, 0.0, 1),
        point("A", 0.0, 0.0, 1),
        point("B", 0.0, 1.0, 2),
        point("A", 1.0, 0.0, 2),
    ];
    let lengths = measure(&points);
    let ids: Vec<_> = lengths.iter().map(|l| l.shape_id.as_str()).collect();
    assert_eq!(ids, ["B", "A"]);
    assert!((lengths[0].distance - KM_PER_DEGREE).abs() < 1e-9);
    assert!((lengths[1].distance - KM_PER_DEGREE).abs() < 1e-9);
}

#[test]
fn empty_input_test() {
    assert!(measure(&[]).is_empty());
}
