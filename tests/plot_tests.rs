mod common;

use common::point;
use transit_usage::analysis::{PlotPoint, ShapeUsage, insert_separators, reshape};

fn usage(shape_id: &str, times_taken: u64, color: &str) -> ShapeUsage {
    ShapeUsage {
        shape_id: shape_id.into(),
        times_taken,
        route_id: format!("route-{shape_id}"),
        route_short_name: Some(shape_id.to_lowercase()),
        route_type: Some(3),
        route_color: Some(color.into()),
    }
}

#[test]
fn separator_after_every_shape_test() {
    let points = [
        point("S1", 1.0, 1.0, 1),
        point("S1", 1.0, 2.0, 2),
        point("S1", 1.0, 3.0, 3),
        point("S2", 2.0, 1.0, 1),
        point("S2", 2.0, 2.0, 2),
        point("S3", 3.0, 1.0, 1),
    ];
    let rows = insert_separators(&points);
    assert_eq!(rows.len(), 6 + 3);

    let separators: Vec<usize> = rows
        .iter()
        .enumerate()
        .filter(|(_, row)| row.is_separator())
        .map(|(i, _)| i)
        .collect();
    assert_eq!(separators, [3, 6, 8]);
    assert_eq!(rows[3], PlotPoint::separator("S1"));
    assert_eq!(rows[6].shape_id, "S2");
    assert_eq!(rows[8].shape_id, "S3");
    assert!(rows[..3].iter().all(|row| row.shape_id == "S1" && !row.is_separator()));
    assert_eq!(rows[1].shape_pt_lon, Some(2.0));
    assert_eq!(rows[1].shape_pt_sequence, Some(2));
}

#[test]
fn groups_in_order_of_first_appearance_test() {
    let points = [
        point("B", 0.0, 0.0, 1),
        point("A", 0.0, 0.0, 1),
        point("B", 0.0, 1.0, 2),
    ];
    let rows = insert_separators(&points);
    let ids: Vec<_> = rows.iter().map(|row| row.shape_id.as_str()).collect();
    assert_eq!(ids, ["B", "B", "B", "A", "A"]);
    assert!(rows[2].is_separator());
    assert!(rows[4].is_separator());
    assert_eq!(rows[1].shape_pt_lon, Some(1.0));
}

#[test]
fn reshape_joins_usage_test() {
    let points = [
        point("S1", 1.0, 1.0, 1),
        point("S1", 1.0, 2.0, 2),
        point("S2", 2.0, 1.0, 1),
    ];
    let rows = reshape(&points, &[usage("S1", 23, "FF0000")]);
    assert_eq!(rows.len(), 5);

    assert_eq!(rows[0].times_taken, Some(23));
    assert_eq!(rows[0].route_color.as_deref(), Some("FF0000"));
    assert_eq!(rows[0].route_id.as_deref(), Some("route-S1"));

    // The separator keeps its shape key, so it is joined too.
    assert!(rows[2].is_separator());
    assert_eq!(rows[2].times_taken, Some(23));
    assert_eq!(rows[2].shape_pt_lat, None);

    // No usage row for S2.
    assert_eq!(rows[3].times_taken, None);
    assert_eq!(rows[3].route_color, None);
    assert_eq!(rows[3].shape_pt_lat, Some(2.0));
}

#[test]
fn empty_input_test() {
    assert!(reshape(&[], &[]).is_empty());
}
