pub use crate::{
    analysis::{
        LongestRoute, PlotPoint, ServiceDayCounts, ShapeLength, ShapeUsage, VehicleType,
        VehicleUsage, aggregate, collect_shape_data, count_days, generate_plot_data,
        longest_routes, measure, reshape, vehicle_distribution,
    },
    export::{read_csv, write_csv},
    gtfs::{GtfsData, GtfsReader},
    shared::{Coordinate, Distance},
};
