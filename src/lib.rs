//! Per-shape usage statistics for GTFS static feeds: how often each shape is
//! traveled over the timetable validity window, how long it is, and a point
//! table ready for line plots.

pub mod analysis;
pub mod export;
pub mod gtfs;
pub mod prelude;
pub mod shared;
