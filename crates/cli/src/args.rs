use clap::{Parser, Subcommand};
use std::path::PathBuf;
use transit_usage::analysis::DEFAULT_LONGEST_ROUTES;

/// Usage statistics for the shapes of a GTFS feed
#[derive(Debug, Parser)]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Download a GTFS zip and extract it into a directory
    Fetch(FetchArgs),
    /// Count how often each shape is traveled and build the plot data
    Shapes(ShapesArgs),
    /// Measure the length of each shape
    Lengths(LengthsArgs),
    /// Build report tables from previously written shape data
    Report(ReportArgs),
}

#[derive(Debug, clap::Args)]
pub struct FetchArgs {
    /// The URL of the GTFS zip
    #[arg(short, long)]
    pub url: String,
    /// The directory the feed is extracted into, created if missing
    #[arg(short, long)]
    pub out_dir: PathBuf,
}

#[derive(Debug, clap::Args)]
pub struct ShapesArgs {
    /// The extracted GTFS directory or the GTFS zip
    #[arg(short, long)]
    pub gtfs: PathBuf,
    /// Where shape_data.csv and plot_data.csv are written. Defaults to the
    /// GTFS directory, or the directory holding the zip
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,
}

#[derive(Debug, clap::Args)]
pub struct LengthsArgs {
    /// The extracted GTFS directory or the GTFS zip
    #[arg(short, long)]
    pub gtfs: PathBuf,
    /// The csv file the shape lengths are written to
    #[arg(short, long)]
    pub out: PathBuf,
}

#[derive(Debug, clap::Args)]
pub struct ReportArgs {
    #[command(subcommand)]
    pub table: ReportTable,
}

#[derive(Debug, Subcommand)]
pub enum ReportTable {
    /// The longest shapes with how often they are traveled
    Longest {
        /// A csv file containing shape data
        #[arg(short, long)]
        shape_data: PathBuf,
        /// A csv file containing distance data
        #[arg(short, long)]
        distance_data: PathBuf,
        /// The path of the output file
        #[arg(short, long)]
        out: PathBuf,
        /// Number of longest routes to keep
        #[arg(short, long, default_value_t = DEFAULT_LONGEST_ROUTES)]
        num_rows: usize,
    },
    /// How often each vehicle type travels over the validity window
    Vehicles {
        /// A csv file containing shape data
        #[arg(short, long)]
        shape_data: PathBuf,
        /// The path of the output file
        #[arg(short, long)]
        out: PathBuf,
    },
}
