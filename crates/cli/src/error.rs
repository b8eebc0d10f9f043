use std::{io, path::PathBuf};
use thiserror::Error;
use transit_usage::{analysis, gtfs};

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Analysis(#[from] analysis::Error),
    #[error(transparent)]
    Gtfs(#[from] gtfs::Error),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("Failed to fetch: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Response is not success ({status}): {body}")]
    Response { status: u16, body: String },
    #[error("The object at {0} exists but is not a directory")]
    NotADirectory(PathBuf),
}
