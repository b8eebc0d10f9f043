use serde::de::DeserializeOwned;
use std::{
    fs::File,
    io::{self, Read},
    path::{Path, PathBuf},
    time::Instant,
};
use thiserror::Error;
use tracing::{debug, warn};
use zip::{ZipArchive, read::ZipFile};

mod config;
mod data;
pub mod models;
pub use config::*;
pub use data::*;
pub use models::*;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Could not find file with name: {0}")]
    FileNotFound(String),
    #[error("Path {0} is neither a directory nor a zip archive")]
    UnknownStorage(PathBuf),
}

#[derive(Default, Debug, Clone)]
pub enum StorageType {
    #[default]
    None,
    Directory(PathBuf),
    Zip(PathBuf),
}

/// Reads the tables of a GTFS feed, either from an extracted directory
/// or straight out of the zip archive.
#[derive(Default, Debug, Clone)]
pub struct GtfsReader {
    config: Config,
    storage: StorageType,
}

impl GtfsReader {
    pub fn new(config: self::Config) -> Self {
        Self {
            config,
            storage: Default::default(),
        }
    }

    pub fn from_zip<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.storage = StorageType::Zip(path.into());
        self
    }

    pub fn from_directory<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.storage = StorageType::Directory(path.into());
        self
    }

    /// Picks the storage type by looking at what is on disk.
    pub fn from_path<P: AsRef<Path>>(self, path: P) -> Result<Self, self::Error> {
        let path = path.as_ref();
        if path.is_dir() {
            Ok(self.from_directory(path))
        } else if path.is_file() {
            Ok(self.from_zip(path))
        } else {
            Err(self::Error::UnknownStorage(path.to_path_buf()))
        }
    }

    pub fn storage(&self) -> &StorageType {
        &self.storage
    }

    pub fn stream_calendar<F>(&self, f: F) -> Result<(), self::Error>
    where
        F: FnMut((usize, GtfsCalendar)),
    {
        self.stream(&self.config.calendar_file_name, f)
    }

    pub fn stream_calendar_dates<F>(&self, f: F) -> Result<(), self::Error>
    where
        F: FnMut((usize, GtfsCalendarDate)),
    {
        self.stream(&self.config.calendar_dates_file_name, f)
    }

    pub fn stream_trips<F>(&self, f: F) -> Result<(), self::Error>
    where
        F: FnMut((usize, GtfsTrip)),
    {
        self.stream(&self.config.trips_file_name, f)
    }

    pub fn stream_routes<F>(&self, f: F) -> Result<(), self::Error>
    where
        F: FnMut((usize, GtfsRoute)),
    {
        self.stream(&self.config.routes_file_name, f)
    }

    pub fn stream_shapes<F>(&self, f: F) -> Result<(), self::Error>
    where
        F: FnMut((usize, GtfsShape)),
    {
        self.stream(&self.config.shapes_file_name, f)
    }

    pub fn read_shapes(&self) -> Result<Vec<GtfsShape>, self::Error> {
        let mut shapes = Vec::new();
        self.stream_shapes(|(_, shape)| shapes.push(shape))?;
        Ok(shapes)
    }

    /// Loads every table the analysis needs. `calendar.txt` and
    /// `calendar_dates.txt` may each be absent from a valid feed.
    pub fn read_all(&self) -> Result<GtfsData, self::Error> {
        debug!("Reading gtfs tables...");
        let now = Instant::now();
        let mut data = GtfsData::default();
        optional(
            &self.config.calendar_file_name,
            self.stream_calendar(|(_, value)| data.calendar.push(value)),
        )?;
        optional(
            &self.config.calendar_dates_file_name,
            self.stream_calendar_dates(|(_, value)| data.calendar_dates.push(value)),
        )?;
        self.stream_trips(|(_, value)| data.trips.push(value))?;
        self.stream_routes(|(_, value)| data.routes.push(value))?;
        self.stream_shapes(|(_, value)| data.shapes.push(value))?;
        debug!(
            "Reading {} trips, {} routes and {} shape points took {:?}",
            data.trips.len(),
            data.routes.len(),
            data.shapes.len(),
            now.elapsed()
        );
        Ok(data)
    }

    fn stream<T, F>(&self, file_name: &str, f: F) -> Result<(), self::Error>
    where
        T: DeserializeOwned,
        F: FnMut((usize, T)),
    {
        match &self.storage {
            StorageType::None => Ok(()),
            StorageType::Directory(path) => stream_from_directory(path, file_name, f),
            StorageType::Zip(path) => stream_from_zip(path, file_name, f),
        }
    }
}

fn optional(file_name: &str, result: Result<(), self::Error>) -> Result<(), self::Error> {
    match result {
        Err(self::Error::FileNotFound(_)) => {
            warn!("Feed has no {file_name}, treating it as empty");
            Ok(())
        }
        other => other,
    }
}

fn stream_from_directory<T, F>(dir: &Path, file_name: &str, f: F) -> Result<(), self::Error>
where
    T: DeserializeOwned,
    F: FnMut((usize, T)),
{
    let path = dir.join(file_name);
    if !path.is_file() {
        return Err(self::Error::FileNotFound(path.display().to_string()));
    }
    let file = File::open(path)?;
    stream_csv(file, f)
}

fn stream_from_zip<T, F>(zip_path: &Path, file_name: &str, f: F) -> Result<(), self::Error>
where
    T: DeserializeOwned,
    F: FnMut((usize, T)),
{
    let zip_file = File::open(zip_path)?;
    let mut archive = ZipArchive::new(zip_file)?;
    let file = get_file(&mut archive, file_name)?;
    stream_csv(file, f)
}

fn stream_csv<R, T, F>(reader: R, mut f: F) -> Result<(), self::Error>
where
    R: Read,
    T: DeserializeOwned,
    F: FnMut((usize, T)),
{
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    for (i, record) in reader.deserialize().enumerate() {
        f((i, record?));
    }
    Ok(())
}

fn get_file<'a>(
    archive: &'a mut ZipArchive<File>,
    name: &'a str,
) -> Result<ZipFile<'a, File>, self::Error> {
    let index = archive
        .index_for_name(name)
        .ok_or(self::Error::FileNotFound(name.to_string()))?;
    let file = archive.by_index(index)?;
    Ok(file)
}
