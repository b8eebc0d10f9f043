use crate::{args::FetchArgs, commands::ensure_dir, error::Error};
use futures_util::StreamExt;
use std::{fs, path::Path};
use tokio::{fs::File, io::AsyncWriteExt};
use tracing::{debug, info};
use zip::ZipArchive;

const DOWNLOAD_FILE_NAME: &str = ".gtfs_download.zip";

pub async fn fetch(args: FetchArgs) -> Result<(), Error> {
    ensure_dir(&args.out_dir)?;
    let download_path = args.out_dir.join(DOWNLOAD_FILE_NAME);

    info!("Downloading {}...", args.url);
    let response = reqwest::Client::new()
        .get(&args.url)
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        return Err(Error::Response { status, body });
    }

    let mut file = File::create(&download_path).await?;
    let mut stream = response.bytes_stream();
    let mut size = 0;
    while let Some(chunk) = stream.next().await {
        let data = chunk?;
        size += data.len();
        file.write_all(&data).await?;
    }
    file.flush().await?;
    debug!("Downloaded {size} bytes to {}", download_path.display());

    unpack(&download_path, &args.out_dir)?;
    info!(
        "Contents unpacked successfully to {}",
        args.out_dir.display()
    );
    Ok(())
}

/// Extracts `archive_path` into `out_dir`. The archive is removed afterwards,
/// also when extraction fails.
fn unpack(archive_path: &Path, out_dir: &Path) -> Result<(), Error> {
    let result = fs::File::open(archive_path)
        .map_err(Error::from)
        .and_then(|file| Ok(ZipArchive::new(file)?))
        .and_then(|mut archive| Ok(archive.extract(out_dir)?));
    fs::remove_file(archive_path)?;
    result
}

#[test]
fn unpack_removes_broken_download_test() {
    let dir = std::env::temp_dir().join(format!("transit_usage_unpack_{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let archive_path = dir.join(DOWNLOAD_FILE_NAME);
    fs::write(&archive_path, "<html>not a zip</html>").unwrap();

    let result = unpack(&archive_path, &dir);
    assert!(matches!(result, Err(Error::Zip(_))));
    assert!(!archive_path.exists());
    fs::remove_dir_all(dir).unwrap();
}
