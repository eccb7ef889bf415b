use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, info, warn};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::progress::ProgressTracker;
use crate::sources::ModelSource;

const CHUNK_SIZE: usize = 8192;

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP Error {status}: {url}")]
    Status { status: StatusCode, url: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Something that can place the body behind `url` at `dest`.
///
/// Returns the number of bytes written.
pub trait ModelFetcher {
    fn fetch(&self, url: &str, dest: &Path) -> Result<u64, DownloadError>;
}

/// Single blocking GET, no retries.
pub struct HttpFetcher {
    client: Client,
    show_progress: bool,
}

impl HttpFetcher {
    pub fn new(timeout: Option<Duration>) -> Result<Self, DownloadError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            show_progress: true,
        })
    }

    pub fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }
}

impl ModelFetcher for HttpFetcher {
    fn fetch(&self, url: &str, dest: &Path) -> Result<u64, DownloadError> {
        debug!("GET {}", url);
        let mut response = self.client.get(url).send()?;
        let status = response.status();
        debug!("response status {} for {}", status, url);
        if !status.is_success() {
            return Err(DownloadError::Status {
                status,
                url: url.to_string(),
            });
        }

        let dir = parent_dir(dest);
        fs::create_dir_all(dir)?;

        // Body lands in a temp file next to the destination; dropping it on
        // error removes the partial download.
        let mut temp_file = NamedTempFile::new_in(dir)?;

        let filename = dest
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let progress = self
            .show_progress
            .then(|| ProgressTracker::new(response.content_length(), &filename));

        let mut buf = [0u8; CHUNK_SIZE];
        let mut downloaded: u64 = 0;
        loop {
            let n = match response.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    if let Some(ref progress) = progress {
                        progress.abandon();
                    }
                    return Err(e.into());
                }
            };
            temp_file.write_all(&buf[..n])?;
            downloaded += n as u64;
            if let Some(ref progress) = progress {
                progress.update(downloaded);
            }
        }
        temp_file.flush()?;

        if let Some(progress) = progress {
            progress.finish();
        }

        if downloaded == 0 {
            warn!("{} returned an empty body", url);
        }

        temp_file.persist(dest).map_err(|e| e.error)?;
        debug!("wrote {} bytes to {}", downloaded, dest.display());

        Ok(downloaded)
    }
}

fn parent_dir(dest: &Path) -> &Path {
    match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}

pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / (1024.0 * 1024.0))
}

/// Downloads `source` into `dir`, reporting progress on `out`.
///
/// Download failures are reported and turned into `Ok(None)`; only errors
/// writing to `out` propagate.
pub fn download_model(
    fetcher: &dyn ModelFetcher,
    source: &ModelSource,
    dir: &Path,
    out: &mut impl Write,
) -> io::Result<Option<PathBuf>> {
    let dest = source.destination(dir);

    writeln!(out, "Downloading {}...", source.filename)?;
    writeln!(out, "From: {}", source.url)?;
    out.flush()?;

    let result = fetcher
        .fetch(source.url, &dest)
        .and_then(|_| Ok(fs::metadata(&dest)?.len()));

    match result {
        Ok(size) => {
            info!("downloaded {} ({} bytes)", dest.display(), size);
            writeln!(out, "✓ Downloaded successfully: {}", format_megabytes(size))?;
            Ok(Some(dest))
        }
        Err(e) => {
            warn!("download of {} failed: {}", source.url, e);
            writeln!(out, "✗ Failed: {}", e)?;
            Ok(None)
        }
    }
}
