//! Output directory for rendered images.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use dc_core::DistributionFamily;

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "graficas";

const STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Owns the directory images are written into.
///
/// The directory is created by [`ArtifactStore::init`] and never again.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    /// Create `dir` (and parents) if absent.
    pub fn init(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create output directory {}", dir.display()))?;
        tracing::debug!(dir = %dir.display(), "output directory ready");
        Ok(Self { dir })
    }

    /// Write `bytes` as `{family}_{YYYYMMDD_HHMMSS}.{ext}` stamped with local time.
    pub fn save(&self, family: DistributionFamily, ext: &str, bytes: &[u8]) -> Result<PathBuf> {
        self.save_at(family, ext, bytes, chrono::Local::now().naive_local())
    }

    /// Like [`ArtifactStore::save`] with an explicit timestamp.
    ///
    /// A second save within the same second gets a `_1`, `_2`, ... suffix
    /// instead of replacing the earlier file.
    pub fn save_at(
        &self,
        family: DistributionFamily,
        ext: &str,
        bytes: &[u8],
        stamp: NaiveDateTime,
    ) -> Result<PathBuf> {
        let base = artifact_stem(family, stamp);
        for attempt in 0u32.. {
            let name = match attempt {
                0 => format!("{base}.{ext}"),
                n => format!("{base}_{n}.{ext}"),
            };
            let path = self.dir.join(name);
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(mut file) => {
                    file.write_all(bytes)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    tracing::info!(path = %path.display(), bytes = bytes.len(), "image saved");
                    return Ok(path);
                }
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
                Err(e) => {
                    return Err(e).with_context(|| format!("failed to create {}", path.display()));
                }
            }
        }
        anyhow::bail!("no free file name for {base}.{ext}")
    }
}

/// `{family}_{YYYYMMDD_HHMMSS}`
pub fn artifact_stem(family: DistributionFamily, stamp: NaiveDateTime) -> String {
    format!("{}_{}", family.as_str(), stamp.format(STAMP_FORMAT))
}
