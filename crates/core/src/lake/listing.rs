//! Date-based discovery of raster tiles and HDF granules.
//!
//! Collections encode the acquisition date in their file names:
//!
//! ```text
//! sentinel-2  S2A_MSIL2A_20250401T015631_R117_T51LWC_20250401T043813_tile00.tif
//! landsat     LC08_L2SP_120034_20250401_02_T1_tile00.tif
//! icesat-2    ATL03_20250401015631_01230705_006_01.h5
//! ```
//!
//! For Sentinel-2 the first stamp (sensing time) is used. A greedy
//! `S2.\w+_(\d{8})T\d{6}_`, as the upstream ETL scripts write it, would
//! land on the last stamp (processing baseline) instead; the pattern here is
//! lazy so a tile is filed under the day it was acquired.

use super::error::{LakeError, LakeResult};
use chrono::NaiveDate;
use ck_protocol::{HdfKind, RasterKind};
use regex::Regex;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extracts the acquisition date from a granule file name.
#[derive(Debug, Clone)]
pub struct DatePattern {
    regex: Regex,
    extension: &'static str,
}

impl DatePattern {
    pub fn for_raster(kind: RasterKind) -> LakeResult<Self> {
        let pattern = match kind {
            // Lazy: first (sensing) stamp, not the trailing processing stamp.
            RasterKind::Sentinel2 => r"S2.\w*?_(\d{8})T\d{6}_",
            RasterKind::Landsat => r"LC.._L2SP_\d{6}_(\d{8})_",
        };
        Ok(Self {
            regex: Regex::new(pattern)?,
            extension: "tif",
        })
    }

    pub fn for_hdf(kind: HdfKind) -> LakeResult<Self> {
        let pattern = match kind {
            HdfKind::Icesat2 => r"ATL\d{2}_(\d{8})\d{6}_",
        };
        Ok(Self {
            regex: Regex::new(pattern)?,
            extension: "h5",
        })
    }

    /// Acquisition date encoded in `file_name`, if it follows the convention.
    pub fn date_of(&self, file_name: &str) -> Option<NaiveDate> {
        let stamp = self.regex.captures(file_name)?.get(1)?.as_str();
        NaiveDate::parse_from_str(stamp, "%Y%m%d").ok()
    }

    fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(self.extension))
    }
}

/// Raster tiles under `<root>/<kind>/` acquired on `date`, sorted by path.
pub fn list_rasters_for_date(root: &Path, kind: RasterKind, date: NaiveDate) -> LakeResult<Vec<PathBuf>> {
    list_for_date(&root.join(kind.as_str()), &DatePattern::for_raster(kind)?, date)
}

/// HDF granules under `<root>/<kind>/` acquired on `date`, sorted by path.
pub fn list_hdf_for_date(root: &Path, kind: HdfKind, date: NaiveDate) -> LakeResult<Vec<PathBuf>> {
    list_for_date(&root.join(kind.as_str()), &DatePattern::for_hdf(kind)?, date)
}

fn list_for_date(dir: &Path, pattern: &DatePattern, date: NaiveDate) -> LakeResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(LakeError::DatasetDirMissing {
            path: dir.to_path_buf(),
        });
    }

    let mut matching = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|source| LakeError::DirectoryWalk {
            path: dir.to_path_buf(),
            source,
        })?;

        let path = entry.path();
        if !entry.file_type().is_file() || !pattern.matches_extension(path) {
            continue;
        }

        let Some(name) = path.file_name().and_then(|s| s.to_str()) else {
            continue;
        };
        if pattern.date_of(name) == Some(date) {
            matching.push(path.to_path_buf());
        }
    }

    matching.sort();
    tracing::debug!(dir = %dir.display(), %date, count = matching.len(), "listed granules");
    Ok(matching)
}
