//! Data-lake configuration models for the `dataConfig` section.
//!
//! The lake is organised in maturity tiers (bronze → platinum). Each tier
//! lists the datasets a run pulls from it: date-stamped raster and HDF
//! granules, vector layers, parquet tables and plain tables.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Data-lake maturity tier.
///
/// Ordering follows maturity, so tiers iterate bronze first.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Raw ingested data.
    Bronze,
    /// Cleaned, conformed data.
    Silver,
    /// Analysis-ready products.
    Gold,
    /// Curated deliverables.
    Platinum,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::Bronze, Tier::Silver, Tier::Gold, Tier::Platinum];

    /// Directory (and container) name of the tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Bronze => "bronze",
            Tier::Silver => "silver",
            Tier::Gold => "gold",
            Tier::Platinum => "platinum",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raster collections with date-stamped tile names.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RasterKind {
    #[serde(rename = "sentinel-2")]
    Sentinel2,
    #[serde(rename = "landsat")]
    Landsat,
}

impl RasterKind {
    /// Dataset directory name inside a tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            RasterKind::Sentinel2 => "sentinel-2",
            RasterKind::Landsat => "landsat",
        }
    }

    /// Whether tiles ship with a sibling `.json` metadata file.
    pub fn has_json_sidecar(&self) -> bool {
        matches!(self, RasterKind::Landsat)
    }
}

impl fmt::Display for RasterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// HDF5 granule collections.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HdfKind {
    #[serde(rename = "icesat-2")]
    Icesat2,
}

impl HdfKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            HdfKind::Icesat2 => "icesat-2",
        }
    }
}

impl fmt::Display for HdfKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// On-disk vector container, derived from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorFormat {
    GeoPackage,
    Parquet,
}

/// A vector dataset inside a tier.
///
/// `name` is relative to the tier root and must end in `.gpkg` or
/// `.parquet`. A GeoPackage may name a `layer`; a GeoParquet file may carry
/// a `sql_query`, never both.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VectorFile {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sql_query: Option<String>,
}

impl VectorFile {
    /// Container format, or `None` when the extension is not recognised.
    pub fn format(&self) -> Option<VectorFormat> {
        if self.name.ends_with(".gpkg") {
            Some(VectorFormat::GeoPackage)
        } else if self.name.ends_with(".parquet") {
            Some(VectorFormat::Parquet)
        } else {
            None
        }
    }
}

/// A parquet table inside a tier.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ParquetFile {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sql_query: Option<String>,
}

/// A plain tabular file (CSV, feather, ...) copied verbatim.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TableFile {
    pub name: String,
}

/// Datasets pulled from one tier.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryContent {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub raster: Vec<RasterKind>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hdf: Vec<HdfKind>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vector: Vec<VectorFile>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parquet: Vec<ParquetFile>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub table: Vec<TableFile>,
}

/// The `dataConfig` section.
///
/// # Example
///
/// ```yaml
/// dataConfig:
///   date: 2025-04-01
///   azureRoot: ./
///   aoi: aoi.gpkg
///   output_base: output
///   directories:
///     bronze:
///       raster: [sentinel-2, landsat]
///     silver:
///       vector:
///         - name: coastline.gpkg
///           layer: coastline
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DataConfig {
    /// Acquisition date selected from date-stamped collections.
    pub date: NaiveDate,

    /// Lake root relative to the mount point (directory).
    #[serde(rename = "azureRoot")]
    pub azure_root: String,

    /// Area-of-interest file.
    pub aoi: String,

    /// Output folder below the local root.
    #[serde(default = "default_output_base")]
    pub output_base: String,

    pub directories: BTreeMap<Tier, DirectoryContent>,
}

fn default_output_base() -> String {
    "output".to_string()
}
