//! Processing parameter models for the `processing` section.
//!
//! Each external stage (baseline smoothing, transect casting, shoreline
//! extraction, wave and soil covariate retrieval) reads its parameters from
//! one sub-section. Only the parameters are modelled here; the stages
//! themselves run outside coastkit.

use crate::datetime::IsoDateTime;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// All per-stage parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProcessingConfig {
    pub baseline: BaselineParams,
    pub transects: TransectParams,
    pub shoreline: ShorelineParams,
    pub wave: WaveParams,
    pub soil: SoilParams,
}

/// Baseline smoothing parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BaselineParams {
    /// Moving-window size, in vertices.
    pub smoothing_window: u32,

    /// Douglas-Peucker tolerance, in metres.
    pub simplify_tolerance: f64,
}

/// Transect casting parameters. Distances are in metres.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TransectParams {
    /// Along-shore spacing between transects.
    pub spacing: f64,

    /// Cross-shore length of each transect.
    pub length: f64,

    /// Landward offset of the transect origin from the baseline.
    #[serde(default)]
    pub offset: f64,

    /// Refit distance for each refinement pass; one entry per pass.
    pub iterative_refit: Vec<u32>,
}

/// Shoreline extraction parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ShorelineParams {
    /// Minimum fraction of valid observations a transect needs, in `[0, 1]`.
    pub min_obs: f64,

    /// Scenes above this cloud percentage are dropped.
    #[serde(default = "default_max_cloud_cover")]
    pub max_cloud_cover: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

/// Wave reanalysis retrieval parameters.
///
/// ```yaml
/// wave:
///   source: cmems
///   dataset_id: cmems_mod_glo_wav_my_0.2deg_PT3H-i
///   start_date: 1993-01-01T00:00:00
///   variables: [VHM0, VSDX, VSDY]
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WaveParams {
    /// Remote service identifier.
    pub source: String,

    /// Dataset identifier within the service.
    pub dataset_id: String,

    pub start_date: IsoDateTime,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<IsoDateTime>,

    /// Variables to retrieve (significant height, Stokes drift x/y, ...).
    #[serde(default)]
    pub variables: Vec<String>,

    /// Search radius around each transect, in degrees.
    #[serde(default = "default_search_radius")]
    pub search_radius: f64,
}

/// Soil raster retrieval parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SoilParams {
    /// Remote service identifier.
    pub source: String,

    /// Soil properties to retrieve (clay, sand, ...).
    pub properties: Vec<String>,

    /// Depth intervals such as `0-5cm`.
    #[serde(default)]
    pub depths: Vec<String>,

    #[serde(default = "default_statistic")]
    pub statistic: String,

    /// Raster resolution, in metres.
    #[serde(default = "default_resolution")]
    pub resolution: u32,
}

fn default_max_cloud_cover() -> f64 {
    100.0
}

fn default_search_radius() -> f64 {
    0.5
}

fn default_statistic() -> String {
    "mean".to_string()
}

fn default_resolution() -> u32 {
    250
}
