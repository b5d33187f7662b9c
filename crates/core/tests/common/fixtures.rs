//! Test fixtures for sample configurations and lake layouts.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The full sample shipped as the `coastkit init` template.
pub const SAMPLE_YAML: &str = include_str!("../../../../templates/coastkit.yaml");

/// Workflow settings only.
#[allow(dead_code)]
pub const MINIMAL_YAML: &str = include_str!("../../../../templates/coastkit.minimal.yaml");

/// TOML rendition of `MINIMAL_YAML`.
#[allow(dead_code)]
pub const MINIMAL_TOML: &str = r#"
workflow_folder = "./"
date = 2025-04-01

[python]
python_path = "python3"
conda_path = "/opt/conda/"
conda_env = "coastal"

[directories]
data_dir = "data/"
output_base = "output"

[directories.covariates]
raw = "covariates/raw/"

[processing.baseline]
smoothing_window = 5
simplify_tolerance = 10.0

[processing.transects]
spacing = 100.0
length = 500.0
iterative_refit = [100]

[processing.shoreline]
min_obs = 0.5

[processing.wave]
source = "cmems"
dataset_id = "cmems_mod_glo_wav_my_0.2deg_PT3H-i"
start_date = 1993-01-01

[processing.soil]
source = "soilgrids"
properties = ["clay"]
"#;

/// Write `content` to `name` inside a fresh temporary directory.
///
/// Returns the TempDir (keep it alive for the test duration) and the file path.
pub fn write_config(name: &str, content: &str) -> std::io::Result<(TempDir, PathBuf)> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join(name);
    fs::write(&path, content)?;
    Ok((dir, path))
}

/// Populate `lake_root` with the inputs the sample `dataConfig` asks for.
///
/// The configured date is 2025-04-01; every collection also holds a granule
/// from the following day that must not be picked up. The silver tier lacks
/// `buildings.parquet`.
#[allow(dead_code)]
pub fn create_sample_lake(lake_root: &Path) -> std::io::Result<()> {
    let files = [
        "bronze/sentinel-2/S2A_MSIL2A_20250401T015631_R117_T51LWC_20250401T043813_tile00.tif",
        "bronze/sentinel-2/S2A_MSIL2A_20250401T015631_R117_T51LWC_20250401T043813_tile01.tif",
        "bronze/sentinel-2/S2B_MSIL2A_20250402T015631_R117_T51LWC_20250402T043813_tile00.tif",
        "bronze/landsat/LC08_L2SP_120034_20250401_02_T1_tile00.tif",
        "bronze/landsat/LC08_L2SP_120034_20250401_02_T1_tile00.json",
        "bronze/landsat/LC09_L2SP_120034_20250402_02_T1_tile00.tif",
        "silver/icesat-2/ATL03_20250401015631_01230705_006_01.h5",
        "silver/icesat-2/ATL03_20250402015631_01230705_006_01.h5",
        "silver/coastline.gpkg",
        "gold/tables/test_data.parquet",
        "gold/tables/test_data.csv",
    ];

    for file in files {
        let path = lake_root.join(file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, b"")?;
    }
    Ok(())
}
