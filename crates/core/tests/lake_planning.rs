//! End-to-end tests for planning lake transfers from the sample document.

mod common;

use ck_core::config::Config;
use ck_core::lake::{execute_plan, plan_transfers, DatasetKind, LakeError, PlanOptions};
use ck_protocol::{HdfKind, RasterKind, Tier};
use common::{create_sample_lake, SAMPLE_YAML};
use tempfile::tempdir;

#[test]
fn test_plan_sample_lake() {
    let config = Config::from_yaml_str(SAMPLE_YAML).expect("Failed to load sample");
    let data = config.data_config().expect("sample has a dataConfig");

    let lake = tempdir().unwrap();
    let local = tempdir().unwrap();
    create_sample_lake(lake.path()).expect("Failed to create lake");

    let plan = plan_transfers(data, lake.path(), local.path(), &PlanOptions::default())
        .expect("Failed to plan");

    let bronze: Vec<_> = plan.for_tier(Tier::Bronze).collect();
    let sentinel = bronze
        .iter()
        .filter(|t| t.kind == DatasetKind::Raster(RasterKind::Sentinel2))
        .count();
    assert_eq!(sentinel, 2, "only tiles of the configured date");
    assert!(bronze
        .iter()
        .any(|t| t.kind == DatasetKind::RasterMetadata(RasterKind::Landsat)));

    let silver: Vec<_> = plan.for_tier(Tier::Silver).collect();
    assert_eq!(silver.len(), 2);
    assert_eq!(silver[0].kind, DatasetKind::Hdf(HdfKind::Icesat2));
    assert_eq!(
        silver[0].destination,
        local
            .path()
            .join("output/silver/icesat-2/ATL03_20250401015631_01230705_006_01.h5")
    );
    assert_eq!(silver[1].destination, local.path().join("output/silver/coastline.gpkg"));

    let gold: Vec<_> = plan.for_tier(Tier::Gold).map(|t| t.kind).collect();
    assert_eq!(gold, vec![DatasetKind::Parquet, DatasetKind::Table]);

    assert_eq!(plan.missing.len(), 1);
    assert_eq!(plan.missing[0].tier, Tier::Silver);
    assert_eq!(plan.missing[0].kind, DatasetKind::Vector);
    assert!(plan.missing[0].expected.ends_with("silver/buildings.parquet"));
}

#[test]
fn test_plan_sample_lake_strict() {
    let config = Config::from_yaml_str(SAMPLE_YAML).expect("Failed to load sample");
    let data = config.data_config().expect("sample has a dataConfig");

    let lake = tempdir().unwrap();
    let local = tempdir().unwrap();
    create_sample_lake(lake.path()).expect("Failed to create lake");

    let options = PlanOptions {
        error_for_missing_files: true,
    };
    let err = plan_transfers(data, lake.path(), local.path(), &options).unwrap_err();
    assert!(
        matches!(err, LakeError::MissingInput { tier: Tier::Silver, .. }),
        "unexpected error: {err}"
    );
}

#[test]
fn test_execute_sample_plan() {
    let config = Config::from_yaml_str(SAMPLE_YAML).expect("Failed to load sample");
    let data = config.data_config().expect("sample has a dataConfig");

    let lake = tempdir().unwrap();
    let local = tempdir().unwrap();
    create_sample_lake(lake.path()).expect("Failed to create lake");

    let plan = plan_transfers(data, lake.path(), local.path(), &PlanOptions::default())
        .expect("Failed to plan");
    let report = execute_plan(&plan).expect("Failed to execute plan");

    assert_eq!(report.copied.len(), plan.transfers.len());
    let output = local.path().join("output");
    for expected in [
        "bronze/sentinel-2/S2A_MSIL2A_20250401T015631_R117_T51LWC_20250401T043813_tile00.tif",
        "bronze/landsat/LC08_L2SP_120034_20250401_02_T1_tile00.tif",
        "bronze/landsat/LC08_L2SP_120034_20250401_02_T1_tile00.json",
        "silver/icesat-2/ATL03_20250401015631_01230705_006_01.h5",
        "silver/coastline.gpkg",
        "gold/tables/test_data.parquet",
        "gold/tables/test_data.csv",
    ] {
        assert!(output.join(expected).is_file(), "{expected} should be copied");
    }
    assert!(
        !output
            .join("bronze/landsat/LC09_L2SP_120034_20250402_02_T1_tile00.tif")
            .exists(),
        "granules of other dates stay in the lake"
    );
}
