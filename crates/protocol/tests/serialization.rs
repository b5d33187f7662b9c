use ck_protocol::*;

const SAMPLE: &str = include_str!("../../../templates/coastkit.yaml");

#[test]
fn test_workflow_settings_deserialization_from_sample() {
    let settings: WorkflowSettings =
        serde_yaml::from_str(SAMPLE).expect("Failed to deserialize WorkflowSettings");

    assert_eq!(settings.workflow_folder, "/srv/coastal-erosion/");
    assert_eq!(settings.cores, 8);
    assert_eq!(settings.date.to_string(), "2025-04-01");
    assert_eq!(settings.python.conda_pkgs.len(), 4);
    assert_eq!(settings.auth.get("copernicus").map(String::as_str), Some("copernicus_credentials.txt"));
    assert_eq!(settings.processing.transects.iterative_refit, vec![100; 6]);
    assert_eq!(settings.processing.wave.start_date.to_string(), "1993-01-01T00:00:00");
    assert_eq!(settings.processing.soil.depths.len(), 3);

    // Nested directory groups
    assert_eq!(
        settings.directory("covariates.raw"),
        Some(&DirectoryNode::Path("covariates/raw/".to_string()))
    );
    assert!(matches!(settings.directory("covariates"), Some(DirectoryNode::Group(_))));
}

#[test]
fn test_data_config_deserialization_from_sample() {
    let root: serde_yaml::Value = serde_yaml::from_str(SAMPLE).expect("Failed to parse sample");
    let data: DataConfig = serde_yaml::from_value(root["dataConfig"].clone())
        .expect("Failed to deserialize DataConfig");

    assert_eq!(data.azure_root, "./");
    assert_eq!(data.output_base, "output");
    assert_eq!(data.directories.len(), 3);

    let bronze = &data.directories[&Tier::Bronze];
    assert_eq!(bronze.raster, vec![RasterKind::Sentinel2, RasterKind::Landsat]);

    let silver = &data.directories[&Tier::Silver];
    assert_eq!(silver.hdf, vec![HdfKind::Icesat2]);
    assert_eq!(silver.vector[0].layer.as_deref(), Some("coastline"));
    assert!(silver.vector[1].sql_query.is_some());

    let gold = &data.directories[&Tier::Gold];
    assert_eq!(gold.parquet[0].name, "tables/test_data.parquet");
    assert_eq!(gold.table[0].name, "tables/test_data.csv");
}

#[test]
fn test_defaults_are_applied() {
    let yaml = r#"
workflow_folder: ./
python:
  python_path: python3
  conda_path: /opt/conda/
  conda_env: coastal
date: 2025-04-01
directories:
  data_dir: data/
processing:
  baseline: { smoothing_window: 3, simplify_tolerance: 1.0 }
  transects: { spacing: 50, length: 200, iterative_refit: [50] }
  shoreline: { min_obs: 0.5 }
  wave: { source: cmems, dataset_id: ds, start_date: 1995-06-01 }
  soil: { source: soilgrids, properties: [clay] }
"#;
    let settings: WorkflowSettings = serde_yaml::from_str(yaml).expect("Failed to deserialize");

    assert_eq!(settings.cores, 1);
    assert!(settings.auth.is_empty());
    assert!(settings.files.is_empty());
    assert_eq!(settings.processing.transects.offset, 0.0);
    assert_eq!(settings.processing.shoreline.max_cloud_cover, 100.0);
    assert_eq!(settings.processing.wave.search_radius, 0.5);
    assert_eq!(settings.processing.soil.statistic, "mean");
    assert_eq!(settings.processing.soil.resolution, 250);
}

#[test]
fn test_unknown_raster_kind_is_rejected() {
    let yaml = r#"
date: 2025-04-01
azureRoot: ./
aoi: aoi.gpkg
directories:
  bronze:
    raster: [modis]
"#;
    let err = serde_yaml::from_str::<DataConfig>(yaml).unwrap_err();
    assert!(err.to_string().contains("modis"));
}

#[test]
fn test_unknown_tier_is_rejected() {
    let yaml = r#"
date: 2025-04-01
azureRoot: ./
aoi: aoi.gpkg
directories:
  copper: {}
"#;
    assert!(serde_yaml::from_str::<DataConfig>(yaml).is_err());
}

#[test]
fn test_data_config_json_field_names() {
    let root: serde_yaml::Value = serde_yaml::from_str(SAMPLE).expect("Failed to parse sample");
    let data: DataConfig =
        serde_yaml::from_value(root["dataConfig"].clone()).expect("Failed to deserialize");

    let json = serde_json::to_value(&data).expect("Failed to serialize DataConfig");
    assert_eq!(json["azureRoot"], "./");
    assert_eq!(json["date"], "2025-04-01");
    assert_eq!(json["directories"]["bronze"]["raster"][0], "sentinel-2");
    // Empty dataset lists are omitted
    assert!(json["directories"]["bronze"].get("vector").is_none());
}

#[test]
fn test_directory_node_untagged_serialization() {
    let leaf = DirectoryNode::Path("data/".to_string());
    let json = serde_json::to_value(&leaf).expect("Failed to serialize DirectoryNode::Path");
    assert_eq!(json, "data/");

    let group: DirectoryNode =
        serde_json::from_str(r#"{"raw": "covariates/raw/"}"#).expect("Failed to deserialize group");
    assert!(matches!(group, DirectoryNode::Group(ref children) if children.len() == 1));
}

#[test]
fn test_iso_datetime_serializes_as_string() {
    let value: IsoDateTime = "2023-12-31T21:00:00".parse().expect("valid datetime");
    let json = serde_json::to_value(value).expect("Failed to serialize IsoDateTime");
    assert_eq!(json, "2023-12-31T21:00:00");

    let err = serde_json::from_str::<IsoDateTime>("\"yesterday\"").unwrap_err();
    assert!(err.to_string().contains("invalid ISO-8601"));
}
