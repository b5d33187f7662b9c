//! Rule checks applied once, right after a document is deserialized.
//!
//! Shape errors (missing fields, wrong types) are caught by serde; this pass
//! covers what the types cannot express: trailing separators on folders,
//! numeric bounds, date windows and the vector naming rules of the data lake.

use chrono::Datelike;
use ck_protocol::{
    DataConfig, DirectoryNode, VectorFormat, WorkflowSettings, DATA_DIR_KEY, OUTPUT_BASE_KEY,
};

/// Earliest year of the wave reanalysis record.
const WAVE_RECORD_START_YEAR: i32 = 1993;

/// A single rule violation, named by dotted field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: String,
    pub reason: String,
}

impl Violation {
    fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

type Check = Result<(), Violation>;

/// Whether `value` ends in a path separator of either convention.
pub fn ends_with_separator(value: &str) -> bool {
    value.ends_with('/') || value.ends_with('\\')
}

fn require_text(field: &str, value: &str) -> Check {
    if value.trim().is_empty() {
        return Err(Violation::new(field, "must not be empty"));
    }
    Ok(())
}

fn require_dir(field: &str, value: &str) -> Check {
    require_text(field, value)?;
    if !ends_with_separator(value) {
        return Err(Violation::new(
            field,
            format!("must end with a path separator, got `{value}`"),
        ));
    }
    Ok(())
}

fn require_file_name(field: &str, value: &str) -> Check {
    require_text(field, value)?;
    if ends_with_separator(value) {
        return Err(Violation::new(
            field,
            format!("must name a file, not a directory, got `{value}`"),
        ));
    }
    Ok(())
}

/// A file name inside a tier: relative and never climbing out of it.
fn require_tier_relative(field: &str, value: &str) -> Check {
    require_file_name(field, value)?;
    let bytes = value.as_bytes();
    let has_drive = bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':';
    if value.starts_with(['/', '\\']) || has_drive {
        return Err(Violation::new(
            field,
            format!("must be relative to the tier folder, got `{value}`"),
        ));
    }
    if value.split(['/', '\\']).any(|segment| segment == "..") {
        return Err(Violation::new(
            field,
            format!("must not contain `..`, got `{value}`"),
        ));
    }
    Ok(())
}

fn require_positive(field: &str, value: f64) -> Check {
    if !(value.is_finite() && value > 0.0) {
        return Err(Violation::new(field, format!("must be greater than 0, got {value}")));
    }
    Ok(())
}

fn require_non_negative(field: &str, value: f64) -> Check {
    if !(value.is_finite() && value >= 0.0) {
        return Err(Violation::new(field, format!("must not be negative, got {value}")));
    }
    Ok(())
}

fn require_within(field: &str, value: f64, low: f64, high: f64) -> Check {
    if !(low..=high).contains(&value) {
        return Err(Violation::new(
            field,
            format!("must be within [{low}, {high}], got {value}"),
        ));
    }
    Ok(())
}

/// Check the `workflow_folder`-rooted settings.
pub fn validate_settings(settings: &WorkflowSettings) -> Check {
    require_dir("workflow_folder", &settings.workflow_folder)?;

    let python = &settings.python;
    require_text("python.python_path", &python.python_path)?;
    require_dir("python.conda_path", &python.conda_path)?;
    require_text("python.conda_env", &python.conda_env)?;

    for (name, file) in &settings.auth {
        require_file_name(&format!("auth.{name}"), file)?;
    }

    if settings.cores == 0 {
        return Err(Violation::new("cores", "must be at least 1, got 0"));
    }

    validate_directories(settings)?;

    for (name, file) in &settings.files {
        require_file_name(&format!("files.{name}"), file)?;
    }

    validate_processing(settings)
}

fn validate_directories(settings: &WorkflowSettings) -> Check {
    match settings.directories.get(DATA_DIR_KEY) {
        None => {
            return Err(Violation::new(
                format!("directories.{DATA_DIR_KEY}"),
                "is required",
            ))
        }
        Some(DirectoryNode::Group(_)) => {
            return Err(Violation::new(
                format!("directories.{DATA_DIR_KEY}"),
                "must be a directory path, not a group",
            ))
        }
        Some(DirectoryNode::Path(_)) => {}
    }
    if let Some(DirectoryNode::Group(_)) = settings.directories.get(OUTPUT_BASE_KEY) {
        return Err(Violation::new(
            format!("directories.{OUTPUT_BASE_KEY}"),
            "must be a directory path, not a group",
        ));
    }

    let mut result = Ok(());
    for (name, node) in &settings.directories {
        node.for_each_leaf(name, &mut |dotted, fragment| {
            if result.is_err() {
                return;
            }
            let field = format!("directories.{dotted}");
            result = if dotted == OUTPUT_BASE_KEY {
                require_text(&field, fragment)
            } else {
                require_dir(&field, fragment)
            };
        });
        result.clone()?;
    }
    result
}

fn validate_processing(settings: &WorkflowSettings) -> Check {
    let processing = &settings.processing;

    let baseline = &processing.baseline;
    if baseline.smoothing_window == 0 {
        return Err(Violation::new(
            "processing.baseline.smoothing_window",
            "must be at least 1, got 0",
        ));
    }
    require_non_negative(
        "processing.baseline.simplify_tolerance",
        baseline.simplify_tolerance,
    )?;

    let transects = &processing.transects;
    require_positive("processing.transects.spacing", transects.spacing)?;
    require_positive("processing.transects.length", transects.length)?;
    require_non_negative("processing.transects.offset", transects.offset)?;
    if transects.iterative_refit.is_empty() {
        return Err(Violation::new(
            "processing.transects.iterative_refit",
            "must list at least one refit distance",
        ));
    }
    if let Some(pass) = transects.iterative_refit.iter().position(|d| *d == 0) {
        return Err(Violation::new(
            format!("processing.transects.iterative_refit[{pass}]"),
            "must be greater than 0, got 0",
        ));
    }

    let shoreline = &processing.shoreline;
    require_within("processing.shoreline.min_obs", shoreline.min_obs, 0.0, 1.0)?;
    require_within(
        "processing.shoreline.max_cloud_cover",
        shoreline.max_cloud_cover,
        0.0,
        100.0,
    )?;
    if let (Some(start), Some(end)) = (shoreline.start_date, shoreline.end_date) {
        if start > end {
            return Err(Violation::new(
                "processing.shoreline.end_date",
                format!("must not precede start_date {start}, got {end}"),
            ));
        }
    }

    let wave = &processing.wave;
    require_text("processing.wave.source", &wave.source)?;
    require_text("processing.wave.dataset_id", &wave.dataset_id)?;
    if wave.start_date.date().year() < WAVE_RECORD_START_YEAR {
        return Err(Violation::new(
            "processing.wave.start_date",
            format!(
                "must not precede {WAVE_RECORD_START_YEAR}-01-01T00:00:00, got {}",
                wave.start_date
            ),
        ));
    }
    if let Some(end) = wave.end_date {
        if end < wave.start_date {
            return Err(Violation::new(
                "processing.wave.end_date",
                format!("must not precede start_date {}, got {end}", wave.start_date),
            ));
        }
    }
    require_positive("processing.wave.search_radius", wave.search_radius)?;

    let soil = &processing.soil;
    require_text("processing.soil.source", &soil.source)?;
    if soil.properties.is_empty() {
        return Err(Violation::new(
            "processing.soil.properties",
            "must list at least one property",
        ));
    }
    require_text("processing.soil.statistic", &soil.statistic)?;
    if soil.resolution == 0 {
        return Err(Violation::new(
            "processing.soil.resolution",
            "must be greater than 0, got 0",
        ));
    }

    Ok(())
}

/// Check the `dataConfig` section.
pub fn validate_data(data: &DataConfig) -> Check {
    require_dir("dataConfig.azureRoot", &data.azure_root)?;
    require_file_name("dataConfig.aoi", &data.aoi)?;
    require_text("dataConfig.output_base", &data.output_base)?;

    if data.directories.is_empty() {
        return Err(Violation::new(
            "dataConfig.directories",
            "must list at least one tier",
        ));
    }

    for (tier, content) in &data.directories {
        for (i, vector) in content.vector.iter().enumerate() {
            let field = format!("dataConfig.directories.{tier}.vector[{i}]");
            require_tier_relative(&format!("{field}.name"), &vector.name)?;
            match vector.format() {
                None => {
                    return Err(Violation::new(
                        format!("{field}.name"),
                        format!("must end with '.gpkg' or '.parquet', got `{}`", vector.name),
                    ))
                }
                Some(VectorFormat::GeoPackage) if vector.sql_query.is_some() => {
                    return Err(Violation::new(
                        format!("{field}.sql_query"),
                        format!("is not supported for GeoPackage `{}`", vector.name),
                    ))
                }
                Some(_) => {}
            }
            if vector.layer.is_some() && vector.sql_query.is_some() {
                return Err(Violation::new(
                    field,
                    format!("cannot set both layer and sql_query for `{}`", vector.name),
                ));
            }
        }
        for (i, parquet) in content.parquet.iter().enumerate() {
            require_tier_relative(
                &format!("dataConfig.directories.{tier}.parquet[{i}].name"),
                &parquet.name,
            )?;
        }
        for (i, table) in content.table.iter().enumerate() {
            require_tier_relative(
                &format!("dataConfig.directories.{tier}.table[{i}].name"),
                &table.name,
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_conventions() {
        assert!(ends_with_separator("data/"));
        assert!(ends_with_separator("data\\"));
        assert!(!ends_with_separator("data"));
    }

    #[test]
    fn test_require_dir_messages() {
        let err = require_dir("directories.aoi", "aoi").unwrap_err();
        assert_eq!(err.field, "directories.aoi");
        assert_eq!(err.reason, "must end with a path separator, got `aoi`");

        let err = require_dir("workflow_folder", "  ").unwrap_err();
        assert_eq!(err.reason, "must not be empty");
    }

    #[test]
    fn test_require_within_rejects_nan() {
        assert!(require_within("x", f64::NAN, 0.0, 1.0).is_err());
        assert!(require_within("x", 1.0, 0.0, 1.0).is_ok());
        assert!(require_within("x", 0.0, 0.0, 1.0).is_ok());
    }

    #[test]
    fn test_require_tier_relative() {
        assert!(require_tier_relative("n", "tables/test_data.csv").is_ok());
        assert!(require_tier_relative("n", "a..b.parquet").is_ok());

        for escaping in ["/etc/hostname", "\\\\share\\x.csv", "C:/data/x.csv", "c:x.csv"] {
            let err = require_tier_relative("n", escaping).unwrap_err();
            assert!(err.reason.contains("must be relative"), "{escaping}: {}", err.reason);
        }
        for climbing in ["../../escape.parquet", "tables/../../x.csv", "tables\\..\\x.csv"] {
            let err = require_tier_relative("n", climbing).unwrap_err();
            assert!(err.reason.contains("`..`"), "{climbing}: {}", err.reason);
        }
    }

    #[test]
    fn test_require_file_name_rejects_folder() {
        let err = require_file_name("files.aoi", "aoi/").unwrap_err();
        assert!(err.reason.contains("must name a file"));
    }
}
