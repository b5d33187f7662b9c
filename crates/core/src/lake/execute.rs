//! Copies planned transfers from the mounted lake into the output tree.

use super::error::{LakeError, LakeResult};
use super::plan::TransferPlan;
use std::fs;
use std::path::PathBuf;

/// What [`execute_plan`] wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionReport {
    /// Destination of every copied file, in plan order.
    pub copied: Vec<PathBuf>,
    pub bytes: u64,
}

/// Copy every transfer of `plan`, creating destination folders as needed.
///
/// Existing destination files are overwritten. Missing inputs recorded in
/// the plan are not revisited. Stops at the first failed copy.
pub fn execute_plan(plan: &TransferPlan) -> LakeResult<ExecutionReport> {
    let mut report = ExecutionReport::default();

    for transfer in &plan.transfers {
        if let Some(parent) = transfer.destination.parent() {
            fs::create_dir_all(parent).map_err(|source| LakeError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let bytes = fs::copy(&transfer.source, &transfer.destination).map_err(|source| LakeError::Copy {
            from: transfer.source.clone(),
            to: transfer.destination.clone(),
            source,
        })?;

        tracing::debug!(
            tier = %transfer.tier,
            dataset = %transfer.kind,
            from = %transfer.source.display(),
            to = %transfer.destination.display(),
            bytes,
            "copied"
        );
        report.copied.push(transfer.destination.clone());
        report.bytes += bytes;
    }

    tracing::info!(files = report.copied.len(), bytes = report.bytes, "transfer plan executed");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lake::plan::{DatasetKind, PlannedTransfer};
    use ck_protocol::Tier;
    use tempfile::tempdir;

    #[test]
    fn test_execute_creates_folders_and_copies() {
        let lake = tempdir().unwrap();
        let local = tempdir().unwrap();
        let source = lake.path().join("coastline.gpkg");
        fs::write(&source, b"gpkg").unwrap();

        let destination = local.path().join("output/silver/nested/coastline.gpkg");
        let plan = TransferPlan {
            transfers: vec![PlannedTransfer {
                tier: Tier::Silver,
                kind: DatasetKind::Vector,
                source,
                destination: destination.clone(),
            }],
            missing: Vec::new(),
        };

        let report = execute_plan(&plan).expect("Failed to execute plan");
        assert_eq!(report.copied, vec![destination.clone()]);
        assert_eq!(report.bytes, 4);
        assert_eq!(fs::read(&destination).unwrap(), b"gpkg");
    }

    #[test]
    fn test_execute_reports_vanished_source() {
        let lake = tempdir().unwrap();
        let local = tempdir().unwrap();
        let plan = TransferPlan {
            transfers: vec![PlannedTransfer {
                tier: Tier::Gold,
                kind: DatasetKind::Table,
                source: lake.path().join("gone.csv"),
                destination: local.path().join("output/gold/gone.csv"),
            }],
            missing: Vec::new(),
        };

        match execute_plan(&plan) {
            Err(LakeError::Copy { from, .. }) => assert_eq!(from, lake.path().join("gone.csv")),
            other => panic!("Expected Copy error, got {other:?}"),
        }
    }

    #[test]
    fn test_execute_empty_plan() {
        let report = execute_plan(&TransferPlan::default()).unwrap();
        assert!(report.copied.is_empty());
        assert_eq!(report.bytes, 0);
    }
}
