//! Data-lake planning for the `dataConfig` section.
//!
//! The lake is mounted at a local root; each tier lives under
//! `<lake_root>/<azureRoot>/<tier>/`. This module finds the date-stamped
//! granules a run needs and works out where every input lands below
//! `<local_root>/<output_base>/`. A plan is inspected first and copied
//! with [`execute_plan`].

pub mod error;
pub mod execute;
pub mod listing;
pub mod plan;

pub use error::{LakeError, LakeResult};
pub use execute::{execute_plan, ExecutionReport};
pub use listing::{list_hdf_for_date, list_rasters_for_date, DatePattern};
pub use plan::{plan_transfers, DatasetKind, MissingInput, PlanOptions, PlannedTransfer, TransferPlan};

use ck_protocol::{DataConfig, Tier};
use std::path::{Path, PathBuf};

/// Root folder of `tier` inside the mounted lake.
pub fn tier_root(data: &DataConfig, lake_root: &Path, tier: Tier) -> PathBuf {
    lake_root.join(&data.azure_root).join(tier.as_str())
}

/// Folder every planned destination is placed under.
pub fn output_root(data: &DataConfig, local_root: &Path) -> PathBuf {
    local_root.join(&data.output_base)
}
