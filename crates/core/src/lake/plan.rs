//! Transfer planning from the lake into the local output tree.

use super::error::{LakeError, LakeResult};
use super::listing::{list_hdf_for_date, list_rasters_for_date};
use super::{output_root, tier_root};
use ck_protocol::{DataConfig, DirectoryContent, HdfKind, RasterKind, Tier};
use std::fmt;
use std::path::{Path, PathBuf};

/// What a planned transfer carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetKind {
    Raster(RasterKind),
    /// JSON metadata sidecar of a raster tile.
    RasterMetadata(RasterKind),
    Hdf(HdfKind),
    Vector,
    Parquet,
    Table,
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetKind::Raster(kind) => write!(f, "raster/{kind}"),
            DatasetKind::RasterMetadata(kind) => write!(f, "raster/{kind} metadata"),
            DatasetKind::Hdf(kind) => write!(f, "hdf/{kind}"),
            DatasetKind::Vector => f.write_str("vector"),
            DatasetKind::Parquet => f.write_str("parquet"),
            DatasetKind::Table => f.write_str("table"),
        }
    }
}

/// One file to bring from the lake into the output tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedTransfer {
    pub tier: Tier,
    pub kind: DatasetKind,
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// An input the configuration asks for that the lake does not hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingInput {
    pub tier: Tier,
    pub kind: DatasetKind,
    /// File or dataset folder that was expected.
    pub expected: PathBuf,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PlanOptions {
    /// Fail on the first missing input instead of recording it.
    pub error_for_missing_files: bool,
}

/// Result of [`plan_transfers`], in tier order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferPlan {
    pub transfers: Vec<PlannedTransfer>,
    pub missing: Vec<MissingInput>,
}

impl TransferPlan {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn for_tier(&self, tier: Tier) -> impl Iterator<Item = &PlannedTransfer> {
        self.transfers.iter().filter(move |t| t.tier == tier)
    }
}

/// Plans every transfer `data` needs for its configured date.
///
/// Sources live under `<lake_root>/<azureRoot>/<tier>/`; destinations are
/// `<local_root>/<output_base>/<tier>/[<kind>/]<name>`, where the kind
/// folder only applies to raster and HDF collections.
///
/// # Example
///
/// ```no_run
/// use ck_core::config::Config;
/// use ck_core::lake::{plan_transfers, PlanOptions};
/// use std::path::Path;
///
/// let config = Config::load(Path::new("coastkit.yaml"))?;
/// let plan = plan_transfers(
///     config.data_config()?,
///     Path::new("/mnt/lake"),
///     Path::new("/scratch"),
///     &PlanOptions::default(),
/// )?;
/// println!("{} transfers", plan.transfers.len());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn plan_transfers(
    data: &DataConfig,
    lake_root: &Path,
    local_root: &Path,
    options: &PlanOptions,
) -> LakeResult<TransferPlan> {
    let mut planner = Planner {
        data,
        out_root: output_root(data, local_root),
        options,
        plan: TransferPlan::default(),
    };

    for (&tier, content) in &data.directories {
        planner.plan_tier(tier, &tier_root(data, lake_root, tier), content)?;
    }

    tracing::info!(
        transfers = planner.plan.transfers.len(),
        missing = planner.plan.missing.len(),
        "transfer plan ready"
    );
    Ok(planner.plan)
}

struct Planner<'a> {
    data: &'a DataConfig,
    out_root: PathBuf,
    options: &'a PlanOptions,
    plan: TransferPlan,
}

impl Planner<'_> {
    fn plan_tier(&mut self, tier: Tier, root: &Path, content: &DirectoryContent) -> LakeResult<()> {
        let tier_out = self.out_root.join(tier.as_str());

        for &kind in &content.raster {
            let tiles = match list_rasters_for_date(root, kind, self.data.date) {
                Ok(tiles) => tiles,
                Err(LakeError::DatasetDirMissing { path }) => {
                    self.missing(tier, DatasetKind::Raster(kind), path)?;
                    continue;
                }
                Err(e) => return Err(e),
            };
            if tiles.is_empty() {
                self.missing(tier, DatasetKind::Raster(kind), root.join(kind.as_str()))?;
            }

            let dest_dir = tier_out.join(kind.as_str());
            for tile in tiles {
                if kind.has_json_sidecar() {
                    let sidecar = tile.with_extension("json");
                    if sidecar.is_file() {
                        self.transfer(tier, DatasetKind::RasterMetadata(kind), sidecar, &dest_dir);
                    } else {
                        tracing::warn!(tile = %tile.display(), "metadata sidecar not found");
                    }
                }
                self.transfer(tier, DatasetKind::Raster(kind), tile, &dest_dir);
            }
        }

        for &kind in &content.hdf {
            let granules = match list_hdf_for_date(root, kind, self.data.date) {
                Ok(granules) => granules,
                Err(LakeError::DatasetDirMissing { path }) => {
                    self.missing(tier, DatasetKind::Hdf(kind), path)?;
                    continue;
                }
                Err(e) => return Err(e),
            };
            if granules.is_empty() {
                self.missing(tier, DatasetKind::Hdf(kind), root.join(kind.as_str()))?;
            }

            let dest_dir = tier_out.join(kind.as_str());
            for granule in granules {
                self.transfer(tier, DatasetKind::Hdf(kind), granule, &dest_dir);
            }
        }

        let named = content
            .vector
            .iter()
            .map(|v| (DatasetKind::Vector, v.name.as_str()))
            .chain(content.parquet.iter().map(|p| (DatasetKind::Parquet, p.name.as_str())))
            .chain(content.table.iter().map(|t| (DatasetKind::Table, t.name.as_str())));

        for (kind, name) in named {
            let source = root.join(name);
            if !source.is_file() {
                self.missing(tier, kind, source)?;
                continue;
            }
            self.plan.transfers.push(PlannedTransfer {
                tier,
                kind,
                source,
                destination: tier_out.join(name),
            });
        }

        Ok(())
    }

    fn transfer(&mut self, tier: Tier, kind: DatasetKind, source: PathBuf, dest_dir: &Path) {
        let destination = match source.file_name() {
            Some(name) => dest_dir.join(name),
            None => dest_dir.to_path_buf(),
        };
        self.plan.transfers.push(PlannedTransfer {
            tier,
            kind,
            source,
            destination,
        });
    }

    fn missing(&mut self, tier: Tier, kind: DatasetKind, expected: PathBuf) -> LakeResult<()> {
        if self.options.error_for_missing_files {
            return Err(LakeError::MissingInput {
                tier,
                dataset: kind.to_string(),
                path: expected,
            });
        }
        tracing::warn!(%tier, dataset = %kind, path = %expected.display(), "input not found");
        self.plan.missing.push(MissingInput { tier, kind, expected });
        Ok(())
    }
}
