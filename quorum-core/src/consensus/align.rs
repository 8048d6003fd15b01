use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use crate::types::{Bar, SourceResult};

/// One source's series reindexed onto the shared timestamp axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedColumn {
    /// Adapter name the column belongs to.
    pub source: String,
    /// One slot per shared timestamp; `None` where the source has no bar.
    pub bars: Vec<Option<Bar>>,
}

/// N source series reindexed onto the sorted union of their timestamps.
///
/// Positions with no observation stay `None` (never zero-filled or
/// forward-filled) so downstream steps can treat a missing slot as "this
/// source does not vote at this timestamp". Column order preserves the
/// input order of the sources.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Alignment {
    timestamps: Vec<DateTime<Utc>>,
    columns: Vec<AlignedColumn>,
}

impl Alignment {
    /// The shared timestamp axis, sorted ascending.
    #[must_use]
    pub fn timestamps(&self) -> &[DateTime<Utc>] {
        &self.timestamps
    }

    /// Per-source columns, in input order.
    #[must_use]
    pub fn columns(&self) -> &[AlignedColumn] {
        &self.columns
    }

    /// Number of shared timestamps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// True when no input contributed any timestamp.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}

/// Reindex every source series onto the sorted union of all timestamps.
///
/// All-empty input produces an empty alignment; the orchestrator treats
/// that as a degraded run.
#[must_use]
pub fn align(sources: &[SourceResult]) -> Alignment {
    let union: BTreeSet<DateTime<Utc>> = sources
        .iter()
        .flat_map(|s| s.series.iter().map(|b| b.ts))
        .collect();
    let timestamps: Vec<DateTime<Utc>> = union.into_iter().collect();

    let columns = sources
        .iter()
        .map(|s| AlignedColumn {
            source: s.source.clone(),
            bars: timestamps
                .iter()
                .map(|&ts| s.series.bar_at(ts).copied())
                .collect(),
        })
        .collect();

    Alignment {
        timestamps,
        columns,
    }
}
