use serde::Deserialize;

/// How a sighting is written to the ledger.
///
/// `Upsert` resolves first sightings and repeats in one store statement, so M concurrent
/// first sightings of an ip end as one record with count M. `SelectThenBranch` reads first
/// and then bumps or inserts; when two first sightings interleave the unique constraint
/// rejects the later insert and that visit is dropped, leaving one record with a count
/// in [1, M].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DedupStrategy {
    #[default]
    Upsert,
    SelectThenBranch,
}
