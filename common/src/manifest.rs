//! Manifest is the root entity written to `packs.json`, a list of downloadable
//! packs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Single downloadable `pack`, as seen by the consumer.
///
/// Fields are declared (and serialized) in order `url`, `uuid`, `hash`.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
#[serde(deny_unknown_fields)]
pub struct ManifestEntry {
    /// Full download url, eg. `http://127.0.0.1:8000/packs/3`.
    pub url: String,
    /// Random (version 4) identifier of the pack, regenerated on every run.
    pub uuid: Uuid,
    /// Lowercase hex sha1 of the archive bytes served under `url`.
    pub hash: String,
}

/// Manifest represents all generated packs, in generation order (index 0
/// first).
///
/// Serialized as a bare json array, so the wrapper is transparent.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug, Default)]
#[serde(transparent)]
pub struct Manifest {
    /// Entries, position in this list equals pack index.
    pub entries: Vec<ManifestEntry>,
}
