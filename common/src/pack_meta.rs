//! Pack meta is the content of `pack.mcmeta`, the file identifying a resource
//! pack.

use serde::{Deserialize, Serialize};

/// Root of `pack.mcmeta` document, eg.
/// `{"pack":{"pack_format":22,"supported_formats":[22,1000],"description":"pack 0"}}`.
///
/// Fields are declared in the order they are serialized.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct PackMeta {
    /// The only section we produce.
    pub pack: PackSection,
}

/// The `pack` section of [PackMeta].
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct PackSection {
    /// Format version the pack was made for.
    pub pack_format: u32,
    /// Inclusive range of format versions the pack declares compatibility
    /// with, serialized as two element array.
    pub supported_formats: [u32; 2],
    /// Human readable description, eg. `pack 7`.
    pub description: String,
}
