//! Pack meta helpers. Contains [build] creating `pack.mcmeta` document for a
//! pack index and [content_from_pack_meta] serializing it.

use crate::common::{
    PACK_FORMAT, SUPPORTED_FORMATS,
    pack_meta::{PackMeta, PackSection},
};
use anyhow::Error;

/// Creates [PackMeta] for pack with given `index`.
///
/// Only description depends on the index, eg. `pack 7`.
///
/// # Examples
///
/// ```
/// # use trackpack_fixtures_generator::pack_meta::build;
/// let pack_meta = build(7);
/// assert_eq!(pack_meta.pack.description, "pack 7");
/// assert_eq!(pack_meta.pack.pack_format, 22);
/// ```
pub fn build(index: usize) -> PackMeta {
    PackMeta {
        pack: PackSection {
            pack_format: PACK_FORMAT,
            supported_formats: SUPPORTED_FORMATS,
            description: format!("pack {index}"),
        },
    }
}

/// Serializes [PackMeta] into compact json, as stored in `pack.mcmeta`.
pub fn content_from_pack_meta(pack_meta: &PackMeta) -> Result<Box<[u8]>, Error> {
    let content = serde_json::to_vec(pack_meta)?.into_boxed_slice();

    Ok(content)
}
