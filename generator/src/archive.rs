//! Archive helpers. Contains [build_memory] creating a `pack` zip archive and
//! [store_file] writing it to fs.

use crate::common::PACK_META_ENTRY_NAME;
use anyhow::Error;
use std::{
    fs,
    io::{Cursor, Write},
    path::Path,
};
use zip::{CompressionMethod, ZipWriter, write::FileOptions};

/// Options when building archive in [build_memory].
///
/// If not sure what to set here, use [Default].
#[derive(Debug)]
pub struct BuildOptions {
    /// Compression used for `pack.mcmeta` entry.
    pub compression_method: CompressionMethod,
}
impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            compression_method: CompressionMethod::Deflated,
        }
    }
}

/// Creates zip archive with a single `pack.mcmeta` entry containing
/// `pack_meta_content`.
///
/// Entry timestamps are left at zip defaults, so the same content and options
/// always produce the same bytes.
///
/// # Examples
///
/// ```
/// # use anyhow::Error;
/// # use std::io::Cursor;
/// # use trackpack_fixtures_generator::archive::{build_memory, BuildOptions};
/// #
/// # fn main() -> Result<(), Error> {
/// #
/// let archive = build_memory(br#"{"pack":{}}"#, &BuildOptions::default())?;
///
/// let archive = zip::ZipArchive::new(Cursor::new(archive))?;
/// assert_eq!(archive.len(), 1);
/// #
/// # Ok(())
/// # }
/// ```
pub fn build_memory(
    pack_meta_content: &[u8],
    options: &BuildOptions,
) -> Result<Box<[u8]>, Error> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

    writer.start_file(
        PACK_META_ENTRY_NAME,
        FileOptions::default().compression_method(options.compression_method),
    )?;
    writer.write_all(pack_meta_content)?;

    let archive = writer.finish()?.into_inner().into_boxed_slice();

    Ok(archive)
}

/// Writes `archive` to given file path, replacing previous file if exists.
///
/// File is synced and closed before returning, so it can be read back (eg. for
/// hashing) right away.
pub fn store_file(
    archive: &[u8],
    path: &Path,
) -> Result<(), Error> {
    let mut file = fs::File::create(path)?;

    file.write_all(archive)?;

    file.sync_all()?;
    drop(file);

    Ok(())
}
