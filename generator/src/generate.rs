//! Generation pipeline. Contains [generate], producing all `pack` archives and
//! the manifest describing them.

use crate::{
    archive,
    common::{
        DEFAULT_SERVER_URL, MANIFEST_FILE_NAME, PACK_COUNT, PACKS_DIRECTORY_NAME,
        manifest::{Manifest, ManifestEntry},
    },
    hash, manifest, pack_meta, pack_url,
};
use anyhow::{Context, Error};
use std::path::Path;
use uuid::Uuid;

/// Settings for [generate] function.
///
/// If not sure what to set here, use [Default].
#[derive(Debug)]
pub struct GenerateOptions {
    /// Base url of the http server serving `packs` directory, without trailing
    /// `/`.
    pub server_url: String,
    /// Options used to build every archive.
    pub archive_build_options: archive::BuildOptions,
}
impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_owned(),
            archive_build_options: archive::BuildOptions::default(),
        }
    }
}

/// Creates `pack` archive with `index` inside `packs_directory_path` and
/// builds its [ManifestEntry].
///
/// The archive is written and closed first, then read back from fs to
/// calculate the hash, so the hash always describes bytes on disk.
pub fn pack_generate(
    packs_directory_path: &Path,
    index: usize,
    options: &GenerateOptions,
) -> Result<ManifestEntry, Error> {
    let path = packs_directory_path.join(index.to_string());

    let pack_meta = pack_meta::build(index);
    let pack_meta_content = pack_meta::content_from_pack_meta(&pack_meta)?;
    let archive = archive::build_memory(&pack_meta_content, &options.archive_build_options)?;
    archive::store_file(&archive, &path)?;

    let hash = hash::sha1_hex_from_path(&path)?;

    let entry = ManifestEntry {
        url: pack_url::build(&options.server_url, index),
        uuid: Uuid::new_v4(),
        hash,
    };

    log::debug!("pack {} written to {:?}, sha1 {}", index, path, entry.hash);

    Ok(entry)
}

/// Generates all `pack` archives and the manifest inside `working_directory`.
///
/// For each index in `0..PACK_COUNT` an archive is written to
/// `working_directory/packs/<index>` (see [pack_generate]). When all archives
/// are ready, manifest is written to `working_directory/packs.json`. Both
/// archives and manifest are overwritten if present.
///
/// `packs` directory is not created, it must exist upfront. Any fs error aborts
/// the run immediately. Manifest is not written then, archives created so far
/// are left in place.
///
/// # Examples
///
/// ```
/// # use anyhow::Error;
/// # use std::fs;
/// # use trackpack_fixtures_generator::generate::{generate, GenerateOptions};
/// #
/// # fn main() -> Result<(), Error> {
/// #
/// let working_directory = tempfile::tempdir()?;
/// fs::create_dir(working_directory.path().join("packs"))?;
///
/// let manifest = generate(working_directory.path(), &GenerateOptions::default())?;
///
/// assert_eq!(manifest.entries.len(), 24);
/// assert!(working_directory.path().join("packs").join("23").is_file());
/// assert!(working_directory.path().join("packs.json").is_file());
/// #
/// # Ok(())
/// # }
/// ```
pub fn generate(
    working_directory: &Path,
    options: &GenerateOptions,
) -> Result<Manifest, Error> {
    let packs_directory_path = working_directory.join(PACKS_DIRECTORY_NAME);

    let mut manifest_builder = manifest::Builder::new();
    for index in 0..PACK_COUNT {
        let entry = pack_generate(&packs_directory_path, index, options)
            .with_context(|| format!("pack {index} in {}", packs_directory_path.display()))?;

        manifest_builder.entry_add(entry);
    }
    let manifest = manifest_builder.finalize();

    let manifest_path = working_directory.join(MANIFEST_FILE_NAME);
    manifest::store_file(&manifest, &manifest_path)
        .with_context(|| manifest_path.to_string_lossy().into_owned())?;

    log::info!(
        "{} packs described in {}",
        manifest.entries.len(),
        manifest_path.display()
    );

    Ok(manifest)
}
