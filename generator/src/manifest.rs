//! Manifest helpers. Contains [Builder], builder for [Manifest], and functions
//! to store (and load back) `packs.json`.

use crate::common::manifest::{Manifest, ManifestEntry};
use anyhow::Error;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::{
    fs,
    io::{self},
    path::Path,
};

/// Indentation used in stored manifest.
const INDENT: &[u8] = b"    ";

/// Main builder for manifest. Keeps entries in order they were added.
#[derive(Debug)]
pub struct Builder {
    entries: Vec<ManifestEntry>,
}
impl Builder {
    /// Creates empty [self] to be filled with entries.
    pub fn new() -> Self {
        let entries = Vec::<ManifestEntry>::new();

        Self { entries }
    }

    /// Appends entry to the manifest.
    pub fn entry_add(
        &mut self,
        entry: ManifestEntry,
    ) {
        self.entries.push(entry);
    }

    /// Finalizes the builder, returning built [Manifest].
    pub fn finalize(self) -> Manifest {
        Manifest {
            entries: self.entries,
        }
    }
}

fn store(
    manifest: &Manifest,
    writer: impl io::Write,
) -> Result<(), Error> {
    let mut serializer =
        serde_json::Serializer::with_formatter(writer, PrettyFormatter::with_indent(INDENT));
    manifest.serialize(&mut serializer)?;

    Ok(())
}

/// Serializes `manifest` to json array, indented with 4 spaces.
///
/// # Examples
///
/// ```
/// # use anyhow::Error;
/// # use trackpack_fixtures_generator::{common::manifest::Manifest, manifest::store_memory};
/// #
/// # fn main() -> Result<(), Error> {
/// #
/// assert_eq!(&*store_memory(&Manifest::default())?, b"[]");
/// #
/// # Ok(())
/// # }
/// ```
pub fn store_memory(manifest: &Manifest) -> Result<Box<[u8]>, Error> {
    let mut buffer = Vec::new();
    store(manifest, &mut buffer)?;
    Ok(buffer.into_boxed_slice())
}

/// Serializes `manifest` (as in [store_memory]) to given file path, replacing
/// previous file if exists.
pub fn store_file(
    manifest: &Manifest,
    path: &Path,
) -> Result<(), Error> {
    let mut file = io::BufWriter::new(fs::File::create(path)?);

    store(manifest, &mut file)?;

    let file = file.into_inner().map_err(|error| error.into_error())?;
    file.sync_all()?;
    drop(file);

    Ok(())
}

/// Parses manifest from serialized json, as a consumer of `packs.json` would.
pub fn load_memory(content: &[u8]) -> Result<Manifest, Error> {
    let manifest = serde_json::from_slice(content)?;

    Ok(manifest)
}

/// Reads and parses manifest from given file path.
pub fn load_file(path: &Path) -> Result<Manifest, Error> {
    let content = fs::read(path)?;
    let manifest = load_memory(&content)?;

    Ok(manifest)
}
