//! Hash helpers. Contains [sha1_hex_from_content] and [sha1_hex_from_path],
//! producing `hash` field of manifest entries.

use anyhow::Error;
use sha1::{Digest, Sha1};
use std::{fs, io, path::Path};

/// Calculates lowercase hex sha1 of `content`.
///
/// # Examples
///
/// ```
/// # use trackpack_fixtures_generator::hash::sha1_hex_from_content;
/// assert_eq!(
///     sha1_hex_from_content(b""),
///     "da39a3ee5e6b4b0d3255bfef95601890afd80709"
/// );
/// ```
pub fn sha1_hex_from_content(content: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(content);
    let hash = hasher.finalize();
    format!("{:x}", &hash)
}

/// Calculates lowercase hex sha1 of the file at `path`, reading it from fs.
///
/// The file is streamed through the hasher and closed before returning.
pub fn sha1_hex_from_path(path: &Path) -> Result<String, Error> {
    let mut file = fs::File::open(path)?;

    let mut hasher = Sha1::new();
    io::copy(&mut file, &mut hasher)?;
    drop(file);

    let hash = hasher.finalize();
    Ok(format!("{:x}", &hash))
}
