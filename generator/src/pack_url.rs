//! Pack url helpers. Contains [build] creating download url for a pack index.

use crate::common::PACKS_DIRECTORY_NAME;

/// Creates url the pack with `index` will be downloadable at, eg.
/// `http://127.0.0.1:8000/packs/3`.
///
/// `server_url` is used as-is, without any normalization, so it should not end
/// with `/`.
///
/// # Examples
///
/// ```
/// # use trackpack_fixtures_generator::pack_url::build;
/// assert_eq!(build("http://127.0.0.1:8000", 3), "http://127.0.0.1:8000/packs/3");
/// ```
pub fn build(
    server_url: &str,
    index: usize,
) -> String {
    format!("{server_url}/{PACKS_DIRECTORY_NAME}/{index}")
}
