//! Common crate, containing types shared between
//! trackpack-fixtures-generator and anything that consumes the manifest it
//! writes (eg. the plugin reading `packs.json`).
//!
//! There are two root types in this crate:
//! - [pack_meta::PackMeta], the content of `pack.mcmeta` placed inside every
//!   generated `pack` archive.
//! - [manifest::Manifest], an ordered list of [manifest::ManifestEntry]
//!   (download url + identifier + hash), serialized as `packs.json`.
//!
//! Both are plain [serde] types, so the consumer side can deserialize them with
//! any serde format, json being the one used by the generator.

#![warn(missing_docs)]

pub mod manifest;
pub mod pack_meta;

/// Number of `pack` archives created in a single run.
pub const PACK_COUNT: usize = 24;

/// `pack_format` written into every `pack.mcmeta`.
pub const PACK_FORMAT: u32 = 22;
/// `supported_formats` range written into every `pack.mcmeta`, as
/// `[min_inclusive, max_inclusive]`.
pub const SUPPORTED_FORMATS: [u32; 2] = [22, 1000];

/// Name of the single entry inside every `pack` archive.
pub const PACK_META_ENTRY_NAME: &str = "pack.mcmeta";

/// Directory (relative to working directory) holding `pack` archives. It is
/// also the url path segment they are served under.
pub const PACKS_DIRECTORY_NAME: &str = "packs";
/// File name (relative to working directory) of the manifest.
pub const MANIFEST_FILE_NAME: &str = "packs.json";

/// Base url of the http server serving [PACKS_DIRECTORY_NAME], used when none
/// is provided.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";
