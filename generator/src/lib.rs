//! trackpack-fixtures-generator fabricates placeholder resource packs and a
//! `packs.json` manifest describing them, to be used as test fixtures for a
//! pack serving http server and a client verifying downloaded packs.
//!
//! A single run (see [generate::generate]) produces, inside working
//! directory:
//! - `packs/0` .. `packs/23`, each one a zip archive containing a single
//!   `pack.mcmeta` entry (see [pack_meta::build]).
//! - `packs.json`, a json array of `{url, uuid, hash}` objects, one per
//!   archive, in index order (see [manifest]).
//!
//! The `packs/` directory is served by a separate http server. The consumer
//! reads `packs.json`, downloads each `url` and compares downloaded bytes with
//! `hash` (lowercase hex sha1).
//!
//! This crate can be used in two ways:
//! - As a standalone application, run in the directory the http server will
//!   serve from. The only option is `--server-url`, base url of that server
//!   (`http://127.0.0.1:8000` if not set).
//! - As a library, for example from integration tests preparing their own
//!   working directory.
//!
//! # Examples
//! ```no_run
//! # use anyhow::Error;
//! # use std::path::PathBuf;
//! # use trackpack_fixtures_generator::generate::{generate, GenerateOptions};
//!
//! # fn main() -> Result<(), Error> {
//! // `packs` directory must exist inside working directory
//! let manifest = generate(&PathBuf::from("fixtures"), &GenerateOptions::default())?;
//!
//! assert_eq!(manifest.entries[0].url, "http://127.0.0.1:8000/packs/0");
//! # Ok(())
//! # }
//! ```

#![allow(clippy::new_without_default)]
#![warn(missing_docs)]

pub use trackpack_fixtures_common as common;

pub mod archive;
pub mod generate;
pub mod hash;
pub mod manifest;
pub mod pack_meta;
pub mod pack_url;
