use std::collections::HashSet;
use test_case::test_case;
use trackpack_fixtures_generator::{
    generate::{GenerateOptions, generate},
    manifest::load_file,
};
use trackpack_fixtures_tests::{
    manifest_raw_of_working_directory, pack_meta_of_archive, sha1_hex_of_file,
    working_directory_prepare,
};
use uuid::Version;

#[test]
fn archives_contain_expected_pack_meta() {
    let working_directory = working_directory_prepare().unwrap();
    generate(working_directory.path(), &GenerateOptions::default()).unwrap();

    (0..24).for_each(|index| {
        let pack_meta =
            pack_meta_of_archive(&working_directory.path().join("packs").join(index.to_string()))
                .unwrap();

        assert_eq!(pack_meta.pack.description, format!("pack {index}"));
        assert_eq!(pack_meta.pack.pack_format, 22);
        assert_eq!(pack_meta.pack.supported_formats, [22, 1000]);
    });

    // nothing above the range
    assert!(!working_directory.path().join("packs").join("24").exists());
}

#[test]
fn manifest_has_exactly_expected_keys() {
    let working_directory = working_directory_prepare().unwrap();
    generate(working_directory.path(), &GenerateOptions::default()).unwrap();

    let manifest_raw = manifest_raw_of_working_directory(working_directory.path()).unwrap();

    assert_eq!(manifest_raw.len(), 24);
    manifest_raw.iter().for_each(|entry_raw| {
        assert_eq!(
            entry_raw.keys().map(String::as_str).collect::<Vec<_>>(),
            ["url", "uuid", "hash"]
        );
    });
}

#[test]
fn manifest_hashes_match_archives_on_disk() {
    let working_directory = working_directory_prepare().unwrap();
    let manifest = generate(working_directory.path(), &GenerateOptions::default()).unwrap();

    // what was returned is what was stored
    assert_eq!(
        load_file(&working_directory.path().join("packs.json")).unwrap(),
        manifest
    );

    manifest
        .entries
        .iter()
        .enumerate()
        .for_each(|(index, entry)| {
            assert_eq!(entry.hash.len(), 40);
            assert_eq!(entry.hash, entry.hash.to_lowercase());
            assert_eq!(
                entry.hash,
                sha1_hex_of_file(&working_directory.path().join("packs").join(index.to_string()))
                    .unwrap()
            );
        });
}

#[test]
fn manifest_uuids_are_distinct_v4() {
    let working_directory = working_directory_prepare().unwrap();
    let manifest = generate(working_directory.path(), &GenerateOptions::default()).unwrap();

    manifest.entries.iter().for_each(|entry| {
        assert_eq!(entry.uuid.get_version(), Some(Version::Random));
    });

    assert_eq!(
        manifest
            .entries
            .iter()
            .map(|entry| entry.uuid)
            .collect::<HashSet<_>>()
            .len(),
        24
    );

    // canonical hyphenated form in the file
    let manifest_raw = manifest_raw_of_working_directory(working_directory.path()).unwrap();
    manifest_raw.iter().for_each(|entry_raw| {
        let uuid = entry_raw["uuid"].as_str().unwrap();
        assert_eq!(uuid.len(), 36);
        assert_eq!(uuid, uuid.to_lowercase());
    });
}

#[test_case(
    "http://127.0.0.1:8000";
    "default server"
)]
#[test_case(
    "http://omena0.example.com:20123";
    "remote server"
)]
fn manifest_urls_follow_index(server_url: &str) {
    let working_directory = working_directory_prepare().unwrap();
    let manifest = generate(
        working_directory.path(),
        &GenerateOptions {
            server_url: server_url.to_owned(),
            ..GenerateOptions::default()
        },
    )
    .unwrap();

    manifest
        .entries
        .iter()
        .enumerate()
        .for_each(|(index, entry)| {
            assert_eq!(entry.url, format!("{server_url}/packs/{index}"));
        });
}

#[test]
fn end_to_end_default_server() {
    let working_directory = working_directory_prepare().unwrap();
    generate(working_directory.path(), &GenerateOptions::default()).unwrap();

    let manifest = load_file(&working_directory.path().join("packs.json")).unwrap();

    assert_eq!(manifest.entries.len(), 24);
    assert_eq!(manifest.entries[0].url, "http://127.0.0.1:8000/packs/0");
    assert_eq!(
        manifest.entries[0].hash,
        sha1_hex_of_file(&working_directory.path().join("packs").join("0")).unwrap()
    );
}
