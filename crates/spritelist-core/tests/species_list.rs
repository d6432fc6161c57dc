//! Integration test: a PokeAPI species list on disk rendered end to end.
//!
//! Writes a document shaped like `/api/v2/pokemon-species?limit=N`, loads it,
//! resolves every record and checks the rendered array.

use spritelist_core::document::load_document;
use spritelist_core::error::{ListError, SchemaError};
use spritelist_core::generate::generate;
use spritelist_core::render::{render, OutputFormat, DEFAULT_ARRAY_NAME};
use spritelist_core::sprite::{SpriteStyle, SpriteTemplate};
use std::fs;
use tempfile::tempdir;

const SPECIES: &[(&str, u32)] = &[
    ("bulbasaur", 1),
    ("charmander", 4),
    ("squirtle", 7),
    ("pikachu", 25),
    ("mewtwo", 150),
    ("mew", 151),
    ("urshifu-rapid-strike", 10191),
];

fn species_document() -> String {
    let results: Vec<String> = SPECIES
        .iter()
        .map(|(name, id)| {
            format!(
                r#"{{"name":"{name}","url":"https://pokeapi.co/api/v2/pokemon-species/{id}/"}}"#
            )
        })
        .collect();
    format!(
        r#"{{"count":{},"next":null,"previous":null,"results":[{}]}}"#,
        SPECIES.len(),
        results.join(",")
    )
}

#[test]
fn java_listing_matches_records() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("api.json");
    fs::write(&path, species_document()).unwrap();

    let doc = load_document(&path).unwrap();
    let entries = generate(&doc, &SpriteTemplate::default()).unwrap();
    let text = render(&entries, OutputFormat::Java, DEFAULT_ARRAY_NAME).unwrap();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.first(), Some(&"String[] imageEntries = {"));
    assert_eq!(lines.last(), Some(&"};"));

    let quoted: Vec<&str> = lines
        .iter()
        .copied()
        .filter(|l| l.starts_with("    \""))
        .collect();
    assert_eq!(quoted.len(), SPECIES.len());

    for (line, (_, id)) in quoted.iter().zip(SPECIES) {
        assert_eq!(
            *line,
            format!(
                "    \"https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork/{id}.png\","
            )
        );
    }
}

#[test]
fn manifest_listing_uses_filenames() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("api.json");
    fs::write(&path, species_document()).unwrap();

    let doc = load_document(&path).unwrap();
    let entries = generate(&doc, &SpriteStyle::Default.template()).unwrap();
    let text = render(&entries, OutputFormat::Manifest, DEFAULT_ARRAY_NAME).unwrap();

    let first = text.lines().next().unwrap();
    assert_eq!(
        first,
        "1.png\thttps://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/1.png"
    );
    assert_eq!(text.lines().count(), SPECIES.len());
}

#[test]
fn bad_record_aborts_whole_run() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("api.json");
    fs::write(
        &path,
        r#"{"results":[
            {"name":"bulbasaur","url":"https://pokeapi.co/api/v2/pokemon-species/1/"},
            {"name":"broken","url":"///"}
        ]}"#,
    )
    .unwrap();

    let doc = load_document(&path).unwrap();
    let err = generate(&doc, &SpriteTemplate::default()).unwrap_err();
    assert!(matches!(
        err,
        ListError::Schema(SchemaError::EmptyIdentifier { index: 1, .. })
    ));
}

#[test]
fn truncated_file_is_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("api.json");
    let doc = species_document();
    fs::write(&path, &doc[..doc.len() / 2]).unwrap();

    let err = load_document(&path).unwrap_err();
    assert!(err.is_parse());
    assert!(err.to_string().starts_with("invalid JSON"));
}
