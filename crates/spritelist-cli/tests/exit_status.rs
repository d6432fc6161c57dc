//! Runs the built `spritelist` binary in a scratch working directory and
//! checks exit status and stdout.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_spritelist"))
        .args(args)
        .current_dir(dir)
        .env("XDG_STATE_HOME", dir.join("state"))
        .env("XDG_CONFIG_HOME", dir.join("config"))
        .env("XDG_CONFIG_DIRS", dir.join("config-dirs"))
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn no_args_prints_java_array() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("api.json"),
        r#"{"results":[{"name":"pikachu","url":"https://pokeapi.co/api/v2/pokemon-species/25/"}]}"#,
    )
    .unwrap();

    let out = run_in(dir.path(), &[]);
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "String[] imageEntries = {\n    \"https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork/25.png\",\n};\n"
    );
    assert!(dir.path().join("state/spritelist/spritelist.log").exists());
}

#[test]
fn truncated_json_exits_1_with_empty_stdout() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("api.json"),
        r#"{"results":[{"url":"https://pokeapi.co/api/v2/pokemon-species/25/"},{"url":"https://poke"#,
    )
    .unwrap();

    let out = run_in(dir.path(), &[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.starts_with("spritelist error:"), "{stderr}");
    assert!(stderr.contains("invalid JSON"), "{stderr}");
}

#[test]
fn missing_url_exits_1_with_empty_stdout() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("api.json"),
        r#"{"results":[{"url":"https://pokeapi.co/api/v2/pokemon-species/1/"},{"name":"missingno"}]}"#,
    )
    .unwrap();

    let out = run_in(dir.path(), &[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8(out.stderr)
        .unwrap()
        .contains("record 1 has no `url` field"));
}

#[test]
fn missing_input_file_exits_1() {
    let dir = tempdir().unwrap();
    let out = run_in(dir.path(), &[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
}

#[test]
fn reserved_array_name_exits_1() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("api.json"), r#"{"results":[]}"#).unwrap();
    let out = run_in(dir.path(), &["--array-name", "class"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
}
