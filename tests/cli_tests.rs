//! Binary-level tests running the real workshop-pack executable

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::{self, File};
use std::path::Path;

#[allow(deprecated)]
fn pack_cmd() -> Command {
    Command::cargo_bin("workshop-pack").unwrap()
}

fn write_demo_mod(base: &Path) {
    fs::create_dir_all(base.join("assets")).unwrap();
    fs::create_dir_all(base.join("scripts")).unwrap();
    fs::write(base.join("assets/texture.png"), "png").unwrap();
    fs::write(base.join("scripts/main.lua"), "function data() end").unwrap();
    fs::write(
        base.join("workshop.toml"),
        r#"
author = "klamann"
name = "demo mod"
version = "1.0"
files = ["assets/texture.png", "scripts/main.lua"]
"#,
    )
    .unwrap();
}

fn member_names(path: &Path) -> Vec<String> {
    let archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
    let mut names: Vec<String> = archive.file_names().map(String::from).collect();
    names.sort();
    names
}

#[test]
fn test_help_output() {
    pack_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--naming"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn test_builds_archive_from_workshop_toml() {
    let dir = tempfile::tempdir().unwrap();
    write_demo_mod(dir.path());

    pack_cmd()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("archive has been created:"))
        .stdout(predicate::str::contains("klamann_demo_mod_1.0.zip"));

    let archive = dir.path().join("dist/klamann_demo_mod_1.0.zip");
    assert_eq!(
        member_names(&archive),
        vec![
            "klamann_demo_mod_1/",
            "klamann_demo_mod_1/main.lua",
            "klamann_demo_mod_1/texture.png",
        ]
    );
}

#[test]
fn test_naming_override() {
    let dir = tempfile::tempdir().unwrap();
    write_demo_mod(dir.path());

    pack_cmd()
        .arg("--path")
        .arg(dir.path())
        .args(["--naming", "hyphenated"])
        .assert()
        .success()
        .stdout(predicate::str::contains("demo-mod_1.0.zip"));

    assert!(dir.path().join("dist/demo-mod_1.0.zip").is_file());
}

#[test]
fn test_missing_entry_fails() {
    let dir = tempfile::tempdir().unwrap();
    write_demo_mod(dir.path());
    fs::remove_file(dir.path().join("scripts/main.lua")).unwrap();

    pack_cmd()
        .current_dir(dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Manifest entry not found"));

    assert!(!dir.path().join("dist/klamann_demo_mod_1.0.zip").exists());
}

#[test]
fn test_missing_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();

    pack_cmd()
        .current_dir(dir.path())
        .args(["--config", "nope.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_default_profile_requires_its_files() {
    let dir = tempfile::tempdir().unwrap();

    pack_cmd()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("res"));
}
