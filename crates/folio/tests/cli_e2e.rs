#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const TECHNOS: &str = r#"[
    {"name": "Vue", "icon": "vue.svg"},
    {"name": "Node", "icon": "node.svg"},
    {"name": "PHP", "icon": "php.svg"}
]"#;

const PROJECTS: &str = r#"[
    {"name": "Portfolio", "description": "This site", "technos": ["Vue", "Node"]},
    {"name": "oBlog", "description": "A blog engine", "technos": ["PHP"]},
    {"name": "Chat", "description": "Realtime chat", "technos": ["Node", "Cobol"]}
]"#;

const LINKS: &str = r#"[
    {"href": "https://github.com/someone", "title": "GitHub", "icon": "github.svg"}
]"#;

/// A data dir plus an isolated home, so no user config leaks into the run.
struct Fixture {
    temp: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let data = temp.path().join("data");
        fs::create_dir_all(&data).unwrap();
        fs::create_dir_all(temp.path().join("home")).unwrap();
        fs::write(data.join("technos.json"), TECHNOS).unwrap();
        fs::write(data.join("projects.json"), PROJECTS).unwrap();
        fs::write(data.join("links.json"), LINKS).unwrap();
        Self { temp }
    }

    fn data_dir(&self) -> std::path::PathBuf {
        self.temp.path().join("data")
    }

    fn cmd(&self) -> Command {
        folio_cmd(self.temp.path())
    }
}

fn folio_cmd(root: &Path) -> Command {
    let home = root.join("home");
    let mut cmd = Command::new(cargo_bin("folio"));
    cmd.current_dir(root)
        .env("HOME", &home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("FOLIO_DATA_DIR")
        .env_remove("FOLIO_LOG");
    cmd
}

#[test]
fn test_naked_invocation_lists_everything() {
    let fx = Fixture::new();
    fx.cmd()
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Filter: off | showing 3 of 3 projects\nTechnologies: Node  PHP  Vue\n",
        ))
        .stdout(predicate::str::contains("  Chat       Cobol?  Node"));
}

#[test]
fn test_replay_filters_and_highlights() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["replay", "tag=Vue", "tag=PHP"])
        .assert()
        .success()
        .stdout(
            "Filter: on | showing 2 of 3 projects\n\
             Technologies: Node  [PHP]  [Vue]\n  \
             Portfolio  Node  [Vue]\n  \
             oBlog      [PHP]\n",
        );
}

#[test]
fn test_replay_master_off_keeps_selection() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["replay", "tag=Node", "master", "master", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""master_enabled":true"#))
        .stdout(predicate::str::contains(r#""visible_count":2"#));
}

#[test]
fn test_sticky_policy_from_flag() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["replay", "tag=Vue", "tag=Vue", "--policy", "sticky"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Filter: on | showing 0 of 3 projects",
        ))
        .stdout(predicate::str::contains("(no matching projects)"));
}

#[test]
fn test_sticky_policy_from_local_config() {
    let fx = Fixture::new();
    fs::write(
        fx.temp.path().join("folio.toml"),
        "master_policy = \"sticky\"\n",
    )
    .unwrap();
    fx.cmd()
        .args(["replay", "tag=Vue", "tag=Vue"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Filter: on"));
}

#[test]
fn test_derived_policy_turns_filter_off() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["replay", "tag=Vue", "tag=Vue"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Filter: off | showing 3 of 3 projects",
        ));
}

#[test]
fn test_unknown_tag_click_is_reported_and_ignored() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["replay", "tag=Cobol"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "unknown technology 'Cobol' ignored",
        ))
        .stdout(predicate::str::starts_with("Filter: off"));
}

#[test]
fn test_tag_ids_are_case_sensitive() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["replay", "tag=vue"])
        .assert()
        .success()
        .stderr(predicate::str::contains("unknown technology 'vue' ignored"));
}

#[test]
fn test_invalid_event_is_a_usage_error() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["replay", "click"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown event 'click'"));
}

#[test]
fn test_shell_reads_events_from_stdin() {
    let fx = Fixture::new();
    let assert = fx
        .cmd()
        .arg("shell")
        .write_stdin("tag=PHP\nmaster\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Filter: on | showing 1 of 3 projects"));
    let out = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(out.matches("Filter:").count(), 3);
}

#[test]
fn test_explicit_data_dir() {
    let fx = Fixture::new();
    let elsewhere = TempDir::new().unwrap();
    fs::create_dir_all(elsewhere.path().join("home")).unwrap();
    folio_cmd(elsewhere.path())
        .args(["tags", "--data-dir"])
        .arg(fx.data_dir())
        .assert()
        .success()
        .stdout("Node  node.svg\nPHP   php.svg\nVue   vue.svg\n");
}

#[test]
fn test_data_dir_from_environment() {
    let fx = Fixture::new();
    let elsewhere = TempDir::new().unwrap();
    fs::create_dir_all(elsewhere.path().join("home")).unwrap();
    folio_cmd(elsewhere.path())
        .env("FOLIO_DATA_DIR", fx.data_dir())
        .arg("tags")
        .assert()
        .success()
        .stdout("Node  node.svg\nPHP   php.svg\nVue   vue.svg\n");
}

#[test]
fn test_environment_beats_local_config_file() {
    let fx = Fixture::new();
    fs::write(
        fx.temp.path().join("folio.toml"),
        "data_dir = \"missing\"\n",
    )
    .unwrap();

    fx.cmd()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not load the catalogue"));

    fx.cmd()
        .env("FOLIO_DATA_DIR", fx.data_dir())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Filter: off | showing 3 of 3 projects",
        ));
}

#[test]
fn test_data_dir_flag_beats_environment() {
    let fx = Fixture::new();
    let empty = TempDir::new().unwrap();
    fx.cmd()
        .env("FOLIO_DATA_DIR", empty.path())
        .args(["tags", "--data-dir"])
        .arg(fx.data_dir())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Node  node.svg"));
}

#[test]
fn test_links() {
    let fx = Fixture::new();
    fx.cmd()
        .arg("links")
        .assert()
        .success()
        .stdout("GitHub  https://github.com/someone\n");
}

#[test]
fn test_missing_links_file_is_fine() {
    let fx = Fixture::new();
    fs::remove_file(fx.data_dir().join("links.json")).unwrap();
    fx.cmd()
        .arg("links")
        .assert()
        .success()
        .stdout("(no links)\n");
}

#[test]
fn test_missing_items_fails_the_load() {
    let fx = Fixture::new();
    fs::remove_file(fx.data_dir().join("projects.json")).unwrap();
    fx.cmd()
        .arg("list")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Could not load the catalogue"))
        .stderr(predicate::str::contains("Failed to read items data"));
}

#[test]
fn test_malformed_tags_fails_the_load() {
    let fx = Fixture::new();
    fs::write(fx.data_dir().join("technos.json"), "{ not json").unwrap();
    fx.cmd()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed tags data"));
}

#[test]
fn test_config_prints_effective_values() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["config", "--policy", "sticky"])
        .assert()
        .success()
        .stdout(predicate::str::contains("master_policy = \"sticky\""))
        .stdout(predicate::str::contains("items_file = \"projects.json\""));
}

#[test]
fn test_config_works_without_data() {
    let empty = TempDir::new().unwrap();
    fs::create_dir_all(empty.path().join("home")).unwrap();
    folio_cmd(empty.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("(default)"));
}
