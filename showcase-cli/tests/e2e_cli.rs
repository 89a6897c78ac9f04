//! End-to-End CLI Tests for liquid-showcase

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a command pointing to the liquid-showcase binary
fn showcase() -> Command {
    cargo_bin_cmd!("liquid-showcase")
}

/// Whether the `<details>` start tag of card `id` carries `open`.
fn card_is_open(html: &str, id: &str) -> bool {
    let marker = format!("data-showcase-id=\"{}\"", id);
    let card = &html[html.find(&marker).expect("card present")..];
    let start = card.find("<details").expect("details element");
    let len = card[start..].find('>').expect("details tag end");
    card[start..start + len]
        .split_whitespace()
        .any(|attr| attr == "open" || attr.starts_with("open="))
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        showcase()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("render"))
            .stdout(predicate::str::contains("snippet"));
    }

    #[test]
    fn shows_version() {
        showcase()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

// ============================================
// Render Tests
// ============================================

mod render {
    use super::*;

    #[test]
    fn default_run_writes_index_html() {
        let temp = TempDir::new().unwrap();

        showcase().current_dir(temp.path()).assert().success();

        let html = std::fs::read_to_string(temp.path().join("index.html")).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert_eq!(html.matches("class=\"showcase-card\"").count(), 5);
    }

    #[test]
    fn writes_to_explicit_output_creating_dirs() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("site/nested/page.html");

        showcase()
            .args(["render", "-o"])
            .arg(&out)
            .assert()
            .success();

        assert!(out.exists());
    }

    #[test]
    fn stdout_render_with_open_card() {
        let output = showcase()
            .args(["render", "--stdout", "--open", "ink-ripple", "--open", "pulse-mask"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let html = String::from_utf8(output.stdout).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(card_is_open(&html, "ink-ripple"));
        assert!(card_is_open(&html, "pulse-mask"));
        for id in ["gooey-swipe", "liquid-button", "wave-panels"] {
            assert!(!card_is_open(&html, id), "card {} should stay collapsed", id);
        }
    }

    #[test]
    fn no_reduced_motion_flag_drops_guard() {
        showcase()
            .args(["render", "--stdout", "--no-reduced-motion"])
            .assert()
            .success()
            .stdout(predicate::str::contains("prefers-reduced-motion").not());
    }

    #[test]
    fn unknown_open_id_fails() {
        showcase()
            .args(["render", "--stdout", "--open", "lava-lamp"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown showcase entry 'lava-lamp'"));
    }

    #[test]
    fn stdout_conflicts_with_output() {
        showcase()
            .args(["render", "--stdout", "-o", "page.html"])
            .assert()
            .failure();
    }
}

// ============================================
// Config Tests
// ============================================

mod config_file {
    use super::*;

    #[test]
    fn picks_up_default_config_file() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("liquid-showcase.toml"),
            "output = \"dist/showcase.html\"\ntitle = \"Motion Lab\"\n",
        )
        .unwrap();

        showcase().current_dir(temp.path()).assert().success();

        let html = std::fs::read_to_string(temp.path().join("dist/showcase.html")).unwrap();
        assert!(html.contains("<title>Motion Lab</title>"));
    }

    #[test]
    fn flag_title_beats_config_title() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("custom.toml");
        std::fs::write(&config, "title = \"From Config\"\n").unwrap();

        showcase()
            .arg("--config")
            .arg(&config)
            .args(["render", "--stdout", "--title", "From Flag"])
            .assert()
            .success()
            .stdout(predicate::str::contains("<title>From Flag</title>"));
    }

    #[test]
    fn missing_explicit_config_fails() {
        let temp = TempDir::new().unwrap();

        showcase()
            .current_dir(temp.path())
            .args(["--config", "missing.toml"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("config file not found"));
    }

    #[test]
    fn missing_explicit_config_fails_for_every_subcommand() {
        let temp = TempDir::new().unwrap();

        for args in [vec!["list"], vec!["snippet", "ink-ripple"]] {
            showcase()
                .current_dir(temp.path())
                .args(["--config", "missing.toml"])
                .args(&args)
                .assert()
                .failure()
                .stderr(predicate::str::contains("config file not found"));
        }
    }

    #[test]
    fn malformed_config_fails() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("liquid-showcase.toml"), "open = 42\n").unwrap();

        showcase()
            .current_dir(temp.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to parse config"));
    }
}

// ============================================
// Catalog Inspection Tests
// ============================================

mod catalog {
    use super::*;

    #[test]
    fn lists_entries_in_order() {
        let output = showcase().arg("list").output().unwrap();
        assert!(output.status.success());

        let stdout = String::from_utf8(output.stdout).unwrap();
        let ids: Vec<_> = stdout
            .lines()
            .map(|l| l.split('\t').next().unwrap())
            .collect();
        assert_eq!(
            ids,
            ["gooey-swipe", "pulse-mask", "liquid-button", "wave-panels", "ink-ripple"]
        );
        assert!(stdout.contains("liquid-button\tTidal Button Hover"));
    }

    #[test]
    fn lists_entries_as_json() {
        let output = showcase().args(["list", "--json"]).output().unwrap();
        assert!(output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let entries = json.as_array().unwrap();
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[1]["id"], "pulse-mask");
        assert_eq!(entries[1]["demo"], "pulse-mask");
    }

    #[test]
    fn prints_snippet_verbatim() {
        let output = showcase().args(["snippet", "liquid-button"]).output().unwrap();
        assert!(output.status.success());

        let stdout = String::from_utf8(output.stdout).unwrap();
        assert!(stdout.starts_with("<button class=\"liquid-button\">\n  <span>Request Access</span>"));
        assert!(stdout.contains(".liquid-button:hover .wave {"));
    }

    #[test]
    fn unknown_snippet_fails() {
        showcase()
            .args(["snippet", "lava-lamp"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown showcase entry"));
    }
}
