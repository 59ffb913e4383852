use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn squiggler_cmd() -> Command {
    Command::cargo_bin("squiggler").expect("binary exists")
}

#[test]
fn help_prints_about_text() {
    squiggler_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Decorative freehand stroke sketchpad",
        ));
}

#[test]
fn list_styles_prints_registry_in_order() {
    squiggler_cmd()
        .arg("--list-styles")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "line\narc\nwobble\nswirl\nsuper-swirl\n",
        ));
}

#[test]
fn no_flags_prints_usage() {
    let temp = TempDir::new().unwrap();

    squiggler_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn unknown_style_is_reported() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out.png");

    squiggler_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--render")
        .arg(&out)
        .args(["--style", "zigzag"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown stroke style 'zigzag'"));
    assert!(!out.exists());
}

#[test]
fn render_writes_a_png() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("strokes.png");

    squiggler_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--render")
        .arg(&out)
        .args(["--style", "wobble"])
        .assert()
        .success();

    let bytes = std::fs::read(&out).expect("rendered file exists");
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn render_honors_config_defaults() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join("squiggler");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[surface]\nwidth = 64\nheight = 48\n",
    )
    .unwrap();
    let out = temp.path().join("small.png");

    squiggler_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--render")
        .arg(&out)
        .assert()
        .success();

    assert!(out.exists());
}
