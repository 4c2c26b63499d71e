//! Binary-level tests for the `trellis` command.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A project directory with a layout, a nested page and a partial.
fn site() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "_layout.tera", "<html>{{ yield_content() }}</html>");
    write(root, "index.tera", "hi");
    write(
        root,
        "blog/post.tera",
        r#"{{ render(partial="/shared/nav") }}<p>post</p>"#,
    );
    write(root, "shared/_nav.tera", "<nav/>");
    dir
}

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// `trellis` running inside `dir`, isolated from the user's config and env.
fn trellis(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("trellis").unwrap();
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join(".xdg"))
        .env("HOME", dir)
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR");
    cmd
}

// ── general ───────────────────────────────────────────────────────────────────

#[test]
fn help_flag() {
    let dir = TempDir::new().unwrap();
    trellis(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("Render a page"));
}

#[test]
fn short_help_uses_the_one_line_summary() {
    let dir = TempDir::new().unwrap();
    trellis(dir.path())
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Render pages through their partials and layouts"));
}

#[test]
fn version_flag() {
    let dir = TempDir::new().unwrap();
    trellis(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ── render ────────────────────────────────────────────────────────────────────

#[test]
fn render_wraps_page_in_layout() {
    let dir = site();
    trellis(dir.path())
        .args(["render", "index.tera"])
        .assert()
        .success()
        .stdout("<html>hi</html>");
}

#[test]
fn render_resolves_partials_from_the_root() {
    let dir = site();
    trellis(dir.path())
        .args(["render", "blog/post.tera"])
        .assert()
        .success()
        .stdout("<html><nav/><p>post</p></html>");
}

#[test]
fn render_without_layout() {
    let dir = site();
    trellis(dir.path())
        .args(["render", "index.tera", "--no-layout"])
        .assert()
        .success()
        .stdout("hi");
}

#[test]
fn render_with_headers_reports_content_type() {
    let dir = site();
    write(dir.path(), "style.css.tera", "a{}");
    trellis(dir.path())
        .args(["render", "style.css.tera", "--headers", "--no-layout"])
        .assert()
        .success()
        .stdout("Content-Type: text/css\n\na{}");
}

#[test]
fn render_as_json() {
    let dir = site();
    trellis(dir.path())
        .args(["render", "index.tera", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""content_type": "text/html""#))
        .stdout(predicate::str::contains(r#""body": "<html>hi</html>""#))
        .stdout(predicate::str::contains("_layout.tera"));
}

#[test]
fn render_to_file() {
    let dir = site();
    trellis(dir.path())
        .args(["render", "index.tera", "-o", "out.html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let written = fs::read_to_string(dir.path().join("out.html")).unwrap();
    assert_eq!(written, "<html>hi</html>");
}

#[test]
fn render_jinja_page() {
    let dir = site();
    write(dir.path(), "_layout.j2", "[{{ yield_content() }}|{{ yield_content(\"aside\") }}]");
    write(dir.path(), "_aside.j2", "side");
    write(
        dir.path(),
        "about.j2",
        r#"{% filter content_for("aside") %}{{ render(partial="aside") }}{% endfilter %}about"#,
    );

    trellis(dir.path())
        .args(["render", "about.j2"])
        .assert()
        .success()
        .stdout("[about|side]");
}

#[test]
fn fixed_layout_dialect_from_env() {
    let dir = site();
    write(dir.path(), "about.j2", "about");

    trellis(dir.path())
        .env("TRELLIS__LAYOUT__EXTENSION", "tera")
        .args(["render", "about.j2"])
        .assert()
        .success()
        .stdout("<html>about</html>");
}

// ── render errors ─────────────────────────────────────────────────────────────

#[test]
fn missing_page_exits_not_found() {
    let dir = site();
    trellis(dir.path())
        .args(["render", "nope.tera"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Page not found"));
}

#[test]
fn missing_partial_reports_resolved_path() {
    let dir = site();
    write(dir.path(), "broken.tera", r#"{{ render(partial="menu") }}"#);
    trellis(dir.path())
        .args(["render", "broken.tera"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("_menu.tera"))
        .stderr(predicate::str::contains("Suggestions:"));
}

#[test]
fn unsupported_dialect_is_a_user_error() {
    let dir = site();
    write(dir.path(), "page.haml", "%p hi");
    trellis(dir.path())
        .args(["render", "page.haml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unsupported template type 'haml'"));
}

#[test]
fn page_outside_root_is_rejected() {
    let dir = site();
    fs::create_dir_all(dir.path().join("sub")).unwrap();
    trellis(dir.path())
        .args(["render", "index.tera", "--root", "sub"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("outside the project root"));
}

#[test]
fn runaway_inclusion_hits_the_depth_limit() {
    let dir = site();
    write(dir.path(), "loop.tera", r#"{{ render(partial="again") }}"#);
    write(dir.path(), "_again.tera", r#"{{ render(partial="again") }}"#);
    trellis(dir.path())
        .env("TRELLIS__RENDER__MAX_DEPTH", "3")
        .args(["render", "loop.tera"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("nesting exceeded 3 levels"));
}

// ── layout / list ─────────────────────────────────────────────────────────────

#[test]
fn layout_prints_nearest_layout() {
    let dir = site();
    trellis(dir.path())
        .args(["layout", "blog/post.tera"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("_layout.tera\n"));
}

#[test]
fn list_skips_partials_and_layouts() {
    let dir = site();
    trellis(dir.path())
        .args(["list", "--format", "list"])
        .assert()
        .success()
        .stdout("blog/post.tera\nindex.tera\n");
}

#[test]
fn list_as_json() {
    let dir = site();
    trellis(dir.path())
        .args(["list", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""relative": "index.tera""#))
        .stdout(predicate::str::contains("_nav").not());
}

// ── config / init / completions ───────────────────────────────────────────────

#[test]
fn config_get_reads_environment() {
    let dir = TempDir::new().unwrap();
    trellis(dir.path())
        .env("TRELLIS__RENDER__MAX_DEPTH", "7")
        .args(["config", "get", "render.max_depth"])
        .assert()
        .success()
        .stdout("7\n");
}

#[test]
fn config_get_reads_explicit_file() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "custom.toml", "[layout]\nextension = \"j2\"\n");
    trellis(dir.path())
        .args(["--config", "custom.toml", "config", "get", "layout.extension"])
        .assert()
        .success()
        .stdout("j2\n");
}

#[test]
fn local_config_file_is_picked_up() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), ".trellis.toml", "[render]\nmax_depth = 12\n");
    trellis(dir.path())
        .args(["config", "get", "render.max_depth"])
        .assert()
        .success()
        .stdout("12\n");
}

#[test]
fn missing_config_file_exits_with_config_error() {
    let dir = TempDir::new().unwrap();
    trellis(dir.path())
        .args(["--config", "absent.toml", "config", "list"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn unknown_config_key() {
    let dir = TempDir::new().unwrap();
    trellis(dir.path())
        .args(["config", "get", "nope"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn init_writes_local_config_once() {
    let dir = TempDir::new().unwrap();
    trellis(dir.path()).arg("init").assert().success();

    let written = fs::read_to_string(dir.path().join(".trellis.toml")).unwrap();
    assert!(written.contains("max_depth = 32"));

    trellis(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn completions_for_bash() {
    let dir = TempDir::new().unwrap();
    trellis(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("trellis"));
}
