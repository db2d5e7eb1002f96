#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const BLOG: &str = "Create a simple blog application with user authentication";

fn sparc(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sparc").unwrap();
    cmd.current_dir(dir.path())
        .env("SPARC_CONFIG", dir.path().join("sparc.yaml"))
        .env_remove("OPENAI_API_KEY")
        .env_remove("ANTHROPIC_API_KEY")
        .env_remove("RUST_LOG");
    cmd
}

fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let out = cmd.output().unwrap();
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    serde_json::from_slice(&out.stdout).unwrap()
}

// ---------------------------------------------------------------------------
// sparc generate
// ---------------------------------------------------------------------------

#[test]
fn generate_prints_file_table() {
    let dir = TempDir::new().unwrap();
    sparc(&dir)
        .args(["generate", BLOG])
        .assert()
        .success()
        .stdout(predicate::str::contains("sparc/01-specification.md"))
        .stdout(predicate::str::contains("package.json"))
        .stdout(predicate::str::contains("use --out DIR"));
}

#[test]
fn generate_writes_bundle_to_out_dir() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("bundle");
    sparc(&dir)
        .args(["generate", BLOG, "--out"])
        .arg(&out)
        .assert()
        .success();

    let spec = std::fs::read_to_string(out.join("sparc/01-specification.md")).unwrap();
    assert!(spec.starts_with("# Phase 1: Specification - Blog Application"));
    assert!(out.join("sparc/05-completion.md").exists());
    assert!(out.join("src/App.jsx").exists());
    assert!(out.join("tests/setup.js").exists());
    assert!(out.join("README.md").exists());
}

#[test]
fn generate_json_honours_flags() {
    let dir = TempDir::new().unwrap();
    let json = json_stdout(sparc(&dir).args([
        "generate",
        BLOG,
        "--framework",
        "svelte",
        "--no-tests",
        "--no-docs",
        "--json",
    ]));
    let names: Vec<&str> = json["files"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["name"].as_str().unwrap())
        .collect();
    assert_eq!(names.len(), 6);
    assert_eq!(names[5], "index.html");
    assert!(json["generationTime"].is_u64());
}

#[test]
fn generate_uses_config_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("sparc.yaml"),
        "generation:\n  framework: vue\n",
    )
    .unwrap();
    let json = json_stdout(sparc(&dir).args(["generate", BLOG, "--json"]));
    assert!(json["files"]
        .as_array()
        .unwrap()
        .iter()
        .any(|f| f["name"] == "src/App.vue"));
}

#[test]
fn generate_rejects_short_description() {
    let dir = TempDir::new().unwrap();
    sparc(&dir)
        .args(["generate", "Hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to process input"))
        .stderr(predicate::str::contains("at least 10 characters"));
}

#[test]
fn generate_rejects_unknown_framework() {
    let dir = TempDir::new().unwrap();
    sparc(&dir)
        .args(["generate", BLOG, "--framework", "ember"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown framework"));
}

#[test]
fn generate_elaborate_appends_notes() {
    let dir = TempDir::new().unwrap();
    let json = json_stdout(sparc(&dir).args(["generate", BLOG, "--elaborate", "--json"]));
    assert!(json["specification"]
        .as_str()
        .unwrap()
        .contains("## Additional Notes"));
}

#[test]
fn generate_elaborate_without_key_fails_fast() {
    let dir = TempDir::new().unwrap();
    sparc(&dir)
        .args(["generate", BLOG, "--elaborate", "--provider", "openai"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing API key for provider 'openai'"));
}

#[test]
fn generate_elaborate_with_env_key_succeeds() {
    let dir = TempDir::new().unwrap();
    sparc(&dir)
        .env("OPENAI_API_KEY", "sk-test")
        .args(["generate", BLOG, "--elaborate", "--provider", "openai"])
        .assert()
        .success();
}

// ---------------------------------------------------------------------------
// Stage commands
// ---------------------------------------------------------------------------

#[test]
fn validate_reports_errors_and_fails() {
    let dir = TempDir::new().unwrap();
    sparc(&dir)
        .args(["validate", "short"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("[error] Input must be at least 10 characters"));
}

#[test]
fn validate_json_includes_sanitized_input() {
    let dir = TempDir::new().unwrap();
    let json = json_stdout(sparc(&dir).args([
        "validate",
        "<script>alert(1)</script>Create a blog",
        "--json",
    ]));
    assert_eq!(json["isValid"], true);
    assert_eq!(json["sanitizedInput"], "Create a blog");
}

#[test]
fn extract_finds_canonical_technologies() {
    let dir = TempDir::new().unwrap();
    let json = json_stdout(sparc(&dir).args([
        "extract",
        "An API on Node.js, PostgreSQL, Redis, Docker",
        "--json",
    ]));
    let techs: Vec<&str> = json["technologies"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t.as_str().unwrap())
        .collect();
    for t in ["Node.js", "PostgreSQL", "Redis", "Docker"] {
        assert!(techs.contains(&t), "missing {t}");
    }
}

#[test]
fn categorize_ecommerce() {
    let dir = TempDir::new().unwrap();
    let json = json_stdout(sparc(&dir).args(["categorize", "Build an e-commerce store", "--json"]));
    assert_eq!(json["type"], "e-commerce");
    assert_eq!(json["complexity"], "high");
}

#[test]
fn spec_human_output() {
    let dir = TempDir::new().unwrap();
    sparc(&dir)
        .args(["spec", BLOG])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Blog Application"))
        .stdout(predicate::str::contains("Features: user authentication, blog application"));
}

#[test]
fn spec_rejects_short_description() {
    let dir = TempDir::new().unwrap();
    sparc(&dir)
        .args(["spec", "Todo app"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input must be at least 10 characters"));
}

#[test]
fn spec_strips_markup_before_analysis() {
    let dir = TempDir::new().unwrap();
    let json = json_stdout(sparc(&dir).args([
        "spec",
        "<script>payment()</script>Create a blog with comments",
        "--json",
    ]));
    assert_eq!(json["category"]["type"], "web-application");
}

#[test]
fn phase_rejects_short_description() {
    let dir = TempDir::new().unwrap();
    sparc(&dir)
        .args(["phase", "architecture", "Hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input must be at least 10 characters"));
}

#[test]
fn phase_prints_document() {
    let dir = TempDir::new().unwrap();
    sparc(&dir)
        .args(["phase", "architecture", BLOG])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Phase 3: Architecture - Blog Application"));
}

#[test]
fn phase_rejects_unknown_name() {
    let dir = TempDir::new().unwrap();
    sparc(&dir)
        .args(["phase", "deployment", BLOG])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid phase name: deployment"));
}

// ---------------------------------------------------------------------------
// sparc providers / config
// ---------------------------------------------------------------------------

#[test]
fn providers_reflect_env_keys() {
    let dir = TempDir::new().unwrap();
    let json = json_stdout(
        sparc(&dir)
            .env("ANTHROPIC_API_KEY", "sk-ant")
            .args(["providers", "--json"]),
    );
    assert_eq!(json[0]["id"], "openai");
    assert_eq!(json[0]["configured"], false);
    assert_eq!(json[1]["configured"], true);
    assert_eq!(json[2]["id"], "mock");
    assert_eq!(json[2]["default"], true);
}

#[test]
fn config_show_redacts_keys() {
    let dir = TempDir::new().unwrap();
    sparc(&dir)
        .env("OPENAI_API_KEY", "sk-very-secret")
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not found, using defaults"))
        .stdout(predicate::str::contains("port: 3001"))
        .stdout(predicate::str::contains("<redacted>"))
        .stdout(predicate::str::contains("sk-very-secret").not());
}

#[test]
fn config_validate_default_is_clean() {
    let dir = TempDir::new().unwrap();
    sparc(&dir)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config is valid"));
}

#[test]
fn config_validate_fails_on_errors() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("sparc.yaml"),
        "providers:\n  retry:\n    max_attempts: 0\n",
    )
    .unwrap();
    sparc(&dir)
        .args(["config", "validate"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("max_attempts must be at least 1"));
}

#[test]
fn invalid_config_file_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("sparc.yaml"), "server: [not, a, map]\n").unwrap();
    sparc(&dir)
        .arg("providers")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load config"));
}
