//! End-to-end tests of the bushou binary
//!
//! Every run uses a small dictionary that replaces the built-in tables, so
//! the expected counts can be worked out by hand from `道可道非常道`.

use std::path::Path;
use std::process::{Command, Output};

const DICTIONARY: &str = r#"
replace_builtin = true

[characters]
"道" = ["辶"]
"可" = ["口", "丁"]
"非" = ["非"]
"常" = ["巾", "尚"]

[[categories]]
name = "motion"
radicals = ["辶"]

[[categories]]
name = "boundary"
radicals = ["口"]

[[categories]]
name = "cloth"
radicals = ["巾"]
"#;

fn bushou_bin() -> &'static str {
    env!("CARGO_BIN_EXE_bushou")
}

/// Temp dir holding `text.csv` and `radicals.toml`
fn setup_project() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("text.csv"),
        "chapter,char_1,pron_1,char_2,pron_2,char_3,pron_3\n\
         1,道,dao4,可,ke3,道,dao4\n\
         1,非,fei1,常,chang2,道,dao4\n",
    )
    .unwrap();
    std::fs::write(dir.path().join("radicals.toml"), DICTIONARY).unwrap();
    dir
}

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(bushou_bin())
        .args(args)
        .current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join("xdg"))
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run bushou")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn json(output: &Output) -> serde_json::Value {
    assert!(output.status.success(), "stderr: {}", stderr(output));
    serde_json::from_str(&stdout(output)).expect("Invalid JSON")
}

#[test]
fn test_version() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), &["version"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_analyze_json_report() {
    let dir = setup_project();
    let output = run(
        dir.path(),
        &[
            "analyze",
            "text.csv",
            "--dictionary",
            "radicals.toml",
            "--window",
            "1",
            "--min-observed",
            "1",
            "--format",
            "json",
        ],
    );
    let report = json(&output);
    assert_eq!(report["window_size"], 1);
    assert_eq!(report["corpus"]["characters"], 6);
    assert_eq!(report["corpus"]["radical_occurrences"], 8);
    assert_eq!(report["total_pairs"], 9);

    let top = report["top_pairs"].as_array().unwrap();
    assert_eq!(top[0]["count"], 2);
    assert_eq!(top[0]["radical1"], "丁");
    assert_eq!(top[0]["radical2"], "辶");
}

#[test]
fn test_analyze_text_report() {
    let dir = setup_project();
    let output = run(
        dir.path(),
        &["analyze", "text.csv", "--dictionary", "radicals.toml", "-w", "1"],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("辶"));
    assert!(text.contains("口"));
}

#[test]
fn test_analyze_writes_output_and_exports() {
    let dir = setup_project();
    let output = run(
        dir.path(),
        &[
            "analyze",
            "text.csv",
            "--dictionary",
            "radicals.toml",
            "--format",
            "md",
            "-o",
            "report.md",
            "--export-dir",
            "out",
        ],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).is_empty());

    let markdown = std::fs::read_to_string(dir.path().join("report.md")).unwrap();
    assert!(markdown.starts_with('#'));

    for name in [
        "cooccurrence_matrix.csv",
        "cooccurrence_matrix_normalized.csv",
        "top_pairs.csv",
        "significance.csv",
        "avoidance_pairs.csv",
        "category_matrix.csv",
        "clustering_linkage.csv",
        "radical_frequencies.csv",
    ] {
        assert!(dir.path().join("out").join(name).is_file(), "missing {name}");
    }

    assert!(dir.path().join("out/report.md").is_file());

    let raw = std::fs::read_to_string(dir.path().join("out/cooccurrence_matrix.csv")).unwrap();
    assert_eq!(raw.lines().count(), 7);
}

#[test]
fn test_missing_corpus_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), &["analyze", "nope.csv"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Failed to load corpus"));
}

#[test]
fn test_missing_dictionary_fails() {
    let dir = setup_project();
    let output = run(
        dir.path(),
        &["pairs", "text.csv", "--dictionary", "missing.toml"],
    );
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Failed to load dictionary"));
}

#[test]
fn test_neighbors_json() {
    let dir = setup_project();
    let output = run(
        dir.path(),
        &[
            "neighbors",
            "text.csv",
            "辶",
            "--dictionary",
            "radicals.toml",
            "-w",
            "1",
            "--json",
        ],
    );
    let rows = json(&output);
    let rows = rows.as_array().unwrap();
    let radicals: Vec<&str> = rows.iter().map(|r| r["radical"].as_str().unwrap()).collect();
    assert_eq!(radicals, ["丁", "口", "尚", "巾", "非"]);
    assert_eq!(rows[0]["count"], 2);
    assert_eq!(rows[1]["category"], "boundary");
}

#[test]
fn test_pairs_json() {
    let dir = setup_project();
    let output = run(
        dir.path(),
        &[
            "pairs",
            "text.csv",
            "--dictionary",
            "radicals.toml",
            "-w",
            "1",
            "--top",
            "2",
            "--json",
        ],
    );
    let pairs = json(&output);
    let pairs = pairs.as_array().unwrap();
    assert_eq!(pairs.len(), 2);
    assert!(pairs.iter().all(|p| p["count"] == 2));
}

#[test]
fn test_character_profile() {
    let dir = setup_project();
    let output = run(
        dir.path(),
        &[
            "character",
            "text.csv",
            "可",
            "--dictionary",
            "radicals.toml",
            "-w",
            "1",
            "--json",
        ],
    );
    let profile = json(&output);
    assert_eq!(profile["frequency"], 1);
    assert_eq!(profile["top_radicals"][0][0], "辶");
    assert_eq!(profile["top_radicals"][0][1], 2);

    let missing = run(
        dir.path(),
        &["character", "text.csv", "水", "--dictionary", "radicals.toml"],
    );
    assert!(!missing.status.success());
    assert!(stderr(&missing).contains("not found"));
}

#[test]
fn test_sequence() {
    let dir = setup_project();
    let output = run(
        dir.path(),
        &[
            "sequence",
            "text.csv",
            "motion",
            "boundary",
            "--dictionary",
            "radicals.toml",
            "-w",
            "1",
            "--json",
        ],
    );
    let matches = json(&output);
    let matches = matches.as_array().unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["characters"], serde_json::json!(["道", "可"]));

    let unknown = run(
        dir.path(),
        &["sequence", "text.csv", "weather", "--dictionary", "radicals.toml"],
    );
    assert!(!unknown.status.success());
    assert!(stderr(&unknown).contains("Unknown category"));
}

#[test]
fn test_categories_writes_csv() {
    let dir = setup_project();
    let output = run(
        dir.path(),
        &[
            "categories",
            "text.csv",
            "--dictionary",
            "radicals.toml",
            "-o",
            "cats.csv",
        ],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let csv = std::fs::read_to_string(dir.path().join("cats.csv")).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("radical,current_category,proposed_category,frequency,example_characters")
    );
    assert_eq!(lines.next(), Some("辶,motion,motion,3,道"));
}

#[test]
fn test_cluster_writes_linkage() {
    let dir = setup_project();
    let output = run(
        dir.path(),
        &[
            "cluster",
            "text.csv",
            "--dictionary",
            "radicals.toml",
            "-o",
            "linkage.csv",
        ],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let csv = std::fs::read_to_string(dir.path().join("linkage.csv")).unwrap();
    // Six radicals merge in five steps
    assert_eq!(csv.lines().count(), 6);
}

#[test]
fn test_dictionary_stats() {
    let dir = setup_project();
    let output = run(
        dir.path(),
        &["dictionary", "--dictionary", "radicals.toml", "--json"],
    );
    let stats = json(&output);
    assert_eq!(stats["total_characters"], 4);
    assert_eq!(stats["total_unique_radicals"], 6);
}

#[test]
fn test_init_then_config_is_used() {
    let dir = setup_project();
    let output = run(dir.path(), &["init"]);
    assert!(output.status.success());
    assert!(dir.path().join("bushou.toml").is_file());

    std::fs::write(
        dir.path().join("bushou.toml"),
        "[analysis]\nwindow_size = 1\nmin_observed = 1\ndictionary = \"radicals.toml\"\n\n\
         [output]\nformat = \"json\"\n",
    )
    .unwrap();

    let report = json(&run(dir.path(), &["analyze", "text.csv"]));
    assert_eq!(report["window_size"], 1);
    assert_eq!(report["total_pairs"], 9);

    // Flags still win over the config
    let report = json(&run(dir.path(), &["analyze", "text.csv", "--window", "2"]));
    assert_eq!(report["window_size"], 2);
}

#[test]
fn test_explicit_config_flag() {
    let dir = setup_project();
    std::fs::create_dir(dir.path().join("conf")).unwrap();
    std::fs::write(
        dir.path().join("conf/settings.toml"),
        "[analysis]\nwindow_size = 1\ndictionary = \"../radicals.toml\"\n\n\
         [output]\nformat = \"json\"\n",
    )
    .unwrap();

    let report = json(&run(
        dir.path(),
        &["analyze", "text.csv", "--config", "conf/settings.toml"],
    ));
    assert_eq!(report["window_size"], 1);
    assert_eq!(report["corpus"]["unique_radicals"], 6);

    let missing = run(dir.path(), &["analyze", "text.csv", "--config", "absent.toml"]);
    assert!(!missing.status.success());
}
