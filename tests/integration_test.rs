use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const PRIVACY_NOTICE: &str = "This agreement governs personal data. The data controller \
    obtains consent before any data processor handles personal data.";

const HIGH_RISK_CONTRACT: &str = "The supplier accepts unlimited liability and a personal \
    guarantee. Liquidated damages apply. Automatic renewal each year. A non-compete binds \
    both parties.";

/// Runs inside an empty temp dir so no stray clausewise.toml is picked up.
fn clausewise(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("clausewise");
    cmd.current_dir(dir.path()).env_remove("CLAUSEWISE_LOG");
    cmd
}

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();
    clausewise(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("clausewise"));
}

#[test]
fn test_help() {
    let temp = TempDir::new().unwrap();
    clausewise(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("contract text"));
}

#[test]
fn test_analyze_stdin_terminal() {
    let temp = TempDir::new().unwrap();
    clausewise(&temp)
        .args(["analyze", "-", "--no-color"])
        .write_stdin(PRIVACY_NOTICE)
        .assert()
        .success()
        .stdout(predicate::str::contains("CLAUSEWISE DOCUMENT REVIEW"))
        .stdout(predicate::str::contains("GDPR"))
        .stdout(predicate::str::contains("VERDICT: LOW risk"));
}

#[test]
fn test_analyze_file_json() {
    let temp = TempDir::new().unwrap();
    let doc = temp.path().join("notice.txt");
    fs::write(&doc, PRIVACY_NOTICE).unwrap();

    let output = clausewise(&temp)
        .args(["analyze", doc.to_str().unwrap(), "--format", "json", "-r", "GDPR"])
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let regulations = report["compliance"]["regulations"].as_object().unwrap();
    assert_eq!(regulations.len(), 1);
    assert_eq!(
        report["compliance"]["regulations"]["GDPR"]["found_requirements"],
        serde_json::json!(["personal data", "consent", "data processor", "data controller"])
    );
    assert_eq!(report["risk"]["risk_level"], "LOW");
    assert!(report.get("extracted_clauses").is_none());
}

#[test]
fn test_analyze_high_risk_exits_nonzero() {
    let temp = TempDir::new().unwrap();
    clausewise(&temp)
        .args(["analyze", "--format", "json"])
        .write_stdin(HIGH_RISK_CONTRACT)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"HIGH\""));
}

#[test]
fn test_fail_below_from_config() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("clausewise.toml"),
        "[analysis]\nregulations = [\"SOX\"]\nfail_below = 50.0\n",
    )
    .unwrap();

    clausewise(&temp)
        .args(["analyze", "--format", "json"])
        .write_stdin(PRIVACY_NOTICE)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"SOX\""));
}

#[test]
fn test_profile_switches_format() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("review.toml");
    fs::write(&config, "[profiles.ci.output]\nformat = \"markdown\"\n").unwrap();

    clausewise(&temp)
        .args([
            "analyze",
            "--config",
            config.to_str().unwrap(),
            "--profile",
            "ci",
        ])
        .write_stdin(PRIVACY_NOTICE)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Clausewise Document Review"));
}

#[test]
fn test_analyze_with_clause_extraction_and_question() {
    let temp = TempDir::new().unwrap();
    clausewise(&temp)
        .args([
            "analyze",
            "--format",
            "json",
            "--clause",
            "termination",
            "--question",
            "Can we exit early?",
        ])
        .write_stdin("Either party may terminate with notice. Fees are due monthly.")
        .assert()
        .success()
        .stdout(predicate::str::contains("Either party may terminate with notice"))
        .stdout(predicate::str::contains("Can we exit early?"));
}

#[test]
fn test_rejects_non_utf8_input() {
    let temp = TempDir::new().unwrap();
    let doc = temp.path().join("binary.txt");
    fs::write(&doc, [0xff, 0xfe, b'a']).unwrap();

    clausewise(&temp)
        .args(["analyze", doc.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("UTF-8"));
}

#[test]
fn test_missing_file_fails() {
    let temp = TempDir::new().unwrap();
    clausewise(&temp)
        .args(["analyze", "does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_invalid_config_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("clausewise.toml"),
        "[[catalog.clauses]]\nclause_type = \"broken\"\npatterns = [\"(unclosed\"]\n",
    )
    .unwrap();

    clausewise(&temp)
        .args(["analyze"])
        .write_stdin(PRIVACY_NOTICE)
        .assert()
        .failure()
        .stderr(predicate::str::contains("broken"));
}

#[test]
fn test_extract_command() {
    let temp = TempDir::new().unwrap();
    clausewise(&temp)
        .args([
            "extract",
            "--clause",
            "payment",
            "--clause",
            "unknown_type",
            "--format",
            "json",
        ])
        .write_stdin("Invoices are issued monthly. The term ends in May.")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invoices are issued monthly"))
        .stdout(predicate::str::contains("\"unknown_type\""));
}

#[test]
fn test_extract_defaults_clause_types() {
    let temp = TempDir::new().unwrap();
    let output = clausewise(&temp)
        .args(["extract", "--format", "json"])
        .write_stdin("Either party may terminate. Invoices are due monthly.")
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let extracted: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let names: Vec<&String> = extracted.as_object().unwrap().keys().collect();
    assert_eq!(
        names,
        vec!["confidentiality", "liability", "payment", "termination"]
    );
    assert_eq!(extracted["termination"]["count"], 1);
    assert_eq!(extracted["liability"]["found"], false);
}

#[test]
fn test_request_roundtrip() {
    let temp = TempDir::new().unwrap();
    let request = serde_json::json!({
        "text": PRIVACY_NOTICE,
        "regulations": ["GDPR", "NOT_A_REGULATION"],
        "clause_types": ["confidentiality"]
    });

    let output = clausewise(&temp)
        .arg("request")
        .write_stdin(request.to_string())
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let regulations = report["compliance"]["regulations"].as_object().unwrap();
    assert_eq!(regulations.len(), 1);
    assert!(report["extracted_clauses"]["confidentiality"].is_object());
}

#[test]
fn test_request_without_text_fails() {
    let temp = TempDir::new().unwrap();
    clausewise(&temp)
        .arg("request")
        .write_stdin(r#"{"regulations": ["GDPR"]}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("request has no text"));
}

#[test]
fn test_request_with_numeric_text_is_invalid_input() {
    let temp = TempDir::new().unwrap();
    clausewise(&temp)
        .arg("request")
        .write_stdin(r#"{"text": 42}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn test_request_with_empty_regulation_list() {
    let temp = TempDir::new().unwrap();
    let request = serde_json::json!({ "text": PRIVACY_NOTICE, "regulations": [] });

    let output = clausewise(&temp)
        .arg("request")
        .write_stdin(request.to_string())
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(report["compliance"]["regulations"]
        .as_object()
        .unwrap()
        .is_empty());
    assert_eq!(report["compliance"]["overall_score"], 0.0);
}

#[test]
fn test_rules_lists_catalog() {
    let temp = TempDir::new().unwrap();
    clausewise(&temp)
        .args(["rules", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("HIPAA"))
        .stdout(predicate::str::contains("force_majeure"))
        .stdout(predicate::str::contains("high_risk"));
}

#[test]
fn test_rules_respects_disable() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("clausewise.toml"),
        "[catalog]\ndisable = [\"SOX\"]\n",
    )
    .unwrap();

    let output = clausewise(&temp)
        .args(["rules", "--format", "json"])
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let catalog: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let names: Vec<&str> = catalog["regulations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["GDPR", "CCPA", "HIPAA"]);
}

#[test]
fn test_init_writes_preset_once() {
    let temp = TempDir::new().unwrap();
    clausewise(&temp)
        .args(["init", "--preset", "healthcare"])
        .assert()
        .success()
        .stdout(predicate::str::contains("'healthcare' preset"));

    let written = fs::read_to_string(temp.path().join("clausewise.toml")).unwrap();
    assert!(written.contains("HIPAA"));

    clausewise(&temp)
        .args(["init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    clausewise(&temp)
        .args(["init", "--preset", "privacy", "--force"])
        .assert()
        .success();
}

#[test]
fn test_init_rejects_unknown_preset() {
    let temp = TempDir::new().unwrap();
    clausewise(&temp)
        .args(["init", "--preset", "paranoid"])
        .assert()
        .failure();
}

#[test]
fn test_completions() {
    let temp = TempDir::new().unwrap();
    clausewise(&temp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("clausewise"));
}
