#![allow(deprecated)] // cargo_bin is deprecated but still supported by assert_cmd
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

const SECRET: &str = "cli-test-secret";

fn honeytrap() -> Command {
    let mut cmd = Command::cargo_bin("honeytrap").unwrap();
    for var in [
        "HONEYTRAP_CONFIG",
        "HONEYTRAP_SECRET",
        "HONEYTRAP_TIMEOUT_SECS",
        "HONEYTRAP_DECOY_COUNT",
        "HONEYTRAP_HASH_SCHEME",
        "HONEYTRAP_STYLE_POLICY",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

fn arm_json(decoys: u8) -> Value {
    let output = honeytrap()
        .env("HONEYTRAP_SECRET", SECRET)
        .env("HONEYTRAP_DECOY_COUNT", decoys.to_string())
        .args(["arm", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success(), "arm should succeed");
    serde_json::from_slice(&output.stdout).expect("arm --format json must print JSON")
}

/// Urlencoded body echoing every entry, optionally overriding one field.
fn body_from(trap: &Value, override_field: Option<(&str, &str)>) -> String {
    let mut parts = vec!["email=ann%40example.com".to_string()];
    for entry in trap["entries"].as_array().unwrap() {
        let name = entry["name"].as_str().unwrap();
        let mut value = entry["data"].as_str().unwrap_or("").to_string();
        if let Some((target, forced)) = override_field {
            if target == name {
                value = forced.to_string();
            }
        }
        parts.push(format!("{name}={value}"));
    }
    parts.join("&")
}

#[test]
fn arm_json_has_decoys_and_one_control() {
    let trap = arm_json(3);
    assert_eq!(trap["decoy_count"], 3);
    assert_eq!(trap["timeout_secs"], 300);

    let entries = trap["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 4);
    let controls: Vec<_> = entries
        .iter()
        .filter(|e| e["name"].as_str().unwrap().starts_with("hp_check_"))
        .collect();
    assert_eq!(controls.len(), 1);
    assert_eq!(controls[0]["data"].as_str().unwrap().len(), 64);
    for decoy in entries.iter().filter(|e| e.get("data").is_none()) {
        assert!(decoy["name"].as_str().unwrap().starts_with("hp_"));
    }
}

#[test]
fn arm_html_renders_inputs() {
    honeytrap()
        .env("HONEYTRAP_SECRET", SECRET)
        .env("HONEYTRAP_DECOY_COUNT", "2")
        .arg("arm")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"<input id=""#).count(3))
        .stdout(predicate::str::contains(r#"name="hp_check_"#));
}

#[test]
fn missing_secret_is_config_error() {
    honeytrap()
        .arg("arm")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no honeypot secret configured"));
}

#[test]
fn invalid_env_is_config_error() {
    honeytrap()
        .env("HONEYTRAP_SECRET", SECRET)
        .env("HONEYTRAP_TIMEOUT_SECS", "later")
        .arg("arm")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("HONEYTRAP_TIMEOUT_SECS"));
}

#[test]
fn echoed_trap_verifies_as_human() {
    let trap = arm_json(2);
    honeytrap()
        .env("HONEYTRAP_SECRET", SECRET)
        .arg("verify")
        .write_stdin(body_from(&trap, None))
        .assert()
        .code(0)
        .stdout(predicate::str::diff("human\n"));
}

#[test]
fn filled_decoy_is_rejected() {
    let trap = arm_json(2);
    let decoy = trap["entries"][0]["name"].as_str().unwrap().to_string();
    honeytrap()
        .env("HONEYTRAP_SECRET", SECRET)
        .arg("verify")
        .write_stdin(body_from(&trap, Some((&decoy, "bot"))))
        .assert()
        .code(3)
        .stdout(predicate::str::diff("rejected\n"));
}

#[test]
fn wrong_secret_is_rejected() {
    let trap = arm_json(1);
    honeytrap()
        .env("HONEYTRAP_SECRET", "another-secret")
        .arg("verify")
        .write_stdin(body_from(&trap, None))
        .assert()
        .code(3);
}

#[test]
fn empty_submission_is_rejected() {
    honeytrap()
        .env("HONEYTRAP_SECRET", SECRET)
        .arg("verify")
        .write_stdin("")
        .assert()
        .code(3);
}

#[test]
fn verify_json_file() {
    let trap = arm_json(2);
    let mut form = serde_json::Map::new();
    form.insert("email".into(), Value::String("ann@example.com".into()));
    for entry in trap["entries"].as_array().unwrap() {
        form.insert(
            entry["name"].as_str().unwrap().to_string(),
            Value::String(entry["data"].as_str().unwrap_or("").to_string()),
        );
    }

    let dir = tempdir().unwrap();
    let path = dir.path().join("submission.json");
    fs::write(&path, serde_json::to_string(&form).unwrap()).unwrap();

    honeytrap()
        .env("HONEYTRAP_SECRET", SECRET)
        .args(["verify", "--json", "--input"])
        .arg(&path)
        .assert()
        .code(0);
}

#[test]
fn verify_json_rejects_non_string_values() {
    honeytrap()
        .env("HONEYTRAP_SECRET", SECRET)
        .args(["verify", "--json"])
        .write_stdin(r#"{"hp_check_1": 5}"#)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("JSON object of strings"));
}

#[test]
fn digest_matches_known_vector() {
    honeytrap()
        .env("HONEYTRAP_SECRET", "private")
        .args(["digest", "--epoch", "12345", "first", "second", "3third"])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "2e0ecd36fe260c06cf50fecac17ea0242a0046bcb697dadaa2cb5c3abb7c32df\n",
        ));
}

#[test]
fn config_file_supplies_secret_and_env_overrides_it() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("honeytrap.yaml");
    fs::write(&path, "secret: abc\ntimeout_secs: 20\n").unwrap();

    honeytrap()
        .arg("--config")
        .arg(&path)
        .args(["digest", "--epoch", "123"])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "dd130a849d7b29e5541b05d2f7f86a4acd4f1ec598c1c9438783f56bc4f0ff80\n",
        ));

    honeytrap()
        .env("HONEYTRAP_SECRET", "private")
        .arg("--config")
        .arg(&path)
        .args(["digest", "--epoch", "12345", "first", "second", "3third"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2e0ecd36fe260c06"));
}

#[test]
fn missing_config_file_is_config_error() {
    let dir = tempdir().unwrap();
    honeytrap()
        .env("HONEYTRAP_SECRET", SECRET)
        .arg("--config")
        .arg(dir.path().join("absent.yaml"))
        .arg("arm")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to load config"));
}
