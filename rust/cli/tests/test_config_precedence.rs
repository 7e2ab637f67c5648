use maskcard_cli::run;
use serde_json::Value;
use serial_test::serial;
use std::io::Write;

fn clear_env() {
    unsafe {
        std::env::remove_var("MASKCARD_CONFIG");
        std::env::remove_var("MASKCARD_SEED");
        std::env::remove_var("MASKCARD_POLICY");
    }
}

fn cfg_json() -> (i32, Value, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(["maskcard", "cfg"], &mut out, &mut err);
    let json = serde_json::from_slice(&out).unwrap_or(Value::Null);
    (code, json, String::from_utf8_lossy(&err).into_owned())
}

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    f
}

#[test]
#[serial]
fn cfg_shows_defaults() {
    clear_env();
    let (code, json, _) = cfg_json();
    assert_eq!(code, 0);
    assert_eq!(json["initial_chips"]["value"].as_i64(), Some(20));
    assert_eq!(json["initial_chips"]["source"].as_str(), Some("default"));
    assert_eq!(json["forced_bet"]["value"].as_i64(), Some(1));
    assert_eq!(json["include_jokers"]["value"].as_bool(), Some(true));
    assert_eq!(json["think_time"]["value"]["min_ms"].as_u64(), Some(300));
    assert!(json["seed"]["value"].is_null());
    assert_eq!(json["policy"]["value"].as_str(), Some("weighted"));
}

#[test]
#[serial]
fn env_overrides_file() {
    clear_env();
    let file = write_config(
        "initial_chips = 50\nseed = 11\npolicy = \"passive\"\n\n[think_time]\nmin_ms = 0\nmax_ms = 10\n",
    );
    unsafe {
        std::env::set_var("MASKCARD_CONFIG", file.path());
        std::env::set_var("MASKCARD_SEED", "12");
    }
    let (code, json, stderr) = cfg_json();
    clear_env();

    assert_eq!(code, 0, "stderr={}", stderr);
    assert_eq!(json["initial_chips"]["value"].as_i64(), Some(50));
    assert_eq!(json["initial_chips"]["source"].as_str(), Some("file"));
    assert_eq!(json["think_time"]["value"]["max_ms"].as_u64(), Some(10));
    assert_eq!(json["think_time"]["source"].as_str(), Some("file"));
    assert_eq!(json["policy"]["source"].as_str(), Some("file"));
    assert_eq!(json["seed"]["value"].as_u64(), Some(12));
    assert_eq!(json["seed"]["source"].as_str(), Some("env"));
    assert_eq!(json["forced_bet"]["source"].as_str(), Some("default"));
}

#[test]
#[serial]
fn flags_override_env() {
    clear_env();
    unsafe {
        std::env::set_var("MASKCARD_SEED", "12");
        std::env::set_var("MASKCARD_POLICY", "weighted");
    }
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(
        ["maskcard", "sim", "--rounds", "1", "--seed", "5", "--policy", "passive"],
        &mut out,
        &mut err,
    );
    clear_env();

    assert_eq!(code, 0);
    let stdout = String::from_utf8_lossy(&out);
    assert!(stdout.contains("seed=5 policy=PassivePolicy"));
}

#[test]
#[serial]
fn invalid_values_are_rejected() {
    clear_env();
    let file = write_config("forced_bet = 0\n");
    unsafe {
        std::env::set_var("MASKCARD_CONFIG", file.path());
    }
    let (code, _, stderr) = cfg_json();
    clear_env();
    assert_eq!(code, 2);
    assert!(stderr.contains("Configuration error"));
    assert!(stderr.contains("forced_bet"));

    unsafe {
        std::env::set_var("MASKCARD_SEED", "not-a-number");
    }
    let (code, _, stderr) = cfg_json();
    clear_env();
    assert_eq!(code, 2);
    assert!(stderr.contains("Invalid seed"));
}

#[test]
#[serial]
fn unknown_file_keys_are_rejected() {
    clear_env();
    let file = write_config("blinds = 3\n");
    unsafe {
        std::env::set_var("MASKCARD_CONFIG", file.path());
    }
    let (code, _, stderr) = cfg_json();
    clear_env();
    assert_eq!(code, 2);
    assert!(stderr.contains("cannot parse config file"));
}
