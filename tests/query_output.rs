use std::fs;
use std::process::Command;

#[test]
fn test_query_stdout_stays_json_with_config_warnings() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("postal.toml");
    fs::write(&config, "[site]\nfoo = 1\n\n[build]\nbar = true\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_codigo-postal"))
        .current_dir(dir.path())
        .args(["--color", "never", "-C"])
        .arg(&config)
        .args(["query", "provinces"])
        .output()
        .unwrap();

    assert!(output.status.success());

    let provinces: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert!(provinces.contains(&"San José".to_string()));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown fields"));
    assert!(stderr.contains("site.foo"));
}

#[test]
fn test_query_to_file_leaves_stdout_empty() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("cantons.json");

    let output = Command::new(env!("CARGO_BIN_EXE_codigo-postal"))
        .current_dir(dir.path())
        .args(["--color", "never", "query", "cantons", "Limón", "--to"])
        .arg(&target)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let cantons: Vec<String> = serde_json::from_str(&fs::read_to_string(&target).unwrap()).unwrap();
    assert!(!cantons.is_empty());
}
