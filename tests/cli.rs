use std::{path::PathBuf, process::Command};

fn root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn tiny_uf() -> String {
    root().join("fixtures/uf/tinyUF.txt").display().to_string()
}

fn alg(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_alg"))
        .args(args)
        .current_dir(root())
        .env("ALG_LOG", "warn")
        .env_remove("ALG_ALGORITHM")
        .output()
        .expect("run alg")
}

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

#[test]
fn components_prints_one_group_per_line() {
    for algorithm in ["quick-find", "quick-union", "weighted"] {
        let out = alg(&["uf", "components", "-a", algorithm, &tiny_uf()]);
        assert!(out.status.success(), "{algorithm}: {:?}", out);
        assert_eq!(stdout(&out), "0 1 2 5 6 7\n3 4 8 9");
    }
}

#[test]
fn connected_prints_a_bool() {
    let out = alg(&["uf", "connected", &tiny_uf(), "4", "9"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "true");

    let out = alg(&["uf", "connected", &tiny_uf(), "4", "5"]);
    assert_eq!(stdout(&out), "false");
}

#[test]
fn run_prints_connections_then_count() {
    let out = alg(&["uf", "run", &tiny_uf()]);
    assert!(out.status.success());
    let printed = stdout(&out);
    assert!(printed.starts_with("4 3\n3 8\n"));
    assert!(printed.ends_with("2 components"));
}

#[test]
fn info_prints_cost_tables() {
    let out = alg(&["uf", "info", "quick-find"]);
    assert!(out.status.success());
    let printed = stdout(&out);
    assert!(printed.starts_with("quick-find"));
    assert!(printed.contains("O(N^2)"));
    assert!(!printed.contains("weighted"));

    let out = alg(&["uf", "info"]);
    let printed = stdout(&out);
    assert!(printed.contains("quick-union") && printed.contains("O(lg N)"));
}

#[test]
fn out_of_range_site_exits_non_zero() {
    let out = alg(&["uf", "connected", &tiny_uf(), "0", "10"]);
    assert!(!out.status.success());
    assert!(stdout(&out).is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("index 10 is out of bounds."), "{stderr}");
}

#[test]
fn oversized_dataset_exits_non_zero() {
    let path = std::env::temp_dir().join(format!("alg-cli-{}.txt", uuid::Uuid::new_v4()));
    std::fs::write(&path, format!("{}\n", usize::MAX)).expect("write dataset");

    let out = alg(&["uf", "run", &path.display().to_string()]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("cannot allocate"), "{stderr}");

    let _ = std::fs::remove_file(path);
}

#[test]
fn missing_file_exits_non_zero() {
    let out = alg(&["uf", "run", "fixtures/uf/does-not-exist.txt"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Could not read dataset"));
}
