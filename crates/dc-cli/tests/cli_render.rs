use std::path::PathBuf;
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

fn bin_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_distcalc"))
}

fn tmp_path(name: &str) -> PathBuf {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
    let mut p = std::env::temp_dir();
    p.push(format!("distcalc_cli_render_{}_{}_{}", std::process::id(), nanos, name));
    p
}

fn run(args: &[&str]) -> Output {
    Command::new(bin_path())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to run {:?} {:?}: {}", bin_path(), args, e))
}

#[test]
fn render_saved_json_to_svg() {
    let out = run(&["--no-save", "binomial", "--trials", "8", "--p", "0.3", "--x", "2", "--json"]);
    assert!(out.status.success(), "stderr={}", String::from_utf8_lossy(&out.stderr));

    let input = tmp_path("result.json");
    let output = tmp_path("plot.svg");
    std::fs::write(&input, &out.stdout).unwrap();

    let out = run(&[
        "--theme",
        "print",
        "render",
        "--input",
        input.to_string_lossy().as_ref(),
        "--output",
        output.to_string_lossy().as_ref(),
    ]);
    assert!(
        out.status.success(),
        "render should succeed, stderr={}",
        String::from_utf8_lossy(&out.stderr)
    );
    let svg = std::fs::read_to_string(&output).unwrap();
    assert!(svg.contains("P(X = 2)"));

    let _ = std::fs::remove_file(&input);
    let _ = std::fs::remove_file(&output);
}

#[test]
fn render_rejects_bad_json() {
    let input = tmp_path("bad.json");
    std::fs::write(&input, "{}").unwrap();
    let out = run(&[
        "--no-save",
        "render",
        "--input",
        input.to_string_lossy().as_ref(),
        "--output",
        "x.svg",
    ]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).starts_with("Error: "));
    let _ = std::fs::remove_file(&input);
}

#[test]
fn config_reflects_theme_and_yaml() {
    let yaml = tmp_path("theme.yaml");
    std::fs::write(&yaml, "output:\n  dpi: 200\n").unwrap();
    let out = run(&["--theme", "minimal", "--config", yaml.to_string_lossy().as_ref(), "config"]);
    assert!(out.status.success(), "stderr={}", String::from_utf8_lossy(&out.stderr));
    let v: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("stdout should be valid JSON");
    assert_eq!(v.get("theme").and_then(|x| x.as_str()), Some("minimal"));
    assert_eq!(v.pointer("/output/dpi").and_then(|x| x.as_f64()), Some(200.0));

    let out = run(&["--theme", "neon", "config"]);
    assert!(!out.status.success());
    let _ = std::fs::remove_file(&yaml);
}

#[test]
fn version_prints_crate_version() {
    let out = run(&["version"]);
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout).trim(),
        format!("distcalc {}", env!("CARGO_PKG_VERSION"))
    );
}
