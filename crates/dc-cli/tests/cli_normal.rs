use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

fn bin_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_distcalc"))
}

fn tmp_path(name: &str) -> PathBuf {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
    let mut p = std::env::temp_dir();
    p.push(format!("distcalc_cli_normal_{}_{}_{}", std::process::id(), nanos, name));
    p
}

fn run(args: &[&str]) -> Output {
    Command::new(bin_path())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to run {:?} {:?}: {}", bin_path(), args, e))
}

fn saved_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

fn is_stamped(name: &str, family: &str, ext: &str) -> bool {
    let Some(rest) = name.strip_prefix(&format!("{family}_")) else { return false };
    let Some(stamp) = rest.strip_suffix(&format!(".{ext}")) else { return false };
    let bytes = stamp.as_bytes();
    bytes.len() == 15
        && bytes[8] == b'_'
        && bytes.iter().enumerate().all(|(i, b)| i == 8 || b.is_ascii_digit())
}

#[test]
fn normal_standard_interval_saves_svg() {
    let dir = tmp_path("svg");
    let out = run(&[
        "--output-dir",
        dir.to_string_lossy().as_ref(),
        "--format",
        "svg",
        "normal",
        "--mean",
        "0",
        "--stddev",
        "1",
        "--lower",
        "-1.96",
        "--upper",
        "1.96",
    ]);
    assert!(
        out.status.success(),
        "normal should succeed, stderr={}",
        String::from_utf8_lossy(&out.stderr)
    );

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("P(-1.96 \u{2264} X \u{2264} 1.96) = 0.9500"), "stdout={stdout}");
    assert!(stdout.contains("Image saved to: "), "stdout={stdout}");

    let files = saved_files(&dir);
    assert_eq!(files.len(), 1, "files={files:?}");
    assert!(is_stamped(&files[0], "normal", "svg"), "files={files:?}");

    let svg = std::fs::read_to_string(dir.join(&files[0])).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("0.9500"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn normal_json_contract() {
    let out = run(&[
        "--no-save",
        "normal",
        "--mean",
        "0",
        "--stddev",
        "1",
        "--lower",
        "-1",
        "--upper",
        "1",
        "--points",
        "51",
        "--json",
    ]);
    assert!(
        out.status.success(),
        "normal --json should succeed, stderr={}",
        String::from_utf8_lossy(&out.stderr)
    );

    let v: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("stdout should be valid JSON");
    assert_eq!(v.get("family").and_then(|x| x.as_str()), Some("normal"));
    let p = v.get("probability").and_then(|x| x.as_f64()).unwrap();
    assert!((p - 0.6827).abs() < 1e-4, "p={p}");
    let series = v.get("series").and_then(|x| x.as_array()).unwrap();
    let highlight = v.get("highlight_series").and_then(|x| x.as_array()).unwrap();
    assert_eq!(series.len(), 51);
    assert_eq!(highlight.len(), 51);
    assert_eq!(series[0].get("x").and_then(|x| x.as_f64()), Some(-4.0));
    assert_eq!(series[50].get("x").and_then(|x| x.as_f64()), Some(4.0));
}

#[test]
fn normal_rejects_zero_stddev() {
    let dir = tmp_path("reject");
    let out = run(&[
        "--output-dir",
        dir.to_string_lossy().as_ref(),
        "normal",
        "--mean",
        "0",
        "--stddev",
        "0",
        "--lower",
        "-1",
        "--upper",
        "1",
    ]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Input error: standard deviation"), "stderr={stderr}");
    assert!(out.stdout.is_empty());
    assert!(saved_files(&dir).is_empty());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn normal_rejects_inverted_bounds_and_text() {
    let out = run(&[
        "--no-save", "normal", "--mean", "0", "--stddev", "1", "--lower", "10", "--upper", "5",
    ]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Input error: lower bound"));

    let out = run(&[
        "--no-save", "normal", "--mean", "abc", "--stddev", "1", "--lower", "0", "--upper", "1",
    ]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Input error: mean is not a number"));
}

#[test]
fn normal_rejects_inputs_that_overflow() {
    for (args, needle) in [
        (["--stddev", "1e-320", "--lower", "-1", "--upper", "1", "--mean", "0"], "too small"),
        (["--stddev", "1", "--lower", "-1e308", "--upper", "1e308", "--mean", "0"], "too wide"),
        (["--stddev", "1e308", "--lower", "0", "--upper", "1", "--mean", "1e308"], "overflows"),
    ] {
        let mut full = vec!["--no-save", "normal", "--json"];
        full.extend(args);
        let out = run(&full);
        let stderr = String::from_utf8_lossy(&out.stderr);
        assert_eq!(out.status.code(), Some(2), "args={args:?} stderr={stderr}");
        assert!(stderr.contains("Input error: ") && stderr.contains(needle), "stderr={stderr}");
        assert!(out.stdout.is_empty());
    }
}

#[test]
fn normal_caps_grid_points() {
    let out = run(&[
        "--no-save", "normal", "--mean", "0", "--stddev", "1", "--lower", "0", "--upper", "1",
        "--points", "100000000",
    ]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Input error: number of grid points"));
}

#[cfg(feature = "png")]
#[test]
fn normal_default_format_is_png() {
    let dir = tmp_path("png");
    let out = run(&[
        "--output-dir",
        dir.to_string_lossy().as_ref(),
        "normal",
        "--mean",
        "10",
        "--stddev",
        "2",
        "--lower",
        "8",
        "--upper",
        "12",
    ]);
    assert!(
        out.status.success(),
        "normal should succeed, stderr={}",
        String::from_utf8_lossy(&out.stderr)
    );
    let files = saved_files(&dir);
    assert_eq!(files.len(), 1, "files={files:?}");
    assert!(is_stamped(&files[0], "normal", "png"), "files={files:?}");
    let bytes = std::fs::read(dir.join(&files[0])).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    let _ = std::fs::remove_dir_all(&dir);
}
