#![cfg(test)]
//! Pipeline tests against a fake executor.
//!
//! The scripts below stand in for ffuf: they accept the real flag contract
//! (`-u`, `-w`, `-mc`, `-s`, `-H`, `-o`, `-of`), print a progress line and
//! write a JSON report when one was requested. Everything from invocation
//! through consolidation runs for real.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use hhfuzz_common::config::Config;
use hhfuzz_common::target::TargetSpec;
use hhfuzz_core::consolidate::{self, ReportSet};
use hhfuzz_core::plan::{self, FuzzMode, ProbeInvocation};
use hhfuzz_core::probe::{self, ProbeOutcome};
use serde_json::Value;

/// A fake ffuf: picks distinct findings per mode so consolidation has
/// something real to merge. The append mode (header contains `FUZZ.`)
/// reports a redirect; both placeholder-only modes report the same
/// (status, length) pair with different hosts, exercising first-wins dedup.
const FAKE_FFUF: &str = r#"#!/bin/sh
out=""; header=""; words=""; prev=""
for arg in "$@"; do
  case "$prev" in
    -o) out="$arg" ;;
    -H) header="$arg" ;;
    -w) words="$arg" ;;
  esac
  prev="$arg"
done
echo "probing with $header"
[ -z "$out" ] && exit 0
case "$header" in
  *FUZZ.*)
    printf '%s' '{"results": [{"status": 301, "length": 42, "host": "dev.example.com"}]}' > "$out"
    ;;
  *)
    case "$words" in
      *subs*)
        printf '%s' '{"results": [{"status": 200, "length": 100, "host": "api"}]}' > "$out"
        ;;
      *)
        printf '%s' '{"results": [{"status": 200, "length": 100, "host": "admin"}]}' > "$out"
        ;;
    esac
    ;;
esac
exit 0
"#;

fn install_executor(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("fake-ffuf");
    fs::write(&path, body).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn write_wordlist(dir: &Path, name: &str, tokens: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, tokens).unwrap();
    path
}

fn run_config(dir: &Path) -> Config {
    Config {
        output: Some(dir.join("run").display().to_string()),
        cache_dir: dir.to_path_buf(),
        ..Config::default()
    }
}

#[tokio::test]
async fn probe_streams_and_captures_report() {
    let dir = tempfile::tempdir().unwrap();
    let executor = install_executor(dir.path(), FAKE_FFUF);
    let words = write_wordlist(dir.path(), "words.txt", "admin\napi\n");

    let cfg = run_config(dir.path());
    let target: TargetSpec = "example.com".parse().unwrap();
    let invocation =
        ProbeInvocation::build(&cfg, &target, &executor, FuzzMode::Static, &words);

    let outcome = probe::run(&invocation).await;
    let ProbeOutcome::Completed { report: Some(report) } = outcome else {
        panic!("expected a captured report, got {outcome:?}");
    };

    let document: Value = serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(document["results"][0]["status"], 200);
    assert_eq!(document["results"][0]["host"], "admin");
}

#[tokio::test]
async fn failing_executor_is_a_soft_failure() {
    let dir = tempfile::tempdir().unwrap();
    let executor = install_executor(dir.path(), "#!/bin/sh\necho boom >&2\nexit 1\n");
    let words = write_wordlist(dir.path(), "words.txt", "admin\n");

    let cfg = run_config(dir.path());
    let target: TargetSpec = "example.com".parse().unwrap();
    let invocation =
        ProbeInvocation::build(&cfg, &target, &executor, FuzzMode::Static, &words);

    assert_eq!(probe::run(&invocation).await, ProbeOutcome::Failed);
}

#[tokio::test]
async fn clean_exit_without_report_file_yields_none() {
    let dir = tempfile::tempdir().unwrap();
    // Exits 0 but never touches the -o path.
    let executor = install_executor(dir.path(), "#!/bin/sh\necho done\nexit 0\n");
    let words = write_wordlist(dir.path(), "words.txt", "admin\n");

    let cfg = run_config(dir.path());
    let target: TargetSpec = "example.com".parse().unwrap();
    let invocation =
        ProbeInvocation::build(&cfg, &target, &executor, FuzzMode::Static, &words);

    assert_eq!(
        probe::run(&invocation).await,
        ProbeOutcome::Completed { report: None }
    );
}

#[tokio::test]
async fn unspawnable_executor_is_a_soft_failure() {
    let dir = tempfile::tempdir().unwrap();
    // Regular file without the executable bit: spawning fails.
    let executor = dir.path().join("fake-ffuf");
    fs::write(&executor, FAKE_FFUF).unwrap();
    let words = write_wordlist(dir.path(), "words.txt", "admin\n");

    let cfg = run_config(dir.path());
    let target: TargetSpec = "example.com".parse().unwrap();
    let invocation =
        ProbeInvocation::build(&cfg, &target, &executor, FuzzMode::Static, &words);

    assert_eq!(probe::run(&invocation).await, ProbeOutcome::Failed);
}

/// Full fan-out: three modes against the fake executor, consolidated into
/// one report. The subdomain finding shares (status, length) with the
/// static one, so only the static host survives; per-mode report files are
/// removed by the tracking guard.
#[tokio::test]
async fn pipeline_runs_all_modes_and_consolidates() {
    let dir = tempfile::tempdir().unwrap();
    let executor = install_executor(dir.path(), FAKE_FFUF);
    let words = write_wordlist(dir.path(), "words.txt", "admin\napi\n");
    let subs = write_wordlist(dir.path(), "subs.txt", "dev\nstage\n");

    let cfg = run_config(dir.path());
    let target: TargetSpec = "http://example.com:8080".parse().unwrap();

    let modes = plan::plan_modes(Some(&words), Some(&subs));
    assert_eq!(
        modes.iter().map(|(mode, _)| *mode).collect::<Vec<_>>(),
        vec![FuzzMode::Static, FuzzMode::StaticAppend, FuzzMode::Subdomain]
    );

    let mut reports = ReportSet::new();
    for (mode, list) in &modes {
        let invocation = ProbeInvocation::build(&cfg, &target, &executor, *mode, list);
        match probe::run(&invocation).await {
            ProbeOutcome::Completed { report: Some(path) } => reports.track(path),
            outcome => panic!("{} mode did not complete: {outcome:?}", mode.label()),
        }
    }

    let base = cfg.output.clone().unwrap();
    let final_path = consolidate::merge_reports(reports.files(), &base).unwrap();
    let tracked: Vec<PathBuf> = reports.files().to_vec();
    drop(reports);

    for path in tracked {
        assert!(!path.exists(), "{} should have been cleaned up", path.display());
    }

    let document: Value =
        serde_json::from_str(&fs::read_to_string(&final_path).unwrap()).unwrap();
    let results = document["results"].as_array().unwrap();

    // Dedup collapses the subdomain (200, 100) duplicate; sort puts the
    // 200 ahead of the 301.
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["status"], 200);
    assert_eq!(results[0]["host"], "admin");
    assert_eq!(results[1]["status"], 301);
    assert_eq!(results[1]["host"], "dev.example.com");
}

/// No structured output requested: the probes still run, nothing is
/// written anywhere.
#[tokio::test]
async fn pipeline_without_output_base_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let executor = install_executor(dir.path(), FAKE_FFUF);
    let words = write_wordlist(dir.path(), "words.txt", "admin\n");

    let cfg = Config {
        output: None,
        cache_dir: dir.path().to_path_buf(),
        ..Config::default()
    };
    let target: TargetSpec = "example.com".parse().unwrap();
    let invocation =
        ProbeInvocation::build(&cfg, &target, &executor, FuzzMode::Static, &words);

    assert_eq!(
        probe::run(&invocation).await,
        ProbeOutcome::Completed { report: None }
    );
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2); // executor + wordlist only
}
