//! # Probe Execution
//!
//! Runs one [`ProbeInvocation`], relaying the executor's output line by
//! line as it appears. Every runtime failure here is soft: the mode simply
//! contributes no records. Only a missing executor, checked up front via
//! [`resolve_executable`], is fatal to the run.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};

use hhfuzz_common::error::FuzzError;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tracing::{debug, error, warn};

use crate::plan::ProbeInvocation;

/// Outcome of a single mode run.
#[derive(Debug, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The executor exited 0. `report` is the structured output file,
    /// present only when one was requested and came back non-empty.
    Completed { report: Option<PathBuf> },
    /// Non-zero exit, or a spawn/stream error; the mode contributes nothing.
    Failed,
    /// Ctrl-C arrived while the child ran; the child was killed.
    Interrupted,
}

/// Resolves the executor by explicit path, or by searching PATH when the
/// name carries no directory component.
pub fn resolve_executable(name: &str) -> Result<PathBuf, FuzzError> {
    let candidate = Path::new(name);
    if candidate.parent().is_some_and(|dir| !dir.as_os_str().is_empty()) {
        if candidate.is_file() {
            return Ok(candidate.to_path_buf());
        }
        return Err(FuzzError::ExecutorNotFound(name.to_string()));
    }

    env::var_os("PATH")
        .map(|paths| env::split_paths(&paths).collect::<Vec<_>>())
        .unwrap_or_default()
        .into_iter()
        .map(|dir| dir.join(name))
        .find(|full| full.is_file())
        .ok_or_else(|| FuzzError::ExecutorNotFound(name.to_string()))
}

/// Runs one invocation to completion, streaming its output as it arrives.
pub async fn run(invocation: &ProbeInvocation) -> ProbeOutcome {
    debug!(
        "exec {} {}",
        invocation.executable.display(),
        invocation.to_args().join(" ")
    );

    let exit = match spawn_and_stream(invocation).await {
        Ok(Some(status)) => status,
        Ok(None) => return ProbeOutcome::Interrupted,
        Err(e) => {
            error!("{} mode failed to run: {e:#}", invocation.mode.label());
            return ProbeOutcome::Failed;
        }
    };

    if !exit.success() {
        warn!("executor exited with {exit} in {} mode", invocation.mode.label());
        return ProbeOutcome::Failed;
    }

    let report = invocation.report.clone().filter(|path| non_empty_file(path));
    if invocation.report.is_some() && report.is_none() {
        warn!("{} mode produced no usable report file", invocation.mode.label());
    }

    ProbeOutcome::Completed { report }
}

async fn spawn_and_stream(invocation: &ProbeInvocation) -> anyhow::Result<Option<ExitStatus>> {
    let mut child = Command::new(&invocation.executable)
        .args(invocation.to_args())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    let out_relay = tokio::spawn(relay_lines(child.stdout.take()));
    let err_relay = tokio::spawn(relay_lines(child.stderr.take()));

    tokio::select! {
        status = child.wait() => {
            let status = status?;
            let _ = out_relay.await;
            let _ = err_relay.await;
            Ok(Some(status))
        }
        _ = tokio::signal::ctrl_c() => {
            warn!("interrupt received, stopping executor");
            if let Err(e) = child.kill().await {
                debug!("could not kill executor: {e}");
            }
            out_relay.abort();
            err_relay.abort();
            Ok(None)
        }
    }
}

/// Line-buffered relay of the executor's combined output onto our stdout,
/// so a human can watch hits as they happen.
async fn relay_lines<R>(reader: Option<R>)
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let Some(reader) = reader else { return };
    let mut lines = BufReader::new(reader).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        println!("{line}");
    }
}

fn non_empty_file(path: &Path) -> bool {
    fs::metadata(path).map(|meta| meta.len() > 0).unwrap_or(false)
}
