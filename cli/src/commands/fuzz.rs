use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use hhfuzz_common::config::Config;
use hhfuzz_common::error::FuzzError;
use hhfuzz_common::target::TargetSpec;
use hhfuzz_common::{info, success, warn};
use hhfuzz_core::consolidate::{self, ReportSet};
use hhfuzz_core::plan::{self, ProbeInvocation};
use hhfuzz_core::probe::{self, ProbeOutcome};
use hhfuzz_core::wordlist::{self, WordSource};

use crate::terminal::{print, spinner};

/// Runs the whole pipeline: prepare wordlists, plan modes, invoke the
/// executor once per mode in plan order, consolidate. Modes run strictly
/// one at a time; the next starts only after the previous child exited.
pub async fn fuzz(target: TargetSpec, cfg: &Config) -> anyhow::Result<()> {
    let executable = probe::resolve_executable(&cfg.ffuf_path)?;

    let static_list = prepare_static(cfg).await;
    let subdomain_list = prepare_subdomain(cfg).await;

    let modes = plan::plan_modes(static_list.as_deref(), subdomain_list.as_deref());
    if modes.is_empty() {
        return Err(FuzzError::NoWordlists.into());
    }
    info!("fuzzing {} across {} modes", target, modes.len());

    // Set by the listener between invocations; while a child runs the
    // invoker handles the signal itself and reports Interrupted.
    let stop = Arc::new(AtomicBool::new(false));
    {
        let stop = stop.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                stop.store(true, Ordering::Relaxed);
            }
        });
    }

    let mut reports = ReportSet::new();
    let mut interrupted_mid_run = false;
    let mut failures = 0usize;

    for (mode, list) in &modes {
        if stop.load(Ordering::Relaxed) {
            warn!("interrupt received, skipping remaining modes");
            break;
        }

        print::header(&format!("{} mode", mode.label()));
        let invocation = ProbeInvocation::build(cfg, &target, &executable, *mode, list);

        match probe::run(&invocation).await {
            ProbeOutcome::Completed { report: Some(path) } => reports.track(path),
            ProbeOutcome::Completed { report: None } => {}
            ProbeOutcome::Failed => failures += 1,
            ProbeOutcome::Interrupted => {
                interrupted_mid_run = true;
                break;
            }
        }
    }

    // A mid-invocation interrupt never produces a consolidated report; a
    // between-modes interrupt still consolidates the modes that finished.
    if interrupted_mid_run {
        warn!("run interrupted, consolidation skipped");
        return Ok(());
    }

    if let Some(base) = &cfg.output {
        match consolidate::merge_reports(reports.files(), base) {
            Some(path) => success!("consolidated report written to {}", path.display()),
            None => info!("no findings to consolidate"),
        }
    }

    if failures > 0 {
        warn!("{failures} of {} modes did not complete", modes.len());
    }
    Ok(())
}

/// The static list falls back to the published default (fetched, cleaned
/// and cached) when none was supplied. Unavailability is soft.
async fn prepare_static(cfg: &Config) -> Option<PathBuf> {
    match &cfg.static_wordlist {
        Some(path) => wordlist::prepare(&WordSource::StaticList(path.clone()), cfg).await,
        None => {
            let spin = spinner::start("fetching default wordlist");
            let prepared =
                wordlist::prepare(&WordSource::RemoteDefault(cfg.wordlist_url.clone()), cfg).await;
            spin.finish_and_clear();
            prepared
        }
    }
}

async fn prepare_subdomain(cfg: &Config) -> Option<PathBuf> {
    let path = cfg.subdomain_wordlist.as_ref()?;
    wordlist::prepare(&WordSource::SubdomainList(path.clone()), cfg).await
}
