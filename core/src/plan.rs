//! # Mode Planning
//!
//! Decides which header-construction strategies run, pairs each with its
//! wordlist, and renders the exact executor argv for every pairing.

use std::path::{Path, PathBuf};

use hhfuzz_common::config::Config;
use hhfuzz_common::target::TargetSpec;

/// Literal marker the executor substitutes with each candidate token.
pub const PLACEHOLDER: &str = "FUZZ";

/// Flags the planner owns authoritatively. User-supplied duplicates are
/// dropped from the pass-through options, not merged; the cli help text
/// states this as a hard override.
const OWNED_FLAGS: &[&str] = &["-mc", "-o", "-of", "-s"];

/// One header-construction strategy, paired with exactly one wordlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuzzMode {
    /// `Host: FUZZ`, driven by the static wordlist.
    Static,
    /// `Host: FUZZ.<base domain>`, driven by the static wordlist.
    StaticAppend,
    /// `Host: FUZZ`, driven by the subdomain wordlist.
    Subdomain,
}

impl FuzzMode {
    /// Stable label used in per-mode report filenames.
    pub fn label(self) -> &'static str {
        match self {
            FuzzMode::Static => "static",
            FuzzMode::StaticAppend => "static_append",
            FuzzMode::Subdomain => "subdomain",
        }
    }

    /// `Host:` header template for this mode. The base domain comes from
    /// [`TargetSpec::domain`], so it never carries a port.
    pub fn header_template(self, target: &TargetSpec) -> String {
        match self {
            FuzzMode::Static | FuzzMode::Subdomain => format!("Host: {PLACEHOLDER}"),
            FuzzMode::StaticAppend => format!("Host: {PLACEHOLDER}.{}", target.domain()),
        }
    }
}

/// Builds the ordered run plan from the prepared wordlists.
///
/// A static list yields both the placeholder-only and the
/// placeholder-plus-domain pass, in that order; a subdomain list appends
/// the subdomain pass. An empty plan means there is nothing to fuzz and
/// the caller must stop before touching the executor.
pub fn plan_modes(
    static_list: Option<&Path>,
    subdomain_list: Option<&Path>,
) -> Vec<(FuzzMode, PathBuf)> {
    let mut plan = Vec::new();

    if let Some(list) = static_list {
        plan.push((FuzzMode::Static, list.to_path_buf()));
        plan.push((FuzzMode::StaticAppend, list.to_path_buf()));
    }
    if let Some(list) = subdomain_list {
        plan.push((FuzzMode::Subdomain, list.to_path_buf()));
    }

    plan
}

/// Everything needed to run the executor once. Immutable once built.
#[derive(Debug, Clone)]
pub struct ProbeInvocation {
    pub executable: PathBuf,
    pub mode: FuzzMode,
    pub target_url: String,
    pub wordlist: PathBuf,
    pub match_codes: String,
    pub header: String,
    pub extra_options: Vec<String>,
    /// Per-mode structured report path; `None` when no output was requested.
    pub report: Option<PathBuf>,
}

impl ProbeInvocation {
    pub fn build(
        cfg: &Config,
        target: &TargetSpec,
        executable: &Path,
        mode: FuzzMode,
        wordlist: &Path,
    ) -> Self {
        let report = cfg
            .output
            .as_ref()
            .map(|base| PathBuf::from(format!("{base}_{}.json", mode.label())));

        Self {
            executable: executable.to_path_buf(),
            mode,
            target_url: target.url().to_string(),
            wordlist: wordlist.to_path_buf(),
            match_codes: cfg.match_codes.clone(),
            header: mode.header_template(target),
            extra_options: sanitize_passthrough(&cfg.ffuf_options),
            report,
        }
    }

    /// Renders the executor argv (the executable itself excluded).
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            "-u".to_string(),
            self.target_url.clone(),
            "-w".to_string(),
            self.wordlist.display().to_string(),
            "-mc".to_string(),
            self.match_codes.clone(),
            "-s".to_string(),
            "-H".to_string(),
            self.header.clone(),
        ];

        if let Some(report) = &self.report {
            args.push("-o".to_string());
            args.push(report.display().to_string());
            args.push("-of".to_string());
            args.push("json".to_string());
        }

        args.extend(self.extra_options.iter().cloned());
        args
    }
}

/// Strips planner-owned flags from the raw pass-through string. For the
/// value-taking flags the value token goes with the flag, unless the next
/// token is itself a flag.
fn sanitize_passthrough(raw: &str) -> Vec<String> {
    let mut kept = Vec::new();
    let mut tokens = raw.split_whitespace().peekable();

    while let Some(token) = tokens.next() {
        if OWNED_FLAGS.contains(&token) {
            if token != "-s" && tokens.peek().is_some_and(|next| !next.starts_with('-')) {
                tokens.next();
            }
            continue;
        }
        kept.push(token.to_string());
    }

    kept
}
