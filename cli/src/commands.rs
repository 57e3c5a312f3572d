pub mod fuzz;

use std::path::PathBuf;

use clap::Parser;
use hhfuzz_common::config::{DEFAULT_FFUF_PATH, DEFAULT_MATCH_CODES};
use hhfuzz_common::target::TargetSpec;

#[derive(Parser)]
#[command(name = "hhfuzz")]
#[command(about = "Host header fuzzing orchestrator built around ffuf.")]
pub struct CommandLine {
    /// Target URL; http:// is assumed when no scheme is given
    pub target: TargetSpec,

    /// Static wordlist path (the published default list is fetched when omitted)
    #[arg(short = 'w', long)]
    pub static_wordlist: Option<PathBuf>,

    /// Subdomain wordlist path; enables the subdomain mode
    #[arg(short = 'W', long)]
    pub subdomain_wordlist: Option<PathBuf>,

    /// Comma-separated status codes the executor should report
    #[arg(short, long, default_value = DEFAULT_MATCH_CODES)]
    pub match_codes: String,

    /// Report base path: per-mode files land at <base>_<mode>.json, the
    /// consolidated report at <base>_final.json
    #[arg(short, long)]
    pub output: Option<String>,

    /// Probe executor binary name or path
    #[arg(long, default_value = DEFAULT_FFUF_PATH)]
    pub ffuf_path: String,

    /// Extra options passed through to the executor verbatim, except
    /// -mc, -o, -of and -s, which hhfuzz owns and drops (hard override)
    #[arg(long)]
    pub ffuf_options: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress the banner line
    #[arg(long)]
    pub no_banner: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
