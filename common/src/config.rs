use std::path::PathBuf;
use std::time::Duration;

/// Where the default static wordlist is fetched from when none is supplied.
pub const DEFAULT_WORDLIST_URL: &str =
    "https://raw.githubusercontent.com/cujanovic/Virtual-host-wordlist/master/virtual-host-wordlist.txt";

/// Filename of the cleaned default wordlist inside the cache directory.
///
/// Fixed so a second run reuses the cached copy instead of re-fetching.
pub const CACHED_WORDLIST_NAME: &str = "hhfuzz_static_wordlist.txt";

/// Status codes the executor reports unless the user narrows them down.
pub const DEFAULT_MATCH_CODES: &str = "200,204,301,302,307,308,401,403,405,500";

/// Executor binary looked up on PATH unless overridden with `--ffuf-path`.
pub const DEFAULT_FFUF_PATH: &str = "ffuf";

/// User-Agent sent when fetching the default wordlist.
pub const DOWNLOAD_USER_AGENT: &str = concat!("hhfuzz/", env!("CARGO_PKG_VERSION"));

/// Upper bound on the default wordlist download.
pub const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30);

/// Immutable run configuration.
///
/// Built once from the command line and passed by reference into every
/// component; no component holds mutable process-wide state.
#[derive(Debug, Clone)]
pub struct Config {
    /// Local static wordlist. `None` falls back to the remote default.
    pub static_wordlist: Option<PathBuf>,
    /// Local subdomain wordlist; enables the subdomain mode when present.
    pub subdomain_wordlist: Option<PathBuf>,
    /// Comma-separated status codes forwarded to the executor.
    pub match_codes: String,
    /// Base path for report files; `None` disables structured output.
    pub output: Option<String>,
    /// Executor binary name or path.
    pub ffuf_path: String,
    /// Raw pass-through options for the executor, sanitized by the planner.
    pub ffuf_options: String,
    /// Source URL for the default static wordlist.
    pub wordlist_url: String,
    /// Directory holding the cached cleaned default wordlist.
    pub cache_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            static_wordlist: None,
            subdomain_wordlist: None,
            match_codes: DEFAULT_MATCH_CODES.to_string(),
            output: None,
            ffuf_path: DEFAULT_FFUF_PATH.to_string(),
            ffuf_options: String::new(),
            wordlist_url: DEFAULT_WORDLIST_URL.to_string(),
            cache_dir: std::env::temp_dir(),
        }
    }
}
