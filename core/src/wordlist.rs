//! # Wordlist Preparation
//!
//! Turns a [`WordSource`] into an on-disk wordlist the probe executor can
//! consume, or reports the source unavailable. Unavailability is never
//! fatal here; the planner simply skips the affected modes.
//!
//! Local lists are trusted as given. Only the remote default list goes
//! through [`clean_lines`] and the on-disk cache.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use hhfuzz_common::config::{self, Config};
use tracing::{debug, warn};

/// Formatting artifact some published virtual-host lists carry on line ends.
const SUFFIX_MARKER: &str = ".%s";

/// A raw source of newline-delimited candidate tokens.
#[derive(Debug, Clone)]
pub enum WordSource {
    /// Local static wordlist, assumed pre-cleaned.
    StaticList(PathBuf),
    /// Local subdomain wordlist, assumed pre-cleaned.
    SubdomainList(PathBuf),
    /// The published default list, fetched and cleaned on first use.
    RemoteDefault(String),
}

/// Produces a usable wordlist path for `source`, or `None` when the source
/// is unavailable (missing file, failed download).
pub async fn prepare(source: &WordSource, cfg: &Config) -> Option<PathBuf> {
    match source {
        WordSource::StaticList(path) | WordSource::SubdomainList(path) => {
            if path.is_file() {
                Some(path.clone())
            } else {
                warn!("wordlist {} is not a regular file, skipping", path.display());
                None
            }
        }
        WordSource::RemoteDefault(url) => {
            let cache = cfg.cache_dir.join(config::CACHED_WORDLIST_NAME);
            if cache.is_file() {
                debug!("reusing cached wordlist {}", cache.display());
                return Some(cache);
            }
            match fetch_and_cache(url, &cache).await {
                Ok(()) => Some(cache),
                Err(e) => {
                    warn!("default wordlist unavailable: {e:#}");
                    None
                }
            }
        }
    }
}

/// Cleans raw wordlist text: blank lines dropped, surrounding whitespace
/// trimmed, trailing `.%s` markers stripped. Order and duplicates are kept;
/// deduplication is a consolidation-time concern, not a preparation-time
/// one.
pub fn clean_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(|line| {
            let mut token = line.trim();
            while let Some(stripped) = token.strip_suffix(SUFFIX_MARKER) {
                token = stripped.trim_end();
            }
            token.to_string()
        })
        .filter(|token| !token.is_empty())
        .collect()
}

async fn fetch_and_cache(url: &str, cache: &Path) -> anyhow::Result<()> {
    let client = reqwest::Client::builder()
        .user_agent(config::DOWNLOAD_USER_AGENT)
        .timeout(config::DOWNLOAD_TIMEOUT)
        .build()?;

    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    let tokens = clean_lines(&body);
    write_atomic(cache, &tokens.join("\n"))?;
    debug!("cached {} tokens at {}", tokens.len(), cache.display());
    Ok(())
}

/// Writes via a same-directory temp file plus rename, so a concurrent run
/// observes either the full cleaned list or nothing.
fn write_atomic(dest: &Path, contents: &str) -> io::Result<()> {
    let mut partial = dest.as_os_str().to_owned();
    partial.push(format!(".{}.part", std::process::id()));
    let partial = PathBuf::from(partial);

    fs::write(&partial, contents)?;
    fs::rename(&partial, dest)
}
