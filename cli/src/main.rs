mod commands;
mod terminal;

use commands::{CommandLine, fuzz};
use hhfuzz_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init(commands.verbose);
    print::banner(commands.no_banner);

    let cfg = Config {
        static_wordlist: commands.static_wordlist,
        subdomain_wordlist: commands.subdomain_wordlist,
        match_codes: commands.match_codes,
        output: commands.output,
        ffuf_path: commands.ffuf_path,
        ffuf_options: commands.ffuf_options.unwrap_or_default(),
        ..Config::default()
    };

    fuzz::fuzz(commands.target, &cfg).await
}
