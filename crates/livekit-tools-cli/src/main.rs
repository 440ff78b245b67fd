use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::token::TokenArgs;

#[derive(Parser, Debug)]
#[command(name = "livekit-tools", version, about = "LiveKit token and URL tools")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a signed access token for a room
    Token(TokenArgs),

    /// Print a meet.livekit.io join link for a livekit:// URL
    ///
    /// URL format: livekit://[identity@]host[:port]/[room][?api_key=K&api_secret=S&ttl=DUR]
    Url {
        /// The livekit:// URL to resolve
        #[arg(env = "LIVEKIT_URL")]
        url: String,

        /// Also print the resolved connection details
        #[arg(short, long, default_value_t = false)]
        verbose: bool,
    },
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the token or URL.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Command::Token(args) => commands::token::print(&args)?,
        Command::Url { url, verbose } => commands::url::print(&url, verbose)?,
    }

    Ok(())
}
