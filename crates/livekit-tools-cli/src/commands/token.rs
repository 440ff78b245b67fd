//! Token commands.
//!
//! `livekit-tools token` - Print a signed access token for a room.

use anyhow::Context;
use chrono::Utc;
use clap::Args;
use livekit_tools_token::{parse_ttl, ApiCredentials, TokenBuilder, TokenOptions, VideoGrants, DEFAULT_TTL};
use livekit_tools_url::defaults::{default_identity, DEFAULT_API_KEY, DEFAULT_API_SECRET};

#[derive(Args, Debug, Clone)]
pub struct TokenArgs {
    /// API key the token is issued under
    #[arg(long, env = "LIVEKIT_API_KEY", default_value = DEFAULT_API_KEY)]
    pub api_key: String,

    /// API secret used to sign the token
    #[arg(long, env = "LIVEKIT_API_SECRET", default_value = DEFAULT_API_SECRET, hide_env_values = true)]
    pub api_secret: String,

    /// Room to join. Empty means any room.
    #[arg(long, default_value = "")]
    pub room: String,

    /// Participant identity. Defaults to lkcli-<pid>.
    #[arg(long)]
    pub identity: Option<String>,

    /// Token lifetime, e.g. 6h, 30m, 1h30m
    #[arg(long, default_value = DEFAULT_TTL)]
    pub ttl: String,

    /// Display name of the participant
    #[arg(long)]
    pub name: Option<String>,

    /// Participant metadata
    #[arg(long)]
    pub metadata: Option<String>,

    /// Allow publishing tracks and data
    #[arg(long, default_value_t = false)]
    pub can_publish: bool,

    /// Allow subscribing to tracks
    #[arg(long, default_value_t = false)]
    pub can_subscribe: bool,

    /// Grant room admin rights
    #[arg(long, default_value_t = false)]
    pub admin: bool,
}

/// Build the token described by `args`.
pub fn render(args: &TokenArgs) -> anyhow::Result<String> {
    let ttl = parse_ttl(&args.ttl).context("Invalid --ttl")?;
    let credentials =
        ApiCredentials::new(args.api_key.as_str(), args.api_secret.as_str()).context("Invalid API credentials")?;
    let identity = args.identity.clone().unwrap_or_else(default_identity);

    // Unset flags stay out of the payload.
    let mut grants = VideoGrants::join(args.room.as_str());
    if args.can_publish {
        grants = grants.with_publish(true);
    }
    if args.can_subscribe {
        grants = grants.with_subscribe(true);
    }
    if args.admin {
        grants = grants.with_admin(true);
    }

    let options = TokenOptions {
        name: args.name.clone(),
        metadata: args.metadata.clone(),
    };

    TokenBuilder::new(credentials)
        .issue_with_grants(&identity, grants, ttl, &options, Utc::now())
        .with_context(|| format!("Failed to issue token for identity '{}'", identity))
}

/// Print a signed access token.
pub fn print(args: &TokenArgs) -> anyhow::Result<()> {
    println!("{}", render(args)?);
    Ok(())
}
