//! URL commands.
//!
//! `livekit-tools url` - Print a meet.livekit.io join link for a livekit:// URL.

use anyhow::Context;
use livekit_tools_url::{resolve, ConnectionDescriptor};

/// Render the output lines for `url`. Verbose mode prefixes the resolved
/// descriptor as a `#` comment line.
pub fn render(url: &str, verbose: bool) -> anyhow::Result<String> {
    let info = resolve(url).with_context(|| format!("Failed to resolve {}", url))?;
    render_descriptor(&info, verbose)
}

fn render_descriptor(info: &ConnectionDescriptor, verbose: bool) -> anyhow::Result<String> {
    let join_url = info.join_url();
    if verbose {
        let details = serde_json::to_string(info)?;
        Ok(format!("# {}\n{}", details, join_url))
    } else {
        Ok(join_url)
    }
}

/// Print the join URL for a livekit:// URL.
pub fn print(url: &str, verbose: bool) -> anyhow::Result<()> {
    println!("{}", render(url, verbose)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_join_url() {
        let output = render("livekit://alice@localhost/demo", false).unwrap();

        assert!(output.starts_with("https://meet.livekit.io/custom?liveKitUrl=ws://localhost:7880&token="));
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn test_render_verbose() {
        let output = render("livekit://alice@lk.example.com:443/demo?ttl=1h", true).unwrap();
        let mut lines = output.lines();

        let details = lines.next().unwrap().strip_prefix("# ").unwrap();
        let value: serde_json::Value = serde_json::from_str(details).unwrap();
        assert_eq!(value["url"], "wss://lk.example.com");
        assert_eq!(value["room"], "demo");
        assert_eq!(value["ttl"], "1h");

        let join = lines.next().unwrap();
        assert!(join.starts_with("https://meet.livekit.io/custom?liveKitUrl=wss://lk.example.com&token="));
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_render_wrong_scheme() {
        let err = render("https://lk.example.com/demo", false).unwrap_err();
        assert!(format!("{:#}", err).contains("invalid url scheme"));
    }
}
