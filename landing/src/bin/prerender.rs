//! # minigames-prerender
//!
//! Renders the landing page to a static HTML document.
//!
//! ```bash
//! minigames-prerender --output dist/index.html
//! minigames-prerender --auth signed-in > preview.html
//! ```

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use minigames_landing::{AuthStatus, render_document};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "minigames-prerender")]
#[command(about = "Prerender the MiniGames landing page to static HTML")]
#[command(version)]
struct Args {
    /// Output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Auth status baked into the page (signed-in, signed-out)
    #[arg(long, default_value = "signed-out")]
    auth: AuthStatus,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn run(args: Args) -> Result<()> {
    // stdout may carry the document, so logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    debug!(?args, "prerendering");
    let html = render_document(args.auth);

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            fs::write(path, &html).with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), bytes = html.len(), auth = %args.auth, "page written");
        }
        None => {
            io::stdout()
                .lock()
                .write_all(html.as_bytes())
                .context("writing to stdout")?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[minigames-prerender] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_stdout_and_signed_out() {
        let args = Args::try_parse_from(["minigames-prerender"]).unwrap();
        assert!(args.output.is_none());
        assert_eq!(args.auth, AuthStatus::SignedOut);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn parses_auth_and_output() {
        let args = Args::try_parse_from([
            "minigames-prerender",
            "--auth",
            "signed-in",
            "-o",
            "dist/index.html",
        ])
        .unwrap();
        assert_eq!(args.auth, AuthStatus::SignedIn);
        assert_eq!(args.output, Some(PathBuf::from("dist/index.html")));
    }

    #[test]
    fn rejects_unknown_auth() {
        let err = Args::try_parse_from(["minigames-prerender", "--auth", "maybe"]).unwrap_err();
        assert!(err.to_string().contains("unknown auth status"));
    }
}
