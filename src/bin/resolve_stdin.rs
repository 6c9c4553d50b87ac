//! Simple CLI that reads HTML from stdin and prints the resolved image as JSON.
//!
//! Usage: `resolve_stdin <final-url> [--strategy social|body|auto]`
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.

use article_image::{resolve_html, Error, Options, Result, Strategy};
use std::io::{self, Read};

fn parse_strategies(value: &str) -> Result<Vec<Strategy>> {
    match value {
        "social" => Ok(vec![Strategy::SocialMetadata]),
        "body" => Ok(vec![Strategy::DocumentBody]),
        "auto" => Ok(Options::default().strategies),
        other => Err(Error::InvalidArgument(format!("unknown strategy '{other}'"))),
    }
}

fn parse_args(args: &[String]) -> Result<(String, Options)> {
    let mut final_url = None;
    let mut options = Options::default();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--strategy" {
            let value = iter
                .next()
                .ok_or_else(|| Error::InvalidArgument("--strategy needs a value".to_string()))?;
            options.strategies = parse_strategies(value)?;
        } else if final_url.is_none() {
            final_url = Some(arg.clone());
        } else {
            return Err(Error::InvalidArgument(format!("unexpected argument '{arg}'")));
        }
    }

    let final_url =
        final_url.ok_or_else(|| Error::InvalidArgument("missing <final-url>".to_string()))?;
    Ok((final_url, options))
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (final_url, options) = parse_args(&args)?;

    let mut html = String::new();
    io::stdin().read_to_string(&mut html)?;

    let image = resolve_html(&html, &final_url, &options);
    println!("{}", serde_json::to_string(&image)?);
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run() {
        tracing::error!(%err, "resolve_stdin failed");
        eprintln!("resolve_stdin: {err}");
        std::process::exit(1);
    }
}
