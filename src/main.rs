mod config;
mod entry;
mod error;
mod lister;
mod output;
mod scope;
mod utils;
mod watcher;

use anyhow::{Context, Result};
use clap::Parser;
use config::Config;
use entry::DirEntry;
use lister::DirLister;
use log::{error, info};
use std::env;
use std::path::PathBuf;
use std::sync::mpsc;
use watcher::DirWatcher;

#[derive(Parser, Debug, PartialEq)]
#[command(
    version,
    about = "List a directory without its hidden (\".\" or \"$\" prefixed) entries"
)]
struct Args {
    /// Directory to list (defaults to the current directory)
    dir: Option<PathBuf>,

    /// Include hidden entries
    #[arg(short, long)]
    all: bool,

    /// Print entries as JSON
    #[arg(long)]
    json: bool,

    /// Keep running and print new entries as they appear
    #[arg(short, long)]
    watch: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let dir = match args.dir {
        Some(dir) => dir,
        None => env::current_dir().context("Could not determine current directory")?,
    };

    let config = Config::load().context("Failed to load config")?;
    let scope = config.build_scope()?;

    let mut options = config.listing.clone();
    if args.all {
        options.show_hidden = true;
    }

    let lister = DirLister::new(scope, options);
    let entries = lister
        .list(&dir)
        .context(format!("Failed to list {:?}", dir))?;

    if args.json {
        println!("{}", output::render_json(&entries)?);
    } else {
        print!("{}", output::render_text(&entries));
    }

    if args.watch {
        watch(dir, args.json)?;
    }

    Ok(())
}

fn watch(dir: PathBuf, json: bool) -> Result<()> {
    let (tx, rx) = mpsc::channel::<DirEntry>();

    let watcher = DirWatcher::new(dir);
    let _debouncer = watcher.start(tx)?;

    info!("Watching for new entries, press Ctrl+C to stop");

    for entry in rx {
        if json {
            println!("{}", serde_json::to_string(&entry)?);
        } else {
            println!("{}", output::render_line(&entry));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> std::result::Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("dirview").chain(args.iter().copied()))
    }

    #[test]
    fn test_parse_flags() -> Result<()> {
        let args = parse(&["--all", "--json", "/tmp"])?;

        assert_eq!(
            args,
            Args {
                dir: Some(PathBuf::from("/tmp")),
                all: true,
                json: true,
                watch: false,
            }
        );
        Ok(())
    }

    #[test]
    fn test_parse_defaults() -> Result<()> {
        let args = parse(&[])?;

        assert_eq!(args.dir, None);
        assert!(!args.all && !args.json && !args.watch);
        assert!(parse(&["-w"])?.watch);
        assert!(parse(&["-a"])?.all);
        Ok(())
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse(&["--bogus"]).unwrap_err().kind(),
            ErrorKind::UnknownArgument
        );
        assert!(parse(&["a", "b"]).is_err());
    }

    #[test]
    fn test_help_is_reported_not_exited() {
        assert_eq!(parse(&["--help"]).unwrap_err().kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_hidden_directory_argument() -> Result<()> {
        let args = parse(&[".config"])?;
        assert_eq!(args.dir, Some(PathBuf::from(".config")));
        Ok(())
    }
}
