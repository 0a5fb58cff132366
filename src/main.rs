use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use botstrip::*;

#[derive(Debug, Parser)]
pub struct Opts {
    /// The commit message to clean (stdin when omitted)
    commit_message: Option<String>,

    /// Read the message from a file, e.g. the path a commit-msg hook receives
    #[clap(short, long)]
    file: Option<PathBuf>,

    /// Rewrite --file with the cleaned message
    #[clap(short, long, requires = "file")]
    in_place: bool,

    /// Username of the pull request author
    #[clap(short, long, env = "BOTSTRIP_AUTHOR")]
    author: Option<AuthorIdentity>,

    /// Bot pattern (repeatable); replaces the configured patterns
    #[clap(short, long)]
    pattern: Vec<String>,

    /// Config file, or the directory to search from
    #[clap(short, long, default_value = ".")]
    config: PathBuf,

    /// Validate the active patterns and exit
    #[clap(long)]
    check: bool,

    /// Show the active patterns and exit
    #[clap(long)]
    list_patterns: bool,

    /// Print the result as JSON: {"text": ..., "changed": ...}
    #[clap(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();
    let opts = Opts::parse();
    run(opts, &mut std::io::stdout().lock())
}

fn run(opts: Opts, out: &mut impl Write) -> anyhow::Result<()> {
    let mut config = load_config(&opts.config)?;
    if !opts.pattern.is_empty() {
        config = config.with_patterns(opts.pattern.as_slice());
    }
    let config = config.with_author(opts.author.clone());
    let sources = config.pattern_sources();

    if opts.check {
        return match validate_patterns(sources.as_slice()) {
            Ok(()) => {
                writeln!(out, "{} pattern(s) OK", sources.len())?;
                Ok(())
            }
            Err(errors) => {
                let errors = errors.iter().map(|why| why.to_string()).collect::<Vec<_>>();
                anyhow::bail!("{} invalid pattern(s):\n{}", errors.len(), errors.join("\n"))
            }
        };
    }

    let store = Arc::new(PatternStore::from_sources(&sources));
    if opts.list_patterns {
        writeln!(out, "{}", store.current())?;
        return Ok(());
    }

    let message = read_message(opts.file.as_deref(), opts.commit_message.as_deref())?;
    let cleaner = MessageCleaner::new(store, config.author().cloned());
    let cleaned = cleaner.clean(&message);

    if opts.in_place && cleaned.changed {
        let path = opts.file.as_ref().ok_or(MessageError::NoMessageFile)?;
        write_message(path, &cleaned.text)?;
    }

    if opts.json {
        writeln!(out, "{}", serde_json::to_string(&cleaned)?)?;
    } else if !opts.in_place {
        writeln!(out, "{}", cleaned.text)?;
    }

    Ok(())
}
