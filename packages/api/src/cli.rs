//! Command line arguments
//!
//! Unrecognised flag-shaped arguments are dropped before clap sees them, so
//! `webcache <URL> -x` behaves like `webcache <URL>`. A missing URL or a second
//! positional argument is still a usage error.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Command, CommandFactory, Parser};

/// webcache - fetch a URL over HTTP/1.0, serving repeats from a local cache
#[derive(Parser, Debug)]
#[command(name = "webcache", version, about, long_about = None)]
pub struct Cli {
    /// URL to fetch, e.g. http://example.com/index.html
    pub url: String,

    /// Open the URL in the system browser afterwards
    #[arg(short = 's')]
    pub open_browser: bool,

    /// Directory cached bodies are stored under
    #[arg(long, env = "WEBCACHE_CACHE_DIR", default_value = ".")]
    pub cache_dir: PathBuf,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Flags that were not recognised and therefore ignored
    #[arg(skip)]
    pub ignored: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FlagShape {
    /// A known flag; `takes_value` means the next argument is its value.
    Known { takes_value: bool },
    Unknown,
    NotAFlag,
}

impl Cli {
    /// Parse the process arguments, exiting with a usage message on error.
    #[must_use]
    pub fn parse_lenient() -> Self {
        match Self::try_parse_lenient_from(std::env::args_os()) {
            Ok(cli) => cli,
            Err(e) => e.exit(),
        }
    }

    /// Like `try_parse_from`, but unknown flags are recorded in `ignored`
    /// instead of failing the parse.
    ///
    /// # Errors
    ///
    /// Returns the clap error for a missing URL, a second positional argument,
    /// or a malformed known flag.
    pub fn try_parse_lenient_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut command = Self::command();
        command.build();

        let mut kept = Vec::new();
        let mut ignored = Vec::new();
        let mut args = args.into_iter().map(Into::into);
        kept.extend(args.next());

        let mut value_pending = false;
        let mut positional_only = false;

        for arg in args {
            if value_pending || positional_only {
                value_pending = false;
                kept.push(arg);
                continue;
            }

            let Some(text) = arg.to_str() else {
                kept.push(arg);
                continue;
            };

            if text == "--" {
                positional_only = true;
                kept.push(arg);
                continue;
            }

            match flag_shape(&command, text) {
                FlagShape::Known { takes_value } => {
                    value_pending = takes_value;
                    kept.push(arg);
                }
                FlagShape::Unknown => ignored.push(text.to_string()),
                FlagShape::NotAFlag => kept.push(arg),
            }
        }

        let mut cli = Self::try_parse_from(kept)?;
        cli.ignored = ignored;
        Ok(cli)
    }
}

fn flag_shape(command: &Command, text: &str) -> FlagShape {
    if let Some(long) = text.strip_prefix("--") {
        let (name, inline_value) = match long.split_once('=') {
            Some((name, _)) => (name, true),
            None => (long, false),
        };

        return match command.get_arguments().find(|a| a.get_long() == Some(name)) {
            Some(arg) => FlagShape::Known {
                takes_value: !inline_value && arg.get_action().takes_values(),
            },
            None => FlagShape::Unknown,
        };
    }

    let Some(shorts) = text.strip_prefix('-').filter(|s| !s.is_empty()) else {
        return FlagShape::NotAFlag;
    };

    // A cluster such as `-sv`; a value-taking short swallows the rest of it.
    for (i, c) in shorts.char_indices() {
        let Some(arg) = command.get_arguments().find(|a| a.get_short() == Some(c)) else {
            return FlagShape::Unknown;
        };
        if arg.get_action().takes_values() {
            return FlagShape::Known {
                takes_value: i + c.len_utf8() == shorts.len(),
            };
        }
    }

    FlagShape::Known { takes_value: false }
}
