use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use itertools::Itertools;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use marker::{DaysOfWeek, Literal, Match, Matcher, RegexMatcher, brackets, parens, surrounded};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    kind: Kind,

    /// Fill the next placeholder with VALUE instead of listing the matches (repeatable)
    #[arg(
        long = "with",
        value_name = "VALUE",
        action = ArgAction::Append,
        num_args = 1,
        global = true
    )]
    with: Option<Vec<String>>,
}

#[derive(Subcommand, Debug)]
enum Kind {
    /// Day names (Monday or monday, not MONDAY)
    Days { file: Option<PathBuf> },
    /// A literal string
    Literal {
        pattern: String,
        /// Only the first N occurrences
        #[arg(short = 'n', long)]
        limit: Option<usize>,
        file: Option<PathBuf>,
    },
    /// A regular expression
    Regex { expr: String, file: Option<PathBuf> },
    /// Text between OPEN and CLOSE
    Surrounded {
        open: String,
        close: String,
        file: Option<PathBuf>,
    },
    /// Text in [square brackets]
    Brackets { file: Option<PathBuf> },
    /// Text in (parentheses)
    Parens { file: Option<PathBuf> },
}

impl Kind {
    fn matcher(&self) -> Result<Box<dyn Matcher>> {
        Ok(match self {
            Kind::Days { .. } => Box::new(DaysOfWeek),
            Kind::Literal {
                pattern,
                limit: Some(n),
                ..
            } => Box::new(Literal::first(pattern.as_str(), *n)),
            Kind::Literal { pattern, .. } => Box::new(Literal::all(pattern.as_str())),
            Kind::Regex { expr, .. } => Box::new(RegexMatcher::new(expr)?),
            Kind::Surrounded { open, close, .. } => Box::new(surrounded(open, close)?),
            Kind::Brackets { .. } => Box::new(brackets()),
            Kind::Parens { .. } => Box::new(parens()),
        })
    }

    fn file(&self) -> Option<&PathBuf> {
        match self {
            Kind::Days { file }
            | Kind::Literal { file, .. }
            | Kind::Regex { file, .. }
            | Kind::Surrounded { file, .. }
            | Kind::Brackets { file }
            | Kind::Parens { file } => file.as_ref(),
        }
    }
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut contents = String::new();
            io::stdin()
                .read_to_string(&mut contents)
                .context("Failed to read stdin")?;
            Ok(contents)
        }
    }
}

fn report(m: &Match) -> String {
    let numbered = m
        .patterns()
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{:>3}: {p:?}", i + 1))
        .join("\n");
    if numbered.is_empty() {
        m.template().to_string()
    } else {
        format!("{}\n{numbered}", m.template())
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let matcher = args.kind.matcher()?;
    let input = read_input(args.kind.file())?;

    let m = matcher.find(&input);
    debug!(matches = m.len(), bytes = input.len(), "matched");

    match args.with {
        Some(values) => print!("{}", m.substitute(values)?),
        None => println!("{}", report(&m)),
    }
    Ok(())
}
