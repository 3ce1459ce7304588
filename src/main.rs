use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use is_terminal::IsTerminal;
use seqdiff::areas::comparator::Comparator;
use seqdiff::artifacts::core::Output;
use seqdiff::artifacts::diff::close_matches::{DEFAULT_CUTOFF, DEFAULT_MATCH_COUNT};
use seqdiff::artifacts::diff::dir_diff::{DiffFilter, DirDiffOptions};
use seqdiff::artifacts::matching::DEFAULT_CONTEXT;
use seqdiff::commands::ndiff::NdiffOptions;
use seqdiff::commands::unified::{DiffCommandOptions, DiffStyle};
use seqdiff::{Algorithm, ColorChoice};
use tracing_subscriber::EnvFilter;

/// Variable holding the `tracing` filter directives.
const LOG_ENV: &str = "SEQDIFF_LOG";

#[derive(Parser)]
#[command(
    name = "seqdiff",
    version,
    author = "Sami Barbut-Dica",
    about = "Compare text sequences line by line",
    long_about = "seqdiff compares files the way difflib and Meld do: \
    human-readable deltas with intraline hints, unified and context diffs, \
    similarity ratios, close-match lookup and whole-directory comparison.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto, help = "When to color the output")]
    color: ColorChoice,
    #[arg(long, global = true, help = "Never page the output")]
    no_pager: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "ndiff",
        about = "Print a line-by-line delta with intraline hints",
        long_about = "This command prints every line of both files prefixed with '- ', '+ ' or '  '. \
        Similar replaced lines get a '? ' guide line marking the changed characters."
    )]
    Ndiff {
        #[arg(index = 1)]
        a: String,
        #[arg(index = 2)]
        b: String,
        #[arg(long, help = "Do not synchronize on blank or '#'-only lines")]
        ignore_blank_lines: bool,
        #[arg(long, value_name = "REGEX", help = "Do not synchronize on lines matching REGEX")]
        ignore_matching_lines: Option<String>,
        #[arg(
            long,
            action = ArgAction::Set,
            default_value_t = true,
            help = "Treat spaces and tabs as junk when comparing similar lines"
        )]
        charjunk: bool,
    },
    #[command(
        name = "unified",
        about = "Print a unified diff",
        long_about = "This command prints the differences between two files in unified format, \
        with N lines of context around each change."
    )]
    Unified {
        #[arg(index = 1)]
        a: String,
        #[arg(index = 2)]
        b: String,
        #[arg(short = 'U', long = "unified", default_value_t = DEFAULT_CONTEXT, help = "Lines of context")]
        context: usize,
        #[arg(long, value_enum, default_value_t = Algorithm::Classic)]
        algorithm: Algorithm,
        #[arg(long, help = "Omit modification times from the headers")]
        no_dates: bool,
    },
    #[command(
        name = "context",
        about = "Print a context diff",
        long_about = "This command prints the differences between two files in context format, \
        with N lines of context around each change."
    )]
    Context {
        #[arg(index = 1)]
        a: String,
        #[arg(index = 2)]
        b: String,
        #[arg(short = 'C', long = "context", default_value_t = DEFAULT_CONTEXT, help = "Lines of context")]
        context: usize,
        #[arg(long, value_enum, default_value_t = Algorithm::Classic)]
        algorithm: Algorithm,
        #[arg(long, help = "Omit modification times from the headers")]
        no_dates: bool,
    },
    #[command(
        name = "restore",
        about = "Recover one side of a saved ndiff delta",
        long_about = "This command reads a delta produced by 'ndiff' and prints \
        the first (1) or second (2) file it was computed from."
    )]
    Restore {
        #[arg(index = 1)]
        delta: String,
        #[arg(index = 2, value_parser = clap::value_parser!(u8).range(1..=2))]
        which: u8,
    },
    #[command(
        name = "ratio",
        about = "Print the similarity of two files",
        long_about = "This command prints the similarity ratio of two files compared line by line, \
        along with the two cheaper upper bounds of it."
    )]
    Ratio {
        #[arg(index = 1)]
        a: String,
        #[arg(index = 2)]
        b: String,
        #[arg(long, value_enum, default_value_t = Algorithm::Classic)]
        algorithm: Algorithm,
    },
    #[command(
        name = "close",
        about = "Find the candidates closest to a word",
        long_about = "This command prints the candidates whose similarity to the word \
        reaches the cutoff, best first."
    )]
    Close {
        #[arg(index = 1)]
        word: String,
        #[arg(index = 2, required = true, num_args = 1..)]
        candidates: Vec<String>,
        #[arg(short, default_value_t = DEFAULT_MATCH_COUNT, help = "Maximum number of matches")]
        n: usize,
        #[arg(long, default_value_t = DEFAULT_CUTOFF, help = "Minimum similarity in [0, 1]")]
        cutoff: f64,
    },
    #[command(
        name = "dir",
        about = "Compare two directory trees",
        long_about = "This command pairs the files of two directories by relative path and prints \
        one status line per added (A), deleted (D) or modified (M) file. \
        Modified files carry their line similarity as a percentage."
    )]
    Dir {
        #[arg(index = 1)]
        a: String,
        #[arg(index = 2)]
        b: String,
        #[arg(long, value_parser = parse_diff_filter, help = "Only show the given kinds of changes, e.g. AM")]
        diff_filter: Option<DiffFilter>,
        #[arg(long, value_enum, default_value_t = Algorithm::Classic)]
        algorithm: Algorithm,
    },
}

fn parse_diff_filter(s: &str) -> Result<DiffFilter, String> {
    DiffFilter::try_parse(s)
        .ok_or_else(|| format!("invalid diff filter '{s}', expected letters from AMD"))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn init_color(choice: ColorChoice) {
    match choice {
        ColorChoice::Always => colored::control::set_override(true),
        ColorChoice::Never => colored::control::set_override(false),
        ColorChoice::Auto => colored::control::set_override(std::io::stdout().is_terminal()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    init_color(cli.color);

    let Output { writer, pager } = Output::select(cli.no_pager);
    let comparator = Comparator::new(".", writer)?;

    match &cli.command {
        Commands::Ndiff {
            a,
            b,
            ignore_blank_lines,
            ignore_matching_lines,
            charjunk,
        } => {
            let options =
                NdiffOptions::new(*ignore_blank_lines, ignore_matching_lines.clone(), *charjunk);
            comparator.ndiff(a, b, &options)?
        }
        Commands::Unified {
            a,
            b,
            context,
            algorithm,
            no_dates,
        } => {
            let options = DiffCommandOptions::new(DiffStyle::Unified, *algorithm)
                .context(*context)
                .with_dates(!no_dates);
            comparator.unified(a, b, options)?
        }
        Commands::Context {
            a,
            b,
            context,
            algorithm,
            no_dates,
        } => {
            let options = DiffCommandOptions::new(DiffStyle::Context, *algorithm)
                .context(*context)
                .with_dates(!no_dates);
            comparator.unified(a, b, options)?
        }
        Commands::Restore { delta, which } => comparator.restore(delta, usize::from(*which))?,
        Commands::Ratio { a, b, algorithm } => comparator.ratio(a, b, *algorithm)?,
        Commands::Close {
            word,
            candidates,
            n,
            cutoff,
        } => comparator.close(word, candidates, *n, *cutoff)?,
        Commands::Dir {
            a,
            b,
            diff_filter,
            algorithm,
        } => {
            let options = DirDiffOptions::new(*algorithm, diff_filter.unwrap_or_default());
            comparator.dir(a, b, options).await?
        }
    }

    drop(comparator);
    Output::finish(pager)
}
