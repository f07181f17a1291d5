use clap::{ArgEnum, Parser};
use termcolor::ColorChoice;

/// Unknown flags are taken as positional values, so a malformed base such
/// as `-abc` reaches integer parsing and anything after the exponent is
/// collected into `extra`.
#[derive(Parser, Debug)]
#[clap(
    name = "iter-power",
    version = env!("CARGO_PKG_VERSION"),
    author = "Adolph C.",
    allow_hyphen_values = true,
    trailing_var_arg = true
)]
pub struct Opts {
    /// The integer to raise to a power. Defaults to 10.
    pub base: Option<String>,

    /// The number of times to multiply the base. Defaults to 4.
    /// Negative exponents produce 1 unless `--strict` is used.
    pub exponent: Option<String>,

    /// Any further arguments are ignored.
    #[clap(hide = true, multiple_values = true)]
    pub extra: Vec<String>,

    /// Print every state of the multiplication loop before the result.
    #[clap(long = "steps")]
    pub steps: bool,

    /// Reject negative exponents instead of treating them as zero.
    #[clap(long = "strict")]
    pub strict: bool,

    /// Raises the log level: (default)=warning, 1=+info, 2=+debug, 3=+trace
    #[clap(short, long, parse(from_occurrences))]
    pub verbose: u64,

    /// Disables logging.
    #[clap(short, long)]
    pub quiet: bool,

    /// When to color the step table and log output.
    #[clap(long = "color", arg_enum, default_value = "auto")]
    pub color: Coloring,
}

#[derive(ArgEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Coloring {
    Auto,
    Always,
    Never,
    /// Only use ANSI escape codes.
    AlwaysAnsi,
}

impl From<Coloring> for ColorChoice {
    fn from(coloring: Coloring) -> ColorChoice {
        match coloring {
            Coloring::Auto => ColorChoice::Auto,
            Coloring::Always => ColorChoice::Always,
            Coloring::Never => ColorChoice::Never,
            Coloring::AlwaysAnsi => ColorChoice::AlwaysAnsi,
        }
    }
}

impl Opts {
    pub fn log_level_filter(&self) -> log::LevelFilter {
        use log::LevelFilter;

        if self.quiet {
            return LevelFilter::Off;
        }

        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
