pub mod cli;
pub mod logging;
mod printer;

use anyhow::Context as _;
use clap::Parser as _;
use cli::{Coloring, Opts};
use iter_power::{Error, ErrorKind};
use logging::AppLogger;
use termcolor::{ColorChoice, StandardStream};

pub const DEFAULT_BASE: i32 = 10;
pub const DEFAULT_EXPONENT: i32 = 4;

/// The parsed inputs to a power computation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Operands {
    pub base: i32,
    pub exponent: i32,
}

impl Operands {
    /// Parses the optional base and exponent arguments, falling back to the
    /// defaults for whichever is missing.
    pub fn parse(base: Option<&str>, exponent: Option<&str>) -> Result<Operands, Error> {
        Ok(Operands {
            base: parse_arg("base", base, DEFAULT_BASE)?,
            exponent: parse_arg("exponent", exponent, DEFAULT_EXPONENT)?,
        })
    }
}

fn parse_arg(name: &'static str, arg: Option<&str>, default: i32) -> Result<i32, Error> {
    match arg {
        None => Ok(default),
        Some(text) => text.parse::<i32>().map_err(|err| {
            Error::new(
                ErrorKind::InvalidArgument,
                format!("{} `{}` is not a valid integer", name, text),
                Box::new(err),
            )
        }),
    }
}

/// Parses the command line. Clap's help and version output exit directly;
/// an unexpected argument becomes `InvalidArgument` like any other bad input.
fn parse_options() -> anyhow::Result<Opts> {
    match Opts::try_parse() {
        Ok(opts) => Ok(opts),
        Err(err) if err.kind() == clap::ErrorKind::UnknownArgument => Err(Error::new(
            ErrorKind::InvalidArgument,
            "unexpected argument",
            Box::new(err),
        )
        .into()),
        Err(err) => err.exit(),
    }
}

/// Resolves `auto` against whether `stream` is a terminal.
fn color_choice_for(coloring: Coloring, stream: atty::Stream) -> ColorChoice {
    match coloring {
        Coloring::Auto if atty::is(stream) => ColorChoice::Always,
        Coloring::Auto => ColorChoice::Never,
        other => other.into(),
    }
}

pub fn run() -> anyhow::Result<()> {
    let opts = parse_options()?;

    log::set_max_level(opts.log_level_filter());
    AppLogger::instance().set_color_choice(color_choice_for(opts.color, atty::Stream::Stderr));

    if !opts.extra.is_empty() {
        log::debug!("ignoring extra arguments: {}", opts.extra.join(" "));
    }

    let operands = Operands::parse(opts.base.as_deref(), opts.exponent.as_deref())?;
    log::debug!(
        "base = {}, exponent = {}",
        operands.base,
        operands.exponent
    );

    if opts.strict {
        iter_power::checked_exponent(operands.exponent)?;
    } else if operands.exponent < 0 {
        log::warn!(
            "exponent {} is negative, the result is always 1",
            operands.exponent
        );
    }

    let mut stdout = StandardStream::stdout(color_choice_for(opts.color, atty::Stream::Stdout));

    if opts.steps {
        printer::print_steps(&mut stdout, operands.base, operands.exponent)
            .context("error occurred while printing steps")?;
    }

    let result = compute(operands);
    printer::print_result(&mut stdout, result).context("error occurred while printing result")?;

    Ok(())
}

/// Runs the multiplication loop, tracing each state when trace logging is on.
pub fn compute(operands: Operands) -> i32 {
    if log::log_enabled!(log::Level::Trace) {
        for step in iter_power::steps(operands.base, operands.exponent) {
            log::trace!(
                "step {}: accumulator = {}, remaining = {}",
                step.index,
                step.accumulator,
                step.remaining
            );
        }
    }

    iter_power::power(operands.base, operands.exponent)
}

/// Exit status for a failed run: 1 when the input was rejected, 2 for
/// anything else (such as a failed write to stdout).
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<Error>().is_some() {
        1
    } else {
        2
    }
}
