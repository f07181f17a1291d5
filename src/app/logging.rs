use log::Level;
use std::io::Write as _;
use std::sync::atomic::{AtomicU8, Ordering};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor as _};

/// Writes `level(target): message` records to stderr. The level filter is
/// the one set through `log::set_max_level`.
pub struct AppLogger {
    color: AtomicU8,
}

static INSTANCE: AppLogger = AppLogger {
    color: AtomicU8::new(COLOR_AUTO),
};

const COLOR_AUTO: u8 = 0;
const COLOR_ALWAYS: u8 = 1;
const COLOR_ALWAYS_ANSI: u8 = 2;
const COLOR_NEVER: u8 = 3;

impl AppLogger {
    pub fn init() -> &'static AppLogger {
        log::set_max_level(log::LevelFilter::Warn);
        &INSTANCE
    }

    pub fn instance() -> &'static AppLogger {
        &INSTANCE
    }

    pub fn set_color_choice(&self, choice: ColorChoice) {
        let raw = match choice {
            ColorChoice::Auto => COLOR_AUTO,
            ColorChoice::Always => COLOR_ALWAYS,
            ColorChoice::AlwaysAnsi => COLOR_ALWAYS_ANSI,
            ColorChoice::Never => COLOR_NEVER,
        };
        self.color.store(raw, Ordering::Relaxed);
    }

    pub fn color_choice(&self) -> ColorChoice {
        match self.color.load(Ordering::Relaxed) {
            COLOR_ALWAYS => ColorChoice::Always,
            COLOR_ALWAYS_ANSI => ColorChoice::AlwaysAnsi,
            COLOR_NEVER => ColorChoice::Never,
            _ => ColorChoice::Auto,
        }
    }

    fn write_log(&self, record: &log::Record) -> std::io::Result<()> {
        let (level, color) = match record.level() {
            Level::Error => ("error", Color::Red),
            Level::Warn => ("warning", Color::Yellow),
            Level::Info => ("info", Color::Blue),
            Level::Debug => ("debug", Color::Green),
            Level::Trace => ("trace", Color::Magenta),
        };

        let mut output = StandardStream::stderr(self.color_choice());

        let mut level_color = ColorSpec::new();
        level_color.set_fg(Some(color)).set_bold(true);

        output.set_color(&level_color)?;
        write!(output, "{:>7}(", level)?;
        output.reset()?;
        write!(output, "{}", record.target())?;
        output.set_color(&level_color)?;
        write!(output, "): ")?;
        output.reset()?;
        writeln!(output, "{}", record.args())
    }
}

impl log::Log for AppLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        // write errors (e.g. a closed pipe) are dropped
        let _ = self.write_log(record);
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
        let _ = std::io::stderr().flush();
    }
}
