use std::io;
use termcolor::{Color, ColorSpec, WriteColor};

/// Prints a table with one row per loop state, headed by `pow(base, exp):`.
/// Rows are written as the loop is replayed; only the column widths are
/// measured up front.
pub fn print_steps(out: &mut dyn WriteColor, base: i32, exp: i32) -> io::Result<()> {
    let space_sm = Spacing(2);
    let space_lg = Spacing(4);

    let steps = iter_power::steps(base, exp);
    let max_index = decimal_width(exp.max(0) as i64);
    let max_accum = steps
        .clone()
        .map(|s| decimal_width(s.accumulator as i64))
        .max()
        .unwrap_or(1);

    let clr_norm = ColorSpec::new(); // normal color

    let mut clr_index = ColorSpec::new(); // step index color
    clr_index.set_fg(Some(Color::Blue));

    let mut clr_accum = ColorSpec::new(); // accumulator color
    clr_accum.set_fg(Some(Color::Green));
    clr_accum.set_bold(true);

    let mut clr_remain = ColorSpec::new(); // remaining exponent color
    clr_remain.set_fg(Some(Color::Yellow));

    out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
    writeln!(out, "pow({}, {}):", base, exp)?;
    out.set_color(&clr_norm)?;

    for step in steps {
        write!(out, "{}", space_sm)?;

        out.set_color(&clr_index)?;
        write!(out, "{:>1$}", step.index, max_index)?;

        out.set_color(&clr_norm)?;
        write!(out, "{}", space_lg)?;

        out.set_color(&clr_accum)?;
        write!(out, "{:>1$}", step.accumulator, max_accum)?;

        out.set_color(&clr_norm)?;
        write!(out, "{}", space_lg)?;

        out.set_color(&clr_remain)?;
        write!(out, "; remaining {}", step.remaining)?;

        out.set_color(&clr_norm)?;
        writeln!(out)?;
    }

    out.reset()
}

pub fn print_result(out: &mut dyn WriteColor, result: i32) -> io::Result<()> {
    writeln!(out, "{}", result)?;
    out.flush()
}

fn decimal_width(n: i64) -> usize {
    let mut digits = 1;
    let mut rest = n.abs() / 10;
    while rest > 0 {
        digits += 1;
        rest /= 10;
    }
    if n < 0 {
        digits + 1
    } else {
        digits
    }
}

pub struct Spacing(usize);

impl std::fmt::Display for Spacing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut spacing = self.0;

        while spacing > 0 {
            if spacing >= 8 {
                f.write_str("        ")?;
                spacing -= 8;
            } else if spacing >= 4 {
                f.write_str("    ")?;
                spacing -= 4;
            } else if spacing >= 2 {
                f.write_str("  ")?;
                spacing -= 2;
            } else {
                f.write_str(" ")?;
                spacing -= 1;
            }
        }

        Ok(())
    }
}
