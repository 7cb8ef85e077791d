use std::io::IsTerminal;

use crate::cli::{ColorMode, GlobalFlags};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN: usize = 4;
const MIN_TERM_WIDTH: usize = 40;

impl TableOptions {
    /// Options for this invocation: `--color`, stdout's terminal state,
    /// `NO_COLOR` and `COLUMNS`.
    #[must_use]
    pub fn for_flags(flags: &GlobalFlags) -> Self {
        let columns = std::env::var("COLUMNS").ok();
        Self::resolve(
            flags.color,
            flags.quiet,
            std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
            columns.as_deref(),
        )
    }

    fn resolve(mode: ColorMode, quiet: bool, color_capable: bool, columns: Option<&str>) -> Self {
        let color = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => color_capable && !quiet,
        };
        let max_width = columns
            .and_then(|value| value.trim().parse::<usize>().ok())
            .filter(|width| *width >= MIN_TERM_WIDTH);
        Self { max_width, color }
    }
}

/// Render an aligned, plain-text table. Missing cells print as `-`.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.chars().count())
        })
        .collect();

    shrink_to_fit(&mut widths, options.max_width);

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&truncate(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string();

    let divider = "-".repeat(widths.iter().sum::<usize>() + widths.len().saturating_sub(1) * 2);

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let text = truncate(value, *width);
                let padded = pad(&text, *width, is_numeric(&text));
                if options.color {
                    colorize(&padded, &text)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

/// Narrow the widest column one step at a time until the table fits.
fn shrink_to_fit(widths: &mut [usize], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let separators = widths.len().saturating_sub(1) * 2;
    while widths.iter().sum::<usize>() + separators > max_width {
        let Some((idx, _)) = widths
            .iter()
            .enumerate()
            .filter(|(_, width)| **width > MIN_COLUMN)
            .max_by_key(|(_, width)| **width)
        else {
            break;
        };
        widths[idx] -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|ch| ch.is_ascii_digit())
}

/// Color publication statuses; everything else passes through.
fn colorize(padded: &str, text: &str) -> String {
    let code = match text {
        "accepted" => "32",
        "submitted" => "33",
        "draft" => "36",
        _ => return padded.to_string(),
    };
    padded.replacen(text, &format!("\u{1b}[{code}m{text}\u{1b}[0m"), 1)
}
