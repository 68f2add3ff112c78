use sentio_core::enums::Sentiment;
use sentio_report::SentimentStyle;

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render a simple aligned table for string rows.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| display_width(cell))
                .max()
                .unwrap_or(0)
                .max(display_width(header))
                .max(6)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| {
            let text = truncate_text(header, *width);
            format_cell(&text, *width, false)
        })
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(display_width(&header_line));

    let row_lines = rows
        .iter()
        .map(|row| {
            widths
                .iter()
                .enumerate()
                .map(|(index, width)| {
                    let value = row.get(index).cloned().unwrap_or_else(|| "-".to_string());
                    let truncated = truncate_text(&value, *width);
                    let numeric = looks_numeric(&truncated);
                    let colored = if options.color {
                        colorize_sentiment(&truncated)
                    } else {
                        truncated
                    };
                    format_cell(&colored, *width, numeric)
                })
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect::<Vec<_>>();

    let mut lines = Vec::with_capacity(2 + row_lines.len());
    lines.push(header_line);
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    if widths.is_empty() {
        return;
    }

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let mut candidate_idx = None;
        let mut candidate_width = 0usize;
        for (idx, width) in widths.iter().enumerate() {
            let min_width = display_width(headers[idx]).max(6);
            if *width > min_width && *width > candidate_width {
                candidate_idx = Some(idx);
                candidate_width = *width;
            }
        }

        let Some(idx) = candidate_idx else {
            break;
        };

        widths[idx] = widths[idx].saturating_sub(1);
        total = widths.iter().sum::<usize>() + separators;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
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

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ','))
}

/// Visible character count, ignoring ANSI colour sequences.
fn display_width(value: &str) -> usize {
    strip_ansi(value).chars().count()
}

fn format_cell(value: &str, width: usize, numeric: bool) -> String {
    let pad = width.saturating_sub(display_width(value));
    if numeric {
        format!("{}{}", " ".repeat(pad), value)
    } else {
        format!("{}{}", value, " ".repeat(pad))
    }
}

/// Colour a cell that holds a sentiment label or badge.
fn colorize_sentiment(value: &str) -> String {
    let style = Sentiment::ALL
        .into_iter()
        .map(SentimentStyle::of)
        .find(|style| value == style.badge() || value.eq_ignore_ascii_case(style.label));

    match style {
        Some(style) => style.paint(value),
        None => value.to_string(),
    }
}

fn strip_ansi(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' && chars.peek() == Some(&'[') {
            let _ = chars.next();
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
            }
            continue;
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn sentiment_cells_are_colored() {
        assert_eq!(colorize_sentiment("▲ Positive"), "\u{1b}[32m▲ Positive\u{1b}[0m");
        assert_eq!(colorize_sentiment("negative"), "\u{1b}[31mnegative\u{1b}[0m");
        assert_eq!(colorize_sentiment("budget"), "budget");
    }

    #[test]
    fn colored_cells_pad_by_visible_width() {
        let cell = format_cell(&colorize_sentiment("neutral"), 10, false);
        assert_eq!(strip_ansi(&cell), "neutral   ");
    }

    #[test]
    fn narrow_terminal_truncates_widest_column() {
        let headers = ["id", "summary"];
        let rows = vec![vec![
            "cmt-1".to_string(),
            "Stakeholder raises concerns: the reporting window is far too short".to_string(),
        ]];
        let table = render_entity_table(
            &headers,
            &rows,
            TableOptions {
                max_width: Some(40),
                color: false,
            },
        );
        for line in table.lines() {
            assert!(line.chars().count() <= 40, "too wide: {line}");
        }
        assert!(table.contains('…'));
    }
}
