use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{GlobalFlags, OutputFormat};

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub table_color: bool,
    pub progress: bool,
    pub term_width: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let _ = UI_PREFS.set(detect(flags, std::io::stdout().is_terminal()));
}

fn detect(flags: &GlobalFlags, is_tty: bool) -> UiPrefs {
    let table_color = is_tty
        && flags.format == OutputFormat::Table
        && !flags.quiet
        && std::env::var_os("NO_COLOR").is_none();

    // The spinner draws on stderr, so it stays out of piped JSON.
    let progress = std::io::stderr().is_terminal() && !flags.quiet;

    let term_width = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40);

    UiPrefs {
        table_color,
        progress,
        term_width,
    }
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs {
        table_color: false,
        progress: false,
        term_width: None,
    })
}

#[cfg(test)]
mod tests {
    use super::detect;
    use crate::cli::{GlobalFlags, OutputFormat};

    #[test]
    fn color_needs_a_terminal_and_table_output() {
        let table = GlobalFlags {
            format: OutputFormat::Table,
            quiet: false,
        };
        let json = GlobalFlags {
            format: OutputFormat::Json,
            quiet: false,
        };
        assert!(!detect(&table, false).table_color);
        assert!(!detect(&json, true).table_color);
    }

    #[test]
    fn quiet_disables_progress() {
        let flags = GlobalFlags {
            format: OutputFormat::Table,
            quiet: true,
        };
        assert!(!detect(&flags, true).progress);
    }
}
