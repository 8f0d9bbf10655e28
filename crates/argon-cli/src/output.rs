//! Run report written to stdout.
//!
//! Every report line goes through [`OutputManager`], so `--quiet` silences the
//! whole report at once. Warnings go to stderr and are printed even under
//! `--quiet`. Failures are printed by `main` on stderr too.

use std::io;
use std::path::Path;

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::GlobalArgs;

/// Leading symbol of a report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    /// `✓` in green.
    Done,
    /// `ℹ` in blue.
    Note,
    /// `⚠` in yellow.
    Warning,
}

impl Mark {
    const fn symbol(self) -> &'static str {
        match self {
            Self::Done => "\u{2713}",
            Self::Note => "\u{2139}",
            Self::Warning => "\u{26a0}",
        }
    }
}

pub struct OutputManager {
    quiet: bool,
    plain: bool,
    term: Term,
    errors: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs) -> Self {
        let term = Term::stdout();
        Self {
            quiet: args.quiet,
            plain: args.no_color || !term.features().colors_supported(),
            term,
            errors: Term::stderr(),
        }
    }

    /// Green confirmation, e.g. the "has been created!" line.
    pub fn done(&self, msg: &str) -> io::Result<()> {
        self.emit(|| self.marked(Mark::Done, msg))
    }

    /// Blue side note, e.g. the bundle a component was registered in.
    pub fn note(&self, msg: &str) -> io::Result<()> {
        self.emit(|| self.marked(Mark::Note, msg))
    }

    /// Yellow line on stderr, ignoring `--quiet`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.errors.write_line(&self.marked(Mark::Warning, msg))
    }

    /// Indented path of a written file.
    pub fn file(&self, path: &Path) -> io::Result<()> {
        self.emit(|| format!("  {}", path.display()))
    }

    fn emit(&self, line: impl FnOnce() -> String) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&line())
    }

    fn marked(&self, mark: Mark, msg: &str) -> String {
        if self.plain {
            return format!("{} {msg}", mark.symbol());
        }
        match mark {
            Mark::Done => format!("{} {}", mark.symbol().green().bold(), msg.green().bold()),
            Mark::Note => format!("{} {}", mark.symbol().blue().bold(), msg.blue()),
            Mark::Warning => format!("{} {}", mark.symbol().yellow().bold(), msg.yellow()),
        }
    }
}
