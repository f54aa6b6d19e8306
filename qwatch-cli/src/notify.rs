//! User notifications
//!
//! Errors and one-off messages are shown through a [`Notifier`] picked once
//! at startup. On a colour-capable terminal the rich variant renders them;
//! otherwise the plain variant hands errors back to the caller and reports
//! messages as not shown, leaving the fallback to the caller.

use std::io::{self, IsTerminal, Write};

use colored::Colorize;

/// Output capabilities resolved once during startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Styled, multi-line notifications can be shown
    pub rich_output: bool,
}

impl Capabilities {
    /// Detects capabilities of the current process
    ///
    /// Rich output needs stderr to be a terminal and `NO_COLOR` to be unset.
    pub fn detect(force_plain: bool) -> Self {
        Self::resolve(
            force_plain,
            io::stderr().is_terminal(),
            std::env::var_os("NO_COLOR").is_some(),
        )
    }

    fn resolve(force_plain: bool, is_terminal: bool, no_color: bool) -> Self {
        Self {
            rich_output: !force_plain && is_terminal && !no_color,
        }
    }
}

/// Kind of a user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
}

/// Renders errors and messages with colour and symbols
#[derive(Debug, Default)]
pub struct RichNotifier;

/// Leaves errors and messages to the caller
#[derive(Debug, Default)]
pub struct PlainNotifier;

/// Notification strategy
#[derive(Debug)]
pub enum Notifier {
    Rich(RichNotifier),
    Plain(PlainNotifier),
}

impl Notifier {
    /// Picks the strategy matching `caps`
    pub fn from_capabilities(caps: Capabilities) -> Self {
        if caps.rich_output {
            Notifier::Rich(RichNotifier)
        } else {
            Notifier::Plain(PlainNotifier)
        }
    }

    /// Shows `err` if possible
    ///
    /// The rich notifier prints the error with its causes and consumes it.
    /// The plain notifier returns it unchanged for the caller to propagate.
    pub fn raise_pretty<W: Write>(&self, err: anyhow::Error, out: &mut W) -> anyhow::Result<()> {
        match self {
            Notifier::Rich(rich) => {
                rich.render_error(&err, out)?;
                Ok(())
            }
            Notifier::Plain(_) => Err(err),
        }
    }

    /// Shows `msg` if possible, returning whether it was shown
    pub fn message_pretty<W: Write>(
        &self,
        msg: &str,
        kind: MessageKind,
        out: &mut W,
    ) -> io::Result<bool> {
        match self {
            Notifier::Rich(rich) => {
                rich.render_message(msg, kind, out)?;
                Ok(true)
            }
            Notifier::Plain(_) => Ok(false),
        }
    }
}

impl RichNotifier {
    fn render_error<W: Write>(&self, err: &anyhow::Error, out: &mut W) -> io::Result<()> {
        writeln!(out, "{} {}", "✗ Error:".red().bold(), err)?;
        for cause in err.chain().skip(1) {
            writeln!(out, "  {} {}", "caused by:".dimmed(), cause)?;
        }
        out.flush()
    }

    fn render_message<W: Write>(&self, msg: &str, kind: MessageKind, out: &mut W) -> io::Result<()> {
        let symbol = match kind {
            MessageKind::Info => "ℹ".cyan(),
            MessageKind::Success => "✓".green(),
            MessageKind::Warning => "⚠".yellow(),
        };
        writeln!(out, "{} {}", symbol, msg)?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_capabilities_resolution() {
        assert!(Capabilities::resolve(false, true, false).rich_output);
        assert!(!Capabilities::resolve(true, true, false).rich_output);
        assert!(!Capabilities::resolve(false, false, false).rich_output);
        assert!(!Capabilities::resolve(false, true, true).rich_output);
    }

    #[test]
    fn test_strategy_selection() {
        let rich = Notifier::from_capabilities(Capabilities { rich_output: true });
        let plain = Notifier::from_capabilities(Capabilities { rich_output: false });
        assert!(matches!(rich, Notifier::Rich(_)));
        assert!(matches!(plain, Notifier::Plain(_)));
    }

    #[test]
    fn test_rich_consumes_error() {
        let notifier = Notifier::Rich(RichNotifier);
        let err = Err::<(), _>(anyhow::anyhow!("connection refused"))
            .context("Failed to fetch job")
            .unwrap_err();

        let mut out = Vec::new();
        notifier.raise_pretty(err, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Failed to fetch job"));
        assert!(text.contains("connection refused"));
    }

    #[test]
    fn test_plain_returns_error() {
        let notifier = Notifier::Plain(PlainNotifier);
        let mut out = Vec::new();

        let err = notifier
            .raise_pretty(anyhow::anyhow!("boom"), &mut out)
            .unwrap_err();

        assert_eq!(err.to_string(), "boom");
        assert!(out.is_empty());
    }

    #[test]
    fn test_message_pretty() {
        let mut out = Vec::new();

        let shown = Notifier::Rich(RichNotifier)
            .message_pretty("Job finished", MessageKind::Success, &mut out)
            .unwrap();
        assert!(shown);
        assert!(String::from_utf8(out).unwrap().contains("Job finished"));

        let mut out = Vec::new();
        let shown = Notifier::Plain(PlainNotifier)
            .message_pretty("Job finished", MessageKind::Success, &mut out)
            .unwrap();
        assert!(!shown);
        assert!(out.is_empty());
    }
}
