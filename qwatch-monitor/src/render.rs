//! Single-line status rendering
//!
//! The status line is redrawn in place with a carriage return, so a message
//! must never be shorter than the one it overwrites.

use std::io::{self, Write};

/// Label printed in front of every status message
pub const LABEL: &str = "Job Status";

/// Redraws the status line with `msg`
pub fn draw<W: Write + ?Sized>(out: &mut W, msg: &str) -> io::Result<()> {
    write!(out, "\r{}: {}", LABEL, msg)?;
    out.flush()
}

/// Ends the status line so later output starts on a fresh line
pub fn finish<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    out.flush()
}

/// Pads `msg` to the longest message drawn so far
///
/// `max_len` tracks that length in characters and grows when `msg` is longer.
pub fn pad(mut msg: String, max_len: &mut usize) -> String {
    let len = msg.chars().count();

    if len < *max_len {
        msg.extend(std::iter::repeat_n(' ', *max_len - len));
    } else {
        *max_len = len;
    }

    msg
}
