//! Per-line conversion of shader source into C string literal rows
//!
//! Every physical source line becomes one row of a `GLchar[]` initializer:
//!
//! ```text
//!   " <content><padding> \n"
//! ```
//!
//! The padding is derived from the raw line length (terminator included) so
//! that the closing ` \n"` lands on a fixed column for ordinary `\n`-terminated
//! lines.

/// Column budget the padding is computed against.
pub const PADDING_BUDGET: usize = 83;

/// How the line terminator is removed before wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminatorPolicy {
    /// Drop the last character of every line, terminator or not.
    ///
    /// This matches the headers produced so far: a final line without a
    /// trailing newline loses its last real character.
    #[default]
    DropLastChar,
    /// Remove a trailing `\n` only.
    StripNewline,
}

/// What happens when a raw line is longer than [`PADDING_BUDGET`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Fail with [`LineError::TooLong`].
    #[default]
    Reject,
    /// Emit the row without padding.
    Clamp,
}

/// Knobs for the line transformer. `Default` reproduces the legacy output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderOptions {
    pub terminator: TerminatorPolicy,
    pub overflow: OverflowPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    #[error("line is {length} characters long, the padding budget allows at most {limit}")]
    TooLong { length: usize, limit: usize },
}

/// Split shader text into raw lines, each keeping its `\n` terminator.
///
/// `\r\n` and lone `\r` are read as `\n`, the same way a text-mode reader
/// with universal newlines does. A final line without terminator is kept
/// as is; an empty text has no lines.
pub fn split_raw_lines(text: &str) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    normalized.split_inclusive('\n').map(str::to_owned).collect()
}

/// Convert one raw line into a literal row.
pub fn transform_line(raw: &str, options: &HeaderOptions) -> Result<String, LineError> {
    let length = raw.chars().count();

    let padding = match PADDING_BUDGET.checked_sub(length) {
        Some(padding) => padding,
        None => match options.overflow {
            OverflowPolicy::Reject => {
                return Err(LineError::TooLong {
                    length,
                    limit: PADDING_BUDGET,
                })
            }
            OverflowPolicy::Clamp => 0,
        },
    };

    let content = strip_terminator(raw, options.terminator);

    let mut row = String::with_capacity(content.len() + padding + 10);
    row.push_str("  \" ");
    row.push_str(content);
    row.extend(std::iter::repeat(' ').take(padding));
    row.push_str(" \\n\"");
    Ok(row)
}

fn strip_terminator(raw: &str, policy: TerminatorPolicy) -> &str {
    match policy {
        TerminatorPolicy::DropLastChar => match raw.char_indices().next_back() {
            Some((last, _)) => &raw[..last],
            None => raw,
        },
        TerminatorPolicy::StripNewline => raw.strip_suffix('\n').unwrap_or(raw),
    }
}
