use crate::atomic::Atomic;
use std::borrow::Cow;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub struct ReadablePosition {
    pub line: usize,
    pub offset: usize,
}

/// A snapshot of a position in the source, kept alongside every error so the
/// offending location can be rendered with a caret after the parse is over.
#[derive(Debug, Copy, Clone)]
pub struct CodeLoc<'src, T: Atomic = u8> {
    source: &'src [T],
    position: usize,
}

impl<'src, T: Atomic> CodeLoc<'src, T> {
    pub fn new(source: &'src [T], position: usize) -> Self {
        Self { source, position }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of elements left after this location. Multi-error ranking uses
    /// this: more remaining input means less was consumed before failing.
    pub fn remaining(&self) -> usize {
        self.source.len().saturating_sub(self.position)
    }

    /// Calculate line number and element offset within that line
    ///
    /// Note: We return element offset instead of column number because column
    /// calculation depends on encoding, tab rendering and terminal width.
    /// Element offset within the line is unambiguous and useful for debugging.
    fn readable_position(&self) -> ReadablePosition {
        let mut line = 1;
        let mut line_start = 0;

        for (i, &element) in self.source.iter().enumerate() {
            if i >= self.position {
                break;
            }
            if element == T::NEWLINE {
                line += 1;
                line_start = i + 1;
            }
        }

        let offset = self.position - line_start;
        ReadablePosition { line, offset }
    }

    /// Get lines of context around the error position
    /// Returns up to 2 lines before and after the error line
    fn context_lines(&self) -> Vec<String> {
        let pos = self.readable_position();
        let mut lines = Vec::new();
        let mut current_line = 1;
        let mut line_start = 0;

        let text = T::format_slice(self.source);

        for (i, ch) in text.char_indices() {
            if ch == '\n' {
                if current_line >= pos.line.saturating_sub(2) && current_line <= pos.line + 2 {
                    let line_content = &text[line_start..i];
                    let prefix = if current_line == pos.line {
                        format!("  > {} | ", current_line)
                    } else {
                        format!("    {} | ", current_line)
                    };
                    lines.push(format!("{}{}", prefix, line_content));

                    if current_line == pos.line {
                        let pointer_offset = prefix.len() + pos.offset;
                        let pointer = format!("{}^--- here", " ".repeat(pointer_offset));
                        lines.push(pointer);
                    }
                }

                current_line += 1;
                line_start = i + 1;
            }
        }

        // Handle last line if no trailing newline
        if line_start < text.len()
            && current_line >= pos.line.saturating_sub(2)
            && current_line <= pos.line + 2
        {
            let line_content = &text[line_start..];
            let prefix = if current_line == pos.line {
                format!("  > {} | ", current_line)
            } else {
                format!("    {} | ", current_line)
            };
            lines.push(format!("{}{}", prefix, line_content));

            if current_line == pos.line {
                let pointer_offset = prefix.len() + pos.offset;
                let pointer = format!("{}^--- here", " ".repeat(pointer_offset));
                lines.push(pointer);
            }
        }

        lines
    }

    fn write_pointer(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for line in self.context_lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// A region of the source between two positions, used by errors that span the
/// consumed portion of a failed leaf parse (overflow, bad conversion).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'src, T: Atomic = u8> {
    pub source: &'src [T],
    /// Start position (inclusive)
    pub start: usize,
    /// End position (exclusive)
    pub end: usize,
}

impl<'src, T: Atomic> Span<'src, T> {
    pub fn new(source: &'src [T], start: usize, end: usize) -> Self {
        Span { source, start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn slice(&self) -> &'src [T] {
        &self.source[self.start..self.end]
    }

    pub fn as_string(&self) -> String {
        T::format_slice(self.slice())
    }

    pub fn start_loc(&self) -> CodeLoc<'src, T> {
        CodeLoc::new(self.source, self.start)
    }
}

/// Parse-time failure. The three shapes mirror how combinators fail: a leaf
/// expected something specific, a leaf consumed input and then rejected it,
/// or every branch of an alternation failed.
#[derive(Debug)]
pub enum ParseError<'src, T: Atomic = u8> {
    Expected {
        description: Cow<'static, str>,
        loc: CodeLoc<'src, T>,
    },
    Failed {
        summary: Cow<'static, str>,
        label: Cow<'static, str>,
        span: Span<'src, T>,
    },
    Many {
        errors: Vec<ParseError<'src, T>>,
        loc: CodeLoc<'src, T>,
    },
}

impl<'src, T: Atomic> ParseError<'src, T> {
    pub fn expected(description: impl Into<Cow<'static, str>>, loc: CodeLoc<'src, T>) -> Self {
        ParseError::Expected {
            description: description.into(),
            loc,
        }
    }

    pub fn failed(
        summary: impl Into<Cow<'static, str>>,
        label: impl Into<Cow<'static, str>>,
        span: Span<'src, T>,
    ) -> Self {
        ParseError::Failed {
            summary: summary.into(),
            label: label.into(),
            span,
        }
    }

    pub fn many(errors: Vec<ParseError<'src, T>>, loc: CodeLoc<'src, T>) -> Self {
        ParseError::Many { errors, loc }
    }

    /// Returns the location where this error occurred. For multi-errors this
    /// is the pre-attempt position of the alternation that produced them.
    pub fn loc(&self) -> CodeLoc<'src, T> {
        match self {
            ParseError::Expected { loc, .. } => *loc,
            ParseError::Failed { span, .. } => span.start_loc(),
            ParseError::Many { loc, .. } => *loc,
        }
    }

    pub fn position(&self) -> usize {
        self.loc().position()
    }

    /// Depth-first flattening of nested multi-errors into a single list,
    /// ordered so that the entry with the most remaining input (the least
    /// consumed, "deepest" partial success) comes first.
    fn flat_entries(&self) -> Vec<&ParseError<'src, T>> {
        fn collect<'a, 'src, T: Atomic>(
            error: &'a ParseError<'src, T>,
            into: &mut Vec<&'a ParseError<'src, T>>,
        ) {
            match error {
                ParseError::Many { errors, .. } => {
                    for e in errors {
                        collect(e, into);
                    }
                }
                leaf => into.push(leaf),
            }
        }

        let mut entries = Vec::new();
        collect(self, &mut entries);
        entries.sort_by(|a, b| b.loc().remaining().cmp(&a.loc().remaining()));
        entries
    }
}

impl<'src, T: Atomic> fmt::Display for ParseError<'src, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Expected { description, loc } => {
                let pos = loc.readable_position();
                writeln!(
                    f,
                    "error at line {}, offset {}: expected {}",
                    pos.line, pos.offset, description
                )?;
                loc.write_pointer(f)
            }
            ParseError::Failed {
                summary,
                label,
                span,
            } => {
                let loc = span.start_loc();
                let pos = loc.readable_position();
                writeln!(
                    f,
                    "error at line {}, offset {}: {} ({})",
                    pos.line, pos.offset, summary, label
                )?;
                loc.write_pointer(f)
            }
            ParseError::Many { errors, loc } => {
                let entries = self.flat_entries();
                match entries.as_slice() {
                    [] => {
                        let pos = loc.readable_position();
                        writeln!(
                            f,
                            "error at line {}, offset {}: no branch matched",
                            pos.line, pos.offset
                        )?;
                        loc.write_pointer(f)
                    }
                    [single] => write!(f, "{}", single),
                    _ => {
                        debug_assert!(!errors.is_empty());
                        writeln!(f, "error: multiple failures occurred")?;
                        for entry in entries {
                            writeln!(f)?;
                            write!(f, "{}", entry)?;
                        }
                        Ok(())
                    }
                }
            }
        }
    }
}

impl<'src, T: Atomic> Error for ParseError<'src, T> {}

/// Print-time failure. Deliberately a separate taxonomy from [`ParseError`]:
/// a failure to re-emit a value is never reinterpreted as a parse failure.
///
/// `pending` records how many elements had already been assembled into the
/// print cursor when the failure happened; ranking prefers the attempt that
/// got furthest.
#[derive(Debug)]
pub enum PrintError {
    Failed {
        summary: Cow<'static, str>,
        label: Cow<'static, str>,
        pending: usize,
    },
    Many {
        errors: Vec<PrintError>,
        pending: usize,
    },
}

impl PrintError {
    pub fn failed(
        summary: impl Into<Cow<'static, str>>,
        label: impl Into<Cow<'static, str>>,
        pending: usize,
    ) -> Self {
        PrintError::Failed {
            summary: summary.into(),
            label: label.into(),
            pending,
        }
    }

    pub fn many(errors: Vec<PrintError>, pending: usize) -> Self {
        PrintError::Many { errors, pending }
    }

    pub fn pending(&self) -> usize {
        match self {
            PrintError::Failed { pending, .. } | PrintError::Many { pending, .. } => *pending,
        }
    }

    fn flat_entries(&self) -> Vec<&PrintError> {
        fn collect<'a>(error: &'a PrintError, into: &mut Vec<&'a PrintError>) {
            match error {
                PrintError::Many { errors, .. } => {
                    for e in errors {
                        collect(e, into);
                    }
                }
                leaf => into.push(leaf),
            }
        }

        let mut entries = Vec::new();
        collect(self, &mut entries);
        entries.sort_by(|a, b| b.pending().cmp(&a.pending()));
        entries
    }
}

impl fmt::Display for PrintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrintError::Failed {
                summary,
                label,
                pending,
            } => {
                if label.is_empty() {
                    write!(f, "print error: {} ({} elements pending)", summary, pending)
                } else {
                    write!(
                        f,
                        "print error: {} ({}; {} elements pending)",
                        summary, label, pending
                    )
                }
            }
            PrintError::Many { .. } => {
                let entries = self.flat_entries();
                match entries.as_slice() {
                    [] => write!(f, "print error: no branch matched"),
                    [single] => write!(f, "{}", single),
                    _ => {
                        writeln!(f, "print error: multiple failures occurred")?;
                        for entry in entries {
                            writeln!(f)?;
                            write!(f, "{}", entry)?;
                        }
                        Ok(())
                    }
                }
            }
        }
    }
}

impl Error for PrintError {}

/// Failure of one leg of a [`Conversion`](crate::convert::Conversion).
#[derive(Debug, thiserror::Error)]
#[error("conversion failed: {message}")]
pub struct ConvertError {
    message: Cow<'static, str>,
}

impl ConvertError {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
