//! Line oriented markup
//!
//! Every line of a markup document is a print directive with fixed offsets:
//!
//! ```text
//! bc:Centered bold title
//! ||||
//! |||+- content, printed as is (up to and including the line break)
//! ||+-- separator, ignored
//! |+--- justification: l, c or r
//! +---- style: b (bold), u (underline), i (inverse), f (font B), anything else for none
//! ```
//!
//! Use [Printer::print_markup](crate::Printer::print_markup) to print a document.

use crate::{
    Error,
    command::{Justification, StyleTag}
};

/// Minimum length of a line, without its terminator
const HEADER_LEN: usize = 3;

/// A single parsed line of markup
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkupLine<'a> {
    pub style: StyleTag,
    pub justification: Justification,
    /// Bytes from offset 3 on. Keeps the line terminator, so the printer feeds paper after each line
    pub content: &'a [u8]
}

impl<'a> MarkupLine<'a> {
    /// Parses one line of markup
    ///
    /// ```rust
    /// use escpos_serial::{MarkupLine, Justification, command::StyleTag};
    ///
    /// let line = MarkupLine::parse(b"bc:HI").unwrap();
    /// assert_eq!(StyleTag::Bold, line.style);
    /// assert_eq!(Justification::Center, line.justification);
    /// assert_eq!(b"HI", line.content);
    /// ```
    ///
    /// Lines shorter than 3 characters (not counting the line break) are [MalformedLine](Error::MalformedLine), and unknown justification letters are [InvalidParameter](Error::InvalidParameter).
    pub fn parse(line: &'a [u8]) -> Result<MarkupLine<'a>, Error> {
        if body(line).len() < HEADER_LEN {
            return Err(Error::MalformedLine(String::from_utf8_lossy(body(line)).into_owned()));
        }
        Ok(MarkupLine {
            style: StyleTag::from(line[0]),
            justification: Justification::from_symbol(char::from(line[1]))?,
            content: &line[HEADER_LEN..]
        })
    }
}

/// Splits a document after every line feed, keeping the line feeds
pub fn lines(document: &[u8]) -> impl Iterator<Item = &[u8]> {
    document.split_inclusive(|byte| *byte == b'\n')
}

/// The line without its `\n` or `\r\n` terminator
fn body(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// A line that [print_markup](crate::Printer::print_markup) did not print
#[derive(Debug)]
pub struct SkippedLine {
    /// 1-based position of the line in the document
    pub line_number: usize,
    pub error: Error
}

/// Outcome of printing a markup document
#[derive(Debug, Default)]
pub struct MarkupReport {
    /// Number of lines that reached the printer
    pub printed: usize,
    /// Lines that were left out, nothing of them was sent
    pub skipped: Vec<SkippedLine>
}

impl MarkupReport {
    /// True if every line got printed
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn content_starts_after_the_separator() {
        let line = MarkupLine::parse(b"bl xHELLO").unwrap();
        assert_eq!(Justification::Left, line.justification);
        assert_eq!(b"xHELLO", line.content);
    }

    #[test]
    fn separator_is_never_checked() {
        let line = MarkupLine::parse(b"urXabc").unwrap();
        assert_eq!(StyleTag::Underline, line.style);
        assert_eq!(Justification::Right, line.justification);
        assert_eq!(b"abc", line.content);
    }

    #[test]
    fn content_keeps_the_line_break() {
        let line = MarkupLine::parse(b" c:Total\n").unwrap();
        assert_eq!(StyleTag::Unknown(b' '), line.style);
        assert_eq!(b"Total\n", line.content);
    }

    #[test]
    fn header_only_line_has_empty_content() {
        assert_eq!(b"", MarkupLine::parse(b"il:").unwrap().content);
        assert_eq!(b"\r\n", MarkupLine::parse(b"il:\r\n").unwrap().content);
    }

    #[test]
    fn short_lines_are_malformed() {
        for line in vec![&b""[..], &b"\n"[..], &b"b"[..], &b"bc"[..], &b"bc\n"[..], &b"bc\r\n"[..]] {
            match MarkupLine::parse(line) {
                Err(Error::MalformedLine(_)) => (),
                other => panic!("Unexpected result {:?} for {:?}", other, line)
            }
        }
    }

    #[test]
    fn unknown_justification() {
        match MarkupLine::parse(b"bx:HI") {
            Err(Error::InvalidParameter{name, ..}) => assert_eq!("justification", name),
            other => panic!("Unexpected result {:?}", other)
        }
    }

    #[test]
    fn lines_keep_terminators() {
        let split: Vec<&[u8]> = lines(b"bl:one\n\ncr:two").collect();
        assert_eq!(vec![&b"bl:one\n"[..], &b"\n"[..], &b"cr:two"[..]], split);
    }
}
