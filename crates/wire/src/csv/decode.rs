//! Row decoding for the delimited roster format
//!
//! [`RowReader`] walks the input once and yields one item per record:
//! either the decoded fields or a [`RowError`] naming the line the record
//! started on. A bad row never ends the walk; the reader resynchronizes at
//! the next physical line and carries on.
//!
//! Misplaced quotes are tolerated: the row is still produced, with the
//! quote characters kept as data, and [`Row::bad_data`] records what was
//! wrong. Only a quoted field left open at end of input loses its row.

use std::borrow::Cow;
use thiserror::Error;

/// What went wrong inside a single row
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowErrorKind {
    /// Input ended inside a quoted field
    #[error("unterminated quoted field")]
    UnterminatedQuote,

    /// A quote appeared inside an unquoted field
    #[error("unexpected quote in field {0}")]
    StrayQuote(usize),

    /// Characters between a closing quote and the next delimiter
    #[error("unexpected text after closing quote in field {0}")]
    TextAfterQuote(usize),
}

/// A row the reader could not split into fields
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}: {raw}")]
pub struct RowError {
    /// 1-based line the row started on
    pub line: usize,
    /// Diagnosis
    pub kind: RowErrorKind,
    /// Raw text of the offending row, line terminator stripped
    pub raw: String,
}

/// One decoded row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// 1-based line the row started on
    pub line: usize,
    /// Unescaped field values, untrimmed
    pub fields: Vec<String>,
    /// First quoting problem found in the row, if any
    pub bad_data: Option<RowError>,
}

impl Row {
    /// Field at `index`, if present
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }
}

/// Decode every row in `input`
pub fn decode_rows(input: &str) -> RowReader<'_> {
    RowReader::new(input)
}

/// Turn raw file bytes into text, one physical line at a time.
///
/// Invalid UTF-8 is replaced with U+FFFD. The second value lists the 1-based
/// lines where a replacement happened; it is empty for valid input, which
/// is borrowed unchanged.
pub fn decode_text(bytes: &[u8]) -> (Cow<'_, str>, Vec<usize>) {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return (Cow::Borrowed(text), Vec::new());
    }

    let mut text = String::with_capacity(bytes.len());
    let mut replaced = Vec::new();
    for (index, line) in bytes.split_inclusive(|b| *b == b'\n').enumerate() {
        match String::from_utf8_lossy(line) {
            Cow::Borrowed(valid) => text.push_str(valid),
            Cow::Owned(fixed) => {
                replaced.push(index + 1);
                text.push_str(&fixed);
            }
        }
    }
    (Cow::Owned(text), replaced)
}

/// Streaming row decoder over an in-memory document.
///
/// - Fields are separated by `,`; rows end at `\n` or `\r\n`.
/// - A field that starts with `"` is quoted: it runs to the next lone `"`,
///   `""` stands for one quote, and delimiters and line breaks inside are data.
/// - Empty lines are skipped and produce nothing.
pub struct RowReader<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> RowReader<'a> {
    /// Start reading at the beginning of `input`
    pub fn new(input: &'a str) -> Self {
        RowReader {
            input,
            pos: 0,
            line: 1,
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    /// Consume a line terminator at the cursor, if there is one
    fn eat_line_end(&mut self) -> bool {
        let rest = &self.input[self.pos..];
        let width = if rest.starts_with("\r\n") {
            2
        } else if rest.starts_with('\n') {
            1
        } else {
            return false;
        };
        self.pos += width;
        self.line += 1;
        true
    }

    fn at_row_end(&self) -> bool {
        let rest = &self.input[self.pos..];
        rest.is_empty() || rest.starts_with('\n') || rest.starts_with("\r\n")
    }

    fn fail(&self, line: usize, start: usize, kind: RowErrorKind) -> RowError {
        let raw = self.input[start..self.pos].trim_end_matches(['\r', '\n']);
        RowError {
            line,
            kind,
            raw: raw.to_string(),
        }
    }

    fn read_row(&mut self) -> Result<Row, RowError> {
        let line = self.line;
        let start = self.pos;
        let mut fields = Vec::new();
        let mut bad: Option<RowErrorKind> = None;

        loop {
            let index = fields.len();
            let (value, issue) = if self.peek() == Some('"') {
                self.read_quoted(line, start, index)?
            } else {
                self.read_plain(index)
            };
            fields.push(value);
            if bad.is_none() {
                bad = issue;
            }

            if self.peek() == Some(',') {
                self.advance();
                continue;
            }
            let bad_data = bad.map(|kind| self.fail(line, start, kind));
            self.eat_line_end();
            return Ok(Row {
                line,
                fields,
                bad_data,
            });
        }
    }

    /// Quoted field starting at the cursor. Text after the closing quote is
    /// kept, along with the quotes, as the literal field text.
    fn read_quoted(
        &mut self,
        line: usize,
        start: usize,
        index: usize,
    ) -> Result<(String, Option<RowErrorKind>), RowError> {
        let field_start = self.pos;
        self.advance();
        let mut value = String::new();
        loop {
            match self.peek() {
                None => return Err(self.fail(line, start, RowErrorKind::UnterminatedQuote)),
                Some('"') => {
                    self.advance();
                    if self.peek() == Some('"') {
                        self.advance();
                        value.push('"');
                    } else {
                        break;
                    }
                }
                Some('\n') => {
                    self.advance();
                    self.line += 1;
                    value.push('\n');
                }
                Some(c) => {
                    self.advance();
                    value.push(c);
                }
            }
        }

        if self.peek() == Some(',') || self.at_row_end() {
            return Ok((value, None));
        }
        self.skip_field();
        let literal = self.input[field_start..self.pos].to_string();
        Ok((literal, Some(RowErrorKind::TextAfterQuote(index))))
    }

    /// Unquoted field starting at the cursor; quotes inside are data
    fn read_plain(&mut self, index: usize) -> (String, Option<RowErrorKind>) {
        let begin = self.pos;
        let mut issue = None;
        while !self.at_row_end() && self.peek() != Some(',') {
            if issue.is_none() && self.peek() == Some('"') {
                issue = Some(RowErrorKind::StrayQuote(index));
            }
            self.advance();
        }
        (self.input[begin..self.pos].to_string(), issue)
    }

    /// Advance to the next delimiter or row end
    fn skip_field(&mut self) {
        while !self.at_row_end() && self.peek() != Some(',') {
            self.advance();
        }
    }
}

impl Iterator for RowReader<'_> {
    type Item = Result<Row, RowError>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.input.len() {
            if self.eat_line_end() {
                continue;
            }
            return Some(self.read_row());
        }
        None
    }
}
