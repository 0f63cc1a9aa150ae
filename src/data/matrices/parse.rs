use super::MatrixError;

/// The alphabet and row-major scores read from an NCBI-format matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParsedMatrix {
    pub(crate) alphabet: Vec<u8>,
    pub(crate) scores:   Vec<i32>,
}

/// A line-oriented parser for substitution matrices in the NCBI format used
/// by BLAST and EMBOSS.
///
/// Lines whose first non-blank character is `#` and blank lines are ignored.
/// The first remaining line lists the alphabet as whitespace-separated single
/// characters. Each following line holds one row of integer scores, optionally
/// preceded by a row label, which must then match the alphabet order.
pub(crate) struct MatParser<'a> {
    lines: std::iter::Enumerate<std::slice::Split<'a, u8, fn(&u8) -> bool>>,
}

impl<'a> MatParser<'a> {
    /// Creates a new [`MatParser`] from the provided bytes.
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        let is_newline: fn(&u8) -> bool = |b| *b == b'\n';
        Self {
            lines: bytes.split(is_newline).enumerate(),
        }
    }

    /// Yields the next line with content, along with its line number counted
    /// from 1. Trailing `\r` is removed.
    fn next_content_line(&mut self) -> Option<(usize, &'a [u8])> {
        for (i, line) in self.lines.by_ref() {
            let line = line.trim_ascii();
            if line.is_empty() || line.starts_with(b"#") {
                continue;
            }
            return Some((i + 1, line));
        }
        None
    }

    fn error(line: usize, reason: impl Into<String>) -> MatrixError {
        MatrixError::Parse {
            line,
            reason: reason.into(),
        }
    }

    /// Parses the alphabet line: whitespace-separated single characters.
    fn parse_alphabet_line(line_number: usize, line: &[u8]) -> Result<Vec<u8>, MatrixError> {
        let mut alphabet = Vec::new();
        for token in line.split(u8::is_ascii_whitespace).filter(|t| !t.is_empty()) {
            match token {
                [symbol] if symbol.is_ascii_graphic() => alphabet.push(*symbol),
                _ => {
                    return Err(Self::error(
                        line_number,
                        format!(
                            "alphabet entries must be single characters, found '{t}'",
                            t = token.escape_ascii()
                        ),
                    ));
                }
            }
        }
        Ok(alphabet)
    }

    /// Parses a whitespace-separated integer.
    fn parse_score(line_number: usize, token: &[u8]) -> Result<i32, MatrixError> {
        std::str::from_utf8(token)
            .ok()
            .and_then(|s| s.parse::<i32>().ok())
            .ok_or_else(|| Self::error(line_number, format!("'{t}' is not an integer score", t = token.escape_ascii())))
    }

    /// Parses one row of `size` scores, checking the row label if present.
    fn parse_row(line_number: usize, line: &[u8], label: u8, size: usize) -> Result<Vec<i32>, MatrixError> {
        let mut tokens = line.split(u8::is_ascii_whitespace).filter(|t| !t.is_empty()).peekable();

        if let Some(first) = tokens.peek()
            && Self::parse_score(line_number, first).is_err()
        {
            if **first != [label] {
                return Err(Self::error(
                    line_number,
                    format!(
                        "expected the row label '{label}' but found '{found}'; row labels must follow the alphabet order",
                        label = label.escape_ascii(),
                        found = first.escape_ascii()
                    ),
                ));
            }
            tokens.next();
        }

        let mut row = Vec::with_capacity(size);
        for token in tokens {
            if row.len() == size {
                return Err(Self::error(line_number, format!("too many values in row; expected {size}")));
            }
            row.push(Self::parse_score(line_number, token)?);
        }

        if row.len() < size {
            return Err(Self::error(
                line_number,
                format!("too few values in row; expected {size} but found {found}", found = row.len()),
            ));
        }

        Ok(row)
    }

    /// Parses the full matrix: the alphabet line followed by one row per
    /// symbol. Any content after the last row is an error.
    pub(crate) fn parse_matrix(mut self) -> Result<ParsedMatrix, MatrixError> {
        let Some((line_number, line)) = self.next_content_line() else {
            return Err(Self::error(1, "no alphabet line was found"));
        };

        let alphabet = Self::parse_alphabet_line(line_number, line)?;
        if alphabet.is_empty() {
            return Err(MatrixError::EmptyAlphabet);
        }

        let size = alphabet.len();
        let mut scores = Vec::with_capacity(size * size);
        let mut last_line = line_number;

        for &label in &alphabet {
            let Some((line_number, line)) = self.next_content_line() else {
                return Err(Self::error(
                    last_line + 1,
                    format!("expected {size} rows but the input ended early"),
                ));
            };

            scores.extend(Self::parse_row(line_number, line, label, size)?);
            last_line = line_number;
        }

        if let Some((line_number, _)) = self.next_content_line() {
            return Err(Self::error(line_number, format!("unexpected content after the {size} matrix rows")));
        }

        Ok(ParsedMatrix { alphabet, scores })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const SMALL: &[u8] = b"# a comment\n#another\n   A  C  G\nA  2 -1 -1\nC -1  2 -1\r\nG -1 -1  2\n\n";

    #[test]
    fn parses_labeled_rows() {
        let parsed = MatParser::new(SMALL).parse_matrix().unwrap();
        assert_eq!(parsed.alphabet, b"ACG");
        assert_eq!(parsed.scores, vec![2, -1, -1, -1, 2, -1, -1, -1, 2]);
    }

    #[test]
    fn parses_unlabeled_rows() {
        let parsed = MatParser::new(b"A C\n5 -4\n-4 5").parse_matrix().unwrap();
        assert_eq!(parsed.alphabet, b"AC");
        assert_eq!(parsed.scores, vec![5, -4, -4, 5]);
    }

    #[test]
    fn reports_line_numbers() {
        let err = MatParser::new(b"# c\nA C\nA 1 x\nC 1 1\n").parse_matrix().unwrap_err();
        assert_eq!(
            err,
            MatrixError::Parse {
                line:   3,
                reason: "'x' is not an integer score".to_string(),
            }
        );

        let err = MatParser::new(b"A C\nA 1\nC 1 1\n").parse_matrix().unwrap_err();
        assert!(matches!(err, MatrixError::Parse { line: 2, .. }));

        let err = MatParser::new(b"A C\nA 1 1 1\nC 1 1\n").parse_matrix().unwrap_err();
        assert!(matches!(err, MatrixError::Parse { line: 2, .. }));

        let err = MatParser::new(b"A C\nC 1 1\nA 1 1\n").parse_matrix().unwrap_err();
        assert!(matches!(err, MatrixError::Parse { line: 2, .. }));

        let err = MatParser::new(b"A C\nA 1 1\n").parse_matrix().unwrap_err();
        assert!(matches!(err, MatrixError::Parse { line: 3, .. }));

        let err = MatParser::new(b"A C\nA 1 1\nC 1 1\nextra\n").parse_matrix().unwrap_err();
        assert!(matches!(err, MatrixError::Parse { line: 4, .. }));

        let err = MatParser::new(b"AB C\n").parse_matrix().unwrap_err();
        assert!(matches!(err, MatrixError::Parse { line: 1, .. }));
    }

    #[test]
    fn empty_input() {
        assert!(matches!(
            MatParser::new(b"# only comments\n\n").parse_matrix(),
            Err(MatrixError::Parse { line: 1, .. })
        ));
    }
}
