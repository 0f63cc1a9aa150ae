use std::{error::Error, fs::File, io::ErrorKind, path::Path};

/// A module for reading
/// [FASTA](https://en.wikipedia.org/wiki/FASTA_format) files.
pub mod fasta;
/// A module for reading
/// [FASTQ](https://en.wikipedia.org/wiki/FASTQ_format) files.
pub mod fastq;

#[derive(Debug)]
struct RecordError {
    description: String,
    source:      Box<dyn Error + Send + Sync>,
}

impl std::fmt::Display for RecordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description)
    }
}

impl Error for RecordError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.source.as_ref())
    }
}

pub(crate) trait RecordReader {
    const RECORD_NAME: &str;

    /// Opens a file, checking to ensure that it is non-empty, and providing
    /// context for error messages.
    #[inline]
    fn open_nonempty_file<P: AsRef<Path>>(filename: P) -> std::io::Result<File> {
        let path = filename.as_ref();

        let file = File::open(path).map_err(|err| Self::new_wrapped("file open error", path, err))?;
        let metadata = file
            .metadata()
            .map_err(|err| Self::new_wrapped("metadata error", path, err))?;
        if metadata.len() == 0 {
            return Err(Self::new_kind("file empty", path, ErrorKind::InvalidInput));
        }

        Ok(file)
    }

    fn new_kind(description: &str, path: &Path, kind: ErrorKind) -> std::io::Error {
        std::io::Error::new(
            kind,
            format!(
                "{desc} for {name}: '{path}'",
                desc = description,
                name = Self::RECORD_NAME,
                path = path.display()
            ),
        )
    }

    fn new_wrapped(description: &str, path: &Path, err: std::io::Error) -> std::io::Error {
        // Keep the kind so that callers can still tell a missing file apart
        let kind = err.kind();
        std::io::Error::new(
            kind,
            RecordError {
                description: format!(
                    "{desc} for {name}: '{path}'",
                    desc = description,
                    name = Self::RECORD_NAME,
                    path = path.display()
                ),
                source:      Box::new(err),
            },
        )
    }
}

/// Removes a trailing `\n` or `\r\n`.
pub(crate) trait ChopLineBreak {
    fn chop_line_break(&mut self);
}

impl ChopLineBreak for Vec<u8> {
    #[inline]
    fn chop_line_break(&mut self) {
        if self.ends_with(b"\n") {
            self.pop();

            if self.ends_with(b"\r") {
                self.pop();
            }
        }
    }
}

impl ChopLineBreak for &[u8] {
    #[inline]
    fn chop_line_break(&mut self) {
        if let Some(rest) = self.strip_suffix(b"\n") {
            *self = rest.strip_suffix(b"\r").unwrap_or(rest);
        }
    }
}

/// Splits a record header into its name (up to the first whitespace) and the
/// optional comment that follows.
#[must_use]
pub fn split_header(header: &str) -> (&str, Option<&str>) {
    match header.split_once(|c: char| c.is_ascii_whitespace()) {
        Some((name, comment)) => {
            let comment = comment.trim();
            (name, (!comment.is_empty()).then_some(comment))
        }
        None => (header, None),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn header_split() {
        assert_eq!(split_header("seq1 some comment "), ("seq1", Some("some comment")));
        assert_eq!(split_header("seq1"), ("seq1", None));
        assert_eq!(split_header("seq1\t"), ("seq1", None));
    }

    #[test]
    fn chop() {
        let mut v = b"ACGT\r\n".to_vec();
        v.chop_line_break();
        assert_eq!(v, b"ACGT");

        let mut s: &[u8] = b"ACGT\n";
        s.chop_line_break();
        assert_eq!(s, b"ACGT");
    }
}
