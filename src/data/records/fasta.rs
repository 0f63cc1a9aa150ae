use crate::{
    data::records::{ChopLineBreak, split_header},
    unwrap_or_return_some_err,
};
use std::io::{BufRead, BufReader, Error as IOError, ErrorKind};

/// Provides a container struct for data from a generic
/// [FASTA](https://en.wikipedia.org/wiki/FASTA_format) file. The `name` holds
/// the full header line without the leading `>`.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct FastaSeq {
    pub name:     String,
    pub sequence: Vec<u8>,
}

impl FastaSeq {
    /// The header split into the identifier and the optional comment after
    /// the first whitespace.
    #[inline]
    #[must_use]
    pub fn name_and_comment(&self) -> (&str, Option<&str>) {
        split_header(&self.name)
    }
}

impl std::fmt::Display for FastaSeq {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, ">{}\n{}\n", self.name, String::from_utf8_lossy(&self.sequence))
    }
}

/// Structure for buffered reading of `FASTA` files. Sequences may wrap over
/// several lines; line breaks and surrounding whitespace are removed.
#[derive(Debug)]
pub struct FastaReader<R: std::io::Read> {
    reader:       std::io::BufReader<R>,
    buffer:       Vec<u8>,
    first_record: bool,
}

/// Appends every line of `buffer` to `sequence`, dropping whitespace and a
/// trailing `>` that belongs to the next record.
fn collect_sequence(buffer: &[u8], sequence: &mut Vec<u8>) {
    let buffer = buffer.strip_suffix(b">").unwrap_or(buffer);
    for line in buffer.split(|b| *b == b'\n') {
        sequence.extend(line.iter().filter(|b| !b.is_ascii_whitespace()));
    }
}

impl<R: std::io::Read> FastaReader<R> {
    /// Creates an iterator over FASTA data, wrapping the input in a buffered
    /// reader.
    ///
    /// Unlike [`from_readable`], this does not allocate or read any data
    /// initially. It also allows for empty input, in which case the resulting
    /// iterator yields a single error.
    ///
    /// [`from_readable`]: FastaReader::from_readable
    pub fn new(inner: R) -> Self {
        FastaReader {
            reader:       std::io::BufReader::new(inner),
            buffer:       Vec::new(),
            first_record: true,
        }
    }

    /// Creates an iterator over FASTA data from a type implementing [`Read`],
    /// wrapping the input in a buffered reader.
    ///
    /// ## Errors
    ///
    /// Will return `Err` if the input data is empty or an IO error occurs.
    ///
    /// [`Read`]: std::io::Read
    pub fn from_readable(read: R) -> std::io::Result<Self> {
        FastaReader::from_bufreader(std::io::BufReader::new(read))
    }

    /// Creates an iterator over FASTA data from a `BufReader`.
    ///
    /// ## Errors
    ///
    /// Will return `Err` if the input data is empty or an IO error occurs.
    pub fn from_bufreader(mut reader: BufReader<R>) -> std::io::Result<Self> {
        if reader.fill_buf()?.is_empty() {
            return Err(IOError::new(ErrorKind::InvalidData, "No FASTA data was found!"));
        }

        Ok(FastaReader {
            reader,
            buffer: Vec::new(),
            first_record: true,
        })
    }

    fn get_error(msg: &str, header: Option<&str>) -> std::io::Result<FastaSeq> {
        if let Some(header) = header {
            Err(IOError::new(ErrorKind::InvalidData, format!("{msg} See header: {header}")))
        } else {
            Err(IOError::new(ErrorKind::InvalidData, msg))
        }
    }

    /// Reads the sequence following `name`, all the way up to (and including)
    /// the next `>`. On success the buffer is left non-empty when another
    /// record follows and cleared at the end of input.
    fn read_sequence(&mut self, name: String) -> std::io::Result<FastaSeq> {
        self.buffer.clear();
        self.reader.read_until(b'>', &mut self.buffer)?;

        let mut sequence = Vec::with_capacity(self.buffer.len());
        collect_sequence(&self.buffer, &mut sequence);

        if sequence.is_empty() {
            return Self::get_error("Missing FASTA sequence!", Some(&name));
        }

        // Check to make sure we read the full sequence
        if !self.buffer.ends_with(b"\n>") {
            if self.buffer.ends_with(b">") {
                return Self::get_error(
                    "FASTA records must start with the '>' symbol on a newline, and no other '>' symbols can occur in a sequence!",
                    Some(&name),
                );
            }
            // We have finished iteration
            self.buffer.clear();
        }

        Ok(FastaSeq { name, sequence })
    }

    /// Read the first record, skipping leading blank lines and ensuring that
    /// the file is not slurped when no `>` is present.
    fn read_first_record(&mut self) -> Option<std::io::Result<FastaSeq>> {
        self.first_record = false;

        loop {
            self.buffer.clear();
            let bytes = unwrap_or_return_some_err!(self.reader.read_until(b'\n', &mut self.buffer));
            if bytes == 0 {
                return Some(Self::get_error("No FASTA data found!", None));
            }

            if let Some(mut header) = self.buffer.strip_prefix(b">") {
                header.chop_line_break();

                if header.is_empty() {
                    return Some(Self::get_error("Missing FASTA header!", None));
                }

                let name = String::from_utf8_lossy(header).trim_end().to_string();

                if header.contains(&b'>') {
                    return Some(Self::get_error(
                        "FASTA records must start with the '>' symbol on a newline, and no other '>' symbols can occur in a header!",
                        Some(&name),
                    ));
                }

                return Some(self.read_sequence(name));
            } else if !self.buffer.iter().all(u8::is_ascii_whitespace) {
                return Some(Self::get_error("The FASTA file must start with a '>' symbol!", None));
            }
        }
    }
}

/// An iterator for buffered reading of
/// [FASTA](https://en.wikipedia.org/wiki/FASTA_format) files.
impl<R: std::io::Read> Iterator for FastaReader<R> {
    type Item = std::io::Result<FastaSeq>;

    fn next(&mut self) -> Option<Self::Item> {
        // Special case logic for first record to ensure we don't slurp file.
        if self.first_record {
            let record = self.read_first_record();
            if let Some(Err(_)) = record {
                self.buffer.clear();
            }
            return record;
        }

        // The buffer holds the tail of the last record while more input
        // remains, and is cleared once the end of the file is reached.
        if self.buffer.is_empty() {
            return None;
        }

        // The leading '>' was consumed with the previous record
        self.buffer.clear();
        unwrap_or_return_some_err!(self.reader.read_until(b'\n', &mut self.buffer));
        self.buffer.chop_line_break();

        let name = String::from_utf8_lossy(&self.buffer).trim_end().to_string();
        if name.is_empty() {
            self.buffer.clear();
            return Some(Self::get_error("Missing FASTA header!", None));
        }
        if name.contains('>') {
            self.buffer.clear();
            return Some(Self::get_error(
                "FASTA records must start with the '>' symbol on a newline, and no other '>' symbols can occur in a header!",
                Some(&name),
            ));
        }

        let record = self.read_sequence(name);
        if record.is_err() {
            self.buffer.clear();
        }
        Some(record)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn read_all(data: &[u8]) -> Vec<std::io::Result<FastaSeq>> {
        FastaReader::new(data).collect()
    }

    #[test]
    fn wrapped_records() {
        let records: Vec<FastaSeq> = read_all(b"\n\n>s1 first one\nACGT\nAC\r\n>s2\nGG\n\n")
            .into_iter()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "s1 first one");
        assert_eq!(records[0].name_and_comment(), ("s1", Some("first one")));
        assert_eq!(records[0].sequence, b"ACGTAC");
        assert_eq!(records[1].name, "s2");
        assert_eq!(records[1].sequence, b"GG");
        assert_eq!(records[1].to_string(), ">s2\nGG\n");
    }

    #[test]
    fn no_trailing_newline() {
        let records = read_all(b">a\nAC\n>b\nGT");
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].as_ref().unwrap().sequence, b"GT");
    }

    #[test]
    fn malformed() {
        assert!(read_all(b"ACGT\n")[0].is_err());
        assert!(read_all(b">\nACGT\n")[0].is_err());
        assert!(read_all(b">a\n")[0].is_err());
        assert!(read_all(b">a\nAC>GT\n")[0].is_err());
        assert!(read_all(b"")[0].is_err());

        let records = read_all(b">a\nAC\n>b\n>c\nGT\n");
        assert!(records[0].is_ok());
        assert!(records[1].is_err());
        assert!(FastaReader::from_readable(&b""[..]).is_err());
    }
}
