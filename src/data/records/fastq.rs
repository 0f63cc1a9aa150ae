use crate::data::records::{ChopLineBreak, split_header};
use std::io::{BufRead, BufReader, Error as IOError, ErrorKind};

/// A single [FASTQ](https://en.wikipedia.org/wiki/FASTQ_format) record. The
/// `header` holds the full header line without the leading `@`.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct FastQ {
    pub header:   String,
    pub sequence: Vec<u8>,
    pub quality:  Vec<u8>,
}

impl FastQ {
    /// The header split into the identifier and the optional comment after
    /// the first whitespace.
    #[inline]
    #[must_use]
    pub fn name_and_comment(&self) -> (&str, Option<&str>) {
        split_header(&self.header)
    }
}

impl std::fmt::Display for FastQ {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "@{}\n{}\n+\n{}\n",
            self.header,
            String::from_utf8_lossy(&self.sequence),
            String::from_utf8_lossy(&self.quality)
        )
    }
}

/// A buffered reader for reading
/// [FASTQ](https://en.wikipedia.org/wiki/FASTQ_format).
///
/// This does not support multiline FASTQ files. In other words, each sequence
/// must be on a single line, and the quality scores must be on a single line.
#[derive(Debug)]
pub struct FastQReader<R: std::io::Read> {
    fastq_reader: std::io::BufReader<R>,
    fastq_buffer: Vec<u8>,
}

impl<R: std::io::Read> FastQReader<R> {
    /// Creates an iterator over FASTQ data, wrapping the input in a buffered
    /// reader.
    ///
    /// Unlike [`from_readable`], this does not allocate or read any data
    /// initially. It also allows for empty input, in which case the resulting
    /// iterator is empty.
    ///
    /// [`from_readable`]: FastQReader::from_readable
    pub fn new(inner: R) -> Self {
        FastQReader {
            fastq_reader: std::io::BufReader::new(inner),
            fastq_buffer: Vec::new(),
        }
    }

    /// Creates an iterator over FASTQ data from a type implementing [`Read`],
    /// wrapping the input in a buffered reader.
    ///
    /// ## Errors
    ///
    /// Will return `Err` if the input data is empty or an IO error occurs.
    ///
    /// [`Read`]: std::io::Read
    pub fn from_readable(read: R) -> std::io::Result<Self> {
        FastQReader::from_bufreader(std::io::BufReader::new(read))
    }

    /// Creates an iterator over FASTQ data from a `BufReader`.
    ///
    /// ## Errors
    ///
    /// Will return `Err` if the input data is empty or an IO error occurs.
    pub fn from_bufreader(mut reader: BufReader<R>) -> std::io::Result<Self> {
        if reader.fill_buf()?.is_empty() {
            return Err(IOError::new(ErrorKind::InvalidData, "No FASTQ data was found!"));
        }

        Ok(FastQReader {
            fastq_reader: reader,
            fastq_buffer: Vec::new(),
        })
    }

    /// Reads one line into the buffer, without its line break.
    fn read_line(&mut self) -> std::io::Result<usize> {
        self.fastq_buffer.clear();
        let bytes = self.fastq_reader.read_until(b'\n', &mut self.fastq_buffer)?;
        self.fastq_buffer.chop_line_break();
        Ok(bytes)
    }

    fn read_record(&mut self) -> Option<std::io::Result<FastQ>> {
        // Read HEADER line, skipping blank lines between records
        loop {
            match self.read_line() {
                Ok(0) => return None,
                Ok(_) if self.fastq_buffer.iter().all(u8::is_ascii_whitespace) => {}
                Ok(_) => break,
                Err(e) => return Some(Err(e)),
            }
        }

        let Some(header) = self.fastq_buffer.strip_prefix(b"@") else {
            return Some(Err(IOError::new(
                ErrorKind::InvalidData,
                "Missing '@' symbol at header line beginning! Ensure that the FASTQ file is not multi-line.",
            )));
        };

        if header.is_empty() {
            return Some(Err(IOError::new(ErrorKind::InvalidData, "Missing FASTQ header!")));
        }

        let header = String::from_utf8_lossy(header).trim_end().to_string();

        // Read SEQUENCE line
        if let Err(e) = self.read_line() {
            return Some(Err(e));
        }

        if self.fastq_buffer.is_empty() {
            return Some(Err(IOError::new(
                ErrorKind::InvalidData,
                format!("Missing FASTQ sequence! See header: {header}"),
            )));
        }

        let sequence = self.fastq_buffer.clone();

        // Read "+" line
        if let Err(e) = self.read_line() {
            return Some(Err(e));
        }

        if !self.fastq_buffer.starts_with(b"+") {
            return Some(Err(IOError::new(
                ErrorKind::InvalidData,
                format!("Missing '+' line! Ensure that the FASTQ file is not multi-line. See header: {header}"),
            )));
        }

        // Read QUALITY line
        if let Err(e) = self.read_line() {
            return Some(Err(e));
        }

        if self.fastq_buffer.len() != sequence.len() {
            if self.fastq_buffer.is_empty() {
                return Some(Err(IOError::new(
                    ErrorKind::InvalidData,
                    format!("Missing FASTQ quality scores! See header: {header}"),
                )));
            }

            return Some(Err(IOError::new(
                ErrorKind::InvalidData,
                format!(
                    "Sequence and quality score length mismatch ({s} != {q})! See header: {header}",
                    s = sequence.len(),
                    q = self.fastq_buffer.len(),
                ),
            )));
        }

        if let Some(bad) = self.fastq_buffer.iter().find(|b| !(b'!'..=b'~').contains(*b)) {
            return Some(Err(IOError::new(
                ErrorKind::InvalidData,
                format!(
                    "Invalid quality score '{b}'! See header: {header}",
                    b = bad.escape_ascii()
                ),
            )));
        }

        Some(Ok(FastQ {
            header,
            sequence,
            quality: self.fastq_buffer.clone(),
        }))
    }
}

/// An iterator for buffered reading of a
/// [FASTQ](https://en.wikipedia.org/wiki/FASTQ_format) file. Guarantees quality
/// scores are printable and match the sequence length.
impl<R: std::io::Read> Iterator for FastQReader<R> {
    type Item = std::io::Result<FastQ>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_record()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reads_records() {
        let data = b"@r1 lane 1\nACGT\n+\nIIII\n\n@r2\nGG\n+r2\n#!\n";
        let records: Vec<FastQ> = FastQReader::new(&data[..]).collect::<Result<_, _>>().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name_and_comment(), ("r1", Some("lane 1")));
        assert_eq!(records[0].sequence, b"ACGT");
        assert_eq!(records[0].quality, b"IIII");
        assert_eq!(records[1].header, "r2");
        assert_eq!(records[1].to_string(), "@r2\nGG\n+\n#!\n");
    }

    #[test]
    fn malformed() {
        let first = |data: &'static [u8]| FastQReader::new(data).next();
        assert!(first(b"").is_none());
        assert!(first(b">r1\nACGT\n+\nIIII\n").unwrap().is_err());
        assert!(first(b"@\nACGT\n+\nIIII\n").unwrap().is_err());
        assert!(first(b"@r1\nACGT\nIIII\n").unwrap().is_err());
        assert!(first(b"@r1\nACGT\n+\nIII\n").unwrap().is_err());
        assert!(first(b"@r1\nACGT\n+\n").unwrap().is_err());
        assert!(first(b"@r1\nAC\n+\nI \n").unwrap().is_err());
        assert!(FastQReader::from_readable(&b""[..]).is_err());
    }
}
