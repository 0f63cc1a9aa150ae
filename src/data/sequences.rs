//! An in-memory collection of sequence records read from FASTA or FASTQ, used
//! when one query is aligned against many subjects.

use crate::data::records::{RecordReader, fasta::FastaReader, fastq::FastQReader};
use std::{
    io::{BufRead, BufReader, Error as IOError, ErrorKind, Read},
    ops::Index,
    path::Path,
};

/// One record of a [`Sequences`] collection. FASTA records carry no quality.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct SequenceRecord {
    pub name:    String,
    pub comment: Option<String>,
    pub seq:     Vec<u8>,
    pub qual:    Option<Vec<u8>>,
}

impl SequenceRecord {
    fn from_header(header: &str, seq: Vec<u8>, qual: Option<Vec<u8>>) -> Self {
        let (name, comment) = crate::data::records::split_header(header);
        SequenceRecord {
            name: name.to_string(),
            comment: comment.map(str::to_string),
            seq,
            qual,
        }
    }
}

/// The container format detected from the first non-blank byte.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum SequenceFormat {
    Fasta,
    FastQ,
}

/// An indexable collection of records with aggregate length statistics.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Sequences {
    records:    Vec<SequenceRecord>,
    characters: usize,
    shortest:   usize,
    longest:    usize,
    mean:       f64,
    stddev:     f64,
}

impl Sequences {
    /// Builds a collection and its statistics from records. The standard
    /// deviation is the population standard deviation of the lengths.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_records(records: Vec<SequenceRecord>) -> Self {
        let characters = records.iter().map(|r| r.seq.len()).sum();
        let shortest = records.iter().map(|r| r.seq.len()).min().unwrap_or(0);
        let longest = records.iter().map(|r| r.seq.len()).max().unwrap_or(0);

        let (mean, stddev) = if records.is_empty() {
            (0.0, 0.0)
        } else {
            let n = records.len() as f64;
            let mean = characters as f64 / n;
            let variance = records
                .iter()
                .map(|r| {
                    let d = r.seq.len() as f64 - mean;
                    d * d
                })
                .sum::<f64>()
                / n;
            (mean, variance.sqrt())
        };

        Sequences {
            records,
            characters,
            shortest,
            longest,
            mean,
            stddev,
        }
    }

    /// Reads a FASTA or FASTQ file, detecting the format from the first
    /// non-blank byte (`>` or `@`).
    ///
    /// ## Errors
    ///
    /// The file must exist and be non-empty, and every record must be well
    /// formed. Missing files keep [`ErrorKind::NotFound`], an empty file is
    /// [`ErrorKind::InvalidInput`], and malformed content is reported as
    /// [`ErrorKind::InvalidData`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let file = Self::open_nonempty_file(path)?;
        Self::from_reader(file)
    }

    /// Reads FASTA or FASTQ from any reader. See [`Sequences::from_file`].
    ///
    /// ## Errors
    ///
    /// Empty input, an unknown leading byte, or any malformed record.
    pub fn from_reader<R: Read>(read: R) -> std::io::Result<Self> {
        let mut reader = BufReader::new(read);
        let records = match detect_format(&mut reader)? {
            SequenceFormat::Fasta => FastaReader::from_bufreader(reader)?
                .map(|r| r.map(|fa| SequenceRecord::from_header(&fa.name, fa.sequence, None)))
                .collect::<std::io::Result<Vec<_>>>()?,
            SequenceFormat::FastQ => FastQReader::from_bufreader(reader)?
                .map(|r| r.map(|fq| SequenceRecord::from_header(&fq.header, fq.sequence, Some(fq.quality))))
                .collect::<std::io::Result<Vec<_>>>()?,
        };
        Ok(Self::from_records(records))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&SequenceRecord> {
        self.records.get(index)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, SequenceRecord> {
        self.records.iter()
    }

    /// Total number of sequence characters over all records.
    #[inline]
    #[must_use]
    pub fn characters(&self) -> usize {
        self.characters
    }

    #[inline]
    #[must_use]
    pub fn shortest(&self) -> usize {
        self.shortest
    }

    #[inline]
    #[must_use]
    pub fn longest(&self) -> usize {
        self.longest
    }

    #[inline]
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    #[inline]
    #[must_use]
    pub fn stddev(&self) -> f64 {
        self.stddev
    }

    /// The length of every record, in order.
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        self.records.iter().map(|r| r.seq.len()).collect()
    }
}

/// Skips leading whitespace and peeks at the first byte of content.
fn detect_format<R: Read>(reader: &mut BufReader<R>) -> std::io::Result<SequenceFormat> {
    loop {
        let buffer = reader.fill_buf()?;
        if buffer.is_empty() {
            return Err(IOError::new(ErrorKind::InvalidData, "No sequence data was found!"));
        }

        let blank = buffer.iter().take_while(|b| b.is_ascii_whitespace()).count();
        if blank < buffer.len() {
            let format = match buffer[blank] {
                b'>' => SequenceFormat::Fasta,
                b'@' => SequenceFormat::FastQ,
                other => {
                    return Err(IOError::new(
                        ErrorKind::InvalidData,
                        format!(
                            "Sequence files must start with '>' (FASTA) or '@' (FASTQ), found '{b}'!",
                            b = other.escape_ascii()
                        ),
                    ));
                }
            };
            reader.consume(blank);
            return Ok(format);
        }
        reader.consume(blank);
    }
}

impl RecordReader for Sequences {
    const RECORD_NAME: &str = "FASTA/FASTQ";
}

impl Index<usize> for Sequences {
    type Output = SequenceRecord;

    #[inline]
    fn index(&self, index: usize) -> &SequenceRecord {
        &self.records[index]
    }
}

impl<'a> IntoIterator for &'a Sequences {
    type Item = &'a SequenceRecord;
    type IntoIter = std::slice::Iter<'a, SequenceRecord>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for Sequences {
    type Item = SequenceRecord;
    type IntoIter = std::vec::IntoIter<SequenceRecord>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fasta_stats() {
        let seqs = Sequences::from_reader(&b"\n>a one\nACGT\n>b\nAC\nGTAC\n>c\nAA\n"[..]).unwrap();
        assert_eq!(seqs.len(), 3);
        assert_eq!(seqs[0].name, "a");
        assert_eq!(seqs[0].comment.as_deref(), Some("one"));
        assert_eq!(seqs[1].seq, b"ACGTAC");
        assert_eq!(seqs[2].qual, None);
        assert_eq!(seqs.characters(), 12);
        assert_eq!(seqs.shortest(), 2);
        assert_eq!(seqs.longest(), 6);
        assert!((seqs.mean() - 4.0).abs() < 1e-12);
        // Population standard deviation of [4, 6, 2]
        assert!((seqs.stddev() - (8.0f64 / 3.0).sqrt()).abs() < 1e-12);
        assert_eq!(seqs.lengths(), vec![4, 6, 2]);
    }

    #[test]
    fn fastq_records() {
        let seqs = Sequences::from_reader(&b"@r1 x\nACG\n+\nIII\n@r2\nA\n+\n#\n"[..]).unwrap();
        assert_eq!(seqs.len(), 2);
        assert_eq!(seqs[0].qual.as_deref(), Some(&b"III"[..]));
        assert_eq!(seqs.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(), ["r1", "r2"]);
    }

    #[test]
    fn detection_errors() {
        assert_eq!(
            Sequences::from_reader(&b"  \n"[..]).unwrap_err().kind(),
            ErrorKind::InvalidData
        );
        assert_eq!(
            Sequences::from_reader(&b"ACGT\n"[..]).unwrap_err().kind(),
            ErrorKind::InvalidData
        );
        assert_eq!(
            Sequences::from_file("no/such/file.fa").unwrap_err().kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn empty_collection() {
        let seqs = Sequences::from_records(Vec::new());
        assert!(seqs.is_empty());
        assert_eq!(seqs.shortest(), 0);
        assert!(seqs.mean().abs() < f64::EPSILON);
    }
}
