use pairalign::prelude::*;
use std::{io::ErrorKind, path::PathBuf};

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("data").join(name)
}

#[test]
fn reads_multiline_fasta() {
    let sequences = Sequences::from_file(data("reads.fa")).unwrap();
    assert_eq!(sequences.len(), 3);

    let first = sequences.get(0).unwrap();
    assert_eq!(first.name, "seq1");
    assert_eq!(first.comment.as_deref(), Some("first record"));
    assert_eq!(first.seq, b"ACGTACGTACGTACGT");
    assert_eq!(first.qual, None);

    assert_eq!(sequences[1].name, "seq2");
    assert_eq!(sequences[1].comment, None);
    assert_eq!(sequences[2].comment.as_deref(), Some("third\trecord"));

    assert_eq!(sequences.lengths(), [16, 7, 14]);
    assert_eq!(sequences.characters(), 37);
    assert_eq!((sequences.shortest(), sequences.longest()), (7, 16));
    assert!((sequences.mean() - 37.0 / 3.0).abs() < 1e-9);
    assert!((sequences.stddev() - 3.858_612_300_930_075).abs() < 1e-9);
}

#[test]
fn reads_fastq() {
    let sequences = Sequences::from_file(data("reads.fq")).unwrap();
    assert_eq!(sequences.len(), 3);
    assert_eq!(sequences[0].name, "read1");
    assert_eq!(sequences[0].comment.as_deref(), Some("lane=1"));
    assert_eq!(sequences[0].qual.as_deref(), Some(&b"IIIIIIII"[..]));
    assert_eq!(sequences[2].seq, b"ACG");
    assert_eq!(sequences.characters(), 18);
    assert!((sequences.mean() - 6.0).abs() < 1e-9);
    assert!((sequences.stddev() - 2.160_246_899_469_287).abs() < 1e-9);
}

#[test]
fn sequence_errors() {
    let err = Sequences::from_file(data("missing.fa")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(err.to_string().starts_with("file open error for FASTA/FASTQ"), "{err}");
    assert!(err.to_string().contains("missing.fa"), "{err}");
    assert!(std::error::Error::source(err.get_ref().unwrap()).is_some());

    let err = Sequences::from_file(data("empty.fa")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert!(err.to_string().starts_with("file empty for FASTA/FASTQ"), "{err}");

    let err = Sequences::from_reader(&b"\n\n"[..]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidData);

    let err = Sequences::from_reader(&b"ACGT\n"[..]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidData);

    let err = Sequences::from_reader(&b"@r1\nACGT\n+\nII\n"[..]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidData);
}

#[test]
fn one_query_many_subjects() {
    let matrix = SubstitutionMatrix::lookup("nuc44").unwrap();
    let sequences = Sequences::from_file(data("reads.fa")).unwrap();
    let query = &sequences[0].seq;
    let profile = Profile::new(query, matrix, Width::W16).unwrap();

    let scores: Vec<i64> = sequences
        .iter()
        .map(|subject| {
            align_profile("sw_striped_16".parse().unwrap(), &profile, &subject.seq, 10, 1)
                .unwrap()
                .score()
        })
        .collect();

    assert_eq!(scores[0], 5 * 16);
    for (record, &score) in sequences.iter().zip(&scores) {
        let direct = align("sw".parse().unwrap(), query, &record.seq, 10, 1, matrix).unwrap();
        assert_eq!(direct.score(), score, "{}", record.name);
    }
}
