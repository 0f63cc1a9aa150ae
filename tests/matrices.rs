use pairalign::{
    data::matrices::MatrixError,
    prelude::*,
};
use std::path::PathBuf;

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("data").join(name)
}

#[test]
fn reads_matrix_file() {
    let matrix = SubstitutionMatrix::from_file(data("dna.mat")).unwrap();
    assert_eq!(matrix.name(), "dna.mat");
    assert_eq!(matrix.alphabet(), b"ACGT");
    assert_eq!((matrix.min(), matrix.max()), (-4, 5));
    assert_eq!(matrix.score(b'A', b'G'), -1);
    assert_eq!(matrix.score(b'a', b'g'), -1);
    assert_eq!(matrix.score(b'C', b'T'), -1);
    assert_eq!(matrix.score(b'A', b'T'), -4);
    assert!(matrix.is_user_owned());

    let sensitive = SubstitutionMatrix::from_file_case_sensitive(data("dna.mat")).unwrap();
    assert!(sensitive.is_case_sensitive());
    assert_eq!(sensitive.score(b'A', b'A'), 5);
}

#[test]
fn file_matrix_aligns() {
    let matrix = SubstitutionMatrix::from_file(data("dna.mat")).unwrap();
    let result = align("sw_trace_striped_sat".parse().unwrap(), b"ACGTAG", b"ACGTGG", 10, 1, &matrix).unwrap();
    // Five matches and one transition
    assert_eq!(result.score(), 24);
    let traceback = result.traceback(&TracebackOptions::default()).unwrap();
    assert_eq!(traceback.to_string(), "ACGTAG\n||||.|\nACGTGG");
}

#[test]
fn matrix_file_errors() {
    assert!(matches!(
        SubstitutionMatrix::from_file(data("missing.mat")),
        Err(MatrixError::FileNotFound(_))
    ));
    assert!(matches!(
        SubstitutionMatrix::from_file(data("bad.mat")),
        Err(MatrixError::Parse { line: 3, .. })
    ));

    let err: AlignError = SubstitutionMatrix::lookup("blosum63").unwrap_err().into();
    assert!(matches!(err, AlignError::NotFound(_)));
    assert_eq!(err.get_code(), 2);

    let matrix = SubstitutionMatrix::lookup("blosum62").unwrap();
    let err = align_by_name("sw_striped_17", b"ACGT", b"ACGT", 10, 1, matrix).unwrap_err();
    assert!(matches!(err, AlignError::NotFound(_)));
}

#[test]
fn builtin_registry() {
    let proteins = SubstitutionMatrix::builtin_names().filter(|n| !matches!(*n, "nuc44" | "dnafull"));
    assert_eq!(proteins.clone().count(), 66);
    for name in proteins {
        let matrix = SubstitutionMatrix::lookup(name).unwrap();
        assert!(!matrix.is_user_owned());
        assert_eq!(matrix.size(), 24, "{name}");
        for a in matrix.alphabet() {
            for b in matrix.alphabet() {
                assert_eq!(matrix.score(*a, *b), matrix.score(*b, *a), "{name} is not symmetric");
            }
        }
    }

    assert_eq!(SubstitutionMatrix::lookup("BLOSUM62").unwrap().score(b'W', b'W'), 11);
    assert_eq!(SubstitutionMatrix::lookup("nuc44").unwrap().score(b'A', b'A'), 5);
    assert_eq!(SubstitutionMatrix::lookup("nuc44").unwrap().score(b'A', b'T'), -4);
    assert!(SubstitutionMatrix::builtin_names().any(|n| n == "dnafull"));
    for name in ["blosum50", "blosum90", "blosum100", "pam10", "pam30", "pam70", "pam500", "NUC.4.4"] {
        assert!(SubstitutionMatrix::lookup(name).is_ok(), "{name}");
    }
}

#[test]
fn edit_copies_only() {
    let builtin = SubstitutionMatrix::lookup("blosum62").unwrap();
    assert!(builtin.clone().set_value(0, 0, 100).is_err());

    let mut copy = builtin.copy();
    copy.set_value(0, 0, 100).unwrap();
    assert_eq!(copy.score(b'A', b'A'), 100);
    assert_eq!(copy.max(), 100);
    assert_eq!(builtin.score(b'A', b'A'), 4);

    assert_eq!(
        copy.set_value(0, 24, 1),
        Err(MatrixError::OutOfRange { row: 0, col: 24, size: 24 })
    );

    let mut uniform = SubstitutionMatrix::create(b"ACGT", 1, -1).unwrap();
    uniform.set_row(0, &[3, -2, -2, -2, 0]).unwrap();
    assert_eq!(uniform.score(b'A', b'A'), 3);
    assert_eq!(uniform.min(), -2);
    assert!(uniform.set_row(0, &[1, 2]).is_err());
}

#[test]
fn create_errors() {
    assert_eq!(SubstitutionMatrix::create(b"", 1, -1).unwrap_err(), MatrixError::EmptyAlphabet);
    assert_eq!(
        SubstitutionMatrix::create(b"ACGA", 1, -1).unwrap_err(),
        MatrixError::DuplicateSymbol(b'A')
    );
    assert_eq!(
        SubstitutionMatrix::create(b"ACGa", 1, -1).unwrap_err(),
        MatrixError::DuplicateSymbol(b'a')
    );
    let sensitive = SubstitutionMatrix::create_case_sensitive(b"ACGa", 1, -1).unwrap();
    assert_eq!(sensitive.score(b'a', b'A'), -1);
}
