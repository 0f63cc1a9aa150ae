use super::*;

#[test]
fn registry_names() {
    for name in ["blosum62", "BLOSUM62", "Blosum_62", "blosum-62", "BLOSUM 62"] {
        assert_eq!(SubstitutionMatrix::lookup(name).unwrap().name(), "blosum62");
    }
    assert_eq!(SubstitutionMatrix::lookup("NUC.4.4").unwrap().name(), "nuc44");
    assert_eq!(SubstitutionMatrix::lookup("EDNAFULL").ok(), None);
    assert_eq!(
        SubstitutionMatrix::lookup("blosum99").unwrap_err(),
        MatrixError::UnknownName("blosum99".to_string())
    );
    assert_eq!(SubstitutionMatrix::builtin_names().count(), 68);
}

#[test]
fn registry_covers_blosum_and_pam_series() {
    let blosum = [30, 35, 40, 45, 50, 55, 60, 62, 65, 70, 75, 80, 85, 90, 95, 100].map(|n| format!("BLOSUM{n}"));
    let pam = (10..=500).step_by(10).map(|n| format!("PAM{n}"));

    for name in blosum.into_iter().chain(pam) {
        let matrix = SubstitutionMatrix::lookup(&name).unwrap_or_else(|_| panic!("{name} is not registered"));
        assert_eq!(matrix.name(), name.to_ascii_lowercase());
        assert_eq!(matrix.alphabet(), b"ARNDCQEGHILKMFPSTWYVBZX*");
        assert_eq!(matrix.score(b'*', b'*'), 1, "{name}");
        let stop = matrix.score(b'*', b'A');
        assert!(stop < 0 && b"RNDCQEGHILKMFPSTWYVBZX".iter().all(|&b| matrix.score(b'*', b) == stop), "{name}");
    }
    for name in ["pam5", "pam505", "pam510", "blosum52", "blosum105"] {
        assert!(SubstitutionMatrix::lookup(name).is_err(), "{name}");
    }
}

#[test]
fn published_cells() {
    let cells = [
        ("blosum35", b'W', b'W', 16),
        ("blosum40", b'W', b'W', 19),
        ("blosum50", b'A', b'A', 5),
        ("blosum50", b'C', b'C', 13),
        ("blosum50", b'W', b'W', 15),
        ("blosum50", b'W', b'*', -5),
        ("blosum60", b'W', b'W', 10),
        ("blosum90", b'A', b'A', 5),
        ("blosum90", b'W', b'W', 11),
        ("blosum90", b'C', b'*', -6),
        ("blosum100", b'A', b'A', 8),
        ("blosum100", b'*', b'X', -10),
        ("pam10", b'A', b'A', 7),
        ("pam30", b'A', b'A', 6),
        ("pam30", b'W', b'W', 13),
        ("pam30", b'M', b'M', 11),
        ("pam30", b'A', b'*', -17),
        ("pam30", b'A', b'B', -3),
        ("pam70", b'A', b'A', 5),
        ("pam70", b'W', b'W', 13),
        ("pam120", b'C', b'C', 9),
        ("pam120", b'W', b'W', 12),
        ("pam250", b'C', b'C', 12),
        ("pam250", b'W', b'W', 17),
        ("pam250", b'W', b'C', -8),
    ];
    for (name, a, b, expected) in cells {
        let matrix = SubstitutionMatrix::lookup(name).unwrap();
        assert_eq!(matrix.score(a, b), expected, "{name} {} {}", a as char, b as char);
    }
}

#[test]
fn builtin_tables_are_symmetric() {
    for name in SubstitutionMatrix::builtin_names() {
        let matrix = SubstitutionMatrix::lookup(name).unwrap();
        let size = matrix.size();
        for i in 0..size {
            for j in 0..size {
                assert_eq!(matrix.score_ordinals(i, j), matrix.score_ordinals(j, i), "{name} ({i}, {j})");
            }
        }
        assert!(!matrix.is_user_owned());
    }
}

#[test]
fn blosum62_values() {
    let matrix = SubstitutionMatrix::lookup("blosum62").unwrap();
    assert_eq!(matrix.size(), 24);
    assert_eq!(matrix.alphabet(), b"ARNDCQEGHILKMFPSTWYVBZX*");
    assert_eq!(matrix.score(b'A', b'A'), 4);
    assert_eq!(matrix.score(b'W', b'W'), 11);
    assert_eq!(matrix.score(b'h', b'E'), 0);
    assert_eq!(matrix.score(b'W', b'G'), -2);
    assert_eq!(matrix.min(), -4);
    assert_eq!(matrix.max(), 11);
    // Unknown bytes are scored as the '*' wildcard
    assert_eq!(matrix.to_ordinal(b'J'), 23);
    assert_eq!(matrix.score(b'J', b'A'), -4);
}

#[test]
fn nucleotide_aliases() {
    let nuc44 = SubstitutionMatrix::lookup("nuc44").unwrap();
    let dnafull = SubstitutionMatrix::lookup("dnafull").unwrap();
    assert_eq!(nuc44.size(), 15);
    assert_eq!(nuc44.row(0), dnafull.row(0));
    assert_eq!(nuc44.score(b'A', b'A'), 5);
    assert_eq!(nuc44.score(b'A', b'T'), -4);
    assert_eq!(nuc44.score(b'A', b'R'), 1);
    assert_eq!(nuc44.score(b'N', b'N'), -1);
    // 'U' is not in the alphabet, so it is scored as 'N'
    assert_eq!(nuc44.score(b'U', b'A'), -2);
}

#[test]
fn create_appends_wildcard() {
    let matrix = SubstitutionMatrix::create(b"ACGT", 5, -4).unwrap();
    assert_eq!(matrix.alphabet(), b"ACGT*");
    assert_eq!(matrix.score(b'A', b'A'), 5);
    assert_eq!(matrix.score(b'g', b'G'), 5);
    assert_eq!(matrix.score(b'A', b'T'), -4);
    assert_eq!(matrix.score(b'N', b'N'), 0);
    assert_eq!(matrix.score(b'*', b'A'), 0);
    assert_eq!(matrix.min(), -4);
    assert_eq!(matrix.max(), 5);
    assert!(matrix.is_user_owned());

    let sensitive = SubstitutionMatrix::create_case_sensitive(b"ACgt", 1, -1).unwrap();
    assert_eq!(sensitive.score(b'g', b'g'), 1);
    assert_eq!(sensitive.score(b'G', b'G'), 0);
    assert!(sensitive.is_case_sensitive());

    assert_eq!(SubstitutionMatrix::create(b"", 1, -1).unwrap_err(), MatrixError::EmptyAlphabet);
    assert_eq!(
        SubstitutionMatrix::create(b"ACA", 1, -1).unwrap_err(),
        MatrixError::DuplicateSymbol(b'A')
    );
    assert_eq!(
        SubstitutionMatrix::create(b"ACa", 1, -1).unwrap_err(),
        MatrixError::DuplicateSymbol(b'a')
    );
}

#[test]
fn copy_then_edit() {
    let builtin = SubstitutionMatrix::lookup("blosum62").unwrap();
    let mut cloned = builtin.clone();
    assert_eq!(cloned.set_value(0, 0, 100), Err(MatrixError::NotUserOwned));

    let mut copy = builtin.copy();
    copy.set_value(0, 0, 100).unwrap();
    assert_eq!(copy.score(b'A', b'A'), 100);
    assert_eq!(copy.max(), 100);
    assert_eq!(builtin.score(b'A', b'A'), 4);

    assert_eq!(
        copy.set_value(24, 0, 1),
        Err(MatrixError::OutOfRange {
            row:  24,
            col:  0,
            size: 24,
        })
    );

    copy.set_row(1, &[-9; 24]).unwrap();
    assert_eq!(copy.score(b'R', b'W'), -9);
    assert_eq!(copy.min(), -9);
    assert!(copy.set_row(1, &[0; 3]).is_err());
}

#[test]
fn text_matrix() {
    let text = b"# test matrix\n   A  C  G  T\nA  1 -2 -2 -2\nC -2  1 -2 -2\nG -2 -2  1 -2\nT -2 -2 -2  1\n";
    let matrix = SubstitutionMatrix::from_text("small", text, false).unwrap();
    assert_eq!(matrix.name(), "small");
    assert_eq!(matrix.size(), 4);
    assert_eq!(matrix.score(b'c', b'C'), 1);
    // No '*', 'X', or 'N': unknown bytes fall back to the last symbol
    assert_eq!(matrix.to_ordinal(b'U'), 3);
    assert!(matrix.is_user_owned());
}

#[test]
fn missing_file() {
    assert!(matches!(
        SubstitutionMatrix::from_file("no/such/matrix.txt"),
        Err(MatrixError::FileNotFound(_))
    ));
}

#[test]
fn display_table() {
    let matrix = SubstitutionMatrix::create(b"AC", 2, -1).unwrap();
    let shown = matrix.to_string();
    let lines: Vec<&str> = shown.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "    A  C *");
    assert_eq!(lines[1], "A   2 -1 0");
}
