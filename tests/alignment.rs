use pairalign::prelude::*;
use std::sync::Arc;

const OPEN: i32 = 10;
const EXTEND: i32 = 1;

fn dna() -> SubstitutionMatrix {
    SubstitutionMatrix::create(b"ACGT", 2, -1).unwrap()
}

fn spec(name: &str) -> KernelSpec {
    name.parse().unwrap()
}

/// Every fixed-width and saturation-checked spec of one regime and storage.
fn vector_specs(regime: Regime, storage: Storage) -> impl Iterator<Item = KernelSpec> {
    [Layout::Scan, Layout::Striped, Layout::Diag]
        .into_iter()
        .flat_map(move |layout| Width::ALL.map(|width| KernelSpec::simd(regime, storage, layout, width)))
        .chain(std::iter::once(KernelSpec::serial(regime, storage)))
}

fn pairs() -> Vec<(Vec<u8>, Vec<u8>)> {
    #[allow(unused_mut)]
    let mut pairs: Vec<(Vec<u8>, Vec<u8>)> = [
        ("GATTACA", "GCATGCU"),
        ("ACGT", "TTTTACGTTTTT"),
        ("AAAAAGGGGGCCCC", "AAAAACCCC"),
        ("ACGTACGTACGTACGTACGTAC", "TACGTACGTTACGTACGTACGAC"),
    ]
    .into_iter()
    .map(|(q, r)| (q.as_bytes().to_vec(), r.as_bytes().to_vec()))
    .collect();

    #[cfg(feature = "rand")]
    for seed in 0..3 {
        use pairalign::data::generate::rand_mutate;
        let query = rand_sequence(b"ACGT", 30, seed);
        pairs.push((query.clone(), rand_mutate(&query, b"ACGT", 0.2, seed + 50)));
    }

    pairs
}

#[test]
fn global_scenario() {
    let matrix = dna();
    for spec in vector_specs(Regime::Nw, Storage::Plain) {
        let result = align(spec, b"GATTACA", b"GCATGCU", OPEN, EXTEND, &matrix).unwrap();
        assert_eq!(result.score(), 3, "{spec}");
        assert_eq!((result.end_query(), result.end_ref()), (6, 6));
        assert!(result.is_nw());
    }
}

#[test]
fn local_scenario() {
    let matrix = dna();
    for spec in vector_specs(Regime::Sw, Storage::Trace) {
        let result = align(spec, b"AAAAAGGGGG", b"TTTTTGGGGG", OPEN, EXTEND, &matrix).unwrap();
        assert_eq!(result.score(), 10, "{spec}");
        assert_eq!((result.end_query(), result.end_ref()), (9, 9));

        let cigar = result.cigar(&CigarOptions::default()).unwrap();
        assert_eq!(cigar.to_string(), "5M");
        assert_eq!((cigar.beg_query, cigar.beg_ref), (5, 5));

        let extended = CigarOptions {
            extended_ops: true,
            ..Default::default()
        };
        assert_eq!(result.cigar(&extended).unwrap().to_string(), "5=");
    }
}

#[test]
fn semi_global_scenario() {
    let matrix = dna();
    let (query, reference) = (b"ACGT", b"TTTTACGTTTTT");

    // Both reference flanks are free
    for name in ["sg_qx", "sg_qx_striped_sat", "sg", "sg_scan_16", "sg_diag_sat"] {
        let result = align(spec(name), query, reference, 5, 1, &matrix).unwrap();
        assert_eq!(result.score(), 8, "{name}");
        assert_eq!((result.end_query(), result.end_ref()), (3, 7));
    }

    let result = align(spec("sg_qx_trace_striped_sat"), query, reference, 5, 1, &matrix).unwrap();
    let cigar = result.cigar(&CigarOptions::default()).unwrap();
    assert_eq!(cigar.to_string(), "4M");
    assert_eq!((cigar.beg_query, cigar.beg_ref), (0, 4));

    // The query must reach the last reference position
    for name in ["sg_qb_de", "sg_qb_de_scan_sat", "sg_qb_de_diag_8"] {
        let result = align(spec(name), query, reference, 5, 1, &matrix).unwrap();
        assert_eq!(result.score(), 0, "{name}");
        assert_eq!(result.end_ref(), reference.len() - 1);
        assert!(result.is_sg());
    }
}

#[test]
fn banded_scenario() {
    let matrix = dna();
    let result = nw_banded(b"ACGTACGT", b"ACCTACGT", OPEN, EXTEND, 1, &matrix).unwrap();
    assert_eq!(result.score(), 13);
    assert_eq!((result.end_query(), result.end_ref()), (7, 7));
    assert!(result.is_banded());
    assert!(result.is_nw());

    for (query, reference) in pairs() {
        let k = query.len().max(reference.len());
        let banded = nw_banded(&query, &reference, OPEN, EXTEND, k, &matrix).unwrap();
        let full = align(spec("nw"), &query, &reference, OPEN, EXTEND, &matrix).unwrap();
        assert_eq!(banded.score(), full.score());
        assert_eq!((banded.end_query(), banded.end_ref()), (full.end_query(), full.end_ref()));
    }
}

#[test]
fn protein_scenario() {
    let matrix = SubstitutionMatrix::lookup("blosum62").unwrap();
    for name in ["sw_trace", "sw_trace_striped_sat", "sw_trace_scan_16", "sw_trace_diag_32"] {
        let result = align(spec(name), b"HEAGAWGHEE", b"PAWHEAE", OPEN, EXTEND, matrix).unwrap();
        assert_eq!(result.score(), 18, "{name}");
        assert_eq!((result.end_query(), result.end_ref()), (8, 4));

        let traceback = result.traceback(&TracebackOptions::default()).unwrap();
        assert_eq!(traceback.to_string(), "AWGHE\n|| ||\nAW-HE");

        let cigar = result.cigar(&CigarOptions::default()).unwrap();
        assert_eq!(cigar.to_string(), "2M1I2M");
        assert_eq!((cigar.beg_query, cigar.beg_ref), (4, 1));
    }
}

#[test]
fn statistics_scenario() {
    let matrix = dna();
    for spec in vector_specs(Regime::Sw, Storage::StatsTable) {
        let result = align(spec, b"AGCT", b"AGCT", OPEN, EXTEND, &matrix).unwrap();
        assert_eq!(result.score(), 8, "{spec}");
        assert_eq!(result.matches(), Ok(4));
        assert_eq!(result.similar(), Ok(4));
        assert_eq!(result.length(), Ok(4));
        assert!(result.is_stats_table());

        let table = result.score_table().unwrap();
        let diagonal: Vec<i64> = (0..4).map(|i| table[i * 4 + i]).collect();
        assert_eq!(diagonal, [2, 4, 6, 8]);
        assert_eq!(result.matches_table().unwrap()[15], 4);
    }
}

#[test]
fn layouts_agree() {
    let matrix = dna();
    for (query, reference) in pairs() {
        for expected_spec in KernelSpec::all().filter(|s| s.layout == Layout::Serial) {
            let expected = align(expected_spec, &query, &reference, OPEN, EXTEND, &matrix).unwrap();
            for spec in vector_specs(expected_spec.regime, expected_spec.storage) {
                let result = align(spec, &query, &reference, OPEN, EXTEND, &matrix).unwrap();
                if result.is_saturated() {
                    assert_eq!(spec.width, Some(Width::W8));
                    continue;
                }

                assert_eq!(result.score(), expected.score(), "{spec}");
                assert_eq!(result.end_query(), expected.end_query(), "{spec}");
                assert_eq!(result.end_ref(), expected.end_ref(), "{spec}");
                assert_eq!(result.matches().ok(), expected.matches().ok(), "{spec}");
                assert_eq!(result.similar().ok(), expected.similar().ok(), "{spec}");
                assert_eq!(result.length().ok(), expected.length().ok(), "{spec}");
                assert_eq!(result.score_table().ok(), expected.score_table().ok(), "{spec}");
                assert_eq!(result.score_row().ok(), expected.score_row().ok(), "{spec}");
                assert_eq!(result.score_col().ok(), expected.score_col().ok(), "{spec}");
                assert_eq!(result.length_col().ok(), expected.length_col().ok(), "{spec}");
            }
        }
    }
}

#[test]
fn widths_agree() {
    let matrix = SubstitutionMatrix::lookup("blosum62").unwrap();
    let query = b"MKTAYIAKQRQISFVKSHFSRQLEERLGLIEVQAPILSRVGDGTQDNLSGAEKAVQVKVKALPDAQFEVVHSLAKWKRQTLGQHDFSAGEGLYTHMKALRPDEDRLSPLHSVYVDQWDWERVMGDGERQFSTLKSTVEAIWAGIKATEAAVSEEFGLAPFLPDQIHFVHSQELLSRYPDLDAKGRERAIAKDLGAVFLVGIGGKLSDGHRHDVRAPDYDDWUAXGLLNEAYAKLRQLRRD";
    let reference = b"MKTAYIAKQRQISFVKSHFSRQLEERLGLIEVQAPILSRVGDGTQDNLSGAEKAVQVKVKALPDAQFEVVHSLAKWKRQTLGQHDFSAGEGLYTHMKALRPDEDRLSPLHSVYVDQWDWERVMGDGERQFSTLKSTVEAIWAGIKATEAAVSEEFGLAPFLPDQIHFVHSQELLSRYPDLDAKGRERAIAKDLGAVFLVGIGGKLSDGHRHDVRAPDYDDWSTPSELGHAGLNGDILVWNPVLEDAFELSSMGIRVDADTLKHALEKTDAPRLLAEFSALAWRS";

    for layout in [Layout::Scan, Layout::Striped, Layout::Diag] {
        let widest = align(
            KernelSpec::simd(Regime::Sw, Storage::Plain, layout, Width::W64),
            query,
            reference,
            OPEN,
            EXTEND,
            matrix,
        )
        .unwrap();
        assert!(!widest.is_saturated());

        for width in [Width::W8, Width::W16, Width::W32] {
            let result = align(
                KernelSpec::simd(Regime::Sw, Storage::Plain, layout, width),
                query,
                reference,
                OPEN,
                EXTEND,
                matrix,
            )
            .unwrap();
            if !result.is_saturated() {
                assert_eq!(result.score(), widest.score(), "{layout:?} {width}");
            }
        }

        // 8 bits cannot hold a score this large, so the cascade has to widen
        let sat = align(
            KernelSpec::simd(Regime::Sw, Storage::Plain, layout, Width::Sat),
            query,
            reference,
            OPEN,
            EXTEND,
            matrix,
        )
        .unwrap();
        assert!(!sat.is_saturated());
        assert_eq!(sat.score(), widest.score());
        assert_eq!((sat.end_query(), sat.end_ref()), (widest.end_query(), widest.end_ref()));
        if pairalign::platform::has_vector_unit() {
            assert!(sat.width() > Some(Width::W8));
        }
    }
}

#[test]
fn traceback_scores_match() {
    let matrix = dna();
    for (query, reference) in pairs() {
        for regime in [Regime::Nw, Regime::Sw, Regime::Sg, Regime::SgQx, Regime::SgDx, Regime::SgQbDe, Regime::SgQeDb] {
            for layout in [Layout::Serial, Layout::Striped, Layout::Scan, Layout::Diag] {
                let spec = if layout == Layout::Serial {
                    KernelSpec::serial(regime, Storage::Trace)
                } else {
                    KernelSpec::simd(regime, Storage::Trace, layout, Width::Sat)
                };
                let result = align(spec, &query, &reference, OPEN, EXTEND, &matrix).unwrap();
                if regime == Regime::Sw && result.score() == 0 {
                    continue;
                }

                let cigar = result.cigar(&CigarOptions::default()).unwrap();
                let rescored = score_from_cigar(
                    &cigar.cigar,
                    &query,
                    &reference,
                    cigar.beg_query,
                    cigar.beg_ref,
                    OPEN,
                    EXTEND,
                    &matrix,
                )
                .unwrap();
                assert_eq!(rescored, result.score(), "{spec} {cigar}");

                // The CIGAR ends at the end cell
                assert_eq!(cigar.beg_query + cigar.cigar.query_length(), result.end_query() + 1, "{spec}");
                assert_eq!(cigar.beg_ref + cigar.cigar.ref_length(), result.end_ref() + 1, "{spec}");

                let traceback = result.traceback(&TracebackOptions::default()).unwrap();
                assert_eq!(traceback.query.len(), traceback.reference.len());
                assert_eq!(traceback.query.len(), traceback.comparison.len());
            }
        }
    }
}

#[test]
fn global_tracebacks_span_both_sequences() {
    let matrix = dna();
    let result = align(spec("nw_trace_striped_sat"), b"GATTACA", b"GCATGCU", OPEN, EXTEND, &matrix).unwrap();
    let traceback = result.traceback(&TracebackOptions::default()).unwrap();
    let ungapped = |line: &[u8]| line.iter().filter(|&&b| b != b'-').copied().collect::<Vec<_>>();
    assert_eq!(ungapped(&traceback.query), b"GATTACA");
    assert_eq!(ungapped(&traceback.reference), b"GCATGCU");
}

#[test]
fn markers_and_memo() {
    let matrix = SubstitutionMatrix::lookup("blosum62").unwrap();
    let result = align(spec("sw_trace_scan_sat"), b"HEAGAWGHEE", b"PAWHEAE", OPEN, EXTEND, matrix).unwrap();

    let options = TracebackOptions {
        match_marker: "*".to_string(),
        ..Default::default()
    };
    let first = result.traceback(&options).unwrap();
    assert_eq!(first.comparison, b"** **");
    let again = result.traceback(&options).unwrap();
    assert!(Arc::ptr_eq(&first, &again));

    let other = result.traceback(&TracebackOptions::default()).unwrap();
    assert!(!Arc::ptr_eq(&first, &other));
    assert_eq!(other.comparison, b"|| ||");

    // Results can be shared between threads that render tracebacks
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let cigar = result.cigar(&CigarOptions::default()).unwrap();
                assert_eq!(cigar.to_string(), "2M1I2M");
            });
        }
    });
}

#[test]
fn storage_errors() {
    let matrix = dna();
    let plain = align(spec("sw_striped_16"), b"ACGT", b"ACGT", OPEN, EXTEND, &matrix).unwrap();
    assert_eq!(
        plain.traceback(&TracebackOptions::default()).err(),
        Some(AlignError::TraceUnavailable)
    );
    assert_eq!(plain.cigar(&CigarOptions::default()).err(), Some(AlignError::TraceUnavailable));
    assert!(matches!(plain.matches(), Err(AlignError::InvalidArgument(_))));
    assert!(matches!(plain.score_table(), Err(AlignError::InvalidArgument(_))));

    let table = align(spec("sw_table_diag_16"), b"ACGT", b"ACGT", OPEN, EXTEND, &matrix).unwrap();
    assert_eq!(table.score_table().unwrap().len(), 16);
    assert!(table.matches_table().is_err());
    assert!(table.score_row().is_err());

    let rowcol = align(spec("sw_stats_rowcol_scan_8"), b"ACGT", b"ACGTT", OPEN, EXTEND, &matrix).unwrap();
    assert_eq!(rowcol.score_row().unwrap().len(), 5);
    assert_eq!(rowcol.score_col().unwrap().len(), 4);
    assert_eq!(rowcol.matches_row().unwrap()[3], 4);
}

#[test]
fn deterministic() {
    let matrix = SubstitutionMatrix::lookup("blosum62").unwrap();
    let run = || {
        let result = align(spec("sg_trace_striped_sat"), b"HEAGAWGHEE", b"PAWHEAE", OPEN, EXTEND, matrix).unwrap();
        let traceback = result.traceback(&TracebackOptions::default()).unwrap();
        (result.score(), result.end_query(), result.end_ref(), traceback.to_string())
    };
    assert_eq!(run(), run());
}

#[test]
fn cigar_round_trip() {
    for text in ["5M", "3M2I4D10M", "1=1X1=2D2X1=", "12S30M1N3M"] {
        let packed = cigar_encode_string(text).unwrap();
        assert_eq!(cigar_decode(&packed).to_string(), text);
        assert_eq!(packed.len(), text.chars().filter(|c| !c.is_ascii_digit()).count());
    }
    assert!(cigar_encode_string("3Q").is_err());
    assert!(cigar_encode_string("M").is_err());
}

#[test]
fn ssw_summary() {
    let matrix = dna();
    let result = ssw(b"AAAAAGGGGG", b"TTTTTGGGGG", OPEN, EXTEND, &matrix).unwrap();
    assert_eq!(result.score1, 10);
    assert_eq!((result.read_begin1, result.read_end1), (5, 9));
    assert_eq!((result.ref_begin1, result.ref_end1), (5, 9));
    assert_eq!(result.cigar, vec![5 << 4]);
}

#[test]
fn fallback_is_reported() {
    let matrix = dna();
    let result = align_with(
        spec("sw_striped_sat"),
        b"ACGT",
        b"ACGT",
        OPEN,
        EXTEND,
        &matrix,
        &DispatchOptions::default(),
    )
    .unwrap();

    if pairalign::platform::has_vector_unit() {
        assert!(result.is_striped());
        assert!(result.width().is_some());
    } else {
        assert!(result.is_serial());
        assert_eq!(result.width(), None);
    }
    assert_eq!(result.score(), 8);
}
