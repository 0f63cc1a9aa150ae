use super::{banded::Band, *};
use crate::alignment::{
    AlignError, Layout, Profile, Storage, Width,
    dispatch::run_kernel,
    recorder::Recording,
};

const OPEN: i64 = 10;
const EXTEND: i64 = 1;
const WIDTHS: [Width; 4] = [Width::W8, Width::W16, Width::W32, Width::W64];
const VECTOR_LAYOUTS: [Layout; 3] = [Layout::Scan, Layout::Striped, Layout::Diag];

fn dna() -> SubstitutionMatrix {
    SubstitutionMatrix::create(b"ACGT", 2, -1).unwrap()
}

/// Pairs chosen to hit short queries, long gaps on either side, and more rows
/// than one vector of 8-bit lanes holds.
fn corpus() -> Vec<(Vec<u8>, Vec<u8>)> {
    #[allow(unused_mut)]
    let mut pairs: Vec<(Vec<u8>, Vec<u8>)> = [
        ("GATTACA", "GCATGCU"),
        ("A", "A"),
        ("A", "CCCCGA"),
        ("CCCCGA", "T"),
        ("ACGT", "TTTTACGTTTTT"),
        ("TTTTACGTTTTT", "ACGT"),
        ("AAAAAGGGGG", "TTTTTGGGGG"),
        ("ACGTACGTACGTACGTACGTACGTACGTACGTACGTAC", "ACGTACGTTACGTACGACGTACGTAC"),
        ("GGGGGGGGGGCCCCCCCCCCAAAAAAAAAATTTTTTTTTTGGGGG", "GGGGGGGGGGAAAAAAAAAATTTTTTTTTTGGGGG"),
    ]
    .into_iter()
    .map(|(q, r)| (q.as_bytes().to_vec(), r.as_bytes().to_vec()))
    .collect();

    #[cfg(feature = "rand")]
    {
        use crate::data::generate::{rand_mutate, rand_sequence};
        for seed in 0..6u64 {
            #[allow(clippy::cast_possible_truncation)]
            let query = rand_sequence(b"ACGT", 20 + 11 * seed as usize, seed);
            let related = rand_mutate(&query, b"ACGT", 0.15, seed + 100);
            let unrelated = rand_sequence(b"ACGT", 33, seed + 200);
            pairs.push((query.clone(), related));
            pairs.push((query, unrelated));
        }
    }

    pairs
}

/// Runs one kernel over a pair, recording cells for any storage but plain.
fn run(
    query: &[u8], reference: &[u8], matrix: &SubstitutionMatrix, regime: Regime, storage: Storage, layout: Layout,
    width: Option<Width>,
) -> Result<(KernelOutput, Recording), AlignError> {
    let profile = Profile::unprepared(query, matrix, Width::Sat, storage.has_stats())?;
    let reference = matrix.to_ordinals(reference);
    let problem = Problem::new(profile.ordinals(), &reference, matrix, regime, OPEN, EXTEND);

    let mut recorder = if storage.records_cells() {
        Some(CellRecorder::new(
            profile.ordinals(),
            &reference,
            matrix,
            profile.tallies(),
            regime,
            problem.boundary,
            storage,
        )?)
    } else {
        None
    };
    let output = run_kernel(layout, width, &problem, &profile, recorder.as_mut(), false)?;
    Ok((output, recorder.map(CellRecorder::finish).unwrap_or_default()))
}

#[test]
fn vector_layouts_match_serial() {
    let matrix = dna();
    for (query, reference) in corpus() {
        for regime in Regime::ALL {
            let (expected, _) = run(&query, &reference, &matrix, regime, Storage::Plain, Layout::Serial, None).unwrap();
            assert!(!expected.saturated);

            for layout in VECTOR_LAYOUTS {
                for width in WIDTHS {
                    let (output, _) =
                        run(&query, &reference, &matrix, regime, Storage::Plain, layout, Some(width)).unwrap();
                    if width == Width::W8 && output.saturated {
                        continue;
                    }
                    assert_eq!(
                        output, expected,
                        "{regime:?} {layout:?} {width} on {:?} vs {:?}",
                        String::from_utf8_lossy(&query),
                        String::from_utf8_lossy(&reference)
                    );
                }
            }
        }
    }
}

#[test]
fn recordings_match_serial() {
    let matrix = dna();
    for (query, reference) in corpus().into_iter().take(8) {
        for regime in [Regime::Nw, Regime::Sw, Regime::SgQbDe, Regime::SgQeDb, Regime::SgDx] {
            for storage in [Storage::StatsTable, Storage::StatsRowcol, Storage::Trace] {
                let (_, expected) = run(&query, &reference, &matrix, regime, storage, Layout::Serial, None).unwrap();
                for layout in VECTOR_LAYOUTS {
                    let (output, recording) =
                        run(&query, &reference, &matrix, regime, storage, layout, Some(Width::W16)).unwrap();
                    assert_eq!(recording, expected, "{regime:?} {storage:?} {layout:?}");
                    assert_eq!(
                        recording.end,
                        Some((output.score, output.end_query, output.end_ref))
                    );
                }
            }
        }
    }
}

#[test]
fn saturation_is_flagged() {
    let matrix = dna();
    let query = vec![b'A'; 100];
    for regime in [Regime::Nw, Regime::Sw, Regime::SgQx] {
        for layout in VECTOR_LAYOUTS {
            let (narrow, _) = run(&query, &query, &matrix, regime, Storage::Plain, layout, Some(Width::W8)).unwrap();
            assert!(narrow.saturated, "{regime:?} {layout:?}");

            let (wide, _) = run(&query, &query, &matrix, regime, Storage::Plain, layout, Some(Width::W16)).unwrap();
            assert!(!wide.saturated);
            assert_eq!(wide.score, 200);
            assert_eq!((wide.end_query, wide.end_ref), (99, 99));
        }
    }
}

#[test]
fn limits() {
    let matrix = dna();
    let query = matrix.to_ordinals(b"ACGTACGT");

    let problem = Problem::new(&query, &query, &matrix, Regime::Nw, OPEN, EXTEND);
    let limits = problem.limits::<i8>().unwrap();
    assert_eq!((limits.low, limits.high), (-118, 125));
    assert!(problem.limits::<i64>().is_some());

    // The open penalty does not fit in 8 bits
    let problem = Problem::new(&query, &query, &matrix, Regime::Nw, 200, EXTEND);
    assert!(problem.limits::<i8>().is_none());
    assert!(problem.limits::<i16>().is_some());

    // The deepest boundary cell is already past the lower limit
    let long = vec![0; 150];
    let problem = Problem::new(&query, &long, &matrix, Regime::Nw, OPEN, EXTEND);
    assert!(problem.limits::<i8>().is_none());
    let problem = Problem::new(&query, &long, &matrix, Regime::Sw, OPEN, EXTEND);
    assert!(problem.limits::<i8>().is_some());
}

#[test]
fn band() {
    let band = Band::new(4, 6, 1);
    assert!(band.contains(0, 0));
    assert!(band.contains(3, 5));
    assert!(band.contains(0, 3));
    assert!(!band.contains(0, 4));
    assert!(!band.contains(2, 0));
}

#[test]
fn banded_matches_serial() {
    let matrix = dna();
    for (query, reference) in corpus() {
        let query = matrix.to_ordinals(&query);
        let reference = matrix.to_ordinals(&reference);
        let problem = Problem::new(&query, &reference, &matrix, Regime::Nw, OPEN, EXTEND);

        let expected = serial::serial(&problem, None).unwrap();
        let k = query.len().max(reference.len());
        assert_eq!(banded::banded(&problem, k).unwrap(), expected);

        // A narrower band can only lose paths
        assert!(banded::banded(&problem, 1).unwrap().score <= expected.score);
    }

    let query = matrix.to_ordinals(b"ACGTACGT");
    let reference = matrix.to_ordinals(b"ACCTACGT");
    let problem = Problem::new(&query, &reference, &matrix, Regime::Nw, OPEN, EXTEND);
    let output = banded::banded(&problem, 1).unwrap();
    assert_eq!((output.score, output.end_query, output.end_ref), (13, 7, 7));
}
