use crate::{
    alignment::{
        AlignError, AlignResult, KernelName, KernelSpec, Layout, Profile, Regime, Storage, Width,
        kernels::{KernelOutput, Problem, banded, diag, scan, serial, striped},
        profile::{LANES_8, LANES_16, LANES_32, LANES_64},
        recorder::{CellRecorder, Recording},
        result::TraceData,
    },
    data::matrices::SubstitutionMatrix,
    platform::has_vector_unit,
};

/// Per-call dispatcher settings.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DispatchOptions {
    /// Run the serial kernel when a vectorized layout is requested on a host
    /// without a vector unit. When `false`, such requests fail with
    /// [`AlignError::InvalidArgument`].
    pub fallback_to_serial: bool,
}

impl Default for DispatchOptions {
    #[inline]
    fn default() -> Self {
        DispatchOptions {
            fallback_to_serial: true,
        }
    }
}

/// Aligns `query` against `reference` with the kernel described by `spec`.
///
/// `open` is the cost of the first cell of a gap and `extend` the cost of
/// every further cell, so a gap of `k` cells costs `open + (k - 1) * extend`.
/// Both are non-negative costs and must satisfy `0 <= extend <= open`.
/// With the `sat` width the kernel first runs in 8-bit lanes and reruns at the
/// next wider width whenever the lanes saturate.
///
/// ## Errors
///
/// [`AlignError::InvalidArgument`] if either sequence is empty, if the
/// penalties are negative or `extend > open`, or if `spec` does not name a
/// kernel. [`AlignError::OutOfMemory`] if the tables cannot be allocated.
///
/// ## Example
///
/// ```
/// # use pairalign::{alignment::align, data::matrices::SubstitutionMatrix};
/// let matrix = SubstitutionMatrix::create(b"ACGT", 2, -1).unwrap();
/// let result = align("sw_scan_sat".parse().unwrap(), b"AAAAAGGGGG", b"TTTTTGGGGG", 10, 1, &matrix).unwrap();
/// assert_eq!(result.score(), 10);
/// assert_eq!((result.end_query(), result.end_ref()), (9, 9));
/// ```
pub fn align(
    spec: KernelSpec, query: &[u8], reference: &[u8], open: i32, extend: i32, matrix: &SubstitutionMatrix,
) -> Result<AlignResult, AlignError> {
    align_with(spec, query, reference, open, extend, matrix, &DispatchOptions::default())
}

/// [`align`] with explicit [`DispatchOptions`].
///
/// ## Errors
///
/// See [`align`].
pub fn align_with(
    spec: KernelSpec, query: &[u8], reference: &[u8], open: i32, extend: i32, matrix: &SubstitutionMatrix,
    options: &DispatchOptions,
) -> Result<AlignResult, AlignError> {
    check_spec(spec)?;
    let profile = Profile::unprepared(
        query,
        matrix,
        spec.width.unwrap_or(Width::Sat),
        spec.storage.has_stats(),
    )?;
    run(spec, &profile, reference, open, extend, options)
}

/// Aligns a prebuilt query [`Profile`] against `reference`.
///
/// ## Errors
///
/// As [`align`], and [`AlignError::InvalidArgument`] if a vectorized kernel
/// is asked to consume a profile built for another width, or a `stats` kernel
/// a profile built without [`Profile::new_stats`].
pub fn align_profile(
    spec: KernelSpec, profile: &Profile<'_>, reference: &[u8], open: i32, extend: i32,
) -> Result<AlignResult, AlignError> {
    align_profile_with(spec, profile, reference, open, extend, &DispatchOptions::default())
}

/// [`align_profile`] with explicit [`DispatchOptions`].
///
/// ## Errors
///
/// See [`align_profile`].
pub fn align_profile_with(
    spec: KernelSpec, profile: &Profile<'_>, reference: &[u8], open: i32, extend: i32, options: &DispatchOptions,
) -> Result<AlignResult, AlignError> {
    check_spec(spec)?;
    if let Some(width) = spec.width
        && width != profile.width()
    {
        return Err(AlignError::invalid(format!(
            "a profile built for width {} cannot feed '{spec}'",
            profile.width()
        )));
    }
    if spec.storage.has_stats() && !profile.is_stats() {
        return Err(AlignError::invalid(format!(
            "'{spec}' needs a profile built with statistics"
        )));
    }
    run(spec, profile, reference, open, extend, options)
}

/// Aligns with the kernel named `name`, such as `sw_trace_striped_16`. Names
/// carrying the `_profile` marker build a [`Profile`] for the call.
///
/// ## Errors
///
/// [`AlignError::NotFound`] for an unknown name, otherwise as [`align`].
pub fn align_by_name(
    name: &str, query: &[u8], reference: &[u8], open: i32, extend: i32, matrix: &SubstitutionMatrix,
) -> Result<AlignResult, AlignError> {
    let KernelName { spec, profile } = name.parse()?;
    if profile {
        let width = spec.width.unwrap_or(Width::Sat);
        let profile = if spec.storage.has_stats() {
            Profile::new_stats(query, matrix, width)?
        } else {
            Profile::new(query, matrix, width)?
        };
        align_profile(spec, &profile, reference, open, extend)
    } else {
        align(spec, query, reference, open, extend, matrix)
    }
}

/// Aligns a prebuilt [`Profile`] with the kernel named `name`, which must
/// carry the `_profile` marker, such as `sw_striped_profile_sat`.
///
/// ## Errors
///
/// [`AlignError::NotFound`] for an unknown name, [`AlignError::InvalidArgument`]
/// for a name without the marker, otherwise as [`align_profile`].
pub fn align_profile_by_name(
    name: &str, profile: &Profile<'_>, reference: &[u8], open: i32, extend: i32,
) -> Result<AlignResult, AlignError> {
    let KernelName { spec, profile: marked } = name.parse()?;
    if !marked {
        return Err(AlignError::invalid(format!("'{name}' does not consume a profile")));
    }
    align_profile(spec, profile, reference, open, extend)
}

/// Global alignment restricted to the diagonals within `k` of the band from
/// the first to the last cell.
///
/// With `k` at least the longer sequence length the result equals the global
/// alignment.
///
/// ## Errors
///
/// See [`align`].
///
/// ## Example
///
/// ```
/// # use pairalign::{alignment::nw_banded, data::matrices::SubstitutionMatrix};
/// let matrix = SubstitutionMatrix::create(b"ACGT", 2, -1).unwrap();
/// let result = nw_banded(b"ACGTACGT", b"ACCTACGT", 10, 1, 1, &matrix).unwrap();
/// assert_eq!(result.score(), 13);
/// assert!(result.is_banded());
/// ```
pub fn nw_banded(
    query: &[u8], reference: &[u8], open: i32, extend: i32, k: usize, matrix: &SubstitutionMatrix,
) -> Result<AlignResult, AlignError> {
    let (open, extend) = check_inputs(query, reference, open, extend)?;
    let query_ords = matrix.to_ordinals(query);
    let reference_ords = matrix.to_ordinals(reference);
    let problem = Problem::new(&query_ords, &reference_ords, matrix, Regime::Nw, open, extend);
    let output = banded::banded(&problem, k)?;

    Ok(AlignResult {
        score:     output.score,
        end_query: output.end_query,
        end_ref:   output.end_ref,
        len_query: query.len(),
        len_ref:   reference.len(),
        spec:      KernelSpec::serial(Regime::Nw, Storage::Plain),
        width:     None,
        saturated: false,
        banded:    true,
        tally:     None,
        table:     None,
        rowcol:    None,
        trace:     None,
        memo:      Default::default(),
    })
}

fn check_spec(spec: KernelSpec) -> Result<(), AlignError> {
    if spec.is_valid() {
        Ok(())
    } else {
        Err(AlignError::invalid(format!(
            "the {layout:?} layout {needs} a width",
            layout = spec.layout,
            needs = if spec.layout.is_simd() { "needs" } else { "takes no" }
        )))
    }
}

/// Validates the sequences and penalties, returning the penalties widened.
fn check_inputs(query: &[u8], reference: &[u8], open: i32, extend: i32) -> Result<(i64, i64), AlignError> {
    if query.is_empty() || reference.is_empty() {
        return Err(AlignError::invalid("sequences must not be empty"));
    }
    if open < 0 || extend < 0 {
        return Err(AlignError::invalid(format!(
            "gap penalties must not be negative, got open {open} and extend {extend}"
        )));
    }
    if extend > open {
        return Err(AlignError::invalid(format!(
            "the gap extend penalty {extend} exceeds the gap open penalty {open}"
        )));
    }
    Ok((i64::from(open), i64::from(extend)))
}

fn run(
    spec: KernelSpec, profile: &Profile<'_>, reference: &[u8], open: i32, extend: i32, options: &DispatchOptions,
) -> Result<AlignResult, AlignError> {
    let (open, extend) = check_inputs(profile.query(), reference, open, extend)?;

    let spec = if spec.layout.is_simd() && !has_vector_unit() {
        if !options.fallback_to_serial {
            return Err(AlignError::invalid(format!(
                "'{spec}' needs a vector unit and none was detected"
            )));
        }
        log::debug!("No vector unit detected, running '{spec}' with the serial kernel");
        KernelSpec::serial(spec.regime, spec.storage)
    } else {
        spec
    };

    let matrix = profile.matrix();
    let reference_ords = matrix.to_ordinals(reference);
    let problem = Problem::new(profile.ordinals(), &reference_ords, matrix, spec.regime, open, extend);
    let cascade = spec.width == Some(Width::Sat);

    let mut width = match spec.width {
        Some(Width::Sat) => Some(Width::W8),
        width => width,
    };

    let (output, recording) = loop {
        let stop_on_saturation = cascade && width < Some(Width::W64);
        let mut recorder = if spec.storage.records_cells() {
            Some(CellRecorder::new(
                profile.ordinals(),
                &reference_ords,
                matrix,
                profile.tallies(),
                spec.regime,
                problem.boundary,
                spec.storage,
            )?)
        } else {
            None
        };

        let output = run_kernel(spec.layout, width, &problem, profile, recorder.as_mut(), stop_on_saturation)?;

        if output.saturated && cascade {
            if let Some(current) = width
                && let Some(wider) = current.wider()
            {
                log::debug!("'{spec}' saturated {current}-bit lanes, retrying with {wider}-bit lanes");
                width = Some(wider);
                continue;
            }
            log::warn!("'{spec}' saturated even at 64 bits; the result is flagged as saturated");
        }

        break (output, recorder.map(CellRecorder::finish));
    };

    let Recording {
        end,
        end_tally,
        table,
        rowcol,
        trace,
    } = recording.unwrap_or_default();

    debug_assert!(
        output.saturated || !spec.storage.records_cells() || end == Some((output.score, output.end_query, output.end_ref)),
        "the recorded end cell disagrees with the kernel"
    );

    let trace = trace.map(|trace| TraceData {
        trace,
        query: profile.query().to_vec(),
        reference: reference.to_vec(),
        matrix: matrix.clone(),
        open,
        extend,
    });

    Ok(AlignResult {
        score: output.score,
        end_query: output.end_query,
        end_ref: output.end_ref,
        len_query: profile.len(),
        len_ref: reference.len(),
        spec,
        width,
        saturated: output.saturated,
        banded: false,
        tally: end_tally,
        table,
        rowcol,
        trace,
        memo: Default::default(),
    })
}

/// Runs one fixed-width pass of `layout`.
pub(crate) fn run_kernel(
    layout: Layout, width: Option<Width>, problem: &Problem<'_>, profile: &Profile<'_>,
    recorder: Option<&mut CellRecorder<'_>>, stop_on_saturation: bool,
) -> Result<KernelOutput, AlignError> {
    let stop = stop_on_saturation;
    match (layout, width) {
        (Layout::Serial, _) => serial::serial(problem, recorder),
        (Layout::Striped, Some(Width::W8)) => striped::striped::<i8, LANES_8>(problem, profile.striped_i8()?, recorder, stop),
        (Layout::Striped, Some(Width::W16)) => {
            striped::striped::<i16, LANES_16>(problem, profile.striped_i16()?, recorder, stop)
        }
        (Layout::Striped, Some(Width::W32)) => {
            striped::striped::<i32, LANES_32>(problem, profile.striped_i32()?, recorder, stop)
        }
        (Layout::Striped, Some(Width::W64)) => {
            striped::striped::<i64, LANES_64>(problem, profile.striped_i64()?, recorder, stop)
        }
        (Layout::Scan, Some(Width::W8)) => scan::scan::<i8, LANES_8>(problem, profile.striped_i8()?, recorder, stop),
        (Layout::Scan, Some(Width::W16)) => scan::scan::<i16, LANES_16>(problem, profile.striped_i16()?, recorder, stop),
        (Layout::Scan, Some(Width::W32)) => scan::scan::<i32, LANES_32>(problem, profile.striped_i32()?, recorder, stop),
        (Layout::Scan, Some(Width::W64)) => scan::scan::<i64, LANES_64>(problem, profile.striped_i64()?, recorder, stop),
        (Layout::Diag, Some(Width::W8)) => diag::diag::<i8, LANES_8>(problem, recorder, stop),
        (Layout::Diag, Some(Width::W16)) => diag::diag::<i16, LANES_16>(problem, recorder, stop),
        (Layout::Diag, Some(Width::W32)) => diag::diag::<i32, LANES_32>(problem, recorder, stop),
        (Layout::Diag, Some(Width::W64)) => diag::diag::<i64, LANES_64>(problem, recorder, stop),
        (_, None | Some(Width::Sat)) => Err(AlignError::invalid(format!(
            "the {layout:?} layout needs a fixed width"
        ))),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn dna() -> SubstitutionMatrix {
        SubstitutionMatrix::create(b"ACGT", 2, -1).unwrap()
    }

    #[test]
    fn rejects_bad_arguments() {
        let matrix = dna();
        let spec = KernelSpec::serial(Regime::Nw, Storage::Plain);
        for (query, reference, open, extend) in [
            (&b""[..], &b"ACGT"[..], 10, 1),
            (&b"ACGT"[..], &b""[..], 10, 1),
            (&b"ACGT"[..], &b"ACGT"[..], -1, 0),
            (&b"ACGT"[..], &b"ACGT"[..], 1, 2),
        ] {
            assert!(matches!(
                align(spec, query, reference, open, extend, &matrix),
                Err(AlignError::InvalidArgument(_))
            ));
        }

        let widthless = KernelSpec {
            width: None,
            ..KernelSpec::simd(Regime::Sw, Storage::Plain, Layout::Striped, Width::W8)
        };
        assert!(align(widthless, b"ACGT", b"ACGT", 10, 1, &matrix).is_err());
    }

    #[test]
    fn extend_may_not_exceed_open() {
        let matrix = dna();
        for name in ["nw", "sg_qb_de", "sw_striped_16", "sw_scan_sat", "nw_diag_32"] {
            let spec: KernelSpec = name.parse().unwrap();
            let err = align(spec, b"ACGTT", b"ACGT", 1, 2, &matrix).unwrap_err();
            assert!(matches!(&err, AlignError::InvalidArgument(m) if m.contains("exceeds")), "{name}: {err}");
            assert!(align(spec, b"ACGTT", b"ACGT", 2, 2, &matrix).is_ok(), "{name}");
        }

        let profile = Profile::new(b"ACGTT", &matrix, Width::W16).unwrap();
        assert!(matches!(
            align_profile("sw_striped_16".parse().unwrap(), &profile, b"ACGT", 0, 1),
            Err(AlignError::InvalidArgument(_))
        ));
    }

    #[test]
    fn profile_must_match() {
        let matrix = dna();
        let profile = Profile::new(b"ACGTACGT", &matrix, Width::W16).unwrap();

        let ok = KernelSpec::simd(Regime::Sw, Storage::Plain, Layout::Striped, Width::W16);
        assert_eq!(align_profile(ok, &profile, b"ACGT", 10, 1).unwrap().score(), 8);

        let wrong_width = KernelSpec::simd(Regime::Sw, Storage::Plain, Layout::Scan, Width::W8);
        assert!(align_profile(wrong_width, &profile, b"ACGT", 10, 1).is_err());

        let needs_stats = KernelSpec::simd(Regime::Sw, Storage::Stats, Layout::Striped, Width::W16);
        assert!(align_profile(needs_stats, &profile, b"ACGT", 10, 1).is_err());

        let stats = Profile::new_stats(b"ACGTACGT", &matrix, Width::W16).unwrap();
        assert_eq!(align_profile(needs_stats, &stats, b"ACGT", 10, 1).unwrap().matches(), Ok(4));
    }

    #[test]
    fn by_name() {
        let matrix = dna();
        let plain = align_by_name("sg_qx_striped_sat", b"ACGT", b"TTTTACGTTTTT", 5, 1, &matrix).unwrap();
        let profiled = align_by_name("sg_qx_striped_profile_sat", b"ACGT", b"TTTTACGTTTTT", 5, 1, &matrix).unwrap();
        assert_eq!(plain.score(), 8);
        assert_eq!(plain.score(), profiled.score());
        assert_eq!((plain.end_query(), plain.end_ref()), (3, 7));

        assert!(matches!(
            align_by_name("sw_blocked_8", b"ACGT", b"ACGT", 5, 1, &matrix),
            Err(AlignError::NotFound(_))
        ));

        let profile = Profile::new(b"ACGT", &matrix, Width::Sat).unwrap();
        assert!(align_profile_by_name("sw_scan_sat", &profile, b"ACGT", 5, 1).is_err());
        assert_eq!(
            align_profile_by_name("sw_scan_profile_sat", &profile, b"ACGT", 5, 1)
                .unwrap()
                .score(),
            8
        );
    }

    #[test]
    fn cascade_widens() {
        let matrix = dna();
        let query = vec![b'A'; 200];
        let spec = KernelSpec::simd(Regime::Nw, Storage::Plain, Layout::Striped, Width::Sat);
        let result = align(spec, &query, &query, 10, 1, &matrix).unwrap();

        assert_eq!(result.score(), 400);
        assert!(!result.is_saturated());
        assert_eq!(result.width(), Some(Width::W16));

        let fixed = KernelSpec::simd(Regime::Nw, Storage::Plain, Layout::Striped, Width::W8);
        assert!(align(fixed, &query, &query, 10, 1, &matrix).unwrap().is_saturated());
    }
}
