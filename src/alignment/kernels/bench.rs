extern crate test;
use super::*;
use crate::{
    alignment::{Layout, Profile, Width, dispatch::run_kernel},
    data::generate::{rand_mutate, rand_sequence},
};
use std::sync::LazyLock;
use test::Bencher;

static QUERY: LazyLock<Vec<u8>> = LazyLock::new(|| rand_sequence(b"ACGT", 300, 42));
static REFERENCE: LazyLock<Vec<u8>> = LazyLock::new(|| {
    let mut reference = rand_sequence(b"ACGT", 700, 43);
    reference.extend(rand_mutate(&QUERY, b"ACGT", 0.05, 44));
    reference.extend(rand_sequence(b"ACGT", 700, 45));
    reference
});

fn nuc44() -> &'static SubstitutionMatrix {
    SubstitutionMatrix::lookup("nuc44").unwrap()
}

fn bench_kernel(b: &mut Bencher, regime: Regime, layout: Layout, width: Option<Width>) {
    let matrix = nuc44();
    let profile = Profile::unprepared(&QUERY, matrix, Width::Sat, false).unwrap();
    let reference = matrix.to_ordinals(&REFERENCE);
    let problem = Problem::new(profile.ordinals(), &reference, matrix, regime, 10, 1);
    // Build the striped scores outside of the timed loop
    run_kernel(layout, width, &problem, &profile, None, false).unwrap();
    b.iter(|| run_kernel(layout, width, &problem, &profile, None, false));
}

#[bench]
fn profile_build_i8(b: &mut Bencher) {
    b.iter(|| Profile::new(&QUERY, nuc44(), Width::W8));
}

#[bench]
fn profile_build_i16(b: &mut Bencher) {
    b.iter(|| Profile::new(&QUERY, nuc44(), Width::W16));
}

#[bench]
fn sw_serial(b: &mut Bencher) {
    bench_kernel(b, Regime::Sw, Layout::Serial, None);
}

mod int08 {
    use super::*;

    #[bench]
    fn sw_striped(b: &mut Bencher) {
        bench_kernel(b, Regime::Sw, Layout::Striped, Some(Width::W8));
    }

    #[bench]
    fn sw_scan(b: &mut Bencher) {
        bench_kernel(b, Regime::Sw, Layout::Scan, Some(Width::W8));
    }
}

mod int16 {
    use super::*;

    #[bench]
    fn sw_striped(b: &mut Bencher) {
        bench_kernel(b, Regime::Sw, Layout::Striped, Some(Width::W16));
    }

    #[bench]
    fn sw_scan(b: &mut Bencher) {
        bench_kernel(b, Regime::Sw, Layout::Scan, Some(Width::W16));
    }

    #[bench]
    fn sw_diag(b: &mut Bencher) {
        bench_kernel(b, Regime::Sw, Layout::Diag, Some(Width::W16));
    }

    #[bench]
    fn nw_striped(b: &mut Bencher) {
        bench_kernel(b, Regime::Nw, Layout::Striped, Some(Width::W16));
    }

    #[bench]
    fn nw_scan(b: &mut Bencher) {
        bench_kernel(b, Regime::Nw, Layout::Scan, Some(Width::W16));
    }
}

mod int32 {
    use super::*;

    #[bench]
    fn sw_striped(b: &mut Bencher) {
        bench_kernel(b, Regime::Sw, Layout::Striped, Some(Width::W32));
    }

    #[bench]
    fn sw_scan(b: &mut Bencher) {
        bench_kernel(b, Regime::Sw, Layout::Scan, Some(Width::W32));
    }
}
