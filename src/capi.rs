//! ## C ABI
//!
//! Every handle is an opaque pointer owned by the caller and released with
//! the matching `*_free` function. Null pointers are accepted everywhere: a
//! function that cannot produce its value returns null, `false`, or the
//! documented sentinel and stores an error code for the calling thread, which
//! [`pairalign_last_error`] reports. Error codes are those of
//! [`GetCode`](crate::data::err::GetCode) for
//! [`AlignError`](crate::alignment::AlignError).
//!
//! Strings and CIGAR arrays handed out by this module are allocated by Rust
//! on every platform and must only be released through [`pairalign_free`],
//! [`pairalign_traceback_free`], and [`pairalign_cigar_free`].

use crate::{
    alignment::{
        AlignError, AlignResult, CigarOptions, Profile, TracebackOptions, Width, align_by_name, align_profile_by_name,
        nw_banded,
    },
    data::{
        cigar::{Cigar, cigar_decode, cigar_decode_len, cigar_decode_op, cigar_encode, cigar_encode_string},
        err::GetCode,
        matrices::SubstitutionMatrix,
        sequences::Sequences,
    },
    platform,
};
use std::{
    cell::RefCell,
    ffi::{CStr, CString, c_char},
    mem::ManuallyDrop,
    ptr::{self, NonNull},
};

/// Returned by integer accessors that fail.
pub const PAIRALIGN_SENTINEL: i64 = i64::MIN;

thread_local! {
    static LAST_ERROR: RefCell<Option<(i32, CString)>> = const { RefCell::new(None) };
}

fn set_error(err: &AlignError) {
    let message = CString::new(err.to_string()).unwrap_or_default();
    LAST_ERROR.with(|slot| *slot.borrow_mut() = Some((err.get_code(), message)));
}

fn record<T>(result: Result<T, AlignError>) -> Option<T> {
    result.inspect_err(set_error).ok()
}

fn null_argument<T>(what: &str) -> Option<T> {
    set_error(&AlignError::invalid(format!("{what} must not be null")));
    None
}

/// # Safety
///
/// `ptr` is null or valid for reads of `len` bytes that outlive `'a`.
unsafe fn bytes<'a>(ptr: *const u8, len: usize, what: &str) -> Option<&'a [u8]> {
    if ptr.is_null() {
        null_argument(what)
    } else {
        // SAFETY: non-null, and the caller vouches for the length
        Some(unsafe { std::slice::from_raw_parts(ptr, len) })
    }
}

/// # Safety
///
/// `ptr` is null or a NUL-terminated string that outlives `'a`.
unsafe fn text<'a>(ptr: *const c_char, what: &str) -> Option<&'a str> {
    if ptr.is_null() {
        return null_argument(what);
    }
    // SAFETY: non-null and NUL-terminated per the contract
    let s = unsafe { CStr::from_ptr(ptr) };
    record(
        s.to_str()
            .map_err(|_| AlignError::invalid(format!("{what} is not valid UTF-8"))),
    )
}

fn boxed<T>(value: Option<T>) -> *mut T {
    value.map_or(ptr::null_mut(), |v| Box::into_raw(Box::new(v)))
}

fn into_c_string(bytes: Vec<u8>) -> *mut c_char {
    record(CString::new(bytes).map_err(|_| AlignError::invalid("the text contains a NUL byte")))
        .map_or(ptr::null_mut(), CString::into_raw)
}

/// The error code of the last failure on this thread, or `0`.
#[unsafe(no_mangle)]
pub extern "C" fn pairalign_last_error() -> i32 {
    LAST_ERROR.with(|slot| slot.borrow().as_ref().map_or(0, |(code, _)| *code))
}

/// The message of the last failure on this thread, or null. The pointer is
/// valid until the next failure on this thread.
#[unsafe(no_mangle)]
pub extern "C" fn pairalign_last_error_message() -> *const c_char {
    LAST_ERROR.with(|slot| slot.borrow().as_ref().map_or(ptr::null(), |(_, msg)| msg.as_ptr()))
}

/// Forgets the last failure on this thread.
#[unsafe(no_mangle)]
pub extern "C" fn pairalign_clear_error() {
    LAST_ERROR.with(|slot| *slot.borrow_mut() = None);
}

/// Releases a string returned by this library.
///
/// # Safety
///
/// `ptr` is null or a string returned by this library that was not released
/// yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pairalign_free(ptr: *mut c_char) {
    if !ptr.is_null() {
        // SAFETY: allocated by `CString::into_raw`
        drop(unsafe { CString::from_raw(ptr) });
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn pairalign_can_use_neon() -> bool {
    platform::can_use_neon()
}

#[unsafe(no_mangle)]
pub extern "C" fn pairalign_can_use_altivec() -> bool {
    platform::can_use_altivec()
}

#[unsafe(no_mangle)]
pub extern "C" fn pairalign_can_use_sse2() -> bool {
    platform::can_use_sse2()
}

#[unsafe(no_mangle)]
pub extern "C" fn pairalign_can_use_sse41() -> bool {
    platform::can_use_sse41()
}

#[unsafe(no_mangle)]
pub extern "C" fn pairalign_can_use_avx2() -> bool {
    platform::can_use_avx2()
}

/// Monotonic seconds since an unspecified origin.
#[unsafe(no_mangle)]
pub extern "C" fn pairalign_time() -> f64 {
    platform::time()
}

/// A built-in matrix by name. The returned handle cannot be modified; copy it
/// first.
///
/// # Safety
///
/// `name` is null or a NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pairalign_matrix_lookup(name: *const c_char) -> *mut SubstitutionMatrix {
    // SAFETY: forwarded contract
    let name = unsafe { text(name, "the matrix name") };
    boxed(name.and_then(|name| record(SubstitutionMatrix::lookup(name).cloned().map_err(AlignError::from))))
}

/// # Safety
///
/// `path` is null or a NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pairalign_matrix_from_file(path: *const c_char) -> *mut SubstitutionMatrix {
    // SAFETY: forwarded contract
    let path = unsafe { text(path, "the matrix path") };
    boxed(path.and_then(|path| record(SubstitutionMatrix::from_file(path).map_err(AlignError::from))))
}

/// # Safety
///
/// `path` is null or a NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pairalign_matrix_from_file_case_sensitive(path: *const c_char) -> *mut SubstitutionMatrix {
    // SAFETY: forwarded contract
    let path = unsafe { text(path, "the matrix path") };
    boxed(path.and_then(|path| record(SubstitutionMatrix::from_file_case_sensitive(path).map_err(AlignError::from))))
}

/// # Safety
///
/// `alphabet` is null or a NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pairalign_matrix_create(
    alphabet: *const c_char, matches: i32, mismatch: i32,
) -> *mut SubstitutionMatrix {
    // SAFETY: forwarded contract
    let alphabet = unsafe { text(alphabet, "the alphabet") };
    boxed(alphabet.and_then(|a| record(SubstitutionMatrix::create(a.as_bytes(), matches, mismatch).map_err(AlignError::from))))
}

/// # Safety
///
/// `alphabet` is null or a NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pairalign_matrix_create_case_sensitive(
    alphabet: *const c_char, matches: i32, mismatch: i32,
) -> *mut SubstitutionMatrix {
    // SAFETY: forwarded contract
    let alphabet = unsafe { text(alphabet, "the alphabet") };
    boxed(alphabet.and_then(|a| {
        record(SubstitutionMatrix::create_case_sensitive(a.as_bytes(), matches, mismatch).map_err(AlignError::from))
    }))
}

/// An editable copy of any matrix.
///
/// # Safety
///
/// `matrix` is null or a live matrix handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pairalign_matrix_copy(matrix: *const SubstitutionMatrix) -> *mut SubstitutionMatrix {
    // SAFETY: forwarded contract
    let matrix = unsafe { matrix.as_ref() };
    boxed(matrix.map(SubstitutionMatrix::copy).or_else(|| null_argument("the matrix")))
}

/// Sets one score of a user-owned matrix. Returns whether it succeeded.
///
/// # Safety
///
/// `matrix` is null or a live matrix handle not used by another thread.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pairalign_matrix_set_value(
    matrix: *mut SubstitutionMatrix, row: usize, col: usize, value: i32,
) -> bool {
    // SAFETY: forwarded contract
    match unsafe { matrix.as_mut() } {
        Some(matrix) => record(matrix.set_value(row, col, value).map_err(AlignError::from)).is_some(),
        None => null_argument::<()>("the matrix").is_some(),
    }
}

/// # Safety
///
/// `matrix` is null or a matrix handle that was not released yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pairalign_matrix_free(matrix: *mut SubstitutionMatrix) {
    if !matrix.is_null() {
        // SAFETY: allocated by `boxed`
        drop(unsafe { Box::from_raw(matrix) });
    }
}

/// A query profile that owns copies of its query and matrix.
pub struct ProfileHandle {
    profile: ManuallyDrop<Profile<'static>>,
    query:   NonNull<[u8]>,
    matrix:  NonNull<SubstitutionMatrix>,
}

impl ProfileHandle {
    fn new(query: &[u8], matrix: &SubstitutionMatrix, width: Width, stats: bool) -> Result<Self, AlignError> {
        let query = NonNull::from(Box::leak(query.to_vec().into_boxed_slice()));
        let matrix = NonNull::from(Box::leak(Box::new(matrix.clone())));

        // SAFETY: both allocations live until `drop`, after the profile
        let (q, m) = unsafe { (query.as_ref(), matrix.as_ref()) };
        let profile = if stats {
            Profile::new_stats(q, m, width)
        } else {
            Profile::new(q, m, width)
        };

        match profile {
            Ok(profile) => Ok(ProfileHandle {
                profile: ManuallyDrop::new(profile),
                query,
                matrix,
            }),
            Err(e) => {
                // SAFETY: nothing borrows the allocations any more
                unsafe {
                    drop(Box::from_raw(query.as_ptr()));
                    drop(Box::from_raw(matrix.as_ptr()));
                }
                Err(e)
            }
        }
    }
}

impl Drop for ProfileHandle {
    fn drop(&mut self) {
        // SAFETY: the profile borrows the allocations, so it is dropped first
        unsafe {
            ManuallyDrop::drop(&mut self.profile);
            drop(Box::from_raw(self.query.as_ptr()));
            drop(Box::from_raw(self.matrix.as_ptr()));
        }
    }
}

macro_rules! profile_create {
    ($($name:ident => $width:expr, $stats:literal;)+) => {$(
        /// # Safety
        ///
        /// `s1` is null or valid for `len1` bytes, and `matrix` is null or a
        /// live matrix handle.
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $name(
            s1: *const u8, len1: usize, matrix: *const SubstitutionMatrix,
        ) -> *mut ProfileHandle {
            // SAFETY: forwarded contract
            let (query, matrix) = unsafe { (bytes(s1, len1, "s1"), matrix.as_ref()) };
            let Some(matrix) = matrix.or_else(|| null_argument("the matrix")) else {
                return ptr::null_mut();
            };
            boxed(query.and_then(|q| record(ProfileHandle::new(q, matrix, $width, $stats))))
        }
    )+};
}

profile_create! {
    pairalign_profile_create_8 => Width::W8, false;
    pairalign_profile_create_16 => Width::W16, false;
    pairalign_profile_create_32 => Width::W32, false;
    pairalign_profile_create_64 => Width::W64, false;
    pairalign_profile_create_sat => Width::Sat, false;
    pairalign_profile_create_stats_8 => Width::W8, true;
    pairalign_profile_create_stats_16 => Width::W16, true;
    pairalign_profile_create_stats_32 => Width::W32, true;
    pairalign_profile_create_stats_64 => Width::W64, true;
    pairalign_profile_create_stats_sat => Width::Sat, true;
}

/// # Safety
///
/// `profile` is null or a profile handle that was not released yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pairalign_profile_free(profile: *mut ProfileHandle) {
    if !profile.is_null() {
        // SAFETY: allocated by `boxed`
        drop(unsafe { Box::from_raw(profile) });
    }
}

/// Aligns with the kernel `name`, such as `sw_trace_striped_16`.
///
/// # Safety
///
/// `name` is null or NUL-terminated, `s1` and `s2` are null or valid for
/// their lengths, and `matrix` is null or a live matrix handle.
#[unsafe(no_mangle)]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn pairalign_align(
    name: *const c_char, s1: *const u8, len1: usize, s2: *const u8, len2: usize, open: i32, extend: i32,
    matrix: *const SubstitutionMatrix,
) -> *mut AlignResult {
    // SAFETY: forwarded contract
    let (name, query, reference, matrix) = unsafe {
        (
            text(name, "the kernel name"),
            bytes(s1, len1, "s1"),
            bytes(s2, len2, "s2"),
            matrix.as_ref(),
        )
    };
    let Some(matrix) = matrix.or_else(|| null_argument("the matrix")) else {
        return ptr::null_mut();
    };
    let (Some(name), Some(query), Some(reference)) = (name, query, reference) else {
        return ptr::null_mut();
    };
    boxed(record(align_by_name(name, query, reference, open, extend, matrix)))
}

/// Aligns a profile with the kernel `name`, which carries the `_profile`
/// marker, such as `sw_striped_profile_sat`.
///
/// # Safety
///
/// `name` is null or NUL-terminated, `profile` is null or a live profile
/// handle, and `s2` is null or valid for `len2` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pairalign_align_profile(
    name: *const c_char, profile: *const ProfileHandle, s2: *const u8, len2: usize, open: i32, extend: i32,
) -> *mut AlignResult {
    // SAFETY: forwarded contract
    let (name, profile, reference) =
        unsafe { (text(name, "the kernel name"), profile.as_ref(), bytes(s2, len2, "s2")) };
    let Some(profile) = profile.or_else(|| null_argument("the profile")) else {
        return ptr::null_mut();
    };
    let (Some(name), Some(reference)) = (name, reference) else {
        return ptr::null_mut();
    };
    boxed(record(align_profile_by_name(name, &profile.profile, reference, open, extend)))
}

/// # Safety
///
/// `s1` and `s2` are null or valid for their lengths, and `matrix` is null or
/// a live matrix handle.
#[unsafe(no_mangle)]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn pairalign_nw_banded(
    s1: *const u8, len1: usize, s2: *const u8, len2: usize, open: i32, extend: i32, k: usize,
    matrix: *const SubstitutionMatrix,
) -> *mut AlignResult {
    // SAFETY: forwarded contract
    let (query, reference, matrix) = unsafe { (bytes(s1, len1, "s1"), bytes(s2, len2, "s2"), matrix.as_ref()) };
    let Some(matrix) = matrix.or_else(|| null_argument("the matrix")) else {
        return ptr::null_mut();
    };
    let (Some(query), Some(reference)) = (query, reference) else {
        return ptr::null_mut();
    };
    boxed(record(nw_banded(query, reference, open, extend, k, matrix)))
}

/// # Safety
///
/// `result` is null or a result handle that was not released yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pairalign_result_free(result: *mut AlignResult) {
    if !result.is_null() {
        // SAFETY: allocated by `boxed`
        drop(unsafe { Box::from_raw(result) });
    }
}

macro_rules! result_scalar {
    ($($name:ident => $method:ident;)+) => {$(
        #[doc = concat!("[`AlignResult::", stringify!($method), "`], or [`PAIRALIGN_SENTINEL`].")]
        ///
        /// # Safety
        ///
        /// `result` is null or a live result handle.
        #[unsafe(no_mangle)]
        #[allow(clippy::cast_possible_wrap, clippy::unnecessary_cast)]
        pub unsafe extern "C" fn $name(result: *const AlignResult) -> i64 {
            // SAFETY: forwarded contract
            match unsafe { result.as_ref() } {
                Some(result) => result.$method() as i64,
                None => null_argument("the result").unwrap_or(PAIRALIGN_SENTINEL),
            }
        }
    )+};
}

result_scalar! {
    pairalign_result_get_score => score;
    pairalign_result_get_end_query => end_query;
    pairalign_result_get_end_ref => end_ref;
    pairalign_result_get_len_query => len_query;
    pairalign_result_get_len_ref => len_ref;
}

macro_rules! result_stat {
    ($($name:ident => $method:ident;)+) => {$(
        #[doc = concat!("[`AlignResult::", stringify!($method), "`], or [`PAIRALIGN_SENTINEL`].")]
        ///
        /// # Safety
        ///
        /// `result` is null or a live result handle.
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $name(result: *const AlignResult) -> i64 {
            // SAFETY: forwarded contract
            match unsafe { result.as_ref() } {
                Some(result) => record(result.$method()).unwrap_or(PAIRALIGN_SENTINEL),
                None => null_argument("the result").unwrap_or(PAIRALIGN_SENTINEL),
            }
        }
    )+};
}

result_stat! {
    pairalign_result_get_matches => matches;
    pairalign_result_get_similar => similar;
    pairalign_result_get_length => length;
}

macro_rules! result_plane {
    ($($name:ident => $method:ident;)+) => {$(
        #[doc = concat!("[`AlignResult::", stringify!($method), "`], or null. The")]
        /// values stay valid until the result is released, and `len` receives
        /// their count.
        ///
        /// # Safety
        ///
        /// `result` is null or a live result handle, and `len` is null or
        /// writable.
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $name(result: *const AlignResult, len: *mut usize) -> *const i64 {
            // SAFETY: forwarded contract
            let Some(result) = unsafe { result.as_ref() }.or_else(|| null_argument("the result")) else {
                return ptr::null();
            };
            match record(result.$method()) {
                Some(plane) => {
                    // SAFETY: forwarded contract
                    if let Some(len) = unsafe { len.as_mut() } {
                        *len = plane.len();
                    }
                    plane.as_ptr()
                }
                None => ptr::null(),
            }
        }
    )+};
}

result_plane! {
    pairalign_result_get_score_table => score_table;
    pairalign_result_get_matches_table => matches_table;
    pairalign_result_get_similar_table => similar_table;
    pairalign_result_get_length_table => length_table;
    pairalign_result_get_score_row => score_row;
    pairalign_result_get_score_col => score_col;
    pairalign_result_get_matches_row => matches_row;
    pairalign_result_get_matches_col => matches_col;
    pairalign_result_get_similar_row => similar_row;
    pairalign_result_get_similar_col => similar_col;
    pairalign_result_get_length_row => length_row;
    pairalign_result_get_length_col => length_col;
}

macro_rules! result_predicate {
    ($($name:ident => $method:ident;)+) => {$(
        #[doc = concat!("[`AlignResult::", stringify!($method), "`]; `false` for a null result.")]
        ///
        /// # Safety
        ///
        /// `result` is null or a live result handle.
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $name(result: *const AlignResult) -> bool {
            // SAFETY: forwarded contract
            unsafe { result.as_ref() }.is_some_and(AlignResult::$method)
        }
    )+};
}

result_predicate! {
    pairalign_result_is_nw => is_nw;
    pairalign_result_is_sg => is_sg;
    pairalign_result_is_sw => is_sw;
    pairalign_result_is_saturated => is_saturated;
    pairalign_result_is_banded => is_banded;
    pairalign_result_is_scan => is_scan;
    pairalign_result_is_striped => is_striped;
    pairalign_result_is_diag => is_diag;
    pairalign_result_is_blocked => is_blocked;
    pairalign_result_is_stats => is_stats;
    pairalign_result_is_stats_table => is_stats_table;
    pairalign_result_is_stats_rowcol => is_stats_rowcol;
    pairalign_result_is_table => is_table;
    pairalign_result_is_rowcol => is_rowcol;
    pairalign_result_is_trace => is_trace;
}

/// The three lines of a traceback, each NUL-terminated.
#[repr(C)]
pub struct CTraceback {
    pub query:      *mut c_char,
    pub comparison: *mut c_char,
    pub reference:  *mut c_char,
}

/// Packed CIGAR operations anchored at 0-based begin positions.
#[repr(C)]
pub struct CCigar {
    pub seq:       *mut u32,
    pub len:       usize,
    pub beg_query: usize,
    pub beg_ref:   usize,
}

impl CCigar {
    fn new(packed: Vec<u32>, beg_query: usize, beg_ref: usize) -> Self {
        let packed = Box::into_raw(packed.into_boxed_slice());
        CCigar {
            seq: packed.cast::<u32>(),
            len: packed.len(),
            beg_query,
            beg_ref,
        }
    }

    /// # Safety
    ///
    /// `self` was built by [`CCigar::new`].
    unsafe fn packed(&self) -> &[u32] {
        if self.seq.is_null() {
            &[]
        } else {
            // SAFETY: `seq` and `len` come from one boxed slice
            unsafe { std::slice::from_raw_parts(self.seq, self.len) }
        }
    }
}

/// Pairs of bytes that compare equal, as consecutive bytes of `aliases`.
///
/// # Safety
///
/// `aliases` is null or NUL-terminated.
unsafe fn alias_pairs(aliases: *const c_char) -> Vec<(u8, u8)> {
    if aliases.is_null() {
        return Vec::new();
    }
    // SAFETY: forwarded contract
    let aliases = unsafe { CStr::from_ptr(aliases) }.to_bytes();
    aliases.chunks_exact(2).map(|pair| (pair[0], pair[1])).collect()
}

/// # Safety
///
/// `marker` is null or NUL-terminated.
unsafe fn marker(marker: *const c_char, default: &str) -> String {
    if marker.is_null() {
        default.to_string()
    } else {
        // SAFETY: forwarded contract
        unsafe { CStr::from_ptr(marker) }.to_string_lossy().into_owned()
    }
}

fn traceback_handle(result: Option<&AlignResult>, options: &TracebackOptions) -> *mut CTraceback {
    let Some(result) = result.or_else(|| null_argument("the result")) else {
        return ptr::null_mut();
    };
    let Some(traceback) = record(result.traceback(options)) else {
        return ptr::null_mut();
    };
    boxed(Some(CTraceback {
        query:      into_c_string(traceback.query.clone()),
        comparison: into_c_string(traceback.comparison.clone()),
        reference:  into_c_string(traceback.reference.clone()),
    }))
}

/// The traceback of a result computed with trace storage. Null markers take
/// their defaults `|`, `:`, and `.`.
///
/// # Safety
///
/// `result` is null or a live result handle, and each marker is null or
/// NUL-terminated.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pairalign_result_get_traceback(
    result: *const AlignResult, match_marker: *const c_char, similar_marker: *const c_char,
    negative_marker: *const c_char,
) -> *mut CTraceback {
    // SAFETY: forwarded contract
    unsafe { pairalign_result_get_traceback_extra(result, match_marker, similar_marker, negative_marker, false, ptr::null()) }
}

/// [`pairalign_result_get_traceback`] with case sensitivity and alphabet
/// aliases, given as consecutive pairs of bytes such as `"TUtu"`.
///
/// # Safety
///
/// As [`pairalign_result_get_traceback`], and `aliases` is null or
/// NUL-terminated.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pairalign_result_get_traceback_extra(
    result: *const AlignResult, match_marker: *const c_char, similar_marker: *const c_char,
    negative_marker: *const c_char, case_sensitive: bool, aliases: *const c_char,
) -> *mut CTraceback {
    // SAFETY: forwarded contract
    let options = unsafe {
        TracebackOptions {
            match_marker: marker(match_marker, "|"),
            similar_marker: marker(similar_marker, ":"),
            negative_marker: marker(negative_marker, "."),
            case_sensitive,
            alphabet_aliases: alias_pairs(aliases),
        }
    };
    // SAFETY: forwarded contract
    traceback_handle(unsafe { result.as_ref() }, &options)
}

/// # Safety
///
/// `traceback` is null or a traceback that was not released yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pairalign_traceback_free(traceback: *mut CTraceback) {
    if traceback.is_null() {
        return;
    }
    // SAFETY: allocated by `boxed`, strings by `into_c_string`
    unsafe {
        let traceback = Box::from_raw(traceback);
        pairalign_free(traceback.query);
        pairalign_free(traceback.comparison);
        pairalign_free(traceback.reference);
    }
}

/// The CIGAR of a result computed with trace storage.
///
/// # Safety
///
/// `result` is null or a live result handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pairalign_result_get_cigar(result: *const AlignResult) -> *mut CCigar {
    // SAFETY: forwarded contract
    unsafe { pairalign_result_get_cigar_extra(result, false, false, ptr::null()) }
}

/// [`pairalign_result_get_cigar`] with `=`/`X` operations, case sensitivity,
/// and alphabet aliases given as consecutive pairs of bytes.
///
/// # Safety
///
/// `result` is null or a live result handle, and `aliases` is null or
/// NUL-terminated.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pairalign_result_get_cigar_extra(
    result: *const AlignResult, extended_ops: bool, case_sensitive: bool, aliases: *const c_char,
) -> *mut CCigar {
    let options = CigarOptions {
        extended_ops,
        case_sensitive,
        // SAFETY: forwarded contract
        alphabet_aliases: unsafe { alias_pairs(aliases) },
    };
    // SAFETY: forwarded contract
    let Some(result) = unsafe { result.as_ref() }.or_else(|| null_argument("the result")) else {
        return ptr::null_mut();
    };
    let cigar = record(result.cigar(&options))
        .and_then(|cigar| record(cigar.packed()).map(|packed| CCigar::new(packed, cigar.beg_query, cigar.beg_ref)));
    boxed(cigar)
}

/// Parses CIGAR text into packed operations.
///
/// # Safety
///
/// `cigar` is null or NUL-terminated.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pairalign_cigar_encode_string(cigar: *const c_char) -> *mut CCigar {
    // SAFETY: forwarded contract
    let text = unsafe { text(cigar, "the CIGAR") };
    let packed = text.and_then(|t| record(cigar_encode_string(t).map_err(AlignError::from)));
    boxed(packed.map(|packed| CCigar::new(packed, 0, 0)))
}

/// Packs one operation, or returns `0` for an invalid one.
#[unsafe(no_mangle)]
#[allow(clippy::cast_sign_loss)]
pub extern "C" fn pairalign_cigar_encode(len: u32, op: c_char) -> u32 {
    record(cigar_encode(len, op as u8).map_err(AlignError::from)).unwrap_or(0)
}

/// Renders packed operations as CIGAR text. Release it with
/// [`pairalign_free`].
///
/// # Safety
///
/// `cigar` is null or a live CIGAR handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pairalign_cigar_decode(cigar: *const CCigar) -> *mut c_char {
    // SAFETY: forwarded contract
    let Some(cigar) = unsafe { cigar.as_ref() }.or_else(|| null_argument("the CIGAR")) else {
        return ptr::null_mut();
    };
    // SAFETY: every `CCigar` handed out is built by `CCigar::new`
    let Cigar(text) = cigar_decode(unsafe { cigar.packed() });
    into_c_string(text)
}

#[unsafe(no_mangle)]
#[allow(clippy::cast_possible_wrap)]
pub extern "C" fn pairalign_cigar_decode_op(packed: u32) -> c_char {
    cigar_decode_op(packed) as c_char
}

#[unsafe(no_mangle)]
pub extern "C" fn pairalign_cigar_decode_len(packed: u32) -> u32 {
    cigar_decode_len(packed)
}

/// # Safety
///
/// `cigar` is null or a CIGAR handle that was not released yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pairalign_cigar_free(cigar: *mut CCigar) {
    if cigar.is_null() {
        return;
    }
    // SAFETY: allocated by `boxed`, the operations by `CCigar::new`
    unsafe {
        let cigar = Box::from_raw(cigar);
        if !cigar.seq.is_null() {
            drop(Box::from_raw(ptr::slice_from_raw_parts_mut(cigar.seq, cigar.len)));
        }
    }
}

/// Loads every record of a FASTA or FASTQ file.
///
/// # Safety
///
/// `path` is null or NUL-terminated.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pairalign_sequences_from_file(path: *const c_char) -> *mut Sequences {
    // SAFETY: forwarded contract
    let path = unsafe { text(path, "the sequence path") };
    boxed(path.and_then(|path| record(Sequences::from_file(path).map_err(AlignError::from))))
}

/// # Safety
///
/// `sequences` is null or a live sequences handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pairalign_sequences_len(sequences: *const Sequences) -> usize {
    // SAFETY: forwarded contract
    unsafe { sequences.as_ref() }.map_or(0, Sequences::len)
}

/// The residues of record `index`, valid until the collection is released.
///
/// # Safety
///
/// `sequences` is null or a live sequences handle, and `len` is null or
/// writable.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pairalign_sequences_get_seq(
    sequences: *const Sequences, index: usize, len: *mut usize,
) -> *const u8 {
    // SAFETY: forwarded contract
    let Some(sequences) = unsafe { sequences.as_ref() }.or_else(|| null_argument("the sequences")) else {
        return ptr::null();
    };
    let Some(record) = sequences.get(index) else {
        set_error(&AlignError::invalid(format!("no record at index {index}")));
        return ptr::null();
    };
    // SAFETY: forwarded contract
    if let Some(len) = unsafe { len.as_mut() } {
        *len = record.seq.len();
    }
    record.seq.as_ptr()
}

/// Aggregate statistics over the record lengths.
#[repr(C)]
pub struct CSequenceStats {
    pub characters: usize,
    pub shortest:   usize,
    pub longest:    usize,
    pub mean:       f64,
    pub stddev:     f64,
}

/// # Safety
///
/// `sequences` is null or a live sequences handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pairalign_sequences_stats(sequences: *const Sequences) -> CSequenceStats {
    // SAFETY: forwarded contract
    let sequences = unsafe { sequences.as_ref() };
    CSequenceStats {
        characters: sequences.map_or(0, Sequences::characters),
        shortest:   sequences.map_or(0, Sequences::shortest),
        longest:    sequences.map_or(0, Sequences::longest),
        mean:       sequences.map_or(0.0, Sequences::mean),
        stddev:     sequences.map_or(0.0, Sequences::stddev),
    }
}

/// # Safety
///
/// `sequences` is null or a sequences handle that was not released yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pairalign_sequences_free(sequences: *mut Sequences) {
    if !sequences.is_null() {
        // SAFETY: allocated by `boxed`
        drop(unsafe { Box::from_raw(sequences) });
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn align_and_render() {
        unsafe {
            let matrix = pairalign_matrix_create(c"ACGT".as_ptr(), 2, -1);
            assert!(!matrix.is_null());

            let (q, r) = (b"AAAAAGGGGG", b"TTTTTGGGGG");
            let result = pairalign_align(c"sw_trace_striped_sat".as_ptr(), q.as_ptr(), q.len(), r.as_ptr(), r.len(), 10, 1, matrix);
            assert!(!result.is_null());
            assert_eq!(pairalign_result_get_score(result), 10);
            assert!(pairalign_result_is_trace(result));
            assert!(!pairalign_result_is_table(result));
            assert_eq!(pairalign_result_get_matches(result), PAIRALIGN_SENTINEL);
            assert_eq!(pairalign_last_error(), 4);

            let cigar = pairalign_result_get_cigar_extra(result, true, false, ptr::null());
            assert_eq!(((*cigar).beg_query, (*cigar).beg_ref), (5, 5));
            let text = pairalign_cigar_decode(cigar);
            assert_eq!(CStr::from_ptr(text).to_str(), Ok("5="));
            pairalign_free(text);
            pairalign_cigar_free(cigar);

            let traceback = pairalign_result_get_traceback(result, ptr::null(), ptr::null(), ptr::null());
            assert_eq!(CStr::from_ptr((*traceback).comparison).to_bytes(), b"|||||");
            pairalign_traceback_free(traceback);

            pairalign_result_free(result);
            pairalign_matrix_free(matrix);
        }
    }

    #[test]
    fn failures_are_recorded() {
        unsafe {
            pairalign_clear_error();
            assert!(pairalign_matrix_lookup(c"blosum99".as_ptr()).is_null());
            assert_eq!(pairalign_last_error(), 2);
            assert!(!pairalign_last_error_message().is_null());

            let builtin = pairalign_matrix_lookup(c"blosum62".as_ptr());
            assert!(!pairalign_matrix_set_value(builtin, 0, 0, 1));
            let copy = pairalign_matrix_copy(builtin);
            assert!(pairalign_matrix_set_value(copy, 0, 0, 1));

            assert!(pairalign_align(c"sw_striped_sat".as_ptr(), ptr::null(), 0, b"A".as_ptr(), 1, 10, 1, copy).is_null());
            assert_eq!(pairalign_result_get_score(ptr::null()), PAIRALIGN_SENTINEL);
            assert!(!pairalign_result_is_sw(ptr::null()));

            pairalign_matrix_free(copy);
            pairalign_matrix_free(builtin);
        }
    }

    #[test]
    fn profiles() {
        unsafe {
            let matrix = pairalign_matrix_lookup(c"blosum62".as_ptr());
            let query = b"HEAGAWGHEE";
            let profile = pairalign_profile_create_stats_sat(query.as_ptr(), query.len(), matrix);
            assert!(!profile.is_null());

            let reference = b"PAWHEAE";
            let result = pairalign_align_profile(
                c"sw_stats_striped_profile_sat".as_ptr(),
                profile,
                reference.as_ptr(),
                reference.len(),
                10,
                1,
            );
            assert!(!result.is_null());
            assert!(pairalign_result_get_length(result) > 0);

            pairalign_result_free(result);
            pairalign_profile_free(profile);
            pairalign_matrix_free(matrix);
        }
    }

    #[test]
    fn cigar_codec() {
        unsafe {
            let cigar = pairalign_cigar_encode_string(c"3M2I4D".as_ptr());
            assert_eq!((*cigar).len, 3);
            let first = *(*cigar).seq;
            assert_eq!(pairalign_cigar_decode_len(first), 3);
            assert_eq!(pairalign_cigar_decode_op(first), b'M' as c_char);
            let text = pairalign_cigar_decode(cigar);
            assert_eq!(CStr::from_ptr(text).to_bytes(), b"3M2I4D");
            pairalign_free(text);
            pairalign_cigar_free(cigar);

            assert_eq!(pairalign_cigar_encode(4, b'Q' as c_char), 0);
        }
    }
}
