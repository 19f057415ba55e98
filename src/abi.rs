//! C-ABI surface of the hash family.
//!
//! Symbols are exported unmangled when built with:
//!   cargo build --release --features c-abi
//!
//! A state handed out by `*_createState` starts uninitialized and must be
//! reset before it is fed or digested. Recoverable misuse is reported through
//! `XXH_errorcode`; misuse that has no error channel (digesting a state that
//! was never reset, hashing a null buffer of nonzero length) is logged and
//! aborts the process, since unwinding across the ABI is not allowed.
#![allow(non_camel_case_types, non_snake_case, improper_ctypes_definitions)]

use std::os::raw::{c_uint, c_ulonglong, c_void};
use std::{process, ptr, slice};

use log::{error, trace};

use crate::accumulator::Accumulator;
use crate::canonical::Canonical;
use crate::error::Error;
use crate::xxh32::{self, xxh32, Xxh32};
use crate::xxh64::{self, xxh64, Xxh64};

/// Status returned by the fallible entry points.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XXH_errorcode {
    /// The call succeeded.
    XXH_OK = 0,
    /// The call broke the API contract and had no effect.
    XXH_ERROR = 1,
}

/// State is an accumulator that may not have been reset yet.
#[derive(Debug, Default)]
pub struct State<A> {
    inner: Option<A>,
}

/// Opaque streaming state of the 32-bit hash.
pub type XXH32_state_t = State<Xxh32>;
/// Opaque streaming state of the 64-bit hash.
pub type XXH64_state_t = State<Xxh64>;

/// Canonical big-endian form of a 32-bit digest.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XXH32_canonical_t {
    /// Digest bytes, most significant first.
    pub digest: [u8; xxh32::DIGEST_SIZE],
}

/// Canonical big-endian form of a 64-bit digest.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XXH64_canonical_t {
    /// Digest bytes, most significant first.
    pub digest: [u8; xxh64::DIGEST_SIZE],
}

// ─── helpers ─────────────────────────────────────────────────────────────────

/// View `length` bytes at `input`. A null pointer is only accepted for an empty input.
unsafe fn input_slice<'a>(input: *const c_void, length: usize) -> Result<&'a [u8], Error> {
    if input.is_null() {
        if length == 0 {
            return Ok(&[]);
        }
        return Err(Error::NullInput { len: length });
    }
    Ok(slice::from_raw_parts(input as *const u8, length))
}

fn violation(context: &str, err: Error) -> ! {
    error!("{}: contract violation: {}", context, err);
    process::abort()
}

fn status(context: &str, result: Result<(), Error>) -> XXH_errorcode {
    match result {
        Ok(()) => XXH_errorcode::XXH_OK,
        Err(err) => {
            error!("{}: {}", context, err);
            XXH_errorcode::XXH_ERROR
        }
    }
}

fn create_state<A>(context: &str) -> *mut State<A> {
    let state = Box::into_raw(Box::new(State { inner: None }));
    trace!("{}: allocated {:p}", context, state);
    state
}

unsafe fn free_state<A>(context: &str, state: *mut State<A>) -> XXH_errorcode {
    if !state.is_null() {
        trace!("{}: released {:p}", context, state);
        drop(Box::from_raw(state));
    }
    XXH_errorcode::XXH_OK
}

fn reset_state<A: Accumulator>(state: Option<&mut State<A>>, seed: A::Hash) -> Result<(), Error> {
    let state = state.ok_or(Error::NullState)?;
    match state.inner.as_mut() {
        Some(acc) => acc.reset(seed),
        None => state.inner = Some(A::with_seed(seed)),
    }
    Ok(())
}

fn update_state<A: Accumulator>(
    state: Option<&mut State<A>>,
    input: Result<&[u8], Error>,
) -> Result<(), Error> {
    let acc = state
        .ok_or(Error::NullState)?
        .inner
        .as_mut()
        .ok_or(Error::Uninitialized)?;
    acc.update(input?);
    Ok(())
}

fn digest_state<A: Accumulator>(state: Option<&State<A>>) -> Result<A::Hash, Error> {
    let acc = state
        .ok_or(Error::NullState)?
        .inner
        .as_ref()
        .ok_or(Error::Uninitialized)?;
    Ok(acc.digest())
}

unsafe fn copy_state<A: Accumulator>(context: &str, dst: *mut State<A>, src: *const State<A>) {
    if dst.is_null() || src.is_null() {
        error!("{}: {}", context, Error::NullState);
        return;
    }
    if !ptr::eq(dst, src) {
        (*dst).inner = (*src).inner.clone();
    }
}

// ─── version ─────────────────────────────────────────────────────────────────

/// Returns `major*100*100 + minor*100 + release` of the implemented algorithm version.
#[cfg_attr(feature = "c-abi", no_mangle)]
pub extern "C" fn XXH_versionNumber() -> c_uint {
    crate::version_number()
}

// ─── one-shot ────────────────────────────────────────────────────────────────

/// 32-bit hash of `length` bytes at `input`.
///
/// # Safety
/// `input` must be valid for reads of `length` bytes, or null with `length == 0`.
#[cfg_attr(feature = "c-abi", no_mangle)]
pub unsafe extern "C" fn XXH32(input: *const c_void, length: usize, seed: c_uint) -> c_uint {
    match input_slice(input, length) {
        Ok(input) => xxh32(input, seed),
        Err(err) => violation("XXH32", err),
    }
}

/// 64-bit hash of `length` bytes at `input`.
///
/// # Safety
/// `input` must be valid for reads of `length` bytes, or null with `length == 0`.
#[cfg_attr(feature = "c-abi", no_mangle)]
pub unsafe extern "C" fn XXH64(
    input: *const c_void,
    length: usize,
    seed: c_ulonglong,
) -> c_ulonglong {
    match input_slice(input, length) {
        Ok(input) => xxh64(input, seed),
        Err(err) => violation("XXH64", err),
    }
}

// ─── 32-bit streaming ────────────────────────────────────────────────────────

/// Allocates an uninitialized 32-bit state. Release it with `XXH32_freeState`.
#[cfg_attr(feature = "c-abi", no_mangle)]
pub extern "C" fn XXH32_createState() -> *mut XXH32_state_t {
    create_state("XXH32_createState")
}

/// Releases a state from `XXH32_createState`. Null is accepted.
///
/// # Safety
/// `state` must come from `XXH32_createState` and not have been freed.
#[cfg_attr(feature = "c-abi", no_mangle)]
pub unsafe extern "C" fn XXH32_freeState(state: *mut XXH32_state_t) -> XXH_errorcode {
    free_state("XXH32_freeState", state)
}

/// Starts a new stream on `state`.
///
/// # Safety
/// `state` must be null or a live state from `XXH32_createState`.
#[cfg_attr(feature = "c-abi", no_mangle)]
pub unsafe extern "C" fn XXH32_reset(state: *mut XXH32_state_t, seed: c_uint) -> XXH_errorcode {
    status("XXH32_reset", reset_state(state.as_mut(), seed))
}

/// Feeds `length` bytes at `input` into `state`.
///
/// # Safety
/// `state` must be null or a live state; `input` must be valid for reads of
/// `length` bytes or null.
#[cfg_attr(feature = "c-abi", no_mangle)]
pub unsafe extern "C" fn XXH32_update(
    state: *mut XXH32_state_t,
    input: *const c_void,
    length: usize,
) -> XXH_errorcode {
    status(
        "XXH32_update",
        update_state(state.as_mut(), input_slice(input, length)),
    )
}

/// Digest of everything fed since the last reset. The state is left untouched.
///
/// # Safety
/// `state` must be a live state that has been reset.
#[cfg_attr(feature = "c-abi", no_mangle)]
pub unsafe extern "C" fn XXH32_digest(state: *const XXH32_state_t) -> c_uint {
    digest_state(state.as_ref()).unwrap_or_else(|err| violation("XXH32_digest", err))
}

/// Copies `src` into `dst`.
///
/// # Safety
/// Both pointers must be null or live states.
#[cfg_attr(feature = "c-abi", no_mangle)]
pub unsafe extern "C" fn XXH32_copyState(dst: *mut XXH32_state_t, src: *const XXH32_state_t) {
    copy_state("XXH32_copyState", dst, src)
}

/// Writes `hash` in canonical form to `dst`.
///
/// # Safety
/// `dst` must be null or valid for writes.
#[cfg_attr(feature = "c-abi", no_mangle)]
pub unsafe extern "C" fn XXH32_canonicalFromHash(dst: *mut XXH32_canonical_t, hash: c_uint) {
    match dst.as_mut() {
        Some(dst) => dst.digest = hash.to_canonical(),
        None => error!("XXH32_canonicalFromHash: null destination"),
    }
}

/// Reads a digest from its canonical form.
///
/// # Safety
/// `src` must be valid for reads.
#[cfg_attr(feature = "c-abi", no_mangle)]
pub unsafe extern "C" fn XXH32_hashFromCanonical(src: *const XXH32_canonical_t) -> c_uint {
    match src.as_ref() {
        Some(src) => u32::from_canonical(src.digest),
        None => violation("XXH32_hashFromCanonical", Error::NullInput { len: 4 }),
    }
}

// ─── 64-bit streaming ────────────────────────────────────────────────────────

/// Allocates an uninitialized 64-bit state. Release it with `XXH64_freeState`.
#[cfg_attr(feature = "c-abi", no_mangle)]
pub extern "C" fn XXH64_createState() -> *mut XXH64_state_t {
    create_state("XXH64_createState")
}

/// Releases a state from `XXH64_createState`. Null is accepted.
///
/// # Safety
/// `state` must come from `XXH64_createState` and not have been freed.
#[cfg_attr(feature = "c-abi", no_mangle)]
pub unsafe extern "C" fn XXH64_freeState(state: *mut XXH64_state_t) -> XXH_errorcode {
    free_state("XXH64_freeState", state)
}

/// Starts a new stream on `state`.
///
/// # Safety
/// `state` must be null or a live state from `XXH64_createState`.
#[cfg_attr(feature = "c-abi", no_mangle)]
pub unsafe extern "C" fn XXH64_reset(
    state: *mut XXH64_state_t,
    seed: c_ulonglong,
) -> XXH_errorcode {
    status("XXH64_reset", reset_state(state.as_mut(), seed))
}

/// Feeds `length` bytes at `input` into `state`.
///
/// # Safety
/// `state` must be null or a live state; `input` must be valid for reads of
/// `length` bytes or null.
#[cfg_attr(feature = "c-abi", no_mangle)]
pub unsafe extern "C" fn XXH64_update(
    state: *mut XXH64_state_t,
    input: *const c_void,
    length: usize,
) -> XXH_errorcode {
    status(
        "XXH64_update",
        update_state(state.as_mut(), input_slice(input, length)),
    )
}

/// Digest of everything fed since the last reset. The state is left untouched.
///
/// # Safety
/// `state` must be a live state that has been reset.
#[cfg_attr(feature = "c-abi", no_mangle)]
pub unsafe extern "C" fn XXH64_digest(state: *const XXH64_state_t) -> c_ulonglong {
    digest_state(state.as_ref()).unwrap_or_else(|err| violation("XXH64_digest", err))
}

/// Copies `src` into `dst`.
///
/// # Safety
/// Both pointers must be null or live states.
#[cfg_attr(feature = "c-abi", no_mangle)]
pub unsafe extern "C" fn XXH64_copyState(dst: *mut XXH64_state_t, src: *const XXH64_state_t) {
    copy_state("XXH64_copyState", dst, src)
}

/// Writes `hash` in canonical form to `dst`.
///
/// # Safety
/// `dst` must be null or valid for writes.
#[cfg_attr(feature = "c-abi", no_mangle)]
pub unsafe extern "C" fn XXH64_canonicalFromHash(dst: *mut XXH64_canonical_t, hash: c_ulonglong) {
    match dst.as_mut() {
        Some(dst) => dst.digest = hash.to_canonical(),
        None => error!("XXH64_canonicalFromHash: null destination"),
    }
}

/// Reads a digest from its canonical form.
///
/// # Safety
/// `src` must be valid for reads.
#[cfg_attr(feature = "c-abi", no_mangle)]
pub unsafe extern "C" fn XXH64_hashFromCanonical(src: *const XXH64_canonical_t) -> c_ulonglong {
    match src.as_ref() {
        Some(src) => u64::from_canonical(src.digest),
        None => violation("XXH64_hashFromCanonical", Error::NullInput { len: 8 }),
    }
}

#[cfg(test)]
pub mod test {
    use super::*;
    use crate::xxh32::test::shake_input;

    #[test]
    fn oneshot_matches_rust_api() {
        let input = shake_input("abi oneshot", 333);
        unsafe {
            assert_eq!(
                XXH32(input.as_ptr().cast(), input.len(), 7),
                xxh32(&input, 7)
            );
            assert_eq!(
                XXH64(input.as_ptr().cast(), input.len(), 7),
                xxh64(&input, 7)
            );
            assert_eq!(XXH32(ptr::null(), 0, 0), 0x02CC_5D05);
            assert_eq!(XXH64(ptr::null(), 0, 0), 0xEF46_DB37_51D8_E999);
        }
    }

    #[test]
    fn streaming_lifecycle() {
        let input = shake_input("abi streaming", 500);
        unsafe {
            let state = XXH64_createState();
            assert_eq!(
                XXH64_update(state, input.as_ptr().cast(), input.len()),
                XXH_errorcode::XXH_ERROR,
                "update before reset must be rejected"
            );

            assert_eq!(XXH64_reset(state, 5), XXH_errorcode::XXH_OK);
            for chunk in input.chunks(45) {
                assert_eq!(
                    XXH64_update(state, chunk.as_ptr().cast(), chunk.len()),
                    XXH_errorcode::XXH_OK
                );
            }
            assert_eq!(XXH64_digest(state), xxh64(&input, 5));

            let copy = XXH64_createState();
            XXH64_copyState(copy, state);
            assert_eq!(
                XXH64_update(copy, b"more".as_ptr().cast(), 4),
                XXH_errorcode::XXH_OK
            );
            assert_eq!(XXH64_digest(state), xxh64(&input, 5));
            assert_ne!(XXH64_digest(copy), XXH64_digest(state));

            assert_eq!(XXH64_reset(state, 5), XXH_errorcode::XXH_OK);
            assert_eq!(XXH64_reset(state, 5), XXH_errorcode::XXH_OK);
            assert_eq!(XXH64_digest(state), xxh64(&[], 5));

            assert_eq!(XXH64_freeState(copy), XXH_errorcode::XXH_OK);
            assert_eq!(XXH64_freeState(state), XXH_errorcode::XXH_OK);
            assert_eq!(XXH64_freeState(ptr::null_mut()), XXH_errorcode::XXH_OK);
        }
    }

    #[test]
    fn null_arguments() {
        unsafe {
            let state = XXH32_createState();
            assert_eq!(XXH32_reset(state, 0), XXH_errorcode::XXH_OK);
            assert_eq!(XXH32_update(state, ptr::null(), 0), XXH_errorcode::XXH_OK);
            assert_eq!(
                XXH32_update(state, ptr::null(), 3),
                XXH_errorcode::XXH_ERROR
            );
            assert_eq!(XXH32_digest(state), xxh32(&[], 0));

            assert_eq!(XXH32_reset(ptr::null_mut(), 0), XXH_errorcode::XXH_ERROR);
            assert_eq!(
                XXH32_update(ptr::null_mut(), b"x".as_ptr().cast(), 1),
                XXH_errorcode::XXH_ERROR
            );
            XXH32_copyState(ptr::null_mut(), state);
            XXH32_freeState(state);
        }
    }

    #[test]
    fn contract_violations() {
        let mut fresh = State::<Xxh32>::default();
        assert_eq!(digest_state::<Xxh32>(None), Err(Error::NullState));
        assert_eq!(digest_state(Some(&fresh)), Err(Error::Uninitialized));
        assert_eq!(
            update_state(Some(&mut fresh), Ok(&b"data"[..])),
            Err(Error::Uninitialized)
        );

        reset_state(Some(&mut fresh), 1).unwrap();
        assert_eq!(
            update_state(Some(&mut fresh), Err(Error::NullInput { len: 2 })),
            Err(Error::NullInput { len: 2 })
        );
        assert_eq!(digest_state(Some(&fresh)), Ok(xxh32(&[], 1)));

        assert_eq!(
            unsafe { input_slice(ptr::null(), 9) },
            Err(Error::NullInput { len: 9 })
        );
    }

    #[test]
    fn canonical_round_trip() {
        let mut c32 = XXH32_canonical_t {
            digest: [0; xxh32::DIGEST_SIZE],
        };
        let mut c64 = XXH64_canonical_t {
            digest: [0; xxh64::DIGEST_SIZE],
        };
        unsafe {
            XXH32_canonicalFromHash(&mut c32, 0x0102_0304);
            XXH64_canonicalFromHash(&mut c64, 0x0102_0304_0506_0708);
            assert_eq!(c32.digest, [1, 2, 3, 4]);
            assert_eq!(c64.digest, [1, 2, 3, 4, 5, 6, 7, 8]);
            assert_eq!(XXH32_hashFromCanonical(&c32), 0x0102_0304);
            assert_eq!(XXH64_hashFromCanonical(&c64), 0x0102_0304_0506_0708);
        }
        assert_eq!(XXH_versionNumber(), 601);
    }
}
