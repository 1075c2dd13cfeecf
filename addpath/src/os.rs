//! Byte-level views of OS strings.
//!
//! Environment values are carried as [`OsString`] so that bytes which are
//! not valid UTF-8 survive a round trip. The text operations work on the
//! encoded bytes and rebuild an [`OsString`] at the end.

use std::ffi::{OsStr, OsString};

/// The encoded bytes of `value`.
pub(crate) fn bytes(value: &OsStr) -> &[u8] {
    value.as_encoded_bytes()
}

/// Rebuild an OS string from bytes produced by [`bytes`] and ASCII edits.
#[cfg(unix)]
pub(crate) fn from_bytes(bytes: Vec<u8>) -> OsString {
    use std::os::unix::ffi::OsStringExt;
    OsString::from_vec(bytes)
}

/// Rebuild an OS string from bytes produced by [`bytes`] and ASCII edits.
///
/// Outside unix the encoding is not exposed, so ill-formed sequences are
/// replaced.
#[cfg(not(unix))]
pub(crate) fn from_bytes(bytes: Vec<u8>) -> OsString {
    match String::from_utf8(bytes) {
        Ok(text) => text.into(),
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned().into(),
    }
}
