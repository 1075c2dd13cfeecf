//! Byte-for-byte remapping of a path value for output.

use std::ffi::{OsStr, OsString};

use crate::os;
use crate::output::FormatConfig;

/// Append `path` to `out`, remapping delimiters and slashes per `format`.
///
/// Bytes that are neither the delimiter nor `/` are copied unchanged, so
/// values that are not valid UTF-8 pass through intact.
pub fn write_path(out: &mut Vec<u8>, path: &[u8], format: &FormatConfig) {
    let mut delimiter = [0; 4];
    let delimiter = format.delimiter.encode_utf8(&mut delimiter).as_bytes();
    let mut separator = [0; 4];
    let separator = format.separator.encode_utf8(&mut separator).as_bytes();

    out.reserve(path.len());
    let mut rest = path;
    while let Some((&b, tail)) = rest.split_first() {
        if let Some(after) = rest.strip_prefix(delimiter) {
            out.extend_from_slice(separator);
            rest = after;
            continue;
        }
        if format.translate_slashes && b == b'/' {
            out.push(b'\\');
        } else {
            out.push(b);
        }
        rest = tail;
    }
}

/// Re-serialize `path` for output.
///
/// Each delimiter becomes the separator, `/` becomes `\` when slash
/// translation is on, and every other byte is copied. Nothing is trimmed
/// or collapsed.
///
/// # Examples
///
/// ```
/// use addpath::output::{Dialect, FormatConfig};
/// use addpath::path::format_path;
///
/// let cmd = FormatConfig::for_dialect(Dialect::CommandShell, ':');
/// assert_eq!(format_path("/a/b:/c", &cmd), r"\a\b;\c");
/// ```
#[must_use]
pub fn format_path<S: AsRef<OsStr> + ?Sized>(path: &S, format: &FormatConfig) -> OsString {
    let path = os::bytes(path.as_ref());
    let mut out = Vec::with_capacity(path.len());
    write_path(&mut out, path, format);
    os::from_bytes(out)
}
