//! Splitting and membership tests on delimiter-separated values.

use std::ffi::OsStr;

use crate::os;

/// A borrowed view of a delimiter-separated value.
///
/// The value is inspected as raw bytes, so elements that are not valid
/// UTF-8 still compare exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathList<'a> {
    value: &'a [u8],
    delimiter: char,
}

impl<'a> PathList<'a> {
    /// Wrap `value`, splitting on `delimiter`.
    #[must_use]
    pub fn new<S: AsRef<OsStr> + ?Sized>(value: &'a S, delimiter: char) -> Self {
        Self {
            value: os::bytes(value.as_ref()),
            delimiter,
        }
    }

    /// The raw value.
    #[must_use]
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.value
    }

    /// The delimiter elements are split on.
    #[must_use]
    pub const fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Returns true if the value is the empty string.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Iterate over the non-empty elements, as bytes.
    ///
    /// Runs of consecutive delimiters collapse, so leading, trailing and
    /// doubled delimiters never produce an element.
    ///
    /// # Examples
    ///
    /// ```
    /// use addpath::path::PathList;
    ///
    /// let path = PathList::new("::/a::/b:", ':');
    /// assert_eq!(path.elements().collect::<Vec<_>>(), [b"/a", b"/b"]);
    /// ```
    #[must_use]
    pub fn elements(&self) -> Elements<'a> {
        let mut delimiter = [0; 4];
        let len = self.delimiter.encode_utf8(&mut delimiter).len();
        Elements {
            rest: self.value,
            delimiter,
            len,
        }
    }

    /// Returns true if `candidate` is exactly one of the elements.
    ///
    /// Comparison is byte-exact and case-sensitive. An empty candidate is
    /// never contained.
    ///
    /// # Examples
    ///
    /// ```
    /// use addpath::path::PathList;
    ///
    /// let path = PathList::new("/usr/bin:/bin", ':');
    /// assert!(path.contains("/bin"));
    /// assert!(!path.contains("/bi"));
    /// assert!(!path.contains("/BIN"));
    /// assert!(!path.contains(""));
    /// ```
    #[must_use]
    pub fn contains<C: AsRef<OsStr> + ?Sized>(&self, candidate: &C) -> bool {
        let candidate = os::bytes(candidate.as_ref());
        if candidate.is_empty() {
            return false;
        }
        self.elements().any(|element| element == candidate)
    }
}

/// Iterator over the non-empty elements of a [`PathList`].
#[derive(Debug, Clone)]
pub struct Elements<'a> {
    rest: &'a [u8],
    delimiter: [u8; 4],
    len: usize,
}

impl<'a> Iterator for Elements<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let delimiter = &self.delimiter[..self.len];

        while !self.rest.is_empty() {
            let rest = self.rest;
            let (element, tail) = match rest.windows(delimiter.len()).position(|w| w == delimiter) {
                Some(at) => (&rest[..at], &rest[at + delimiter.len()..]),
                None => (rest, &rest[rest.len()..]),
            };
            self.rest = tail;
            if !element.is_empty() {
                return Some(element);
            }
        }

        None
    }
}
