//! Capacity-limited path construction for the selvage tools.
//!
//! Paths handled here are operator-supplied configuration, slash-separated
//! on every platform. Construction goes through a fixed-capacity builder so
//! an oversized path is caught before it is ever handed to the file system;
//! callers that treat overflow as terminal chain
//! [`OrFatal::or_fatal`](selvage_common::fatal::OrFatal) onto the results.

use std::fmt;
use std::path::Path;

use selvage_common::{Result, error::Error};

/// An owned path string that never grows beyond a fixed byte capacity.
///
/// The capacity counts content bytes and is fixed at construction; every
/// mutating operation checks it before writing. Storage is reserved up
/// front, so no operation reallocates.
#[derive(Debug)]
pub struct BoundedPath {
    buf: String,
    capacity: usize,
}

impl BoundedPath {
    /// Creates an empty path that can hold up to `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> BoundedPath {
        BoundedPath {
            buf: String::with_capacity(capacity),
            capacity,
        }
    }

    /// Replaces the content with `src`.
    ///
    /// Fails with `CapacityExceeded` if `src` does not fit; the previous
    /// content is left intact in that case.
    pub fn set(&mut self, src: &str) -> Result<()> {
        self.check(src.len())?;
        self.buf.clear();
        self.buf.push_str(src);
        Ok(())
    }

    /// Replaces the content with `src`, normalizing separators to `/`.
    ///
    /// On platforms whose native separator is the backslash every `\` in
    /// `src` becomes `/`; elsewhere this is identical to [`BoundedPath::set`].
    pub fn import(&mut self, src: &str) -> Result<()> {
        if cfg!(windows) {
            self.set_converted(src)
        } else {
            self.set(src)
        }
    }

    fn set_converted(&mut self, src: &str) -> Result<()> {
        self.check(src.len())?;
        self.buf.clear();
        self.buf
            .extend(src.chars().map(|c| if c == '\\' { '/' } else { c }));
        Ok(())
    }

    /// Replaces the content with formatted text, checking the capacity as
    /// the text is produced.
    ///
    /// Called as `path.format(format_args!("{dir}/{name}"))`. The formatted
    /// text streams directly into the path's storage; if it would exceed
    /// the capacity the call fails and the path is left empty.
    pub fn format(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        use fmt::Write as _;

        self.buf.clear();
        let mut sink = CheckedWriter {
            buf: &mut self.buf,
            capacity: self.capacity,
        };
        if sink.write_fmt(args).is_err() {
            self.buf.clear();
            return Err(Error::capacity_exceeded("path", self.capacity));
        }
        Ok(())
    }

    /// Ensures the path ends with exactly one `/`, appending one if absent.
    ///
    /// Idempotent; an empty path is left untouched.
    pub fn ensure_trailing_slash(&mut self) -> Result<()> {
        if self.buf.is_empty() || self.buf.ends_with('/') {
            return Ok(());
        }
        self.check(self.buf.len() + 1)?;
        self.buf.push('/');
        Ok(())
    }

    /// Returns the path content.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Returns the content as a borrowed [`Path`].
    #[inline]
    pub fn as_path(&self) -> &Path {
        Path::new(self.as_str())
    }

    /// Returns the content length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if the path is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the maximum content length in bytes.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn check(&self, len: usize) -> Result<()> {
        if len > self.capacity {
            return Err(Error::capacity_exceeded("path", self.capacity));
        }
        Ok(())
    }
}

impl Clone for BoundedPath {
    fn clone(&self) -> BoundedPath {
        let mut clone = BoundedPath::with_capacity(self.capacity);
        clone.buf.push_str(&self.buf);
        clone
    }
}

impl fmt::Display for BoundedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for BoundedPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<Path> for BoundedPath {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

struct CheckedWriter<'a> {
    buf: &'a mut String,
    capacity: usize,
}

impl fmt::Write for CheckedWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.buf.len() + s.len() > self.capacity {
            return Err(fmt::Error);
        }
        self.buf.push_str(s);
        Ok(())
    }
}
