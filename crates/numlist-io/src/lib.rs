//! Plain-text loading and saving of digit lists.
//!
//! Numbers are stored as a single line of decimal digits. Loading is tolerant:
//! a missing file, a read error or malformed text all produce an empty
//! [`DigitList`] (the failure is logged at `warn` level). Saving writes the
//! decimal text verbatim and reports write failures as [`SaveError`].
//!
//! # Examples
//!
//! ```
//! use std::io::Cursor;
//!
//! use numlist_core::{DecimalText as _, add};
//!
//! let lhs = numlist_io::load_from_reader(Cursor::new("999\n"));
//! let rhs = numlist_io::load_from_reader(Cursor::new("  1  "));
//! let sum = add(&lhs, &rhs);
//!
//! let mut out = Vec::new();
//! numlist_io::write_to(&sum, &mut out)?;
//! assert_eq!(out, b"1000");
//! # Ok::<(), numlist_io::SaveError>(())
//! ```

use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::{Path, PathBuf},
};

use numlist_core::{DecimalText as _, DigitList, parse_decimal_opt};

/// Errors that can occur while saving a digit list.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum SaveError {
    /// Writing to a sink failed.
    #[display("failed to write number")]
    Write {
        /// Underlying I/O error.
        source: io::Error,
    },
    /// Creating or writing a file failed.
    #[display("failed to save number to {}", path.display())]
    File {
        /// Destination file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

/// Reads the first line of `reader` without its line terminator.
///
/// Returns `Ok(None)` if the reader is already at end of input.
///
/// # Errors
///
/// Returns an error if reading fails or the line is not valid UTF-8.
pub fn read_line<R>(mut reader: R) -> io::Result<Option<String>>
where
    R: BufRead,
{
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

/// Builds a decimal list from the first line of `reader`.
///
/// Read failures are logged and produce an empty list.
pub fn load_from_reader<R>(reader: R) -> DigitList
where
    R: BufRead,
{
    match read_line(reader) {
        Ok(line) => parse_decimal_opt(line.as_deref()),
        Err(e) => {
            log::warn!("failed to read number: {e}");
            DigitList::new()
        }
    }
}

/// Builds a decimal list from the first line of the file at `path`.
///
/// A missing or unreadable file is logged and produces an empty list.
pub fn load<P>(path: P) -> DigitList
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    match File::open(path) {
        Ok(file) => {
            let list = load_from_reader(BufReader::new(file));
            log::debug!("loaded {} digit(s) from {}", list.len(), path.display());
            list
        }
        Err(e) => {
            log::warn!("failed to open {}: {e}", path.display());
            DigitList::new()
        }
    }
}

/// Writes the decimal text of `list` to `writer`, without a trailing newline.
///
/// # Errors
///
/// Returns [`SaveError::Write`] if writing or flushing fails.
pub fn write_to<W>(list: &DigitList, mut writer: W) -> Result<(), SaveError>
where
    W: Write,
{
    writer
        .write_all(list.to_decimal_text().as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|source| SaveError::Write { source })
}

/// Writes the decimal text of `list` to the file at `path`, replacing its
/// contents.
///
/// # Errors
///
/// Returns [`SaveError::File`] if the file cannot be created or written.
pub fn save<P>(list: &DigitList, path: P) -> Result<(), SaveError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file_error = |source| SaveError::File {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::create(path).map_err(file_error)?;
    file.write_all(list.to_decimal_text().as_bytes())
        .map_err(file_error)?;
    log::debug!("saved {} digit(s) to {}", list.len(), path.display());
    Ok(())
}
