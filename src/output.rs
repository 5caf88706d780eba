//! Rendering of file records into the aggregate text format.
//!
//! Every record is a header line naming the file, the decoded content (or a
//! placeholder when the file could not be read) and one blank separator line:
//!
//! ```text
//! --- File: ./a.txt ---
//! hello
//!
//! ```

use crate::types::{FileContent, FileRecord};
use std::io::{self, Write};
use std::path::Path;

/// Writes one record to `out`.
///
/// On Unix the header carries the path's raw bytes, so names that are not
/// valid UTF-8 come out exactly as they were opened.
pub fn write_record<W: Write>(out: &mut W, record: &FileRecord) -> io::Result<()> {
    out.write_all(b"--- File: ")?;
    write_path(out, &record.path)?;
    out.write_all(b" ---\n")?;
    match &record.content {
        FileContent::Text(text) => {
            out.write_all(text.as_bytes())?;
            out.write_all(b"\n")?;
        }
        FileContent::Unreadable(reason) => {
            writeln!(out, "[Could not read file: {}]", reason)?;
        }
    }
    out.write_all(b"\n")
}

#[cfg(unix)]
fn write_path<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    use std::os::unix::ffi::OsStrExt;
    out.write_all(path.as_os_str().as_bytes())
}

#[cfg(not(unix))]
fn write_path<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    write!(out, "{}", path.display())
}

/// Formats one record into a string.
///
/// Non-UTF-8 path bytes are replaced, use [`write_record`] to keep them.
pub fn format_record(record: &FileRecord) -> String {
    let path = record.path.display();
    match &record.content {
        FileContent::Text(text) => format!("--- File: {} ---\n{}\n\n", path, text),
        FileContent::Unreadable(reason) => {
            format!("--- File: {} ---\n[Could not read file: {}]\n\n", path, reason)
        }
    }
}
