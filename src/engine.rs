use crate::error::AggregateError;
use crate::options::AggregateOptions;
use crate::output::write_record;
use crate::types::{AggregateSummary, FileContent, FileRecord};
use ignore::WalkBuilder;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

/// Yields the path of every file under the root, in walk order.
struct Walker {
    inner: ignore::Walk,
    exclude: Option<PathBuf>,
}
impl Walker {
    fn new(options: &AggregateOptions) -> Result<Self, AggregateError> {
        let metadata =
            fs::metadata(&options.root).map_err(|e| AggregateError::io(&options.root, e))?;
        if !metadata.is_dir() {
            return Err(AggregateError::RootNotDirectory(options.root.clone()));
        }
        let mut builder = WalkBuilder::new(&options.root);
        builder
            .standard_filters(false)
            .max_depth(None)
            .follow_links(false);
        let exclude = if options.exclude_output {
            fs::canonicalize(&options.output).ok()
        } else {
            None
        };
        Ok(Self {
            inner: builder.build(),
            exclude,
        })
    }
    fn is_output(&self, path: &Path) -> bool {
        let Some(exclude) = &self.exclude else {
            return false;
        };
        if path.file_name() != exclude.file_name() {
            return false;
        }
        fs::canonicalize(path).is_ok_and(|p| &p == exclude)
    }
}
impl Iterator for Walker {
    type Item = Result<PathBuf, AggregateError>;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(e) => return Some(Err(AggregateError::Walk(e.to_string()))),
            };
            if !is_file_like(&entry) {
                continue;
            }
            if self.is_output(entry.path()) {
                #[cfg(feature = "logging")]
                tracing::debug!("Skipping output file: {}", entry.path().display());
                continue;
            }
            return Some(Ok(entry.into_path()));
        }
    }
}

// Symlinks are not followed: a link to a directory is neither descended into
// nor recorded, any other link (dangling ones included) is recorded.
fn is_file_like(entry: &ignore::DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_dir() => false,
        Some(ft) if ft.is_symlink() => !entry.path().is_dir(),
        Some(_) => true,
        None => false,
    }
}

/// Reads a whole file as UTF-8 text.
///
/// Never fails: an open, read or decode error is returned as
/// [`FileContent::Unreadable`] carrying the error description.
pub fn read_file(path: &Path) -> FileContent {
    let result = File::open(path).and_then(|file| {
        let mut reader = BufReader::new(file);
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(bytes)
    });
    let content = match result {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(text) => FileContent::Text(text),
            Err(e) => FileContent::Unreadable(e.utf8_error().to_string()),
        },
        Err(e) => FileContent::Unreadable(e.to_string()),
    };
    #[cfg(feature = "logging")]
    if let FileContent::Unreadable(reason) = &content {
        tracing::debug!("Could not read {}: {}", path.display(), reason);
    }
    content
}

/// Lazily reads every file under the root, one [`FileRecord`] per file.
///
/// Records come out in walk order. A walk error is yielded once as `Err`;
/// per-file problems never are, they become [`FileContent::Unreadable`].
pub struct FileRecords {
    walker: Walker,
}
impl FileRecords {
    pub fn new(options: &AggregateOptions) -> Result<Self, AggregateError> {
        Ok(Self {
            walker: Walker::new(options)?,
        })
    }
}
impl Iterator for FileRecords {
    type Item = Result<FileRecord, AggregateError>;
    fn next(&mut self) -> Option<Self::Item> {
        let path = match self.walker.next()? {
            Ok(p) => p,
            Err(e) => return Some(Err(e)),
        };
        let content = read_file(&path);
        Some(Ok(FileRecord { path, content }))
    }
}

/// Writes every file under `options.root` into `options.output`.
///
/// The output is created (or truncated) before the walk starts and each
/// record is written as soon as its file has been read. Walk errors and
/// failures on the output itself abort the run; the output is left as far
/// as it got.
pub fn aggregate(options: AggregateOptions) -> Result<AggregateSummary, AggregateError> {
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Aggregating {} into {}",
        options.root.display(),
        options.output.display()
    );
    if options.output.file_name().is_none() {
        return Err(AggregateError::OutputNotFile(options.output.clone()));
    }
    let file =
        File::create(&options.output).map_err(|e| AggregateError::io(&options.output, e))?;
    let mut out = BufWriter::new(file);
    let mut summary = AggregateSummary {
        output: options.output.clone(),
        records: 0,
        unreadable: 0,
    };

    #[cfg(not(feature = "parallel"))]
    for record in FileRecords::new(&options)? {
        emit(&mut out, &record?, &mut summary, &options.output)?;
    }
    #[cfg(feature = "parallel")]
    for record in read_parallel(&options)? {
        emit(&mut out, &record, &mut summary, &options.output)?;
    }

    out.flush().map_err(|e| AggregateError::io(&options.output, e))?;
    #[cfg(feature = "logging")]
    tracing::info!(
        "Wrote {} records ({} unreadable) to {}",
        summary.records,
        summary.unreadable,
        summary.output.display()
    );
    Ok(summary)
}

fn emit<W: Write>(
    out: &mut W,
    record: &FileRecord,
    summary: &mut AggregateSummary,
    output: &Path,
) -> Result<(), AggregateError> {
    write_record(out, record).map_err(|e| AggregateError::io(output, e))?;
    summary.records += 1;
    if !record.content.is_readable() {
        summary.unreadable += 1;
    }
    Ok(())
}

// The walk is collected up front; reads run on the rayon pool and the
// records come back in walk order.
#[cfg(feature = "parallel")]
fn read_parallel(options: &AggregateOptions) -> Result<Vec<FileRecord>, AggregateError> {
    let paths = Walker::new(options)?.collect::<Result<Vec<_>, _>>()?;
    Ok(paths
        .into_par_iter()
        .map(|path| {
            let content = read_file(&path);
            FileRecord { path, content }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn reads_utf8_text() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, "héllo\r\nworld").unwrap();
        assert_eq!(read_file(&path), FileContent::Text("héllo\r\nworld".into()));
    }

    #[test]
    fn invalid_utf8_is_unreadable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("blob.bin");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x41]).unwrap();
        match read_file(&path) {
            FileContent::Unreadable(reason) => {
                assert!(reason.contains("invalid utf-8"), "{reason}");
            }
            other => panic!("expected unreadable, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_unreadable() {
        let dir = tempdir().unwrap();
        let content = read_file(&dir.path().join("nope"));
        assert!(matches!(content, FileContent::Unreadable(ref r) if !r.is_empty()));
    }

    #[test]
    fn walker_skips_directories() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        fs::write(dir.path().join("a/b/c.txt"), "c").unwrap();
        let options = AggregateOptions {
            root: dir.path().to_path_buf(),
            output: dir.path().join("out.txt"),
            exclude_output: true,
        };
        let paths: Vec<PathBuf> = Walker::new(&options)
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(paths, vec![dir.path().join("a/b/c.txt")]);
    }
}
