// SPDX-License-Identifier: MIT OR Apache-2.0

//! Archiving of retired log files.
//!
//! After rotation the previous file is closed and handed to an [`Archiver`].  The default
//! [`TarGzArchiver`] packs it into `<file>.tar.gz` next to the original and removes the
//! original once the archive is complete.

use flate2::Compression;
use flate2::write::GzEncoder;
use std::ffi::OsString;
use std::fmt::Debug;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

pub const ARCHIVE_EXTENSION: &str = "tar.gz";

pub trait Archiver: Debug + Send + Sync {
    /**
    Archives a closed log file, returning the path of the archive.

    On error the original file must still exist.
    */
    fn archive(&self, path: &Path) -> io::Result<PathBuf>;
}

/// Compresses a file into a single-entry `.tar.gz` alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TarGzArchiver {}

impl TarGzArchiver {
    pub const fn new() -> Self {
        Self {}
    }
}

impl Archiver for TarGzArchiver {
    fn archive(&self, path: &Path) -> io::Result<PathBuf> {
        let archive_path = archive_path(path);
        if let Err(err) = write_archive(path, &archive_path) {
            let _ = fs::remove_file(&archive_path);
            return Err(err);
        }
        fs::remove_file(path)?;
        Ok(archive_path)
    }
}

/// `<path>.tar.gz`
pub fn archive_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(ARCHIVE_EXTENSION);
    PathBuf::from(name)
}

fn write_archive(path: &Path, archive_path: &Path) -> io::Result<()> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} has no file name", path.display()),
        )
    })?;
    let writer = BufWriter::new(File::create(archive_path)?);
    let encoder = GzEncoder::new(writer, Compression::default());
    let mut builder = tar::Builder::new(encoder);
    builder.append_path_with_name(path, file_name)?;
    let mut writer = builder.into_inner()?.finish()?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::io::Read;

    #[test]
    fn archives_and_removes_original() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log_a.txt");
        fs::write(&path, "line one\nline two\n").unwrap();

        let archived = TarGzArchiver::new().archive(&path).unwrap();
        assert_eq!(archived, dir.path().join("log_a.txt.tar.gz"));
        assert!(!path.exists());

        let mut archive = tar::Archive::new(GzDecoder::new(File::open(&archived).unwrap()));
        let mut entries = archive.entries().unwrap();
        let mut entry = entries.next().unwrap().unwrap();
        assert_eq!(&*entry.path().unwrap(), Path::new("log_a.txt"));
        let mut contents = String::new();
        entry.read_to_string(&mut contents).unwrap();
        assert_eq!(contents, "line one\nline two\n");
        assert!(entries.next().is_none());
    }

    #[test]
    fn missing_file_leaves_no_archive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        assert!(TarGzArchiver::new().archive(&path).is_err());
        assert!(!archive_path(&path).exists());
    }
}
