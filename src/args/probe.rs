//! File probe — the resolver's view of the file system.

use std::fs;
use std::io;
use std::path::Path;

/// What a path points at, without following symbolic links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    File,
    Directory,
    /// Symbolic link, socket, device or anything else that is not a plain file.
    Other,
}

/// Classifies candidate paths for the resolver.
pub trait FileProbe {
    fn probe(&self, path: &Path) -> io::Result<FileKind>;
}

/// Probe backed by the real file system (`lstat` semantics).
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl FileProbe for FsProbe {
    fn probe(&self, path: &Path) -> io::Result<FileKind> {
        let file_type = fs::symlink_metadata(path)?.file_type();

        Ok(if file_type.is_file() {
            FileKind::File
        } else if file_type.is_dir() {
            FileKind::Directory
        } else {
            FileKind::Other
        })
    }
}

impl<P: FileProbe + ?Sized> FileProbe for &P {
    fn probe(&self, path: &Path) -> io::Result<FileKind> {
        (**self).probe(path)
    }
}
