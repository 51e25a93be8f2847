use std::{
    fmt::Display,
    path::{Path, PathBuf},
    slice::Iter,
};

use bytes::Bytes;
use faststr::FastStr;
use tracing::debug;

use crate::errors::Result;

/// A selected file: its content, original name and inferred MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub filename: FastStr,
    pub mime_type: FastStr,
    pub data: Bytes,
}

impl FileEntry {
    pub fn new<N: Into<FastStr>, D: Into<Bytes>>(filename: N, data: D) -> Self {
        let filename = filename.into();
        let mime_type = guess_mime_type(&filename);
        Self {
            filename,
            mime_type,
            data: data.into(),
        }
    }

    pub fn with_mime_type<M: Into<FastStr>>(mut self, mime_type: M) -> Self {
        self.mime_type = mime_type.into();
        self
    }

    pub async fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let filename = match file_name(path) {
            Some(filename) => filename,
            None => return Err(anyhow!("no file name in path: {}", path.display())),
        };
        let data = tokio::fs::read(path).await?;
        debug!("read {} bytes from {}", data.len(), path.display());
        Ok(Self::new(filename, data))
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }
}

impl Display for FileEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "filename: {}, data_len: {}, mime_type: {}",
            self.filename,
            self.data.len(),
            self.mime_type
        )
    }
}

/// Ordered files currently chosen in a file input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSelection(Vec<FileEntry>);

impl FileSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads every path in order, failing on the first unreadable one.
    pub async fn load(paths: &[PathBuf]) -> Result<Self> {
        let mut files = Vec::with_capacity(paths.len());
        for path in paths {
            files.push(FileEntry::from_path(path).await?);
        }
        Ok(Self(files))
    }

    pub fn push(&mut self, file: FileEntry) {
        self.0.push(file);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, FileEntry> {
        self.0.iter()
    }
}

impl From<Vec<FileEntry>> for FileSelection {
    fn from(files: Vec<FileEntry>) -> Self {
        Self(files)
    }
}

impl<'a> IntoIterator for &'a FileSelection {
    type Item = &'a FileEntry;
    type IntoIter = Iter<'a, FileEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

pub fn file_name<P: AsRef<Path>>(path: P) -> Option<FastStr> {
    path.as_ref()
        .file_name()
        .map(|name| FastStr::new(name.to_string_lossy()))
}

pub fn guess_mime_type(filename: &str) -> FastStr {
    match mime_guess::from_path(filename).first() {
        Some(guessed) => FastStr::new(guessed.essence_str()),
        None => FastStr::new(mime::APPLICATION_OCTET_STREAM.essence_str()),
    }
}

#[cfg(test)]
mod tests {
    use std::{fs::write, path::PathBuf};

    use crate::file::{FileEntry, FileSelection, file_name, guess_mime_type};

    #[test]
    pub fn test_file_name() {
        assert_eq!(file_name("/tmp/cat.jpg").unwrap().as_str(), "cat.jpg");
        assert_eq!(file_name("dog.png").unwrap().as_str(), "dog.png");
        assert!(file_name("/").is_none());
    }

    #[test]
    pub fn test_guess_mime_type() {
        assert_eq!(guess_mime_type("cat.jpg").as_str(), "image/jpeg");
        assert_eq!(guess_mime_type("notes.txt").as_str(), "text/plain");
        assert_eq!(guess_mime_type("blob").as_str(), "application/octet-stream");
    }

    #[test]
    pub fn test_explicit_mime_type() {
        let entry = FileEntry::new("weights", vec![1u8, 2, 3]).with_mime_type("image/png");
        assert_eq!(entry.mime_type.as_str(), "image/png");
        assert_eq!(entry.size(), 3);
    }

    #[tokio::test]
    pub async fn test_load_selection_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("b.txt");
        let second = dir.path().join("a.png");
        write(&first, b"second letter").unwrap();
        write(&second, [0x89, b'P', b'N', b'G']).unwrap();

        let selection = FileSelection::load(&[first, second]).await.unwrap();
        assert_eq!(selection.len(), 2);

        let names: Vec<&str> = selection.iter().map(|f| f.filename.as_str()).collect();
        assert_eq!(names, vec!["b.txt", "a.png"]);
        assert_eq!(selection.iter().next().unwrap().data.as_ref(), b"second letter");
        assert_eq!(selection.iter().nth(1).unwrap().mime_type.as_str(), "image/png");
    }

    #[tokio::test]
    pub async fn test_load_missing_file() {
        let missing = PathBuf::from("/tmp/formpost_not_exist_file");
        let err = FileSelection::load(&[missing]).await.unwrap_err();
        assert!(err.to_string().starts_with("Io error"));
    }

    #[tokio::test]
    pub async fn test_load_empty_selection() {
        let selection = FileSelection::load(&[]).await.unwrap();
        assert!(selection.is_empty());
    }
}
