use std::fmt::Display;

use faststr::FastStr;
use reqwest::multipart::{Form, Part};

use crate::{
    consts::FILES_FIELD,
    errors::Result,
    file::{FileEntry, FileSelection},
};

/// Named file parts of one `multipart/form-data` body.
///
/// Entries keep insertion order and a field name may repeat, so a selection of
/// N files becomes N parts all named `files[]`. The payload is only lowered into
/// a [`Form`] when it is sent, which is where the boundary gets chosen.
#[derive(Debug, Clone, Default)]
pub struct MultipartPayload {
    entries: Vec<(FastStr, FileEntry)>,
}

impl MultipartPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_selection(selection: &FileSelection) -> Self {
        let mut payload = Self::new();
        for file in selection {
            payload.append(FILES_FIELD, file.clone());
        }
        payload
    }

    pub fn append<F: Into<FastStr>>(&mut self, field: F, file: FileEntry) {
        self.entries.push((field.into(), file));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[(FastStr, FileEntry)] {
        &self.entries
    }

    pub fn into_form(self) -> Result<Form> {
        let mut form = Form::new();
        for (field, file) in self.entries {
            let size = file.size() as u64;
            let part = Part::stream_with_length(file.data, size)
                .file_name(file.filename.to_string())
                .mime_str(file.mime_type.as_str())?;
            form = form.part(field.to_string(), part);
        }
        Ok(form)
    }
}

impl Display for MultipartPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let size: usize = self.entries.iter().map(|(_, file)| file.size()).sum();
        write!(f, "parts: {}, data_len: {}", self.entries.len(), size)
    }
}
