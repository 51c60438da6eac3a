use std::fs;
use std::path::{Path, PathBuf};

use crate::content::ContentError;

pub struct ContentFile {
    pub file_path: PathBuf,
    pub raw_content: String,
}

impl ContentFile {
    pub fn from_file(file_path: PathBuf, extensions: &[String]) -> Result<ContentFile, ContentError> {
        if !Self::is_supported(&file_path, extensions) {
            return Err(ContentError::UnsupportedFormat(file_path));
        }

        let raw_content = match fs::read_to_string(&file_path) {
            Ok(content) => content,
            Err(source) => return Err(ContentError::Io { path: file_path, source }),
        };

        Ok(ContentFile {
            file_path,
            raw_content,
        })
    }

    pub fn is_supported(file_name: &Path, extensions: &[String]) -> bool {
        match file_name.extension().and_then(|ext| ext.to_str()) {
            Some(ext) => extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)),
            None => false,
        }
    }
}
