use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::content::content_file::ContentFile;
use crate::content::front_matter::parse_record;
use crate::content::parsing_utils::split_front_matter;
use crate::schema::{validate, PostEntry, ValidationErrors};

pub mod content_file;
pub mod front_matter;
pub mod parsing_utils;

/// A content file whose header passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub file_name: PathBuf,
    pub entry: PostEntry,
    pub body: String,
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unsupported content file {0}")]
    UnsupportedFormat(PathBuf),
    #[error("front matter is missing, the file must start with --- or +++")]
    MissingFrontMatter,
    #[error("front matter is not closed, expected a line with {0}")]
    UnterminatedFrontMatter(&'static str),
    #[error("invalid YAML front matter: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid TOML front matter: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("front matter must be a mapping of fields, found {0}")]
    NotAMapping(String),
    #[error("front matter keys must be text, found {0}")]
    NonTextKey(String),
    #[error("{0}")]
    Invalid(#[from] ValidationErrors),
    #[error("slug {slug} is already used by {first}")]
    DuplicateSlug { slug: String, first: PathBuf },
}

/// Extracts, decodes and validates the front matter of a content file.
pub fn parse_post(content_file: &ContentFile) -> Result<Post, ContentError> {
    let (front_matter, body) = split_front_matter(&content_file.raw_content)?;
    let record = parse_record(&front_matter)?;
    let entry = validate(&record)?;

    Ok(Post {
        file_name: content_file.file_path.clone(),
        entry,
        body: body.to_string(),
    })
}
