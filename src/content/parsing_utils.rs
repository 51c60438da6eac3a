use crate::content::ContentError;

pub const YAML_DELIMITER: &str = "---";
pub const TOML_DELIMITER: &str = "+++";

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrontMatterFormat {
    Yaml,
    Toml,
}

impl FrontMatterFormat {
    fn delimiter(&self) -> &'static str {
        match self {
            FrontMatterFormat::Yaml => YAML_DELIMITER,
            FrontMatterFormat::Toml => TOML_DELIMITER,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrontMatter<'a> {
    pub format: FrontMatterFormat,
    pub text: &'a str,
}

/// Splits a content file into its front matter block and the markdown body.
///
/// Example of post
/// ---
/// title: Getting started with ArgoCD
/// publishDate: 2024-02-12
/// ---
///
/// ArgoCD watches a git repository...
pub fn split_front_matter(raw: &str) -> Result<(FrontMatter<'_>, &str), ContentError> {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let mut lines = raw.split_inclusive('\n');
    let mut offset = 0;

    // Empty lines before the opening delimiter are ok
    let format = loop {
        let Some(line) = lines.next() else {
            return Err(ContentError::MissingFrontMatter);
        };
        offset += line.len();

        match line.trim() {
            "" => continue,
            YAML_DELIMITER => break FrontMatterFormat::Yaml,
            TOML_DELIMITER => break FrontMatterFormat::Toml,
            _ => return Err(ContentError::MissingFrontMatter),
        }
    };

    let start = offset;
    loop {
        let Some(line) = lines.next() else {
            return Err(ContentError::UnterminatedFrontMatter(format.delimiter()));
        };
        let end = offset;
        offset += line.len();

        if line.trim_end() == format.delimiter() {
            let front_matter = FrontMatter {
                format,
                text: &raw[start..end],
            };
            return Ok((front_matter, &raw[offset..]));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_yaml() {
        let content = "---\ntitle: Hello\ntags: [a]\n---\n# Body\n";
        let (front_matter, body) = split_front_matter(content).unwrap();
        assert_eq!(front_matter, FrontMatter { format: FrontMatterFormat::Yaml, text: "title: Hello\ntags: [a]\n" });
        assert_eq!(body, "# Body\n");
    }

    #[test]
    fn test_split_toml_with_leading_blank_lines_and_crlf() {
        let content = "\n\r\n+++\r\ntitle = \"Hello\"\r\n+++\r\nBody";
        let (front_matter, body) = split_front_matter(content).unwrap();
        assert_eq!(front_matter.format, FrontMatterFormat::Toml);
        assert_eq!(front_matter.text, "title = \"Hello\"\r\n");
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_split_empty_header_and_body() {
        let (front_matter, body) = split_front_matter("\u{feff}---\n---").unwrap();
        assert_eq!(front_matter.text, "");
        assert_eq!(body, "");
    }

    #[test]
    fn test_dashes_inside_value_do_not_close() {
        let content = "---\ndescription: a --- b\n---\n";
        let (front_matter, _) = split_front_matter(content).unwrap();
        assert_eq!(front_matter.text, "description: a --- b\n");
    }

    #[test]
    fn test_missing_front_matter() {
        assert!(matches!(split_front_matter("# Title\n---\n"), Err(ContentError::MissingFrontMatter)));
        assert!(matches!(split_front_matter(""), Err(ContentError::MissingFrontMatter)));
    }

    #[test]
    fn test_unterminated_front_matter() {
        let res = split_front_matter("---\ntitle: Hello\n\n# Body\n");
        assert!(matches!(res, Err(ContentError::UnterminatedFrontMatter("---"))));

        let res = split_front_matter("+++\ntitle = \"Hello\"\n---\n");
        assert!(matches!(res, Err(ContentError::UnterminatedFrontMatter("+++"))));
    }
}
