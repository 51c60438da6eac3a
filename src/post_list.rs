use std::{fs, io};
use std::path::{Path, PathBuf};

use crate::content::content_file::ContentFile;

/// A post found in the content directory, with the slug it will be served
/// under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostFile {
    pub path: PathBuf,
    pub slug: String,
}

/// Lists posts of a content directory. A post is either a file
/// (`hello-world.md`) or a directory holding an index file
/// (`hello-world/index.md`).
pub struct PostList<'a> {
    pub root_dir: PathBuf,
    pub index_base_name: &'a str,
    pub extensions: &'a [String],
}

impl PostList<'_> {
    pub fn retrieve(&self) -> io::Result<Vec<PostFile>> {
        let mut posts = self.retrieve_files()?;
        posts.extend(self.retrieve_dirs()?);
        posts.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(posts)
    }

    pub fn retrieve_files(&self) -> io::Result<Vec<PostFile>> {
        let mut posts = vec![];
        for entry in fs::read_dir(self.root_dir.as_path())? {
            let entry = entry?;
            if !entry.file_type()?.is_file() || is_hidden(&entry.path()) {
                continue;
            }

            let path = entry.path();
            if !ContentFile::is_supported(&path, self.extensions) {
                continue;
            }
            if let Some(slug) = path.file_stem().and_then(|s| s.to_str()) {
                posts.push(PostFile { slug: slug.to_string(), path: path.clone() });
            }
        }
        Ok(posts)
    }

    pub fn retrieve_dirs(&self) -> io::Result<Vec<PostFile>> {
        let mut posts = vec![];
        for dir in Self::list_dirs(self.root_dir.as_path())? {
            let Some(slug) = dir.file_name().and_then(|s| s.to_str()) else {
                continue;
            };
            if let Some(path) = self.index_file(&dir)? {
                posts.push(PostFile { slug: slug.to_string(), path });
            }
        }
        Ok(posts)
    }

    fn list_dirs(posts_dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut dirs: Vec<PathBuf> = vec![];
        for entry in fs::read_dir(posts_dir)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() && !is_hidden(&entry.path()) {
                dirs.push(entry.path());
            }
        }
        Ok(dirs)
    }

    fn index_file(&self, dir: &Path) -> io::Result<Option<PathBuf>> {
        let mut found = vec![];
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let path = entry.path();
            let is_index = path.file_stem().and_then(|s| s.to_str()) == Some(self.index_base_name);
            if is_index && ContentFile::is_supported(&path, self.extensions) {
                found.push(path);
            }
        }

        // index.md wins over index.mdx when both exist
        found.sort();
        Ok(found.into_iter().next())
    }
}

fn is_hidden(path: &Path) -> bool {
    match path.file_name().and_then(|s| s.to_str()) {
        Some(name) => name.starts_with('.') || name.starts_with('_'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn extensions() -> Vec<String> {
        vec!["md".to_string(), "mdx".to_string()]
    }

    #[test]
    fn test_retrieve() -> io::Result<()> {
        let root = TempDir::new()?;
        fs::write(root.path().join("argocd-intro.md"), "")?;
        fs::write(root.path().join("notes.txt"), "")?;
        fs::write(root.path().join("_template.md"), "")?;
        fs::create_dir(root.path().join("terraform-state"))?;
        fs::write(root.path().join("terraform-state").join("index.mdx"), "")?;
        fs::write(root.path().join("terraform-state").join("diagram.png"), "")?;
        fs::create_dir(root.path().join("assets"))?;
        fs::write(root.path().join("assets").join("logo.svg"), "")?;
        fs::create_dir(root.path().join(".obsidian"))?;
        fs::write(root.path().join(".obsidian").join("index.md"), "")?;

        let extensions = extensions();
        let post_list = PostList {
            root_dir: root.path().to_path_buf(),
            index_base_name: "index",
            extensions: &extensions,
        };
        let posts = post_list.retrieve()?;

        assert_eq!(posts, vec![
            PostFile { path: root.path().join("argocd-intro.md"), slug: "argocd-intro".to_string() },
            PostFile { path: root.path().join("terraform-state").join("index.mdx"), slug: "terraform-state".to_string() },
        ]);
        Ok(())
    }

    #[test]
    fn test_index_md_preferred() -> io::Result<()> {
        let root = TempDir::new()?;
        let dir = root.path().join("helm");
        fs::create_dir(&dir)?;
        fs::write(dir.join("index.mdx"), "")?;
        fs::write(dir.join("index.md"), "")?;

        let extensions = extensions();
        let post_list = PostList {
            root_dir: root.path().to_path_buf(),
            index_base_name: "index",
            extensions: &extensions,
        };
        assert_eq!(post_list.index_file(&dir)?, Some(dir.join("index.md")));
        Ok(())
    }

    #[test]
    fn test_missing_root() {
        let extensions = extensions();
        let post_list = PostList {
            root_dir: PathBuf::from("/does/not/exist"),
            index_base_name: "index",
            extensions: &extensions,
        };
        assert!(post_list.retrieve().is_err());
    }
}
