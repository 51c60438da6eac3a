use std::collections::{BTreeMap, HashMap};
use std::io;
use std::path::{Path, PathBuf};

use spdlog::{debug, info};

use crate::config::CollectionSettings;
use crate::content::content_file::ContentFile;
use crate::content::{parse_post, ContentError, Post};
use crate::post_list::PostList;

pub struct CollectionEntry {
    pub slug: String,
    pub post: Post,
}

/// A content file that could not be published, and why.
pub struct Failure {
    pub path: PathBuf,
    pub error: ContentError,
}

/// Every post of a content directory, split into valid entries and failures.
#[derive(Default)]
pub struct Collection {
    entries: Vec<CollectionEntry>,
    failures: Vec<Failure>,
    // slug, file
    slug_to_path: HashMap<String, PathBuf>,
}

impl Collection {
    pub fn new() -> Collection {
        Default::default()
    }

    /// Validates every post of `content_dir`. A bad post never stops the
    /// others from being checked.
    pub fn load(content_dir: &Path, settings: &CollectionSettings) -> io::Result<Collection> {
        let post_list = PostList {
            root_dir: content_dir.to_path_buf(),
            index_base_name: &settings.index_base_name,
            extensions: &settings.extensions,
        };
        let post_files = post_list.retrieve()?;
        info!("Checking {} posts in {}", post_files.len(), content_dir.display());

        let mut collection = Collection::new();
        for post_file in post_files {
            // The slug is taken even when the post turns out invalid
            let res = collection.reserve_slug(&post_file.slug, &post_file.path)
                .and_then(|()| ContentFile::from_file(post_file.path.clone(), &settings.extensions))
                .and_then(|content_file| parse_post(&content_file));

            match res {
                Ok(post) => {
                    debug!("Post {} is valid", post_file.path.display());
                    collection.entries.push(CollectionEntry { slug: post_file.slug, post });
                }
                Err(error) => {
                    debug!("Post {} is invalid: {}", post_file.path.display(), error);
                    collection.failures.push(Failure { path: post_file.path, error });
                }
            }
        }
        collection.sort();

        info!("{} valid posts, {} failures", collection.entries.len(), collection.failures.len());
        Ok(collection)
    }

    pub fn add(&mut self, slug: String, post: Post) -> Result<(), ContentError> {
        self.reserve_slug(&slug, &post.file_name)?;
        self.entries.push(CollectionEntry { slug, post });
        Ok(())
    }

    fn reserve_slug(&mut self, slug: &str, path: &Path) -> Result<(), ContentError> {
        if let Some(first) = self.slug_to_path.get(slug) {
            return Err(ContentError::DuplicateSlug { slug: slug.to_string(), first: first.clone() });
        }

        self.slug_to_path.insert(slug.to_string(), path.to_path_buf());
        Ok(())
    }

    /// Newest first. Posts of the same day are ordered by slug.
    pub fn sort(&mut self) {
        self.entries.sort_by(|a, b| {
            b.post.entry.publish_date.cmp(&a.post.entry.publish_date)
                .then_with(|| a.slug.cmp(&b.slug))
        });
    }

    pub fn entries(&self) -> &[CollectionEntry] {
        &self.entries
    }

    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn draft_count(&self) -> usize {
        self.entries.iter().filter(|e| e.post.entry.draft).count()
    }

    pub fn from_slug(&self, slug: &str) -> Option<&CollectionEntry> {
        self.entries.iter().find(|e| e.slug == slug)
    }

    /// Entries visible on the public site. Drafts are only listed when
    /// `include_drafts` is set.
    pub fn published(&self, include_drafts: bool) -> impl Iterator<Item = &CollectionEntry> {
        self.entries.iter().filter(move |e| include_drafts || !e.post.entry.draft)
    }

    /// Tag to the published entries carrying it, in listing order.
    pub fn tag_index(&self, include_drafts: bool) -> BTreeMap<&str, Vec<&CollectionEntry>> {
        let mut index: BTreeMap<&str, Vec<&CollectionEntry>> = BTreeMap::new();
        for entry in self.published(include_drafts) {
            for tag in &entry.post.entry.tags {
                let tagged = index.entry(tag.as_str()).or_default();
                let already_listed = tagged.last().is_some_and(|last| std::ptr::eq(*last, entry));
                if !already_listed {
                    tagged.push(entry);
                }
            }
        }
        index
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use chrono::NaiveDate;
    use tempfile::TempDir;

    use crate::schema::PostEntry;
    use crate::test_data::{POST_DATA, POST_DATA_INVALID, POST_DATA_TOML};

    use super::*;

    fn post(file_name: &str, date: (i32, u32, u32), tags: &[&str], draft: bool) -> Post {
        Post {
            file_name: PathBuf::from(file_name),
            entry: PostEntry {
                title: file_name.to_string(),
                description: "A post".to_string(),
                publish_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
                tags: tags.iter().map(|t| t.to_string()).collect(),
                draft,
            },
            body: String::new(),
        }
    }

    fn sample_collection() -> Collection {
        let mut collection = Collection::new();
        collection.add("helm".to_string(), post("helm.md", (2023, 5, 1), &["kubernetes", "helm"], false)).unwrap();
        collection.add("argocd".to_string(), post("argocd.md", (2024, 2, 12), &["kubernetes", "series", "kubernetes"], false)).unwrap();
        collection.add("operators".to_string(), post("operators.md", (2024, 6, 1), &["kubernetes", "go"], true)).unwrap();
        collection.add("generics".to_string(), post("generics.md", (2024, 2, 12), &["typescript"], false)).unwrap();
        collection.sort();
        collection
    }

    fn slugs<'a>(entries: impl Iterator<Item = &'a CollectionEntry>) -> Vec<&'a str> {
        entries.map(|e| e.slug.as_str()).collect()
    }

    #[test]
    fn test_sort_newest_first() {
        let collection = sample_collection();
        assert_eq!(slugs(collection.entries().iter()), ["operators", "argocd", "generics", "helm"]);
    }

    #[test]
    fn test_drafts_excluded_from_listing() {
        let collection = sample_collection();
        assert_eq!(slugs(collection.published(false)), ["argocd", "generics", "helm"]);
        assert_eq!(slugs(collection.published(true)), ["operators", "argocd", "generics", "helm"]);
        assert_eq!(collection.draft_count(), 1);
    }

    #[test]
    fn test_duplicate_slug() {
        let mut collection = sample_collection();
        let res = collection.add("helm".to_string(), post("helm/index.md", (2023, 5, 2), &[], false));
        match res {
            Err(ContentError::DuplicateSlug { slug, first }) => {
                assert_eq!(slug, "helm");
                assert_eq!(first, PathBuf::from("helm.md"));
            }
            _ => panic!("expected a duplicate slug error"),
        }
    }

    #[test]
    fn test_from_slug() {
        let collection = sample_collection();
        assert_eq!(collection.from_slug("generics").unwrap().post.entry.tags, ["typescript"]);
        assert!(collection.from_slug("rust").is_none());
    }

    #[test]
    fn test_tag_index() {
        let collection = sample_collection();
        let index = collection.tag_index(false);
        assert_eq!(index.keys().copied().collect::<Vec<_>>(), ["helm", "kubernetes", "series", "typescript"]);
        assert_eq!(slugs(index["kubernetes"].iter().copied()), ["argocd", "helm"]);

        let index = collection.tag_index(true);
        assert_eq!(slugs(index["go"].iter().copied()), ["operators"]);
    }

    #[test]
    fn test_load() -> io::Result<()> {
        let root = TempDir::new()?;
        fs::write(root.path().join("argocd-intro.md"), POST_DATA)?;
        fs::write(root.path().join("generics.md"), POST_DATA_INVALID)?;
        fs::create_dir(root.path().join("terraform-state"))?;
        fs::write(root.path().join("terraform-state").join("index.md"), POST_DATA_TOML)?;

        let collection = Collection::load(root.path(), &CollectionSettings::default())?;

        assert_eq!(slugs(collection.entries().iter()), ["argocd-intro", "terraform-state"]);
        assert!(collection.has_failures());
        assert_eq!(collection.failures().len(), 1);
        assert_eq!(collection.failures()[0].path, root.path().join("generics.md"));
        assert!(matches!(collection.failures()[0].error, ContentError::Invalid(_)));
        assert_eq!(collection.draft_count(), 1);
        Ok(())
    }

    #[test]
    fn test_load_duplicate_slug_of_invalid_post() -> io::Result<()> {
        let root = TempDir::new()?;
        fs::create_dir(root.path().join("generics"))?;
        fs::write(root.path().join("generics").join("index.md"), POST_DATA_INVALID)?;
        fs::write(root.path().join("generics.md"), POST_DATA)?;

        let collection = Collection::load(root.path(), &CollectionSettings::default())?;

        assert!(collection.entries().is_empty());
        assert_eq!(collection.failures().len(), 2);
        let failure = collection.failures().iter()
            .find(|f| f.path == root.path().join("generics.md"))
            .unwrap();
        match failure.error {
            ContentError::DuplicateSlug { ref slug, ref first } => {
                assert_eq!(slug, "generics");
                assert_eq!(first, &root.path().join("generics").join("index.md"));
            }
            ref other => panic!("expected a duplicate slug error, got {:?}", other),
        }
        Ok(())
    }
}
