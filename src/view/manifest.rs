use std::path::Path;

use serde::Serialize;

use crate::collection::Collection;
use crate::schema::PostEntry;

#[derive(Serialize)]
struct ManifestEntry<'a> {
    slug: &'a str,
    file: &'a Path,
    data: &'a PostEntry,
}

/// JSON list of the entries handed to the site generator, newest first.
pub fn render_manifest(collection: &Collection, include_drafts: bool) -> serde_json::Result<String> {
    let entries: Vec<ManifestEntry> = collection.published(include_drafts)
        .map(|e| ManifestEntry {
            slug: e.slug.as_str(),
            file: e.post.file_name.as_path(),
            data: &e.post.entry,
        })
        .collect();

    serde_json::to_string_pretty(&entries)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use serde_json::{json, Value};
    use tempfile::TempDir;

    use crate::config::CollectionSettings;
    use crate::test_data::{POST_DATA, POST_DATA_TOML};

    use super::*;

    #[test]
    fn test_manifest() {
        let root = TempDir::new().unwrap();
        let post_path = root.path().join("argocd-intro.md");
        fs::write(&post_path, POST_DATA).unwrap();
        fs::write(root.path().join("terraform-state.md"), POST_DATA_TOML).unwrap();
        let collection = Collection::load(root.path(), &CollectionSettings::default()).unwrap();

        let manifest: Value = serde_json::from_str(&render_manifest(&collection, false).unwrap()).unwrap();
        assert_eq!(manifest, json!([{
            "slug": "argocd-intro",
            "file": post_path.to_str().unwrap(),
            "data": {
                "title": "Getting started with ArgoCD",
                "description": "Deploying to Kubernetes the GitOps way, one Application at a time.",
                "publishDate": "2024-02-12",
                "tags": ["kubernetes", "argocd", "gitops"],
                "draft": false
            }
        }]));

        let manifest: Value = serde_json::from_str(&render_manifest(&collection, true).unwrap()).unwrap();
        assert_eq!(manifest.as_array().unwrap().len(), 2);
        assert_eq!(manifest[1]["data"]["draft"], json!(true));
    }
}
