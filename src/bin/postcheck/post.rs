use std::fs;
use std::fs::create_dir;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use ramhorns::Template;

use postcheck::content::content_file::ContentFile;
use postcheck::content::parse_post;
use postcheck::text_utils::{format_date, post_name_from_title, slug_from_title};

use crate::config::open_config;
use crate::{PostArgs, PostOutput};

const POST_TPL: &str = "---
title: {{{title}}}
description: {{{description}}}
publishDate: {{date}}
tags:{{^tags}} []{{/tags}}
{{#tags}}  - {{{tag}}}
{{/tags}}draft: true
---

This is a body example
Please remove it and replace with your content
";

const DEFAULT_DESCRIPTION: &str = "Replace with a short summary of the post";

#[derive(ramhorns::Content)]
struct NewPost {
    title: String,
    description: String,
    date: String,
    tags: Vec<ViewTag>,
}

#[derive(ramhorns::Content)]
struct ViewTag {
    tag: String,
}

fn yaml_scalar(value: &str) -> Result<String> {
    let scalar = serde_yaml::to_string(value)?;
    Ok(scalar.trim_end().to_string())
}

fn render_post(title: &str, description: &str, tags: &[String], date: &NaiveDate) -> Result<String> {
    let tags = tags.iter()
        .map(|t| yaml_scalar(t).map(|tag| ViewTag { tag }))
        .collect::<Result<Vec<_>>>()?;

    let template = Template::new(POST_TPL)?;
    let content = template.render(&NewPost {
        title: yaml_scalar(title)?,
        description: yaml_scalar(description)?,
        date: format_date(date),
        tags,
    });

    // Nothing is printed or written unless `check` would accept it
    let content_file = ContentFile {
        file_path: PathBuf::from("new post"),
        raw_content: content,
    };
    if let Err(e) = parse_post(&content_file) {
        bail!("The new post would not pass the check: {}", e);
    }

    Ok(content_file.raw_content)
}

fn post_file_name(title: &str, date: &NaiveDate) -> Result<String> {
    if slug_from_title(title).is_empty() {
        bail!("Cannot build a file name from the title '{}', it needs at least one letter or digit", title);
    }
    Ok(post_name_from_title(title, date))
}

fn write_post(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        bail!("{} already exists", path.display());
    }
    fs::write(path, content).with_context(|| format!("Error writing {}", path.display()))
}

pub fn post_cmd(args: PostArgs) -> Result<ExitCode> {
    let date = Local::now().date_naive();
    let description = args.description.as_deref().unwrap_or(DEFAULT_DESCRIPTION);
    let content = render_post(&args.title, description, &args.tags, &date)?;

    let content_dir = match args.output {
        PostOutput::Stdout => {
            print!("{}", content);
            return Ok(ExitCode::SUCCESS);
        }
        _ => {
            let (config, _) = open_config(args.config_path.map(PathBuf::from))?;
            config.paths.content_dir
        }
    };

    let name = post_file_name(&args.title, &date)?;
    let full_path = match args.output {
        PostOutput::Dir => {
            let dir = content_dir.join(&name);
            create_dir(&dir).with_context(|| format!("Error creating directory {}", dir.display()))?;
            dir.join("index.md")
        }
        _ => content_dir.join(format!("{}.md", name)),
    };

    write_post(&full_path, &content)?;
    println!("Created {}", full_path.display());

    Ok(ExitCode::SUCCESS)
}
