use std::fmt::{Display, Formatter};
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::check::check_cmd;
use crate::post::post_cmd;

mod check;
mod config;
mod post;

const CFG_FILE_NAME: &str = "postcheck.toml";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
enum Args {
    /// Validates the front matter of every post. Exits with 1 if any post is invalid
    Check(CheckArgs),
    /// Creates a new post with a valid front matter
    New(PostArgs),
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Config path
    #[arg(short, long)]
    config_path: Option<String>,

    /// Content directory, overrides the one in the configuration
    #[arg(short = 'd', long)]
    content_dir: Option<String>,

    /// List draft posts as published
    #[arg(long)]
    drafts: bool,

    /// Output format
    #[arg(short, long, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Log debug messages to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Parser, Debug)]
struct PostArgs {
    /// Config path
    #[arg(short, long)]
    config_path: Option<String>,

    /// Title of the post
    #[arg(short, long)]
    title: String,

    /// Short summary shown in listings
    #[arg(short = 'D', long)]
    description: Option<String>,

    /// Tag of the post. Can be repeated
    #[arg(long = "tag")]
    tags: Vec<String>,

    /// Post generation options
    #[arg(short, long, default_value_t = PostOutput::Stdout)]
    output: PostOutput,
}

#[derive(Clone, Debug, ValueEnum)]
enum ReportFormat {
    /// Human readable report of the invalid posts
    Text,
    /// JSON list of the valid posts
    Json,
}

#[derive(Clone, Debug, ValueEnum)]
enum PostOutput {
    /// Writes the new post content to the stdout
    Stdout,
    /// Writes the new post content to a file in the content directory
    File,
    /// Writes the new post content to a directory in the content directory (posts with images)
    Dir,
}

fn write_value_name<T: ValueEnum>(value: &T, f: &mut Formatter<'_>) -> std::fmt::Result {
    match value.to_possible_value() {
        Some(possible) => write!(f, "{}", possible.get_name()),
        None => Ok(()),
    }
}

impl Display for ReportFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_value_name(self, f)
    }
}

impl Display for PostOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_value_name(self, f)
    }
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    match args {
        Args::Check(args) => check_cmd(args),
        Args::New(args) => post_cmd(args),
    }
}
