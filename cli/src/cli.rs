use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "folio-cli", version, about = "Folio content tools")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate every post in the content directory.
    Check {
        /// Content directory with one markdown file per post.
        #[arg(long, default_value = "./content/posts")]
        content_dir: PathBuf,
    },
    /// List posts, newest first.
    List {
        /// Content directory with one markdown file per post.
        #[arg(long, default_value = "./content/posts")]
        content_dir: PathBuf,
        /// Restrict to one language partition (en or vi).
        #[arg(long)]
        lang: Option<String>,
    },
    /// Scaffold a new post file with YAML front matter.
    New {
        /// Content directory with one markdown file per post.
        #[arg(long, default_value = "./content/posts")]
        content_dir: PathBuf,
        /// Post title; the slug is derived from it.
        #[arg(long)]
        title: String,
        /// Post language (en or vi).
        #[arg(long, default_value = "en")]
        lang: String,
        /// Optional category; omitted posts fall back to "uncategorized".
        #[arg(long)]
        category: Option<String>,
    },
}
