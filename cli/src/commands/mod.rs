mod check;
mod list;
mod new;

use anyhow::Result;

use crate::cli::{Cli, Commands};

pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Check { content_dir } => check::run(&content_dir).await,
        Commands::List { content_dir, lang } => list::run(&content_dir, lang.as_deref()).await,
        Commands::New { content_dir, title, lang, category } => {
            new::run(&content_dir, &title, &lang, category.as_deref()).await
        }
    }
}
