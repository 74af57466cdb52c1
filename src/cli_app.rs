use clap::{Args, Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::command_logic::init::init_config;
use crate::command_logic::posts::{create_post, delete_post, edit_post, list_posts};
use crate::command_logic::shell::run_shell;
use crate::config::Config;
use crate::external_api::{blog_api::BlogApi, ApiError};

#[derive(Parser)]
#[command(
    name = "postboard",
    version,
    about = "Terminal client for a blog posts REST API",
    long_about = None,
    propagate_version = true
)]
pub struct Cli {
    /// Blog API url, overrides the environment and the config file
    #[arg(long, global = true)]
    pub base_url: Option<String>,
    /// Path to the config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Debug logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the config file
    Init,
    /// Show one page of posts
    List(PageArgs),
    /// Create a post
    Create(CreateArgs),
    /// Update a post from the given page
    Edit(EditArgs),
    /// Delete a post
    Delete(DeleteArgs),
    /// Interactive view
    Shell(PageArgs),
}

#[derive(Args)]
pub struct PageArgs {
    /// Page number
    #[arg(long, short, default_value_t = 1, value_parser = validate_u32_more_then_zero)]
    pub page: u32,
}

#[derive(Args)]
pub struct CreateArgs {
    /// Post title
    #[arg(long, short, required = true)]
    pub title: String,
    /// Post body
    #[arg(long, short, required = true)]
    pub content: String,
    /// Image url
    #[arg(long, short)]
    pub image: Option<String>,
    /// Category id
    #[arg(long, value_parser = validate_u32_more_then_zero)]
    pub category_id: Option<u32>,
    /// Tag id, repeat for several tags
    #[arg(long = "tag", value_parser = validate_u32_more_then_zero)]
    pub tags: Vec<u32>,
    /// Publish right away
    #[arg(long)]
    pub published: bool,
}

#[derive(Args)]
pub struct EditArgs {
    /// Post id
    #[arg(value_parser = validate_u32_more_then_zero)]
    pub post_id: u32,
    /// Page the post is on
    #[arg(long, short, default_value_t = 1, value_parser = validate_u32_more_then_zero)]
    pub page: u32,
    /// New title
    #[arg(long, short)]
    pub title: Option<String>,
    /// New body
    #[arg(long, short)]
    pub content: Option<String>,
    /// New image url
    #[arg(long, short)]
    pub image: Option<String>,
    /// New category id
    #[arg(long, value_parser = validate_u32_more_then_zero)]
    pub category_id: Option<u32>,
    /// Replace the tags, repeat for several tags
    #[arg(long = "tag", value_parser = validate_u32_more_then_zero)]
    pub tags: Vec<u32>,
    /// New publish flag
    #[arg(long)]
    pub published: Option<bool>,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Post id
    #[arg(value_parser = validate_u32_more_then_zero)]
    pub post_id: u32,
    /// Page the post is on
    #[arg(long, short, default_value_t = 1, value_parser = validate_u32_more_then_zero)]
    pub page: u32,
}

pub fn validate_u32_more_then_zero(value: &str) -> Result<u32, ApiError> {
    let id: u32 = value
        .parse()
        .map_err(|_| ApiError::InvalidArgument("id".to_string(), value.to_string()))?;
    if id == 0 {
        return Err(ApiError::IdMoreThenZero);
    }
    Ok(id)
}

pub async fn handle_command<R, W>(cli: Cli, input: R, mut output: W) -> Result<(), ApiError>
where
    R: BufRead,
    W: Write,
{
    if let Commands::Init = cli.command {
        let path = match &cli.config {
            Some(path) => path.clone(),
            None => Config::default_path()?,
        };
        let message = init_config(&path, input, &mut output)?;
        writeln!(output, "{}", message)?;
        return Ok(());
    }

    let config = Config::resolve(cli.config.as_deref(), cli.base_url.as_deref())?;
    let blog_api = BlogApi::new(&config)?;

    let rendered = match &cli.command {
        Commands::Init => return Ok(()),
        Commands::List(args) => list_posts(&blog_api, &config, args.page).await,
        Commands::Create(args) => create_post(&blog_api, &config, args).await,
        Commands::Edit(args) => edit_post(&blog_api, &config, args).await,
        Commands::Delete(args) => delete_post(&blog_api, &config, args).await,
        Commands::Shell(args) => {
            return run_shell(&blog_api, &config, args.page, input, output).await;
        }
    };
    writeln!(output, "{}", rendered)?;
    Ok(())
}
