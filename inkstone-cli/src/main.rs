// Command-line interface for inkstone
//
// This binary bridges Markdown and a hosted workspace document store.
// Pages read from the store are printed as Markdown; Markdown written by
// the user is parsed into blocks and persisted through the store API.
//
// All conversion logic lives in the inkstone-markdown crate and all I/O in
// inkstone-client; this layer is argument handling, input validation and
// response printing.
//
// Usage:
//  inkstone get-page <PAGE_ID> [--with-block-ids]   - Print a page as Markdown
//  inkstone create-page <PARENT_ID> <TITLE> [FILE]  - Create a page from Markdown
//  inkstone append <PAGE_ID> [FILE]                 - Append Markdown to a page
//  inkstone update-block <BLOCK_ID> [FILE]          - Overwrite one block
//  inkstone replace-block <BLOCK_ID> [FILE]         - Replace a block with new blocks
//  inkstone delete-block <BLOCK_ID>                 - Delete a block
//  inkstone comment <BLOCK_ID> <TEXT>               - Comment on a page or block
//
// Markdown content is read from FILE, or from stdin when FILE is omitted
// or given as '-'. Block ids for comment/update targets come from
// `get-page --with-block-ids`.

use anyhow::{bail, Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::fs;

use inkstone_client::WorkspaceClient;
use inkstone_config::{InkstoneConfig, Loader};
use inkstone_markdown::model::Block;
use inkstone_markdown::{parse_markdown, render_blocks, render_page_frontmatter};

fn build_cli() -> Command {
    Command::new("inkstone")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Markdown bridge for hosted workspace documents")
        .long_about(
            "inkstone reads workspace pages as Markdown and writes Markdown back\n\
             as structured blocks.\n\n\
             Configuration:\n  \
             The API credential and base URL come from inkstone.toml (or the file\n  \
             given with --config) layered over built-in defaults; INKSTONE_*\n  \
             environment variables override both, e.g. INKSTONE_API__TOKEN.\n\n\
             Examples:\n  \
             inkstone get-page 6b1f… --with-block-ids   # read, keeping block ids\n  \
             inkstone append 6b1f… notes.md             # push a Markdown file\n  \
             echo 'hello **world**' | inkstone comment 83aa… -",
        )
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an inkstone.toml configuration file")
                .global(true),
        )
        .subcommand(
            Command::new("get-page")
                .about("Fetch a page and print it as Markdown")
                .arg(Arg::new("page-id").value_name("PAGE_ID").required(true))
                .arg(
                    Arg::new("with-block-ids")
                        .long("with-block-ids")
                        .help("Prefix each block with an identifier comment for later updates")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("create-page")
                .about("Create a new page from Markdown content")
                .arg(Arg::new("parent-id").value_name("PARENT_ID").required(true))
                .arg(Arg::new("title").value_name("TITLE").required(true))
                .arg(markdown_file_arg()),
        )
        .subcommand(
            Command::new("append")
                .about("Append Markdown content to an existing page")
                .arg(Arg::new("page-id").value_name("PAGE_ID").required(true))
                .arg(markdown_file_arg()),
        )
        .subcommand(
            Command::new("update-block")
                .about("Overwrite a single block with the first block of the given Markdown")
                .arg(Arg::new("block-id").value_name("BLOCK_ID").required(true))
                .arg(markdown_file_arg()),
        )
        .subcommand(
            Command::new("replace-block")
                .about("Replace a block's content with one or more new blocks")
                .arg(Arg::new("block-id").value_name("BLOCK_ID").required(true))
                .arg(markdown_file_arg()),
        )
        .subcommand(
            Command::new("delete-block")
                .about("Delete a block from its page")
                .arg(Arg::new("block-id").value_name("BLOCK_ID").required(true)),
        )
        .subcommand(
            Command::new("comment")
                .about("Add a Markdown comment to a page or block")
                .arg(Arg::new("block-id").value_name("BLOCK_ID").required(true))
                .arg(
                    Arg::new("text")
                        .value_name("TEXT")
                        .required(true)
                        .help("Comment content ('-' reads stdin)"),
                ),
        )
}

fn markdown_file_arg() -> Arg {
    Arg::new("file")
        .value_name("FILE")
        .help("Markdown file to read ('-' or omitted reads stdin)")
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = build_cli().get_matches();

    let config = load_config(&matches)?;
    init_tracing(&config);

    if config.api.token.trim().is_empty() {
        bail!(
            "no API token configured; set INKSTONE_API__TOKEN or api.token in inkstone.toml"
        );
    }
    let client = WorkspaceClient::new(&config.api.base_url, &config.api.token)?
        .with_api_version(&config.api.version);

    match matches.subcommand() {
        Some(("get-page", sub)) => {
            let page_id = required(sub, "page-id")?;
            let with_ids = sub.get_flag("with-block-ids");

            let page = client.retrieve_page(page_id).await?;
            let frontmatter = render_page_frontmatter(&page)?;
            let blocks = client.fetch_children(page_id).await?;
            print!("{frontmatter}{}", render_blocks(&blocks, with_ids));
        }

        Some(("create-page", sub)) => {
            let parent_id = required(sub, "parent-id")?;
            let title = required(sub, "title")?;
            let blocks = markdown_blocks(sub)?;

            let page_id = client.create_page(parent_id, title, &blocks).await?;
            println!("Page created successfully with ID: {page_id}");
        }

        Some(("append", sub)) => {
            let page_id = required(sub, "page-id")?;
            let blocks = markdown_blocks(sub)?;

            client.append_blocks(page_id, &blocks).await?;
            println!("Content successfully appended to page {page_id}");
        }

        Some(("update-block", sub)) => {
            let block_id = required(sub, "block-id")?;
            let mut blocks = markdown_blocks(sub)?;

            // Only the first block's content is applied to the target.
            let first = take_first(&mut blocks)?;
            client.update_block(block_id, &first.content).await?;
            println!("Block {block_id} updated successfully");
        }

        Some(("replace-block", sub)) => {
            let block_id = required(sub, "block-id")?;
            let mut blocks = markdown_blocks(sub)?;
            let count = blocks.len();

            // The store API has no atomic replace: the target takes the
            // first block's content, remaining blocks land beneath it.
            let first = take_first(&mut blocks)?;
            client.update_block(block_id, &first.content).await?;
            if !blocks.is_empty() {
                client.append_blocks(block_id, &blocks).await?;
            }
            println!("Block {block_id} replaced successfully with {count} block(s)");
        }

        Some(("delete-block", sub)) => {
            let block_id = required(sub, "block-id")?;
            client.delete_block(block_id).await?;
            println!("Block {block_id} deleted successfully");
        }

        Some(("comment", sub)) => {
            let block_id = required(sub, "block-id")?;
            let text = required(sub, "text")?;
            let content = if text == "-" {
                read_stdin()?
            } else {
                text.to_string()
            };
            if content.trim().is_empty() {
                bail!("Comment content is required");
            }

            let comment_id = client.add_comment(block_id, &content).await?;
            println!("Comment added successfully with ID: {comment_id}");
        }

        _ => unreachable!("subcommand is required"),
    }

    Ok(())
}

fn load_config(matches: &ArgMatches) -> Result<InkstoneConfig> {
    let loader = match config_path(matches) {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file("inkstone.toml"),
    };
    loader.build().context("failed to load configuration")
}

/// `--config` is global, so it may surface on the top-level matches or on
/// the subcommand's, depending on where it was typed.
fn config_path(matches: &ArgMatches) -> Option<&String> {
    matches.get_one("config").or_else(|| {
        matches
            .subcommand()
            .and_then(|(_, sub)| sub.get_one("config"))
    })
}

fn init_tracing(config: &InkstoneConfig) {
    // Logs go to stderr so rendered Markdown on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log.filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a str> {
    let value: &String = matches
        .get_one(name)
        .expect("clap enforces required arguments");
    if value.trim().is_empty() {
        bail!("{name} must not be empty");
    }
    Ok(value)
}

/// Read the subcommand's Markdown input and parse it into blocks.
fn markdown_blocks(matches: &ArgMatches) -> Result<Vec<Block>> {
    let content = match matches.get_one::<String>("file").map(String::as_str) {
        Some("-") | None => read_stdin()?,
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?
        }
    };
    if content.trim().is_empty() {
        bail!("Markdown content is required");
    }
    Ok(parse_markdown(&content))
}

fn take_first(blocks: &mut Vec<Block>) -> Result<Box<inkstone_markdown::FullBlock>> {
    if blocks.is_empty() {
        bail!("Failed to convert markdown content to block format");
    }
    match blocks.remove(0) {
        Block::Full(full) => Ok(full),
        Block::Partial(_) => unreachable!("parsed blocks are always full"),
    }
}

fn read_stdin() -> Result<String> {
    std::io::read_to_string(std::io::stdin()).context("failed to read stdin")
}
