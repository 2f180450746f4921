//! The workspace store client.
//!
//! Thin, retry-free glue over the store's HTTP API. The interesting part is
//! [`WorkspaceClient::fetch_children`]: child listings are paginated, and
//! blocks flagged `has_children` must be resolved recursively before the
//! renderer sees them. Resolution runs at most [`CHILD_FETCH_CONCURRENCY`]
//! child requests at a time per level, in order, and stops descending at
//! [`MAX_FETCH_DEPTH`] — a depth-bounded tree walk rather than unbounded
//! recursion.

use std::future::Future;
use std::pin::Pin;

use futures::stream::{self, StreamExt, TryStreamExt};
use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use url::Url;

use inkstone_markdown::decode_rich_text;
use inkstone_markdown::model::{Block, BlockContent, PageRef, RichTextRun};

use crate::error::ClientError;
use crate::wire::{AppendChildren, ChildrenPage, CommentRequest, CreatePageRequest, CreatedObject, ParentRef};

/// Concurrent child-block requests per tree level.
const CHILD_FETCH_CONCURRENCY: usize = 3;

/// Nesting depth past which children are left unresolved (`has_children`
/// stays set, so callers can tell the tree is partial).
const MAX_FETCH_DEPTH: usize = 32;

const VERSION_HEADER: &str = "X-Workspace-Version";
const API_VERSION: &str = "2025-06-01";

/// Client for the hosted workspace block store.
pub struct WorkspaceClient {
    http: reqwest::Client,
    base_url: Url,
    token: String,
    api_version: String,
}

impl WorkspaceClient {
    pub fn new(base_url: &str, token: &str) -> Result<Self, ClientError> {
        if token.trim().is_empty() {
            return Err(ClientError::InvalidArgument("API token is empty".to_string()));
        }
        let base_url = Url::parse(base_url)
            .map_err(|e| ClientError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(WorkspaceClient {
            http: reqwest::Client::new(),
            base_url,
            token: token.to_string(),
            api_version: API_VERSION.to_string(),
        })
    }

    /// Pin a specific API version (the dated default tracks the version
    /// this crate was written against).
    pub fn with_api_version(mut self, version: &str) -> Self {
        self.api_version = version.to_string();
        self
    }

    /// Fetch one page of a block's children.
    pub async fn list_children(
        &self,
        block_id: &str,
        cursor: Option<&str>,
    ) -> Result<ChildrenPage, ClientError> {
        validate_id(block_id)?;
        let mut url = self.endpoint(&["blocks", block_id, "children"])?;
        if let Some(cursor) = cursor {
            url.query_pairs_mut().append_pair("start_cursor", cursor);
        }
        debug!(block_id, cursor, "listing children");
        let response = self.request(Method::GET, url).send().await?;
        expect_json(response).await
    }

    /// Fetch all of a block's children across every page, recursively
    /// resolving nested children into each block's `children` field.
    pub async fn fetch_children(&self, block_id: &str) -> Result<Vec<Block>, ClientError> {
        let blocks = self.fetch_children_at(block_id, 0).await?;
        info!(block_id, count = blocks.len(), "fetched child tree");
        Ok(blocks)
    }

    fn fetch_children_at<'a>(
        &'a self,
        block_id: &'a str,
        depth: usize,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Block>, ClientError>> + Send + 'a>> {
        Box::pin(async move {
            let mut all = Vec::new();
            let mut cursor: Option<String> = None;
            loop {
                let page = self.list_children(block_id, cursor.as_deref()).await?;
                all.extend(page.results);
                if !page.has_more {
                    break;
                }
                match page.next_cursor {
                    Some(next) => cursor = Some(next),
                    None => break,
                }
            }

            if depth >= MAX_FETCH_DEPTH {
                return Ok(all);
            }

            stream::iter(
                all.into_iter()
                    .map(|block| self.resolve_children(block, depth)),
            )
            .buffered(CHILD_FETCH_CONCURRENCY)
            .try_collect()
            .await
        })
    }

    async fn resolve_children(&self, block: Block, depth: usize) -> Result<Block, ClientError> {
        let mut full = match block {
            Block::Full(full) if full.has_children => full,
            other => return Ok(other),
        };
        if let Some(id) = full.id.clone() {
            full.children = self.fetch_children_at(&id, depth + 1).await?;
        }
        Ok(Block::Full(full))
    }

    /// Retrieve a single block (without children).
    pub async fn retrieve_block(&self, block_id: &str) -> Result<Block, ClientError> {
        validate_id(block_id)?;
        let url = self.endpoint(&["blocks", block_id])?;
        let response = self.request(Method::GET, url).send().await?;
        expect_json(response).await
    }

    /// Retrieve page metadata.
    pub async fn retrieve_page(&self, page_id: &str) -> Result<PageRef, ClientError> {
        validate_id(page_id)?;
        let url = self.endpoint(&["pages", page_id])?;
        let response = self.request(Method::GET, url).send().await?;
        expect_json(response).await
    }

    /// Append blocks to the end of a block's (or page's) children.
    pub async fn append_blocks(
        &self,
        block_id: &str,
        blocks: &[Block],
    ) -> Result<(), ClientError> {
        validate_id(block_id)?;
        let url = self.endpoint(&["blocks", block_id, "children"])?;
        debug!(block_id, count = blocks.len(), "appending blocks");
        let response = self
            .request(Method::PATCH, url)
            .json(&AppendChildren { children: blocks })
            .send()
            .await?;
        expect_ok(response).await
    }

    /// Overwrite a block's content in place. Children are untouched.
    pub async fn update_block(
        &self,
        block_id: &str,
        content: &BlockContent,
    ) -> Result<(), ClientError> {
        validate_id(block_id)?;
        let url = self.endpoint(&["blocks", block_id])?;
        debug!(block_id, "updating block");
        let response = self.request(Method::PATCH, url).json(content).send().await?;
        expect_ok(response).await
    }

    /// Delete a block (and, store-side, everything beneath it).
    pub async fn delete_block(&self, block_id: &str) -> Result<(), ClientError> {
        validate_id(block_id)?;
        let url = self.endpoint(&["blocks", block_id])?;
        debug!(block_id, "deleting block");
        let response = self.request(Method::DELETE, url).send().await?;
        expect_ok(response).await
    }

    /// Create a page under a parent page, returning the new page id.
    pub async fn create_page(
        &self,
        parent_id: &str,
        title: &str,
        blocks: &[Block],
    ) -> Result<String, ClientError> {
        validate_id(parent_id)?;
        if title.trim().is_empty() {
            return Err(ClientError::InvalidArgument("page title is empty".to_string()));
        }
        let url = self.endpoint(&["pages"])?;
        let body = CreatePageRequest {
            parent: ParentRef { page_id: parent_id },
            title: vec![RichTextRun::plain(title)],
            children: blocks,
        };
        let response = self.request(Method::POST, url).json(&body).send().await?;
        let created: CreatedObject = expect_json(response).await?;
        info!(page_id = %created.id, "created page");
        Ok(created.id)
    }

    /// Post a Markdown comment on a page or block, returning the comment id.
    ///
    /// Markdown that decodes to no runs (e.g. whitespace) falls back to one
    /// literal plain-text run, so a comment is always posted.
    pub async fn add_comment(&self, block_id: &str, markdown: &str) -> Result<String, ClientError> {
        validate_id(block_id)?;
        let mut rich_text = decode_rich_text(markdown);
        if rich_text.is_empty() {
            rich_text = vec![RichTextRun::plain(markdown)];
        }
        let url = self.endpoint(&["comments"])?;
        let body = CommentRequest {
            parent: ParentRef { page_id: block_id },
            rich_text,
        };
        let response = self.request(Method::POST, url).json(&body).send().await?;
        let created: CreatedObject = expect_json(response).await?;
        Ok(created.id)
    }

    fn request(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        self.http
            .request(method, url)
            .bearer_auth(&self.token)
            .header(VERSION_HEADER, self.api_version.as_str())
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidBaseUrl(self.base_url.to_string()))?
            .extend(segments);
        Ok(url)
    }
}

fn validate_id(id: &str) -> Result<(), ClientError> {
    if id.trim().is_empty() {
        return Err(ClientError::InvalidArgument("identifier is empty".to_string()));
    }
    Ok(())
}

async fn expect_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    Ok(checked(response).await?.json::<T>().await?)
}

async fn expect_ok(response: reqwest::Response) -> Result<(), ClientError> {
    checked(response).await.map(|_| ())
}

async fn checked(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let url = response.url().to_string();
    let message = response.text().await.unwrap_or_default();
    Err(ClientError::Api {
        status: status.as_u16(),
        url,
        message,
    })
}
