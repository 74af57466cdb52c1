//! Single-page post manager: reference data, one page of posts and the draft form.
//!
//! Every network failure is logged and leaves the state as it was. Operations
//! return `true` when their request went through so the CLI can word its
//! output; the view itself never looks at that flag.

pub mod form;
pub mod render;

use tracing::{debug, error, warn};

use crate::external_api::blog_api::models::category::Category;
use crate::external_api::blog_api::models::post::Post;
use crate::external_api::blog_api::models::post_draft::PostDraft;
use crate::external_api::blog_api::models::tag::Tag;
use crate::external_api::blog_api::BlogApi;

pub use form::DraftField;
pub use render::Pagination;

pub struct PostList<'a> {
    api: &'a BlogApi,
    user_id: u32,
    draft: PostDraft,
    posts: Vec<Post>,
    editing: Option<u32>,
    categories: Vec<Category>,
    tags: Vec<Tag>,
    current_page: u32,
    total_pages: u32,
}

impl<'a> PostList<'a> {
    pub fn new(api: &'a BlogApi, user_id: u32) -> Self {
        Self {
            api,
            user_id,
            draft: PostDraft::empty(user_id),
            posts: Vec::new(),
            editing: None,
            categories: Vec::new(),
            tags: Vec::new(),
            current_page: 1,
            total_pages: 1,
        }
    }

    /// Start on another page; nothing is fetched until `mount`
    pub fn with_page(mut self, page: u32) -> Self {
        self.current_page = page.max(1);
        self
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn draft(&self) -> &PostDraft {
        &self.draft
    }

    pub fn editing(&self) -> Option<u32> {
        self.editing
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Reference data once, then the current page
    pub async fn mount(&mut self) -> bool {
        let categories = self.fetch_categories().await;
        let tags = self.fetch_tags().await;
        let posts = self.fetch_posts(self.current_page).await;
        categories && tags && posts
    }

    pub async fn fetch_categories(&mut self) -> bool {
        match self.api.get_categories().await {
            Ok(categories) => {
                debug!(count = categories.len(), "categories loaded");
                self.categories = categories;
                true
            }
            Err(e) => {
                error!("Error fetching categories: {}", e);
                false
            }
        }
    }

    pub async fn fetch_tags(&mut self) -> bool {
        match self.api.get_tags().await {
            Ok(tags) => {
                debug!(count = tags.len(), "tags loaded");
                self.tags = tags;
                true
            }
            Err(e) => {
                error!("Error fetching tags: {}", e);
                false
            }
        }
    }

    /// The page number is ours, only the posts and the page count come from the server
    pub async fn fetch_posts(&mut self, page: u32) -> bool {
        match self.api.get_posts(page).await {
            Ok(posts_page) => {
                debug!(page, count = posts_page.data.len(), total_pages = posts_page.total_pages, "posts loaded");
                self.posts = posts_page.data;
                self.total_pages = posts_page.total_pages;
                true
            }
            Err(e) => {
                error!("Error fetching posts: {}", e);
                false
            }
        }
    }

    pub async fn refresh(&mut self) -> bool {
        self.fetch_posts(self.current_page).await
    }

    pub async fn remove_post(&mut self, post_id: u32) -> bool {
        match self.api.delete_post(post_id).await {
            Ok(()) => {
                self.posts.retain(|post| post.id != post_id);
                if self.editing == Some(post_id) {
                    debug!(post_id, "deleted post was being edited");
                    self.reset_draft();
                }
                true
            }
            Err(e) => {
                error!("Error deleting post {}: {}", post_id, e);
                false
            }
        }
    }

    fn reset_draft(&mut self) {
        self.draft = PostDraft::empty(self.user_id);
        self.editing = None;
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.current_page, self.total_pages)
    }

    pub async fn go_to_next_page(&mut self) -> bool {
        if self.pagination().next_disabled {
            warn!(page = self.current_page, "already on the last page");
            return false;
        }
        self.current_page += 1;
        self.fetch_posts(self.current_page).await
    }

    pub async fn go_to_previous_page(&mut self) -> bool {
        if self.pagination().previous_disabled {
            warn!(page = self.current_page, "already on the first page");
            return false;
        }
        self.current_page -= 1;
        self.fetch_posts(self.current_page).await
    }
}
