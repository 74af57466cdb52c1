use tracing::{error, info, warn};

use super::PostList;
use crate::external_api::blog_api::models::post_draft::PostDraft;

/// One editable field of the draft
#[derive(Debug, Clone, PartialEq)]
pub enum DraftField {
    Title(String),
    Content(String),
    Image(String),
    Category(Option<u32>),
    Tags(Vec<u32>),
    Published(bool),
}

impl PostList<'_> {
    pub fn handle_field(&mut self, field: DraftField) {
        match field {
            DraftField::Title(title) => self.draft.title = title,
            DraftField::Content(content) => self.draft.content = content,
            DraftField::Image(image) => self.draft.image = image,
            DraftField::Category(category_id) => self.draft.category_id = category_id,
            DraftField::Tags(tags) => self.draft.tags = tags,
            DraftField::Published(published) => self.draft.published = published,
        }
    }

    pub fn toggle_tag(&mut self, tag_id: u32) {
        self.draft.toggle_tag(tag_id);
    }

    /// Load a displayed post into the draft and make it the edit target
    pub fn start_editing(&mut self, post_id: u32) -> bool {
        match self.posts.iter().find(|post| post.id == post_id) {
            Some(post) => {
                self.draft = PostDraft::from_post(post, self.user_id);
                self.editing = Some(post_id);
                true
            }
            None => {
                warn!(post_id, "post is not on the current page, nothing to edit");
                false
            }
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.editing.is_some() {
            "Update"
        } else {
            "Submit"
        }
    }

    /// Create or update from the draft, then reset the form and reload the page
    pub async fn submit(&mut self) -> bool {
        if !self.draft.is_complete() {
            warn!("title and content are required");
            return false;
        }

        match self.editing {
            Some(post_id) => match self.api.update_post(post_id, &self.draft).await {
                Ok(updated) => {
                    info!(post_id, "post updated");
                    if let Some(post) = self.posts.iter_mut().find(|post| post.id == updated.id) {
                        *post = updated;
                    }
                }
                Err(e) => {
                    error!("Error updating post {}: {}", post_id, e);
                    return false;
                }
            },
            None => match self.api.create_post(&self.draft).await {
                Ok(_) => info!(title = %self.draft.title, "post created"),
                Err(e) => {
                    error!("Error submitting form: {}", e);
                    return false;
                }
            },
        }

        self.reset_draft();
        self.refresh().await;
        true
    }
}
