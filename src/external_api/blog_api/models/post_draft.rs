use reqwest::multipart::Form;
use serde::Serialize;

use super::post::Post;

/// Editable copy of a post, sent as the create/update body
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub image: String,
    pub category_id: Option<u32>,
    pub tags: Vec<u32>,
    pub published: bool,
    pub user_id: u32,
}

impl PostDraft {
    pub fn empty(user_id: u32) -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            image: String::new(),
            category_id: None,
            tags: Vec::new(),
            published: false,
            user_id,
        }
    }

    /// Working copy of a post's editable fields; the owner is kept when the server reports one
    pub fn from_post(post: &Post, user_id: u32) -> Self {
        Self {
            title: post.title.clone(),
            content: post.content.clone(),
            image: post.image.clone().unwrap_or_default(),
            category_id: post.category_ref(),
            tags: post.tag_ids(),
            published: post.published,
            user_id: post.user_id.unwrap_or(user_id),
        }
    }

    /// Title and content are required
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.content.trim().is_empty()
    }

    pub fn toggle_tag(&mut self, tag_id: u32) {
        if self.tags.contains(&tag_id) {
            self.tags.retain(|id| *id != tag_id);
        } else {
            self.tags.push(tag_id);
        }
    }

    /// `multipart/form-data` body for `POST /posts`
    pub fn to_multipart(&self) -> Form {
        let mut form = Form::new()
            .text("title", self.title.clone())
            .text("content", self.content.clone())
            .text("image", self.image.clone());
        if let Some(category_id) = self.category_id {
            form = form.text("categoryId", category_id.to_string());
        }
        for tag_id in &self.tags {
            form = form.text("tags[]", tag_id.to_string());
        }
        form.text("published", self.published.to_string())
            .text("userId", self.user_id.to_string())
    }
}
