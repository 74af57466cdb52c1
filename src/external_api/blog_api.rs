pub mod models;

use super::{ApiError, BaseApiClient};
use crate::config::Config;
use models::category::Category;
use models::post::Post;
use models::post_draft::PostDraft;
use models::posts_page::PostsPage;
use models::tag::Tag;

/// Blog endpoints on top of the base client
pub struct BlogApi {
    pub client: BaseApiClient,
}

impl BlogApi {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let client = BaseApiClient::new(&config.base_api_url, config.request_timeout_secs)?;
        Ok(Self { client })
    }

    pub async fn get_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.client.get::<Vec<Category>>("/categories").await
    }

    pub async fn get_tags(&self) -> Result<Vec<Tag>, ApiError> {
        self.client.get::<Vec<Tag>>("/tags").await
    }

    pub async fn get_posts(&self, page: u32) -> Result<PostsPage, ApiError> {
        self.client.get::<PostsPage>(&format!("/posts?page={}", page)).await
    }

    /// The created record is not needed by the caller, so any JSON body is accepted
    pub async fn create_post(&self, draft: &PostDraft) -> Result<serde_json::Value, ApiError> {
        self.client
            .post_multipart::<serde_json::Value>("/posts", draft.to_multipart())
            .await
    }

    pub async fn update_post(&self, post_id: u32, draft: &PostDraft) -> Result<Post, ApiError> {
        self.client
            .put_json::<Post, PostDraft>(&format!("/posts/{}", post_id), draft)
            .await
    }

    pub async fn delete_post(&self, post_id: u32) -> Result<(), ApiError> {
        self.client.delete(&format!("/posts/{}", post_id)).await
    }
}

#[cfg(test)]
pub mod mocks {
    use super::*;
    use mockito::{Matcher, Mock, ServerGuard};

    impl BlogApi {
        pub fn mock(url: &str) -> Self {
            Self {
                client: BaseApiClient::new(url, 5).unwrap(),
            }
        }
    }

    pub fn test_categories() -> Vec<Category> {
        vec![
            Category { id: 1, name: "Rust".to_string() },
            Category { id: 2, name: "Tooling".to_string() },
        ]
    }

    pub fn test_tags() -> Vec<Tag> {
        vec![
            Tag { id: 1, name: "async".to_string() },
            Tag { id: 2, name: "cli".to_string() },
            Tag { id: 3, name: "serde".to_string() },
        ]
    }

    pub async fn mock_get_categories(server: &mut ServerGuard, categories: &[Category]) -> Mock {
        server
            .mock("GET", "/categories")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(categories).unwrap())
            .create_async()
            .await
    }

    pub async fn mock_get_tags(server: &mut ServerGuard, tags: &[Tag]) -> Mock {
        server
            .mock("GET", "/tags")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(tags).unwrap())
            .create_async()
            .await
    }

    /// `hits` is the exact number of requests the mock expects for that page
    pub async fn mock_get_posts(
        server: &mut ServerGuard,
        page: u32,
        posts_page: &PostsPage,
        hits: usize,
    ) -> Mock {
        server
            .mock("GET", "/posts")
            .match_query(Matcher::UrlEncoded("page".to_string(), page.to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(posts_page).unwrap())
            .expect(hits)
            .create_async()
            .await
    }

    pub async fn mock_failure(server: &mut ServerGuard, method: &str, path: &str) -> Mock {
        server
            .mock(method, path)
            .match_query(Matcher::Any)
            .with_status(500)
            .with_body("internal error")
            .create_async()
            .await
    }

    pub fn posts_page(ids: &[u32], total_pages: u32) -> PostsPage {
        PostsPage {
            data: ids
                .iter()
                .map(|id| Post::new_test(*id, &format!("Post {}", id)))
                .collect(),
            total_pages,
        }
    }
}
