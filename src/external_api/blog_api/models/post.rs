use serde::{Deserialize, Deserializer, Serialize};

use super::category::Category;
use super::tag::Tag;

/// `null` reads the same as a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Post record as the server returns it
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category_id: Option<u32>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<Tag>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub published: bool,
    #[serde(default)]
    pub user_id: Option<u32>,
}

impl Post {
    /// The embedded category wins over the bare `categoryId`
    pub fn category_ref(&self) -> Option<u32> {
        self.category.as_ref().map(|category| category.id).or(self.category_id)
    }

    pub fn tag_ids(&self) -> Vec<u32> {
        self.tags.iter().map(|tag| tag.id).collect()
    }

    pub fn tag_names(&self) -> Vec<&str> {
        self.tags.iter().map(|tag| tag.name.as_str()).collect()
    }

    #[cfg(test)]
    pub fn new_test(id: u32, title: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            content: format!("Content of {}", title),
            image: None,
            category_id: None,
            category: None,
            tags: vec![],
            published: false,
            user_id: Some(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_post() {
        let json_str = r#"
        {
            "id": 4,
            "title": "Ownership",
            "content": "Borrowing rules",
            "image": "https://img.example.com/4.png",
            "categoryId": 2,
            "category": {"id": 2, "name": "Rust"},
            "tags": [{"id": 1, "name": "memory"}, {"id": 3, "name": "basics"}],
            "published": true,
            "userId": 1,
            "slug": "ownership"
        }
        "#;
        let post: Post = serde_json::from_str(json_str).unwrap();
        assert_eq!(post.id, 4);
        assert_eq!(post.image.as_deref(), Some("https://img.example.com/4.png"));
        assert_eq!(post.category_ref(), Some(2));
        assert_eq!(post.tag_ids(), vec![1, 3]);
        assert_eq!(post.tag_names(), vec!["memory", "basics"]);
        assert!(post.published);
        assert_eq!(post.user_id, Some(1));
    }

    #[test]
    fn test_parse_minimal_post() {
        let post: Post = serde_json::from_str(r#"{"id": 1, "title": "Bare", "category": null}"#).unwrap();
        assert_eq!(post.content, "");
        assert_eq!(post.image, None);
        assert_eq!(post.category_ref(), None);
        assert!(post.tags.is_empty());
        assert!(!post.published);
    }

    #[test]
    fn test_parse_null_fields() {
        let post: Post = serde_json::from_str(
            r#"{"id": 2, "title": null, "content": null, "tags": null, "published": null, "image": null}"#,
        )
        .unwrap();
        assert_eq!(post.title, "");
        assert_eq!(post.content, "");
        assert!(post.tags.is_empty());
        assert!(!post.published);
        assert_eq!(post.image, None);
    }

    #[test]
    fn test_category_ref_falls_back_to_category_id() {
        let post: Post = serde_json::from_str(r#"{"id": 1, "title": "t", "categoryId": 9}"#).unwrap();
        assert_eq!(post.category_ref(), Some(9));
    }
}
