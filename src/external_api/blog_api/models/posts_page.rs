use serde::{Deserialize, Serialize};

use super::post::Post;

/// One page of `GET /posts?page=N`
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PostsPage {
    pub data: Vec<Post>,
    pub total_pages: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_posts_page() {
        let json_str = r#"{"data": [{"id": 1, "title": "First"}], "totalPages": 3, "page": 1}"#;
        let page: PostsPage = serde_json::from_str(json_str).unwrap();
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].title, "First");
    }

    #[test]
    fn test_parse_posts_page_with_null_fields() {
        let json_str = r#"{"data": [
            {"id": 1, "title": "A", "content": "kept"},
            {"id": 2, "title": "B", "content": null},
            {"id": 3, "title": "C", "tags": null}
        ], "totalPages": 1}"#;
        let page: PostsPage = serde_json::from_str(json_str).unwrap();
        assert_eq!(page.data.iter().map(|post| post.id).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(page.data[0].content, "kept");
        assert_eq!(page.data[1].content, "");
        assert!(page.data[2].tags.is_empty());
    }

    #[test]
    fn test_parse_posts_page_without_total_pages() {
        let result = serde_json::from_str::<PostsPage>(r#"{"data": []}"#);
        assert!(result.is_err());
    }
}
