pub mod category;
pub mod post;
pub mod post_draft;
pub mod posts_page;
pub mod tag;
