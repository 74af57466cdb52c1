pub mod cli_app;
pub mod command_logic;
pub mod config;
pub mod constants;
pub mod external_api;
pub mod logger;
pub mod post_list;

pub use config::Config;
pub use external_api::{blog_api::BlogApi, ApiError};
pub use post_list::{DraftField, Pagination, PostList};
