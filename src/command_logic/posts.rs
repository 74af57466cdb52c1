use crate::cli_app::{CreateArgs, DeleteArgs, EditArgs};
use crate::config::Config;
use crate::constants::Message;
use crate::external_api::blog_api::BlogApi;
use crate::post_list::{DraftField, PostList};

fn with_status(succeeded: bool, message: Message, post_list: &PostList) -> String {
    let status = if succeeded { message } else { Message::NothingChanged };
    format!("{}\n\n{}", status.to_formatted_string(), post_list.render_list())
}

/// Show one page of posts
pub async fn list_posts(blog_api: &BlogApi, config: &Config, page: u32) -> String {
    let mut post_list = PostList::new(blog_api, config.user_id).with_page(page);
    post_list.mount().await;
    post_list.render_list()
}

/// Fill a fresh draft and submit it as a new post
pub async fn create_post(blog_api: &BlogApi, config: &Config, args: &CreateArgs) -> String {
    let mut post_list = PostList::new(blog_api, config.user_id);
    post_list.mount().await;

    post_list.handle_field(DraftField::Title(args.title.clone()));
    post_list.handle_field(DraftField::Content(args.content.clone()));
    if let Some(image) = &args.image {
        post_list.handle_field(DraftField::Image(image.clone()));
    }
    post_list.handle_field(DraftField::Category(args.category_id));
    for tag_id in &args.tags {
        post_list.toggle_tag(*tag_id);
    }
    post_list.handle_field(DraftField::Published(args.published));

    let label = post_list.submit_label().to_string();
    let submitted = post_list.submit().await;
    with_status(submitted, Message::PostSubmitted(label), &post_list)
}

/// Load the post into the draft, apply the overrides and submit the update
pub async fn edit_post(blog_api: &BlogApi, config: &Config, args: &EditArgs) -> String {
    let mut post_list = PostList::new(blog_api, config.user_id).with_page(args.page);
    post_list.mount().await;

    if !post_list.start_editing(args.post_id) {
        return with_status(false, Message::NothingChanged, &post_list);
    }
    if let Some(title) = &args.title {
        post_list.handle_field(DraftField::Title(title.clone()));
    }
    if let Some(content) = &args.content {
        post_list.handle_field(DraftField::Content(content.clone()));
    }
    if let Some(image) = &args.image {
        post_list.handle_field(DraftField::Image(image.clone()));
    }
    if args.category_id.is_some() {
        post_list.handle_field(DraftField::Category(args.category_id));
    }
    if !args.tags.is_empty() {
        post_list.handle_field(DraftField::Tags(args.tags.clone()));
    }
    if let Some(published) = args.published {
        post_list.handle_field(DraftField::Published(published));
    }

    let label = post_list.submit_label().to_string();
    let submitted = post_list.submit().await;
    with_status(submitted, Message::PostSubmitted(label), &post_list)
}

pub async fn delete_post(blog_api: &BlogApi, config: &Config, args: &DeleteArgs) -> String {
    let mut post_list = PostList::new(blog_api, config.user_id).with_page(args.page);
    post_list.mount().await;
    let deleted = post_list.remove_post(args.post_id).await;
    with_status(deleted, Message::PostDeleted(args.post_id), &post_list)
}
