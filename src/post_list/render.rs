use std::fmt::Write;

use super::PostList;
use crate::constants::Message;
use crate::external_api::blog_api::models::post::Post;

/// State of the previous/next controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub previous_disabled: bool,
    pub next_disabled: bool,
}

impl Pagination {
    pub fn new(current_page: u32, total_pages: u32) -> Self {
        Self {
            current_page,
            total_pages,
            previous_disabled: current_page <= 1,
            next_disabled: current_page >= total_pages,
        }
    }

    pub fn render(&self) -> String {
        format!(
            "{}  {}  {}",
            button("< Previous", self.previous_disabled),
            Message::PageOf(self.current_page, self.total_pages).to_formatted_string(),
            button("Next >", self.next_disabled)
        )
    }
}

/// Disabled controls are greyed out with parentheses
fn button(label: &str, disabled: bool) -> String {
    if disabled {
        format!("({})", label)
    } else {
        format!("[{}]", label)
    }
}

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Empty values leave no trailing space
fn field_line(out: &mut String, label: &str, value: &str) {
    if value.is_empty() {
        let _ = writeln!(out, "{}:", label);
    } else {
        let _ = writeln!(out, "{}: {}", label, value);
    }
}

fn render_post(post: &Post) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "#{} {}", post.id, post.title);
    field_line(&mut out, "  Content", &post.content);
    field_line(&mut out, "  Tags", &post.tag_names().join(", "));
    let _ = writeln!(out, "  Image: {}", post.image.as_deref().unwrap_or("-"));
    let category = post
        .category
        .as_ref()
        .map(|category| category.name.as_str())
        .unwrap_or("-");
    let _ = writeln!(out, "  Category: {}", category);
    let _ = write!(out, "  [edit {}] [delete {}]", post.id, post.id);
    out
}

impl PostList<'_> {
    pub fn render_form(&self) -> String {
        let draft = self.draft();
        let mut out = String::new();
        field_line(&mut out, "Title*", &draft.title);
        field_line(&mut out, "Content*", &draft.content);
        field_line(&mut out, "Image", &draft.image);

        let _ = writeln!(out, "Category:");
        for category in self.categories() {
            let selected = draft.category_id == Some(category.id);
            let _ = writeln!(out, "  {} {} {}", checkbox(selected), category.id, category.name);
        }

        let _ = writeln!(out, "Tags:");
        for tag in self.tags() {
            let checked = draft.tags.contains(&tag.id);
            let _ = writeln!(out, "  {} {} {}", checkbox(checked), tag.id, tag.name);
        }

        let _ = writeln!(out, "Published: {}", checkbox(draft.published));
        let _ = write!(out, "[{}]", self.submit_label());
        out
    }

    /// Posts and the pagination line; both are hidden on an empty page
    pub fn render_list(&self) -> String {
        if self.posts().is_empty() {
            return Message::NoPosts.to_formatted_string();
        }
        let mut sections: Vec<String> = self.posts().iter().map(render_post).collect();
        sections.push(self.pagination().render());
        sections.join("\n\n")
    }

    pub fn render(&self) -> String {
        format!("{}\n\n{}", self.render_form(), self.render_list())
    }
}
