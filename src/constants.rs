pub const CONFIG_DIR: &str = ".config/postboard";
pub const CONFIG_FILE: &str = "config.json";
pub const BASE_API_URL_ENV: &str = "POSTBOARD_BASE_API_URL";
pub const ENTER_BASE_API_URL: &str = "Enter the url of the blog API: ";
pub const ENTER_USER_ID: &str = "Enter your user id [1]: ";
pub const COMPLETE_SETUP: &str = "To view the available commands, type: postboard --help";
pub const SHELL_PROMPT: &str = "postboard> ";
pub const SHELL_HELP: &str = "Commands:
  show                 print the post list
  form                 print the draft form
  next | prev          change page
  refresh              reload the current page
  title <text>         set the draft title
  content <text>       set the draft content
  image <url>          set the draft image
  category <id|none>   set the draft category
  tag <id>             toggle a tag on the draft
  publish <on|off>     set the publish flag
  edit <id>            load a post into the draft
  delete <id>          delete a post
  submit               create or update from the draft
  help                 show this message
  quit | exit          leave the shell";

/// Standard message
#[derive(Debug)]
pub enum Message {
    PageOf(u32, u32),
    NoPosts,
    ConfigSaved(String),
    PostSubmitted(String),
    PostDeleted(u32),
    NothingChanged,
}

impl Message {
    pub fn to_formatted_string(&self) -> String {
        match self {
            Message::PageOf(current_page, total_pages) => {
                format!("Page {} of {}", current_page, total_pages)
            }
            Message::NoPosts => "No posts on this page".to_string(),
            Message::ConfigSaved(path) => format!("Config saved to {}", path),
            Message::PostSubmitted(action) => format!("{} done", action),
            Message::PostDeleted(post_id) => format!("Post {} deleted", post_id),
            Message::NothingChanged => "Nothing changed, see the log for details".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 1, "Page 1 of 1")]
    #[case(2, 7, "Page 2 of 7")]
    #[case(1, 0, "Page 1 of 0")]
    fn test_page_of(#[case] current: u32, #[case] total: u32, #[case] expected: &str) {
        assert_eq!(Message::PageOf(current, total).to_formatted_string(), expected);
    }

    #[rstest]
    #[case("Submit", "Submit done")]
    #[case("Update", "Update done")]
    fn test_post_submitted(#[case] action: &str, #[case] expected: &str) {
        assert_eq!(
            Message::PostSubmitted(action.to_string()).to_formatted_string(),
            expected
        );
    }

    #[test]
    fn test_post_deleted() {
        assert_eq!(Message::PostDeleted(12).to_formatted_string(), "Post 12 deleted");
    }

    #[test]
    fn test_config_saved() {
        assert_eq!(
            Message::ConfigSaved("/tmp/config.json".to_string()).to_formatted_string(),
            "Config saved to /tmp/config.json"
        );
    }
}
