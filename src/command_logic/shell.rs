use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::config::Config;
use crate::constants::{Message, SHELL_HELP, SHELL_PROMPT};
use crate::external_api::blog_api::BlogApi;
use crate::external_api::ApiError;
use crate::post_list::{DraftField, PostList};

/// One line typed into the shell
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Show,
    Form,
    Next,
    Previous,
    Refresh,
    Field(DraftField),
    ToggleTag(u32),
    Edit(u32),
    Delete(u32),
    Submit,
    Help,
    Quit,
}

fn parse_id(command: &str, value: &str) -> Result<u32, ApiError> {
    match value.parse::<u32>() {
        Ok(0) => Err(ApiError::IdMoreThenZero),
        Ok(id) => Ok(id),
        Err(_) => Err(ApiError::InvalidArgument(command.to_string(), value.to_string())),
    }
}

fn parse_switch(command: &str, value: &str) -> Result<bool, ApiError> {
    match value.to_lowercase().as_str() {
        "on" | "yes" | "true" => Ok(true),
        "off" | "no" | "false" => Ok(false),
        _ => Err(ApiError::InvalidArgument(command.to_string(), value.to_string())),
    }
}

impl FromStr for ShellCommand {
    type Err = ApiError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (command, argument) = match line.split_once(char::is_whitespace) {
            Some((command, argument)) => (command, argument.trim()),
            None => (line, ""),
        };

        let shell_command = match command.to_lowercase().as_str() {
            "show" | "list" => ShellCommand::Show,
            "form" => ShellCommand::Form,
            "next" => ShellCommand::Next,
            "prev" | "previous" => ShellCommand::Previous,
            "refresh" => ShellCommand::Refresh,
            "title" => ShellCommand::Field(DraftField::Title(argument.to_string())),
            "content" => ShellCommand::Field(DraftField::Content(argument.to_string())),
            "image" => ShellCommand::Field(DraftField::Image(argument.to_string())),
            "category" => match argument {
                "" | "none" => ShellCommand::Field(DraftField::Category(None)),
                value => ShellCommand::Field(DraftField::Category(Some(parse_id(command, value)?))),
            },
            "publish" => ShellCommand::Field(DraftField::Published(parse_switch(command, argument)?)),
            "tag" => ShellCommand::ToggleTag(parse_id(command, argument)?),
            "edit" => ShellCommand::Edit(parse_id(command, argument)?),
            "delete" => ShellCommand::Delete(parse_id(command, argument)?),
            "submit" => ShellCommand::Submit,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            _ => return Err(ApiError::UnknownCommand(command.to_string())),
        };
        Ok(shell_command)
    }
}

/// Run one command against the view and return what to print
pub async fn execute(post_list: &mut PostList<'_>, command: ShellCommand) -> String {
    match command {
        ShellCommand::Show => post_list.render_list(),
        ShellCommand::Form => post_list.render_form(),
        ShellCommand::Next => {
            post_list.go_to_next_page().await;
            post_list.render_list()
        }
        ShellCommand::Previous => {
            post_list.go_to_previous_page().await;
            post_list.render_list()
        }
        ShellCommand::Refresh => {
            post_list.refresh().await;
            post_list.render_list()
        }
        ShellCommand::Field(field) => {
            post_list.handle_field(field);
            post_list.render_form()
        }
        ShellCommand::ToggleTag(tag_id) => {
            post_list.toggle_tag(tag_id);
            post_list.render_form()
        }
        ShellCommand::Edit(post_id) => {
            if post_list.start_editing(post_id) {
                post_list.render_form()
            } else {
                Message::NothingChanged.to_formatted_string()
            }
        }
        ShellCommand::Delete(post_id) => {
            let message = if post_list.remove_post(post_id).await {
                Message::PostDeleted(post_id)
            } else {
                Message::NothingChanged
            };
            format!("{}\n\n{}", message.to_formatted_string(), post_list.render_list())
        }
        ShellCommand::Submit => {
            let label = post_list.submit_label().to_string();
            let message = if post_list.submit().await {
                Message::PostSubmitted(label)
            } else {
                Message::NothingChanged
            };
            format!("{}\n\n{}", message.to_formatted_string(), post_list.render_list())
        }
        ShellCommand::Help => SHELL_HELP.to_string(),
        ShellCommand::Quit => String::new(),
    }
}

/// Interactive loop until `quit` or end of input
pub async fn run_shell<R, W>(
    blog_api: &BlogApi,
    config: &Config,
    page: u32,
    mut input: R,
    mut output: W,
) -> Result<(), ApiError>
where
    R: BufRead,
    W: Write,
{
    let mut post_list = PostList::new(blog_api, config.user_id).with_page(page);
    post_list.mount().await;
    writeln!(output, "{}", post_list.render())?;

    loop {
        output.write_all(SHELL_PROMPT.as_bytes())?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<ShellCommand>() {
            Ok(ShellCommand::Quit) => break,
            Ok(command) => {
                let rendered = execute(&mut post_list, command).await;
                writeln!(output, "{}", rendered)?;
            }
            Err(e) => writeln!(output, "{}", e)?,
        }
    }
    Ok(())
}
