//! Shell command parsing.

use std::str::FromStr;

use thiserror::Error;

use crate::domain::entities::{DesignId, Tag};

/// Edits to the submission draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftCommand {
    Title(String),
    Image(String),
    AddTag(String),
    RemoveTag(String),
    Share(bool),
    Show,
    Discard,
}

/// Notification settings view and switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsCommand {
    Show,
    Push(bool),
    Email(bool),
}

/// Which inbox entries to mark read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadTarget {
    One(String),
    All,
}

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Search(String),
    Tag(Tag),
    Tags,
    Clear,
    Show(DesignId),
    Like(DesignId),
    Liked,
    Profile,
    Inbox,
    Read(ReadTarget),
    Draft(DraftCommand),
    Suggest(String),
    Submit,
    Settings(SettingsCommand),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0} (try `help`)")]
    Unknown(String),
    #[error("`{command}` needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("`{command}`: {reason}")]
    InvalidArgument {
        command: &'static str,
        reason: String,
    },
}

fn required<'a>(
    rest: &'a str,
    command: &'static str,
    argument: &'static str,
) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument { command, argument })
    } else {
        Ok(rest)
    }
}

fn parse_switch(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "yes" | "true" => Some(true),
        "off" | "no" | "false" => Some(false),
        _ => None,
    }
}

fn parse_draft(rest: &str) -> Result<DraftCommand, CommandError> {
    let (sub, arg) = split_word(rest);
    match sub {
        "" | "show" => Ok(DraftCommand::Show),
        "title" => Ok(DraftCommand::Title(
            required(arg, "draft title", "a title")?.to_string(),
        )),
        "image" => Ok(DraftCommand::Image(
            required(arg, "draft image", "an image path or URL")?.to_string(),
        )),
        "tag" => Ok(DraftCommand::AddTag(
            required(arg, "draft tag", "a tag")?.to_string(),
        )),
        "untag" => Ok(DraftCommand::RemoveTag(
            required(arg, "draft untag", "a tag")?.to_string(),
        )),
        "share" => {
            let value = required(arg, "draft share", "on or off")?;
            parse_switch(value)
                .map(DraftCommand::Share)
                .ok_or_else(|| CommandError::InvalidArgument {
                    command: "draft share",
                    reason: format!("expected on or off, got {value:?}"),
                })
        }
        "discard" => Ok(DraftCommand::Discard),
        other => Err(CommandError::Unknown(format!("draft {other}"))),
    }
}

fn parse_settings(rest: &str) -> Result<SettingsCommand, CommandError> {
    let (channel, arg) = split_word(rest);
    let channel = channel.to_ascii_lowercase();
    let (command, build): (&'static str, fn(bool) -> SettingsCommand) = match channel.as_str() {
        "" | "show" => return Ok(SettingsCommand::Show),
        "push" => ("settings push", SettingsCommand::Push),
        "email" => ("settings email", SettingsCommand::Email),
        _ => return Err(CommandError::Unknown(format!("settings {channel}"))),
    };
    let value = required(arg, command, "on or off")?;
    parse_switch(value)
        .map(build)
        .ok_or_else(|| CommandError::InvalidArgument {
            command,
            reason: format!("expected on or off, got {value:?}"),
        })
}

fn split_word(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((head, tail)) => (head, tail.trim()),
        None => (input, ""),
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Err(CommandError::Empty);
        }

        let (name, rest) = split_word(line);
        match name.to_ascii_lowercase().as_str() {
            "list" | "home" => Ok(Self::List),
            "search" | "find" => Ok(Self::Search(rest.to_string())),
            "tag" => {
                let raw = required(rest, "tag", "a tag name")?;
                Tag::parse(raw)
                    .map(Self::Tag)
                    .ok_or(CommandError::MissingArgument {
                        command: "tag",
                        argument: "a tag name",
                    })
            }
            "tags" => Ok(Self::Tags),
            "clear" => Ok(Self::Clear),
            "show" | "open" => Ok(Self::Show(DesignId::from(required(rest, "show", "a design id")?))),
            "like" | "unlike" => Ok(Self::Like(DesignId::from(required(rest, "like", "a design id")?))),
            "liked" => Ok(Self::Liked),
            "profile" => Ok(Self::Profile),
            "inbox" | "notifications" => Ok(Self::Inbox),
            "read" => {
                let target = required(rest, "read", "a notification id or `all`")?;
                if target.eq_ignore_ascii_case("all") {
                    Ok(Self::Read(ReadTarget::All))
                } else {
                    Ok(Self::Read(ReadTarget::One(target.to_string())))
                }
            }
            "draft" => parse_draft(rest).map(Self::Draft),
            "suggest" => Ok(Self::Suggest(rest.to_string())),
            "submit" => Ok(Self::Submit),
            "settings" => parse_settings(rest).map(Self::Settings),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            _ => Err(CommandError::Unknown(name.to_string())),
        }
    }
}

pub const HELP: &str = "\
Browse
  list                    all designs
  show <id>               design details
  like <id>               like or unlike a design
  liked                   designs you liked
Discover
  search [text]           filter by title or creator (no text clears it)
  tag <name>              select or deselect a tag
  tags                    popular tags
  clear                   reset search and tags
Submit
  draft [show]            current draft
  draft title <text>      set the title
  draft image <path|url>  set the artwork
  draft tag <name>        add a tag
  draft untag <name>      remove a tag
  draft share on|off      profit sharing
  draft discard           start over
  suggest <partial>       tag suggestions
  submit                  submit the draft for review
Account
  profile                 your profile
  inbox                   notifications
  read <id>|all           mark notifications read
  settings                notification settings
  settings push|email on|off
                          switch a notification channel
  quit";
