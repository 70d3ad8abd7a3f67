//! Command shell standing in for the app's screens.

use std::sync::Arc;

use chrono::Utc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use crate::application::services::{ActivityInbox, CatalogStore, SearchSession};
use crate::application::use_cases::{LoadedCatalog, SubmitDesignUseCase};
use crate::domain::entities::{CreatorProfile, SubmissionDraft, Tag};
use crate::domain::search::TagSuggestionProvider;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::{FuzzyTagSuggester, LogNotificationService};
use crate::presentation::commands::{
    Command, CommandError, DraftCommand, HELP, ReadTarget, SettingsCommand,
};
use crate::presentation::render;

const PROMPT: &str = "mot> ";

/// Result of running one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellOutcome {
    /// Keep reading commands; print the text.
    Continue(String),
    /// Stop the shell.
    Exit,
}

/// Interactive front end over the shared catalog.
pub struct Shell {
    store: CatalogStore,
    session: SearchSession,
    inbox: ActivityInbox,
    profile: Option<CreatorProfile>,
    draft: SubmissionDraft,
    submit: SubmitDesignUseCase,
    suggester: Box<dyn TagSuggestionProvider>,
    notices: LogNotificationService,
    popular_tags: Vec<Tag>,
    max_tags: usize,
    email_enabled: bool,
}

/// Normalizes configured chip names, dropping blanks and repeats.
fn chip_tags(names: &[String]) -> Vec<Tag> {
    let mut chips: Vec<Tag> = Vec::with_capacity(names.len());
    for tag in names.iter().filter_map(|name| Tag::parse(name)) {
        if !chips.contains(&tag) {
            chips.push(tag);
        }
    }
    chips
}

impl Shell {
    #[must_use]
    pub fn new(loaded: LoadedCatalog, config: &AppConfig) -> Self {
        let notices = LogNotificationService::new(config.notifications.push_enabled);
        let submit = SubmitDesignUseCase::new(Arc::new(notices.clone()));

        Self {
            store: loaded.store,
            session: SearchSession::new(),
            inbox: loaded.inbox,
            profile: loaded.profile,
            draft: SubmissionDraft::new(),
            submit,
            suggester: Box::new(FuzzyTagSuggester::new(&config.submission.suggested_tags)),
            notices,
            popular_tags: chip_tags(&config.search.popular_tags),
            max_tags: config.submission.max_tags,
            email_enabled: config.notifications.email_enabled,
        }
    }

    /// Returns the shared catalog handle.
    #[must_use]
    pub const fn store(&self) -> &CatalogStore {
        &self.store
    }

    /// Parses and runs one input line.
    pub fn execute_line(&mut self, line: &str) -> ShellOutcome {
        match line.parse::<Command>() {
            Ok(command) => self.execute(command),
            Err(CommandError::Empty) => {
                ShellOutcome::Continue(String::new())
            }
            Err(e) => ShellOutcome::Continue(format!("error: {e}")),
        }
    }

    /// Runs one command.
    pub fn execute(&mut self, command: Command) -> ShellOutcome {
        debug!(?command, "Executing command");

        let text = match command {
            Command::Quit => return ShellOutcome::Exit,
            Command::Help => HELP.to_string(),
            Command::List => render::design_list(&self.store.snapshot()),
            Command::Search(text) => {
                self.session.set_query(text);
                self.search_results()
            }
            Command::Tag(tag) => {
                self.session.toggle_tag(tag);
                self.search_results()
            }
            Command::Tags => render::tag_chips(&self.popular_tags, self.session.selected_tags()),
            Command::Clear => {
                self.session.clear();
                self.search_results()
            }
            Command::Show(id) => match self.store.get(&id) {
                Some(design) => render::design_detail(&design),
                None => format!("Design not found: {id}"),
            },
            Command::Like(id) => match self.store.toggle_like(&id) {
                Ok(design) => render::design_row(&design),
                Err(e) => format!("error: {e}"),
            },
            Command::Liked => render::design_list(&self.store.liked()),
            Command::Profile => self.render_profile(),
            Command::Inbox => {
                render::inbox(self.inbox.entries(), self.inbox.unread_count(), Utc::now())
            }
            Command::Read(target) => self.read(target),
            Command::Draft(edit) => self.edit_draft(edit),
            Command::Suggest(partial) => self.suggest(&partial),
            Command::Submit => self.submit_draft(),
            Command::Settings(change) => self.settings(change),
        };

        ShellOutcome::Continue(text)
    }

    fn settings(&mut self, change: SettingsCommand) -> String {
        match change {
            SettingsCommand::Show => {}
            SettingsCommand::Push(on) => self.notices.set_enabled(on),
            SettingsCommand::Email(on) => {
                self.email_enabled = on;
                info!(enabled = on, "Email notifications toggled");
            }
        }
        render::settings(self.notices.is_enabled(), self.email_enabled)
    }

    fn search_results(&self) -> String {
        let results = self.session.results(&self.store);
        let mut header = format!("{} result(s)", results.len());
        if !self.session.query_text().is_empty() {
            header.push_str(&format!(" for {:?}", self.session.query_text()));
        }
        if !self.session.selected_tags().is_empty() {
            let tags: Vec<&str> = self
                .session
                .selected_tags()
                .iter()
                .map(|t| t.as_str())
                .collect();
            header.push_str(&format!(" tagged {}", tags.join(", ")));
        }
        format!("{header}\n{}", render::design_list(&results))
    }

    fn render_profile(&self) -> String {
        let Some(profile) = &self.profile else {
            return "No profile in this catalog".to_string();
        };
        let designs = self.store.get_many(&profile.design_ids);
        render::profile(profile, &designs)
    }

    fn read(&mut self, target: ReadTarget) -> String {
        match target {
            ReadTarget::All => {
                let changed = self.inbox.mark_all_read();
                format!("Marked {changed} notification(s) read")
            }
            ReadTarget::One(id) => {
                let Some(design_id) = self.inbox.get(&id).map(|n| n.design_id.clone()) else {
                    return format!("Notification not found: {id}");
                };
                self.inbox.mark_read(&id);
                match design_id.and_then(|d| self.store.get(&d)) {
                    Some(design) => render::design_detail(&design),
                    None => format!("Notification {id} read"),
                }
            }
        }
    }

    fn edit_draft(&mut self, edit: DraftCommand) -> String {
        match edit {
            DraftCommand::Title(title) => self.draft.set_title(title),
            DraftCommand::Image(image) => self.draft.set_image(image),
            DraftCommand::AddTag(raw) => {
                if let Err(e) = self.draft.add_tag(&raw, self.max_tags) {
                    return format!("{}: {e}", e.title());
                }
            }
            DraftCommand::RemoveTag(raw) => {
                if !self.draft.remove_tag(&raw) {
                    return format!("Tag not on draft: {}", raw.trim());
                }
            }
            DraftCommand::Share(share) => self.draft.set_share_profits(share),
            DraftCommand::Discard => self.draft = SubmissionDraft::new(),
            DraftCommand::Show => {}
        }
        render::draft(&self.draft, self.max_tags)
    }

    fn suggest(&self, partial: &str) -> String {
        let suggestions: Vec<String> = self
            .suggester
            .suggest(partial)
            .into_iter()
            .filter(|s| !self.draft.tags().contains(&s.tag))
            .map(|s| s.tag.to_string())
            .collect();

        if suggestions.is_empty() {
            "No suggestions".to_string()
        } else {
            suggestions.join("  ")
        }
    }

    fn submit_draft(&mut self) -> String {
        match self.submit.execute(&self.draft) {
            Ok(receipt) => {
                self.draft = SubmissionDraft::new();
                let mut out = format!("Submission {} ({})", receipt.id, receipt.status);
                for notice in self.notices.drain() {
                    out.push_str(&format!("\n{}\n{}", notice.title, notice.body));
                }
                out
            }
            Err(e) => format!("{}: {e}", e.title()),
        }
    }

    /// Runs the given lines in order, stopping early on `quit`.
    pub fn run_script<I, S>(&mut self, lines: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut outputs = Vec::new();
        for line in lines {
            match self.execute_line(line.as_ref()) {
                ShellOutcome::Continue(text) => outputs.push(text),
                ShellOutcome::Exit => break,
            }
        }
        outputs
    }

    /// Reads commands line by line until end of input or `quit`.
    ///
    /// # Errors
    /// Returns an I/O error if reading input or writing output fails.
    pub async fn run<R, W>(&mut self, mut input: R, mut output: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!(designs = self.store.len(), "Shell started");
        output
            .write_all(b"MOT Creators. Type `help` for commands.\n")
            .await?;

        let mut buf = Vec::new();
        loop {
            output.write_all(PROMPT.as_bytes()).await?;
            output.flush().await?;

            buf.clear();
            if input.read_until(b'\n', &mut buf).await? == 0 {
                debug!("Input closed");
                break;
            }

            let Ok(line) = std::str::from_utf8(&buf) else {
                warn!(bytes = buf.len(), "Skipping input line that is not UTF-8");
                output
                    .write_all(b"error: input line is not valid UTF-8\n")
                    .await?;
                continue;
            };
            let line = line.trim_end_matches(['\n', '\r']).to_string();

            match self.execute_line(&line) {
                ShellOutcome::Continue(text) if text.is_empty() => {}
                ShellOutcome::Continue(text) => {
                    output.write_all(text.as_bytes()).await?;
                    output.write_all(b"\n").await?;
                }
                ShellOutcome::Exit => break,
            }
        }

        if !self.draft.title().is_empty() || !self.draft.tags().is_empty() {
            warn!("Exiting with an unsubmitted draft");
        }
        output.flush().await?;
        Ok(())
    }
}
