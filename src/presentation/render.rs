//! Plain-text rendering of catalog data.

use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::domain::entities::{
    ActivityNotification, CreatorProfile, DesignRecord, SubmissionDraft, Tag, TagSet,
};

const ROW_TAG_LIMIT: usize = 2;

fn heart(liked: bool) -> char {
    if liked { '♥' } else { '♡' }
}

/// One line per design: id, title, creator, likes and the first tags.
#[must_use]
pub fn design_row(design: &DesignRecord) -> String {
    let mut row = format!(
        "[{}] {} by {}  {} {}",
        design.id(),
        design.title(),
        design.creator(),
        heart(design.is_liked()),
        design.like_count()
    );

    let tags = design.tags();
    for tag in tags.iter().take(ROW_TAG_LIMIT) {
        let _ = write!(row, "  #{tag}");
    }
    if tags.len() > ROW_TAG_LIMIT {
        let _ = write!(row, "  +{}", tags.len() - ROW_TAG_LIMIT);
    }
    row
}

#[must_use]
pub fn design_list(designs: &[DesignRecord]) -> String {
    if designs.is_empty() {
        return "No designs found\nTry a different search term or tag".to_string();
    }
    designs
        .iter()
        .map(design_row)
        .collect::<Vec<_>>()
        .join("\n")
}

#[must_use]
pub fn design_detail(design: &DesignRecord) -> String {
    let mut out = format!("{}\nby {}\n", design.title(), design.creator());
    if let Some(created) = design.created() {
        let _ = writeln!(out, "created {created}");
    }
    if let Some(description) = design.description() {
        let _ = writeln!(out, "\n{description}\n");
    }
    let tags: Vec<String> = design.tags().iter().map(|t| format!("#{t}")).collect();
    if !tags.is_empty() {
        let _ = writeln!(out, "{}", tags.join(" "));
    }
    let _ = write!(
        out,
        "{} {} likes",
        heart(design.is_liked()),
        design.like_count()
    );
    if let Some(image) = design.image() {
        let _ = write!(out, "\nartwork: {image}");
    }
    if let Some(mockup) = design.mockup() {
        let _ = write!(out, "\nmockup: {mockup}");
    }
    out
}

/// Tag chips with the selected ones bracketed.
#[must_use]
pub fn tag_chips(popular: &[Tag], selected: &TagSet) -> String {
    popular
        .iter()
        .map(|tag| {
            if selected.contains(tag) {
                format!("[{tag}]")
            } else {
                tag.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

#[must_use]
pub fn notification_row(notification: &ActivityNotification, now: DateTime<Utc>) -> String {
    let marker = if notification.read { ' ' } else { '●' };
    format!(
        "{marker} ({}) {} [{}] {}\n    {}",
        notification.id,
        notification.title,
        notification.kind,
        notification.relative_label(now),
        notification.message
    )
}

#[must_use]
pub fn inbox(entries: &[ActivityNotification], unread: usize, now: DateTime<Utc>) -> String {
    if entries.is_empty() {
        return "No notifications yet".to_string();
    }
    let mut out = format!("Notifications ({unread} unread)");
    for entry in entries {
        let _ = write!(out, "\n{}", notification_row(entry, now));
    }
    out
}

#[must_use]
pub fn profile(profile: &CreatorProfile, designs: &[DesignRecord]) -> String {
    let stats = &profile.stats;
    let mut out = format!("{} {}\n", profile.name, profile.username);
    if !profile.bio.is_empty() {
        let _ = writeln!(out, "{}", profile.bio);
    }
    let _ = writeln!(
        out,
        "designs {}  likes {}  sales {}  earnings {}",
        stats.designs_count,
        stats.likes_count,
        stats.sales,
        stats.earnings_display()
    );
    let _ = write!(out, "{}", design_list(designs));
    out
}

#[must_use]
pub fn settings(push: bool, email: bool) -> String {
    let switch = |on: bool| if on { "on" } else { "off" };
    format!(
        "push notifications: {}\nemail notifications: {}",
        switch(push),
        switch(email)
    )
}

#[must_use]
pub fn draft(draft: &SubmissionDraft, max_tags: usize) -> String {
    let tags: Vec<&str> = draft.tags().iter().map(|t| t.as_str()).collect();
    format!(
        "title: {}\nimage: {}\ntags ({}/{max_tags}): {}\nshare profits: {}",
        if draft.title().is_empty() { "-" } else { draft.title() },
        draft.image().unwrap_or("-"),
        tags.len(),
        if tags.is_empty() { "-".to_string() } else { tags.join(", ") },
        if draft.share_profits() { "on" } else { "off" },
    )
}
