use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use crate::app::App;

/// Requested edits. The outer `Option` is "change this field", the inner
/// one is the new value (`None` clears it).
pub struct Changes {
    pub count_up: Option<Option<NaiveDate>>,
    pub count_down: Option<Option<NaiveDate>>,
    pub title: Option<Option<String>>,
    pub calendar: Option<bool>,
}

impl Changes {
    fn is_empty(&self) -> bool {
        self.count_up.is_none()
            && self.count_down.is_none()
            && self.title.is_none()
            && self.calendar.is_none()
    }
}

pub fn run(app: &App, changes: Changes) -> Result<()> {
    if changes.is_empty() {
        anyhow::bail!(
            "Nothing to change.\n\n\
            Example:\n  \
            countcal set --count-down 2025-12-25 --title \"Christmas\""
        );
    }

    let session = app.session(None)?;

    if let Some(date) = changes.count_up {
        session.set_count_up_date(date)?;
    }
    if let Some(date) = changes.count_down {
        session.set_count_down_date(date)?;
    }
    if let Some(title) = changes.title {
        session.set_title(title)?;
    }
    if let Some(show) = changes.calendar {
        session.set_show_calendar(show)?;
    }

    println!("{}", "  Saved".green());
    Ok(())
}
