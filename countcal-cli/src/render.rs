//! Terminal rendering for countcal views.
//!
//! Extension traits add colored output to countcal-core types using
//! owo_colors.

use anyhow::Result;
use chrono::{Datelike, NaiveDate, Weekday};
use countcal_core::counts::{CountDown, Counts};
use countcal_core::month::{DayDecoration, MonthGrid};
use countcal_core::session::Session;
use countcal_core::share::format_date;
use countcal_core::view::{EffectiveView, SettingsPanel};
use owo_colors::{OwoColorize, Style};

const PROGRESS_WIDTH: usize = 34;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Counts {
    fn render(&self) -> String {
        let mut lines = Vec::new();

        if let Some(up) = self.count_up {
            lines.push(format!(
                "{} {}  {}",
                self.count_up_label(),
                up.days.to_string().yellow().bold(),
                format!("({})", up.weeks_text()).dimmed()
            ));
        }

        match self.count_down {
            Some(CountDown::ThatsToday) => {
                lines.push("THAT'S TODAY".magenta().bold().to_string());
            }
            Some(down @ CountDown::Days(days)) => {
                let weeks = down.weeks_text().unwrap_or_default();
                lines.push(format!(
                    "{} {}  {}",
                    self.count_down_label(),
                    days.to_string().blue().bold(),
                    format!("({weeks})").dimmed()
                ));
            }
            None => {}
        }

        lines.join("\n")
    }
}

/// Elapsed share of the span as a bar, e.g. `█████░░░░░ 50%`.
pub fn render_progress(fraction: f64) -> String {
    let fraction = fraction.clamp(0.0, 1.0);
    let filled = (fraction * PROGRESS_WIDTH as f64).round() as usize;

    format!(
        "{}{} {:>3.0}%",
        "█".repeat(filled).yellow(),
        "░".repeat(PROGRESS_WIDTH - filled).blue(),
        fraction * 100.0
    )
}

/// Month grid rendering with countdown decorations.
pub trait CalendarRender {
    fn render(&self, view: &EffectiveView, selected: NaiveDate, today: NaiveDate) -> String;
}

impl CalendarRender for MonthGrid {
    fn render(&self, view: &EffectiveView, selected: NaiveDate, today: NaiveDate) -> String {
        let mut lines = Vec::new();

        lines.push(format!("      {:^27}", self.title()).bold().to_string());
        lines.push(format!(
            "      {}",
            self.weekday_headers()
                .iter()
                .map(|h| format!("{h:>3}"))
                .collect::<Vec<_>>()
                .join(" ")
                .dimmed()
        ));

        for week in self.weeks() {
            let decorations: Vec<DayDecoration> = week
                .iter()
                .map(|date| {
                    DayDecoration::for_date(*date, view.count_up_date, view.count_down_date, today)
                })
                .collect();

            // Week boundaries all fall on one weekday, so a row has at most one.
            let gutter = decorations
                .iter()
                .find_map(|d| d.week_number)
                .map(|n| format!("wk {n:<2}"))
                .unwrap_or_default();

            let cells: Vec<String> = week
                .iter()
                .zip(&decorations)
                .map(|(date, deco)| render_cell(self, *date, deco, selected))
                .collect();

            lines.push(format!("{:<6}{}", gutter.dimmed(), cells.join(" ")));
        }

        lines.push(legend());
        lines.join("\n")
    }
}

/// Day number plus a `!` on the count down date, styled by its decorations.
fn render_cell(grid: &MonthGrid, date: NaiveDate, deco: &DayDecoration, selected: NaiveDate) -> String {
    let marker = if deco.is_count_down { "!" } else { " " };
    let text = format!("{:>2}{}", date.day(), marker);

    let mut style = Style::new();
    if deco.in_elapsed {
        style = style.yellow();
    }
    if deco.in_remaining {
        style = style.blue();
    }
    if deco.week_number.is_some() {
        style = style.underline();
    }
    if deco.is_today {
        style = style.bold();
    }
    if date == selected {
        style = style.reversed();
    }
    if !grid.contains(date) {
        style = style.dimmed();
    }

    text.style(style).to_string()
}

fn legend() -> String {
    format!(
        "      {} {} {} {}",
        "counted".yellow(),
        "to go".blue(),
        "! target".dimmed(),
        "wk week".underline().dimmed()
    )
}

/// Settings panel. Editing hints depend on whether a link is being viewed.
fn render_settings(view: &EffectiveView, session: &Session<'_>) -> String {
    let mut lines = vec!["Settings".bold().to_string()];

    lines.push(format!("  Count down to:   {}", date_or_unset(view.count_down_date)));
    lines.push(format!("  Count up from:   {}", date_or_unset(view.count_up_date)));
    lines.push(format!(
        "  Title:           {}",
        view.title.as_deref().map_or_else(|| "(none)".dimmed().to_string(), str::to_string)
    ));
    lines.push(format!(
        "  Calendar:        {}",
        if view.show_calendar() { "shown" } else { "hidden" }
    ));

    if session.settings_editable() {
        lines.push(
            "  Change with: countcal set --count-down <date> --count-up <date> --title <text>"
                .dimmed()
                .to_string(),
        );
    } else {
        lines.push(
            "  Read-only while viewing a shared link. Claim it to make it yours."
                .yellow()
                .to_string(),
        );
    }

    lines.push(String::new());
    lines.push("  If you have a problem: countcal reset".dimmed().to_string());
    lines.join("\n")
}

fn date_or_unset(date: Option<NaiveDate>) -> String {
    date.map(format_date)
        .unwrap_or_else(|| "(not set)".dimmed().to_string())
}

/// The whole screen for one render pass.
pub fn render_page(
    session: &Session<'_>,
    selected: NaiveDate,
    today: NaiveDate,
    panel: SettingsPanel,
    week_start: Weekday,
) -> Result<String> {
    let view = session.effective()?;
    let counts = Counts::compute(&view, selected, today);
    let mut sections = Vec::new();

    if let Some(fraction) = counts.progress() {
        sections.push(render_progress(fraction));
    }

    if let Some(title) = &view.title {
        sections.push(title.bold().to_string());
    }

    if !counts.is_empty() {
        sections.push(counts.render());
    }

    if view.show_calendar() {
        let grid = MonthGrid::containing(selected, week_start);
        sections.push(grid.render(&view, selected, today));
    }

    if session.is_viewing_link() {
        let location = session.location();
        sections.push(format!(
            "{}\n  keep it:  countcal claim '{}'\n  leave it: countcal clear '{}'",
            "You are viewing a shared link.".cyan(),
            location,
            location
        ));
    }

    if panel.is_open(&view) {
        sections.push(render_settings(&view, session));
    }

    Ok(sections.join("\n\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use countcal_core::counts::CountUp;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn plain(s: &str) -> String {
        // Strip ANSI escape sequences.
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn counts_show_thats_today() {
        let counts = Counts {
            selected: date(2024, 6, 15),
            today: date(2024, 6, 15),
            count_up: Some(CountUp { days: 0 }),
            count_down: Some(CountDown::ThatsToday),
        };

        let text = plain(&counts.render());
        assert!(text.contains("It's day 0  (0 weeks 0 days)"));
        assert!(text.contains("THAT'S TODAY"));
        assert!(!text.contains("Days to go"));
    }

    #[test]
    fn counts_show_days_to_go() {
        let counts = Counts {
            selected: date(2024, 6, 1),
            today: date(2024, 6, 1),
            count_up: None,
            count_down: Some(CountDown::Days(14)),
        };

        assert_eq!(plain(&counts.render()), "Days to go 14  (2.0 weeks)");
    }

    #[test]
    fn progress_bar_fills_proportionally() {
        let text = plain(&render_progress(0.5));
        assert_eq!(text.matches('█').count(), PROGRESS_WIDTH / 2);
        assert!(text.ends_with(" 50%"));
    }

    #[test]
    fn calendar_labels_weeks_and_target() {
        let view = EffectiveView {
            count_up_date: Some(date(2024, 6, 3)),
            count_down_date: Some(date(2024, 6, 20)),
            ..EffectiveView::default()
        };
        let grid = MonthGrid::containing(date(2024, 6, 10), Weekday::Mon);

        let text = plain(&grid.render(&view, date(2024, 6, 10), date(2024, 6, 10)));

        assert!(text.contains("June 2024"));
        assert!(text.contains("wk 1"));
        assert!(text.contains("wk 3"));
        assert!(text.contains("20!"));
    }
}
