//! Month calendar grid and per-day decoration.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

use crate::counts::days_between;

/// Independent visual layers over one calendar cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayDecoration {
    /// The cell is the count down date.
    pub is_count_down: bool,
    /// 1-indexed week number when the cell starts a week since the count up date.
    pub week_number: Option<i64>,
    /// Within `[count_up, today]`.
    pub in_elapsed: bool,
    /// Within `[today, count_down]`.
    pub in_remaining: bool,
    pub is_today: bool,
}

impl DayDecoration {
    pub fn for_date(
        date: NaiveDate,
        count_up: Option<NaiveDate>,
        count_down: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Self {
        let week_number = count_up
            .map(|start| days_between(date, start))
            .filter(|days| *days >= 0 && days % 7 == 0)
            .map(|days| days / 7 + 1);

        DayDecoration {
            is_count_down: count_down == Some(date),
            week_number,
            in_elapsed: count_up.is_some_and(|start| start <= date && date <= today),
            in_remaining: count_down.is_some_and(|end| today <= date && date <= end),
            is_today: date == today,
        }
    }
}

/// The weeks covering one month, padded with days of the adjacent months.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    first: NaiveDate,
    week_start: Weekday,
}

impl MonthGrid {
    pub fn containing(date: NaiveDate, week_start: Weekday) -> Self {
        MonthGrid {
            first: date - Days::new(u64::from(date.day0())),
            week_start,
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn last_day(&self) -> NaiveDate {
        self.next().first - Days::new(1)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.first.year() && date.month() == self.first.month()
    }

    pub fn prev(&self) -> Self {
        MonthGrid {
            first: self.first - Months::new(1),
            ..*self
        }
    }

    pub fn next(&self) -> Self {
        MonthGrid {
            first: self.first + Months::new(1),
            ..*self
        }
    }

    /// e.g. "June 2024"
    pub fn title(&self) -> String {
        self.first.format("%B %Y").to_string()
    }

    /// Two-letter weekday names in grid column order.
    pub fn weekday_headers(&self) -> [&'static str; 7] {
        const NAMES: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];
        let offset = self.week_start.num_days_from_monday() as usize;
        std::array::from_fn(|i| NAMES[(offset + i) % 7])
    }

    /// Rows of seven dates, starting on `week_start`.
    pub fn weeks(&self) -> Vec<[NaiveDate; 7]> {
        let lead = (7 + self.first.weekday().num_days_from_monday()
            - self.week_start.num_days_from_monday())
            % 7;
        let last = self.last_day();

        let mut weeks = Vec::new();
        let mut row_start = self.first - Days::new(u64::from(lead));
        while row_start <= last {
            weeks.push(std::array::from_fn(|i| row_start + Days::new(i as u64)));
            row_start = row_start + Days::new(7);
        }
        weeks
    }
}
