//! Day and week counts for a selected date.
//!
//! Counting is zero-based on both sides: the count up date itself is day 0,
//! and the count down date itself is reported as `CountDown::ThatsToday`.

use chrono::NaiveDate;

use crate::view::EffectiveView;

/// Signed whole calendar days from `b` to `a`.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (a - b).num_days()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountUp {
    pub days: i64,
}

impl CountUp {
    /// `None` when there is no count up date or `selected` precedes it.
    pub fn compute(count_up_date: Option<NaiveDate>, selected: NaiveDate) -> Option<Self> {
        let days = days_between(selected, count_up_date?);
        (days >= 0).then_some(CountUp { days })
    }

    pub fn weeks(&self) -> i64 {
        self.days / 7
    }

    pub fn remainder_days(&self) -> i64 {
        self.days % 7
    }

    /// e.g. "2 weeks 3 days"
    pub fn weeks_text(&self) -> String {
        format!("{} weeks {} days", self.weeks(), self.remainder_days())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountDown {
    Days(i64),
    ThatsToday,
}

impl CountDown {
    /// `None` when there is no count down date or `selected` is past it.
    pub fn compute(count_down_date: Option<NaiveDate>, selected: NaiveDate) -> Option<Self> {
        match days_between(count_down_date?, selected) {
            0 => Some(CountDown::ThatsToday),
            days if days > 0 => Some(CountDown::Days(days)),
            _ => None,
        }
    }

    pub fn days(&self) -> i64 {
        match self {
            CountDown::Days(days) => *days,
            CountDown::ThatsToday => 0,
        }
    }

    /// e.g. "2.1 weeks"; `None` for `ThatsToday`.
    pub fn weeks_text(&self) -> Option<String> {
        match self {
            CountDown::Days(days) => Some(format!("{:.1} weeks", *days as f64 / 7.0)),
            CountDown::ThatsToday => None,
        }
    }
}

/// Share of the span between the two dates that has elapsed.
///
/// Only defined when both counts are shown and neither is zero.
pub fn progress(up: Option<CountUp>, down: Option<CountDown>) -> Option<f64> {
    let up = up?.days;
    let down = down?.days();
    if up == 0 || down == 0 {
        return None;
    }
    Some(up as f64 / (up + down) as f64)
}

/// Everything the headline of a render needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Counts {
    pub selected: NaiveDate,
    pub today: NaiveDate,
    pub count_up: Option<CountUp>,
    pub count_down: Option<CountDown>,
}

impl Counts {
    pub fn compute(view: &EffectiveView, selected: NaiveDate, today: NaiveDate) -> Self {
        Counts {
            selected,
            today,
            count_up: CountUp::compute(view.count_up_date, selected),
            count_down: CountDown::compute(view.count_down_date, selected),
        }
    }

    pub fn is_today_selected(&self) -> bool {
        self.selected == self.today
    }

    pub fn count_up_label(&self) -> &'static str {
        if self.is_today_selected() { "It's day" } else { "That's day" }
    }

    pub fn count_down_label(&self) -> &'static str {
        if self.is_today_selected() { "Days to go" } else { "Days from there" }
    }

    pub fn progress(&self) -> Option<f64> {
        progress(self.count_up, self.count_down)
    }

    pub fn is_empty(&self) -> bool {
        self.count_up.is_none() && self.count_down.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn count_up_is_inclusive_of_start_day() {
        let up = CountUp::compute(Some(date(2024, 1, 1)), date(2024, 1, 1)).unwrap();
        assert_eq!(up.days, 0);
        assert_eq!(up.weeks_text(), "0 weeks 0 days");
    }

    #[test]
    fn count_up_hidden_before_start() {
        assert_eq!(CountUp::compute(Some(date(2024, 1, 2)), date(2024, 1, 1)), None);
        assert_eq!(CountUp::compute(None, date(2024, 1, 1)), None);
    }

    #[test]
    fn count_up_weeks_and_days() {
        let up = CountUp::compute(Some(date(2024, 1, 1)), date(2024, 1, 18)).unwrap();
        assert_eq!(up.days, 17);
        assert_eq!(up.weeks(), 2);
        assert_eq!(up.remainder_days(), 3);
        assert_eq!(up.weeks_text(), "2 weeks 3 days");
    }

    #[test]
    fn count_up_across_leap_day() {
        let up = CountUp::compute(Some(date(2024, 2, 28)), date(2024, 3, 1)).unwrap();
        assert_eq!(up.days, 2);
    }

    #[test]
    fn count_down_same_day_is_thats_today() {
        let down = CountDown::compute(Some(date(2024, 6, 15)), date(2024, 6, 15));
        assert_eq!(down, Some(CountDown::ThatsToday));
        assert_eq!(down.unwrap().weeks_text(), None);
    }

    #[test]
    fn count_down_days() {
        let down = CountDown::compute(Some(date(2024, 6, 15)), date(2024, 6, 1)).unwrap();
        assert_eq!(down, CountDown::Days(14));
        assert_eq!(down.weeks_text().as_deref(), Some("2.0 weeks"));
    }

    #[test]
    fn count_down_hidden_after_target() {
        assert_eq!(CountDown::compute(Some(date(2024, 6, 15)), date(2024, 6, 16)), None);
        assert_eq!(CountDown::compute(None, date(2024, 6, 16)), None);
    }

    #[test]
    fn progress_needs_both_nonzero_counts() {
        let up = Some(CountUp { days: 30 });
        let down = Some(CountDown::Days(10));

        assert_eq!(progress(up, down), Some(0.75));
        assert_eq!(progress(up, None), None);
        assert_eq!(progress(None, down), None);
        assert_eq!(progress(Some(CountUp { days: 0 }), down), None);
        assert_eq!(progress(up, Some(CountDown::ThatsToday)), None);
    }

    #[test]
    fn labels_depend_on_selected_day() {
        let view = EffectiveView {
            count_up_date: Some(date(2024, 1, 1)),
            count_down_date: Some(date(2024, 12, 25)),
            ..EffectiveView::default()
        };

        let today = Counts::compute(&view, date(2024, 5, 1), date(2024, 5, 1));
        assert_eq!(today.count_up_label(), "It's day");
        assert_eq!(today.count_down_label(), "Days to go");

        let other = Counts::compute(&view, date(2024, 7, 1), date(2024, 5, 1));
        assert_eq!(other.count_up_label(), "That's day");
        assert_eq!(other.count_down_label(), "Days from there");
        assert!(other.progress().is_some());
    }

    #[test]
    fn dates_in_reverse_order_show_nothing() {
        let view = EffectiveView {
            count_up_date: Some(date(2024, 6, 1)),
            count_down_date: Some(date(2024, 1, 1)),
            ..EffectiveView::default()
        };

        let counts = Counts::compute(&view, date(2024, 3, 1), date(2024, 3, 1));
        assert!(counts.is_empty());
        assert_eq!(counts.progress(), None);
    }
}
