//! Effective view: a shared link's `Params` laid over the persisted `State`.

use chrono::NaiveDate;

use crate::state::{Display, Params, State};

/// What a single render shows. Recomputed every time, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectiveView {
    pub count_up_date: Option<NaiveDate>,
    pub count_down_date: Option<NaiveDate>,
    pub title: Option<String>,
    pub display_settings: Option<Display>,
}

impl EffectiveView {
    /// Each field comes from `params` when set there, otherwise from `state`.
    pub fn resolve(state: &State, params: Option<&Params>) -> Self {
        let params = params.cloned().unwrap_or_default();

        EffectiveView {
            count_up_date: params.count_up_date.or(state.count_up_date),
            count_down_date: params.count_down_date.or(state.count_down_date),
            title: params.title.or_else(|| state.title.clone()),
            display_settings: params.display_settings.or(state.display_settings),
        }
    }

    pub fn has_no_dates(&self) -> bool {
        self.count_up_date.is_none() && self.count_down_date.is_none()
    }

    pub fn display(&self) -> Display {
        self.display_settings.unwrap_or_default()
    }

    pub fn show_calendar(&self) -> bool {
        self.display().show_calendar()
    }

    /// Write all four fields into `state`, replacing what was there.
    pub fn apply_to(&self, state: &mut State) {
        state.count_up_date = self.count_up_date;
        state.count_down_date = self.count_down_date;
        state.title = self.title.clone();
        state.display_settings = self.display_settings;
    }
}

impl From<&State> for EffectiveView {
    fn from(state: &State) -> Self {
        EffectiveView::resolve(state, None)
    }
}

impl From<&EffectiveView> for Params {
    fn from(view: &EffectiveView) -> Self {
        Params {
            count_up_date: view.count_up_date,
            count_down_date: view.count_down_date,
            title: view.title.clone(),
            display_settings: view.display_settings,
        }
    }
}

/// Visibility of the settings panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettingsPanel {
    toggled: bool,
}

impl SettingsPanel {
    pub fn new(toggled: bool) -> Self {
        SettingsPanel { toggled }
    }

    pub fn toggle(&mut self) {
        self.toggled = !self.toggled;
    }

    /// With no dates configured there is nothing else to show, so the panel
    /// is open regardless of the toggle.
    pub fn is_open(&self, view: &EffectiveView) -> bool {
        self.toggled || view.has_no_dates()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn params_override_state_per_field() {
        let state = State {
            count_up_date: Some(date(2024, 1, 1)),
            count_down_date: Some(date(2024, 6, 15)),
            title: Some("Mine".into()),
            ..State::default()
        };
        let params = Params {
            count_up_date: Some(date(2024, 3, 1)),
            ..Params::default()
        };

        let view = EffectiveView::resolve(&state, Some(&params));

        assert_eq!(view.count_up_date, Some(date(2024, 3, 1)));
        assert_eq!(view.count_down_date, Some(date(2024, 6, 15)));
        assert_eq!(view.title.as_deref(), Some("Mine"));
        assert_eq!(view.display_settings, None);
    }

    #[test]
    fn without_params_view_mirrors_state() {
        let state = State {
            count_down_date: Some(date(2024, 6, 15)),
            display_settings: Some(Display { calendar: Some(false) }),
            ..State::default()
        };

        let view = EffectiveView::from(&state);

        assert_eq!(view.count_down_date, state.count_down_date);
        assert!(!view.show_calendar());
    }

    #[test]
    fn display_from_params_wins() {
        let state = State {
            display_settings: Some(Display { calendar: Some(false) }),
            ..State::default()
        };
        let params = Params {
            display_settings: Some(Display { calendar: Some(true) }),
            ..Params::default()
        };

        assert!(EffectiveView::resolve(&state, Some(&params)).show_calendar());
    }

    #[test]
    fn no_dates_forces_settings_open() {
        let view = EffectiveView {
            title: Some("Only a title".into()),
            ..EffectiveView::default()
        };
        assert!(view.has_no_dates());

        let mut panel = SettingsPanel::new(false);
        assert!(panel.is_open(&view));
        panel.toggle();
        assert!(panel.is_open(&view));
    }

    #[test]
    fn settings_follow_toggle_when_dates_exist() {
        let view = EffectiveView {
            count_up_date: Some(date(2024, 1, 1)),
            ..EffectiveView::default()
        };

        let mut panel = SettingsPanel::default();
        assert!(!panel.is_open(&view));
        panel.toggle();
        assert!(panel.is_open(&view));
    }

    #[test]
    fn apply_to_replaces_all_fields() {
        let mut state = State {
            title: Some("Old".into()),
            count_up_date: Some(date(2020, 1, 1)),
            ..State::default()
        };
        let view = EffectiveView {
            count_down_date: Some(date(2024, 6, 15)),
            ..EffectiveView::default()
        };

        view.apply_to(&mut state);

        assert_eq!(state.title, None);
        assert_eq!(state.count_up_date, None);
        assert_eq!(state.count_down_date, Some(date(2024, 6, 15)));
    }
}
