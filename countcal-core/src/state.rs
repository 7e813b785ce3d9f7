//! The persisted countup/countdown record and its URL-borne override.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::STATE_VERSION;

fn current_version() -> u32 {
    STATE_VERSION
}

/// Display toggles shared by `State` and `Params`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Display {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar: Option<bool>,
}

impl Display {
    /// Whether the calendar grid is rendered. Defaults to true.
    pub fn show_calendar(&self) -> bool {
        self.calendar.unwrap_or(true)
    }

    /// True when no toggle has been set.
    pub fn is_unset(&self) -> bool {
        self.calendar.is_none()
    }
}

/// The one persisted document of an installation.
///
/// Every field is optional so documents written by older versions, which may
/// lack `title` or `displaySettings`, load as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    #[serde(default = "current_version")]
    pub version: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count_up_date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count_down_date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_settings: Option<Display>,
}

impl Default for State {
    fn default() -> Self {
        State {
            version: STATE_VERSION,
            count_up_date: None,
            count_down_date: None,
            title: None,
            display_settings: None,
        }
    }
}

/// A partial override of `State` decoded from a share link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pub count_up_date: Option<NaiveDate>,
    pub count_down_date: Option<NaiveDate>,
    pub title: Option<String>,
    pub display_settings: Option<Display>,
}

impl Params {
    pub fn is_empty(&self) -> bool {
        self.count_up_date.is_none()
            && self.count_down_date.is_none()
            && self.title.is_none()
            && self.display_settings.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_defaults_to_calendar_shown() {
        assert!(Display::default().show_calendar());
        assert!(!Display { calendar: Some(false) }.show_calendar());
    }

    #[test]
    fn state_loads_document_without_newer_fields() {
        let state: State = serde_json::from_str(r#"{"countUpDate":"2024-01-01"}"#).unwrap();

        assert_eq!(state.version, STATE_VERSION);
        assert_eq!(state.count_up_date, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(state.count_down_date, None);
        assert_eq!(state.title, None);
        assert_eq!(state.display_settings, None);
    }

    #[test]
    fn state_serializes_camel_case_and_skips_absent_fields() {
        let state = State {
            count_down_date: NaiveDate::from_ymd_opt(2024, 6, 15),
            display_settings: Some(Display { calendar: Some(false) }),
            ..State::default()
        };

        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(
            json,
            r#"{"version":1,"countDownDate":"2024-06-15","displaySettings":{"calendar":false}}"#
        );
    }

    #[test]
    fn empty_params() {
        assert!(Params::default().is_empty());
        let params = Params {
            title: Some("Trip".into()),
            ..Params::default()
        };
        assert!(!params.is_empty());
    }
}
