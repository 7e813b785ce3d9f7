//! Share-link codec.
//!
//! A share link is the app's base URL with up to four query keys:
//!
//! | key | field           | value                    |
//! |-----|-----------------|--------------------------|
//! | `s` | count up date   | `YYYY-MM-DD`             |
//! | `e` | count down date | `YYYY-MM-DD`             |
//! | `t` | title           | text                     |
//! | `d` | display         | JSON `{"c":"t"\|"f"}`    |
//!
//! Values are percent-encoded once, by the query serializer. A display
//! object with no flag set carries nothing and is treated as absent.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use url::{Url, form_urlencoded};

use crate::constants::{DATE_FORMAT, KEY_COUNT_DOWN, KEY_COUNT_UP, KEY_DISPLAY, KEY_TITLE};
use crate::error::{CountError, CountResult};
use crate::state::{Display, Params};

/// Single-character boolean used inside the `d` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum BoolString {
    #[serde(rename = "t")]
    True,
    #[serde(rename = "f")]
    False,
}

impl From<bool> for BoolString {
    fn from(value: bool) -> Self {
        if value { BoolString::True } else { BoolString::False }
    }
}

impl From<BoolString> for bool {
    fn from(value: BoolString) -> Self {
        value == BoolString::True
    }
}

/// Wire form of `Display` with abbreviated keys.
#[derive(Debug, Default, Serialize, Deserialize)]
struct DisplayParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    c: Option<BoolString>,
}

impl From<&Display> for DisplayParams {
    fn from(display: &Display) -> Self {
        DisplayParams {
            c: display.calendar.map(BoolString::from),
        }
    }
}

impl From<DisplayParams> for Display {
    fn from(params: DisplayParams) -> Self {
        Display {
            calendar: params.c.map(bool::from),
        }
    }
}

/// The base URL with query and fragment stripped.
pub fn bare(base: &Url) -> Url {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);
    url
}

/// Build an absolute share link for `params` on top of `base`.
///
/// Absent fields are omitted. A `Display` with nothing set is omitted too.
pub fn encode(params: &Params, base: &Url) -> Url {
    let mut pairs: Vec<(&str, String)> = Vec::new();

    if let Some(date) = params.count_up_date {
        pairs.push((KEY_COUNT_UP, format_date(date)));
    }
    if let Some(date) = params.count_down_date {
        pairs.push((KEY_COUNT_DOWN, format_date(date)));
    }
    if let Some(title) = params.title.as_deref().filter(|t| !t.is_empty()) {
        pairs.push((KEY_TITLE, title.to_string()));
    }
    if let Some(display) = params.display_settings.filter(|d| !d.is_unset()) {
        // Serializing a struct of optional enum fields cannot fail.
        if let Ok(json) = serde_json::to_string(&DisplayParams::from(&display)) {
            pairs.push((KEY_DISPLAY, json));
        }
    }

    let mut url = bare(base);
    if !pairs.is_empty() {
        url.query_pairs_mut().extend_pairs(pairs);
    }
    url
}

/// Decode a share link into `Params`.
///
/// `text` may be an absolute URL, a `?query` or a bare `k=v&...` query
/// string. Returns `Ok(None)` when none of the four keys carries a value.
/// A malformed date or display value fails the whole decode.
pub fn decode(text: &str) -> CountResult<Option<Params>> {
    let query = extract_query(text.trim())?;
    let pairs: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect();

    let params = Params {
        count_up_date: first(&pairs, KEY_COUNT_UP)
            .map(|v| parse_date(KEY_COUNT_UP, v))
            .transpose()?,
        count_down_date: first(&pairs, KEY_COUNT_DOWN)
            .map(|v| parse_date(KEY_COUNT_DOWN, v))
            .transpose()?,
        title: first(&pairs, KEY_TITLE).map(str::to_string),
        // `encode` never emits a display with nothing set, so `d={}` is absent.
        display_settings: first(&pairs, KEY_DISPLAY)
            .map(parse_display)
            .transpose()?
            .filter(|d| !d.is_unset()),
    };

    if params.is_empty() {
        tracing::debug!("no share params found");
        return Ok(None);
    }

    tracing::debug!(?params, "decoded share params");
    Ok(Some(params))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Query part of `text`, without the leading `?` or any fragment.
fn extract_query(text: &str) -> CountResult<String> {
    match Url::parse(text) {
        Ok(url) => Ok(url.query().unwrap_or_default().to_string()),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let query = text.split_once('?').map_or(text, |(_, q)| q);
            let query = query.split_once('#').map_or(query, |(q, _)| q);
            Ok(query.to_string())
        }
        Err(e) => Err(CountError::InvalidUrl(e.to_string())),
    }
}

/// First value for `key`; an empty value counts as absent.
fn first<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .filter(|v| !v.is_empty())
}

fn parse_date(key: &str, value: &str) -> CountResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| CountError::InvalidDate {
        key: key.chars().next().unwrap_or('?'),
        value: value.to_string(),
    })
}

fn parse_display(value: &str) -> CountResult<Display> {
    let params: DisplayParams =
        serde_json::from_str(value).map_err(|e| CountError::InvalidDisplay(e.to_string()))?;
    Ok(params.into())
}
