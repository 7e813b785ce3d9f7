//! Viewing, claiming and clearing share links against a real document.

use chrono::NaiveDate;
use countcal_core::counts::Counts;
use countcal_core::session::Session;
use countcal_core::store::{DocumentStore, FileStore};
use countcal_core::view::SettingsPanel;
use countcal_core::{CountError, State};
use url::Url;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn claim_makes_shared_view_native() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path()).unwrap();
    store
        .mutate(&mut |state| {
            state.count_up_date = Some(date(2023, 1, 1));
            state.count_down_date = Some(date(2024, 12, 25));
        })
        .unwrap();

    let link = Url::parse("https://countcal.app/?s=2024-01-01&t=Trip%20home&d=%7B%22c%22%3A%22f%22%7D")
        .unwrap();
    let selected = date(2024, 3, 1);

    let shared = Session::open(&store, link).unwrap();
    let shared_view = shared.effective().unwrap();
    let shared_counts = Counts::compute(&shared_view, selected, selected);
    assert_eq!(shared_view.count_down_date, Some(date(2024, 12, 25)));

    let bare = shared.claim().unwrap();
    assert_eq!(bare.as_str(), "https://countcal.app/");

    let native = Session::open(&store, bare).unwrap();
    assert!(!native.is_viewing_link());
    assert_eq!(native.effective().unwrap(), shared_view);
    assert_eq!(
        Counts::compute(&native.effective().unwrap(), selected, selected),
        shared_counts
    );
}

#[test]
fn invalid_link_is_rejected_before_touching_state() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path()).unwrap();

    let link = Url::parse("https://countcal.app/?s=2024-02-30").unwrap();
    assert!(matches!(
        Session::open(&store, link),
        Err(CountError::InvalidDate { key: 's', .. })
    ));
    assert_eq!(store.get().unwrap(), State::default());
}

#[test]
fn fresh_install_opens_settings() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path()).unwrap();
    let session = Session::open(&store, Url::parse("https://countcal.app/").unwrap()).unwrap();

    let view = session.effective().unwrap();
    assert!(SettingsPanel::default().is_open(&view));

    session.set_count_down_date(Some(date(2024, 6, 15))).unwrap();
    let view = session.effective().unwrap();
    assert!(!SettingsPanel::default().is_open(&view));
}
