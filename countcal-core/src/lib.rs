//! Core of countcal: the countup/countdown date model and its share links.
//!
//! - `state`: the persisted `State` and the link-borne `Params`
//! - `share`: `Params` <-> URL query string
//! - `view` and `session`: which values a render shows, and the Claim,
//!   Clear, Share and Redeem actions
//! - `counts` and `month`: day/week arithmetic and calendar decoration
//! - `store`: the `DocumentStore` interface and its implementations

pub mod config;
pub mod constants;
pub mod counts;
pub mod error;
pub mod month;
pub mod session;
pub mod share;
pub mod state;
pub mod store;
pub mod view;

pub use error::{CountError, CountResult};
pub use state::{Display, Params, State};
