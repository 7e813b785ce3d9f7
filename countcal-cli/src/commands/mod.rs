pub mod claim;
pub mod clear;
pub mod config;
pub mod redeem;
pub mod reset;
pub mod set;
pub mod share;
pub mod show;
pub mod watch;
