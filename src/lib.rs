//! Employee bonus and promotion tracker.
//!
//! Employees, their appreciation letters and penalties are kept in an
//! [`state::AppState`]; [`calculator`] derives when the next bonus and
//! promotion fall due. The binary serves all of it over HTTP.

pub mod api;
pub mod calculator;
pub mod config;
pub mod docs;
pub mod error;
pub mod model;
pub mod routes;
pub mod state;
pub mod store;
pub mod utils;
