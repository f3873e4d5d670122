//! Content server for "The Chronicles of Max" — scan directories of comics,
//! stories, and artwork, recover metadata from filenames and document bodies,
//! and serve the result over a small JSON API.

pub mod cache;
pub mod cli;
pub mod config;
pub mod content;
pub mod http;
