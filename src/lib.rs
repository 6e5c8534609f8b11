//! Keyword spotting over remotely transcribed audio.
//!
//! Audio bytes are sent to a remote speech-recognition API while the search
//! keyword is fanned out to a translation API across a fixed list of target
//! languages. The transcript is then searched for the first variant it
//! contains.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
