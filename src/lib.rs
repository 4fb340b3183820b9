//! statushound - a Telegram bot that watches Yandex Practicum homework
//! review statuses.
//!
//! The bot polls the homework-status API on a fixed period, turns the most
//! recent status change into a human-readable message, and delivers it to a
//! Telegram chat. Operational failures are announced on the same chat, with
//! a repeat of the previous announcement suppressed; every failure is still
//! logged locally.
//!
//! # Modules
//!
//! - [`config`] - credentials loaded from the environment
//! - [`domain`] - status catalog, notification rendering, feed validation
//! - [`port`] - trait seams for the status API and the message channel
//! - [`adapter`] - reqwest API client and teloxide Telegram channel
//! - [`poller`] - the polling loop: cursor, error dedup, recovery policy
//! - [`cli`] - clap definitions and diagnostic subcommands
//! - [`error`] - error types for the crate

pub mod adapter;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod poller;
pub mod port;
