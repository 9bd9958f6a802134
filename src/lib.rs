//! Two one-shot developer utilities for the VoiceInput macOS app:
//!
//! * [`icon`] renders the gold-microphone `AppIcon.png` and its downscaled
//!   copies.
//! * [`split`] carves fixed line ranges of `SettingsView.swift` into
//!   separate view files and trims the original.
//!
//! Both are straight-line procedures; the binary in `main.rs` exposes them
//! as the `icon` and `split` subcommands.

pub mod logger;

pub mod cli;
pub mod color;
pub mod icon;
pub mod io;
pub mod ops;
pub mod split;
