// SPDX-License-Identifier: MPL-2.0
//! `shot_lens` is a screenshot gallery with a full-window image viewer
//! overlay, built with the Iced GUI framework.
//!
//! The overlay core lives in [`viewer`] and is independent of any window:
//! a phase machine, swipe tracking, key mapping, navigation flags and a
//! fullscreen controller. [`app`] hosts it inside an Iced application that
//! scans a directory, loads images and applies the overlay's effects.

#![doc(html_root_url = "https://docs.rs/shot_lens/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
pub mod viewer;
