//! Units GUI Library
//!
//! This crate provides the application logic for Units-GUI, a desktop tracker
//! for real-estate units backed by a local SQLite file.

rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
pub mod assets;
pub mod constants;
pub mod domain;
pub mod error;
pub mod helpers;
pub mod services;
pub mod states;
pub mod views;
