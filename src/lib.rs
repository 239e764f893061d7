//! Darkup Library
//!
//! Theme preference management: a catalog of built-in color palettes,
//! user-defined custom palettes, one persisted active selection, and CSS
//! generation for the resolved theme. All state lives behind the
//! [`storage::OptionStore`] trait.

// Module declarations
pub mod branding;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod css;
pub mod error;
pub mod handlers;
pub mod models;
pub mod render;
pub mod services;
pub mod storage;
#[cfg(feature = "web")]
pub mod web;
