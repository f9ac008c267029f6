//! Landing page for Faria's Henna
//!
//! This crate provides a Dioxus desktop application that shows a timed
//! splash screen, then a single page of static sections: hero, about,
//! services, gallery and contact.

pub mod components;
pub mod config;
pub mod content;
pub mod motion;
pub mod state;
pub mod theme;
