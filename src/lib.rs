//! Admisión FCYT portal core - global search and deferred navigation.
//!
//! This library is the headless engine behind the portal's search box:
//! a containment index over the static content catalog, the
//! keyboard-driven selection state machine, and the pending-navigation
//! protocol that switches the active section and defers scroll/focus
//! until the section has rendered.

pub mod app;
pub mod catalog;
pub mod config;
pub mod dismissal;
pub mod error;
pub mod logging;
pub mod navigation;
pub mod search;
pub mod sections;
pub mod selection;
pub mod state;
