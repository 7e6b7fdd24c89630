//! # Vantage Architecture
//!
//! Vantage is a **UI-agnostic result-view engine** for metadata-driven
//! collections: it turns administrator-authored configuration text and a raw
//! query string into a validated, internally consistent view model. It is a
//! library that happens to have a CLI client, not the other way around.
//!
//! ## Pipeline
//!
//! ```text
//! settings store ──▶ SearchOptions (config/)        query string ──▶ RequestParameters (request)
//!                        │                                               │
//!                        ▼                                               │
//!        ColumnRegistry / LayoutRegistry (registry/)                     │
//!                        │                                               │
//!                        ▼                                               ▼
//!            access filtering (access) ──────────▶ resolution (resolve) ──▶ ResolvedView (view)
//! ```
//!
//! Registries are rebuilt per request context from the current stored
//! configuration; the resolved view is immutable. Hosts that execute
//! requests concurrently each work on their own copies — nothing here is
//! shared mutable state.
//!
//! ## The recovery policy
//!
//! Nothing in this pipeline errors at a caller:
//! - malformed configuration records are skipped (logged, not fatal),
//! - out-of-domain request parameters become their documented defaults,
//! - blank first-run configuration is seeded with built-in defaults,
//! - zero results is a message for the end user, not a failure.
//!
//! `Result` shows up only at the genuinely fallible edges: settings-store
//! I/O and serialization.
//!
//! ## Module Overview
//!
//! - [`api`]: the `ViewEngine` facade — entry point for hosts
//! - [`config`]: parsed option texts and first-run defaults
//! - [`registry`]: column and layout registries
//! - [`access`]: authentication-based filtering of registries and rows
//! - [`request`]: immutable request parameters and query-string codec
//! - [`resolve`]: per-parameter resolution into a view model
//! - [`view`]: the resolved view model and rendering-facing helpers
//! - [`elements`]: element catalog seam to the item repository
//! - [`store`]: settings-store abstraction and implementations
//! - [`model`]: core value types
//! - [`error`]: error types

pub mod access;
pub mod api;
pub mod config;
pub mod elements;
pub mod error;
pub mod model;
pub mod registry;
pub mod request;
pub mod resolve;
pub mod store;
pub mod view;
