//! # Core Application Logic
//!
//! This module contains Siraj's business logic.
//! It knows nothing about how the screens are drawn.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • UiState (snapshot)   │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • QuranStore (owner)   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │  screens   │      │   remote   │      │   cache    │
//!     │  (text)    │      │ (reqwest)  │      │  (JSON)    │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`model`]: display records (`QuranVerse`, `Verset`)
//! - [`adapter`]: wire records → display records
//! - [`state`]: `UiState`, the snapshot the screens render
//! - [`action`]: `Action` and the pure `update()` reducer
//! - [`store`]: `QuranStore`, runs fetches and publishes snapshots
//! - [`cache`]: the on-disk snapshot
//! - [`fallback`]: content bundled into the binary
//! - [`prayer`], [`reminders`]: prayer times and dhikr counters
//! - [`config`]: layered settings

pub mod action;
pub mod adapter;
pub mod cache;
pub mod config;
pub mod fallback;
pub mod model;
pub mod prayer;
pub mod reminders;
pub mod state;
pub mod store;

pub use model::{QuranVerse, Verset};
pub use state::UiState;
pub use store::QuranStore;
