//! # Core Application Logic
//!
//! This module contains the viewer's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Card + normalizer    │
//!                    │  • Session (deck state) │
//!                    │  • Action + update()    │
//!                    │  • Key map              │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │   source   │
//!             │  Adapter   │          │ (file/http)│
//!             │ (ratatui)  │          │            │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`card`]: The `Card` enum, one variant per card kind
//! - [`normalize`]: Raw JSON records → canonical cards
//! - [`session`]: Deck, answer slots, cursor, reveal flag
//! - [`state`]: The `App` struct and the `Screen` read model
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`keymap`]: Keyboard table
//! - [`config`]: Layered configuration (the only module here that touches disk)

pub mod action;
pub mod card;
pub mod config;
pub mod keymap;
pub mod normalize;
pub mod session;
pub mod state;
