//! # Core Form Logic
//!
//! The form session itself. It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • FormSpec (fields)    │
//!                    │  • FormState (answers)  │
//!                    │  • Action + update()    │
//!                    │  • OutputRecord         │
//!                    │                         │
//!                    │  No terminal. No I/O.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`field`]: `FieldSpec` / `FormSpec`, the fixed field list
//! - [`state`]: `FormState`, one session's answers and status
//! - [`action`]: `Action` and the `update()` reducer
//! - [`record`]: coercion of answers into the `OutputRecord`
//! - [`error`]: validation and coercion errors
//! - [`config`]: presentation settings (the one module that touches files)

pub mod action;
pub mod config;
pub mod error;
pub mod field;
pub mod record;
pub mod state;
