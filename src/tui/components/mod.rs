//! # TUI Components
//!
//! All UI components for the terminal form.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props:
//! - `Banner`: header/footer boundary line (normal or error)
//! - `StatusPanel`: the completed record as JSON
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep presentation state and emit events:
//! - `TextInput`: inline editor for the focused text field
//! - `ChoiceState` / `Choice`: selector for boolean fields and the confirm
//!
//! Persistent state lives in `TuiState`; `Choice` is a transient wrapper
//! created each frame over a borrowed `ChoiceState`.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── banner.rs        (header / footer / error boundary)
//! ├── choice.rs        (inline single-choice selector)
//! ├── status_panel.rs  (completed record)
//! └── text_input.rs    (inline text editor)
//! ```

pub mod banner;
pub mod choice;
pub mod status_panel;
pub mod text_input;

pub use banner::{Banner, BannerKind};
pub use choice::{Choice, ChoiceEvent, ChoiceState};
pub use status_panel::StatusPanel;
pub use text_input::{InputEvent, TextInput};
