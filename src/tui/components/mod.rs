//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: deck title, status and `position / total`
//! - `Placeholder`: loading and empty screens
//!
//! ### Transient Wrappers (Borrowed State)
//!
//! Built each frame around borrowed data plus the `HitMap`, into which they
//! record their clickable regions:
//! - `ButtonRow`: toolbar and back/next controls
//! - `CardView`: the card itself, with clickable options and a scroll window
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as props, never by reaching into the
//! `App`. The draw function in `ui.rs` reads `App::screen()` once and hands
//! each component the slice it needs.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── button_row.rs    (Clickable button line)
//! ├── card_view.rs     (Prompt + options / hidden answer)
//! └── placeholder.rs   (Loading / empty screen)
//! ```

pub mod button_row;
pub mod card_view;
pub mod placeholder;
mod title_bar;

pub use button_row::{Button, ButtonRow};
pub use card_view::{CardScroll, CardView};
pub use placeholder::Placeholder;
pub use title_bar::TitleBar;
