//! Folio Site - client-side behavior for the portfolio website
//!
//! The interesting part is the navbar dynamic contrast classifier: the
//! navbar is a translucent, blurred glass panel, and as the page scrolls we
//! estimate how bright it looks over whatever is beneath each of its
//! text/icon elements, then switch the whole navbar between a light-on-dark
//! and a dark-on-light scheme.
//!
//! ## Architecture
//!
//! - **Core** (all targets): color parsing, surface classification,
//!   compositing, aggregation, scheme application, recorded scenes, and the
//!   DOM-free logic of the page widgets.
//! - **DOM** (`dom-web` on wasm32): web-sys adapters that wire the core into
//!   the page.
//!
//! ## Usage
//!
//! Tune the classifier against a recorded scene:
//! ```bash
//! cargo run --bin nav-contrast -- --scene fixtures/hero-dark-rose.json
//! ```
//!
//! Browser build:
//! ```bash
//! cargo build --target wasm32-unknown-unknown --no-default-features --features dom-web --bin folio-web-dom
//! ```

// Core modules (available on all platforms)
pub mod color;
pub mod config;
pub mod constants;
pub mod contrast;
pub mod scheme;
pub mod surface;

// Recorded navbar scenes (nav-contrast tool and tests)
pub mod scene;

// DOM-free widget logic
pub mod widgets;

// Feature toggles and debug tracing (available on all platforms)
pub mod debug;
pub mod flags;

// Browser wiring
#[cfg(all(feature = "dom-web", target_arch = "wasm32"))]
pub mod dom;

// Re-export commonly used types
pub use config::ContrastConfig;
pub use contrast::{Decision, NavContrast, NavTarget, Navbar, Outcome, SamplePoint};
pub use scheme::{ClassList, NavRole, Scheme};
pub use surface::{SurfaceDescriptor, SurfaceKind, SurfaceNode};
