//! implore-restyle - Post-hoc formatting for rendered figures
//!
//! This crate restyles figures after all plotting calls are done. It never
//! creates plots; it reads an existing figure tree through the [`Scene`]
//! trait and rewrites colors, fonts and line styles in place.
//!
//! # Key Components
//!
//! - **Formatter**: One pass over every figure, axes, line and label
//! - **Role classifier**: Tells x/y/z labels and titles apart by placement
//! - **Cyclic assigner**: Deterministic color and dash pattern per line
//! - **ColorTable**: Named colors loaded from the bundled X11 list
//! - **FormatConfig**: JSON/TOML configuration, validated up front
//! - **MemoryScene**: A ready-made in-memory scene
//!
//! # Example
//!
//! ```
//! use implore_restyle::{format_all, MemoryScene, Placement};
//!
//! let mut scene = MemoryScene::default();
//! let fig = scene.add_figure();
//! let ax = scene.add_axes(fig, true);
//! scene.add_line(ax);
//! scene.add_label(ax, "time [s]", Placement::xlabel());
//!
//! format_all(&mut scene).unwrap();
//! ```

pub mod colors;
pub mod config;
pub mod cycle;
pub mod error;
pub mod memory;
pub mod role;
pub mod scene;
pub mod walker;

pub use colors::*;
pub use config::*;
pub use cycle::*;
pub use error::*;
pub use memory::{MemoryScene, Placement};
pub use role::*;
pub use scene::*;
pub use walker::*;
