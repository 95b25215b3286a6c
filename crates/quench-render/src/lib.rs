//! Rendering and PNG export for QUENCH field snapshots.

pub mod colormap;
pub mod frame;

pub use frame::{frame_filename, render_field, save_frame, BOOTSTRAP_FRAME_NAME};
