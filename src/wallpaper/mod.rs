//! Wallpaper appliers.
//!
//! GNOME is the only backend: every change is a `dconf write` against the
//! desktop configuration store.

mod gnome;

pub use gnome::{apply_background, apply_lockscreen};
