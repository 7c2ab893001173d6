//! Floating debug overlay for egui applications.
//!
//! Application code pushes any serializable value with [`emit`]; a mounted
//! [`DebugOverlay`] shows the latest one as highlighted, indented JSON in a
//! draggable, resizable panel.

pub mod channel;
pub mod logging;
pub mod mount;
pub mod overlay;
pub mod settings;

pub use channel::{emit, DataChannel, Payload, Subscription};
pub use mount::{ensure_mount_point, MountHost, MountPoint};
pub use overlay::DebugOverlay;
pub use settings::OverlayConfig;
