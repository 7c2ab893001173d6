use eframe::egui;

/// Reserved id for the overlay's mount point. Host UIs must not reuse it.
pub const MOUNT_ID_SOURCE: &str = "debug_overlay.mount";

pub fn mount_id() -> egui::Id {
    egui::Id::new(MOUNT_ID_SOURCE)
}

/// Handle to the single place the overlay renders into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountPoint {
    pub id: egui::Id,
}

impl MountPoint {
    pub fn panel_id(&self) -> egui::Id {
        self.id.with("panel")
    }
}

/// Something the overlay can be mounted on.
///
/// `egui::Context` is the real host; tests use a recording fake.
pub trait MountHost {
    fn find_mount(&self, id: egui::Id) -> Option<MountPoint>;

    /// Create the mount point. Returns `None` if the host cannot provide one.
    fn create_mount(&self, id: egui::Id) -> Option<MountPoint>;

    /// Area the panel must stay inside.
    fn mount_bounds(&self) -> egui::Rect;

    fn request_repaint(&self) {}
}

/// Return the existing mount point or create it. Never creates a second one.
pub fn ensure_mount_point<H: MountHost + ?Sized>(host: &H) -> Option<MountPoint> {
    let id = mount_id();
    if let Some(existing) = host.find_mount(id) {
        return Some(existing);
    }
    let created = host.create_mount(id);
    match created {
        Some(_) => tracing::debug!(?id, "mount point created"),
        None => tracing::debug!(?id, "host declined to create a mount point"),
    }
    created
}

impl MountHost for egui::Context {
    fn find_mount(&self, id: egui::Id) -> Option<MountPoint> {
        self.data(|d| d.get_temp::<MountPoint>(id))
    }

    fn create_mount(&self, id: egui::Id) -> Option<MountPoint> {
        // check and insert under one lock so a racing creator sees our record
        Some(self.data_mut(|d| *d.get_temp_mut_or_insert_with(id, || MountPoint { id })))
    }

    fn mount_bounds(&self) -> egui::Rect {
        self.screen_rect()
    }

    fn request_repaint(&self) {
        egui::Context::request_repaint(self);
    }
}
