pub mod options;
pub mod state;
pub mod view;

pub use options::{DisplayOptions, HighlightTheme, LanguageGrammar};
pub use state::{Interaction, PanelState, WindowPosition, WindowSize};
pub use view::{format_payload, line_gutter, DisplayText};

use crate::channel::{DataChannel, Payload, Subscription};
use crate::mount::{ensure_mount_point, MountHost, MountPoint};
use crate::settings::OverlayConfig;
use eframe::egui;
use std::sync::{Arc, Mutex};
use view::TextCache;

const GRIP_SIZE: f32 = 16.0;

#[derive(Default)]
struct Slot {
    generation: u64,
    payload: Option<Arc<Payload>>,
}

/// One-slot register holding the most recent payload. Every write bumps the
/// generation so readers know when to reformat.
#[derive(Default)]
struct Inbox {
    slot: Mutex<Slot>,
}

impl Inbox {
    fn store(&self, payload: Option<Arc<Payload>>) {
        if let Ok(mut slot) = self.slot.lock() {
            slot.generation += 1;
            slot.payload = payload;
        }
    }

    fn latest(&self) -> (u64, Option<Arc<Payload>>) {
        self.slot
            .lock()
            .map(|s| (s.generation, s.payload.clone()))
            .unwrap_or((0, None))
    }
}

/// Floating, draggable, resizable panel showing the latest emitted payload.
///
/// The panel listens on its channel from [`DebugOverlay::mount`] until it is
/// dropped or [`DebugOverlay::unmount`]ed. Payloads emitted while no panel is
/// mounted are never shown.
pub struct DebugOverlay {
    mount: Option<MountPoint>,
    panel: PanelState,
    options: DisplayOptions,
    inbox: Arc<Inbox>,
    cache: TextCache,
    subscription: Option<Subscription>,
    painted_rect: Option<egui::Rect>,
}

impl DebugOverlay {
    /// Mount on `host` and listen on the process-wide channel.
    pub fn mount<H>(host: &H, config: &OverlayConfig) -> Self
    where
        H: MountHost + Clone + Send + Sync + 'static,
    {
        Self::mount_on(host, DataChannel::global(), config)
    }

    pub fn mount_on<H>(host: &H, channel: &DataChannel, config: &OverlayConfig) -> Self
    where
        H: MountHost + Clone + Send + Sync + 'static,
    {
        let mount = ensure_mount_point(host);
        let inbox = Arc::new(Inbox::default());
        let subscription = {
            let inbox = Arc::clone(&inbox);
            let host = host.clone();
            channel.subscribe(move |payload| {
                inbox.store(Some(payload));
                host.request_repaint();
            })
        };
        tracing::debug!(
            channel = %channel.name(),
            has_mount_point = mount.is_some(),
            "overlay mounted"
        );
        Self {
            mount,
            panel: PanelState::new(
                config.initial_position,
                config.initial_size,
                config.minimum_size,
            ),
            options: config.display,
            inbox,
            cache: TextCache::default(),
            subscription: Some(subscription),
            painted_rect: None,
        }
    }

    /// Stop listening. The mount point stays in place for the next mount.
    pub fn unmount(self) {}

    pub fn mount_point(&self) -> Option<MountPoint> {
        self.mount
    }

    pub fn is_listening(&self) -> bool {
        self.subscription.as_ref().is_some_and(Subscription::is_active)
    }

    pub fn panel(&self) -> &PanelState {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut PanelState {
        &mut self.panel
    }

    pub fn position(&self) -> WindowPosition {
        self.panel.position()
    }

    pub fn size(&self) -> WindowSize {
        self.panel.size()
    }

    /// Screen rect the panel occupied in the last rendered frame.
    pub fn painted_rect(&self) -> Option<egui::Rect> {
        self.painted_rect
    }

    pub fn options(&self) -> &DisplayOptions {
        &self.options
    }

    pub fn toggle_wrap_long_lines(&mut self) {
        self.options.wrap_long_lines = !self.options.wrap_long_lines;
        tracing::debug!(value = self.options.wrap_long_lines, "wrap long lines toggled");
    }

    pub fn toggle_line_numbers(&mut self) {
        self.options.show_line_numbers = !self.options.show_line_numbers;
        tracing::debug!(value = self.options.show_line_numbers, "line numbers toggled");
    }

    pub fn select_theme(&mut self, theme: HighlightTheme) {
        if self.options.theme != theme {
            tracing::debug!(theme = theme.id(), "highlight theme selected");
            self.options.theme = theme;
        }
    }

    pub fn select_language(&mut self, language: LanguageGrammar) {
        if self.options.language != language {
            tracing::debug!(language = language.id(), "language selected");
            self.options.language = language;
        }
    }

    /// The most recently received payload, if any.
    pub fn payload(&self) -> Option<Arc<Payload>> {
        self.inbox.latest().1
    }

    /// Forget the current payload locally. Other listeners are unaffected.
    pub fn clear(&mut self) {
        self.inbox.store(None);
    }

    pub fn display_text(&mut self) -> DisplayText {
        let (generation, payload) = self.inbox.latest();
        let body = self.cache.get(generation, payload.as_deref());
        DisplayText::new(body, &self.options)
    }

    /// Render the panel. Renders nothing if no mount point could be resolved.
    pub fn show(&mut self, ctx: &egui::Context) {
        let Some(mount) = self.mount else {
            return;
        };
        let bounds = ctx.mount_bounds();
        self.panel.clamp_into(bounds);
        let text = self.display_text();

        let area = egui::Area::new(mount.panel_id())
            .order(egui::Order::Foreground)
            .fixed_pos(self.panel.position())
            .show(ctx, |ui| self.panel_ui(ui, mount, bounds, &text));
        self.painted_rect = Some(area.response.rect);

        if self.panel.is_dragging() {
            ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
        }
    }

    fn panel_ui(
        &mut self,
        ui: &mut egui::Ui,
        mount: MountPoint,
        bounds: egui::Rect,
        text: &DisplayText,
    ) {
        let rect = self.panel.rect();
        ui.allocate_rect(rect, egui::Sense::hover());

        let frame = egui::Frame::window(ui.style());
        ui.painter().add(frame.paint(rect));
        let inner = egui::Rect::from_min_max(
            rect.min + frame.inner_margin.left_top(),
            rect.max - frame.inner_margin.right_bottom(),
        );

        // content never grows the panel past its stored size
        let mut content = ui.child_ui(inner, egui::Layout::top_down(egui::Align::Min));
        content.set_clip_rect(inner.intersect(ui.clip_rect()));
        content.set_max_width(inner.width());
        self.header_ui(&mut content, mount, bounds, text);
        content.separator();

        let text_rect = content.available_rect_before_wrap();
        let fill = self.options.theme.background(content.style());
        content.painter().rect_filled(text_rect, 2.0, fill);
        let scroll = if self.options.wrap_long_lines {
            egui::ScrollArea::vertical()
        } else {
            egui::ScrollArea::both()
        };
        scroll
            .id_source(mount.id.with("text"))
            .auto_shrink([false, false])
            .show(&mut content, |ui| view::text_region_ui(ui, text, &self.options));

        self.resize_grip_ui(ui, mount, rect);
    }

    fn header_ui(
        &mut self,
        ui: &mut egui::Ui,
        mount: MountPoint,
        bounds: egui::Rect,
        text: &DisplayText,
    ) {
        ui.horizontal_wrapped(|ui| {
            let cursor = if self.panel.is_dragging() {
                egui::CursorIcon::Grabbing
            } else {
                egui::CursorIcon::Grab
            };
            let title = egui::RichText::new("☰ Debug").strong();
            let handle = ui
                .add(egui::Label::new(title).sense(egui::Sense::drag()))
                .on_hover_cursor(cursor);
            if handle.drag_started() {
                self.panel.begin_drag();
            }
            if handle.dragged() {
                self.panel.drag_by(handle.drag_delta(), bounds);
            }
            if handle.drag_stopped() {
                self.panel.end_drag();
            }

            let mut wrap = self.options.wrap_long_lines;
            if ui.checkbox(&mut wrap, "Wrap long lines").changed() {
                self.toggle_wrap_long_lines();
            }
            let mut numbers = self.options.show_line_numbers;
            if ui.checkbox(&mut numbers, "Show line numbers").changed() {
                self.toggle_line_numbers();
            }

            let mut theme = self.options.theme;
            ui.label("Style:");
            egui::ComboBox::from_id_source(mount.id.with("theme"))
                .selected_text(theme.label())
                .show_ui(ui, |ui| {
                    for choice in HighlightTheme::ALL {
                        ui.selectable_value(&mut theme, choice, choice.label());
                    }
                });
            self.select_theme(theme);

            let mut language = self.options.language;
            ui.label("Language:");
            egui::ComboBox::from_id_source(mount.id.with("language"))
                .selected_text(language.label())
                .show_ui(ui, |ui| {
                    for choice in LanguageGrammar::ALL {
                        ui.selectable_value(&mut language, choice, choice.label());
                    }
                });
            self.select_language(language);

            if ui.button("Copy").clicked() {
                ui.output_mut(|o| o.copied_text = text.body.clone());
            }
            if ui.button("Clear").clicked() {
                self.clear();
                ui.ctx().request_repaint();
            }
        });
    }

    fn resize_grip_ui(&mut self, ui: &mut egui::Ui, mount: MountPoint, frame_rect: egui::Rect) {
        let size = egui::vec2(GRIP_SIZE, GRIP_SIZE);
        let rect = egui::Rect::from_min_size(frame_rect.max - size, size);
        let response = ui
            .interact(rect, mount.id.with("resize"), egui::Sense::drag())
            .on_hover_cursor(egui::CursorIcon::ResizeNwSe);
        if response.drag_started() {
            self.panel.begin_resize();
        }
        if response.dragged() {
            self.panel.resize_by(response.drag_delta());
        }
        if response.drag_stopped() {
            self.panel.end_resize();
        }

        let stroke = if self.panel.is_resizing() {
            ui.visuals().widgets.active.fg_stroke
        } else {
            ui.visuals().widgets.noninteractive.fg_stroke
        };
        let painter = ui.painter();
        for i in 1..=3 {
            let o = i as f32 * 4.0;
            painter.line_segment(
                [
                    egui::pos2(rect.max.x - o, rect.max.y - 2.0),
                    egui::pos2(rect.max.x - 2.0, rect.max.y - o),
                ],
                stroke,
            );
        }
    }
}

impl Drop for DebugOverlay {
    fn drop(&mut self) {
        if self.subscription.take().is_some() {
            tracing::debug!("overlay unmounted");
        }
    }
}
