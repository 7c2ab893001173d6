use debug_overlay::overlay::{Interaction, PanelState, WindowPosition, WindowSize};
use debug_overlay::{DataChannel, DebugOverlay, OverlayConfig};
use eframe::egui;

use mock_host::MockHost;

fn screen() -> egui::Rect {
    egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(1920.0, 1080.0))
}

fn default_panel() -> PanelState {
    PanelState::new(
        WindowPosition::new(20.0, 20.0),
        WindowSize::new(600.0, 600.0),
        WindowSize::new(500.0, 500.0),
    )
}

#[test]
fn drag_commits_final_position_on_release() {
    let mut panel = default_panel();
    panel.begin_drag();
    panel.drag_by(egui::vec2(40.0, 30.0), screen());
    assert!(panel.is_dragging());
    assert_eq!(panel.position(), WindowPosition::new(60.0, 50.0));
    panel.drag_by(egui::vec2(60.0, 30.0), screen());
    panel.end_drag();

    assert_eq!(panel.position(), WindowPosition::new(120.0, 80.0));
    assert_eq!(panel.interaction(), Interaction::Idle);

    // later frames keep the committed position
    panel.clamp_into(screen());
    assert_eq!(panel.position(), WindowPosition::new(120.0, 80.0));
}

#[test]
fn drag_stays_inside_bounds() {
    let mut panel = default_panel();
    panel.drag_by(egui::vec2(5000.0, -500.0), screen());
    panel.end_drag();
    assert_eq!(panel.position(), WindowPosition::new(1320.0, 0.0));
}

#[test]
fn resize_below_minimum_clamps() {
    let mut panel = default_panel();
    panel.resize_to(WindowSize::new(100.0, 100.0));
    assert_eq!(panel.size(), WindowSize::new(500.0, 500.0));

    panel.begin_resize();
    panel.resize_by(egui::vec2(-400.0, 50.0));
    assert_eq!(panel.size(), WindowSize::new(500.0, 550.0));
    panel.resize_by(egui::vec2(450.0, 0.0));
    panel.end_resize();
    assert_eq!(panel.size(), WindowSize::new(550.0, 550.0));
    assert!(!panel.is_resizing());
}

#[test]
fn geometry_does_not_touch_payload() {
    let host = MockHost::default();
    let channel = DataChannel::new("geometry");
    let mut overlay = DebugOverlay::mount_on(&host, &channel, &OverlayConfig::default());
    channel.publish(serde_json::json!({"x": 1}));
    let before = overlay.payload();

    overlay.panel_mut().drag_by(egui::vec2(100.0, 60.0), screen());
    overlay.panel_mut().end_drag();
    overlay.panel_mut().resize_by(egui::vec2(50.0, 50.0));
    overlay.panel_mut().end_resize();

    assert_eq!(overlay.position(), WindowPosition::new(120.0, 80.0));
    assert_eq!(overlay.size(), WindowSize::new(650.0, 650.0));
    assert_eq!(overlay.payload(), before);
}
