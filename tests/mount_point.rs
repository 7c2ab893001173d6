use debug_overlay::mount::{ensure_mount_point, mount_id, MountHost};
use eframe::egui;

use mock_host::MockHost;

#[test]
fn second_ensure_reuses_existing_mount_point() {
    let host = MockHost::default();
    let first = ensure_mount_point(&host).expect("mount point");
    let second = ensure_mount_point(&host).expect("mount point");

    assert_eq!(first, second);
    assert_eq!(host.mount_count(), 1);
    assert_eq!(host.create_calls.load(std::sync::atomic::Ordering::SeqCst), 1);
}

#[test]
fn declining_host_yields_no_mount_point() {
    let host = MockHost::declining();
    assert!(ensure_mount_point(&host).is_none());
    assert_eq!(host.mount_count(), 0);
}

#[test]
fn egui_context_stores_a_single_mount_record() {
    let ctx = egui::Context::default();
    assert!(ctx.find_mount(mount_id()).is_none());

    let first = ensure_mount_point(&ctx).expect("egui always provides a mount point");
    // a direct second create must not replace the record
    let again = ctx.create_mount(mount_id()).expect("mount point");

    assert_eq!(first, again);
    assert_eq!(ctx.find_mount(mount_id()), Some(first));
}

#[test]
fn egui_bounds_follow_screen_rect_each_frame() {
    let ctx = egui::Context::default();
    let mount = ensure_mount_point(&ctx).expect("mount point");
    assert_eq!(mount.panel_id(), mount_id().with("panel"));

    let screen = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(800.0, 600.0));
    let input = egui::RawInput {
        screen_rect: Some(screen),
        ..Default::default()
    };
    let _ = ctx.run(input, |_| {});
    assert_eq!(ctx.mount_bounds(), screen);
}
