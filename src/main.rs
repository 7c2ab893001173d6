use debug_overlay::{emit, logging, DebugOverlay, OverlayConfig};
use eframe::egui;
use std::time::Duration;

const CONFIG_FILE: &str = "overlay.json";

struct DemoApp {
    overlay: Option<DebugOverlay>,
    config: OverlayConfig,
}

impl DemoApp {
    fn new(ctx: &egui::Context, config: OverlayConfig) -> Self {
        Self {
            overlay: Some(DebugOverlay::mount(ctx, &config)),
            config,
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Debug overlay demo");
            ui.label("A background thread emits a counter once per second.");
            let mounted = self.overlay.is_some();
            if ui
                .button(if mounted { "Unmount overlay" } else { "Mount overlay" })
                .clicked()
            {
                match self.overlay.take() {
                    Some(overlay) => overlay.unmount(),
                    None => self.overlay = Some(DebugOverlay::mount(ctx, &self.config)),
                }
            }
        });
        if let Some(overlay) = &mut self.overlay {
            overlay.show(ctx);
        }
    }
}

fn spawn_counter() {
    std::thread::spawn(|| {
        let mut counter: u64 = 0;
        loop {
            emit(&serde_json::json!({ "counter": counter }));
            counter += 1;
            std::thread::sleep(Duration::from_secs(1));
        }
    });
}

fn main() -> anyhow::Result<()> {
    let config = OverlayConfig::load(CONFIG_FILE)?;
    logging::init(config.debug_logging, config.log_file.clone().map(Into::into));

    spawn_counter();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Debug overlay demo",
        native_options,
        Box::new(move |cc| Box::new(DemoApp::new(&cc.egui_ctx, config))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run demo window: {e}"))
}
