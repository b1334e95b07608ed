#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use manage_business::ManageConfig;
use manage_states::{StateCtx, Time};
use manage_ui::ManageApp;

mod alloc {
    #[global_allocator]
    static MALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;
}

fn main() -> eframe::Result {
    // Log to stderr (run with `RUST_LOG=debug` for request logging).
    env_logger::Builder::from_env(env_logger::Env::default()).init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Manage",
        native_options,
        Box::new(|_cc| {
            let mut ctx = StateCtx::new();
            ctx.add_state(Time::default());
            ctx.add_state(ManageConfig::default());
            Ok(Box::new(ManageApp::new(ctx)))
        }),
    )
}
