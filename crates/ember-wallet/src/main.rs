//! Desktop entry point for the Ember wallet shell.

use eframe::egui;

mod app;
mod bridge;
mod ui;
mod wallet_ui;

fn main() -> eframe::Result<()> {
    // RUST_LOG overrides; info and above otherwise.
    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(
        git_hash = env!("GIT_HASH"),
        build_time = env!("BUILD_TIME"),
        "ember wallet starting"
    );

    let viewport = egui::ViewportBuilder::default()
        .with_title("Ember Wallet")
        .with_inner_size([720.0, 640.0])
        .with_min_inner_size([480.0, 400.0]);

    eframe::run_native(
        "Ember Wallet",
        eframe::NativeOptions {
            viewport,
            ..Default::default()
        },
        Box::new(|cc| Ok(Box::new(app::App::new(cc)?))),
    )
}
