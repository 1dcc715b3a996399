//! Main application state and update loop

use eframe::egui;
use eyre::Result;

use ember_wallet_adapters::AdapterConfig;
use ember_wallet_core::{BackgroundState, ImportLegacyOnboarding};

use crate::bridge::StoreBridge;
use crate::ui;
use crate::wallet_ui::approve_spend::render_sign_transaction;
use crate::wallet_ui::onboarding_import::{observe_import, render_onboarding_import};
use crate::wallet_ui::overview::render_overview;
use crate::wallet_ui::state::{Page, WalletUiState};
use crate::wallet_ui::unlock::render_unlock;

const NAV_PAGES: [Page; 3] = [Page::Overview, Page::OnboardingImport, Page::SignTransaction];

pub struct App {
    bridge: StoreBridge,
    state: WalletUiState,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self> {
        let config = AdapterConfig::from_env();
        tracing::info!(
            vault = ?config.vault_path,
            hide_derivation_path = config.hide_import_derivation_path,
            "wallet config loaded"
        );
        let bridge = StoreBridge::new(config)?;
        bridge.repaint_on_change(cc.egui_ctx.clone())?;

        let onboarding = ImportLegacyOnboarding::new(
            bridge.config().onboarding_next_page.clone(),
            bridge.config().hide_import_derivation_path,
        );
        Ok(Self {
            bridge,
            state: WalletUiState::new(onboarding),
        })
    }

    /// Per-frame reactions to store state that are independent of the page.
    fn observe(&mut self, snapshot: &BackgroundState) {
        if !snapshot.keyrings.unlocked && self.state.page.requires_unlock() {
            self.state.reset_to_unlock();
        }
        observe_import(&mut self.state, snapshot);
    }

    fn render_header(&mut self, ui: &mut egui::Ui, unlocked: bool) {
        ui.horizontal(|ui| {
            ui::styled_heading(ui, "🔥 Ember Wallet");
            ui.add_space(20.0);
            ui.separator();
            ui.add_enabled_ui(unlocked, |ui| {
                for page in NAV_PAGES {
                    if ui
                        .selectable_label(self.state.page == page, page.title())
                        .clicked()
                    {
                        self.state.navigate(page);
                    }
                }
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if unlocked && ui.button("🔒 Lock").clicked() {
                    match self.bridge.lock() {
                        Ok(()) => self.state.reset_to_unlock(),
                        Err(e) => {
                            tracing::warn!(error = ?e, "lock failed");
                            self.state.set_error(e.to_string());
                        }
                    }
                }
                if !self.state.history.is_empty() && ui.button("⬅ Back").clicked() {
                    self.state.back();
                }
            });
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::dark());

        let snapshot = match self.bridge.state() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::error!(error = ?e, "wallet state unavailable");
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.colored_label(egui::Color32::RED, e.to_string());
                });
                return;
            }
        };
        self.observe(&snapshot);
        let unlocked = snapshot.keyrings.unlocked;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(8.0);
            self.render_header(ui, unlocked);
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.small(format!("build {} ({})", env!("GIT_HASH"), env!("BUILD_TIME")));
                ui.separator();
                ui.small(format!(
                    "import: {}",
                    snapshot.keyrings.importing.label()
                ));
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(10.0);
                match self.state.page {
                    Page::Unlock => render_unlock(ui, &mut self.state, &self.bridge),
                    Page::Overview => render_overview(ui, &mut self.state, &snapshot),
                    Page::OnboardingImport => {
                        render_onboarding_import(ui, &mut self.state, &self.bridge, &snapshot)
                    }
                    Page::SignTransaction => {
                        render_sign_transaction(ui, &mut self.state, &self.bridge, &snapshot)
                    }
                }
                ui.add_space(20.0);
            });
        });
    }
}
