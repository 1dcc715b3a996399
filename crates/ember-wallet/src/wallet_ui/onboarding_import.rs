use egui::Ui;

use ember_wallet_core::{BackgroundState, DERIVATION_PATHS};

use crate::bridge::StoreBridge;
use crate::ui;
use crate::wallet_ui::state::{Page, WalletUiState};

/// Applies store progress to the page; navigates once the import finishes.
pub fn observe_import(state: &mut WalletUiState, snapshot: &BackgroundState) {
    let next = state
        .onboarding
        .observe(snapshot.keyrings.unlocked, &snapshot.keyrings.importing);
    if let Some(route) = next {
        state.onboarding.set_recovery_phrase(String::new());
        state.navigate(Page::from_route(&route));
        state.set_info("Wallet imported");
    }
}

pub fn render_onboarding_import(
    ui: &mut Ui,
    state: &mut WalletUiState,
    bridge: &StoreBridge,
    snapshot: &BackgroundState,
) {
    if !state.onboarding.should_render(snapshot.keyrings.unlocked) {
        return;
    }

    ui::styled_heading(ui, "Import legacy wallet");
    ui.label("Enter the recovery phrase of the wallet you want to import.");
    ui.add_space(8.0);

    let page = &mut state.onboarding;
    let mut phrase = page.recovery_phrase.clone();
    if ui::multiline_input(ui, &mut phrase, "twelve or twenty-four words", 3).changed() {
        page.set_recovery_phrase(phrase);
    }
    if let Some(err) = page.error_message.as_deref() {
        ui.colored_label(egui::Color32::RED, err);
    }

    if page.derivation_controls_visible() {
        ui.add_space(6.0);
        let mut checked = page.is_checked;
        if ui
            .checkbox(&mut checked, "Use custom derivation path")
            .changed()
        {
            page.toggle_custom_derivation();
        }
    }

    if page.path_select_visible() {
        let selected = page
            .selected_path_label()
            .unwrap_or("Select a derivation path");
        let mut choice: Option<&'static str> = None;
        egui::ComboBox::from_id_salt("derivation_path_select")
            .selected_text(selected)
            .width(320.0)
            .show_ui(ui, |ui| {
                for option in DERIVATION_PATHS {
                    let current = page.path.as_deref() == Some(option.value);
                    if ui.selectable_label(current, option.label).clicked() {
                        choice = Some(option.value);
                    }
                }
            });
        if let Some(value) = choice {
            page.select_path(value);
        }
    }

    ui.add_space(10.0);
    ui.horizontal(|ui| {
        let button = egui::Button::new("Import");
        if ui.add_enabled(!page.is_importing, button).clicked() {
            if let Err(e) = bridge.import_wallet(page) {
                tracing::warn!(error = ?e, "keyring import not submitted");
                page.error_message = Some(e.to_string());
            }
        }
        if page.is_importing {
            ui.spinner();
            ui.label("Importing...");
        }
    });
}
