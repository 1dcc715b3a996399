use egui::Ui;

use ember_wallet_core::{select_keyring_import_status, BackgroundState, KeyringImportStatus};

use crate::ui;
use crate::wallet_ui::state::{Page, WalletUiState};

const MAINNET: u64 = 1;

pub fn render_overview(ui: &mut Ui, state: &mut WalletUiState, snapshot: &BackgroundState) {
    ui::styled_heading(ui, "Overview");
    ui::notices(ui, state.last_error.as_deref(), state.last_info.as_deref());

    ui::section_header(ui, "Accounts");
    if snapshot.keyrings.accounts.is_empty() {
        ui.label("No accounts yet. Import a wallet to get started.");
    }
    for address in &snapshot.keyrings.accounts {
        ui::address_link(ui, MAINNET, address);
    }

    if let KeyringImportStatus::Failed(reason) = select_keyring_import_status(snapshot) {
        ui.colored_label(egui::Color32::YELLOW, format!("Last import failed: {reason}"));
    }

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        if ui.button("Import wallet").clicked() {
            state.navigate(Page::OnboardingImport);
        }
        let pending = snapshot
            .transaction_construction
            .transaction_request
            .is_some();
        let label = if pending {
            "Review pending transaction"
        } else {
            "Sign transaction"
        };
        if ui.button(label).clicked() {
            state.navigate(Page::SignTransaction);
        }
    });
}
