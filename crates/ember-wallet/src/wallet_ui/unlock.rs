use egui::Ui;

use crate::bridge::StoreBridge;
use crate::ui;
use crate::wallet_ui::state::{Page, WalletUiState};

pub fn render_unlock(ui: &mut Ui, state: &mut WalletUiState, bridge: &StoreBridge) {
    ui::styled_heading(ui, "Unlock");
    ui.label("Enter the vault password. A new vault is created on first use.");
    ui.add_space(8.0);

    let mut submit = false;
    ui.horizontal(|ui| {
        ui.label("Password:");
        let response = ui.add(
            egui::TextEdit::singleline(&mut state.password)
                .password(true)
                .desired_width(260.0),
        );
        submit = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        submit |= ui.button("Unlock").clicked();
    });
    ui::notices(ui, state.last_error.as_deref(), state.last_info.as_deref());

    if !submit {
        return;
    }
    match bridge.unlock(&state.password).and_then(|()| bridge.state()) {
        Ok(snapshot) => {
            state.password.clear();
            state.history.clear();
            let next = if snapshot.keyrings.accounts.is_empty() {
                Page::OnboardingImport
            } else {
                Page::Overview
            };
            state.navigate(next);
        }
        Err(e) => {
            tracing::warn!(error = ?e, "unlock failed");
            state.set_error(e.to_string());
        }
    }
}
