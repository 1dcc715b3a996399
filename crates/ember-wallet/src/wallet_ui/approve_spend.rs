use egui::Ui;

use ember_wallet_core::{
    is_approve_call, select_transaction_request, BackgroundState, PendingTransaction,
    UpdateOutcome,
};

use crate::bridge::StoreBridge;
use crate::ui;
use crate::wallet_ui::state::{Page, WalletUiState};

/// Sign-transaction page: request loader when idle, otherwise the request
/// summary with the spend-approval block for `approve` calls.
pub fn render_sign_transaction(
    ui: &mut Ui,
    state: &mut WalletUiState,
    bridge: &StoreBridge,
    snapshot: &BackgroundState,
) {
    ui::styled_heading(ui, "Sign transaction");
    ui::notices(ui, state.last_error.as_deref(), state.last_info.as_deref());

    let Some(tx) = select_transaction_request(snapshot) else {
        render_request_loader(ui, state, bridge);
        return;
    };

    ui::section_header(ui, "Request");
    egui::Grid::new("tx_request_grid")
        .num_columns(2)
        .striped(true)
        .show(ui, |ui| {
            ui.label("From");
            ui::address_link(ui, tx.chain_id, &tx.from);
            ui.end_row();
            ui.label("To");
            match tx.to.as_ref() {
                Some(to) => ui::address_link(ui, tx.chain_id, to),
                None => {
                    ui.label("contract creation");
                }
            }
            ui.end_row();
            ui.label("Value");
            ui.monospace(tx.value.to_string());
            ui.end_row();
            ui.label("Chain");
            ui.monospace(tx.chain_id.to_string());
            ui.end_row();
        });

    if is_approve_call(tx.input.as_deref()) {
        render_approve_spend(ui, state, bridge, snapshot, tx);
    }

    if let Some(input) = tx.input.as_deref() {
        egui::CollapsingHeader::new("Call data")
            .default_open(false)
            .show(ui, |ui| {
                ui.add(egui::Label::new(egui::RichText::new(input).monospace()).wrap());
                if ui.small_button("📋 Copy").clicked() {
                    ui::copy_to_clipboard(input);
                }
            });
    }

    ui.add_space(12.0);
    if ui.button("Reject").clicked() {
        match bridge.reject_transaction() {
            Ok(()) => {
                state.approve_spend = Default::default();
                state.navigate(Page::Overview);
                state.set_info("Transaction rejected");
            }
            Err(e) => {
                tracing::warn!(error = ?e, "reject failed");
                state.set_error(e.to_string());
            }
        }
    }
}

fn render_approve_spend(
    ui: &mut Ui,
    state: &mut WalletUiState,
    bridge: &StoreBridge,
    snapshot: &BackgroundState,
    tx: &PendingTransaction,
) {
    let block = &mut state.approve_spend;
    block.sync(tx);
    let view = block.view(tx, snapshot);

    ui::section_header(ui, "Approve spend");
    ui.horizontal(|ui| {
        if !view.symbol.is_empty() {
            ui.label(egui::RichText::new(view.symbol.to_uppercase()).strong());
        }
        ui.label(&view.spending_label);
    });
    if let Some(spender) = view.spender.as_ref() {
        ui.horizontal(|ui| {
            ui.label("Spender:");
            ui::address_link(ui, tx.chain_id, spender);
        });
    }

    ui.horizontal(|ui| {
        ui.label("Limit:");
        if view.editing {
            let mut limit = block.approval_limit.clone();
            let edit = egui::TextEdit::singleline(&mut limit)
                .desired_width(220.0)
                .font(egui::TextStyle::Monospace);
            if ui.add(edit).changed() {
                block.set_approval_limit(limit);
            }
        } else if view.infinite {
            ui.colored_label(egui::Color32::YELLOW, &view.amount_label)
                .on_hover_text("The spender may move your entire balance of this token");
        } else {
            ui.monospace(&view.amount_label);
        }
    });
    if let Some(err) = block.error.as_deref() {
        ui.colored_label(egui::Color32::RED, err);
    }

    if ui.button(view.button_label).clicked() {
        match bridge.update_spend_limit(block, tx) {
            Ok(UpdateOutcome::Dispatched(_)) => state.set_info("Spend limit updated"),
            Ok(UpdateOutcome::Skipped) => {
                state.set_error("Call data has no approval amount to change")
            }
            Ok(UpdateOutcome::EnteredEdit | UpdateOutcome::Rejected(_)) => {}
            Err(e) => {
                tracing::warn!(error = ?e, "spend limit update failed");
                state.set_error(e.to_string());
            }
        }
    }
}

fn render_request_loader(ui: &mut Ui, state: &mut WalletUiState, bridge: &StoreBridge) {
    ui.label("No transaction is waiting for a signature. Paste a request to review it.");

    ui::section_header(ui, "Transaction request (JSON)");
    ui::multiline_input(
        ui,
        &mut state.request_json,
        r#"{"from":"0x...","to":"0x...","input":"0x095ea7b3...","chainId":1}"#,
        6,
    );
    if ui.button("Load request").clicked() {
        match bridge.load_transaction_request(&state.request_json) {
            Ok(tx) => {
                tracing::info!(chain_id = tx.chain_id, "transaction request loaded");
                state.request_json.clear();
                state.set_info("Transaction request loaded");
            }
            Err(e) => {
                tracing::warn!(error = ?e, "transaction request rejected");
                state.set_error(e.to_string());
            }
        }
    }

    egui::CollapsingHeader::new("Known tokens")
        .default_open(false)
        .show(ui, |ui| {
            ui::multiline_input(
                ui,
                &mut state.assets_json,
                r#"[{"symbol":"USDC","name":"USD Coin","decimals":6,"contractAddress":"0x..."}]"#,
                4,
            );
            if ui.button("Add tokens").clicked() {
                match bridge.add_assets(&state.assets_json) {
                    Ok(count) => {
                        state.assets_json.clear();
                        state.set_info(format!("Added {count} token(s)"));
                    }
                    Err(e) => {
                        tracing::warn!(error = ?e, "token list rejected");
                        state.set_error(e.to_string());
                    }
                }
            }
        });

    egui::CollapsingHeader::new("Account balances")
        .default_open(false)
        .show(ui, |ui| {
            ui::multiline_input(
                ui,
                &mut state.balances_json,
                r#"{"address":"0x...","assetAmounts":[{"asset":{...},"amount":"0x64"}]}"#,
                4,
            );
            if ui.button("Set balances").clicked() {
                match bridge.set_account_balances(&state.balances_json) {
                    Ok(balances) => {
                        state.balances_json.clear();
                        state.set_info(format!(
                            "Tracking {} holding(s)",
                            balances.asset_amounts.len()
                        ));
                    }
                    Err(e) => {
                        tracing::warn!(error = ?e, "account balances rejected");
                        state.set_error(e.to_string());
                    }
                }
            }
        });
}
