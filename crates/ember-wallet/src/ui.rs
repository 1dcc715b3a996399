//! UI helper components

use alloy::primitives::Address;
use eframe::egui;

use ember_wallet_core::truncate_address;

const ACCENT: egui::Color32 = egui::Color32::from_rgb(240, 120, 40);

/// Block explorer URL for an address on a chain id.
pub fn explorer_address_url(chain_id: u64, address: &Address) -> String {
    let base = match chain_id {
        11155111 => "https://sepolia.etherscan.io",
        30 => "https://explorer.rsk.co",
        31 => "https://explorer.testnet.rsk.co",
        _ => "https://etherscan.io",
    };
    format!("{base}/address/{address}")
}

pub fn open_url(url: &str) {
    if let Err(e) = open::that(url) {
        tracing::warn!(error = %e, url, "could not open browser");
    }
}

pub fn copy_to_clipboard(text: &str) {
    if let Err(e) = arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
        tracing::warn!(error = %e, "clipboard unavailable");
    }
}

/// Styled heading with accent color
pub fn styled_heading(ui: &mut egui::Ui, text: &str) {
    ui.heading(egui::RichText::new(text).color(ACCENT));
}

/// Section header with separator
pub fn section_header(ui: &mut egui::Ui, text: &str) {
    ui.add_space(10.0);
    ui.label(egui::RichText::new(text).strong().size(14.0));
    ui.separator();
}

/// Truncated address that opens the explorer on click, plus a copy button.
pub fn address_link(ui: &mut egui::Ui, chain_id: u64, address: &Address) {
    let full = address.to_string();
    ui.horizontal(|ui| {
        let response = ui
            .link(egui::RichText::new(truncate_address(&full)).monospace())
            .on_hover_text(full.as_str());
        if response.clicked() {
            open_url(&explorer_address_url(chain_id, address));
        }
        if ui
            .small_button("📋")
            .on_hover_text("Copy to clipboard")
            .clicked()
        {
            copy_to_clipboard(&full);
        }
    });
}

/// Multiline monospace input with a fixed number of visible rows.
pub fn multiline_input(
    ui: &mut egui::Ui,
    value: &mut String,
    hint: &str,
    rows: usize,
) -> egui::Response {
    ui.add(
        egui::TextEdit::multiline(value)
            .hint_text(hint)
            .desired_rows(rows)
            .desired_width(f32::INFINITY)
            .font(egui::TextStyle::Monospace),
    )
}

pub fn notices(ui: &mut egui::Ui, error: Option<&str>, info: Option<&str>) {
    if let Some(err) = error {
        ui.colored_label(egui::Color32::RED, err);
    }
    if let Some(info) = info {
        ui.colored_label(egui::Color32::LIGHT_GREEN, info);
    }
}
