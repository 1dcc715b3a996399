mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use alloy::primitives::{Address, U256};
use ember_wallet_adapters::Bip39MnemonicAdapter;
use ember_wallet_core::{
    ApproveSpendBlock, BackgroundAction, ImportLegacyOnboarding, KeyringImportStatus,
    PendingTransaction, StorePort, UpdateOutcome,
};

use common::{new_store, wait_for_import, TEST_ACCOUNT_0, TEST_MNEMONIC};

#[tokio::test]
async fn onboarding_import_completes_and_navigates() {
    let store = new_store();
    store.unlock("pw").expect("unlock");

    let mut page = ImportLegacyOnboarding::new("overview", false);
    page.set_recovery_phrase(format!("  {TEST_MNEMONIC} "));
    assert!(page
        .import_wallet(&store, &Bip39MnemonicAdapter)
        .expect("submit"));
    assert!(page.is_importing);

    let status = wait_for_import(&store).await;
    assert_eq!(status, KeyringImportStatus::Done);

    let state = store.state().expect("state");
    let expected: Address = TEST_ACCOUNT_0.parse().expect("account 0");
    assert_eq!(state.keyrings.accounts, vec![expected]);
    assert_eq!(
        page.observe(state.keyrings.unlocked, &state.keyrings.importing),
        Some("overview".to_owned())
    );
    assert!(!page.is_importing);
}

#[tokio::test]
async fn multiline_paste_validates_and_imports() {
    let store = new_store();
    store.unlock("pw").expect("unlock");

    let mut page = ImportLegacyOnboarding::new("overview", false);
    page.set_recovery_phrase("test test test test test test\ntest test test test test  junk\n");
    assert!(page
        .import_wallet(&store, &Bip39MnemonicAdapter)
        .expect("submit"));

    assert_eq!(wait_for_import(&store).await, KeyringImportStatus::Done);
    let expected: Address = TEST_ACCOUNT_0.parse().expect("account 0");
    assert_eq!(store.state().expect("state").keyrings.accounts, vec![expected]);
}

#[tokio::test]
async fn bad_derivation_path_reports_failure() {
    let store = new_store();
    store.unlock("pw").expect("unlock");

    let mut page = ImportLegacyOnboarding::new("overview", false);
    page.set_recovery_phrase(TEST_MNEMONIC);
    page.toggle_custom_derivation();
    page.select_path("m/not-a-path");
    page.import_wallet(&store, &Bip39MnemonicAdapter)
        .expect("submit");

    let status = wait_for_import(&store).await;
    assert!(matches!(status, KeyringImportStatus::Failed(_)));
    assert_eq!(page.observe(true, &status), None);
    assert_eq!(page.error_message.as_deref(), Some("Import failed"));
}

#[test]
fn invalid_phrase_never_reaches_the_store() {
    let store = new_store();
    store.unlock("pw").expect("unlock");
    let before = store.state().expect("state").revision;

    let mut page = ImportLegacyOnboarding::new("overview", false);
    page.set_recovery_phrase(
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon",
    );
    page.import_wallet(&store, &Bip39MnemonicAdapter)
        .expect("submit");

    let state = store.state().expect("state");
    assert_eq!(state.revision, before);
    assert_eq!(state.keyrings.importing, KeyringImportStatus::NotStarted);
}

#[test]
fn locked_store_hides_onboarding() {
    let store = new_store();
    let page = ImportLegacyOnboarding::new("overview", false);
    let state = store.state().expect("state");
    assert!(!page.should_render(state.keyrings.unlocked));

    store.unlock("pw").expect("unlock");
    assert!(page.should_render(store.state().expect("state").keyrings.unlocked));
    store.lock().expect("lock");
    assert!(!store.state().expect("state").keyrings.unlocked);
}

#[test]
fn change_hook_and_watch_fire_per_dispatch() {
    let store = new_store();
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    store
        .set_change_hook(Arc::new(move || {
            seen.fetch_add(1, Ordering::SeqCst);
        }))
        .expect("hook");
    let rx = store.subscribe();

    store.unlock("pw").expect("unlock");
    store
        .dispatch(BackgroundAction::RejectTransactionSignature)
        .expect("reject");

    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(*rx.borrow(), 2);
}

#[test]
fn approval_edit_round_trips_through_store() {
    let store = new_store();
    let token: Address = "0x6B175474E89094C44Da98b954EedeAC495271d0F"
        .parse()
        .expect("token");
    let input = format!(
        "0x095ea7b3{}{}",
        "0".repeat(24) + "68b3465833fb72a70ecdf485e0e4c7bd8665fc45",
        "f".repeat(64)
    );
    let tx = PendingTransaction {
        from: Address::repeat_byte(0x22),
        to: Some(token),
        input: Some(input),
        value: U256::ZERO,
        nonce: None,
        gas_limit: None,
        max_fee_per_gas: None,
        max_priority_fee_per_gas: None,
        chain_id: 1,
    };
    store
        .dispatch(BackgroundAction::RequestTransactionSignature(tx.clone()))
        .expect("request");

    let mut block = ApproveSpendBlock::default();
    block.sync(&tx);
    let state = store.state().expect("state");
    assert_eq!(block.view(&tx, &state).amount_label, "Infinite");

    block.handle_update_click(&tx, &store).expect("edit");
    block.set_approval_limit("100");
    let outcome = block.handle_update_click(&tx, &store).expect("confirm");
    assert!(matches!(outcome, UpdateOutcome::Dispatched(_)));

    let state = store.state().expect("state");
    let stored = state
        .transaction_construction
        .transaction_request
        .clone()
        .expect("stored request");
    block.sync(&stored);
    let view = block.view(&stored, &state);
    assert_eq!(view.amount_label, "100");
    assert_eq!(view.spending_label, "Spend 0x6B17...71d0F tokens");
}
