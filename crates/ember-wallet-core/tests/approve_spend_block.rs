mod common;

use alloy::primitives::{Address, U256};
use ember_wallet_core::{
    approval_amount_word, number_to_32_bytes_hex, reduce, AccountBalances, ApprovalError,
    ApproveSpendBlock, AssetAmount, BackgroundAction, BackgroundState, StorePort,
    UpdateOutcome, INVALID_SPEND_LIMIT,
};

use common::{
    approve_calldata, approve_tx, spender_address, state_with_request, usdc, usdc_address,
    RecordingStore,
};

fn synced_block(tx: &ember_wallet_core::PendingTransaction) -> ApproveSpendBlock {
    let mut block = ApproveSpendBlock::default();
    block.sync(tx);
    block
}

#[test]
fn infinite_approval_shows_label_not_number() {
    let tx = approve_tx(usdc_address(), approve_calldata(spender_address(), U256::MAX));
    let mut state = state_with_request(&tx);
    state.assets.push(usdc());

    let view = synced_block(&tx).view(&tx, &state);
    assert!(view.infinite);
    assert_eq!(view.amount_label, "Infinite USDC");
    assert_eq!(view.spending_label, "Spend usdc tokens");
    assert_eq!(view.button_label, "Change limit");
    assert_eq!(view.spender, Some(spender_address()));
}

#[test]
fn finite_approval_displays_exact_value() {
    let tx = approve_tx(
        usdc_address(),
        approve_calldata(spender_address(), U256::from(123_456_789u64)),
    );
    let state = state_with_request(&tx);
    let block = synced_block(&tx);
    assert_eq!(block.approval_limit, "123456789");

    let view = block.view(&tx, &state);
    assert!(!view.infinite);
    assert_eq!(view.amount_label, "123456789");
}

#[test]
fn account_holdings_win_over_global_assets() {
    let tx = approve_tx(usdc_address(), approve_calldata(spender_address(), U256::from(1u8)));
    let mut held = usdc();
    held.symbol = "USDC.e".to_owned();
    let mut state = state_with_request(&tx);
    state.assets.push(usdc());
    state.account_balances = Some(AccountBalances {
        address: Address::repeat_byte(0x11),
        asset_amounts: vec![AssetAmount {
            asset: held,
            amount: U256::from(10u8),
        }],
    });

    let view = synced_block(&tx).view(&tx, &state);
    assert_eq!(view.symbol, "USDC.e");
    assert_eq!(view.amount_label, "1 USDC.E");
}

#[test]
fn unknown_contract_falls_back_to_truncated_address() {
    let unknown: Address = "0x1111111111111111111111111111111111112222"
        .parse()
        .expect("unknown address");
    let tx = approve_tx(unknown, approve_calldata(spender_address(), U256::from(1u8)));
    let mut state = state_with_request(&tx);
    state.assets.push(usdc());

    let view = synced_block(&tx).view(&tx, &state);
    assert_eq!(view.symbol, "");
    assert_eq!(view.spending_label, "Spend 0x1111...12222 tokens");
}

#[test]
fn absent_fields_degrade_without_panicking() {
    let mut tx = approve_tx(usdc_address(), String::new());
    tx.to = None;
    tx.input = None;
    let block = synced_block(&tx);
    let view = block.view(&tx, &BackgroundState::default());
    assert_eq!(block.approval_limit, "");
    assert_eq!(view.spending_label, "Spend  tokens");
    assert!(!view.infinite);
    assert_eq!(view.spender, None);
}

#[test]
fn entering_edit_mode_never_dispatches() {
    let tx = approve_tx(usdc_address(), approve_calldata(spender_address(), U256::MAX));
    let store = RecordingStore::with_state(state_with_request(&tx));
    let mut block = synced_block(&tx);

    let outcome = block.handle_update_click(&tx, &store).expect("enter edit");
    assert_eq!(outcome, UpdateOutcome::EnteredEdit);
    assert!(block.changing);
    let state = store.state().expect("state");
    assert_eq!(block.view(&tx, &state).button_label, "Update spend limit");
    assert!(store.dispatched().is_empty());
}

#[test]
fn confirming_edit_dispatches_rewritten_call_data_once() {
    let original = approve_calldata(spender_address(), U256::MAX);
    let tx = approve_tx(usdc_address(), original.clone());
    let store = RecordingStore::with_state(state_with_request(&tx));
    let mut block = synced_block(&tx);

    block.handle_update_click(&tx, &store).expect("enter edit");
    block.set_approval_limit("2500000");
    let outcome = block.handle_update_click(&tx, &store).expect("confirm edit");

    let UpdateOutcome::Dispatched(updated) = outcome else {
        panic!("expected dispatch, got {outcome:?}");
    };
    let updated_input = updated.input.clone().expect("updated input");
    assert_eq!(&updated_input[..74], &original[..74]);
    assert_eq!(&updated_input[138..], &original[138..]);
    assert_eq!(
        &updated_input[74..138],
        number_to_32_bytes_hex("2500000").expect("encode")
    );
    assert_eq!(updated.nonce, tx.nonce);
    assert!(!block.changing);

    let dispatched = store.dispatched();
    assert_eq!(dispatched.len(), 1);
    assert_eq!(
        dispatched[0],
        BackgroundAction::UpdateTransactionOptions(updated.clone())
    );
    let state = store.state().expect("state");
    assert_eq!(
        state.transaction_construction.transaction_request,
        Some(updated.clone())
    );

    // The store echo reseeds the block from the new word.
    block.sync(&updated);
    let view = block.view(&updated, &state);
    assert!(!view.infinite);
    assert_eq!(view.amount_label, "2500000");
}

#[test]
fn invalid_limit_stays_in_edit_mode() {
    let tx = approve_tx(usdc_address(), approve_calldata(spender_address(), U256::from(9u8)));
    let store = RecordingStore::with_state(state_with_request(&tx));
    let mut block = synced_block(&tx);

    block.handle_update_click(&tx, &store).expect("enter edit");
    block.set_approval_limit("ten");
    let outcome = block.handle_update_click(&tx, &store).expect("confirm edit");

    let kept = outcome.clone();
    assert_eq!(kept, outcome);
    assert!(matches!(
        outcome,
        UpdateOutcome::Rejected(ApprovalError::InvalidAmount(_))
    ));
    assert!(block.changing);
    assert_eq!(block.error.as_deref(), Some(INVALID_SPEND_LIMIT));
    assert!(store.dispatched().is_empty());

    block.set_approval_limit("10");
    assert!(block.error.is_none());
}

#[test]
fn missing_call_data_leaves_edit_mode_without_dispatch() {
    let mut tx = approve_tx(usdc_address(), String::new());
    tx.input = None;
    let store = RecordingStore::with_state(state_with_request(&tx));
    let mut block = synced_block(&tx);

    block.handle_update_click(&tx, &store).expect("enter edit");
    block.set_approval_limit("1");
    let outcome = block.handle_update_click(&tx, &store).expect("confirm edit");
    assert_eq!(outcome, UpdateOutcome::Skipped);
    assert!(!block.changing);
    assert!(store.dispatched().is_empty());
}

#[test]
fn sync_does_not_clobber_edits_while_word_is_unchanged() {
    let tx = approve_tx(usdc_address(), approve_calldata(spender_address(), U256::from(3u8)));
    let mut block = synced_block(&tx);
    block.changing = true;
    block.set_approval_limit("42");
    block.sync(&tx);
    assert_eq!(block.approval_limit, "42");
    assert_eq!(approval_amount_word(tx.input.as_deref()).len(), 64);
}

#[test]
fn update_without_pending_request_is_rejected_by_store() {
    let tx = approve_tx(usdc_address(), approve_calldata(spender_address(), U256::from(3u8)));
    let err = reduce(
        BackgroundState::default(),
        BackgroundAction::UpdateTransactionOptions(tx),
    )
    .expect_err("no pending request");
    assert!(err.to_string().contains("no transaction request"));
}
