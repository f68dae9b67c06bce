//! End-to-end tests against a local dev node with the JToken contract
//! deployed.
//!
//! These tests require:
//! - a hardhat/anvil node at the RPC URL in `tests/test-config.toml`
//! - the deployment artifacts (`contract-address.json`, `abi.json`) in the
//!   configured shared path
//!
//! Run with:
//! ```bash
//! cargo test --package gateway --test e2e -- --ignored
//! ```


use alloy_primitives::{address, Address, U256};
use setup::{load_test_config, setup_service};
use token::TokenError;

// Standard hardhat dev accounts. The deployer (account 0) owns the contract
// and holds the initial supply.
const OWNER_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
const OWNER_ADDR: Address = address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
const SPENDER_KEY: &str = "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";
const SPENDER_ADDR: Address = address!("0x70997970C51812dc3A010C7d01b50e0d17dc79C8");

fn tokens(n: u64) -> U256 {
    U256::from(n) * U256::from(10).pow(U256::from(18))
}

#[tokio::test]
#[ignore = "requires local dev node and deployed contract - see tests/test-config.toml"]
async fn test_token_info() {
    let config = load_test_config();
    let service = setup_service(&config).await;

    let info = service.info().await.expect("Failed to read token info");

    assert_eq!(info.name, "JToken");
    assert_eq!(info.symbol, "JTK");
    // Initial supply is 1000 tokens; mints only grow it.
    assert!(info.total_supply >= tokens(1000));
}

#[tokio::test]
#[ignore = "requires local dev node and deployed contract - see tests/test-config.toml"]
async fn test_unused_address_has_zero_balance() {
    let config = load_test_config();
    let service = setup_service(&config).await;

    // No dev script funds this address.
    let fresh = address!("0x000000000000000000000000000000000000dEaD");
    let balance = service.balance_of(fresh).await.expect("Failed to read balance");

    assert_eq!(balance, U256::ZERO);
}

#[tokio::test]
#[ignore = "requires local dev node and deployed contract - submits transactions"]
async fn test_approve_round_trip() {
    let config = load_test_config();
    let service = setup_service(&config).await;

    let hash = service
        .approve(SPENDER_ADDR, "200", OWNER_KEY)
        .await
        .expect("Failed to approve");
    assert!(hash.to_string().starts_with("0x"));

    let allowance = service
        .allowance(OWNER_ADDR, SPENDER_ADDR)
        .await
        .expect("Failed to read allowance");
    assert_eq!(allowance, tokens(200));
}

#[tokio::test]
#[ignore = "requires local dev node and deployed contract - submits transactions"]
async fn test_transfer_exceeding_balance_rejects_without_submitting() {
    let config = load_test_config();
    let service = setup_service(&config).await;

    let balance_before = service
        .balance_of(SPENDER_ADDR)
        .await
        .expect("Failed to read balance");

    // Account 1 never holds anywhere near the total supply.
    let result = service
        .transfer(OWNER_ADDR, "1000000000", SPENDER_KEY)
        .await;
    assert!(matches!(result, Err(TokenError::InsufficientBalance)));

    let balance_after = service
        .balance_of(SPENDER_ADDR)
        .await
        .expect("Failed to read balance");
    assert_eq!(balance_before, balance_after);
}

#[tokio::test]
#[ignore = "requires local dev node and deployed contract - submits transactions"]
async fn test_transfer_and_transfer_from_flow() {
    let config = load_test_config();
    let service = setup_service(&config).await;

    // Owner funds the spender account.
    service
        .transfer(SPENDER_ADDR, "10", OWNER_KEY)
        .await
        .expect("Failed to transfer");

    // Owner approves the spender, who then pulls tokens back.
    service
        .approve(SPENDER_ADDR, "5", OWNER_KEY)
        .await
        .expect("Failed to approve");
    let hash = service
        .transfer_from(OWNER_ADDR, SPENDER_ADDR, "5", SPENDER_KEY)
        .await
        .expect("Failed to transferFrom");
    assert!(hash.to_string().starts_with("0x"));

    // Pulling more than the remaining allowance is rejected client-side.
    let result = service
        .transfer_from(OWNER_ADDR, SPENDER_ADDR, "5", SPENDER_KEY)
        .await;
    assert!(matches!(result, Err(TokenError::AllowanceTooLow)));
}

#[tokio::test]
#[ignore = "requires local dev node and deployed contract - submits transactions"]
async fn test_mint_by_non_owner_reverts() {
    let config = load_test_config();
    let service = setup_service(&config).await;

    // Authorization is the contract's job; the gateway forwards the revert.
    let result = service.mint(SPENDER_ADDR, "10", SPENDER_KEY).await;
    assert!(matches!(result, Err(TokenError::Submission(_))));
}
