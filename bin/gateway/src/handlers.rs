//! Request handlers for the token routes.
//!
//! Each handler validates its fields, resolves the service (404 when the
//! contract reference is absent), and delegates. Responses are one JSON
//! object per call; numeric values are decimal strings in smallest units.

use crate::dto::{
    AllowanceQuery, AllowanceResponse, ApproveRequest, BalanceQuery, BalanceResponse, MintRequest,
    TokenInfoResponse, TransferFromRequest, TransferRequest, TxResponse,
};
use crate::error::ApiError;
use crate::validate::{self, Rule};
use crate::AppState;
use alloy_primitives::Address;
use alloy_provider::Provider;
use axum::extract::{Query, State};
use axum::Json;
use serde_json::json;
use token::TokenError;

fn parse_address(value: &str) -> Result<Address, ApiError> {
    value
        .trim()
        .parse()
        .map_err(|_| ApiError::from(TokenError::InvalidAddress(value.to_string())))
}

/// `GET /health` — liveness check.
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// `GET /token/info` — name, symbol, and total supply.
pub async fn token_info<P>(
    State(state): State<AppState<P>>,
) -> Result<Json<TokenInfoResponse>, ApiError>
where
    P: Provider + Clone + Send + Sync,
{
    let service = state.service()?;
    let info = service.info().await?;

    Ok(Json(TokenInfoResponse {
        name: info.name,
        symbol: info.symbol,
        total_supply: info.total_supply.to_string(),
    }))
}

/// `GET /token/balance?address=0x...` — token balance of an address.
pub async fn balance<P>(
    State(state): State<AppState<P>>,
    Query(query): Query<BalanceQuery>,
) -> Result<Json<BalanceResponse>, ApiError>
where
    P: Provider + Clone + Send + Sync,
{
    validate::check(&[("address", &query.address, Rule::Address)])
        .map_err(ApiError::validation)?;
    let service = state.service()?;

    let address = parse_address(&query.address)?;
    let balance = service.balance_of(address).await?;

    Ok(Json(BalanceResponse {
        balance: balance.to_string(),
    }))
}

/// `GET /token/allowance?owner=0x...&spender=0x...` — allowance granted by
/// owner to spender.
pub async fn allowance<P>(
    State(state): State<AppState<P>>,
    Query(query): Query<AllowanceQuery>,
) -> Result<Json<AllowanceResponse>, ApiError>
where
    P: Provider + Clone + Send + Sync,
{
    validate::check(&[
        ("owner", &query.owner, Rule::Address),
        ("spender", &query.spender, Rule::Address),
    ])
    .map_err(ApiError::validation)?;
    let service = state.service()?;

    let owner = parse_address(&query.owner)?;
    let spender = parse_address(&query.spender)?;
    let allowance = service.allowance(owner, spender).await?;

    Ok(Json(AllowanceResponse {
        allowance: allowance.to_string(),
    }))
}

/// `POST /token/transfer` — transfer from the key's account.
pub async fn transfer<P>(
    State(state): State<AppState<P>>,
    Json(req): Json<TransferRequest>,
) -> Result<Json<TxResponse>, ApiError>
where
    P: Provider + Clone + Send + Sync,
{
    validate::check(&[
        ("to", &req.to, Rule::Address),
        ("amount", &req.amount, Rule::Amount),
        ("privateKey", &req.private_key, Rule::PrivateKey),
    ])
    .map_err(ApiError::validation)?;
    let service = state.service()?;

    let to = parse_address(&req.to)?;
    let hash = service.transfer(to, &req.amount, &req.private_key).await?;
    state.metrics.record_submission("transfer");

    Ok(Json(TxResponse {
        hash: hash.to_string(),
    }))
}

/// `POST /token/mint` — mint to an address; owner-only is enforced by the
/// contract itself.
pub async fn mint<P>(
    State(state): State<AppState<P>>,
    Json(req): Json<MintRequest>,
) -> Result<Json<TxResponse>, ApiError>
where
    P: Provider + Clone + Send + Sync,
{
    validate::check(&[
        ("to", &req.to, Rule::Address),
        ("amount", &req.amount, Rule::Amount),
        ("privateKey", &req.private_key, Rule::PrivateKey),
    ])
    .map_err(ApiError::validation)?;
    let service = state.service()?;

    let to = parse_address(&req.to)?;
    let hash = service.mint(to, &req.amount, &req.private_key).await?;
    state.metrics.record_submission("mint");

    Ok(Json(TxResponse {
        hash: hash.to_string(),
    }))
}

/// `POST /token/approve` — approve a spender for the key's account.
pub async fn approve<P>(
    State(state): State<AppState<P>>,
    Json(req): Json<ApproveRequest>,
) -> Result<Json<TxResponse>, ApiError>
where
    P: Provider + Clone + Send + Sync,
{
    validate::check(&[
        ("spender", &req.spender, Rule::Address),
        ("amount", &req.amount, Rule::Amount),
        ("privateKey", &req.private_key, Rule::PrivateKey),
    ])
    .map_err(ApiError::validation)?;
    let service = state.service()?;

    let spender = parse_address(&req.spender)?;
    let hash = service
        .approve(spender, &req.amount, &req.private_key)
        .await?;
    state.metrics.record_submission("approve");

    Ok(Json(TxResponse {
        hash: hash.to_string(),
    }))
}

/// `POST /token/transfer-from` — spend an allowance on behalf of `from`.
pub async fn transfer_from<P>(
    State(state): State<AppState<P>>,
    Json(req): Json<TransferFromRequest>,
) -> Result<Json<TxResponse>, ApiError>
where
    P: Provider + Clone + Send + Sync,
{
    validate::check(&[
        ("from", &req.from, Rule::Address),
        ("to", &req.to, Rule::Address),
        ("amount", &req.amount, Rule::Amount),
        ("privateKey", &req.private_key, Rule::PrivateKey),
    ])
    .map_err(ApiError::validation)?;
    let service = state.service()?;

    let from = parse_address(&req.from)?;
    let to = parse_address(&req.to)?;
    let hash = service
        .transfer_from(from, to, &req.amount, &req.private_key)
        .await?;
    state.metrics.record_submission("transfer_from");

    Ok(Json(TxResponse {
        hash: hash.to_string(),
    }))
}
