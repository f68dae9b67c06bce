//! HTTP layer of the token gateway.
//!
//! The router and handlers are generic over the provider so tests can run
//! them without a live RPC node. State is passed explicitly; there are no
//! ambient globals beyond the metrics registry.

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod validate;

use crate::error::ApiError;
use crate::metrics::Metrics;
use alloy_provider::Provider;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use token::{TokenError, TokenService};

/// Shared application state.
///
/// `service` is `None` when the deployment artifacts were absent at startup;
/// every token route then answers with `contract_missing`.
#[derive(Clone)]
pub struct AppState<P> {
    service: Option<Arc<TokenService<P>>>,
    pub metrics: Metrics,
}

impl<P> AppState<P>
where
    P: Provider + Clone,
{
    pub fn new(service: TokenService<P>, metrics: Metrics) -> Self {
        Self {
            service: Some(Arc::new(service)),
            metrics,
        }
    }

    /// State without a contract reference; the gateway fails closed.
    pub const fn empty(metrics: Metrics) -> Self {
        Self {
            service: None,
            metrics,
        }
    }

    pub(crate) fn service(&self) -> Result<&TokenService<P>, ApiError> {
        self.service
            .as_deref()
            .ok_or_else(|| ApiError::from(TokenError::ContractMissing))
    }
}

/// Build the gateway router.
pub fn router<P>(state: AppState<P>) -> Router
where
    P: Provider + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(handlers::health))
        .route("/token/info", get(handlers::token_info))
        .route("/token/balance", get(handlers::balance))
        .route("/token/allowance", get(handlers::allowance))
        .route("/token/transfer", post(handlers::transfer))
        .route("/token/mint", post(handlers::mint))
        .route("/token/approve", post(handlers::approve))
        .route("/token/transfer-from", post(handlers::transfer_from))
        .layer(axum::middleware::from_fn(metrics::track_requests))
        .with_state(state)
}
