//! Token service orchestration.
//!
//! Read operations issue a single contract call through the shared read
//! provider. Write operations derive a signer from the caller-supplied key,
//! run their pre-flight checks against chain state, then submit through a
//! per-request wallet provider. Submission resolves as soon as the node
//! accepts the transaction into its pool; confirmation tracking is left to
//! the caller.

use crate::{amount::parse_amount, TokenError};
use alloy_primitives::{Address, TxHash, U256};
use alloy_provider::Provider;
use binding::token::IERC20;
use tracing::{debug, error};

/// Token metadata, read in one round of concurrent calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenInfo {
    pub name: String,
    pub symbol: String,
    pub total_supply: U256,
}

/// Service bound to one deployed token contract.
pub struct TokenService<P> {
    provider: P,
    rpc_url: String,
    token: Address,
}

impl<P> TokenService<P>
where
    P: Provider + Clone,
{
    pub fn new(provider: P, rpc_url: impl Into<String>, token: Address) -> Self {
        Self {
            provider,
            rpc_url: rpc_url.into(),
            token,
        }
    }

    /// Address of the bound token contract.
    pub const fn token_address(&self) -> Address {
        self.token
    }

    /// Read name, symbol, and total supply concurrently.
    pub async fn info(&self) -> Result<TokenInfo, TokenError> {
        debug!("Querying token metadata: token={}", self.token);

        let contract = IERC20::new(self.token, &self.provider);
        let name_call = contract.name();
        let symbol_call = contract.symbol();
        let total_supply_call = contract.totalSupply();
        let (name, symbol, total_supply) = tokio::try_join!(
            name_call.call(),
            symbol_call.call(),
            total_supply_call.call(),
        )
        .map_err(|e| {
            error!("Token metadata query failed: {}", e);
            TokenError::Submission(e.to_string())
        })?;

        Ok(TokenInfo {
            name,
            symbol,
            total_supply,
        })
    }

    /// Read the token balance of `holder`.
    pub async fn balance_of(&self, holder: Address) -> Result<U256, TokenError> {
        debug!("Querying balance: token={}, holder={}", self.token, holder);

        let contract = IERC20::new(self.token, &self.provider);
        contract.balanceOf(holder).call().await.map_err(|e| {
            error!("Balance query failed for {}: {}", holder, e);
            TokenError::InvalidAddress(holder.to_string())
        })
    }

    /// Read the allowance granted by `owner` to `spender`.
    pub async fn allowance(&self, owner: Address, spender: Address) -> Result<U256, TokenError> {
        debug!(
            "Querying allowance: token={}, owner={}, spender={}",
            self.token, owner, spender
        );

        let contract = IERC20::new(self.token, &self.provider);
        contract.allowance(owner, spender).call().await.map_err(|e| {
            error!("Allowance query failed for {}/{}: {}", owner, spender, e);
            TokenError::InvalidAddress(format!("{owner}, {spender}"))
        })
    }

    /// Transfer tokens from the key's account to `to`.
    ///
    /// Pre-flight order: self-transfer, amount, on-chain balance. The
    /// self-transfer check runs first so it fires regardless of the amount.
    pub async fn transfer(
        &self,
        to: Address,
        amount: &str,
        private_key: &str,
    ) -> Result<TxHash, TokenError> {
        let signer = client::parse_signer(private_key)?;
        let sender = signer.address();

        if to == sender {
            return Err(TokenError::SameAddressTransfer);
        }

        let amount = parse_amount(amount)?;

        let balance = self.balance_of(sender).await?;
        if balance < amount {
            return Err(TokenError::InsufficientBalance);
        }

        debug!(
            "Submitting transfer: from={}, to={}, amount={}",
            sender, to, amount
        );
        let provider = client::create_wallet_provider(&self.rpc_url, signer)?;
        let contract = IERC20::new(self.token, &provider);
        let pending = contract
            .transfer(to, amount)
            .send()
            .await
            .map_err(|e| submission_failed("transfer", &e))?;

        Ok(*pending.tx_hash())
    }

    /// Mint tokens to `to`, signed by the key's account.
    ///
    /// Owner-only authorization is enforced by the contract itself; a
    /// non-owner key surfaces as a submission failure with the revert reason.
    pub async fn mint(
        &self,
        to: Address,
        amount: &str,
        private_key: &str,
    ) -> Result<TxHash, TokenError> {
        let signer = client::parse_signer(private_key)?;
        let amount = parse_amount(amount)?;

        debug!(
            "Submitting mint: owner={}, to={}, amount={}",
            signer.address(),
            to,
            amount
        );
        let provider = client::create_wallet_provider(&self.rpc_url, signer)?;
        let contract = IERC20::new(self.token, &provider);
        let pending = contract
            .mint(to, amount)
            .send()
            .await
            .map_err(|e| submission_failed("mint", &e))?;

        Ok(*pending.tx_hash())
    }

    /// Approve `spender` to move tokens on behalf of the key's account.
    pub async fn approve(
        &self,
        spender: Address,
        amount: &str,
        private_key: &str,
    ) -> Result<TxHash, TokenError> {
        let signer = client::parse_signer(private_key)?;
        let amount = parse_amount(amount)?;

        debug!(
            "Submitting approve: owner={}, spender={}, amount={}",
            signer.address(),
            spender,
            amount
        );
        let provider = client::create_wallet_provider(&self.rpc_url, signer)?;
        let contract = IERC20::new(self.token, &provider);
        let pending = contract
            .approve(spender, amount)
            .send()
            .await
            .map_err(|e| submission_failed("approve", &e))?;

        Ok(*pending.tx_hash())
    }

    /// Move tokens from `from` to `to` using the key account's allowance.
    ///
    /// The allowance and owner-balance reads are independent and run
    /// concurrently; allowance shortfall is reported before balance shortfall
    /// when both checks fail.
    pub async fn transfer_from(
        &self,
        from: Address,
        to: Address,
        amount: &str,
        private_key: &str,
    ) -> Result<TxHash, TokenError> {
        let signer = client::parse_signer(private_key)?;
        let spender = signer.address();

        let amount = parse_amount(amount)?;

        let contract = IERC20::new(self.token, &self.provider);
        let allowance_call = contract.allowance(from, spender);
        let balance_call = contract.balanceOf(from);
        let (allowance, owner_balance) = tokio::try_join!(
            allowance_call.call(),
            balance_call.call(),
        )
        .map_err(|e| {
            error!("transferFrom pre-check failed for {}: {}", from, e);
            TokenError::InvalidAddress(from.to_string())
        })?;

        if allowance < amount {
            return Err(TokenError::AllowanceTooLow);
        }
        if owner_balance < amount {
            return Err(TokenError::InsufficientBalance);
        }

        debug!(
            "Submitting transferFrom: from={}, to={}, spender={}, amount={}",
            from, to, spender, amount
        );
        let provider = client::create_wallet_provider(&self.rpc_url, signer)?;
        let contract = IERC20::new(self.token, &provider);
        let pending = contract
            .transferFrom(from, to, amount)
            .send()
            .await
            .map_err(|e| submission_failed("transferFrom", &e))?;

        Ok(*pending.tx_hash())
    }
}

fn submission_failed(op: &str, err: &alloy_contract::Error) -> TokenError {
    error!("{} submission failed: {}", op, err);
    TokenError::Submission(err.to_string())
}
