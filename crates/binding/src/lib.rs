//! Contract bindings for the JToken ERC20 contract.
//!
//! The interface is generated with alloy's `sol!` macro and covers the
//! standard ERC20 surface plus the owner-only `mint` extension the deployed
//! contract exposes.

pub mod token;
