//! Deployment artifact loading.
//!
//! The contract deployment step writes two files into a shared directory:
//! `contract-address.json` (the deployed address) and `abi.json` (the
//! contract ABI). This crate resolves both into a [`Deployment`]. If either
//! file is absent or malformed the load fails with a typed error and the
//! gateway serves a "contract missing" response for every token route
//! instead of operating against a default address.

use alloy_primitives::Address;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the deployed contract address, as written by the deploy script.
pub const ADDRESS_FILE: &str = "contract-address.json";

/// File name of the contract ABI, as written by the deploy script.
pub const ABI_FILE: &str = "abi.json";

#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("contract address file not found: {0}")]
    AddressMissing(PathBuf),

    #[error("contract ABI file not found: {0}")]
    AbiMissing(PathBuf),

    #[error("malformed artifact {path}: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("ABI file is not a JSON array: {0}")]
    InvalidAbi(PathBuf),

    #[error("failed to read artifact {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Shape of `contract-address.json`: `{"address": "0x..."}`.
#[derive(Debug, Deserialize)]
struct AddressFile {
    address: Address,
}

/// Immutable reference to the deployed contract.
#[derive(Debug, Clone)]
pub struct Deployment {
    /// Deployed contract address.
    pub address: Address,
    /// Contract ABI as written by the deployment step.
    pub abi: serde_json::Value,
}

impl Deployment {
    /// Load the deployment artifacts from the shared directory.
    ///
    /// Both files must exist and parse. Missing files are reported per file
    /// so the operator can tell whether the deploy step ran at all or only
    /// partially.
    pub fn load(shared_dir: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let shared_dir = shared_dir.as_ref();

        let address_path = shared_dir.join(ADDRESS_FILE);
        if !address_path.exists() {
            return Err(ArtifactError::AddressMissing(address_path));
        }

        let abi_path = shared_dir.join(ABI_FILE);
        if !abi_path.exists() {
            return Err(ArtifactError::AbiMissing(abi_path));
        }

        let address_file: AddressFile = read_json(&address_path)?;
        let abi: serde_json::Value = read_json(&abi_path)?;

        if !abi.is_array() {
            return Err(ArtifactError::InvalidAbi(abi_path));
        }

        Ok(Self {
            address: address_file.address,
            abi,
        })
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| ArtifactError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;
    use std::fs;

    const ADDR: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";

    fn write_address(dir: &Path) {
        fs::write(
            dir.join(ADDRESS_FILE),
            format!(r#"{{"address": "{ADDR}"}}"#),
        )
        .unwrap();
    }

    fn write_abi(dir: &Path) {
        fs::write(
            dir.join(ABI_FILE),
            r#"[{"type": "function", "name": "transfer"}]"#,
        )
        .unwrap();
    }

    #[test]
    fn test_load_complete_deployment() {
        let dir = tempfile::tempdir().unwrap();
        write_address(dir.path());
        write_abi(dir.path());

        let deployment = Deployment::load(dir.path()).unwrap();
        assert_eq!(
            deployment.address,
            address!("0x5FbDB2315678afecb367f032d93F642f64180aa3")
        );
        assert!(deployment.abi.is_array());
    }

    #[test]
    fn test_missing_address_file() {
        let dir = tempfile::tempdir().unwrap();
        write_abi(dir.path());

        let err = Deployment::load(dir.path()).unwrap_err();
        assert!(matches!(err, ArtifactError::AddressMissing(_)));
    }

    #[test]
    fn test_missing_abi_file() {
        let dir = tempfile::tempdir().unwrap();
        write_address(dir.path());

        let err = Deployment::load(dir.path()).unwrap_err();
        assert!(matches!(err, ArtifactError::AbiMissing(_)));
    }

    #[test]
    fn test_empty_directory_reports_address_first() {
        let dir = tempfile::tempdir().unwrap();

        let err = Deployment::load(dir.path()).unwrap_err();
        assert!(matches!(err, ArtifactError::AddressMissing(_)));
    }

    #[test]
    fn test_malformed_address_json() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(ADDRESS_FILE), "not json").unwrap();
        write_abi(dir.path());

        let err = Deployment::load(dir.path()).unwrap_err();
        assert!(matches!(err, ArtifactError::Malformed { .. }));
    }

    #[test]
    fn test_abi_must_be_array() {
        let dir = tempfile::tempdir().unwrap();
        write_address(dir.path());
        fs::write(dir.path().join(ABI_FILE), r#"{"abi": []}"#).unwrap();

        let err = Deployment::load(dir.path()).unwrap_err();
        assert!(matches!(err, ArtifactError::InvalidAbi(_)));
    }
}
