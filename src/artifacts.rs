//! Resolution of compiled contract artifacts by contract name

use std::{fs, path::PathBuf};

use ethers::{abi::Abi, types::Bytes};
use serde::Deserialize;

use crate::{constants::ARTIFACT_EXTENSION, errors::ScriptError};

/// The ABI and deployment bytecode of a compiled contract,
/// parsed from a Hardhat-style build artifact
#[derive(Clone, Debug, Deserialize)]
pub struct ContractArtifact {
    /// The contract ABI
    pub abi: Abi,
    /// The contract deployment bytecode
    pub bytecode: Bytes,
}

/// A store of compiled contract artifacts, keyed by contract name
pub trait ArtifactStore {
    /// Loads the artifact for the named contract
    fn load(&self, contract: &str) -> Result<ContractArtifact, ScriptError>;
}

/// An artifact store backed by a directory of Hardhat build artifacts,
/// one `<Contract>.json` file per contract
pub struct DirArtifactStore {
    /// The directory containing the artifact files
    dir: PathBuf,
}

impl DirArtifactStore {
    /// Constructs a store over the given artifact directory
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }
}

impl ArtifactStore for DirArtifactStore {
    fn load(&self, contract: &str) -> Result<ContractArtifact, ScriptError> {
        let path = self.dir.join(format!("{}.{}", contract, ARTIFACT_EXTENSION));
        if !path.exists() {
            return Err(ScriptError::ArtifactMissing(format!(
                "no artifact for `{}` at {}",
                contract,
                path.display()
            )));
        }

        let raw = fs::read_to_string(&path).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;
        serde_json::from_str(&raw).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::{ArtifactStore, DirArtifactStore};
    use crate::errors::ScriptError;

    /// A minimal Hardhat artifact with a 4-argument constructor
    const TOKEN_ARTIFACT: &str = r#"{
        "contractName": "TokenX",
        "abi": [
            {
                "type": "constructor",
                "stateMutability": "nonpayable",
                "inputs": [
                    { "name": "name", "type": "string" },
                    { "name": "symbol", "type": "string" },
                    { "name": "supply", "type": "uint256" },
                    { "name": "owner", "type": "address" }
                ]
            }
        ],
        "bytecode": "0x6080604052"
    }"#;

    #[test]
    fn loads_hardhat_artifact() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("TokenX.json"), TOKEN_ARTIFACT).unwrap();

        let store = DirArtifactStore::new(dir.path().to_path_buf());
        let artifact = store.load("TokenX").unwrap();

        let constructor = artifact.abi.constructor().unwrap();
        assert_eq!(constructor.inputs.len(), 4);
        assert_eq!(artifact.bytecode.to_vec(), vec![0x60, 0x80, 0x60, 0x40, 0x52]);
    }

    #[test]
    fn missing_artifact_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirArtifactStore::new(dir.path().to_path_buf());

        let err = store.load("Unknown").unwrap_err();
        assert!(matches!(err, ScriptError::ArtifactMissing(_)));
    }

    #[test]
    fn malformed_artifact_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Broken.json"), "not json").unwrap();

        let store = DirArtifactStore::new(dir.path().to_path_buf());
        let err = store.load("Broken").unwrap_err();
        assert!(matches!(err, ScriptError::ArtifactParsing(_)));
    }
}
