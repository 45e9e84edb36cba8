//! Definitions of errors that can occur during the execution of the deploy scripts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur during the execution of the deploy scripts
#[derive(Debug)]
pub enum ScriptError {
    /// Error initializing the RPC client
    ClientInitialization(String),
    /// No signing account is configured on the client
    SignerUnavailable(String),
    /// The named contract has no build artifact
    ArtifactMissing(String),
    /// Error parsing a build artifact
    ArtifactParsing(String),
    /// Error constructing calldata for a contract method
    CalldataConstruction(String),
    /// The node rejected or reverted the deployment transaction
    TransactionRejected(String),
    /// The transaction was not confirmed within the configured bound
    ConfirmationTimeout(String),
    /// Error calling a contract method
    ContractInteraction(String),
    /// Error writing the deployment record
    RecordPersistence(String),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::ClientInitialization(s) => write!(f, "error initializing client: {}", s),
            ScriptError::SignerUnavailable(s) => write!(f, "no signer available: {}", s),
            ScriptError::ArtifactMissing(s) => write!(f, "missing build artifact: {}", s),
            ScriptError::ArtifactParsing(s) => write!(f, "error parsing artifact: {}", s),
            ScriptError::CalldataConstruction(s) => write!(f, "error constructing calldata: {}", s),
            ScriptError::TransactionRejected(s) => write!(f, "transaction rejected: {}", s),
            ScriptError::ConfirmationTimeout(s) => {
                write!(f, "timed out awaiting confirmation: {}", s)
            }
            ScriptError::ContractInteraction(s) => {
                write!(f, "error interacting with contract: {}", s)
            }
            ScriptError::RecordPersistence(s) => {
                write!(f, "error persisting deployment record: {}", s)
            }
        }
    }
}

impl Error for ScriptError {}
