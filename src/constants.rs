//! Constants used in the deploy scripts

/// The default directory containing Hardhat build artifacts
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// The file extension of a build artifact
pub const ARTIFACT_EXTENSION: &str = "json";

/// The default path of the deployment record file
pub const DEFAULT_RECORD_PATH: &str = "deployment-info.txt";

/// The label preceding the contract address in the deployment record
pub const RECORD_ADDRESS_LABEL: &str = "Contract Address: ";

/// The label preceding the transaction hash in the deployment record
pub const RECORD_TX_HASH_LABEL: &str = "TxHash: ";

/// The default number of confirmations to wait for the deployment transaction
pub const NUM_DEPLOY_CONFIRMATIONS: usize = 1;

/// The default bound on the confirmation wait, in seconds
pub const DEFAULT_CONFIRMATION_TIMEOUT_SECS: u64 = 300;
