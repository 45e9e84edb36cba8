//! Definitions of Solidity functions called during deployment

use ethers::contract::abigen;

abigen!(
    RelayerGeneContract,
    r#"[
        function deploy(bytes memory bytecode, bytes32 salt) external returns (address)
    ]"#,
);
