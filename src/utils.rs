//! Utilities for the deploy scripts

use std::{str::FromStr, sync::Arc};

use ethers::{
    middleware::SignerMiddleware,
    providers::{Http, Middleware, Provider},
    signers::{LocalWallet, Signer},
};

use crate::errors::ScriptError;

/// Sets up the client with which to submit deployment transactions, from the
/// deployer private key and the RPC url of the target chain
pub async fn setup_client(
    priv_key: &str,
    rpc_url: &str,
) -> Result<Arc<SignerMiddleware<Provider<Http>, LocalWallet>>, ScriptError> {
    let provider = Provider::<Http>::try_from(rpc_url)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    let wallet = LocalWallet::from_str(priv_key)
        .map_err(|e| ScriptError::SignerUnavailable(e.to_string()))?;
    let chain_id = provider
        .get_chainid()
        .await
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?
        .as_u64();
    let client = Arc::new(SignerMiddleware::new(
        provider,
        wallet.with_chain_id(chain_id),
    ));

    Ok(client)
}
