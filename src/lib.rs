//! Scripts for deploying the Cryptonout smart contracts to a SKALE chain.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod artifacts;
pub mod chain;
pub mod cli;
mod commands;
pub mod constants;
pub mod errors;
pub mod record;
pub mod runner;
mod solidity;
pub mod utils;
