//! Web3 module - wallet session, contract calls, and the wallet provider seam.

mod web3_model;
mod web3_providers;
mod web3_service;
mod web3_traits;


pub use web3_model::{
    ContractAddresses, ContractKind, MilestoneData, Transaction, TransactionKind,
    TransactionRequest, TransactionStatus, WalletSession, Web3Snapshot,
};
pub use web3_providers::{JsonRpcWalletProvider, UnavailableWalletProvider};
pub use web3_service::Web3Service;
pub use web3_traits::{WalletProvider, Web3ServiceTrait};
