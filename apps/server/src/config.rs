use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use karuna_core::constants::DEFAULT_CURRENCY;
use karuna_core::web3::ContractAddresses;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    /// Display currency for formatted amounts
    pub currency: String,
    /// Load the built-in campaigns when no snapshot exists
    pub seed_catalog: bool,
    /// JSON-RPC endpoint of the wallet; no wallet when unset
    pub rpc_url: Option<String>,
    pub ipfs_gateway: String,
    pub contracts: ContractAddresses,
    pub log_format: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("KARUNA_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid KARUNA_LISTEN_ADDR")?;
        let db_path = std::env::var("KARUNA_DB_PATH").unwrap_or_else(|_| "./db/karuna.db".into());
        let cors_allow = std::env::var("KARUNA_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("KARUNA_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let currency = std::env::var("KARUNA_CURRENCY")
            .map(|c| c.trim().to_uppercase())
            .ok()
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());
        let seed_catalog = std::env::var("KARUNA_SEED_CATALOG")
            .map(|v| !matches!(v.trim().to_lowercase().as_str(), "0" | "false" | "no"))
            .unwrap_or(true);
        let ipfs_gateway =
            optional_var("KARUNA_IPFS_GATEWAY").unwrap_or_else(|| "https://ipfs.io".into());
        let log_format = std::env::var("KARUNA_LOG_FORMAT").unwrap_or_else(|_| "text".into());

        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            currency,
            seed_catalog,
            rpc_url: optional_var("KARUNA_RPC_URL"),
            ipfs_gateway,
            contracts: ContractAddresses {
                donation: optional_var("KARUNA_DONATION_CONTRACT"),
                milestone: optional_var("KARUNA_MILESTONE_CONTRACT"),
                audit: optional_var("KARUNA_AUDIT_CONTRACT"),
            },
            log_format,
        })
    }
}

fn optional_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
