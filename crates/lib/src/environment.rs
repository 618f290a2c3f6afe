use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{
    constant::{
        ENVIRONMENT_ENV, METHOD_SIMULATE_TRANSACTIONS, METHOD_TRACE_BLOCK_TRANSACTIONS,
        METHOD_TRACE_TRANSACTION,
    },
    error::StarkTraceError,
};

/// Where calls are sent for a run. Exactly one is active per dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Fixture-backed transport, no network.
    #[serde(alias = "fixture")]
    Mock,
    /// Local devnet node; lacks block trace support.
    Devnet,
    Mainnet,
}

impl Environment {
    pub const ALL: [Environment; 3] = [Environment::Mock, Environment::Devnet, Environment::Mainnet];

    /// Read the environment from `STARK_TRACE_ENV`, loading `.env` first.
    ///
    /// An absent or unrecognized value is a setup failure.
    pub fn from_env() -> Result<Self, StarkTraceError> {
        dotenv::dotenv().ok();

        let value = std::env::var(ENVIRONMENT_ENV).map_err(|_| {
            StarkTraceError::ConfigError(format!("{ENVIRONMENT_ENV} is not set"))
        })?;
        value.parse()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Mock => "mock",
            Environment::Devnet => "devnet",
            Environment::Mainnet => "mainnet",
        }
    }

    pub fn supports(&self, method: &str) -> bool {
        match self {
            Environment::Devnet => method != METHOD_TRACE_BLOCK_TRANSACTIONS,
            Environment::Mock | Environment::Mainnet => true,
        }
    }
}

impl FromStr for Environment {
    type Err = StarkTraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mock" | "fixture" => Ok(Environment::Mock),
            "devnet" => Ok(Environment::Devnet),
            "mainnet" => Ok(Environment::Mainnet),
            other => Err(StarkTraceError::ConfigError(format!(
                "Unknown environment '{other}', expected one of: mock, devnet, mainnet"
            ))),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The trace API operations a case set can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraceOperation {
    TraceTransaction,
    SimulateTransactions,
    TraceBlockTransactions,
}

impl TraceOperation {
    pub const ALL: [TraceOperation; 3] = [
        TraceOperation::TraceTransaction,
        TraceOperation::SimulateTransactions,
        TraceOperation::TraceBlockTransactions,
    ];

    pub fn method(&self) -> &'static str {
        match self {
            TraceOperation::TraceTransaction => METHOD_TRACE_TRANSACTION,
            TraceOperation::SimulateTransactions => METHOD_SIMULATE_TRANSACTIONS,
            TraceOperation::TraceBlockTransactions => METHOD_TRACE_BLOCK_TRANSACTIONS,
        }
    }
}

impl fmt::Display for TraceOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method())
    }
}
