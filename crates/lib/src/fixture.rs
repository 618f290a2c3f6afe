//! Environment-selected test cases for the trace API
//!
//! Every `(Environment, TraceOperation)` pair maps to a [`CaseSet`]. Pairs
//! without cases are [`CaseSet::NotDefined`], which is a valid state and
//! runs nothing. Fixture documents are read once per call and any decode
//! failure is reported as [`StarkTraceError::Fixture`], aborting setup
//! before a single case runs.

use serde::de::DeserializeOwned;
use serde_json::json;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    codec::{decode, decode_fixture, encode_value},
    constant::{
        fixtures::{
            block_trace_file, invoke_trace_file, REJECTED_TRACE_CODE, REJECTED_TRACE_DATA,
            REJECTED_TRACE_MESSAGE, REJECTED_TRANSACTION_HASH, SEPOLIA_INVOKE_TRACE_HASH,
            SEPOLIA_TRACE_BLOCK_HASH, SIMULATE_INVOKE_INPUT_FILE, SIMULATE_INVOKE_OUTPUT_FILE,
            UNKNOWN_BLOCK_HASH, UNKNOWN_TRANSACTION_HASH,
        },
        METHOD_TRACE_BLOCK_TRANSACTIONS, METHOD_TRACE_TRANSACTION,
    },
    environment::{Environment, TraceOperation},
    error::StarkTraceError,
    provider::method::simulate_transactions::SimulateTransactionsRequest,
    rpc_error::{KnownRpcError, RpcError},
    transport::FixtureTransport,
    types::{
        BlockId, Felt, SimulateTransactionInput, SimulateTransactionOutput, SimulatedTransaction,
        TraceWithHash, TransactionTrace,
    },
};

/// Reads fixture documents from one directory.
#[derive(Debug, Clone)]
pub struct FixtureLoader {
    dir: PathBuf,
}

impl FixtureLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read(&self, file: &str) -> Result<Vec<u8>, StarkTraceError> {
        let path = self.dir.join(file);
        fs::read(&path).map_err(|e| {
            StarkTraceError::Fixture(format!("Failed to read {}: {e}", path.display()))
        })
    }

    /// Decode a whole document.
    pub fn load<T: DeserializeOwned>(&self, file: &str) -> Result<T, StarkTraceError> {
        decode(&self.read(file)?).map_err(|e| StarkTraceError::Fixture(format!("{file}: {e}")))
    }

    /// Decode the `result` member of a captured response document.
    pub fn load_result<T: DeserializeOwned>(&self, file: &str) -> Result<T, StarkTraceError> {
        decode_fixture(&self.read(file)?)
            .map_err(|e| StarkTraceError::Fixture(format!("{file}: {e}")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expected<T> {
    Output(T),
    Error(RpcError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FixtureCase<I, T> {
    pub name: String,
    pub input: I,
    pub expected: Expected<T>,
}

impl<I, T> FixtureCase<I, T> {
    pub fn output(name: impl Into<String>, input: I, output: T) -> Self {
        Self { name: name.into(), input, expected: Expected::Output(output) }
    }

    pub fn error(name: impl Into<String>, input: I, error: impl Into<RpcError>) -> Self {
        Self { name: name.into(), input, expected: Expected::Error(error.into()) }
    }
}

/// Ordered cases for one operation, or an explicit absence of cases.
#[derive(Debug, Clone, PartialEq)]
pub enum CaseSet<I, T> {
    NotDefined,
    Cases(Vec<FixtureCase<I, T>>),
}

impl<I, T> CaseSet<I, T> {
    pub fn is_defined(&self) -> bool {
        matches!(self, CaseSet::Cases(_))
    }

    pub fn cases(&self) -> &[FixtureCase<I, T>] {
        match self {
            CaseSet::NotDefined => &[],
            CaseSet::Cases(cases) => cases,
        }
    }

    pub fn len(&self) -> usize {
        self.cases().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases().is_empty()
    }
}

pub type TraceTransactionCases = CaseSet<Felt, TransactionTrace>;
pub type SimulateTransactionsCases =
    CaseSet<SimulateTransactionsRequest, Vec<SimulatedTransaction>>;
pub type TraceBlockTransactionsCases = CaseSet<BlockId, Vec<TraceWithHash>>;

/// The case set of one operation, typed by that operation's input and output.
#[derive(Debug, Clone, PartialEq)]
pub enum OperationCases {
    TraceTransaction(TraceTransactionCases),
    SimulateTransactions(SimulateTransactionsCases),
    TraceBlockTransactions(TraceBlockTransactionsCases),
}

impl OperationCases {
    pub fn operation(&self) -> TraceOperation {
        match self {
            OperationCases::TraceTransaction(_) => TraceOperation::TraceTransaction,
            OperationCases::SimulateTransactions(_) => TraceOperation::SimulateTransactions,
            OperationCases::TraceBlockTransactions(_) => TraceOperation::TraceBlockTransactions,
        }
    }

    pub fn is_defined(&self) -> bool {
        match self {
            OperationCases::TraceTransaction(cases) => cases.is_defined(),
            OperationCases::SimulateTransactions(cases) => cases.is_defined(),
            OperationCases::TraceBlockTransactions(cases) => cases.is_defined(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            OperationCases::TraceTransaction(cases) => cases.len(),
            OperationCases::SimulateTransactions(cases) => cases.len(),
            OperationCases::TraceBlockTransactions(cases) => cases.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Cases for `operation` in `environment`. Defined for every pair.
pub fn fixtures_for(
    environment: Environment,
    operation: TraceOperation,
    loader: &FixtureLoader,
) -> Result<OperationCases, StarkTraceError> {
    let cases = match operation {
        TraceOperation::TraceTransaction => {
            OperationCases::TraceTransaction(trace_transaction_cases(environment, loader)?)
        }
        TraceOperation::SimulateTransactions => {
            OperationCases::SimulateTransactions(simulate_transactions_cases(environment, loader)?)
        }
        TraceOperation::TraceBlockTransactions => OperationCases::TraceBlockTransactions(
            trace_block_transactions_cases(environment, loader)?,
        ),
    };

    log::debug!("{environment}/{operation}: {} cases", cases.len());
    Ok(cases)
}

pub fn trace_transaction_cases(
    environment: Environment,
    loader: &FixtureLoader,
) -> Result<TraceTransactionCases, StarkTraceError> {
    match environment {
        Environment::Mock => {
            let trace: TransactionTrace =
                loader.load_result(&invoke_trace_file(SEPOLIA_INVOKE_TRACE_HASH))?;
            let rejected = RpcError::new(REJECTED_TRACE_CODE, REJECTED_TRACE_MESSAGE)
                .with_data(REJECTED_TRACE_DATA);

            Ok(CaseSet::Cases(vec![
                FixtureCase::output(
                    "sepolia invoke trace",
                    fixture_felt(SEPOLIA_INVOKE_TRACE_HASH)?,
                    trace,
                ),
                FixtureCase::error(
                    "unknown transaction hash",
                    fixture_felt(UNKNOWN_TRANSACTION_HASH)?,
                    KnownRpcError::HashNotFound,
                ),
                FixtureCase::error(
                    "rejected transaction",
                    fixture_felt(REJECTED_TRANSACTION_HASH)?,
                    rejected,
                ),
            ]))
        }
        Environment::Devnet | Environment::Mainnet => Ok(CaseSet::NotDefined),
    }
}

pub fn simulate_transactions_cases(
    environment: Environment,
    loader: &FixtureLoader,
) -> Result<SimulateTransactionsCases, StarkTraceError> {
    match environment {
        Environment::Mainnet => {
            let input: SimulateTransactionInput = loader.load(SIMULATE_INVOKE_INPUT_FILE)?;
            let output: SimulateTransactionOutput = loader.load(SIMULATE_INVOKE_OUTPUT_FILE)?;

            Ok(CaseSet::Cases(vec![FixtureCase::output(
                "simulate invoke",
                SimulateTransactionsRequest::from(input),
                output.txns,
            )]))
        }
        Environment::Mock | Environment::Devnet => Ok(CaseSet::NotDefined),
    }
}

pub fn trace_block_transactions_cases(
    environment: Environment,
    loader: &FixtureLoader,
) -> Result<TraceBlockTransactionsCases, StarkTraceError> {
    match environment {
        Environment::Mock => {
            let traces: Vec<TraceWithHash> =
                loader.load_result(&block_trace_file(SEPOLIA_TRACE_BLOCK_HASH))?;

            Ok(CaseSet::Cases(vec![
                FixtureCase::output(
                    "sepolia block traces",
                    BlockId::hash(fixture_felt(SEPOLIA_TRACE_BLOCK_HASH)?),
                    traces,
                ),
                FixtureCase::error(
                    "unknown block",
                    BlockId::hash(fixture_felt(UNKNOWN_BLOCK_HASH)?),
                    KnownRpcError::BlockNotFound,
                ),
            ]))
        }
        // Devnet has no block trace endpoint
        Environment::Devnet => Ok(CaseSet::NotDefined),
        Environment::Mainnet => Ok(CaseSet::NotDefined),
    }
}

fn fixture_felt(hex: &str) -> Result<Felt, StarkTraceError> {
    Felt::from_hex(hex).map_err(|e| StarkTraceError::Fixture(format!("{hex}: {e}")))
}

/// Build the fixture node serving the mock environment's cases.
///
/// Unknown hashes and blocks fall back to the node's not-found errors.
pub fn mock_transport(loader: &FixtureLoader) -> Result<FixtureTransport, StarkTraceError> {
    let mut transport = FixtureTransport::new()
        .with_fallback(METHOD_TRACE_TRANSACTION, KnownRpcError::HashNotFound.rpc_error())
        .with_fallback(METHOD_TRACE_BLOCK_TRANSACTIONS, KnownRpcError::BlockNotFound.rpc_error());

    for case in trace_transaction_cases(Environment::Mock, loader)?.cases() {
        let params = json!({ "transaction_hash": case.input });
        transport = match &case.expected {
            Expected::Output(trace) => {
                transport.with_result(METHOD_TRACE_TRANSACTION, params, encode_value(trace)?)
            }
            Expected::Error(error) => {
                transport.with_error(METHOD_TRACE_TRANSACTION, params, error.clone())
            }
        };
    }

    for case in trace_block_transactions_cases(Environment::Mock, loader)?.cases() {
        let params = json!({ "block_id": case.input });
        transport = match &case.expected {
            Expected::Output(traces) => {
                transport.with_result(METHOD_TRACE_BLOCK_TRANSACTIONS, params, encode_value(traces)?)
            }
            Expected::Error(error) => {
                transport.with_error(METHOD_TRACE_BLOCK_TRANSACTIONS, params, error.clone())
            }
        };
    }

    Ok(transport)
}
