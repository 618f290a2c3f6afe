use serde_json::Value;
use stark_trace_lib::{
    codec::{decode, decode_fixture, encode, roundtrip},
    constant::{
        fixtures::{
            block_trace_file, invoke_trace_file, SEPOLIA_INVOKE_TRACE_HASH,
            SEPOLIA_TRACE_BLOCK_HASH, SIMULATE_INVOKE_INPUT_FILE, SIMULATE_INVOKE_OUTPUT_FILE,
        },
        ENVIRONMENT_ENV,
    },
    fixture::{fixtures_for, FixtureLoader},
    types::{SimulateTransactionInput, SimulateTransactionOutput, TraceWithHash, TransactionTrace},
    Config, Environment, RpcError, TraceOperation,
};
use std::{fs, path::Path};
use tests::common::*;

fn read(file: &str) -> Vec<u8> {
    fs::read(Path::new(FIXTURE_DIR).join(file)).expect("Failed to read fixture")
}

/// decode(encode(decode(B))) == decode(B) for every trace document
#[test]
fn test_fixture_documents_round_trip() {
    let trace: TransactionTrace =
        decode_fixture(&read(&invoke_trace_file(SEPOLIA_INVOKE_TRACE_HASH))).unwrap();
    assert_eq!(roundtrip(&trace).unwrap(), trace);

    let traces: Vec<TraceWithHash> =
        decode_fixture(&read(&block_trace_file(SEPOLIA_TRACE_BLOCK_HASH))).unwrap();
    assert_eq!(roundtrip(&traces).unwrap(), traces);

    let input: SimulateTransactionInput = decode(&read(SIMULATE_INVOKE_INPUT_FILE)).unwrap();
    assert_eq!(roundtrip(&input).unwrap(), input);

    let output: SimulateTransactionOutput = decode(&read(SIMULATE_INVOKE_OUTPUT_FILE)).unwrap();
    assert_eq!(roundtrip(&output).unwrap(), output);
}

/// Re-encoding a trace keeps every field the node sent
#[test]
fn test_invoke_trace_encoding_is_lossless() {
    let raw = read(&invoke_trace_file(SEPOLIA_INVOKE_TRACE_HASH));
    let document: Value = serde_json::from_slice(&raw).unwrap();

    let trace: TransactionTrace = decode_fixture(&raw).unwrap();
    let encoded: Value = serde_json::from_slice(&encode(&trace).unwrap()).unwrap();

    assert_eq!(encoded, document["result"]);
}

/// Every environment/operation pair has a case set, possibly an empty one
#[test]
fn test_case_sets_defined_for_every_pair() {
    let loader = FixtureLoader::new(FIXTURE_DIR);

    for environment in Environment::ALL {
        for operation in TraceOperation::ALL {
            let cases = fixtures_for(environment, operation, &loader)
                .unwrap_or_else(|e| panic!("{environment}/{operation}: {e}"));
            let expected = match (environment, operation) {
                (Environment::Mock, TraceOperation::TraceTransaction) => 3,
                (Environment::Mock, TraceOperation::TraceBlockTransactions) => 2,
                (Environment::Mainnet, TraceOperation::SimulateTransactions) => 1,
                _ => 0,
            };
            assert_eq!(cases.len(), expected, "{environment}/{operation}");
            assert_eq!(cases.is_defined(), expected > 0, "{environment}/{operation}");
        }
    }
}

/// Errors are equal exactly when code, message and data are
#[test]
fn test_rpc_error_equality() {
    let base = RpcError::new(10, "No trace available for transaction").with_data("REJECTED");

    assert_eq!(base, RpcError::new(10, "No trace available for transaction").with_data("REJECTED"));
    assert_ne!(base, RpcError::new(11, "No trace available for transaction").with_data("REJECTED"));
    assert_ne!(base, RpcError::new(10, "No trace").with_data("REJECTED"));
    assert_ne!(base, RpcError::new(10, "No trace available for transaction").with_data("RECEIVED"));
    assert_ne!(base, RpcError::new(10, "No trace available for transaction"));
}

#[test]
fn test_invalid_environment_fails_fast() {
    assert!("testnet".parse::<Environment>().is_err());
}

/// The config file's environment applies when the variable is unset
#[test]
fn test_config_file_selects_environment() {
    let config = Config { environment: Some(Environment::Devnet), ..Config::default() };
    let expected = match std::env::var(ENVIRONMENT_ENV) {
        Ok(value) => value.parse().expect("Invalid test environment"),
        Err(_) => Environment::Devnet,
    };

    let environment = TestContext::get_test_environment(&config).unwrap();
    assert_eq!(environment, expected);
}
