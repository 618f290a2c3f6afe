use anyhow::Result;
use std::{path::PathBuf, time::Duration};

use stark_trace_lib::{
    constant::DEFAULT_FIXTURE_DIR,
    fixture::{fixtures_for, FixtureLoader, OperationCases},
    log::init_logging,
    CallContext, Config, Environment, TraceOperation, TraceRpc,
};

use crate::common::{DEFAULT_TEST_ENVIRONMENT, FIXTURE_DIR, TEST_CALL_TIMEOUT_SECS};

/// Everything a suite needs: the client for the selected environment and its fixtures
#[derive(Clone)]
pub struct TestContext {
    pub rpc: TraceRpc,
    pub environment: Environment,
    pub loader: FixtureLoader,
}

impl TestContext {
    /// Context for the configured environment, defaulting to mock
    pub fn new() -> Result<Self> {
        let config = Self::get_test_config()?;
        let environment = Self::get_test_environment(&config)?;
        Self::build(environment, config)
    }

    pub fn with_environment(environment: Environment) -> Result<Self> {
        Self::build(environment, Self::get_test_config()?)
    }

    fn build(environment: Environment, config: Config) -> Result<Self> {
        // Every suite shares one subscriber; later calls find it installed
        init_logging(config.logging.format).ok();

        let loader = FixtureLoader::new(config.fixture_dir());
        let rpc = TraceRpc::from_config(environment, &config)?;

        Ok(Self { rpc, environment, loader })
    }

    /// `STARK_TRACE_ENV`, then the config file, then mock.
    /// Unknown values fail here, before any suite runs
    pub fn get_test_environment(config: &Config) -> Result<Environment> {
        Ok(config.environment_or(DEFAULT_TEST_ENVIRONMENT.parse()?)?)
    }

    /// Loaded config with the fixture dir resolved against this crate
    pub fn get_test_config() -> Result<Config> {
        let mut config = Config::load()?;
        if config.fixtures.dir == PathBuf::from(DEFAULT_FIXTURE_DIR) {
            config.fixtures.dir = PathBuf::from(FIXTURE_DIR);
        }
        Ok(config)
    }

    pub fn call_context(&self) -> CallContext {
        CallContext::new().with_timeout(Duration::from_secs(TEST_CALL_TIMEOUT_SECS))
    }

    pub fn cases(&self, operation: TraceOperation) -> Result<OperationCases> {
        Ok(fixtures_for(self.environment, operation, &self.loader)?)
    }
}
