//! Thin client for the chain node: one state query over HTTP and contract
//! deployment through the external CLI.

use std::sync::Arc;

use log::{error, info};
use reqwest::header::CONTENT_TYPE;
use serde_json::{json, Value};

use crate::command::{CommandOutput, CommandRunner, Shell};
use crate::config::{HarnessConfig, CLEOS_BIN};
use crate::error::HarnessError;
use crate::validate::{require_non_empty, require_non_empty_all};

/// Client for chain state queries and contract deployment.
///
/// Stateless across calls: every operation is a single request/response or
/// a single process invocation, with no retained session and no retry.
pub struct ChainClient {
    config: Arc<HarnessConfig>,
    http: reqwest::Client,
    runner: Arc<dyn CommandRunner>,
}

impl ChainClient {
    /// Client deploying contracts through the real shell.
    pub fn new(config: Arc<HarnessConfig>) -> Self {
        Self::with_runner(config, Arc::new(Shell))
    }

    /// Client with a caller-supplied command runner.
    pub fn with_runner(config: Arc<HarnessConfig>, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
            runner,
        }
    }

    /// Settings this client was built with.
    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Fetches account details from the node.
    ///
    /// POSTs `{"account_name": …}` to `/v1/chain/get_account` and passes the
    /// JSON response through unmodified. A non-success status becomes
    /// [`HarnessError::NonOkResponse`] carrying the response body; transport
    /// failures are logged and re-raised unchanged.
    pub async fn get_account(&self, account_name: &str) -> Result<Value, HarnessError> {
        require_non_empty("account_name", account_name)?;

        let url = format!("{}/v1/chain/get_account", self.config.node_url);
        let request = json!({ "account_name": account_name });

        let response = match self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json; charset=UTF-8")
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                error!("get_account request to {} failed: {}", url, err);
                return Err(err.into());
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("get_account returned {}: {}", status, body);
            return Err(HarnessError::NonOkResponse { status, body });
        }

        match response.json::<Value>().await {
            Ok(account) => Ok(account),
            Err(err) => {
                error!("get_account response was not valid JSON: {}", err);
                Err(err.into())
            }
        }
    }

    /// Deploys a contract with the external CLI.
    ///
    /// All four arguments are checked before anything runs; a zero exit
    /// status is the only success signal, no deployment read-back happens.
    pub async fn set_contract(
        &self,
        account: &str,
        contract_dir: &str,
        wasm_file: &str,
        abi_file: &str,
    ) -> Result<CommandOutput, HarnessError> {
        require_non_empty_all(&[
            ("account", account),
            ("contract_dir", contract_dir),
            ("wasm_file", wasm_file),
            ("abi_file", abi_file),
        ])?;

        let command = format!(
            "{} --url {} --wallet-url {} set contract -j {} {} {} {}",
            CLEOS_BIN,
            self.config.node_url,
            self.config.wallet_url,
            account,
            contract_dir,
            wasm_file,
            abi_file,
        );
        if log::log_enabled!(log::Level::Info) {
            info!("Executing command: {}", command);
        }

        match self.runner.execute(&command, false).await {
            Ok(output) => Ok(output),
            Err(err) => {
                error!("set contract for '{}' failed: {}", account, err);
                Err(err)
            }
        }
    }
}
