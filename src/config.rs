use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// Chain node HTTP endpoint of the local devnet.
pub const DEFAULT_NODE_URL: &str = "http://localhost:8889";
/// Wallet daemon HTTP endpoint of the local devnet.
pub const DEFAULT_WALLET_URL: &str = "http://localhost:9899";

/// Script that brings up the node / wallet pair.
pub const BOOTSTRAP_SCRIPT: &str = "tests/startupNodeos.py";
/// Contract deployment CLI, relative to the chain build tree.
pub const CLEOS_BIN: &str = "programs/cleos/cleos";
/// Kill-by-name tool used by shutdown.
pub const PKILL_BIN: &str = "/usr/bin/pkill";

/// Process name of the chain node.
pub const NODE_PROCESS: &str = "nodeos";
/// Process name of the wallet daemon.
pub const WALLET_PROCESS: &str = "keosd";

// pkill exits 1 when no process matched the name
pub(crate) const PKILL_NO_MATCH: i32 = 1;

/// Cap on captured output per stream, in bytes.
pub const MAX_CAPTURED_OUTPUT: usize = 500 * 1024;

/// Token ticker used in quantity strings.
pub const COIN_SYMBOL: &str = "FIO";
/// Decimals in the token representation.
pub const COIN_DECIMALS: u8 = 4;
/// Base units per whole token.
pub const COIN_VALUE: u64 = 10u64.pow(COIN_DECIMALS as u32);

// Resource quantity granted to freshly created accounts (RAM / NET / CPU)
const DEFAULT_RESOURCE_QUANTITY: &str = "1000.0000 FIO";

// Functions helpers for serde defaults
fn default_node_url() -> String {
    DEFAULT_NODE_URL.to_owned()
}

fn default_wallet_url() -> String {
    DEFAULT_WALLET_URL.to_owned()
}

fn default_system_account() -> String {
    String::from("fio.system")
}

fn default_system_account_key() -> String {
    // devnet-only key, shipped with the bootstrap genesis
    String::from("5KBX1dwHME4VyuUss2sYM25D5ZTDvyYrbEz37UJqwAVAsR4tGuY")
}

fn default_token_account() -> String {
    String::from("eosio.token")
}

fn default_finance_account() -> String {
    String::from("fio.finance")
}

fn default_resource_quantity() -> String {
    DEFAULT_RESOURCE_QUANTITY.to_owned()
}

fn default_name_register_expiration() -> u64 {
    // one year, in seconds
    31_561_920
}

fn default_log_level() -> u8 {
    3
}

fn default_finalization_time() -> u64 {
    20
}

fn default_max_account_creation_attempts() -> u32 {
    3
}

/// Settings consumed by every harness component.
///
/// Built once (from [`Default`] or a partial JSON document) and shared by
/// reference; nothing in the crate mutates it afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// Chain node HTTP endpoint.
    #[serde(default = "default_node_url")]
    pub node_url: String,
    /// Wallet daemon HTTP endpoint.
    #[serde(default = "default_wallet_url")]
    pub wallet_url: String,
    /// Privileged system account.
    #[serde(default = "default_system_account")]
    pub system_account: String,
    /// Private key of the system account.
    #[serde(default = "default_system_account_key")]
    pub system_account_key: String,
    /// Account hosting the token contract.
    #[serde(default = "default_token_account")]
    pub token_account: String,
    /// Account hosting the finance contract.
    #[serde(default = "default_finance_account")]
    pub finance_account: String,
    /// Private key of the finance account.
    #[serde(default = "default_system_account_key")]
    pub finance_account_key: String,
    /// RAM purchase quantity for newly created accounts.
    #[serde(default = "default_resource_quantity")]
    pub new_account_buy_ram: String,
    /// NET stake quantity for newly created accounts.
    #[serde(default = "default_resource_quantity")]
    pub new_account_stake_net: String,
    /// CPU stake quantity for newly created accounts.
    #[serde(default = "default_resource_quantity")]
    pub new_account_stake_cpu: String,
    /// Transfer the staked quantities to the new account instead of delegating.
    #[serde(default)]
    pub new_account_transfer: bool,
    /// Name registration lifetime, in seconds.
    #[serde(default = "default_name_register_expiration")]
    pub name_register_expiration_secs: u64,
    /// Diagnostic verbosity, 1 (errors only) to 5 (trace).
    #[serde(default = "default_log_level")]
    pub log_level: u8,
    /// Delay before a chain write is considered settled, in milliseconds.
    #[serde(default = "default_finalization_time")]
    pub finalization_time_ms: u64,
    /// Payment features toggle.
    #[serde(default)]
    pub payments_enabled: bool,
    /// Bound on account creation retries by harness callers.
    #[serde(default = "default_max_account_creation_attempts")]
    pub max_account_creation_attempts: u32,
    /// Per-operation protocol fees.
    #[serde(default)]
    pub fees: FeeSchedule,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            node_url: default_node_url(),
            wallet_url: default_wallet_url(),
            system_account: default_system_account(),
            system_account_key: default_system_account_key(),
            token_account: default_token_account(),
            finance_account: default_finance_account(),
            finance_account_key: default_system_account_key(),
            new_account_buy_ram: default_resource_quantity(),
            new_account_stake_net: default_resource_quantity(),
            new_account_stake_cpu: default_resource_quantity(),
            new_account_transfer: false,
            name_register_expiration_secs: default_name_register_expiration(),
            log_level: default_log_level(),
            finalization_time_ms: default_finalization_time(),
            payments_enabled: false,
            max_account_creation_attempts: default_max_account_creation_attempts(),
            fees: FeeSchedule::default(),
        }
    }
}

impl HarnessConfig {
    /// Maps the numeric threshold onto the log facade.
    ///
    /// 0 disables logging entirely; values above 5 clamp to trace.
    pub fn level_filter(&self) -> LevelFilter {
        match self.log_level {
            0 => LevelFilter::Off,
            1 => LevelFilter::Error,
            2 => LevelFilter::Warn,
            3 => LevelFilter::Info,
            4 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Installs an `env_logger` with the config threshold as default filter.
///
/// `RUST_LOG` still wins when set. Calling this more than once is a no-op,
/// so tests can call it freely.
pub fn init_logging(config: &HarnessConfig) {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.level_filter().to_string()),
    )
    .try_init();
}

/// Chain operations carrying a protocol fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChainOperation {
    /// Register a domain.
    DomainRegister,
    /// Register a name under a domain.
    NameRegister,
    /// Transfer a domain to another account.
    DomainTransfer,
    /// Transfer a name to another account.
    NameTransfer,
    /// Resolve a name.
    NameLookup,
    /// Update the address bound to a name.
    AddressUpdate,
    /// Transfer tokens.
    TokenTransfer,
    /// Update metadata attached to a name.
    MetadataUpdate,
}

/// Fixed per-operation fees, in base units.
///
/// Every operation has exactly one fee; the table is read-only after
/// construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeeSchedule {
    /// Domain registration fee.
    pub domain_register: u64,
    /// Name registration fee.
    pub name_register: u64,
    /// Domain transfer fee.
    pub domain_transfer: u64,
    /// Name transfer fee.
    pub name_transfer: u64,
    /// Name lookup fee.
    pub name_lookup: u64,
    /// Address update fee.
    pub address_update: u64,
    /// Token transfer fee.
    pub token_transfer: u64,
    /// Metadata update fee.
    pub metadata_update: u64,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            domain_register: 14 * COIN_VALUE,
            name_register: COIN_VALUE,
            domain_transfer: 14 * COIN_VALUE,
            name_transfer: COIN_VALUE / 10,
            name_lookup: COIN_VALUE / 10,
            address_update: COIN_VALUE / 10,
            token_transfer: COIN_VALUE / 10,
            metadata_update: COIN_VALUE / 10,
        }
    }
}

impl FeeSchedule {
    /// Fee for `op`, in base units.
    pub fn fee(&self, op: ChainOperation) -> u64 {
        match op {
            ChainOperation::DomainRegister => self.domain_register,
            ChainOperation::NameRegister => self.name_register,
            ChainOperation::DomainTransfer => self.domain_transfer,
            ChainOperation::NameTransfer => self.name_transfer,
            ChainOperation::NameLookup => self.name_lookup,
            ChainOperation::AddressUpdate => self.address_update,
            ChainOperation::TokenTransfer => self.token_transfer,
            ChainOperation::MetadataUpdate => self.metadata_update,
        }
    }
}
