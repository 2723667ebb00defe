use sha2::{Digest, Sha256};

pub const BASE_FEE: u32                  = 100; // stroops per operation
pub const TX_TIMEOUT_SECS: u64           = 30;
pub const MAX_OPERATIONS: usize          = 100;

pub const DECIMAL_PLACES: u8             = 7;
pub const STROOPS_PER_UNIT: i64          = 10_000_000;

pub const COIN_PREFIX: &str              = "COIN";
pub const HOUR_CODE: &str                = "HOUR";
pub const MAX_ASSET_CODE_LEN: usize      = 12;

// Local model
pub const ADMIN_TRUST_LIMIT: i64         = 1_000_000;
pub const ADMIN_INITIAL_BALANCE: i64     = 100_000;

// Users
pub const USER_TRUST_LIMIT: i64          = 10_000;
pub const USER_INITIAL_BALANCE: i64      = 100;
pub const ADMIN_SIGNER_WEIGHT: u32       = 2;
pub const USER_MASTER_WEIGHT: u32        = 1;
pub const USER_LOW_THRESHOLD: u32        = 1;
pub const USER_MED_THRESHOLD: u32        = 1;
pub const USER_HIGH_THRESHOLD: u32       = 2;

// External bridge
pub const EXTERNAL_TRUST_LIMIT: i64      = 100_000;
pub const EXTERNAL_INITIAL_BALANCE: i64  = 10_000;
pub const EXTERNAL_LOCAL_OFFER: i64      = 10_000; // COINX sold for HOUR
pub const EXTERNAL_HOUR_OFFER: i64       = 1_000;  // HOUR sold for COINX

pub const TESTNET_HORIZON_URL: &str      = "https://horizon-testnet.stellar.org";
pub const FUTURENET_HORIZON_URL: &str    = "https://horizon-futurenet.stellar.org";
pub const LOCAL_HORIZON_URL: &str        = "http://localhost:8000";
pub const TESTNET_FRIENDBOT_URL: &str    = "https://friendbot.stellar.org";
pub const FUTURENET_FRIENDBOT_URL: &str  = "https://friendbot-futurenet.stellar.org";
pub const LOCAL_FRIENDBOT_URL: &str      = "http://localhost:8000/friendbot";

/// Network passphrase. Signatures are computed over a hash that includes
/// the SHA-256 of the passphrase, so a transaction signed for one network
/// is invalid on every other.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NetworkPassphrase {
    Public,
    Testnet,
    Futurenet,
    Standalone,
    Custom(String),
}

impl NetworkPassphrase {
    pub fn as_str(&self) -> &str {
        match self {
            NetworkPassphrase::Public => "Public Global Stellar Network ; September 2015",
            NetworkPassphrase::Testnet => "Test SDF Network ; September 2015",
            NetworkPassphrase::Futurenet => "Test SDF Future Network ; October 2022",
            NetworkPassphrase::Standalone => "Standalone Network ; February 2017",
            NetworkPassphrase::Custom(s) => s,
        }
    }

    pub fn network_id(&self) -> [u8; 32] {
        Sha256::digest(self.as_str().as_bytes()).into()
    }
}

impl std::fmt::Display for NetworkPassphrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
