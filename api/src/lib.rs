pub mod asset;
pub mod consts;
pub mod error;
pub mod keys;
pub mod rate;
pub mod sdk;
pub mod state;
pub mod tx;
pub mod utils;

pub mod prelude {
    pub use crate::asset::*;
    pub use crate::consts::*;
    pub use crate::error::*;
    pub use crate::keys::*;
    pub use crate::rate::*;
    pub use crate::sdk::*;
    pub use crate::state::*;
    pub use crate::tx::*;
    pub use crate::utils::*;
}

pub use stellar_strkey::ed25519::PublicKey;
pub use stellar_xdr::curr as xdr;
