use stellar_strkey::ed25519::PublicKey;
use stellar_xdr::curr::{AlphaNum12, AlphaNum4, Asset, AssetCode12, AssetCode4, ChangeTrustAsset};

use crate::consts::*;
use crate::error::{ApiError, ApiResult};
use crate::keys::account_id;

/// A credit asset: code plus issuing account.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IssuedAsset {
    code: String,
    issuer: PublicKey,
}

impl IssuedAsset {
    pub fn new(code: &str, issuer: PublicKey) -> ApiResult<Self> {
        let valid = !code.is_empty()
            && code.len() <= MAX_ASSET_CODE_LEN
            && code.chars().all(|c| c.is_ascii_alphanumeric());
        if !valid {
            return Err(ApiError::InvalidAssetCode(code.to_string()));
        }
        Ok(Self { code: code.to_string(), issuer })
    }

    /// `COIN<name>` issued by the currency's mint account.
    pub fn coin(name: &str, mint: PublicKey) -> ApiResult<Self> {
        Self::new(&format!("{}{}", COIN_PREFIX, name), mint)
    }

    /// `HOUR` issued by a currency's external bridge account.
    pub fn hour(bridge: PublicKey) -> Self {
        Self { code: HOUR_CODE.to_string(), issuer: bridge }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn issuer(&self) -> &PublicKey {
        &self.issuer
    }

    pub fn to_xdr(&self) -> Asset {
        let issuer = account_id(&self.issuer);
        let bytes = self.code.as_bytes();
        if bytes.len() <= 4 {
            let mut code = [0u8; 4];
            code[..bytes.len()].copy_from_slice(bytes);
            Asset::CreditAlphanum4(AlphaNum4 { asset_code: AssetCode4(code), issuer })
        } else {
            let mut code = [0u8; 12];
            code[..bytes.len()].copy_from_slice(bytes);
            Asset::CreditAlphanum12(AlphaNum12 { asset_code: AssetCode12(code), issuer })
        }
    }

    pub fn to_trust_xdr(&self) -> ChangeTrustAsset {
        match self.to_xdr() {
            Asset::CreditAlphanum4(a) => ChangeTrustAsset::CreditAlphanum4(a),
            Asset::CreditAlphanum12(a) => ChangeTrustAsset::CreditAlphanum12(a),
            Asset::Native => ChangeTrustAsset::Native,
        }
    }
}

impl std::fmt::Display for IssuedAsset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.code, self.issuer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::Keypair;

    #[test]
    fn test_coin_code_uses_twelve_byte_form() {
        let mint = Keypair::random();
        let asset = IssuedAsset::coin("A", mint.public_key()).unwrap();
        assert_eq!(asset.code(), "COINA");

        // Five characters no longer fit in AlphaNum4.
        match asset.to_xdr() {
            Asset::CreditAlphanum12(a) => {
                assert_eq!(&a.asset_code.0[..5], b"COINA");
                assert_eq!(a.issuer, mint.account_id());
            }
            other => panic!("unexpected asset {:?}", other),
        }
    }

    #[test]
    fn test_hour_is_alphanum4() {
        let bridge = Keypair::random();
        match IssuedAsset::hour(bridge.public_key()).to_trust_xdr() {
            ChangeTrustAsset::CreditAlphanum4(a) => assert_eq!(&a.asset_code.0, b"HOUR"),
            other => panic!("unexpected asset {:?}", other),
        }
    }

    #[test]
    fn test_rejects_bad_codes() {
        let issuer = Keypair::random().public_key();
        assert!(IssuedAsset::new("", issuer).is_err());
        assert!(IssuedAsset::new("WAYTOOLONGCODE", issuer).is_err());
        assert!(IssuedAsset::new("CO-N", issuer).is_err());
    }
}
