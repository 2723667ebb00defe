use ed25519_dalek::{Signer as _, SigningKey};
use rand::rngs::OsRng;
use stellar_strkey::ed25519::PublicKey;
use stellar_xdr::curr::{
    AccountId, BytesM, DecoratedSignature, MuxedAccount, PublicKey as XdrPublicKey, Signature,
    SignatureHint, Uint256,
};

use crate::error::ApiResult;

/// Role an account was created for. Only used to label accounts in logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Mint,
    Admin,
    User(usize),
    External,
}

impl Role {
    /// Label in the `MINTA` / `USERA1` style for a currency named `name`.
    pub fn label(&self, name: &str) -> String {
        match self {
            Role::Mint => format!("MINT{}", name),
            Role::Admin => format!("ADMIN{}", name),
            Role::User(n) => format!("USER{}{}", name, n),
            Role::External => format!("EXT{}", name),
        }
    }
}

/// Ed25519 account key pair.
#[derive(Clone)]
pub struct Keypair {
    signing: SigningKey,
}

impl Keypair {
    pub fn random() -> Self {
        Self { signing: SigningKey::generate(&mut OsRng) }
    }

    pub fn public_key(&self) -> PublicKey {
        PublicKey(self.signing.verifying_key().to_bytes())
    }

    /// `G...` account address.
    pub fn address(&self) -> String {
        self.public_key().to_string()
    }

    pub fn account_id(&self) -> AccountId {
        account_id(&self.public_key())
    }

    pub fn muxed(&self) -> MuxedAccount {
        muxed(&self.public_key())
    }

    pub fn hint(&self) -> SignatureHint {
        hint(&self.public_key())
    }

    /// Signs a transaction hash and tags the signature with this key's hint.
    pub fn sign_decorated(&self, hash: &[u8; 32]) -> ApiResult<DecoratedSignature> {
        let signature = self.signing.sign(hash).to_bytes();
        Ok(DecoratedSignature {
            hint: self.hint(),
            signature: Signature(BytesM::try_from(signature)?),
        })
    }
}

impl std::fmt::Debug for Keypair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Keypair").field("public_key", &self.address()).finish()
    }
}

pub fn account_id(key: &PublicKey) -> AccountId {
    AccountId(XdrPublicKey::PublicKeyTypeEd25519(Uint256(key.0)))
}

pub fn muxed(key: &PublicKey) -> MuxedAccount {
    MuxedAccount::Ed25519(Uint256(key.0))
}

pub fn hint(key: &PublicKey) -> SignatureHint {
    let mut hint = [0u8; 4];
    hint.copy_from_slice(&key.0[28..]);
    SignatureHint(hint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_parses_back_to_public_key() {
        let keys = Keypair::random();
        let address = keys.address();
        assert!(address.starts_with('G'));
        assert_eq!(PublicKey::from_string(&address).unwrap(), keys.public_key());
    }

    #[test]
    fn test_clone_signs_identically() {
        let keys = Keypair::random();
        let copy = keys.clone();
        let hash = [7u8; 32];
        assert_eq!(copy.public_key(), keys.public_key());
        assert_eq!(
            copy.sign_decorated(&hash).unwrap(),
            keys.sign_decorated(&hash).unwrap()
        );
    }

    #[test]
    fn test_hint_is_last_four_bytes() {
        let keys = Keypair::random();
        let pk = keys.public_key();
        assert_eq!(keys.hint().0, [pk.0[28], pk.0[29], pk.0[30], pk.0[31]]);
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(Role::Mint.label("A"), "MINTA");
        assert_eq!(Role::User(2).label("B"), "USERB2");
        assert_eq!(Role::External.label("A"), "EXTA");
    }
}
