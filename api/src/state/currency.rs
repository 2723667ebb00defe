use stellar_strkey::ed25519::PublicKey;

use crate::asset::IssuedAsset;
use crate::error::ApiResult;
use crate::keys::{Keypair, Role};

/// A currency usable for local trade: its mint (issuer), its admin and the
/// users created so far. The asset is fixed when the currency is built.
#[derive(Clone, Debug)]
pub struct Currency {
    name: String,
    mint: Keypair,
    admin: Keypair,
    asset: IssuedAsset,
    users: Vec<Keypair>,
}

impl Currency {
    pub fn new(name: &str, mint: Keypair, admin: Keypair) -> ApiResult<Self> {
        let asset = IssuedAsset::coin(name, mint.public_key())?;
        Ok(Self {
            name: name.to_string(),
            mint,
            admin,
            asset,
            users: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mint(&self) -> &Keypair {
        &self.mint
    }

    pub fn admin(&self) -> &Keypair {
        &self.admin
    }

    pub fn asset(&self) -> &IssuedAsset {
        &self.asset
    }

    pub fn users(&self) -> &[Keypair] {
        &self.users
    }

    pub fn user(&self, index: usize) -> Option<&Keypair> {
        self.users.get(index)
    }

    /// Records a user whose account exists on the network. The list is
    /// append-only; callers push only after the creating transaction was
    /// accepted.
    pub fn push_user(&mut self, user: Keypair) -> PublicKey {
        let key = user.public_key();
        self.users.push(user);
        key
    }

    /// Label for an account of this currency, e.g. `USERA1`.
    pub fn label(&self, role: Role) -> String {
        role.label(&self.name)
    }
}
