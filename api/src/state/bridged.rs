use std::ops::Deref;

use crate::asset::IssuedAsset;
use crate::keys::Keypair;
use crate::rate::Rate;
use crate::state::Currency;

/// A currency with an external bridge account. The bridge issues the
/// currency's `HOUR` asset and quotes the local asset against it at `rate`.
///
/// Only this type can take part in cross-currency payments.
#[derive(Clone, Debug)]
pub struct BridgedCurrency {
    currency: Currency,
    external: Keypair,
    external_asset: IssuedAsset,
    rate: Rate,
}

impl BridgedCurrency {
    pub fn new(currency: Currency, external: Keypair, rate: Rate) -> Self {
        let external_asset = IssuedAsset::hour(external.public_key());
        Self { currency, external, external_asset, rate }
    }

    pub fn external(&self) -> &Keypair {
        &self.external
    }

    pub fn external_asset(&self) -> &IssuedAsset {
        &self.external_asset
    }

    pub fn rate(&self) -> &Rate {
        &self.rate
    }
}

impl Deref for BridgedCurrency {
    type Target = Currency;

    fn deref(&self) -> &Currency {
        &self.currency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hour_asset_issued_by_bridge() {
        let currency = Currency::new("A", Keypair::random(), Keypair::random()).unwrap();
        let external = Keypair::random();
        let external_pk = external.public_key();
        let bridged = BridgedCurrency::new(currency, external, Rate::new(1, 10).unwrap());

        assert_eq!(bridged.external_asset().code(), "HOUR");
        assert_eq!(bridged.external_asset().issuer(), &external_pk);
        assert_eq!(bridged.rate(), &Rate::new(1, 10).unwrap());
        assert_eq!(bridged.asset().code(), "COINA");
    }
}
