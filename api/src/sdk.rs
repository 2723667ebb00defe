use stellar_strkey::ed25519::PublicKey;
use stellar_xdr::curr::{
    BeginSponsoringFutureReservesOp, ChangeTrustOp, CreateAccountOp, CreatePassiveSellOfferOp,
    Operation, OperationBody, PathPaymentStrictReceiveOp, PaymentOp, SetOptionsOp, Signer,
    SignerKey, Uint256,
};

use crate::prelude::*;

fn op(source: Option<&PublicKey>, body: OperationBody) -> Operation {
    Operation { source_account: source.map(muxed), body }
}

pub fn begin_sponsoring(sponsored: &PublicKey) -> Operation {
    op(None, OperationBody::BeginSponsoringFutureReserves(BeginSponsoringFutureReservesOp {
        sponsored_id: account_id(sponsored),
    }))
}

/// Closes a sponsorship block. Must be sourced by the sponsored account.
pub fn end_sponsoring(sponsored: &PublicKey) -> Operation {
    op(Some(sponsored), OperationBody::EndSponsoringFutureReserves)
}

pub fn create_account(destination: &PublicKey, starting_balance: i64) -> Operation {
    op(None, OperationBody::CreateAccount(CreateAccountOp {
        destination: account_id(destination),
        starting_balance,
    }))
}

pub fn change_trust(source: &PublicKey, asset: &IssuedAsset, limit: i64) -> Operation {
    op(Some(source), OperationBody::ChangeTrust(ChangeTrustOp {
        line: asset.to_trust_xdr(),
        limit,
    }))
}

pub fn add_signer(source: &PublicKey, signer: &PublicKey, weight: u32) -> Operation {
    op(Some(source), OperationBody::SetOptions(SetOptionsOp {
        signer: Some(Signer { key: SignerKey::Ed25519(Uint256(signer.0)), weight }),
        ..SetOptionsOp::default()
    }))
}

pub fn set_thresholds(source: &PublicKey, master: u32, low: u32, med: u32, high: u32) -> Operation {
    op(Some(source), OperationBody::SetOptions(SetOptionsOp {
        master_weight: Some(master),
        low_threshold: Some(low),
        med_threshold: Some(med),
        high_threshold: Some(high),
        ..SetOptionsOp::default()
    }))
}

pub fn payment(
    source: Option<&PublicKey>,
    destination: &PublicKey,
    asset: &IssuedAsset,
    amount: i64,
) -> Operation {
    op(source, OperationBody::Payment(PaymentOp {
        destination: muxed(destination),
        asset: asset.to_xdr(),
        amount,
    }))
}

/// Standing offer that never takes an offer at the same price.
pub fn passive_sell_offer(
    source: &PublicKey,
    selling: &IssuedAsset,
    buying: &IssuedAsset,
    amount: i64,
    price: &Rate,
) -> Operation {
    op(Some(source), OperationBody::CreatePassiveSellOffer(CreatePassiveSellOfferOp {
        selling: selling.to_xdr(),
        buying: buying.to_xdr(),
        amount,
        price: price.to_price(),
    }))
}

pub fn path_payment_strict_receive(
    source: Option<&PublicKey>,
    send_asset: &IssuedAsset,
    send_max: i64,
    destination: &PublicKey,
    dest_asset: &IssuedAsset,
    dest_amount: i64,
    path: &[&IssuedAsset],
) -> ApiResult<Operation> {
    let path: Vec<_> = path.iter().map(|a| a.to_xdr()).collect();
    Ok(op(source, OperationBody::PathPaymentStrictReceive(PathPaymentStrictReceiveOp {
        send_asset: send_asset.to_xdr(),
        send_max,
        destination: muxed(destination),
        dest_asset: dest_asset.to_xdr(),
        dest_amount,
        path: path.try_into()?,
    })))
}

/// Creates the mint and admin accounts under the sponsor's reserves, trusts
/// the currency asset from the admin and funds the admin from the mint.
///
/// Signers: sponsor, mint, admin.
pub fn build_local_model_tx(sponsor: &PublicKey, sequence: i64, currency: &Currency) -> ApiResult<Tx> {
    let mint = currency.mint().public_key();
    let admin = currency.admin().public_key();
    let asset = currency.asset();

    TransactionBuilder::new(sponsor, sequence)
        .add_operation(begin_sponsoring(&mint))
        .add_operation(create_account(&mint, 0))
        .add_operation(end_sponsoring(&mint))
        .add_operation(begin_sponsoring(&admin))
        .add_operation(create_account(&admin, 0))
        .add_operation(change_trust(&admin, asset, to_stroops(ADMIN_TRUST_LIMIT)?))
        .add_operation(end_sponsoring(&admin))
        .add_operation(payment(Some(&mint), &admin, asset, to_stroops(ADMIN_INITIAL_BALANCE)?))
        .build()
}

/// Creates a sponsored user account that trusts the currency asset. The
/// admin becomes a signer with enough weight for high threshold operations
/// while the user's own key only reaches the low and medium thresholds.
/// The admin funds the new account.
///
/// Signers: sponsor, user, admin.
pub fn build_create_user_tx(
    sponsor: &PublicKey,
    sequence: i64,
    currency: &Currency,
    user: &PublicKey,
) -> ApiResult<Tx> {
    let admin = currency.admin().public_key();
    let asset = currency.asset();

    TransactionBuilder::new(sponsor, sequence)
        .add_operation(begin_sponsoring(user))
        .add_operation(create_account(user, 0))
        .add_operation(change_trust(user, asset, to_stroops(USER_TRUST_LIMIT)?))
        .add_operation(add_signer(user, &admin, ADMIN_SIGNER_WEIGHT))
        .add_operation(set_thresholds(
            user,
            USER_MASTER_WEIGHT,
            USER_LOW_THRESHOLD,
            USER_MED_THRESHOLD,
            USER_HIGH_THRESHOLD,
        ))
        .add_operation(end_sponsoring(user))
        .add_operation(payment(Some(&admin), user, asset, to_stroops(USER_INITIAL_BALANCE)?))
        .build()
}

/// Creates the external bridge account, funds it with local coins and posts
/// passive offers between the local asset and the bridge's HOUR in both
/// directions: local for HOUR at `rate`, HOUR for local at its reciprocal.
///
/// Signers: sponsor, external, admin.
pub fn build_external_model_tx(
    sponsor: &PublicKey,
    sequence: i64,
    currency: &Currency,
    external: &PublicKey,
    rate: &Rate,
) -> ApiResult<Tx> {
    let admin = currency.admin().public_key();
    let asset = currency.asset();
    let hour = IssuedAsset::hour(*external);

    TransactionBuilder::new(sponsor, sequence)
        .add_operation(begin_sponsoring(external))
        .add_operation(create_account(external, 0))
        .add_operation(change_trust(external, asset, to_stroops(EXTERNAL_TRUST_LIMIT)?))
        .add_operation(payment(Some(&admin), external, asset, to_stroops(EXTERNAL_INITIAL_BALANCE)?))
        .add_operation(passive_sell_offer(external, asset, &hour, to_stroops(EXTERNAL_LOCAL_OFFER)?, rate))
        .add_operation(passive_sell_offer(
            external,
            &hour,
            asset,
            to_stroops(EXTERNAL_HOUR_OFFER)?,
            &rate.reciprocal(),
        ))
        .add_operation(end_sponsoring(external))
        .build()
}

/// Trusts a peer bridge's HOUR up to `limit` stroops and offers this
/// bridge's HOUR for it 1:1, which opens the path between both currencies.
///
/// Signers: sponsor, external.
pub fn build_external_trust_tx(
    sponsor: &PublicKey,
    sequence: i64,
    currency: &BridgedCurrency,
    peer_bridge: &PublicKey,
    limit: i64,
) -> ApiResult<Tx> {
    let external = currency.external().public_key();
    let peer_hour = IssuedAsset::hour(*peer_bridge);

    TransactionBuilder::new(sponsor, sequence)
        .add_operation(begin_sponsoring(&external))
        .add_operation(change_trust(&external, &peer_hour, limit))
        .add_operation(passive_sell_offer(
            &external,
            currency.external_asset(),
            &peer_hour,
            limit,
            &Rate::new(1, 1)?,
        ))
        .add_operation(end_sponsoring(&external))
        .build()
}

/// Single payment sourced by the paying account `from`. The same
/// transaction may be signed by the user or, through its signer weight, by
/// the currency admin.
pub fn build_payment_tx(
    from: &PublicKey,
    sequence: i64,
    to: &PublicKey,
    asset: &IssuedAsset,
    amount: i64,
) -> ApiResult<Tx> {
    TransactionBuilder::new(from, sequence)
        .add_operation(payment(None, to, asset, amount))
        .build()
}

/// Path payment delivering exactly `dest_amount` of the destination asset
/// through both bridges' HOUR assets, bounded by the rate-derived maximum.
pub fn build_path_payment_tx(
    sender: &PublicKey,
    sequence: i64,
    source: &BridgedCurrency,
    receiver: &PublicKey,
    dest: &BridgedCurrency,
    dest_amount: i64,
) -> ApiResult<Tx> {
    let max = send_max(dest_amount, dest.rate(), source.rate())?;

    TransactionBuilder::new(sender, sequence)
        .add_operation(path_payment_strict_receive(
            None,
            source.asset(),
            max,
            receiver,
            dest.asset(),
            dest_amount,
            &[source.external_asset(), dest.external_asset()],
        )?)
        .build()
}
