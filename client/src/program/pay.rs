use anyhow::Result;
use hourbridge_api::prelude::*;
use hourbridge_api::PublicKey;
use tracing::info;

use crate::context::Context;
use crate::network::{Network, SubmitResponse};

/// Signs `tx` with `signer` and wraps it in a fee-bump paid by the sponsor,
/// so the signer does not need native balance for fees.
pub fn sponsor_fees<N: Network>(ctx: &Context<N>, mut tx: Tx, signer: &Keypair) -> Result<FeeBumpTx> {
    tx.sign(&[signer], ctx.passphrase())?;
    Ok(tx.fee_bump(ctx.sponsor(), BASE_FEE, ctx.passphrase())?)
}

/// Payment signed by the paying user.
pub async fn user_pay<N: Network>(
    ctx: &Context<N>,
    sender: &Keypair,
    receiver: &PublicKey,
    amount: i64,
    asset: &IssuedAsset,
) -> Result<SubmitResponse> {
    let sequence = ctx.sequence_of(&sender.public_key()).await?;
    let tx = build_payment_tx(&sender.public_key(), sequence, receiver, asset, amount)?;
    let bumped = sponsor_fees(ctx, tx, sender)?;

    let response = ctx.submit(bumped.into(), "pay").await?;
    info!(
        "Paid {} {} from {} to {}.",
        from_stroops(amount),
        asset.code(),
        sender.address(),
        receiver
    );
    Ok(response)
}

/// Payment between two users of a currency signed only by its admin,
/// using the signer weight granted when the sender was created.
pub async fn admin_pay<N: Network>(
    ctx: &Context<N>,
    admin: &Keypair,
    sender: &PublicKey,
    receiver: &PublicKey,
    amount: i64,
    asset: &IssuedAsset,
) -> Result<SubmitResponse> {
    let sequence = ctx.sequence_of(sender).await?;
    let tx = build_payment_tx(sender, sequence, receiver, asset, amount)?;
    let bumped = sponsor_fees(ctx, tx, admin)?;

    let response = ctx.submit(bumped.into(), "pay as admin").await?;
    info!(
        "Admin paid {} {} from {} to {}.",
        from_stroops(amount),
        asset.code(),
        sender,
        receiver
    );
    Ok(response)
}

/// Cross-currency payment: `receiver` gets exactly `amount` stroops of
/// `dest`'s asset and `sender` spends at most the rate-derived equivalent
/// of `source`'s asset.
pub async fn external_pay<N: Network>(
    ctx: &Context<N>,
    sender: &Keypair,
    source: &BridgedCurrency,
    receiver: &PublicKey,
    dest: &BridgedCurrency,
    amount: i64,
) -> Result<SubmitResponse> {
    let sequence = ctx.sequence_of(&sender.public_key()).await?;
    let tx = build_path_payment_tx(&sender.public_key(), sequence, source, receiver, dest, amount)?;
    let bumped = sponsor_fees(ctx, tx, sender)?;

    let response = ctx.submit(bumped.into(), "pay externally").await?;
    info!(
        "Externally paid {} {} from {} to {}.",
        from_stroops(amount),
        dest.asset().code(),
        sender.address(),
        receiver
    );
    Ok(response)
}
