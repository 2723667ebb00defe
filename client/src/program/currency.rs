use anyhow::Result;
use hourbridge_api::prelude::*;
use hourbridge_api::PublicKey;
use tracing::info;

use crate::context::Context;
use crate::network::Network;

/// Creates a random sponsor account and funds it through friendbot.
pub async fn create_sponsor_account<N: Network>(network: &N) -> Result<Keypair> {
    let keys = Keypair::random();
    info!(account = %keys.address(), "Generated sponsor keypair");
    network.fund(&keys.public_key()).await?;
    info!(account = %keys.address(), "Funded sponsor account");
    Ok(keys)
}

/// Creates the mint and admin accounts of a currency, the admin trustline
/// and the admin's initial balance, all in one sponsored transaction.
pub async fn create_local_model<N: Network>(ctx: &Context<N>, name: &str) -> Result<Currency> {
    let sponsor = ctx.sponsor();
    let currency = Currency::new(name, Keypair::random(), Keypair::random())?;

    let sequence = ctx.sequence_of(&sponsor.public_key()).await?;
    let mut tx = build_local_model_tx(&sponsor.public_key(), sequence, &currency)?;
    tx.sign(&[sponsor, currency.mint(), currency.admin()], ctx.passphrase())?;

    ctx.submit(tx.into(), &format!("create currency {}", name)).await?;

    info!(account = %currency.mint().address(), "Created {} account", currency.label(Role::Mint));
    info!(account = %currency.admin().address(), "Created {} account", currency.label(Role::Admin));
    info!(
        "Funded {} account with {} {}",
        currency.label(Role::Admin),
        ADMIN_INITIAL_BALANCE,
        currency.asset().code()
    );

    Ok(currency)
}

/// Creates a user account for the currency. The user is recorded only once
/// the network accepted the transaction.
pub async fn create_user<N: Network>(ctx: &Context<N>, currency: &mut Currency) -> Result<PublicKey> {
    let sponsor = ctx.sponsor();
    let user = Keypair::random();

    let sequence = ctx.sequence_of(&sponsor.public_key()).await?;
    let mut tx = build_create_user_tx(&sponsor.public_key(), sequence, currency, &user.public_key())?;
    tx.sign(&[sponsor, &user, currency.admin()], ctx.passphrase())?;

    ctx.submit(tx.into(), &format!("create user of currency {}", currency.name())).await?;

    let key = currency.push_user(user);
    info!(
        account = %key,
        "Created {} account with initial balance of {} {}",
        currency.label(Role::User(currency.users().len())),
        USER_INITIAL_BALANCE,
        currency.asset().code()
    );

    Ok(key)
}

/// Local model plus `users` user accounts.
pub async fn create_currency_model<N: Network>(
    ctx: &Context<N>,
    name: &str,
    users: usize,
) -> Result<Currency> {
    let mut currency = create_local_model(ctx, name).await?;
    for _ in 0..users {
        create_user(ctx, &mut currency).await?;
    }
    Ok(currency)
}

/// Creates the external bridge of a currency. `rate` is the price of the
/// local asset in HOURs.
pub async fn create_external_model<N: Network>(
    ctx: &Context<N>,
    currency: Currency,
    rate: Rate,
) -> Result<BridgedCurrency> {
    let sponsor = ctx.sponsor();
    let external = Keypair::random();

    let sequence = ctx.sequence_of(&sponsor.public_key()).await?;
    let mut tx = build_external_model_tx(
        &sponsor.public_key(),
        sequence,
        &currency,
        &external.public_key(),
        &rate,
    )?;
    tx.sign(&[sponsor, &external, currency.admin()], ctx.passphrase())?;

    ctx.submit(tx.into(), &format!("create external account of currency {}", currency.name()))
        .await?;

    let bridged = BridgedCurrency::new(currency, external, rate);
    info!(
        account = %bridged.external().address(),
        rate = %rate,
        "Created {} account for external trade",
        bridged.label(Role::External)
    );

    Ok(bridged)
}

/// Trusts `peer_bridge`'s HOUR up to `limit` stroops and offers own HOURs
/// for it at 1:1, so path payments can cross between both currencies.
pub async fn add_external_trust<N: Network>(
    ctx: &Context<N>,
    currency: &BridgedCurrency,
    peer_bridge: &PublicKey,
    limit: i64,
) -> Result<()> {
    let sponsor = ctx.sponsor();

    let sequence = ctx.sequence_of(&sponsor.public_key()).await?;
    let mut tx = build_external_trust_tx(&sponsor.public_key(), sequence, currency, peer_bridge, limit)?;
    tx.sign(&[sponsor, currency.external()], ctx.passphrase())?;

    ctx.submit(tx.into(), &format!("add external trust for currency {}", currency.name()))
        .await?;

    info!(
        "Added trustline and exchange liquidity from external account {} to external account {} for {} HOURs",
        currency.external().address(),
        peer_bridge,
        from_stroops(limit)
    );

    Ok(())
}
