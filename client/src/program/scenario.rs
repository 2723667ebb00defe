use anyhow::{bail, Result};
use hourbridge_api::prelude::*;
use hourbridge_api::PublicKey;

use crate::consts::*;
use crate::context::Context;
use crate::network::Network;
use crate::program::*;

/// Section of the run, reported before it starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Stage {
    Sponsor,
    Currency(String),
    LocalPayments,
    ExternalModel(String),
    ExternalTrust(String, String),
    ExternalPayments,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Sponsor => write!(f, "Sponsor"),
            Stage::Currency(name) => write!(f, "Currency {}", name),
            Stage::LocalPayments => write!(f, "Test local payments"),
            Stage::ExternalModel(name) => write!(f, "External trading for currency {}", name),
            Stage::ExternalTrust(a, b) => write!(f, "Define trust between currencies {} and {}", a, b),
            Stage::ExternalPayments => write!(f, "Test external payments"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ScenarioConfig {
    pub users: usize,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self { users: DEMO_USERS }
    }
}

/// Final state of a run.
#[derive(Debug)]
pub struct Report {
    pub sponsor: PublicKey,
    pub coin_a: BridgedCurrency,
    pub coin_b: BridgedCurrency,
    pub payments: Vec<String>,
}

/// Creates and funds the sponsor and returns the run context.
pub async fn setup<N: Network>(
    network: N,
    passphrase: NetworkPassphrase,
    on_stage: &mut impl FnMut(&Stage),
) -> Result<Context<N>> {
    on_stage(&Stage::Sponsor);
    let sponsor = create_sponsor_account(&network).await?;
    Ok(Context::new(network, passphrase, sponsor))
}

/// Builds currencies A and B, pays within A, bridges both to HOUR, links
/// the bridges and pays across currencies. Stops at the first failure.
pub async fn run<N: Network>(
    ctx: &Context<N>,
    config: &ScenarioConfig,
    on_stage: &mut impl FnMut(&Stage),
) -> Result<Report> {
    if config.users < 2 {
        bail!("the scenario needs at least 2 users per currency, got {}", config.users);
    }

    on_stage(&Stage::Currency("A".to_string()));
    let coin_a = create_currency_model(ctx, "A", config.users).await?;
    on_stage(&Stage::Currency("B".to_string()));
    let coin_b = create_currency_model(ctx, "B", config.users).await?;

    let mut payments = Vec::new();

    on_stage(&Stage::LocalPayments);
    payments.extend(local_payments(ctx, &coin_a).await?);

    // COINA is worth 1 HOUR, COINB 1/10 HOUR.
    on_stage(&Stage::ExternalModel("A".to_string()));
    let coin_a = create_external_model(ctx, coin_a, Rate::new(RATE_A.0, RATE_A.1)?).await?;
    on_stage(&Stage::ExternalModel("B".to_string()));
    let coin_b = create_external_model(ctx, coin_b, Rate::new(RATE_B.0, RATE_B.1)?).await?;

    on_stage(&Stage::ExternalTrust("A".to_string(), "B".to_string()));
    let limit = to_stroops(PEER_TRUST_LIMIT)?;
    add_external_trust(ctx, &coin_a, &coin_b.external().public_key(), limit).await?;
    add_external_trust(ctx, &coin_b, &coin_a.external().public_key(), limit).await?;

    on_stage(&Stage::ExternalPayments);
    payments.extend(external_payments(ctx, &coin_a, &coin_b).await?);

    Ok(Report {
        sponsor: ctx.sponsor().public_key(),
        coin_a,
        coin_b,
        payments,
    })
}

/// USER1 and USER2 pay each other, first signing themselves, then through
/// the admin.
async fn local_payments<N: Network>(ctx: &Context<N>, coin: &Currency) -> Result<Vec<String>> {
    let (user1, user2) = match (coin.user(0), coin.user(1)) {
        (Some(u1), Some(u2)) => (u1, u2),
        _ => bail!("currency {} needs two users for local payments", coin.name()),
    };
    let asset = coin.asset();

    Ok(vec![
        user_pay(ctx, user1, &user2.public_key(), to_stroops(USER_PAYMENT_1)?, asset).await?.hash,
        user_pay(ctx, user2, &user1.public_key(), to_stroops(USER_PAYMENT_2)?, asset).await?.hash,
        admin_pay(
            ctx,
            coin.admin(),
            &user1.public_key(),
            &user2.public_key(),
            to_stroops(ADMIN_PAYMENT_1)?,
            asset,
        )
        .await?
        .hash,
        admin_pay(
            ctx,
            coin.admin(),
            &user2.public_key(),
            &user1.public_key(),
            to_stroops(ADMIN_PAYMENT_2)?,
            asset,
        )
        .await?
        .hash,
    ])
}

/// USERA1 pays so that USERB1 receives 20 COINB, then USERB1 pays so that
/// USERA1 receives 5 COINA.
async fn external_payments<N: Network>(
    ctx: &Context<N>,
    coin_a: &BridgedCurrency,
    coin_b: &BridgedCurrency,
) -> Result<Vec<String>> {
    let (user_a1, user_b1) = match (coin_a.user(0), coin_b.user(0)) {
        (Some(a), Some(b)) => (a, b),
        _ => bail!("both currencies need a user for external payments"),
    };

    Ok(vec![
        external_pay(ctx, user_a1, coin_a, &user_b1.public_key(), coin_b, to_stroops(EXTERNAL_PAYMENT_1)?)
            .await?
            .hash,
        external_pay(ctx, user_b1, coin_b, &user_a1.public_key(), coin_a, to_stroops(EXTERNAL_PAYMENT_2)?)
            .await?
            .hash,
    ])
}
