use shared::{errors::Error, types::Amount, PERCENT_DENOMINATOR};
use soroban_sdk::{log, Address, Env, Vec};

use crate::storage::{get_participant, get_participants, set_participant};

/// `floor(contribution * 100 / total)`
pub fn ownership_percentage(contribution: Amount, total: Amount) -> Result<u32, Error> {
    if total <= 0 {
        return Ok(0);
    }
    let pct = contribution
        .checked_mul(PERCENT_DENOMINATOR)
        .ok_or(Error::InvalidAmount)?
        / total;
    Ok(pct as u32)
}

/// `floor(ownership * total_dividends / 100)`
pub fn dividend_share(
    ownership_percentage: u32,
    total_dividends: Amount,
) -> Result<Amount, Error> {
    let share = (ownership_percentage as Amount)
        .checked_mul(total_dividends)
        .ok_or(Error::InvalidAmount)?
        / PERCENT_DENOMINATOR;
    Ok(share)
}

/// Recompute every participant's ownership from scratch against `total`.
///
/// Deliberately O(participants): each percentage is a floor of the
/// aggregate, never an incrementally adjusted value.
pub fn recompute_ownership(env: &Env, total: Amount) -> Result<(), Error> {
    for identity in get_participants(env).iter() {
        let mut participant = get_participant(env, &identity).ok_or(Error::NotFound)?;
        let pct = ownership_percentage(participant.contribution, total)?;
        if pct != participant.ownership_percentage {
            participant.ownership_percentage = pct;
            set_participant(env, &identity, &participant);
        }
    }
    Ok(())
}

/// Outcome of running the payout rule over the participant list
pub struct DistributionPlan {
    pub payouts: Vec<(Address, Amount)>,
    pub remaining: Amount,
}

/// Walk participants in first-contribution order and decide each payout.
///
/// A share is paid only when it is positive and still covered by what is
/// left of `total_dividends`; anything unpaid stays funded.
pub fn plan_distribution(
    env: &Env,
    total_dividends: Amount,
) -> Result<DistributionPlan, Error> {
    let mut payouts = Vec::new(env);
    let mut remaining = total_dividends;

    for identity in get_participants(env).iter() {
        let participant = get_participant(env, &identity).ok_or(Error::NotFound)?;
        let share = dividend_share(participant.ownership_percentage, total_dividends)?;

        if share > 0 && share <= remaining {
            remaining -= share;
            payouts.push_back((identity, share));
        } else if share > 0 {
            log!(env, "payout skipped, exceeds remaining", identity, share, remaining);
        }
    }

    Ok(DistributionPlan { payouts, remaining })
}
