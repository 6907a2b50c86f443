use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::HashMap;
use tracing::{error, warn};

use crate::models::{Contribution, Member};
use crate::types::{accumulate, MemberId};

#[derive(Debug, Clone, PartialEq)]
pub struct MemberContribution {
    pub member: Member,
    pub total_contributed: Decimal,
    /// Share of the group total in the 0..=100 range; not renormalized.
    pub percentage: Decimal
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemberShare {
    pub member_id: MemberId,
    pub total_contributed: Decimal,
    pub group_total: Decimal,
    /// Percentage rounded to two decimals.
    pub percentage: Decimal
}

/// Totals approved contributions per member.
///
/// Every roster member appears, in roster order, even with nothing approved.
/// Approved contributions from ids missing from the roster are appended after
/// it in order of first appearance so that the totals still add up to every
/// approved amount. Amounts are summed with their sign as received.
pub fn aggregate(members: &[Member], contributions: &[Contribution]) -> Vec<MemberContribution> {
    let mut order: Vec<Member> = members.to_vec();
    let mut totals: HashMap<MemberId, Vec<Decimal>> = members.iter()
        .map(|member| (member.id, Vec::new()))
        .collect();

    for contribution in contributions.iter().filter(|contribution| contribution.is_approved()) {
        let amounts = totals.entry(contribution.member_id).or_insert_with(|| {
            warn!("Member [{}] has approved contributions but is not on the roster", contribution.member_id);
            order.push(Member::unlisted(contribution.member_id));
            Vec::new()
        });

        amounts.push(contribution.amount);
    }

    let member_totals: Vec<(Member, Decimal)> = order.into_iter()
        .map(|member| {
            let total = totals.remove(&member.id).map(accumulate).unwrap_or(Decimal::ZERO);
            (member, total)
        })
        .collect();

    let total_general = accumulate(member_totals.iter().map(|(_, total)| *total));

    member_totals.into_iter()
        .map(|(member, total_contributed)| MemberContribution {
            percentage: percentage_of(total_contributed, total_general),
            member,
            total_contributed
        })
        .collect()
}

pub fn member_share(member_id: MemberId, aggregation: &[MemberContribution]) -> Option<MemberShare> {
    let entry = aggregation.iter().find(|entry| entry.member.id == member_id)?;
    let group_total = accumulate(aggregation.iter().map(|entry| entry.total_contributed));

    Some(MemberShare {
        member_id,
        total_contributed: entry.total_contributed,
        group_total,
        percentage: percentage_of(entry.total_contributed, group_total)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    })
}

fn percentage_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    part.checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|scaled| scaled.checked_div(whole))
        .unwrap_or_else(|| {
            error!("Percentage error: Overflow computing [{part}] of [{whole}]");
            Decimal::ZERO
        })
}
