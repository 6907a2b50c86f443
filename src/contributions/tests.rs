use super::{aggregate, member_share};

use anyhow::{anyhow, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

use crate::models::{Contribution, Member, RecordStatus};
use crate::types::{ContributionId, MemberId};

fn create_contribution(id: ContributionId, member_id: MemberId, amount: i64, status: RecordStatus) -> Contribution {
    Contribution {
        id,
        member_id,
        group_id: 1,
        amount: Decimal::from(amount),
        status,
        created_at: None,
        month: 1,
        year: 2024
    }
}

fn roster() -> Vec<Member> {
    vec![Member::new(1, "Ana"), Member::new(2, "Bruno"), Member::new(3, "Carla")]
}

#[test]
fn test_totals_and_percentages_for_two_contributors() -> Result<()> {
    let members = vec![Member::new(1, "Ana"), Member::new(2, "Bruno")];
    let contributions = vec![
        create_contribution(1, 1, 50000, RecordStatus::Approved),
        create_contribution(2, 1, 30000, RecordStatus::Approved),
        create_contribution(3, 2, 20000, RecordStatus::Approved),
    ];

    let result = aggregate(&members, &contributions);

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].member.id, 1);
    assert_eq!(result[0].total_contributed, Decimal::from(80000));
    assert_eq!(result[0].percentage, Decimal::from(80));
    assert_eq!(result[1].total_contributed, Decimal::from(20000));
    assert_eq!(result[1].percentage, Decimal::from(20));

    Ok(())
}

#[test]
fn test_only_approved_contributions_count() {
    let contributions = vec![
        create_contribution(1, 1, 10000, RecordStatus::Approved),
        create_contribution(2, 2, 99999, RecordStatus::Pending),
        create_contribution(3, 3, 55555, RecordStatus::Rejected),
    ];

    let result = aggregate(&roster(), &contributions);
    let totals: Vec<Decimal> = result.iter().map(|entry| entry.total_contributed).collect();

    assert_eq!(totals, vec![Decimal::from(10000), Decimal::ZERO, Decimal::ZERO]);
    assert_eq!(result[0].percentage, Decimal::ONE_HUNDRED);
    assert!(result[1].percentage.is_zero());
    assert!(result[2].percentage.is_zero());
}

#[test]
fn test_full_roster_is_kept_in_order() {
    let contributions = vec![create_contribution(1, 3, 5000, RecordStatus::Approved)];

    let result = aggregate(&roster(), &contributions);
    let ids: Vec<MemberId> = result.iter().map(|entry| entry.member.id).collect();

    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_empty_inputs() {
    assert!(aggregate(&[], &[]).is_empty());

    let result = aggregate(&roster(), &[]);

    assert_eq!(result.len(), 3);
    assert!(result.iter().all(|entry| entry.total_contributed.is_zero() && entry.percentage.is_zero()));
}

#[test]
fn test_contributors_missing_from_roster_are_appended() {
    let contributions = vec![
        create_contribution(1, 9, 3000, RecordStatus::Approved),
        create_contribution(2, 1, 1000, RecordStatus::Approved),
        create_contribution(3, 9, 1000, RecordStatus::Approved),
    ];

    let result = aggregate(&roster(), &contributions);

    assert_eq!(result.len(), 4);
    assert_eq!(result[3].member, Member::unlisted(9));
    assert_eq!(result[3].total_contributed, Decimal::from(4000));
    assert_eq!(result[3].percentage, Decimal::from(80));
}

#[test]
fn test_non_positive_amounts_are_summed_as_signed_values() {
    let contributions = vec![
        create_contribution(1, 1, 10000, RecordStatus::Approved),
        create_contribution(2, 1, -2000, RecordStatus::Approved),
        create_contribution(3, 2, 0, RecordStatus::Approved),
    ];

    let result = aggregate(&roster(), &contributions);

    assert_eq!(result[0].total_contributed, Decimal::from(8000));
    assert_eq!(result[0].percentage, Decimal::ONE_HUNDRED);
    assert!(result[1].total_contributed.is_zero());
}

#[test]
fn test_negative_group_total_yields_zero_percentages() {
    let contributions = vec![create_contribution(1, 1, -500, RecordStatus::Approved)];

    let result = aggregate(&roster(), &contributions);

    assert_eq!(result[0].total_contributed, Decimal::from(-500));
    assert!(result.iter().all(|entry| entry.percentage.is_zero()));
}

#[test]
fn test_random_sets_conserve_totals_and_bound_percentages() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let statuses = [RecordStatus::Pending, RecordStatus::Approved, RecordStatus::Rejected];

    for _ in 0..200 {
        let count = rng.gen_range(0..40);
        let contributions: Vec<Contribution> = (0..count)
            .map(|id| create_contribution(
                id,
                rng.gen_range(1..6),
                rng.gen_range(1..500_000),
                statuses[rng.gen_range(0..statuses.len())]
            ))
            .collect();

        let result = aggregate(&roster(), &contributions);

        let approved: Decimal = contributions.iter()
            .filter(|contribution| contribution.is_approved())
            .map(|contribution| contribution.amount)
            .sum();
        let aggregated: Decimal = result.iter().map(|entry| entry.total_contributed).sum();

        assert_eq!(aggregated, approved);

        if approved > Decimal::ZERO {
            assert!(result.iter().all(|entry| entry.percentage >= Decimal::ZERO && entry.percentage <= Decimal::ONE_HUNDRED));

            let percentage_sum: Decimal = result.iter().map(|entry| entry.percentage).sum();

            assert!((percentage_sum - Decimal::ONE_HUNDRED).abs() < Decimal::new(1, 20));
        }
    }
}

#[test]
fn test_member_share_rounds_to_two_decimals() -> Result<()> {
    let contributions = vec![
        create_contribution(1, 1, 10000, RecordStatus::Approved),
        create_contribution(2, 2, 10000, RecordStatus::Approved),
        create_contribution(3, 3, 10000, RecordStatus::Approved),
    ];

    let result = aggregate(&roster(), &contributions);
    let share = member_share(2, &result).ok_or_else(|| anyhow!("Member 2 missing from aggregation"))?;

    assert_eq!(share.total_contributed, Decimal::from(10000));
    assert_eq!(share.group_total, Decimal::from(30000));
    assert_eq!(share.percentage, Decimal::new(3333, 2));

    assert!(member_share(42, &result).is_none());

    Ok(())
}

#[test]
fn test_member_share_without_savings_is_zero() -> Result<()> {
    let result = aggregate(&roster(), &[]);
    let share = member_share(1, &result).ok_or_else(|| anyhow!("Member 1 missing from aggregation"))?;

    assert!(share.percentage.is_zero());
    assert!(share.group_total.is_zero());

    Ok(())
}
