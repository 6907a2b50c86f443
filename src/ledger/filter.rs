use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::collections::BTreeSet;
use std::str::FromStr;

use crate::models::{Transaction, TransactionType, UnknownTransactionType};

pub const ALL: &str = "all";

/// Optional conditions over ledger entries, combined with AND. Ranges are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionCriteria {
    pub transaction_type: Option<TransactionType>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub amount_min: Option<Decimal>,
    pub amount_max: Option<Decimal>,
    pub actor: Option<String>
}

impl TransactionCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, transaction_type: TransactionType) -> Self {
        self.transaction_type = Some(transaction_type);
        self
    }

    pub fn with_type_choice(mut self, choice: &str) -> Result<Self, UnknownTransactionType> {
        self.transaction_type = if is_all(choice) {
            None
        } else {
            Some(TransactionType::from_str(choice)?)
        };
        Ok(self)
    }

    pub fn with_dates(mut self, date_from: Option<NaiveDate>, date_to: Option<NaiveDate>) -> Self {
        self.date_from = date_from;
        self.date_to = date_to;
        self
    }

    pub fn with_amounts(mut self, amount_min: Option<Decimal>, amount_max: Option<Decimal>) -> Self {
        self.amount_min = amount_min;
        self.amount_max = amount_max;
        self
    }

    pub fn with_actor(mut self, choice: &str) -> Self {
        self.actor = (!is_all(choice)).then(|| choice.to_string());
        self
    }

    pub fn matches(&self, transaction: &Transaction) -> bool {
        self.matches_type(transaction)
            && self.matches_dates(transaction)
            && self.matches_amount(transaction)
            && self.matches_actor(transaction)
    }

    fn matches_type(&self, transaction: &Transaction) -> bool {
        self.transaction_type.is_none_or(|kind| kind == transaction.transaction_type)
    }

    fn matches_dates(&self, transaction: &Transaction) -> bool {
        if self.date_from.is_none() && self.date_to.is_none() {
            return true;
        }

        //NOTE: An entry without any timestamp cannot satisfy an active date bound
        let Some(occurred_at) = transaction.occurred_at() else {
            return false;
        };

        let after_start = self.date_from
            .and_then(start_of_day)
            .is_none_or(|start| occurred_at >= start);
        let before_end = self.date_to
            .and_then(end_of_day)
            .is_none_or(|end| occurred_at <= end);

        after_start && before_end
    }

    fn matches_amount(&self, transaction: &Transaction) -> bool {
        self.amount_min.is_none_or(|min| transaction.amount >= min)
            && self.amount_max.is_none_or(|max| transaction.amount <= max)
    }

    fn matches_actor(&self, transaction: &Transaction) -> bool {
        self.actor.as_deref().is_none_or(|actor| actor == transaction.actor_name())
    }
}

pub fn filter(transactions: &[Transaction], criteria: &TransactionCriteria) -> Vec<Transaction> {
    transactions.iter()
        .filter(|transaction| criteria.matches(transaction))
        .cloned()
        .collect()
}

/// Distinct actor names, sorted.
pub fn actor_names(transactions: &[Transaction]) -> Vec<String> {
    transactions.iter()
        .map(|transaction| transaction.actor_name())
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn is_all(choice: &str) -> bool {
    choice.trim().eq_ignore_ascii_case(ALL)
}

fn start_of_day(date: NaiveDate) -> Option<NaiveDateTime> {
    date.and_hms_opt(0, 0, 0)
}

fn end_of_day(date: NaiveDate) -> Option<NaiveDateTime> {
    date.and_hms_milli_opt(23, 59, 59, 999)
}
