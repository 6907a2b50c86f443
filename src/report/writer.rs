use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

use crate::contributions::{MemberContribution, MemberShare};
use crate::currency::CurrencyFormat;
use crate::loans::{LoanPortfolio, PaymentSummary};
use crate::raffle::RaffleSummary;
use crate::models::{GroupBalance, Loan, LoanPayment, LoanState, Transaction};
use crate::types::{LoanId, MemberId, RaffleId, TransactionId};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Serialize)]
struct ContributionRow<'a> {
    member_id: MemberId,
    member: &'a str,
    total_contributed: String,
    percentage: String,
    formatted: String
}

#[derive(Serialize)]
struct MemberShareRow<'a> {
    member_id: MemberId,
    member: &'a str,
    total_contributed: String,
    group_total: String,
    percentage: String,
    formatted: String
}

#[derive(Serialize)]
struct LoanRow<'a> {
    loan_id: LoanId,
    borrower: &'a str,
    status: &'static str,
    state: &'static str,
    start_date: Option<NaiveDate>,
    principal: String,
    annual_rate_pct: String,
    term_months: i32,
    interest: String,
    total_payable: String,
    amount_paid: String,
    outstanding: String,
    pending_payments: String,
    days_remaining: Option<i64>,
    overdue: bool,
    formatted_outstanding: String
}

#[derive(Serialize)]
struct PortfolioRow {
    active_loans: usize,
    amount_lent: String,
    amount_to_recover: String,
    amount_recovered: String
}

#[derive(Serialize)]
struct TransactionRow<'a> {
    transaction_id: TransactionId,
    date: String,
    #[serde(rename = "type")]
    transaction_type: &'static str,
    category: &'a str,
    description: &'a str,
    amount: String,
    formatted: String,
    actor: &'a str
}

#[derive(Serialize)]
struct ActorRow<'a> {
    actor: &'a str
}

#[derive(Serialize)]
struct RaffleRow {
    raffle_id: RaffleId,
    tickets: usize,
    available: usize,
    taken: usize,
    paid: usize,
    pending_payment: usize,
    availability: String
}

#[derive(Serialize)]
struct BalanceRow {
    cash: String,
    loans_outstanding: String,
    income: String,
    expenses: String,
    available_capital: String
}

/// Writes one CSV report; raw figures use two decimals, `formatted` columns use the currency format.
pub struct ReportWriter<W: Write> {
    output: csv::Writer<W>,
    currency: CurrencyFormat
}

impl<W: Write> ReportWriter<W> {
    pub fn new(output: W, currency: CurrencyFormat) -> Self {
        Self {
            output: csv::Writer::from_writer(output),
            currency
        }
    }

    pub fn contributions(mut self, aggregation: &[MemberContribution]) -> csv::Result<W> {
        for entry in aggregation {
            self.output.serialize(ContributionRow {
                member_id: entry.member.id,
                member: entry.member.display_name(),
                total_contributed: fixed(entry.total_contributed),
                percentage: fixed(entry.percentage),
                formatted: self.currency.format(entry.total_contributed)
            })?;
        }

        self.finish()
    }

    pub fn member_share(mut self, share: &MemberShare, member_name: &str) -> csv::Result<W> {
        self.output.serialize(MemberShareRow {
            member_id: share.member_id,
            member: member_name,
            total_contributed: fixed(share.total_contributed),
            group_total: fixed(share.group_total),
            percentage: fixed(share.percentage),
            formatted: self.currency.format(share.total_contributed)
        })?;

        self.finish()
    }

    pub fn loans(mut self, loans: &[Loan], payments: &[LoanPayment], today: NaiveDate) -> csv::Result<W> {
        for loan in loans {
            let balance = loan.balance();
            let outstanding = loan.outstanding();
            let payment_summary = PaymentSummary::for_loan(loan.id, payments);

            self.output.serialize(LoanRow {
                loan_id: loan.id,
                borrower: loan.borrower_name.as_deref().unwrap_or(""),
                status: loan.status.wire_name(),
                state: loan.state.map(LoanState::wire_name).unwrap_or(""),
                start_date: loan.start_date,
                principal: fixed(loan.principal),
                annual_rate_pct: fixed(loan.annual_rate_pct),
                term_months: loan.term_months,
                interest: fixed(balance.interest),
                total_payable: fixed(balance.total_payable),
                amount_paid: fixed(loan.amount_paid),
                outstanding: fixed(outstanding),
                pending_payments: fixed(payment_summary.pending),
                days_remaining: loan.days_remaining(today),
                overdue: loan.is_overdue(today),
                formatted_outstanding: self.currency.format(outstanding)
            })?;
        }

        self.finish()
    }

    pub fn portfolio(mut self, portfolio: &LoanPortfolio) -> csv::Result<W> {
        self.output.serialize(PortfolioRow {
            active_loans: portfolio.active_loans,
            amount_lent: fixed(portfolio.amount_lent),
            amount_to_recover: fixed(portfolio.amount_to_recover),
            amount_recovered: fixed(portfolio.amount_recovered)
        })?;

        self.finish()
    }

    pub fn transactions(mut self, transactions: &[Transaction]) -> csv::Result<W> {
        for transaction in transactions {
            let sign = if transaction.transaction_type.is_inflow() { "+" } else { "-" };

            self.output.serialize(TransactionRow {
                transaction_id: transaction.id,
                date: transaction.occurred_at()
                    .map(|timestamp| timestamp.format(TIMESTAMP_FORMAT).to_string())
                    .unwrap_or_default(),
                transaction_type: transaction.transaction_type.label(),
                category: &transaction.category,
                description: &transaction.description,
                amount: fixed(transaction.signed_amount()),
                formatted: format!("{sign} {}", self.currency.format(transaction.amount)),
                actor: transaction.actor_name()
            })?;
        }

        self.finish()
    }

    pub fn actors(mut self, names: &[String]) -> csv::Result<W> {
        for name in names {
            self.output.serialize(ActorRow { actor: name })?;
        }

        self.finish()
    }

    pub fn raffles(mut self, raffles: &[(RaffleId, RaffleSummary)]) -> csv::Result<W> {
        for (raffle_id, summary) in raffles {
            self.output.serialize(RaffleRow {
                raffle_id: *raffle_id,
                tickets: summary.tickets,
                available: summary.available,
                taken: summary.taken,
                paid: summary.paid,
                pending_payment: summary.pending_payment,
                availability: summary.availability()
            })?;
        }

        self.finish()
    }

    pub fn balance(mut self, balance: &GroupBalance) -> csv::Result<W> {
        self.output.serialize(BalanceRow {
            cash: self.currency.format(balance.cash),
            loans_outstanding: self.currency.format(balance.loans_outstanding),
            income: self.currency.format(balance.income),
            expenses: self.currency.format(balance.expenses),
            available_capital: self.currency.format(balance.available_capital)
        })?;

        self.finish()
    }

    fn finish(self) -> csv::Result<W> {
        self.output.into_inner().map_err(|error| csv::Error::from(error.into_error()))
    }
}

fn fixed(value: Decimal) -> String {
    // Negated zero would otherwise print as -0.00
    let value = if value.is_zero() { Decimal::ZERO } else { value };
    format!("{value:.2}")
}
