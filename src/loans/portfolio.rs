use rust_decimal::Decimal;

use crate::models::{Loan, LoanPayment, RecordStatus};
use crate::types::{accumulate, LoanId};

/// Group-wide view of approved loans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoanPortfolio {
    pub active_loans: usize,
    pub amount_lent: Decimal,
    pub amount_to_recover: Decimal,
    pub amount_recovered: Decimal
}

impl LoanPortfolio {
    pub fn from_loans(loans: &[Loan]) -> Self {
        let approved: Vec<&Loan> = loans.iter().filter(|loan| loan.status.is_approved()).collect();
        let outstanding: Vec<Decimal> = approved.iter().map(|loan| loan.outstanding()).collect();

        Self {
            active_loans: outstanding.iter().filter(|amount| **amount > Decimal::ZERO).count(),
            amount_lent: accumulate(approved.iter().map(|loan| loan.principal)),
            amount_to_recover: accumulate(outstanding),
            amount_recovered: accumulate(approved.iter().map(|loan| loan.amount_paid))
        }
    }
}

/// Payments recorded against one loan, split by approval state.
///
/// For display next to the balance only. Pending payments are not
/// subtracted from what is owed until the backend approves them and reports
/// a new `amount_paid`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentSummary {
    pub approved: Decimal,
    pub pending: Decimal,
    pub pending_count: usize
}

impl PaymentSummary {
    pub fn for_loan(loan_id: LoanId, payments: &[LoanPayment]) -> Self {
        let mut approved = Vec::new();
        let mut pending = Vec::new();

        for payment in payments.iter().filter(|payment| payment.loan_id == loan_id) {
            match payment.status {
                RecordStatus::Approved => approved.push(payment.amount),
                RecordStatus::Pending => pending.push(payment.amount),
                RecordStatus::Rejected => {}
            }
        }

        Self {
            approved: accumulate(approved),
            pending_count: pending.len(),
            pending: accumulate(pending)
        }
    }
}
