mod balance;
mod contribution;
mod loan;
mod member;
mod raffle_ticket;
mod transaction;

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub use balance::GroupBalance;
pub use contribution::Contribution;
pub use loan::{Loan, LoanPayment};
pub use member::Member;
pub use raffle_ticket::{RaffleTicket, TicketState};
pub use transaction::{Transaction, SYSTEM_ACTOR};

/// Approval state shared by contributions, loans and loan payments.
///
/// Records start as `Pending` and are moved to `Approved` or `Rejected` once by
/// the group's creator on the backend.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Deserialize)]
pub enum RecordStatus {
    #[default]
    #[serde(rename = "pendiente", alias = "pending")]
    Pending,
    #[serde(rename = "aprobado", alias = "approved")]
    Approved,
    #[serde(rename = "rechazado", alias = "rejected")]
    Rejected
}

impl RecordStatus {
    pub fn is_approved(self) -> bool {
        self == RecordStatus::Approved
    }

    pub fn wire_name(self) -> &'static str {
        match self {
            RecordStatus::Pending => "pendiente",
            RecordStatus::Approved => "aprobado",
            RecordStatus::Rejected => "rechazado"
        }
    }
}

/// Lifecycle of an approved loan as reported by the backend.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
pub enum LoanState {
    #[serde(rename = "activo", alias = "active")]
    Active,
    #[serde(rename = "pagado", alias = "paid")]
    Paid,
    #[serde(rename = "vencido", alias = "overdue")]
    Overdue,
    #[serde(rename = "cancelado", alias = "cancelled")]
    Cancelled
}

impl LoanState {
    pub fn wire_name(self) -> &'static str {
        match self {
            LoanState::Active => "activo",
            LoanState::Paid => "pagado",
            LoanState::Overdue => "vencido",
            LoanState::Cancelled => "cancelado"
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Deserialize)]
pub enum TransactionType {
    #[serde(rename = "efectivo", alias = "cash")]
    Cash,
    #[serde(rename = "prestamo", alias = "loan")]
    Loan,
    #[serde(rename = "pago_prestamos", alias = "loan_payment")]
    LoanPayment,
    #[serde(rename = "pago_prestamo_pendiente", alias = "pending_loan_payment")]
    PendingLoanPayment,
    #[serde(rename = "ingreso", alias = "income")]
    Income,
    #[serde(rename = "gasto", alias = "expense")]
    Expense
}

impl TransactionType {
    pub const ALL: [TransactionType; 6] = [
        TransactionType::Cash,
        TransactionType::Loan,
        TransactionType::LoanPayment,
        TransactionType::PendingLoanPayment,
        TransactionType::Income,
        TransactionType::Expense
    ];

    /// Whether the entry adds money to the group's ledger.
    pub fn is_inflow(self) -> bool {
        matches!(
            self,
            TransactionType::Cash | TransactionType::LoanPayment | TransactionType::PendingLoanPayment | TransactionType::Income
        )
    }

    pub fn wire_name(self) -> &'static str {
        match self {
            TransactionType::Cash => "efectivo",
            TransactionType::Loan => "prestamo",
            TransactionType::LoanPayment => "pago_prestamos",
            TransactionType::PendingLoanPayment => "pago_prestamo_pendiente",
            TransactionType::Income => "ingreso",
            TransactionType::Expense => "gasto"
        }
    }

    /// Label shown to group members.
    pub fn label(self) -> &'static str {
        match self {
            TransactionType::Cash => "Efectivo",
            TransactionType::Loan => "Préstamo",
            TransactionType::LoanPayment => "Pago Préstamo",
            TransactionType::PendingLoanPayment => "Pago Pendiente",
            TransactionType::Income => "Ingreso",
            TransactionType::Expense => "Gasto"
        }
    }

    fn english_name(self) -> &'static str {
        match self {
            TransactionType::Cash => "cash",
            TransactionType::Loan => "loan",
            TransactionType::LoanPayment => "loan_payment",
            TransactionType::PendingLoanPayment => "pending_loan_payment",
            TransactionType::Income => "income",
            TransactionType::Expense => "expense"
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

#[derive(Debug, Error)]
#[error("Unknown transaction type [{0}]")]
pub struct UnknownTransactionType(pub String);

impl FromStr for TransactionType {
    type Err = UnknownTransactionType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_lowercase().replace(['-', ' '], "_");

        TransactionType::ALL.into_iter()
            .find(|kind| kind.wire_name() == normalized || kind.english_name() == normalized)
            .ok_or_else(|| UnknownTransactionType(value.to_string()))
    }
}
