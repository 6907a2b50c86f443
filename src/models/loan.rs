use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Deserializer};

use crate::loans::{compute_balance, LoanBalance};
use crate::models::{LoanState, RecordStatus};
use crate::types::{lenient_date, lenient_decimal, lenient_optional_decimal, lenient_timestamp, GroupId, LoanId, PaymentId};

/// An internal loan issued from the group's pooled funds ("préstamo").
///
/// `amount_paid` is the backend's figure and only grows as payments get
/// approved there; it is never recomputed from [`LoanPayment`] records.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Loan {
    pub id: LoanId,
    #[serde(rename = "natillera_id")]
    pub group_id: GroupId,
    #[serde(rename = "monto", default, deserialize_with = "lenient_decimal")]
    pub principal: Decimal,
    #[serde(rename = "tasa_interes", default, deserialize_with = "lenient_decimal")]
    pub annual_rate_pct: Decimal,
    #[serde(rename = "plazo_meses", default, deserialize_with = "lenient_months")]
    pub term_months: i32,
    #[serde(rename = "monto_pagado", default, deserialize_with = "lenient_decimal")]
    pub amount_paid: Decimal,
    #[serde(rename = "monto_pendiente", default, deserialize_with = "lenient_optional_decimal")]
    pub backend_outstanding: Option<Decimal>,
    #[serde(default)]
    pub status: RecordStatus,
    #[serde(rename = "estado", default)]
    pub state: Option<LoanState>,
    #[serde(rename = "fecha_inicio", default, deserialize_with = "lenient_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "fecha_vencimiento", default, deserialize_with = "lenient_date")]
    pub due_date: Option<NaiveDate>,
    #[serde(rename = "nombre_prestatario", default)]
    pub borrower_name: Option<String>
}

impl Loan {
    pub fn balance(&self) -> LoanBalance {
        compute_balance(self.principal, self.annual_rate_pct, self.term_months, self.amount_paid)
    }

    /// What the borrower still owes, preferring the backend's `monto_pendiente`.
    ///
    /// A missing or zero backend figure falls back to the loan's own terms.
    pub fn outstanding(&self) -> Decimal {
        self.backend_outstanding
            .filter(|amount| !amount.is_zero())
            .unwrap_or_else(|| self.balance().outstanding)
    }

    /// Days left until the due date, negative once it has passed.
    pub fn days_remaining(&self, today: NaiveDate) -> Option<i64> {
        self.due_date.map(|due_date| (due_date - today).num_days())
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.days_remaining(today).is_some_and(|days| days < 0) && self.outstanding() > Decimal::ZERO
    }
}

/// A repayment installment against a loan.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoanPayment {
    pub id: PaymentId,
    #[serde(rename = "prestamo_id")]
    pub loan_id: LoanId,
    #[serde(rename = "monto", default, deserialize_with = "lenient_decimal")]
    pub amount: Decimal,
    #[serde(rename = "fecha_pago", default, deserialize_with = "lenient_timestamp")]
    pub payment_date: Option<NaiveDateTime>,
    #[serde(rename = "estado", default)]
    pub status: RecordStatus
}

fn lenient_months<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_decimal(deserializer)?.trunc().to_i32().unwrap_or(0))
}
