use rust_decimal::Decimal;
use tracing::{debug, error};

// Months per year times percent
const INTEREST_DIVISOR: i64 = 12 * 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoanBalance {
    pub interest: Decimal,
    pub total_payable: Decimal,
    pub outstanding: Decimal
}

/// Simple interest, `principal * rate/100 * term/12`, with the balance clamped at zero.
pub fn compute_balance(principal: Decimal, annual_rate_pct: Decimal, term_months: i32, amount_paid: Decimal) -> LoanBalance {
    if principal <= Decimal::ZERO || annual_rate_pct <= Decimal::ZERO || term_months <= 0 {
        debug!("Degenerate loan terms: principal [{principal}], rate [{annual_rate_pct}], term [{term_months}]");
        return LoanBalance::default();
    }

    let interest = principal.checked_mul(annual_rate_pct)
        .and_then(|value| value.checked_mul(Decimal::from(term_months)))
        .and_then(|value| value.checked_div(Decimal::from(INTEREST_DIVISOR)));

    let Some((interest, total_payable)) = interest.and_then(|interest| {
        principal.checked_add(interest).map(|total| (interest, total))
    }) else {
        error!("Loan balance error: Overflow for principal [{principal}], rate [{annual_rate_pct}], term [{term_months}]");
        return LoanBalance::default();
    };

    let outstanding = total_payable.checked_sub(amount_paid)
        .map(|remaining| remaining.max(Decimal::ZERO))
        .unwrap_or(Decimal::ZERO);

    LoanBalance {
        interest,
        total_payable,
        outstanding
    }
}
