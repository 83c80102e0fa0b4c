// EMI calculator: the standard closed-form amortizing-loan formula as used
// on the financing page. Pure arithmetic, no I/O.
//
// Unlike the frontend version, degenerate inputs (zero tenure, down payment
// above the loan amount) are rejected instead of producing a negative or
// infinite installment; slider clamping in the UI is not the only guard.

use crate::models::{LoanParameters, LoanSchedule};
use thiserror::Error;

/// Longest financeable term. Far above any real car loan, and keeps the
/// month arithmetic well clear of overflow for arbitrary request input.
pub const MAX_TENURE_YEARS: u32 = 30;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoanError {
    #[error("invalid loan parameters: {0}")]
    InvalidParameters(String),
}

/// Compute the monthly installment and interest breakdown for `params`.
///
/// The interest-bearing path rounds once, at the installment; the totals are
/// derived from the rounded value. The zero-interest path is exact flat
/// division of the principal over the term.
pub fn compute_schedule(params: &LoanParameters) -> Result<LoanSchedule, LoanError> {
    validate(params)?;

    let principal = params.loan_amount - params.down_payment;
    let monthly_rate = params.interest_rate / 12.0 / 100.0;
    let months = f64::from(params.tenure_years) * 12.0;

    let monthly_installment = if monthly_rate == 0.0 {
        principal / months
    } else {
        let growth = (1.0 + monthly_rate).powf(months);
        (principal * monthly_rate * growth / (growth - 1.0)).round()
    };

    let total_payable = monthly_installment * months;
    Ok(LoanSchedule {
        monthly_installment,
        principal,
        total_interest: total_payable - principal,
        total_payable,
    })
}

fn validate(params: &LoanParameters) -> Result<(), LoanError> {
    if params.loan_amount <= 0.0 {
        return Err(LoanError::InvalidParameters(
            "loan amount must be positive".to_string(),
        ));
    }
    if params.tenure_years == 0 {
        return Err(LoanError::InvalidParameters(
            "tenure must be at least one year".to_string(),
        ));
    }
    if params.tenure_years > MAX_TENURE_YEARS {
        return Err(LoanError::InvalidParameters(format!(
            "tenure cannot exceed {MAX_TENURE_YEARS} years"
        )));
    }
    if params.down_payment < 0.0 {
        return Err(LoanError::InvalidParameters(
            "down payment cannot be negative".to_string(),
        ));
    }
    if params.down_payment > params.loan_amount {
        return Err(LoanError::InvalidParameters(
            "down payment exceeds loan amount".to_string(),
        ));
    }
    if params.interest_rate < 0.0 {
        return Err(LoanError::InvalidParameters(
            "interest rate cannot be negative".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_scenario() {
        // 10 lakh loan, 2 lakh down, 10% for 5 years: the closed-form
        // installment on an 8 lakh principal over 60 months rounds to 16,998.
        let schedule = compute_schedule(&LoanParameters {
            loan_amount: 1_000_000.0,
            down_payment: 200_000.0,
            interest_rate: 10.0,
            tenure_years: 5,
        })
        .unwrap();

        assert_eq!(schedule.principal, 800_000.0);
        assert!((schedule.monthly_installment - 16_998.0).abs() <= 1.0);
        assert!((schedule.total_payable - schedule.monthly_installment * 60.0).abs() < 1e-6);
        assert!(
            (schedule.total_interest - (schedule.total_payable - 800_000.0)).abs() < 1e-6
        );
    }

    #[test]
    fn zero_interest_is_flat_division() {
        let schedule = compute_schedule(&LoanParameters {
            loan_amount: 920_000.0,
            down_payment: 200_000.0,
            interest_rate: 0.0,
            tenure_years: 5,
        })
        .unwrap();

        assert_eq!(schedule.monthly_installment, 720_000.0 / 60.0);
        assert_eq!(schedule.total_interest, 0.0);
        assert_eq!(schedule.total_payable, 720_000.0);
    }

    #[test]
    fn down_payment_above_loan_is_rejected() {
        let err = compute_schedule(&LoanParameters {
            loan_amount: 500_000.0,
            down_payment: 600_000.0,
            interest_rate: 10.0,
            tenure_years: 5,
        })
        .unwrap_err();
        assert!(matches!(err, LoanError::InvalidParameters(_)));
    }

    #[test]
    fn zero_tenure_is_rejected() {
        let err = compute_schedule(&LoanParameters {
            loan_amount: 500_000.0,
            down_payment: 100_000.0,
            interest_rate: 10.0,
            tenure_years: 0,
        })
        .unwrap_err();
        assert!(matches!(err, LoanError::InvalidParameters(_)));
    }

    #[test]
    fn non_positive_loan_amount_is_rejected() {
        for amount in [0.0, -100.0] {
            let err = compute_schedule(&LoanParameters {
                loan_amount: amount,
                down_payment: 0.0,
                interest_rate: 10.0,
                tenure_years: 5,
            })
            .unwrap_err();
            assert!(matches!(err, LoanError::InvalidParameters(_)));
        }
    }

    #[test]
    fn negative_rate_is_rejected() {
        let err = compute_schedule(&LoanParameters {
            loan_amount: 500_000.0,
            down_payment: 0.0,
            interest_rate: -1.0,
            tenure_years: 3,
        })
        .unwrap_err();
        assert!(matches!(err, LoanError::InvalidParameters(_)));
    }

    #[test]
    fn absurd_tenure_is_rejected() {
        // Tenures beyond the cap come straight from request JSON and must be
        // rejected in validation, never fed into the month arithmetic.
        for years in [MAX_TENURE_YEARS + 1, u32::MAX] {
            let err = compute_schedule(&LoanParameters {
                loan_amount: 500_000.0,
                down_payment: 0.0,
                interest_rate: 10.0,
                tenure_years: years,
            })
            .unwrap_err();
            assert!(matches!(err, LoanError::InvalidParameters(_)));
        }
    }

    #[test]
    fn maximum_tenure_is_accepted() {
        let schedule = compute_schedule(&LoanParameters {
            loan_amount: 500_000.0,
            down_payment: 0.0,
            interest_rate: 10.0,
            tenure_years: MAX_TENURE_YEARS,
        })
        .unwrap();
        assert!(schedule.monthly_installment > 0.0);
    }

    #[test]
    fn installment_is_whole_units_on_interest_path() {
        let schedule = compute_schedule(&LoanParameters {
            loan_amount: 1_234_567.0,
            down_payment: 34_567.0,
            interest_rate: 9.5,
            tenure_years: 4,
        })
        .unwrap();
        assert_eq!(
            schedule.monthly_installment,
            schedule.monthly_installment.round()
        );
    }
}
