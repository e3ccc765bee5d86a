use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TipBreakdown {
    pub total_tip: f64,
    pub total_with_tip: f64,
    pub per_person: f64,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TipError {
    #[error("amount must be a non-negative number")]
    InvalidAmount,
    #[error("tip percent must be between 0 and 100")]
    TipPercentOutOfRange,
    #[error("people must be between 1 and 100")]
    PeopleOutOfRange,
}

impl TipError {
    pub fn field(&self) -> &'static str {
        match self {
            TipError::InvalidAmount => "amount",
            TipError::TipPercentOutOfRange => "tipPercent",
            TipError::PeopleOutOfRange => "people",
        }
    }
}

/// Split a bill: tip rounded to cents, then the tipped total divided evenly.
pub fn split_bill(amount: f64, tip_percent: u32, people: u32) -> Result<TipBreakdown, TipError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(TipError::InvalidAmount);
    }
    if tip_percent > 100 {
        return Err(TipError::TipPercentOutOfRange);
    }
    if !(1..=100).contains(&people) {
        return Err(TipError::PeopleOutOfRange);
    }

    let total_tip = round2(amount * tip_percent as f64 / 100.0);
    let total_with_tip = round2(amount + total_tip);
    let per_person = round2(total_with_tip / people as f64);

    Ok(TipBreakdown {
        total_tip,
        total_with_tip,
        per_person,
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
