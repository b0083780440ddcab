//! Input sanitising for offers. The engine accepts anything; the HTTP layer does not.

use crate::errors::AppError;
use crate::reality::Offer;

pub fn validate_offer(label: &str, offer: &Offer) -> Result<(), AppError> {
    let amounts = [
        ("ctc", Some(offer.ctc)),
        ("base", offer.base),
        ("stocks", offer.stocks),
        ("joiningBonus", offer.joining_bonus),
    ];

    for (field, value) in amounts {
        if let Some(v) = value {
            if !v.is_finite() || v < 0.0 {
                return Err(AppError::Validation(format!(
                    "{label}.{field} must be a non-negative number (LPA), got {v}"
                )));
            }
        }
    }
    Ok(())
}
