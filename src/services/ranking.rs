use crate::error::ReportError;
use crate::services::snapshot::Snapshot;
use crate::types::models::Recipient;

/// Smallest indivisible units per whole token.
const UNITS_PER_TOKEN: f64 = 1e18;

fn parse_amount(address: &str, raw: &str) -> Result<u128, ReportError> {
    let digits = raw.trim();
    let digits = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .unwrap_or(digits);

    u128::from_str_radix(digits, 16).map_err(|_| ReportError::InvalidAmount {
        address: address.to_string(),
        value: raw.to_string(),
    })
}

/// Parses every raw amount and scales it down to whole tokens, accumulating
/// the aggregate total in encounter order.
pub fn convert(snapshot: &Snapshot) -> Result<(Vec<Recipient>, f64), ReportError> {
    let mut recipients = Vec::with_capacity(snapshot.len());
    let mut total = 0.0;

    for (address, raw) in snapshot {
        let quantity = parse_amount(address, raw)? as f64 / UNITS_PER_TOKEN;
        total += quantity;
        recipients.push(Recipient {
            address: address.clone(),
            quantity,
        });
    }

    Ok((recipients, total))
}

/// Sorts recipients by quantity descending. Stable, so equal quantities keep
/// their snapshot order.
pub fn rank(mut recipients: Vec<Recipient>) -> Vec<Recipient> {
    recipients.sort_by(|a, b| b.quantity.total_cmp(&a.quantity));
    recipients
}
