/// Divides in double precision and rounds the quotient to hundredths the way
/// `Number.prototype.toFixed(2)` does: on the exact value of the double, with
/// a true tie going to the larger candidate. A zero denominator yields zero.
pub fn round_to_hundredths(numerator: u64, denominator: u64) -> u64 {
    if denominator == 0 {
        return 0;
    }
    let quotient = numerator as f64 / denominator as f64;
    let (mantissa, exponent) = decompose(quotient);

    if exponent >= 0 {
        // whole number, nothing to round
        return (mantissa << exponent).saturating_mul(100);
    }
    let shift = exponent.unsigned_abs();
    // mantissa * 100 < 2^60, so past this shift the value is below 0.5 hundredths
    if shift >= 62 {
        return 0;
    }
    // floor(mantissa * 100 / 2^shift + 1/2), exactly
    ((u128::from(mantissa) * 200 + (1u128 << shift)) >> (shift + 1)) as u64
}

/// Splits a finite, non-negative double into `mantissa * 2^exponent`.
fn decompose(value: f64) -> (u64, i32) {
    let bits = value.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1 << 52) - 1);
    if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1 << 52), biased - 1075)
    }
}

/// Renders a count of hundredths with exactly two decimals.
pub fn format_hundredths(hundredths: u64) -> String {
    format!("{}.{:02}", hundredths / 100, hundredths % 100)
}
