//! Text rendering of Postgres NUMERIC values.
//!
//! NUMERIC has no upper bound on precision and also stores `NaN` and `±Infinity`, so
//! values are turned into the same text `psql` shows instead of a fixed-precision type.

use sqlx::error::BoxDynError;

const NUMERIC_POS: u16 = 0x0000;
const NUMERIC_NEG: u16 = 0x4000;
const NUMERIC_NAN: u16 = 0xC000;
const NUMERIC_PINF: u16 = 0xD000;
const NUMERIC_NINF: u16 = 0xF000;

const HEADER_LEN: usize = 8;

fn read_i16(bytes: &[u8], at: usize) -> i16 {
    i16::from_be_bytes([bytes[at], bytes[at + 1]])
}

fn read_u16(bytes: &[u8], at: usize) -> u16 {
    u16::from_be_bytes([bytes[at], bytes[at + 1]])
}

/// Render a NUMERIC in binary wire format (`ndigits`, `weight`, `sign`, `dscale`, then
/// base-10000 digits) as decimal text.
pub(crate) fn numeric_to_string(bytes: &[u8]) -> Result<String, BoxDynError> {
    if bytes.len() < HEADER_LEN {
        return Err(format!("NUMERIC value is {} bytes, expected a header", bytes.len()).into());
    }

    let ndigits = read_i16(bytes, 0);
    let weight = i32::from(read_i16(bytes, 2));
    let sign = read_u16(bytes, 4);
    let dscale = usize::from(read_u16(bytes, 6));

    match sign {
        NUMERIC_NAN => return Ok("NaN".to_string()),
        NUMERIC_PINF => return Ok("Infinity".to_string()),
        NUMERIC_NINF => return Ok("-Infinity".to_string()),
        NUMERIC_POS | NUMERIC_NEG => {}
        other => return Err(format!("invalid NUMERIC sign 0x{:04X}", other).into()),
    }

    let ndigits = usize::try_from(ndigits).map_err(|_| "negative NUMERIC digit count")?;
    if bytes.len() != HEADER_LEN + ndigits * 2 {
        return Err(format!(
            "NUMERIC value is {} bytes for {} digits",
            bytes.len(),
            ndigits
        )
        .into());
    }
    let digits: Vec<i16> = (0..ndigits)
        .map(|i| read_i16(bytes, HEADER_LEN + i * 2))
        .collect();
    if let Some(bad) = digits.iter().find(|d| !(0..10000).contains(*d)) {
        return Err(format!("invalid NUMERIC digit {}", bad).into());
    }

    // Digit at position `i` is worth 10000^(weight - i); positions outside the list are 0
    let digit_at = |i: i32| -> i16 {
        usize::try_from(i)
            .ok()
            .and_then(|i| digits.get(i).copied())
            .unwrap_or(0)
    };

    let mut out = String::new();
    if sign == NUMERIC_NEG {
        out.push('-');
    }

    if weight < 0 {
        out.push('0');
    } else {
        out.push_str(&digit_at(0).to_string());
        for i in 1..=weight {
            out.push_str(&format!("{:04}", digit_at(i)));
        }
    }

    if dscale > 0 {
        let mut fraction = String::with_capacity(dscale + 4);
        let mut i = weight + 1;
        while fraction.len() < dscale {
            fraction.push_str(&format!("{:04}", digit_at(i)));
            i += 1;
        }
        fraction.truncate(dscale);
        out.push('.');
        out.push_str(&fraction);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(weight: i16, sign: u16, dscale: u16, digits: &[i16]) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&(digits.len() as i16).to_be_bytes());
        bytes.extend_from_slice(&weight.to_be_bytes());
        bytes.extend_from_slice(&sign.to_be_bytes());
        bytes.extend_from_slice(&dscale.to_be_bytes());
        for digit in digits {
            bytes.extend_from_slice(&digit.to_be_bytes());
        }
        bytes
    }

    #[test]
    fn test_whole_and_fractional_values() {
        assert_eq!(numeric_to_string(&encode(1, NUMERIC_POS, 0, &[12])).unwrap(), "120000");
        assert_eq!(
            numeric_to_string(&encode(1, NUMERIC_POS, 2, &[9, 0, 5000])).unwrap(),
            "90000.50"
        );
        assert_eq!(
            numeric_to_string(&encode(0, NUMERIC_NEG, 1, &[42, 5000])).unwrap(),
            "-42.5"
        );
    }

    #[test]
    fn test_zero_keeps_its_scale() {
        assert_eq!(numeric_to_string(&encode(0, NUMERIC_POS, 0, &[])).unwrap(), "0");
        assert_eq!(numeric_to_string(&encode(0, NUMERIC_POS, 2, &[])).unwrap(), "0.00");
    }

    #[test]
    fn test_small_fraction_has_leading_zero_groups() {
        // 0.00001 = 1000 * 10000^-2
        assert_eq!(
            numeric_to_string(&encode(-2, NUMERIC_POS, 5, &[1000])).unwrap(),
            "0.00001"
        );
    }

    #[test]
    fn test_values_beyond_fixed_precision() {
        // 1e30 = 100 * 10000^7
        let expected = format!("1{}", "0".repeat(30));
        assert_eq!(numeric_to_string(&encode(7, NUMERIC_POS, 0, &[100])).unwrap(), expected);
    }

    #[test]
    fn test_special_values() {
        assert_eq!(numeric_to_string(&encode(0, NUMERIC_NAN, 0, &[])).unwrap(), "NaN");
        assert_eq!(numeric_to_string(&encode(0, NUMERIC_PINF, 0, &[])).unwrap(), "Infinity");
        assert_eq!(numeric_to_string(&encode(0, NUMERIC_NINF, 0, &[])).unwrap(), "-Infinity");
    }

    #[test]
    fn test_malformed_values_are_errors() {
        assert!(numeric_to_string(&[0, 1]).is_err());
        // header claims two digits, only one present
        let mut truncated = encode(0, NUMERIC_POS, 0, &[1, 2]);
        truncated.truncate(10);
        assert!(numeric_to_string(&truncated).is_err());
        assert!(numeric_to_string(&encode(0, 0x1234, 0, &[])).is_err());
        assert!(numeric_to_string(&encode(0, NUMERIC_POS, 0, &[10000])).is_err());
    }
}
