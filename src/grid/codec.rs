//! Grid-letter references ("TG 514 131") ⇄ numeric easting/northing.
//!
//! The first letter picks a 500 km square and the second a 100 km square
//! within it, both from a 5×5 alphabet without "I". Square SV holds the false
//! origin of the grid.

use std::fmt;

use crate::coords::PlanarCoordinate;
use crate::error::ConversionError;

/// Default reference length, 100 m precision.
pub const DEFAULT_DIGITS: u8 = 6;

/// 100 km squares covered by the grid, easting 0..=6, northing 0..=12.
const MAX_E100K: i64 = 6;
const MAX_N100K: i64 = 12;

/// Result of encoding a grid position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EncodedReference {
    InGrid(String),
    /// Outside the lettered 100 km squares; displays as the empty string.
    OutOfExtent,
}

impl EncodedReference {
    pub fn as_str(&self) -> &str {
        match self {
            EncodedReference::InGrid(s) => s,
            EncodedReference::OutOfExtent => "",
        }
    }

    pub fn is_out_of_extent(&self) -> bool {
        matches!(self, EncodedReference::OutOfExtent)
    }

    pub fn into_option(self) -> Option<String> {
        match self {
            EncodedReference::InGrid(s) => Some(s),
            EncodedReference::OutOfExtent => None,
        }
    }
}

impl fmt::Display for EncodedReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Letter index with "I" removed: A–H → 0–7, J–Z → 8–24.
fn letter_index(c: char) -> Option<i64> {
    let c = c.to_ascii_uppercase();
    if !c.is_ascii_uppercase() || c == 'I' {
        return None;
    }
    let i = (c as u8 - b'A') as i64;
    Some(if i > 7 { i - 1 } else { i })
}

fn index_letter(i: i64) -> char {
    let i = if i > 7 { i + 1 } else { i };
    (b'A' + i as u8) as char
}

/// Decode a grid reference into metres, centred on the square it names.
///
/// Letters are case-insensitive and spaces in the numeric part are ignored.
/// The numeric part has 0, 2, 4, 6, 8 or 10 digits split evenly between
/// easting and northing.
pub fn decode(reference: &str) -> Result<PlanarCoordinate, ConversionError> {
    let invalid = |why: &str| ConversionError::InvalidGridReference(format!("{reference:?}: {why}"));

    let trimmed = reference.trim();
    let mut chars = trimmed.chars();
    let (l1, l2) = match (chars.next(), chars.next()) {
        (Some(a), Some(b)) => (
            letter_index(a).ok_or_else(|| invalid("bad first grid letter"))?,
            letter_index(b).ok_or_else(|| invalid("bad second grid letter"))?,
        ),
        _ => return Err(invalid("missing grid letters")),
    };

    let mut digits = Vec::with_capacity(10);
    for c in chars {
        match c {
            ' ' => continue,
            '0'..='9' => digits.push((c as u8 - b'0') as i64),
            _ => return Err(invalid("unexpected character")),
        }
    }
    if digits.len() % 2 != 0 {
        return Err(invalid("odd number of digits"));
    }
    if digits.len() > 10 {
        return Err(invalid("more than 10 digits"));
    }

    // 100 km square indices from the false origin (square SV)
    let e100k = (l1 - 2).rem_euclid(5) * 5 + l2.rem_euclid(5);
    let n100k = (19 - (l1 / 5) * 5) - l2 / 5;

    let half = digits.len() / 2;
    let to_number = |ds: &[i64]| ds.iter().fold(0, |acc, d| acc * 10 + d);
    // Size of the square the reference names, in metres
    let cell = 10_i64.pow(5 - half as u32);
    let centre = if cell > 1 { cell / 2 } else { 0 };

    let easting = e100k * 100_000 + to_number(&digits[..half]) * cell + centre;
    let northing = n100k * 100_000 + to_number(&digits[half..]) * cell + centre;

    tracing::trace!(reference, easting, northing, "decoded grid reference");
    Ok(PlanarCoordinate::flat(easting as f64, northing as f64))
}

/// Encode a grid position as a reference of `digits` digits (even, 2–10).
///
/// Positions are truncated to the bottom-left of their square, not rounded.
pub fn encode(coord: &PlanarCoordinate, digits: u8) -> Result<EncodedReference, ConversionError> {
    if !(2..=10).contains(&digits) || digits % 2 != 0 {
        return Err(ConversionError::InvalidDigits(digits));
    }

    let e = coord.easting.floor();
    let n = coord.northing.floor();
    if !(e.is_finite() && n.is_finite()) {
        return Ok(EncodedReference::OutOfExtent);
    }

    let e100k = (e / 100_000.0).floor();
    let n100k = (n / 100_000.0).floor();
    if e100k < 0.0 || e100k > MAX_E100K as f64 || n100k < 0.0 || n100k > MAX_N100K as f64 {
        tracing::debug!(easting = coord.easting, northing = coord.northing, "outside grid extent");
        return Ok(EncodedReference::OutOfExtent);
    }
    let (e100k, n100k) = (e100k as i64, n100k as i64);
    let (e, n) = (e as i64, n as i64);

    let l1 = (19 - n100k) - (19 - n100k) % 5 + (e100k + 10) / 5;
    let l2 = (19 - n100k) * 5 % 25 + e100k % 5;

    let width = (digits / 2) as usize;
    let cell = 10_i64.pow(5 - width as u32);
    let e_part = (e % 100_000) / cell;
    let n_part = (n % 100_000) / cell;

    Ok(EncodedReference::InGrid(format!(
        "{}{} {:0width$} {:0width$}",
        index_letter(l1),
        index_letter(l2),
        e_part,
        n_part,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en(reference: &str) -> (f64, f64) {
        let p = decode(reference).unwrap();
        (p.easting, p.northing)
    }

    #[test]
    fn test_decode_worked_example() {
        assert_eq!(en("TG 51409 13177"), (651_409.0, 313_177.0));
        assert_eq!(en("TG5140913177"), (651_409.0, 313_177.0));
        assert_eq!(en("tg 51409 13177"), (651_409.0, 313_177.0));
    }

    #[test]
    fn test_decode_centres_coarse_references() {
        assert_eq!(en("SU387148"), (438_750.0, 114_850.0));
        assert_eq!(en("SU 3870 1480"), (438_705.0, 114_805.0));
        assert_eq!(en("SU 38 14"), (438_500.0, 114_500.0));
        assert_eq!(en("SU 3 1"), (435_000.0, 115_000.0));
        assert_eq!(en("SU"), (450_000.0, 150_000.0));
    }

    #[test]
    fn test_decode_false_origin_square() {
        assert_eq!(en("SV 00000 00000"), (0.0, 0.0));
        assert_eq!(en("SV 000 000"), (50.0, 50.0));
    }

    #[test]
    fn test_decode_letters_around_skipped_i() {
        // H and J are adjacent in the grid alphabet
        assert_eq!(en("HP 00000 00000"), (400_000.0, 1_200_000.0));
        assert_eq!(en("JA 00000 00000"), (500_000.0, 1_400_000.0));
        assert_eq!(en("NH 00000 00000"), (200_000.0, 800_000.0));
        assert_eq!(en("NJ 00000 00000"), (300_000.0, 800_000.0));
    }

    #[test]
    fn test_decode_rejects_letter_i() {
        assert!(matches!(
            decode("SI 123 456"),
            Err(ConversionError::InvalidGridReference(_))
        ));
        assert!(decode("IT 123 456").is_err());
    }

    #[test]
    fn test_decode_rejects_malformed() {
        for bad in [
            "",
            "S",
            "S1 123 456",
            "SU 12345",
            "SU 123 45",
            "SU 123456 123456",
            "SU 12a 456",
            "SU-123-456",
            "ÅU 123 456",
        ] {
            assert!(
                matches!(decode(bad), Err(ConversionError::InvalidGridReference(_))),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn test_encode_worked_example() {
        let p = PlanarCoordinate::flat(651_409.0, 313_177.0);
        assert_eq!(encode(&p, 10).unwrap().as_str(), "TG 51409 13177");
        assert_eq!(encode(&p, 8).unwrap().as_str(), "TG 5140 1317");
        assert_eq!(encode(&p, 6).unwrap().as_str(), "TG 514 131");
        assert_eq!(encode(&p, 4).unwrap().as_str(), "TG 51 13");
        assert_eq!(encode(&p, 2).unwrap().as_str(), "TG 5 1");
    }

    #[test]
    fn test_encode_truncates_and_pads() {
        let p = PlanarCoordinate::flat(438_799.9, 114_899.9);
        assert_eq!(encode(&p, 6).unwrap().to_string(), "SU 387 148");
        let p = PlanarCoordinate::flat(400_012.0, 1_200_003.0);
        assert_eq!(encode(&p, 10).unwrap().to_string(), "HP 00012 00003");
        let p = PlanarCoordinate::flat(0.0, 0.0);
        assert_eq!(encode(&p, 6).unwrap().to_string(), "SV 000 000");
    }

    #[test]
    fn test_encode_out_of_extent() {
        let p = PlanarCoordinate::flat(4_300_000.0, 500_000.0);
        let r = encode(&p, 6).unwrap();
        assert!(r.is_out_of_extent());
        assert_eq!(r.to_string(), "");
        assert_eq!(r.into_option(), None);

        assert!(encode(&PlanarCoordinate::flat(-1.0, 10.0), 6).unwrap().is_out_of_extent());
        assert!(encode(&PlanarCoordinate::flat(10.0, 1_300_000.0), 6).unwrap().is_out_of_extent());
        assert!(encode(&PlanarCoordinate::flat(f64::NAN, 0.0), 6).unwrap().is_out_of_extent());
        assert!(!encode(&PlanarCoordinate::flat(699_999.0, 1_299_999.0), 6)
            .unwrap()
            .is_out_of_extent());
    }

    #[test]
    fn test_encode_rejects_bad_digit_counts() {
        let p = PlanarCoordinate::flat(651_409.0, 313_177.0);
        for digits in [0, 1, 3, 7, 12] {
            assert!(matches!(
                encode(&p, digits),
                Err(ConversionError::InvalidDigits(d)) if d == digits
            ));
        }
    }

    #[test]
    fn test_every_square_round_trips() {
        for e100k in 0..=6 {
            for n100k in 0..=12 {
                let p = PlanarCoordinate::flat(e100k as f64 * 100_000.0, n100k as f64 * 100_000.0);
                let reference = encode(&p, 10).unwrap();
                let back = decode(reference.as_str()).unwrap();
                assert_eq!(back, p, "{reference}");
            }
        }
    }
}
