//! National tax ID verification
//!
//! An identifier is 11 digits; the last two are check digits, each computed
//! from the preceding digits with a weighted mod-11 scheme:
//! - digit 10 is derived from digits 1-9
//! - digit 11 is derived from digits 1-10
//!
//! Formatting characters (`.`, `-`, spaces) are ignored. Identifiers whose
//! 11 digits are all identical pass the arithmetic but are structurally
//! invalid and always rejected.

/// Computes the check digit for a partial digit sequence.
///
/// For a sequence of length L, each digit is weighted by its distance from
/// the end plus one (L + 1 down to 2). The weighted sum is reduced mod 11:
/// a remainder below 2 yields 0, anything else yields `11 - remainder`.
///
/// This function is deterministic: the same input always produces the same
/// output.
pub fn check_digit(digits: &[u8]) -> u8 {
    let len = digits.len() as u32;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * (len + 1 - i as u32))
        .sum();
    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        (11 - remainder) as u8
    }
}

/// Verifies the trailing check digits of a digit sequence.
///
/// A 10-digit sequence carries one check digit, an 11-digit sequence two.
/// Any other length has nothing to verify and is rejected.
pub fn verify_check_digits(digits: &[u8]) -> bool {
    match digits.len() {
        10 => check_digit(&digits[..9]) == digits[9],
        11 => check_digit(&digits[..9]) == digits[9] && check_digit(&digits[..10]) == digits[10],
        _ => false,
    }
}

/// Verifies a full tax ID.
///
/// Accepts formatted (`111.444.777-35`) or bare (`11144477735`) input.
/// Returns `false` for empty or whitespace-only input, for anything other
/// than 11 digits after stripping formatting, for all-identical-digit
/// sequences, and for any check digit mismatch. Never errors: absence of
/// validity is the only signal.
pub fn is_valid(input: &str) -> bool {
    if input.trim().is_empty() {
        return false;
    }

    let digits: Vec<u8> = input
        .chars()
        .filter_map(|c| c.to_digit(10).map(|d| d as u8))
        .collect();

    if digits.len() != 11 {
        return false;
    }

    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    verify_check_digits(&digits)
}
