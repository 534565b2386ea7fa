use once_cell::sync::Lazy;
use regex::Regex;

static INTEGER_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?\d+$").expect("integer pattern is valid"));

static UNBOUNDED_FRACTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?\d+(\.\d+)?$").expect("decimal pattern is valid"));

/// Pattern matching optionally negative whole numbers.
pub fn integer_number() -> &'static Regex {
    &INTEGER_NUMBER
}

/// Pattern matching optionally negative decimals with at most
/// `fraction_length` digits after the decimal point. The fraction is
/// optional, so plain integers always match.
///
/// A `fraction_length` of zero degenerates to the integer pattern rather than
/// producing an unsatisfiable `{1,0}` repetition. A bound too large for the
/// regex compiler falls back to accepting any number of fraction digits.
pub fn fraction_number(fraction_length: u32) -> Regex {
    if fraction_length == 0 {
        return INTEGER_NUMBER.clone();
    }
    let source = format!(r"^-?\d+(\.\d{{1,{}}})?$", fraction_length);
    match Regex::new(&source) {
        Ok(pattern) => pattern,
        // `{1,n}` repetitions with bounds in the millions exceed the regex
        // size limit. The table decides the bound, so never panic on it.
        Err(_) => UNBOUNDED_FRACTION.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_pattern_accepts_whole_numbers() {
        for value in ["0", "42", "-7", "1234567890"] {
            assert!(integer_number().is_match(value), "{value} should match");
        }
    }

    #[test]
    fn integer_pattern_rejects_decimals_and_garbage() {
        for value in ["1.5", "-", "", "1e3", " 42", "42 ", "0x1f"] {
            assert!(!integer_number().is_match(value), "{value} should not match");
        }
    }

    #[test]
    fn fraction_pattern_bounds_decimal_digits() {
        let pattern = fraction_number(4);
        for value in ["1200", "-3", "0.1", "1234.5678", "-0.0001"] {
            assert!(pattern.is_match(value), "{value} should match");
        }
        for value in ["1.12345", "1.", ".5", "abc", "1,5"] {
            assert!(!pattern.is_match(value), "{value} should not match");
        }
    }

    #[test]
    fn fraction_length_one_allows_single_digit() {
        let pattern = fraction_number(1);
        assert!(pattern.is_match("2.5"));
        assert!(!pattern.is_match("2.55"));
    }

    #[test]
    fn zero_fraction_length_behaves_like_integer() {
        let pattern = fraction_number(0);
        assert!(pattern.is_match("42"));
        assert!(pattern.is_match("-42"));
        assert!(!pattern.is_match("42.0"));
    }

    #[test]
    fn oversized_fraction_length_accepts_any_fraction() {
        for bound in [100_000_000, u32::MAX] {
            let pattern = fraction_number(bound);
            assert!(pattern.is_match("1200.55"));
            assert!(pattern.is_match("-0.123456789012345678901234567890"));
            assert!(pattern.is_match("42"));
            assert!(!pattern.is_match("1."));
            assert!(!pattern.is_match("abc"));
        }
    }
}
