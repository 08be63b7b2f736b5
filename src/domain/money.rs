use super::ValidationError;

pub const MONTHS_PER_YEAR: f64 = 12.0;
pub const MONTHS_PER_FIVE_YEARS: f64 = 60.0;

/// Parse a monthly cost typed by the user, reading the longest leading
/// decimal number and ignoring whatever follows it.
/// Example: "15.99" -> 15.99, "9.99/mo" -> 9.99, "1,000" -> 1.0, "abc" -> error
pub fn parse_cost(input: &str) -> Result<f64, ValidationError> {
    let trimmed = input.trim();
    let number = leading_number(trimmed);
    if number.is_empty() {
        return Err(ValidationError::InvalidCost(trimmed.to_string()));
    }
    let cost: f64 = number
        .parse()
        .map_err(|_| ValidationError::InvalidCost(trimmed.to_string()))?;
    validate_cost(cost)
}

/// Longest prefix of the form `[+-]digits[.digits][(e|E)[+-]digits]` with at
/// least one mantissa digit. Empty when there is none.
fn leading_number(input: &str) -> &str {
    let bytes = input.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return "";
    }

    // Exponent only counts when it has digits: "1e" is just "1".
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    &input[..end]
}

/// Costs must be finite and strictly positive. NaN fails the `> 0` test.
pub fn validate_cost(cost: f64) -> Result<f64, ValidationError> {
    if cost.is_finite() && cost > 0.0 {
        Ok(cost)
    } else {
        Err(ValidationError::InvalidCost(cost.to_string()))
    }
}

/// Format an amount with two decimals behind a currency symbol.
/// Example: (19.5, "$") -> "$19.50", (0.0, "€") -> "€0.00"
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let formatted = format!("{:.2}", amount);
    // -0.001 rounds to "-0.00"
    let formatted = match formatted.strip_prefix('-') {
        Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => rest.to_string(),
        _ => formatted,
    };
    format!("{}{}", symbol, formatted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(19.5, "$"), "$19.50");
        assert_eq!(format_currency(15.99, "$"), "$15.99");
        assert_eq!(format_currency(0.0, "$"), "$0.00");
        assert_eq!(format_currency(959.4000000000001, "$"), "$959.40");
        assert_eq!(format_currency(1234.5, "€"), "€1234.50");
        assert_eq!(format_currency(-0.0, "$"), "$0.00");
    }

    #[test]
    fn test_parse_cost() {
        assert_eq!(parse_cost("15.99"), Ok(15.99));
        assert_eq!(parse_cost("  7 "), Ok(7.0));
        assert_eq!(parse_cost(".5"), Ok(0.5));
        assert_eq!(parse_cost("5."), Ok(5.0));
        assert_eq!(parse_cost("+2.5e1"), Ok(25.0));
    }

    #[test]
    fn test_parse_cost_reads_leading_number() {
        assert_eq!(parse_cost("12abc"), Ok(12.0));
        assert_eq!(parse_cost("9.99/mo"), Ok(9.99));
        assert_eq!(parse_cost("1,000"), Ok(1.0));
        assert_eq!(parse_cost("15.99 USD"), Ok(15.99));
        assert_eq!(parse_cost("12.34.56"), Ok(12.34));
        assert_eq!(parse_cost("3e"), Ok(3.0));
        assert_eq!(parse_cost("4E-"), Ok(4.0));
    }

    #[test]
    fn test_parse_cost_invalid() {
        assert!(parse_cost("").is_err());
        assert!(parse_cost("abc").is_err());
        assert!(parse_cost("0").is_err());
        assert!(parse_cost("-5").is_err());
        assert!(parse_cost("NaN").is_err());
        assert!(parse_cost("inf").is_err());
        assert!(parse_cost("Infinity").is_err());
        assert!(parse_cost(".").is_err());
        assert!(parse_cost("-").is_err());
        assert!(parse_cost("$5").is_err());
        assert!(parse_cost("0.00abc").is_err());
        assert!(parse_cost("-3 dollars").is_err());
        assert!(parse_cost("1e999").is_err());
    }

    #[test]
    fn test_validate_cost() {
        assert!(validate_cost(f64::NAN).is_err());
        assert!(validate_cost(f64::INFINITY).is_err());
        assert!(validate_cost(f64::MIN_POSITIVE).is_ok());
    }
}
