use crate::errors::{Error, Result};

/// Values closer to zero than this are treated as zero
pub const EPSILON: f64 = 1e-10;

/// Return the Modelica representation of the given number.
///
/// Values are given with two decimal places, unless both are zero in
/// which case the fraction is dropped entirely.
pub fn fstr(x: f64) -> String {
    let result = format!("{x:.2}");
    let result = result.strip_suffix(".00").unwrap_or(&result);
    if result == "-0" {
        "0".to_string()
    } else {
        result.to_string()
    }
}

/// Format a corner pair as a Modelica extent: `{{x1,y1},{x2,y2}}`
pub fn extent_str(x1: f64, y1: f64, x2: f64, y2: f64) -> String {
    format!(
        "{{{{{},{}}},{{{},{}}}}}",
        fstr(x1),
        fstr(y1),
        fstr(x2),
        fstr(y2)
    )
}

/// Parse a string to an f64
pub fn strp(s: &str) -> Result<f64> {
    s.trim().parse().map_err(|e: std::num::ParseFloatError| e.into())
}

/// Parse the leading number of a string, ignoring any suffix such as a unit.
///
/// `"210mm"` gives 210, `"-1.5e2px"` gives -150.
pub fn strp_lead(s: &str) -> Result<f64> {
    let (number, _) = split_number(s);
    if number.is_empty() {
        return Err(Error::Parse(format!("expected a number: '{s}'")));
    }
    strp(number)
}

/// Split a string into a leading number and the (trimmed) remainder.
pub fn split_number(s: &str) -> (&str, &str) {
    let s = s.trim();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'-' | b'+')) {
        end += 1;
    }
    let mut seen_dot = false;
    let mut seen_digit = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            b'e' | b'E' if seen_digit => {
                // only an exponent if followed by (signed) digits
                let mut exp_end = end + 1;
                if matches!(bytes.get(exp_end), Some(b'-' | b'+')) {
                    exp_end += 1;
                }
                if matches!(bytes.get(exp_end), Some(b'0'..=b'9')) {
                    end = exp_end;
                    while matches!(bytes.get(end), Some(b'0'..=b'9')) {
                        end += 1;
                    }
                }
                break;
            }
            _ => break,
        }
        end += 1;
    }
    if !seen_digit {
        return ("", s);
    }
    (&s[..end], s[end..].trim())
}

/// Returns iterator over whitespace-or-comma separated values
pub fn attr_split(input: &str) -> impl Iterator<Item = String> + '_ {
    input
        .split_whitespace()
        .flat_map(|v| v.split(','))
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
}

pub fn nonzero(x: f64) -> bool {
    x.abs() > EPSILON
}

/// Equivalent of numpy's `isclose()` with the given tolerances
pub fn is_close(a: f64, b: f64, rtol: f64, atol: f64) -> bool {
    (a - b).abs() <= atol + rtol * b.abs()
}
