use std::fmt::Write as _;

/// Formats a predicted value with thousands grouping and exactly two
/// decimal places, e.g. `1234567.891` → `"1,234,567.89"`.
pub fn format_amount(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    grouped.push_str(sign);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let _ = write!(grouped, ".{frac_part}");

    grouped
}
