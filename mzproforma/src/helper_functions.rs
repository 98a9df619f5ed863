use std::fmt::Write;

/// Get the index of the next copy of the given char (looking at the byte value, does not guarantee full character)
pub(crate) fn next_char(chars: &[u8], start: usize, char: u8) -> Option<usize> {
    for (i, ch) in chars.get(start..)?.iter().enumerate() {
        if *ch == char {
            return Some(start + i);
        }
    }
    None
}

/// Convert a byte range of the text into the character offset and character length that
/// `Context::line` expects. Both byte positions have to be on character boundaries.
pub(crate) fn char_span(text: &str, start: usize, end: usize) -> (usize, usize) {
    (
        text[..start].chars().count(),
        text[start..end].chars().count(),
    )
}

/// Read the longest number at the start of the text, returning the value and the number of bytes
/// used. Any text after the number is ignored. Decimal numbers (`12`, `-1.5`, `.5`, `1e3`) are
/// read by `fast_float`, an exponent marker that is not followed by digits is not part of the
/// number. Hexadecimal numbers with optional fraction and binary exponent (`0x10`, `-0x1.8p1`)
/// are read as well. Returns `None` if no number is found.
pub(crate) fn float_prefix(text: &str) -> Option<(f64, usize)> {
    let bytes = text.as_bytes();
    let sign_length = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if matches!(
        bytes.get(sign_length..sign_length + 2),
        Some(b"0x" | b"0X")
    ) {
        let sign = if bytes[0] == b'-' { -1.0 } else { 1.0 };
        return Some(hex_prefix(bytes, sign_length + 2).map_or(
            (sign * 0.0, sign_length + 1),
            |(value, end)| (sign * value, end),
        ));
    }
    fast_float::parse_partial::<f64, _>(text).ok()
}

/// Read the hexadecimal digits (with optional fraction and binary exponent) starting at the given
/// index, returning the value and the index after the number, or `None` if there are no digits.
fn hex_prefix(bytes: &[u8], start: usize) -> Option<(f64, usize)> {
    let digits = |from: usize| {
        bytes
            .get(from..)
            .unwrap_or_default()
            .iter()
            .take_while(|b| b.is_ascii_hexdigit())
            .count()
    };
    let integer = digits(start);
    let has_point = bytes.get(start + integer) == Some(&b'.');
    let fraction = if has_point {
        digits(start + integer + 1)
    } else {
        0
    };
    if integer + fraction == 0 {
        return None;
    }

    let mut value = 0.0;
    for b in &bytes[start..start + integer] {
        value = value * 16.0 + f64::from(hex_value(*b));
    }
    let mut index = start + integer;
    if has_point {
        let mut scale = 1.0 / 16.0;
        for b in &bytes[index + 1..=index + fraction] {
            value += f64::from(hex_value(*b)) * scale;
            scale /= 16.0;
        }
        index += 1 + fraction;
    }
    if let Some((exponent, length)) = binary_exponent(bytes, index) {
        value *= 2.0_f64.powi(exponent);
        index += length;
    }
    Some((value, index))
}

/// Read a binary exponent (`p4` or `P-2`) at the given index, returning the exponent and its
/// length in bytes. Exponents too big for an `i32` are saturated.
fn binary_exponent(bytes: &[u8], index: usize) -> Option<(i32, usize)> {
    if !matches!(bytes.get(index), Some(b'p' | b'P')) {
        return None;
    }
    let mut end = index + 1;
    let negative = bytes.get(end) == Some(&b'-');
    if matches!(bytes.get(end), Some(b'+' | b'-')) {
        end += 1;
    }
    let start = end;
    let mut exponent: i32 = 0;
    while let Some(b) = bytes.get(end).filter(|b| b.is_ascii_digit()) {
        exponent = exponent.saturating_mul(10).saturating_add(i32::from(b - b'0'));
        end += 1;
    }
    (end > start).then_some((if negative { -exponent } else { exponent }, end - index))
}

const fn hex_value(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => 0,
    }
}

/// The canonical id for a numeric mass shift, the shift in fixed notation with two decimals
pub(crate) fn canonical_id(mass_shift: f64) -> String {
    format!("{mass_shift:.2}")
}

/// Write a mass shift tag `[+N.NN]`, negative shifts get their sign from the number itself
pub(crate) fn write_mass_tag(f: &mut impl Write, mass_shift: f64) -> std::fmt::Result {
    write!(
        f,
        "[{}{mass_shift:.2}]",
        if mass_shift > 0.0 { "+" } else { "" }
    )
}

#[test]
#[allow(clippy::missing_panics_doc)]
fn test_next_char() {
    assert_eq!(next_char(b"M[+1]", 0, b'['), Some(1));
    assert_eq!(next_char(b"M[+1]", 2, b']'), Some(4));
    assert_eq!(next_char(b"M[+1", 2, b']'), None);
    assert_eq!(next_char(b"M", 5, b']'), None);
}

#[test]
#[allow(clippy::missing_panics_doc)]
fn test_mass_tag() {
    let mut text = String::new();
    write_mass_tag(&mut text, 79.966).unwrap();
    write_mass_tag(&mut text, -18.0).unwrap();
    assert_eq!(text, "[+79.97][-18.00]");
    assert_eq!(canonical_id(250.5), "250.50");
    assert_eq!(canonical_id(-0.001), "-0.00");
}

#[test]
#[allow(clippy::missing_panics_doc)]
fn test_float_prefix() {
    assert_eq!(float_prefix("+250.50"), Some((250.5, 7)));
    assert_eq!(float_prefix("+250.50abc"), Some((250.5, 7)));
    assert_eq!(float_prefix("-18"), Some((-18.0, 3)));
    assert_eq!(float_prefix("+1."), Some((1.0, 3)));
    assert_eq!(float_prefix("-.5Da"), Some((-0.5, 3)));
    assert_eq!(float_prefix("+1e1"), Some((10.0, 4)));
    assert_eq!(float_prefix("+2.5E-1x"), Some((0.25, 7)));
    assert_eq!(float_prefix("+1e"), Some((1.0, 2)));
    assert_eq!(float_prefix("+1e+"), Some((1.0, 2)));
    assert_eq!(float_prefix("+0x10"), Some((16.0, 5)));
    assert_eq!(float_prefix("-0X1.8p1"), Some((-3.0, 8)));
    assert_eq!(float_prefix("+0xg"), Some((0.0, 2)));
    assert_eq!(float_prefix("+"), None);
    assert_eq!(float_prefix("-Lys-loss"), None);
    assert_eq!(float_prefix("+.e1"), None);
    assert!(float_prefix("+inf").is_some_and(|(value, _)| value.is_infinite()));
    assert_eq!(float_prefix("Cation:Na+"), None);
}

#[test]
#[allow(clippy::missing_panics_doc)]
fn test_char_span() {
    assert_eq!(char_span("M[+1]", 1, 5), (1, 4));
    assert_eq!(char_span("μ[+0]", 2, 6), (1, 4));
    assert_eq!(char_span("PEPμ[+1μ]", 5, 11), (4, 5));
}
