use super::transport::TransportError;

/// 1-based column index in letter form: 1 -> "A", 26 -> "Z", 27 -> "AA".
pub fn column_letter(mut col: usize) -> String {
    let mut letter = String::new();
    while col > 0 {
        col -= 1;
        letter.insert(0, (b'A' + (col % 26) as u8) as char);
        col /= 26;
    }
    letter
}

/// A1 address of a single cell from 1-based row and column.
pub fn cell_address(row: usize, col: usize) -> String {
    format!("{}{}", column_letter(col), row)
}

/// The two range forms the client emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeRef {
    /// Inclusive full-column span such as `A:N`.
    Columns { start: usize, end: usize },
    /// Single cell such as `D12`.
    Cell { row: usize, col: usize },
}

pub fn parse_range(range: &str) -> Result<RangeRef, TransportError> {
    if let Some((a, b)) = range.split_once(':') {
        if let (Some(start), Some(end)) = (column_index(a), column_index(b)) {
            if start <= end {
                return Ok(RangeRef::Columns { start, end });
            }
        }
        return Err(TransportError::BadRange(range.to_string()));
    }

    let digits_at = range
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(|| TransportError::BadRange(range.to_string()))?;
    let (letters, digits) = range.split_at(digits_at);
    match (column_index(letters), digits.parse::<usize>().ok()) {
        (Some(col), Some(row)) if row >= 1 => Ok(RangeRef::Cell { row, col }),
        _ => Err(TransportError::BadRange(range.to_string())),
    }
}

fn column_index(letters: &str) -> Option<usize> {
    if letters.is_empty() {
        return None;
    }
    let mut n = 0usize;
    for c in letters.chars() {
        if !c.is_ascii_uppercase() {
            return None;
        }
        n = n * 26 + (c as usize - 'A' as usize + 1);
    }
    Some(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_letters_carry_past_z() {
        assert_eq!(column_letter(1), "A");
        assert_eq!(column_letter(26), "Z");
        assert_eq!(column_letter(27), "AA");
        assert_eq!(column_letter(52), "AZ");
        assert_eq!(column_letter(53), "BA");
    }

    #[test]
    fn letters_and_indexes_agree() {
        for col in [1, 4, 14, 26, 27, 52, 53, 702, 703] {
            assert_eq!(column_index(&column_letter(col)), Some(col));
        }
    }

    #[test]
    fn cell_addresses_concatenate_letter_and_row() {
        assert_eq!(cell_address(12, 4), "D12");
        assert_eq!(cell_address(1, 27), "AA1");
    }

    #[test]
    fn parses_both_emitted_forms() {
        assert_eq!(
            parse_range("A:N").expect("span"),
            RangeRef::Columns { start: 1, end: 14 }
        );
        assert_eq!(
            parse_range("D12").expect("cell"),
            RangeRef::Cell { row: 12, col: 4 }
        );
        assert_eq!(
            parse_range("AA7").expect("cell"),
            RangeRef::Cell { row: 7, col: 27 }
        );
    }

    #[test]
    fn malformed_ranges_are_rejected() {
        for bad in ["", "12", "a3", "N:A", ":", "A:", "A0", "A1:N50"] {
            assert!(
                matches!(parse_range(bad), Err(TransportError::BadRange(_))),
                "{bad:?} should not parse"
            );
        }
    }
}
