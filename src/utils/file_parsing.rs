/// Removes one pair of matching single or double quotes around `s`.
#[inline]
pub fn strip_surrounding_quotes(s: &str) -> &str {
    let b = s.as_bytes();
    if b.len() >= 2 {
        let first = b[0];
        let last = b[b.len() - 1];
        if (first == b'\'' && last == b'\'') || (first == b'"' && last == b'"') {
            return &s[1..s.len() - 1];
        }
    }
    s
}

/// Drops a trailing `\n` / `\r\n` left by line readers.
#[inline]
pub fn trim_line_ending(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}

/// Splits a line on commas, trimming whitespace around each field.
///
/// A quote opens a quoted section only when it is the first non-whitespace
/// character of a field; commas inside that section do not split. Quotes
/// elsewhere (`O'Brien`, `driver's note`) are ordinary characters. Quotes are
/// kept in the returned fields.
///
/// Trailing empty fields are dropped, so `"1,"` yields a single field and an
/// empty line yields none.
pub fn split_csv_preserving_quotes(line: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut in_quotes: Option<char> = None;

    for (i, ch) in line.char_indices() {
        match in_quotes {
            Some(q) if ch == q => in_quotes = None,
            Some(_) => {}
            None if (ch == '"' || ch == '\'') && line[start..i].trim().is_empty() => {
                in_quotes = Some(ch)
            }
            None if ch == ',' => {
                out.push(line[start..i].trim());
                start = i + 1;
            }
            None => {}
        }
    }
    out.push(line[start..].trim());

    while out.last().is_some_and(|f| f.is_empty()) {
        out.pop();
    }
    out
}

/// Field `index` of `line` with surrounding quotes removed.
pub fn field_at(line: &str, index: usize) -> Option<&str> {
    split_csv_preserving_quotes(line)
        .get(index)
        .copied()
        .map(strip_surrounding_quotes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_quotes_works() {
        assert_eq!(strip_surrounding_quotes("'a,b'"), "a,b");
        assert_eq!(strip_surrounding_quotes(r#""x""#), "x");
        assert_eq!(strip_surrounding_quotes("nq"), "nq");
        assert_eq!(strip_surrounding_quotes("'"), "'");
    }

    #[test]
    fn split_preserving_quotes() {
        let line = r#"'sunny',85,"85,5",FALSE,no"#;
        let p = split_csv_preserving_quotes(line);
        assert_eq!(p, vec!["'sunny'", "85", "\"85,5\"", "FALSE", "no"]);
    }

    #[test]
    fn split_keeps_inner_empty_fields_and_drops_trailing() {
        assert_eq!(split_csv_preserving_quotes("1,,3"), vec!["1", "", "3"]);
        assert_eq!(split_csv_preserving_quotes("1, 2 ,"), vec!["1", "2"]);
        assert!(split_csv_preserving_quotes("").is_empty());
    }

    #[test]
    fn quotes_inside_a_field_do_not_open_a_quoted_section() {
        assert_eq!(
            split_csv_preserving_quotes("id,driver's note,speed"),
            vec!["id", "driver's note", "speed"]
        );
        assert_eq!(split_csv_preserving_quotes("O'Brien,10"), vec!["O'Brien", "10"]);
        assert_eq!(split_csv_preserving_quotes(r#"5" pipe,2"#), vec!["5\" pipe", "2"]);
    }

    #[test]
    fn leading_quote_after_whitespace_still_quotes() {
        assert_eq!(split_csv_preserving_quotes(r#"a,  "b,c" ,d"#), vec!["a", "\"b,c\"", "d"]);
    }

    #[test]
    fn unbalanced_leading_quote_runs_to_end_of_line() {
        assert_eq!(split_csv_preserving_quotes("1,'open,2,3"), vec!["1", "'open,2,3"]);
    }

    #[test]
    fn line_endings_are_trimmed() {
        assert_eq!(trim_line_ending("a,b\r\n"), "a,b");
        assert_eq!(trim_line_ending("a,b\n"), "a,b");
        assert_eq!(trim_line_ending("a,b"), "a,b");
    }

    #[test]
    fn field_at_unquotes() {
        assert_eq!(field_at("x,'12.5',z", 1), Some("12.5"));
        assert_eq!(field_at("x,y", 2), None);
        assert_eq!(field_at("it's,7", 1), Some("7"));
    }
}
