pub const RECORD_DELIMITER: char = ';';
pub const COMMAND_DELIMITER: char = ' ';

const QUOTE: char = '"';

/// Splits `line` on `delimiter`, ignoring delimiters inside double quotes.
///
/// Quote characters only toggle the quoted state and are never copied. An
/// unterminated quote swallows the rest of the line into the current field.
/// The last field is always emitted, so the result is never empty.
pub fn split(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        if c == QUOTE {
            in_quotes = !in_quotes;
        } else if c == delimiter && !in_quotes {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    fields.push(current);

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_plain_fields() {
        assert_eq!(split("a;b;c", ';'), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_empty_input_yields_one_empty_field() {
        assert_eq!(split("", ';'), vec![""]);
    }

    #[test]
    fn test_split_keeps_empty_fields() {
        assert_eq!(split(";a;;b;", ';'), vec!["", "a", "", "b", ""]);
    }

    #[test]
    fn test_split_delimiter_inside_quotes() {
        assert_eq!(
            split("\"Pori;West\";Kalafornia;Ville;2", ';'),
            vec!["Pori;West", "Kalafornia", "Ville", "2"]
        );
    }

    #[test]
    fn test_split_quotes_are_stripped_mid_field() {
        assert_eq!(split("ab\"c\"d e", ' '), vec!["abcd", "e"]);
    }

    #[test]
    fn test_split_unterminated_quote_runs_to_end() {
        assert_eq!(split("a;\"b;c;d", ';'), vec!["a", "b;c;d"]);
    }

    #[test]
    fn test_split_command_line() {
        assert_eq!(
            split("compare \"Mary Ann\" Bob", COMMAND_DELIMITER),
            vec!["compare", "Mary Ann", "Bob"]
        );
        assert_eq!(split("clubs  Tampere", COMMAND_DELIMITER).len(), 3);
    }
}
