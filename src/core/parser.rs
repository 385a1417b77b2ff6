//! Line grouping for the passport batch format.
//!
//! A batch is a sequence of lines. Consecutive non-empty lines form one
//! record block; each block holds whitespace-separated `key:value` tokens.

use crate::domain::model::{Field, Record};

/// Builds a record from one block of `key:value` tokens.
///
/// Tokens are split on their first colon, so `hcl:#a:b` sets `hcl` to `#a:b`.
/// Tokens without a colon and unknown keys are skipped. A repeated key keeps
/// the last value.
pub fn parse_record(block: &str) -> Record {
    let mut record = Record::default();
    for token in block.split_whitespace() {
        let Some((key, value)) = token.split_once(':') else {
            tracing::trace!("Skipping token without a colon: {}", token);
            continue;
        };
        match Field::from_key(key) {
            Some(field) => record.set(field, value),
            None => tracing::trace!("Ignoring unknown field: {}", key),
        }
    }
    record
}

/// Lazy, single-pass iterator of records over a sequence of lines.
///
/// Only an empty line ends a block; a whitespace-only line belongs to the
/// block around it. Blocks without any tokens are skipped, so runs of empty
/// lines never produce empty records. A final block without a trailing empty
/// line is still emitted.
pub struct Records<I> {
    lines: I,
    block: String,
}

impl<I> Records<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    pub fn new<L: IntoIterator<IntoIter = I>>(lines: L) -> Self {
        Self {
            lines: lines.into_iter(),
            block: String::new(),
        }
    }
}

fn take_block(block: &mut String) -> Option<Record> {
    if block.trim().is_empty() {
        block.clear();
        return None;
    }
    let record = parse_record(block);
    block.clear();
    Some(record)
}

impl<I> Iterator for Records<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = Record;

    fn next(&mut self) -> Option<Record> {
        for line in self.lines.by_ref() {
            let line = line.as_ref();
            if line.is_empty() {
                if let Some(record) = take_block(&mut self.block) {
                    return Some(record);
                }
                continue;
            }
            self.block.push(' ');
            self.block.push_str(line);
        }
        take_block(&mut self.block)
    }
}

pub fn records<L>(lines: L) -> Records<L::IntoIter>
where
    L: IntoIterator,
    L::Item: AsRef<str>,
{
    Records::new(lines)
}

pub fn records_from_str(text: &str) -> Records<std::str::Lines<'_>> {
    Records::new(text.lines())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record_populates_known_fields() {
        let record = parse_record("hgt:171cm hcl:#cfa07d pid:674448249");

        assert_eq!(record.hgt, "171cm");
        assert_eq!(record.hcl, "#cfa07d");
        assert_eq!(record.pid, "674448249");
        assert_eq!(record.byr, "");
        assert_eq!(record.cid, "");
    }

    #[test]
    fn test_parse_record_matches_keys_case_insensitively() {
        let record = parse_record("BYR:1937 Ecl:gry");

        assert_eq!(record.byr, "1937");
        assert_eq!(record.ecl, "gry");
    }

    #[test]
    fn test_parse_record_ignores_unknown_and_malformed_tokens() {
        let record = parse_record("foo:bar nocolon ecl:amb :empty");

        assert_eq!(record.ecl, "amb");
        assert_eq!(
            record,
            Record {
                ecl: "amb".to_string(),
                ..Record::default()
            }
        );
    }

    #[test]
    fn test_parse_record_splits_on_first_colon() {
        let record = parse_record("hcl:#123abc:extra pid:");

        assert_eq!(record.hcl, "#123abc:extra");
        assert_eq!(record.pid, "");
    }

    #[test]
    fn test_parse_record_last_duplicate_wins() {
        let record = parse_record("eyr:2020 eyr:2025");
        assert_eq!(record.eyr, "2025");
    }

    #[test]
    fn test_records_span_multiple_lines() {
        let lines = [
            "ecl:gry pid:860033327 eyr:2020 hcl:#fffffd",
            "byr:1937 iyr:2017 cid:147 hgt:183cm",
        ];

        let parsed: Vec<Record> = records(lines).collect();

        assert_eq!(parsed.len(), 1);
        let record = &parsed[0];
        assert_eq!(record.ecl, "gry");
        assert_eq!(record.pid, "860033327");
        assert_eq!(record.eyr, "2020");
        assert_eq!(record.hcl, "#fffffd");
        assert_eq!(record.byr, "1937");
        assert_eq!(record.iyr, "2017");
        assert_eq!(record.cid, "147");
        assert_eq!(record.hgt, "183cm");
    }

    #[test]
    fn test_records_split_on_blank_lines() {
        let text = "ecl:gry pid:860033327\n\nbyr:1937 iyr:2017\n";

        let parsed: Vec<Record> = records_from_str(text).collect();

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].ecl, "gry");
        assert_eq!(parsed[0].byr, "");
        assert_eq!(parsed[1].byr, "1937");
        assert_eq!(parsed[1].ecl, "");
    }

    #[test]
    fn test_records_emit_trailing_block_without_blank_line() {
        let parsed: Vec<Record> = records_from_str("byr:1937\n\nhgt:59in").collect();

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1].hgt, "59in");
    }

    #[test]
    fn test_records_skip_repeated_empty_lines() {
        let text = "\n\nbyr:1937\n\n\n\niyr:2017\n\n\n";

        let parsed: Vec<Record> = records_from_str(text).collect();

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].byr, "1937");
        assert_eq!(parsed[1].iyr, "2017");
    }

    #[test]
    fn test_records_whitespace_only_line_continues_block() {
        let text = "ecl:gry pid:860033327 eyr:2020 hcl:#fffffd\n   \nbyr:1937 iyr:2017 cid:147 hgt:183cm\n";

        let parsed: Vec<Record> = records_from_str(text).collect();

        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].ecl, "gry");
        assert_eq!(parsed[0].hgt, "183cm");
    }

    #[test]
    fn test_records_whitespace_only_block_is_skipped() {
        let text = "byr:1937\n\n \t\n\niyr:2017";

        let parsed: Vec<Record> = records_from_str(text).collect();

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].byr, "1937");
        assert_eq!(parsed[1].iyr, "2017");
    }

    #[test]
    fn test_records_empty_input() {
        assert_eq!(records_from_str("").count(), 0);
        assert_eq!(records(Vec::<String>::new()).count(), 0);
    }

    #[test]
    fn test_records_accept_owned_lines() {
        let lines = vec!["pid:000000001".to_string(), String::new(), "ecl:oth".to_string()];

        let parsed: Vec<Record> = records(lines).collect();

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].pid, "000000001");
        assert_eq!(parsed[1].ecl, "oth");
    }
}
