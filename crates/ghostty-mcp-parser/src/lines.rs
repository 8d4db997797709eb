//! Line normalization shared by all parsers.

use tracing::trace;

/// Split captured output on line feeds, dropping a trailing carriage return
/// from each line so `\r\n` and `\n` input parse identically.
pub fn lines(raw: &str) -> impl Iterator<Item = &str> {
    raw.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Run a single-line extractor over every line, keeping the hits in order.
pub(crate) fn parse_each_line<T>(
    raw: &str,
    format: &'static str,
    parse_line: impl Fn(&str) -> Option<T>,
) -> Vec<T> {
    let mut records = Vec::new();
    for line in lines(raw) {
        match parse_line(line) {
            Some(record) => records.push(record),
            None if !line.trim().is_empty() => {
                trace!("{}: skipping unrecognized line {:?}", format, line);
            }
            None => {}
        }
    }
    records
}

/// Split `key = value` at the first `=`, trimming both sides.
pub(crate) fn split_assignment(line: &str) -> Option<(String, String)> {
    line.split_once('=')
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
}
