//! Exposition parsing helpers for tests.

use std::collections::BTreeMap;

struct Sample {
    name: String,
    labels: BTreeMap<String, String>,
    value: f64,
}

fn parse(body: &str) -> Vec<Sample> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> Option<Sample> {
    let (series, value) = line.rsplit_once(' ')?;
    let value = value.parse::<f64>().ok()?;

    let (name, labels) = match series.split_once('{') {
        Some((name, rest)) => (name, parse_labels(rest.strip_suffix('}')?)?),
        None => (series, BTreeMap::new()),
    };

    Some(Sample {
        name: name.to_string(),
        labels,
        value,
    })
}

fn parse_labels(raw: &str) -> Option<BTreeMap<String, String>> {
    let mut labels = BTreeMap::new();
    let mut rest = raw;

    while !rest.is_empty() {
        let (key, after) = rest.split_once("=\"")?;
        let mut value = String::new();
        let mut chars = after.char_indices();
        let mut end = None;

        while let Some((i, c)) = chars.next() {
            match c {
                '\\' => {
                    if let Some((_, escaped)) = chars.next() {
                        value.push(if escaped == 'n' { '\n' } else { escaped });
                    }
                }
                '"' => {
                    end = Some(i);
                    break;
                }
                _ => value.push(c),
            }
        }

        labels.insert(key.trim_start_matches(',').to_string(), value);
        rest = after[end? + 1..].trim_start_matches(',');
    }

    Some(labels)
}

fn to_map(labels: &[(&str, &str)]) -> BTreeMap<String, String> {
    labels
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Value of the series whose name and full label set match exactly.
pub fn sample(body: &str, name: &str, labels: &[(&str, &str)]) -> Option<f64> {
    let wanted = to_map(labels);

    parse(body)
        .into_iter()
        .find(|s| s.name == name && s.labels == wanted)
        .map(|s| s.value)
}

/// Sum of every series with `name` whose labels include all of `labels`.
pub fn sum_matching(body: &str, name: &str, labels: &[(&str, &str)]) -> f64 {
    let wanted = to_map(labels);

    parse(body)
        .into_iter()
        .filter(|s| s.name == name)
        .filter(|s| wanted.iter().all(|(k, v)| s.labels.get(k) == Some(v)))
        .map(|s| s.value)
        .sum()
}

#[test]
fn parses_labelled_and_bare_series() {
    let body = "# TYPE a counter\na{method=\"GET\",endpoint=\"/x,y\"} 3\nb 1.5\n";

    assert_eq!(sample(body, "a", &[("endpoint", "/x,y"), ("method", "GET")]), Some(3.0));
    assert_eq!(sample(body, "b", &[]), Some(1.5));
    assert_eq!(sample(body, "a", &[("method", "GET")]), None);
    assert_eq!(sum_matching(body, "a", &[("method", "GET")]), 3.0);
}
