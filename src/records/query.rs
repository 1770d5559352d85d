use crate::records::models::IssueFilter;

/// Split a URL query string ("a=1&b=two+words") into decoded key/value pairs
/// Pairs without '=' get an empty value; empty segments are skipped
pub fn parse_query_pairs(query: &str) -> Vec<(String, String)> {
    let query = query.strip_prefix('?').unwrap_or(query);

    query
        .split('&')
        .filter(|part| !part.is_empty())
        .map(|part| match part.split_once('=') {
            Some((key, value)) => (decode_component(key), decode_component(value)),
            None => (decode_component(part), String::new()),
        })
        .collect()
}

// '+' is a space, %XX is a byte; malformed escapes are kept literally
fn decode_component(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' => match bytes.get(i + 1..i + 3).and_then(decode_hex_pair) {
                Some(byte) => {
                    out.push(byte);
                    i += 3;
                }
                None => {
                    out.push(b'%');
                    i += 1;
                }
            },
            byte => {
                out.push(byte);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}

fn decode_hex_pair(pair: &[u8]) -> Option<u8> {
    let high = (pair[0] as char).to_digit(16)?;
    let low = (pair[1] as char).to_digit(16)?;
    Some((high * 16 + low) as u8)
}

impl IssueFilter {
    /// Build a filter from request query parameters
    /// Empty values are ignored; `open` is true only for the literal "true"
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut filter = IssueFilter::default();

        for (key, value) in pairs {
            let value = value.as_ref();
            match key.as_ref() {
                "open" => filter.open = Some(value == "true"),
                _ if value.is_empty() => {}
                "issue_title" => filter.issue_title = Some(value.to_string()),
                "issue_text" => filter.issue_text = Some(value.to_string()),
                "created_by" => filter.created_by = Some(value.to_string()),
                "assigned_to" => filter.assigned_to = Some(value.to_string()),
                "status_text" => filter.status_text = Some(value.to_string()),
                "_id" => filter.id = Some(value.to_string()),
                other => log::debug!("ignoring unknown filter '{}'", other),
            }
        }

        filter
    }

    pub fn from_query(query: &str) -> Self {
        Self::from_pairs(parse_query_pairs(query))
    }
}
