//! Extracts a single JSON object from judge output that may be fenced, prefixed with prose,
//! or followed by trailing text. Never fails; parsing the result is the caller's job.

/// Returns the first brace-balanced `{...}` slice of `raw`, after trimming and stripping
/// a leading ```` ```json ````/```` ``` ```` fence and one trailing ```` ``` ````.
///
/// - No `{` anywhere: the trimmed input is returned unchanged.
/// - Unbalanced braces: everything from the first `{` onward is returned.
///
/// Braces inside JSON strings are counted like any other brace.
pub fn sanitize(raw: &str) -> String {
    let trimmed = raw.trim();
    let unfenced = strip_fences(trimmed);

    let Some(start) = unfenced.find('{') else {
        return trimmed.to_string();
    };

    let mut depth = 0usize;
    for (offset, byte) in unfenced.as_bytes()[start..].iter().enumerate() {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return unfenced[start..=start + offset].to_string();
                }
            }
            _ => {}
        }
    }

    unfenced[start..].to_string()
}

fn strip_fences(text: &str) -> &str {
    let text = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
        .unwrap_or(text);
    let text = text.strip_suffix("```").unwrap_or(text);
    text.trim()
}
