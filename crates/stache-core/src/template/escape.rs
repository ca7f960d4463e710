//! HTML escaping for `{{name}}` output

/// Replacement rules, tried in order at each position
const ESCAPE_RULES: [(&str, &str); 5] = [
    ("&", "&amp;"),
    ("<", "&lt;"),
    (">", "&gt;"),
    ("\\", "&#92;"),
    ("\"", "&quot;"),
];

/// Escape a string in a single left-to-right pass
///
/// At each position the first matching rule wins and the cursor advances
/// past the matched pattern; unmatched characters are copied through.
/// Escaping is not idempotent: `&amp;` becomes `&amp;amp;`.
pub fn escape(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut pos = 0;

    while pos < input.len() {
        let rest = &input[pos..];
        match ESCAPE_RULES
            .iter()
            .find(|(pattern, _)| rest.starts_with(pattern))
        {
            Some((pattern, replacement)) => {
                output.push_str(replacement);
                pos += pattern.len();
            }
            None => {
                // pos always sits on a char boundary
                let ch = rest.chars().next().unwrap_or_default();
                output.push(ch);
                pos += ch.len_utf8().max(1);
            }
        }
    }

    output
}
