//! Placeholder substitution for message templates
//!
//! Tokens look like `{name}`. Substitution is literal, case-sensitive and
//! single-pass: substituted values are never scanned again, so a player
//! called `{ping}` shows up as exactly that. Unknown tokens and stray braces
//! are copied through verbatim. There is no escaping mechanism.

/// Render `template`, replacing each `{name}` whose name appears in `values`.
pub fn render(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        let Some(close) = after_open.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let name = &after_open[..close];
        if name.contains('{') {
            // `{a{b}`: only the innermost brace can start a token
            out.push('{');
            rest = after_open;
            continue;
        }

        match values.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(value),
            None => {
                out.push('{');
                out.push_str(name);
                out.push('}');
            }
        }
        rest = &after_open[close + 1..];
    }

    out.push_str(rest);
    out
}
