// Shared prompt-building utilities.
// Each feature that needs LLM calls defines its own prompts.rs alongside it.

/// Currency symbol used in every price line sent to the model.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Substitutes `{key}` placeholders in a single pass.
///
/// Values are inserted verbatim and never re-scanned, so user text that happens
/// to contain `{something}` survives unchanged. Braces that do not name a
/// known key (e.g. literal JSON in a template) are copied through.
pub fn fill_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 1..];

        let matched = vars.iter().find_map(|(key, value)| {
            tail.strip_prefix(key)
                .and_then(|after| after.strip_prefix('}'))
                .map(|after| (*value, after))
        });

        match matched {
            Some((value, after)) => {
                out.push_str(value);
                rest = after;
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }

    out.push_str(rest);
    out
}
