use super::CategoryNarrative;

const DEFAULT_TRAITS: [&str; 3] = ["Analytical", "Adaptable", "Balanced"];
const DEFAULT_DESCRIPTION: &str = "Shows a balanced pattern in this personality dimension.";

/// Extracts traits and description from a provider reply.
///
/// The reply is untrusted free text; we look for `TRAITS:` and `DESCRIPTION:`
/// labels (case-insensitive, anywhere in a line) and substitute the generic
/// default for whichever field is missing or empty.
pub(crate) fn parse_trait_reply(reply: &str) -> CategoryNarrative {
    let traits = labeled_value(reply, "TRAITS:")
        .map(|value| {
            value
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .filter(|traits| !traits.is_empty())
        .unwrap_or_else(|| DEFAULT_TRAITS.iter().map(|t| t.to_string()).collect());

    let description = labeled_value(reply, "DESCRIPTION:")
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());

    CategoryNarrative {
        traits,
        description,
    }
}

/// Returns the remainder of the line following the first case-insensitive
/// occurrence of `label`, trimmed.
fn labeled_value<'a>(reply: &'a str, label: &str) -> Option<&'a str> {
    let haystack = reply.to_ascii_lowercase();
    let needle = label.to_ascii_lowercase();
    let start = haystack.find(&needle)? + needle.len();
    let rest = reply.get(start..)?;
    Some(rest.lines().next().unwrap_or("").trim())
}
