use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Matches `{identifier}` placeholders. Braces around anything that is not an
/// identifier (JSON snippets, code) are left alone.
static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

fn placeholder_regex() -> &'static Regex {
    PLACEHOLDER_REGEX.get_or_init(|| {
        Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("Invalid regex pattern")
    })
}

/// Substitutes `{name}` placeholders in `template` with values from `vars`.
///
/// Substitution happens in a single pass: a value that itself contains
/// `{name}` text is inserted verbatim and never expanded. Placeholders with no
/// matching entry in `vars` are left as written.
pub fn render_template(template: &str, vars: &[(&str, &str)]) -> String {
    placeholder_regex()
        .replace_all(template, |caps: &Captures<'_>| {
            let name = &caps[1];
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value).to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Placeholder names referenced by `template`, in order of first appearance.
pub fn template_placeholders(template: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in placeholder_regex().captures_iter(template) {
        let name = &caps[1];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_known_placeholders() {
        let out = render_template("Review:\n{code}\nFor: {request}", &[
            ("request", "a game"),
            ("code", "fn main() {}"),
        ]);
        assert_eq!(out, "Review:\nfn main() {}\nFor: a game");
    }

    #[test]
    fn test_render_leaves_unknown_placeholders() {
        assert_eq!(render_template("{missing} stays", &[]), "{missing} stays");
    }

    #[test]
    fn test_render_does_not_expand_inserted_values() {
        let out = render_template("A={architecture} C={code}", &[
            ("architecture", "uses {code} literally"),
            ("code", "X"),
        ]);
        assert_eq!(out, "A=uses {code} literally C=X");
    }

    #[test]
    fn test_render_ignores_non_identifier_braces() {
        let template = r#"Return JSON like {"key": 1} for {request}"#;
        assert_eq!(
            render_template(template, &[("request", "r")]),
            r#"Return JSON like {"key": 1} for r"#
        );
    }

    #[test]
    fn test_placeholders_are_deduplicated_in_order() {
        assert_eq!(
            template_placeholders("{code} {tests} {code} {\"x\"}"),
            vec!["code".to_string(), "tests".to_string()]
        );
    }
}
