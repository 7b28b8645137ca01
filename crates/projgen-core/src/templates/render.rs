//! Slot substitution for template payloads
//!
//! Markers look like `{{NAME}}`. Substitution is a single left-to-right
//! pass: a replacement value is copied verbatim and never rescanned, so a
//! value that happens to contain another marker cannot trigger a second
//! expansion. A marker without a bound value is an error rather than
//! silently surviving into the generated file.

use anyhow::{bail, Result};
use std::collections::BTreeMap;

/// Named slot values for one render call.
#[derive(Debug, Default)]
pub struct Slots {
    values: BTreeMap<&'static str, String>,
}

impl Slots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.values.insert(name, value.into());
        self
    }
}

/// Substitute every `{{NAME}}` marker in `template` with its slot value.
pub fn render(template: &str, slots: &Slots) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            bail!("unterminated slot marker in template");
        };
        let name = &after[..end];
        match slots.values.get(name) {
            Some(value) => out.push_str(value),
            None => bail!("no value bound for slot '{}'", name),
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitutes_all_occurrences() {
        let slots = Slots::new().set("NAME", "demo").set("STD", "17");
        let out = render("{{NAME}} uses C++{{STD}}; again: {{NAME}}", &slots).unwrap();
        assert_eq!(out, "demo uses C++17; again: demo");
    }

    #[test]
    fn test_replacement_value_is_not_rescanned() {
        let slots = Slots::new().set("A", "{{B}}").set("B", "never");
        let out = render("start {{A}} end", &slots).unwrap();
        assert_eq!(out, "start {{B}} end");
    }

    #[test]
    fn test_unknown_slot_is_an_error() {
        let err = render("{{MISSING}}", &Slots::new()).unwrap_err();
        assert!(err.to_string().contains("MISSING"));
    }

    #[test]
    fn test_unterminated_marker_is_an_error() {
        assert!(render("oops {{TRUNC", &Slots::new()).is_err());
    }

    #[test]
    fn test_single_braces_pass_through() {
        let out = render("${CMAKE_SOURCE_DIR}/x { } ${a}", &Slots::new()).unwrap();
        assert_eq!(out, "${CMAKE_SOURCE_DIR}/x { } ${a}");
    }

    #[test]
    fn test_empty_value_allowed() {
        let slots = Slots::new().set("OPT", "");
        assert_eq!(render("a{{OPT}}b", &slots).unwrap(), "ab");
    }
}
