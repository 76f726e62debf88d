//! Template types for typed variable injection.

use std::marker::PhantomData;

/// Trait for template variable sets
pub trait TemplateVars {
    fn apply(&self, content: &str) -> String;
}

/// Template with typed variable injection
#[derive(Debug, Clone, Copy)]
pub struct Template<V> {
    content: &'static str,
    _marker: PhantomData<V>,
}

impl<V> Template<V> {
    pub const fn new(content: &'static str) -> Self {
        Self {
            content,
            _marker: PhantomData,
        }
    }

    pub const fn content(&self) -> &'static str {
        self.content
    }
}

impl<V: TemplateVars> Template<V> {
    pub fn render(&self, vars: &V) -> String {
        vars.apply(self.content)
    }
}

/// Replace `__KEY__` placeholders in one pass.
///
/// Inserted values are never scanned again, so page content that happens
/// to contain a placeholder name is left as is. Unknown keys stay verbatim.
pub fn fill(content: &str, vars: &[(&str, &str)]) -> String {
    let extra: usize = vars.iter().map(|(_, value)| value.len()).sum();
    let mut out = String::with_capacity(content.len() + extra);
    let mut rest = content;

    while let Some(start) = rest.find("__") {
        let after = &rest[start + 2..];
        let hit = after.find("__").and_then(|end| {
            let key = &after[..end];
            vars.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (end, *value))
        });

        match hit {
            Some((end, value)) => {
                out.push_str(&rest[..start]);
                out.push_str(value);
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[..start + 2]);
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Greeting {
        name: String,
    }

    impl TemplateVars for Greeting {
        fn apply(&self, content: &str) -> String {
            fill(content, &[("NAME", &self.name)])
        }
    }

    const GREETING: Template<Greeting> = Template::new("Hello, __NAME__!");

    #[test]
    fn test_render() {
        let out = GREETING.render(&Greeting { name: "Ada".into() });
        assert_eq!(out, "Hello, Ada!");
        assert_eq!(GREETING.content(), "Hello, __NAME__!");
    }

    #[test]
    fn test_fill_single_pass() {
        let out = fill("<h>__HEAD__</h><m>__MAIN__</m>", &[("HEAD", "__MAIN__"), ("MAIN", "body")]);
        assert_eq!(out, "<h>__MAIN__</h><m>body</m>");
    }

    #[test]
    fn test_fill_unknown_and_underscores() {
        assert_eq!(fill("a __X__ b", &[("Y", "1")]), "a __X__ b");
        assert_eq!(fill("__ANALYTICS_HEAD__", &[("ANALYTICS_HEAD", "ok")]), "ok");
        assert_eq!(fill("snake__case__name", &[]), "snake__case__name");
        assert_eq!(fill("trailing __", &[]), "trailing __");
    }
}
