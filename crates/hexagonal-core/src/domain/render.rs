//! Placeholder substitution for stubs.
//!
//! Stubs use the literal form `{{ KEY }}`: two braces, one space, the key,
//! one space, two braces. Keys that are not in the context are left as-is.

use chrono::NaiveDate;

/// Fallback used when the host configuration has no `app.name`.
pub const DEFAULT_PROJECT_NAME: &str = "Laravel Project";

/// Values supplied to the installer by its host.
///
/// Passed into the service explicitly instead of being looked up from a
/// global container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallContext {
    project_name: String,
    date: NaiveDate,
}

impl InstallContext {
    pub fn new(project_name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            project_name: project_name.into(),
            date,
        }
    }

    /// Resolve an optional configured name, falling back to
    /// [`DEFAULT_PROJECT_NAME`].
    pub fn from_config(project_name: Option<&str>, date: NaiveDate) -> Self {
        Self::new(project_name.unwrap_or(DEFAULT_PROJECT_NAME), date)
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Replacements for the bundled stubs: `PROJECT_NAME` and `DATE`.
    pub fn render_context(&self) -> RenderContext {
        let mut ctx = RenderContext::new();
        ctx.variables
            .push(("PROJECT_NAME".into(), self.project_name.clone()));
        ctx.variables
            .push(("DATE".into(), self.date.format("%Y-%m-%d").to_string()));
        ctx
    }
}

/// Ordered `KEY → value` replacements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    variables: Vec<(String, String)>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Substitute every `{{ KEY }}` occurrence, one key at a time in
    /// insertion order.
    pub fn render(&self, source: &str) -> String {
        self.variables
            .iter()
            .fold(source.to_owned(), |acc, (key, value)| {
                acc.replace(&format!("{{{{ {key} }}}}"), value)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 9).unwrap()
    }

    #[test]
    fn renders_project_name_and_date() {
        let ctx = InstallContext::new("Acme", date()).render_context();
        let out = ctx.render("# {{ PROJECT_NAME }}\nStarted: {{ DATE }}\n");
        assert_eq!(out, "# Acme\nStarted: 2026-03-09\n");
    }

    #[test]
    fn replaces_every_occurrence() {
        let ctx = InstallContext::new("Acme", date()).render_context();
        assert_eq!(
            ctx.render("{{ PROJECT_NAME }}/{{ PROJECT_NAME }}"),
            "Acme/Acme"
        );
    }

    #[test]
    fn delimiter_is_literal() {
        let ctx = InstallContext::new("Acme", date()).render_context();
        // No spaces inside the braces: not a placeholder.
        assert_eq!(ctx.render("{{PROJECT_NAME}}"), "{{PROJECT_NAME}}");
    }

    #[test]
    fn unknown_keys_are_left_untouched() {
        let ctx = InstallContext::new("Acme", date()).render_context();
        assert_eq!(ctx.render("{{ AUTHOR }}"), "{{ AUTHOR }}");
    }

    #[test]
    fn missing_name_falls_back() {
        let ctx = InstallContext::from_config(None, date());
        assert_eq!(ctx.project_name(), DEFAULT_PROJECT_NAME);
    }
}
