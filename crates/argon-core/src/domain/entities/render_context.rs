/// Placeholder tokens understood by the built-in templates.
pub mod placeholders {
    pub const TEMPLATE_FILE_NAME: &str = "#templateFileName#";
    pub const CLASS_NAME: &str = "#className#";
    pub const COMPONENT: &str = "#component#";
    pub const INSTANCE: &str = "#instance#";
    pub const NAME: &str = "#name#";
    pub const LAYOUT_FILE_NAME: &str = "#layoutFileName#";
}

/// How many occurrences of a token get replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Occurrence {
    First,
    All,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Substitution {
    token: &'static str,
    value: String,
    occurrence: Occurrence,
}

/// Ordered list of token substitutions applied to a template body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    substitutions: Vec<Substitution>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace only the first occurrence of `token`.
    pub fn first(self, token: &'static str, value: impl Into<String>) -> Self {
        self.with(token, value, Occurrence::First)
    }

    /// Replace every occurrence of `token`.
    pub fn all(self, token: &'static str, value: impl Into<String>) -> Self {
        self.with(token, value, Occurrence::All)
    }

    fn with(
        mut self,
        token: &'static str,
        value: impl Into<String>,
        occurrence: Occurrence,
    ) -> Self {
        self.substitutions.push(Substitution {
            token,
            value: value.into(),
            occurrence,
        });
        self
    }

    /// Apply the substitutions in insertion order.
    pub fn render(&self, body: &str) -> String {
        self.substitutions
            .iter()
            .fold(body.to_owned(), |acc, s| match s.occurrence {
                Occurrence::First => acc.replacen(s.token, &s.value, 1),
                Occurrence::All => acc.replace(s.token, &s.value),
            })
    }
}
