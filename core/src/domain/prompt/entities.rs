use crate::domain::common::entities::app_errors::CoreError;

/// A fixed instruction with `{name}` placeholders filled at invocation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptTemplate {
    pub name: &'static str,
    pub template: &'static str,
    pub input_variables: &'static [&'static str],
}

impl PromptTemplate {
    pub const fn new(
        name: &'static str,
        template: &'static str,
        input_variables: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            template,
            input_variables,
        }
    }

    /// Substitutes every declared variable in one left-to-right pass.
    ///
    /// Substituted text is never scanned again, so values containing braces
    /// (or another variable's name) come through verbatim. Braces that do not
    /// name a declared variable are left untouched.
    pub fn render(&self, values: &[(&str, &str)]) -> Result<String, CoreError> {
        if let Some(missing) = self
            .input_variables
            .iter()
            .find(|var| !values.iter().any(|(key, _)| key == *var))
        {
            return Err(CoreError::MissingTemplateVariable(missing.to_string()));
        }

        let mut rendered = String::with_capacity(self.template.len());
        let mut rest = self.template;

        while let Some(open) = rest.find('{') {
            rendered.push_str(&rest[..open]);
            let after_open = &rest[open + 1..];

            if let Some(close) = after_open.find('}')
                && let Some(value) = self.lookup(values, &after_open[..close])
            {
                rendered.push_str(value);
                rest = &after_open[close + 1..];
                continue;
            }

            rendered.push('{');
            rest = after_open;
        }
        rendered.push_str(rest);

        Ok(rendered)
    }

    fn lookup<'a>(&self, values: &[(&str, &'a str)], name: &str) -> Option<&'a str> {
        if !self.input_variables.iter().any(|var| *var == name) {
            return None;
        }
        values
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
    }
}
