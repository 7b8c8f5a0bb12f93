const BANNER_SEPARATOR: &str =
    r#"echo "---------------------------------------------------------------------""#;

/// Extracted content of a tutorial, in the order it will be written.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Script {
    /// Guards for required environment variables. Written first.
    pub variables: Vec<String>,
    /// Headings, commands and raw bash, in document order.
    pub statements: Vec<String>,
}

impl Script {
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty() && self.statements.is_empty()
    }
}

pub fn heading_banner(heading: &str) -> String {
    [
        BANNER_SEPARATOR.to_string(),
        format!(r#"echo "{}""#, heading),
        BANNER_SEPARATOR.to_string(),
        r#"echo """#.to_string(),
    ]
    .join("\n")
}

pub fn debug_guarded(code: &str) -> String {
    format!("if [ \"$DEBUG\" = \"true\" ]; then \n{}  \nfi", code)
}

pub fn variable_guard(name: &str) -> String {
    format!(
        "if [ -z \"${0}\" ]; then\n \techo \"Please supply a value for the environment variable {0}\"\n\texit 1\nfi",
        name
    )
}
