//! Walks the HTML of a tutorial and reduces it to script statements.
//!
//! Only code elements, comments and `h1`-`h3` headings matter. Those are
//! collected in document order without looking inside them, everything else
//! is descended into. The collected nodes are then folded, left to right,
//! through an [`Extractor`] which owns the annotation state for that single
//! pass.

use lazy_static::lazy_static;
use markup5ever_rcdom::{Handle, NodeData};
use regex::Regex;

use crate::annotation::{Annotation, AnnotationState, CodeMode};
use crate::error::{Error, Result};
use crate::script::{debug_guarded, heading_banner, variable_guard, Script};
pub use crate::utils::{text_content, Body};

const SELECTABLE_ELEMENTS: [&str; 4] = ["code", "h1", "h2", "h3"];

lazy_static! {
    static ref DOCUMENT_REG: Regex = Regex::new(r"(?i)<(!doctype|html|head|body)[\s>/]")
        .expect("Failed to init regex for finding document level tags");
}

/// Parse `html` and extract the script it describes.
pub fn extract(html: &[u8]) -> Result<Script> {
    let body = parse_body(html)?;
    let nodes = select(body.root());
    log::debug!("selected {} nodes", nodes.len());

    let mut extractor = Extractor::default();
    for node in &nodes {
        extractor.reduce(node);
    }
    Ok(extractor.finish())
}

/// Parse `html` and return its body.
///
/// Full documents, recognised by a doctype or an `html`, `head` or `body`
/// tag, are walked from their `<body>` element only. Anything else, like
/// rendered markdown, is parsed as body content so that comments before the
/// first element are kept.
pub fn parse_body(html: &[u8]) -> Result<Body> {
    let html = std::str::from_utf8(html).map_err(|e| Error::Parse(e.to_string()))?;

    let body = if DOCUMENT_REG.is_match(html) {
        Body::parse_document(html)
    } else {
        Body::parse_fragment(html)
    };
    body.ok_or_else(|| Error::Parse("parser produced no body element".to_string()))
}

fn is_selectable(node: &Handle) -> bool {
    match &node.data {
        NodeData::Comment { .. } => true,
        NodeData::Element { name, .. } => SELECTABLE_ELEMENTS.contains(&&*name.local),
        _ => false,
    }
}

/// Collect, in document order, every selectable node under `root`.
/// Selected nodes are not descended into.
pub fn select(root: &Handle) -> Vec<Handle> {
    let mut selected = Vec::new();
    let mut stack: Vec<Handle> = root.children.borrow().iter().rev().cloned().collect();

    while let Some(node) = stack.pop() {
        if is_selectable(&node) {
            selected.push(node);
        } else {
            stack.extend(node.children.borrow().iter().rev().cloned());
        }
    }
    selected
}

/// Reduction state for one extraction pass.
#[derive(Debug, Default)]
pub struct Extractor {
    state: AnnotationState,
    script: Script,
}

impl Extractor {
    pub fn reduce(&mut self, node: &Handle) {
        match &node.data {
            NodeData::Comment { contents } => self.reduce_comment(contents),
            NodeData::Element { name, .. } => match &*name.local {
                "code" => self.reduce_code(&text_content(node)),
                "h1" | "h2" | "h3" => self.push_statement(heading_banner(&text_content(node))),
                other => log::warn!("node name not supported: {}", other),
            },
            _ => log::warn!("node kind not supported, skipping it"),
        }
    }

    fn reduce_comment(&mut self, comment: &str) {
        match Annotation::parse(comment) {
            Annotation::Command => {
                log::debug!("next code block is a command");
                self.state.mark_command();
            }
            Annotation::Debug => {
                log::debug!("next code block is a debug command");
                self.state.mark_debug();
            }
            Annotation::Bash(bash) => self.push_statement(bash),
            Annotation::Var(name) => {
                log::debug!("script requires variable {}", name);
                self.script.variables.push(variable_guard(&name));
            }
            Annotation::Ignored => {}
        }
    }

    fn reduce_code(&mut self, code: &str) {
        let code = code.trim();
        match self.state.take() {
            Some(CodeMode::Debug) => self.push_statement(debug_guarded(code)),
            Some(CodeMode::Plain) => self.push_statement(code.to_string()),
            None => log::debug!("dropping code block without annotation"),
        }
    }

    fn push_statement(&mut self, statement: String) {
        if !statement.is_empty() {
            self.script.statements.push(statement);
        }
    }

    pub fn finish(self) -> Script {
        self.script
    }
}

#[cfg(test)]
mod tests {
    use markup5ever_rcdom::NodeData;

    use super::{extract, parse_body, select, text_content};
    use crate::error::Error;

    fn selected_kinds(html: &str) -> Vec<String> {
        let body = parse_body(html.as_bytes()).unwrap();
        select(body.root())
            .iter()
            .map(|node| match &node.data {
                NodeData::Comment { .. } => "#comment".to_string(),
                NodeData::Element { name, .. } => name.local.to_string(),
                _ => "?".to_string(),
            })
            .collect()
    }

    #[test]
    pub fn test_selection_order() {
        let html = r#"<h1>Intro</h1>
<!-- command -->
<p>Run <code>ls</code> and then</p>
<pre><code>kubectl get ns
</code></pre>
<table><tr><td><h2>In a table</h2></td></tr></table>
<h4>ignored</h4>"#;
        assert_eq!(
            selected_kinds(html),
            vec!["h1", "#comment", "code", "code", "h2"]
        );
    }

    #[test]
    pub fn test_selected_nodes_are_not_descended() {
        let html = "<h2>Deploy <code>app</code> <!-- command --></h2>";
        assert_eq!(selected_kinds(html), vec!["h2"]);
    }

    #[test]
    pub fn test_leading_comment_is_selected() {
        assert_eq!(
            selected_kinds("<!-- var A -->\n<h1>T</h1>"),
            vec!["#comment", "h1"]
        );
    }

    #[test]
    pub fn test_text_content_strips_markup() {
        let body = parse_body(b"<h1>Hello <em>big</em> &amp; <b>bold</b> world</h1>").unwrap();
        let nodes = select(body.root());
        assert_eq!(text_content(&nodes[0]), "Hello big & bold world");
    }

    #[test]
    pub fn test_code_without_annotation_is_dropped() {
        let script = extract(b"<p><code>rm -rf /tmp/x</code></p><pre><code>ls</code></pre>").unwrap();
        assert!(script.is_empty());
    }

    #[test]
    pub fn test_debug_is_consumed_by_one_code_block() {
        let script = extract(b"<!-- debug --><code>kubectl get pods</code><code>kubectl get ns</code>").unwrap();
        assert_eq!(
            script.statements,
            vec!["if [ \"$DEBUG\" = \"true\" ]; then \nkubectl get pods  \nfi"]
        );
    }

    #[test]
    pub fn test_bash_does_not_consume_command() {
        let script = extract(b"<!-- command --><!-- bash echo hi --><code>ls</code>").unwrap();
        assert_eq!(script.statements, vec!["echo hi", "ls"]);
    }

    #[test]
    pub fn test_heading_does_not_consume_command() {
        let script = extract(b"<!-- command --><h3>Step</h3><code>ls</code>").unwrap();
        assert_eq!(script.statements.len(), 2);
        assert!(script.statements[0].contains("echo \"Step\""));
        assert_eq!(script.statements[1], "ls");
    }

    #[test]
    pub fn test_code_is_entity_decoded_and_trimmed() {
        let script = extract(b"<!-- command --><pre><code>  echo &quot;a&quot; &amp;&amp; ls &lt; in\n</code></pre>").unwrap();
        assert_eq!(script.statements, vec!["echo \"a\" && ls < in"]);
    }

    #[test]
    pub fn test_duplicate_variables_are_kept() {
        let script = extract(b"<!-- var A --><!-- var A -->").unwrap();
        assert_eq!(script.variables.len(), 2);
        assert_eq!(script.variables[0], script.variables[1]);
        assert!(script.statements.is_empty());
    }

    #[test]
    pub fn test_state_does_not_leak_between_calls() {
        let first = extract(b"<!-- command -->").unwrap();
        assert!(first.is_empty());
        let second = extract(b"<code>ls</code>").unwrap();
        assert!(second.is_empty());
    }

    #[test]
    pub fn test_parsed_body_keeps_its_children() {
        let body = parse_body(b"<!-- command --><code>kubectl get ns</code>").unwrap();
        assert_eq!(body.root().children.borrow().len(), 2);

        let body = parse_body(b"<html><body><!-- command --><code>ls</code></body></html>").unwrap();
        assert_eq!(body.root().children.borrow().len(), 2);
    }

    #[test]
    pub fn test_end_to_end_statement_order() {
        let script = extract(b"<!-- command --><p><code>kubectl get ns</code></p><!-- var DT_TENANT --><!-- bash\necho \"hi\"\n-->").unwrap();
        assert_eq!(script.statements, vec!["kubectl get ns", "echo \"hi\""]);
        assert_eq!(script.variables.len(), 1);
    }

    #[test]
    pub fn test_head_of_full_document_is_skipped() {
        let script = extract(
            b"<!DOCTYPE html><html><head><title>T</title><!-- var HEAD_ONLY --><!-- bash echo head --></head><body><h1>A</h1><!-- var BODY --></body></html>",
        )
        .unwrap();
        assert_eq!(script.variables.len(), 1);
        assert!(script.variables[0].contains("$BODY"));
        assert_eq!(script.statements.len(), 1);
        assert!(script.statements[0].contains("echo \"A\""));
    }

    #[test]
    pub fn test_comment_entities_use_full_table() {
        let script = extract(b"<!-- bash echo a &rarr; b &amp c -->").unwrap();
        assert_eq!(script.statements, vec!["echo a \u{2192} b & c"]);
    }

    #[test]
    pub fn test_invalid_utf8_is_a_parse_error() {
        let err = extract(&[0x3c, 0x68, 0x31, 0x3e, 0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }
}
