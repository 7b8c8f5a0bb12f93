//! Comment directives and the state they carry over to the next code block.

use crate::utils::decode_entities;

const COMMAND: &str = "command";
const DEBUG: &str = "debug";
const BASH: &str = "bash";
const VAR: &str = "var";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    /// The next code block is a command.
    Command,
    /// The next code block is a command that only runs when `DEBUG=true`.
    Debug,
    /// Raw bash to paste into the script as is.
    Bash(String),
    /// An environment variable the script requires.
    Var(String),
    Ignored,
}

impl Annotation {
    /// Classify a raw comment. Exact matches win over substring matches and
    /// `bash` wins over `var`.
    pub fn parse(comment: &str) -> Self {
        let comment = decode_entities(comment)
            .replace("<!--", "")
            .replace("-->", "");
        let comment = comment.trim();

        if comment == COMMAND {
            Annotation::Command
        } else if comment == DEBUG {
            Annotation::Debug
        } else if comment.contains(BASH) {
            Annotation::Bash(comment.replace(BASH, "").trim().to_string())
        } else if comment.contains(VAR) {
            Annotation::Var(comment.replace(VAR, "").trim().to_string())
        } else {
            Annotation::Ignored
        }
    }
}

/// How a code block should end up in the script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeMode {
    Plain,
    Debug,
}

/// Pending directives waiting for the next code block.
///
/// `pending_debug` is never set without `pending_command`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AnnotationState {
    pending_command: bool,
    pending_debug: bool,
}

impl AnnotationState {
    pub fn mark_command(&mut self) {
        self.pending_command = true;
    }

    pub fn mark_debug(&mut self) {
        self.pending_command = true;
        self.pending_debug = true;
    }

    pub fn is_pending(&self) -> bool {
        self.pending_command
    }

    /// Consume the pending directive, if any, for the code block at hand.
    pub fn take(&mut self) -> Option<CodeMode> {
        let mode = match (self.pending_command, self.pending_debug) {
            (true, true) => Some(CodeMode::Debug),
            (true, false) => Some(CodeMode::Plain),
            _ => None,
        };
        *self = AnnotationState::default();
        mode
    }
}
