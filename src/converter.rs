use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::emitter::{Emitter, DEFAULT_BOOTSTRAP};
use crate::error::Result;
use crate::extractor::extract;
use crate::loader::load;
use crate::script::Script;

pub const DEFAULT_OUTPUT: &str = "output.sh";

#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct ConverterConfig {
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub bootstrap: Option<String>,
}

impl ConverterConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Could not read config file {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Could not deserialize {:?}", path))
    }

    pub fn create_converter(&self) -> Converter {
        Converter {
            output: match &self.output {
                Some(output) => output.clone(),
                None => PathBuf::from(DEFAULT_OUTPUT),
            },
            emitter: Emitter {
                bootstrap: match &self.bootstrap {
                    Some(bootstrap) => bootstrap.clone(),
                    None => DEFAULT_BOOTSTRAP.to_string(),
                },
            },
        }
    }
}

/// Loader, extractor and emitter wired together.
#[derive(Debug)]
pub struct Converter {
    /// Used when no output path is given to [`Converter::run`].
    pub output: PathBuf,
    pub emitter: Emitter,
}

impl Default for Converter {
    fn default() -> Self {
        ConverterConfig::default().create_converter()
    }
}

impl Converter {
    /// Turn the tutorial at `input` into a script at `output`, or at the
    /// configured default when `output` is `None`.
    pub fn run(&self, input: &Path, output: Option<&Path>) -> Result<Script> {
        let output = output.unwrap_or_else(|| {
            log::info!("Using default output destination {:?}", self.output);
            self.output.as_path()
        });

        let html = load(input)?;
        let script = extract(&html)?;
        log::debug!(
            "extracted {} variables and {} statements from {:?}",
            script.variables.len(),
            script.statements.len(),
            input
        );

        self.emitter.emit(&script, output)?;
        Ok(script)
    }
}
