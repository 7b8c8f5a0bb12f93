//! Turns a tutorial written in markdown (or already rendered HTML) into a bash script that runs
//! through it. Commands are picked up from the code blocks the author annotated with HTML comments,
//! headings become banners, everything else is prose and is left out.
//!
//! # Getting started
//!
//! ```sh
//! cargo install tutorial2bash
//! tutorial2bash -f tutorial.md -o tutorial.sh
//! ```
//!
//! # How to
//!
//! Let's say we have this markdown file, tutorial.md:
//!
//! ````markdown
//! # Check the cluster
//!
//! <!-- var KUBECONFIG -->
//!
//! <!-- command -->
//! ```
//! kubectl get ns
//! ```
//!
//! <!-- debug -->
//! ```
//! kubectl get pods -A
//! ```
//!
//! <!-- bash
//! wait_for_deployment_in_namespace "app" "default"
//! -->
//! ````
//!
//! The generated script looks like this:
//!
//! ```sh
//! #!/bin/bash
//! set -e
//! source /dev/stdin <<<"$( curl -sS https://raw.githubusercontent.com/keptn/keptn/master/test/utils.sh)"
//!
//! if [ -z "$KUBECONFIG" ]; then
//!  	echo "Please supply a value for the environment variable KUBECONFIG"
//! 	exit 1
//! fi
//!
//! echo "---------------------------------------------------------------------"
//! echo "Check the cluster"
//! echo "---------------------------------------------------------------------"
//! echo ""
//!
//! kubectl get ns
//!
//! if [ "$DEBUG" = "true" ]; then
//! kubectl get pods -A
//! fi
//!
//! wait_for_deployment_in_namespace "app" "default"
//!
//! ```
//!
//! # Details
//!
//! - `<!-- command -->`: the next code block is a command.
//! - `<!-- debug -->`: the next code block is a command which only runs when `DEBUG` is `true`.
//! - `<!-- bash ... -->`: the rest of the comment is copied into the script as is. It may span
//!   several lines and does not touch a pending `command` or `debug`.
//! - `<!-- var NAME -->`: the script refuses to run unless `NAME` is set. These checks are
//!   written before anything else, wherever they appear in the tutorial.
//!
//! Code blocks without a preceding `command` or `debug` are documentation and never end up in the
//! script. Headings `h1` to `h3` always do. Code blocks carrying a language tag are not treated
//! any differently from plain ones.
//!
//! # Configuration
//!
//! An optional TOML file, passed with `-c`, changes the defaults:
//!
//! ```toml
//! output = "run-tutorial.sh"
//! bootstrap = "source ./utils.sh"
//! ```
pub mod annotation;
pub mod converter;
pub mod emitter;
pub mod error;
pub mod extractor;
pub mod loader;
pub mod script;
mod utils;

use std::path::Path;

pub use converter::{Converter, ConverterConfig};
pub use error::{Error, Result};
pub use script::Script;

/// Convert `input` into a bash script at `output` with the default settings.
pub fn convert(input: &Path, output: &Path) -> Result<Script> {
    Converter::default().run(input, Some(output))
}
