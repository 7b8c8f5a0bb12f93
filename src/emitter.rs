use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use cfg_if::cfg_if;

use crate::error::{Error, Result};
use crate::script::Script;

pub const DEFAULT_BOOTSTRAP: &str = r#"source /dev/stdin <<<"$( curl -sS https://raw.githubusercontent.com/keptn/keptn/master/test/utils.sh)""#;

/// Writes a [`Script`] out as an executable bash file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emitter {
    pub bootstrap: String,
}

impl Default for Emitter {
    fn default() -> Self {
        Self {
            bootstrap: DEFAULT_BOOTSTRAP.to_string(),
        }
    }
}

impl Emitter {
    pub fn write_script<W: Write>(&self, script: &Script, mut writer: W) -> std::io::Result<()> {
        writeln!(writer, "#!/bin/bash")?;
        writeln!(writer, "set -e")?;
        writeln!(writer, "{}", self.bootstrap)?;
        writeln!(writer)?;

        for line in script.variables.iter().chain(script.statements.iter()) {
            writeln!(writer, "{}", line)?;
            writeln!(writer)?;
        }
        writer.flush()
    }

    /// Create or truncate `path`, write the script and make it executable.
    /// A failed write leaves whatever was flushed so far behind.
    pub fn emit(&self, script: &Script, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| Error::io(path, e))?;
        self.write_script(script, BufWriter::new(file))
            .map_err(|e| Error::io(path, e))?;
        make_executable(path)
    }
}

cfg_if! {
    if #[cfg(unix)] {
        fn make_executable(path: &Path) -> Result<()> {
            use std::os::unix::fs::PermissionsExt;

            std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o777))
                .map_err(|e| Error::io(path, e))
        }
    } else {
        fn make_executable(path: &Path) -> Result<()> {
            log::debug!("no executable bit to set for {:?} on this platform", path);
            Ok(())
        }
    }
}
