use std::io::Write;
use std::process::{Command, Stdio};

use itertools::Itertools;
use log::debug;

use cmdy_core::error::{Error, Result};
use cmdy_core::menu::Selector;

const FZF_LAYOUT_ARGS: [&str; 2] = ["--height=~50%", "--layout=reverse"];

/// Runs `fzf` over the display strings.
#[derive(Debug, Clone)]
pub struct FzfSelector {
    program: String,
}

impl FzfSelector {
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Selector for FzfSelector {
    fn select(&mut self, displays: &[&str], header: &str) -> Result<Option<String>> {
        let mut child = Command::new(&self.program)
            .arg(format!("--header={header}"))
            .args(FZF_LAYOUT_ARGS)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| Error::Selector(format!("cannot start `{}`: {e}", self.program)))?;

        // Dropping stdin closes the pipe so the picker sees EOF
        let write_result = child
            .stdin
            .take()
            .map_or(Ok(()), |mut stdin| {
                stdin.write_all(displays.iter().join("\n").as_bytes())
            });

        // The child is reaped even when the picker quit before reading everything
        let output = child
            .wait_with_output()
            .map_err(|e| Error::Selector(e.to_string()))?;

        if !output.status.success() {
            debug!("`{}` exited with {}", self.program, output.status);
            return Ok(None);
        }

        write_result.map_err(|e| Error::Selector(format!("cannot write options: {e}")))?;

        let selected = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Ok((!selected.is_empty()).then_some(selected))
    }
}
