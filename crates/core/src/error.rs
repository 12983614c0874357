use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot read {} file at `{}` ({})", .file_description, .path, .original)]
    ConfigIo {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Invalid YAML in {} file at `{}` ({})", .file_description, .path, .original)]
    ConfigYaml {
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("No menu options available")]
    NoMenuOptions,

    #[error("The sub process exited with a non-success code{}", exit_code_suffix(.0))]
    SubProcessExit(Option<i32>),

    #[error("Error with sub process: {}", _0)]
    SubProcess(#[from] std::io::Error),

    #[error("Shell invocation `{}` is empty", .0)]
    EmptyShellCommand(String),

    #[error("Selector failed: {}", .0)]
    Selector(String),

    #[error("No suitable text editor found")]
    NoEditor,

    #[error("Editor `{}` failed: {}", .editor, .reason)]
    Editor { editor: String, reason: String },
}

fn exit_code_suffix(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" ({code})"),
        None => String::new(),
    }
}

impl Error {
    pub fn config_io(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::ConfigIo {
            file_description,
            path,
            original,
        }
    }

    pub fn config_yaml(
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::ConfigYaml {
            file_description,
            path,
            original,
        }
    }

    /// Remediation lines shown under a fatal error.
    #[must_use]
    pub fn hints(&self) -> &'static [&'static str] {
        match self {
            Self::ConfigIo { .. } => &[
                "1. Create config.yaml in current directory",
                "2. Run from a directory that contains config.yaml",
                "3. Point --config at an existing file",
            ],
            Self::ConfigYaml { .. } => &["Please check the file format and try again"],
            Self::NoMenuOptions => &[
                "1. Add entries to config.yaml",
                "2. Add executable scripts to scripts/ directory",
                "3. Start from the sample config.yaml shipped with cmdy",
            ],
            Self::NoEditor => &[
                "1. Set EDITOR environment variable: export EDITOR=vim",
                "2. Install a text editor: apt install nano",
                "3. Edit manually: nano config.yaml",
            ],
            _ => &[],
        }
    }
}
