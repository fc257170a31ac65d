use std::path::{Path, PathBuf};

/// Host platform family, as far as virtualenv layout is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    Unix,
    Windows,
}

impl OsFamily {
    pub fn host() -> Self {
        if cfg!(windows) {
            OsFamily::Windows
        } else {
            OsFamily::Unix
        }
    }
}

/// Path to the virtualenv Python interpreter for the given OS family.
///
/// Never checks that the interpreter exists; a missing or broken venv
/// surfaces later as a spawn error.
pub fn interpreter_path(services_dir: &Path, venv: &str, family: OsFamily) -> PathBuf {
    let venv_dir = services_dir.join(venv);

    match family {
        OsFamily::Windows => venv_dir.join("Scripts").join("python.exe"),
        OsFamily::Unix => venv_dir.join("bin").join("python"),
    }
}
