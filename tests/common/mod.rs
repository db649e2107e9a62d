#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A project directory plus a `bin/` directory holding fake toolchain scripts.
/// Tests put only `bin/` on PATH so no real interpreter is picked up.
pub struct FakeProject {
    pub dir: TempDir,
}

impl FakeProject {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("bin")).unwrap();
        fs::write(dir.path().join("requirements.txt"), "fastapi\nuvicorn\n").unwrap();
        fs::write(dir.path().join("main.py"), "print('hello')\n").unwrap();
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn bin(&self) -> PathBuf {
        self.dir.path().join("bin")
    }

    /// Install a fake interpreter that answers `--version` with `version_exit`
    /// and runs the entry point with `app_exit`, recording each run.
    pub fn with_interpreter(self, name: &str, version_exit: i32, app_exit: i32) -> Self {
        let script = format!(
            "#!/bin/sh\n\
             case \"$1\" in\n\
             --version) echo \"Python 3.11.4\"; exit {version_exit} ;;\n\
             main.py) echo app-started; echo run >> app_runs.log; exit {app_exit} ;;\n\
             esac\n\
             exit 0\n"
        );
        self.write_script(name, &script);
        self
    }

    pub fn with_package_manager(self, name: &str, exit: i32) -> Self {
        let script = format!(
            "#!/bin/sh\n\
             echo \"$@\" >> pip_runs.log\n\
             exit {exit}\n"
        );
        self.write_script(name, &script);
        self
    }

    pub fn app_runs(&self) -> usize {
        read_lines(&self.root().join("app_runs.log"))
    }

    pub fn pip_runs(&self) -> Vec<String> {
        fs::read_to_string(self.root().join("pip_runs.log"))
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    fn write_script(&self, name: &str, content: &str) {
        let path = self.bin().join(name);
        fs::write(&path, content).unwrap();
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).unwrap();
    }
}

fn read_lines(path: &Path) -> usize {
    fs::read_to_string(path)
        .map(|s| s.lines().count())
        .unwrap_or(0)
}
