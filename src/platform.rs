use colored::Colorize;
use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOS,
    Linux,
}

impl Platform {
    pub fn detect() -> Self {
        match env::consts::OS {
            "windows" => Platform::Windows,
            "macos" => Platform::MacOS,
            "linux" => Platform::Linux,
            other => {
                eprintln!(
                    "{} Unknown platform: {}, defaulting to Linux behavior",
                    "⚠".yellow(),
                    other
                );
                Platform::Linux
            }
        }
    }

    /// Interpreter command the platform's launcher script invokes.
    pub fn interpreter(self) -> &'static str {
        match self {
            Platform::Windows => "python",
            Platform::MacOS | Platform::Linux => "python3",
        }
    }

    pub fn package_manager(self) -> &'static str {
        match self {
            Platform::Windows => "pip",
            Platform::MacOS | Platform::Linux => "pip3",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::MacOS => "macos",
            Platform::Linux => "linux",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_detection() {
        let platform = Platform::detect();
        match platform {
            Platform::Windows | Platform::MacOS | Platform::Linux => {}
        }
    }

    #[test]
    fn test_windows_toolchain() {
        assert_eq!(Platform::Windows.interpreter(), "python");
        assert_eq!(Platform::Windows.package_manager(), "pip");
    }

    #[test]
    fn test_unix_toolchain() {
        for platform in [Platform::Linux, Platform::MacOS] {
            assert_eq!(platform.interpreter(), "python3");
            assert_eq!(platform.package_manager(), "pip3");
        }
    }

    #[test]
    fn test_platform_names() {
        assert_eq!(Platform::Windows.name(), "windows");
        assert_eq!(Platform::MacOS.name(), "macos");
        assert_eq!(Platform::Linux.name(), "linux");
    }
}
