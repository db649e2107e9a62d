//! Console text shown to the user (zh-CN).

use crate::platform::Platform;

pub const CHECKING_INTERPRETER: &str = "正在检查Python环境...";
pub const INTERPRETER_NOT_FOUND: &str = "错误: 未找到Python环境";
pub const INSTALLING_DEPENDENCIES: &str = "正在安装依赖包...";
pub const DEPENDENCY_INSTALL_FAILED: &str = "错误: 依赖包安装失败";
pub const DEPENDENCIES_INSTALLED: &str = "依赖包安装完成";
pub const STARTING_APP: &str = "正在启动服务...";
pub const LISTEN_ADDRESS: &str = "服务地址";
pub const DOCS_ADDRESS: &str = "API文档";
pub const STOP_HINT: &str = "按 Ctrl+C 停止服务";
pub const SERVICE_READY: &str = "服务已就绪";
pub const OLD_INTERPRETER: &str = "警告: Python版本过低，建议使用";
pub const MISSING_FILE: &str = "警告: 未找到文件";

/// Follow-up hint printed under the interpreter error.
pub fn install_interpreter_hint(platform: Platform, min_version: &str) -> String {
    match platform {
        Platform::Windows => {
            format!("请先安装Python {min_version}+，并在安装时勾选 \"Add Python to PATH\"")
        }
        Platform::MacOS | Platform::Linux => {
            format!("请先安装Python {min_version}+ (python3)，并确保其在PATH中")
        }
    }
}

pub fn exited_with_status(code: i32) -> String {
    format!("退出码 {code}")
}

pub fn terminated_by_signal() -> String {
    "进程被信号终止".to_string()
}

pub fn failed_to_start(error: &str) -> String {
    format!("无法启动 ({error})")
}

/// Follow-up hint printed under the dependency error.
pub fn install_dependencies_hint(package_manager: &str, manifest: &str) -> String {
    format!("请检查网络连接，或手动执行: {package_manager} install -r {manifest}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpreter_error_is_localized() {
        assert!(INTERPRETER_NOT_FOUND.contains("未找到Python环境"));
    }

    #[test]
    fn test_interpreter_hint_per_platform() {
        assert!(install_interpreter_hint(Platform::Windows, "3.8").contains("PATH"));
        assert!(install_interpreter_hint(Platform::Linux, "3.8").contains("python3"));
        assert!(install_interpreter_hint(Platform::Linux, "3.10").contains("3.10+"));
        assert_eq!(
            install_interpreter_hint(Platform::Linux, "3.8"),
            install_interpreter_hint(Platform::MacOS, "3.8")
        );
    }

    #[test]
    fn test_failure_reasons_are_distinct() {
        assert!(exited_with_status(2).contains('2'));
        assert!(failed_to_start("No such file or directory").contains("No such file"));
        assert_ne!(terminated_by_signal(), failed_to_start(""));
    }

    #[test]
    fn test_dependencies_hint_names_command() {
        let hint = install_dependencies_hint("pip3", "requirements.txt");
        assert!(hint.contains("pip3 install -r requirements.txt"));
    }
}
