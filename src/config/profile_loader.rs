// ==========================================
// 成衣供应链物料测算 - 配置加载
// ==========================================
// 查找顺序:
// 1) 显式路径 (--config)
// 2) 环境变量 GARMENT_SC_CONFIG
// 3) 用户配置目录 <config_dir>/garment-supply-chain/yield_profile.json（存在时）
// 4) 内置参考参数
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::yield_profile::YieldProfile;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// 指定配置文件的环境变量
pub const PROFILE_ENV_VAR: &str = "GARMENT_SC_CONFIG";

const PROFILE_DIR_NAME: &str = "garment-supply-chain";
const PROFILE_FILE_NAME: &str = "yield_profile.json";

/// 配置来源（写入日志便于追溯）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileOrigin {
    Explicit(PathBuf),
    Env(PathBuf),
    UserConfig(PathBuf),
    BuiltIn,
}

impl fmt::Display for ProfileOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileOrigin::Explicit(p) => write!(f, "explicit:{}", p.display()),
            ProfileOrigin::Env(p) => write!(f, "env:{}", p.display()),
            ProfileOrigin::UserConfig(p) => write!(f, "user:{}", p.display()),
            ProfileOrigin::BuiltIn => write!(f, "built-in"),
        }
    }
}

/// 用户配置目录下的默认配置文件路径
pub fn default_profile_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(PROFILE_DIR_NAME).join(PROFILE_FILE_NAME))
}

/// 从 JSON 文件读取并校验配置
pub fn load_from_file(path: &Path) -> ConfigResult<YieldProfile> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    let raw = fs::read_to_string(path)?;
    let profile: YieldProfile =
        serde_json::from_str(&raw).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
    profile.validate()?;

    tracing::debug!(path = %path.display(), "yield profile loaded");
    Ok(profile)
}

/// 按查找顺序解析配置
pub fn resolve(explicit: Option<&Path>) -> ConfigResult<(YieldProfile, ProfileOrigin)> {
    let env_path = std::env::var_os(PROFILE_ENV_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);
    resolve_with(explicit, env_path, default_profile_path())
}

/// 解析逻辑（不读取进程环境，便于测试）
///
/// 显式路径与环境变量指定的文件必须存在；用户目录下的文件缺失时回落到内置参数
pub fn resolve_with(
    explicit: Option<&Path>,
    env_path: Option<PathBuf>,
    user_path: Option<PathBuf>,
) -> ConfigResult<(YieldProfile, ProfileOrigin)> {
    if let Some(path) = explicit {
        let profile = load_from_file(path)?;
        return Ok((profile, ProfileOrigin::Explicit(path.to_path_buf())));
    }

    if let Some(path) = env_path {
        let profile = load_from_file(&path)?;
        return Ok((profile, ProfileOrigin::Env(path)));
    }

    if let Some(path) = user_path.filter(|p| p.exists()) {
        let profile = load_from_file(&path)?;
        return Ok((profile, ProfileOrigin::UserConfig(path)));
    }

    Ok((YieldProfile::default(), ProfileOrigin::BuiltIn))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_profile(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", json).unwrap();
        file
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let file = write_profile(r#"{ "cotton_bale_weight_lbs": 500.0 }"#);
        let profile = load_from_file(file.path()).unwrap();

        assert_eq!(profile.cotton_bale_weight_lbs, 500.0);
        assert_eq!(profile.yarn_cone_weight_lbs, 5.0);
        assert_eq!(profile.max_lots, 5);
    }

    #[test]
    fn test_invalid_json() {
        let file = write_profile("{ not json");
        let result = load_from_file(file.path());
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let file = write_profile(r#"{ "cotton_to_yarn_yield": 1.5 }"#);
        let result = load_from_file(file.path());
        assert!(matches!(result, Err(ConfigError::InvalidYield { .. })));
    }

    #[test]
    fn test_missing_explicit_file() {
        let result = resolve_with(Some(Path::new("/nonexistent/profile.json")), None, None);
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_resolution_order() {
        let explicit = write_profile(r#"{ "max_lots": 3 }"#);
        let env = write_profile(r#"{ "max_lots": 4 }"#);

        let (profile, origin) = resolve_with(
            Some(explicit.path()),
            Some(env.path().to_path_buf()),
            None,
        )
        .unwrap();
        assert_eq!(profile.max_lots, 3);
        assert!(matches!(origin, ProfileOrigin::Explicit(_)));

        let (profile, origin) =
            resolve_with(None, Some(env.path().to_path_buf()), None).unwrap();
        assert_eq!(profile.max_lots, 4);
        assert!(matches!(origin, ProfileOrigin::Env(_)));
    }

    #[test]
    fn test_missing_user_file_uses_built_in() {
        let (profile, origin) = resolve_with(
            None,
            None,
            Some(PathBuf::from("/nonexistent/garment/yield_profile.json")),
        )
        .unwrap();
        assert_eq!(origin, ProfileOrigin::BuiltIn);
        assert_eq!(profile, YieldProfile::default());
    }
}
