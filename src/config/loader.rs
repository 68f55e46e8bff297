//! 設定ファイルの読み込み関数

use std::path::Path;

use super::{
    ConfigError,
    TranslatorSettings,
};

/// ワークスペース内の設定ファイル名
pub const CONFIG_FILE_NAME: &str = ".translator.json";

/// ワークスペースから設定を読み込む
///
/// `.translator.json` ファイルを探して読み込む
///
/// # Arguments
/// * `workspace_root` - ワークスペースのルートパス
///
/// # Returns
/// - `Ok(Some(settings))`: 設定ファイルが見つかり、読み込みに成功
/// - `Ok(None)`: 設定ファイルが見つからない
/// - `Err(ConfigError)`: ファイル読み込みまたはパースエラー
///
/// # Errors
/// - ファイル読み込みエラー
/// - JSON パースエラー
pub fn load_from_workspace(
    workspace_root: &Path,
) -> Result<Option<TranslatorSettings>, ConfigError> {
    let config_path = workspace_root.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    load_from_file(&config_path).map(Some)
}

/// 指定されたパスから設定を読み込み、バリデーションする
///
/// 相対パスの `translationDir` は設定ファイルのあるディレクトリを基準に解決する
///
/// # Errors
/// - ファイル読み込みエラー
/// - JSON パースエラー
/// - バリデーションエラー
pub fn load_from_file(config_path: &Path) -> Result<TranslatorSettings, ConfigError> {
    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(config_path)?;
    let mut settings: TranslatorSettings = serde_json::from_str(&content)?;
    settings.validate().map_err(ConfigError::ValidationErrors)?;

    if let Some(dir) = &settings.translation_dir
        && dir.is_relative()
        && let Some(base) = config_path.parent()
    {
        settings.translation_dir = Some(base.join(dir));
    }

    tracing::debug!("Settings loaded successfully: {:?}", settings);
    Ok(settings)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    /// `load_from_workspace`: 設定ファイルが存在する場合
    #[rstest]
    fn test_load_from_workspace_with_valid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_content = r#"{"fallbackLocale": "ja", "keySeparator": "/"}"#;
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), config_content).unwrap();

        let result = load_from_workspace(temp_dir.path());

        assert!(result.is_ok());
        let settings = result.unwrap();
        assert!(settings.is_some());
        let settings = settings.unwrap();
        assert_eq!(settings.fallback_locale, "ja");
        assert_eq!(settings.key_separator, "/");
    }

    /// `load_from_workspace`: 設定ファイルが存在しない場合
    #[rstest]
    fn test_load_from_workspace_no_config_file() {
        let temp_dir = TempDir::new().unwrap();

        let result = load_from_workspace(temp_dir.path());

        assert!(result.is_ok());
        assert!(result.unwrap().is_none());
    }

    /// `load_from_workspace`: JSON パースエラー
    #[rstest]
    fn test_load_from_workspace_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "invalid json").unwrap();

        let result = load_from_workspace(temp_dir.path());

        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    /// `load_from_file`: バリデーションエラー
    #[rstest]
    fn test_load_from_file_validation_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("settings.json");
        fs::write(&config_path, r#"{"keySeparator": ""}"#).unwrap();

        let result = load_from_file(&config_path);

        assert!(matches!(result, Err(ConfigError::ValidationErrors(ref errors)) if errors.len() == 1));
    }

    /// `load_from_file`: 相対パスは設定ファイルの場所を基準に解決される
    #[rstest]
    fn test_load_from_file_resolves_relative_translation_dir() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("settings.json");
        fs::write(&config_path, r#"{"translationDir": "locales"}"#).unwrap();

        let settings = load_from_file(&config_path).unwrap();

        assert_that!(settings.translation_dir, some(eq(&temp_dir.path().join("locales"))));
    }

    /// `load_from_file`: ファイルが存在しない場合
    #[rstest]
    fn test_load_from_file_missing() {
        let temp_dir = TempDir::new().unwrap();

        let result = load_from_file(&temp_dir.path().join("missing.json"));

        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}
