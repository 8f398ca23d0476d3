//! 配置功能测试

use qwen_mt::infrastructure::config::{
    apply_env_overrides, parse_config, read_config_file, Config, QwenConfig, API_KEY_ENV,
    MODEL_ENV,
};
use qwen_mt::ErrorKind;

#[test]
fn test_config_defaults() {
    let config = parse_config("").unwrap();
    assert_eq!(config.timeout_secs, 60);
    assert!(config.http_proxy.is_none());
    assert_eq!(config.qwen, QwenConfig::default());

    let default = Config::default();
    assert_eq!(default.timeout_secs, config.timeout_secs);
    assert_eq!(default.qwen, config.qwen);
}

#[test]
fn test_config_toml_format() {
    let config = parse_config(
        r#"
http_proxy = "http://127.0.0.1:7890"
timeout_secs = 15

[logging]
enable = false
path = "/tmp/qmt.log"
level = "DEBUG"

[qwen]
api_key = "sk-test"
model_name = "qwen-plus"
"#,
    )
    .unwrap();

    assert_eq!(config.http_proxy.as_deref(), Some("http://127.0.0.1:7890"));
    assert_eq!(config.timeout_secs, 15);
    assert!(!config.logging.enable);
    assert_eq!(config.logging.path.as_deref(), Some("/tmp/qmt.log"));
    assert_eq!(config.logging.level, "DEBUG");
    assert_eq!(config.qwen.api_key.as_deref(), Some("sk-test"));
    assert_eq!(config.qwen.model_name.as_deref(), Some("qwen-plus"));
}

#[test]
fn test_model_name_is_optional() {
    let config = parse_config("[qwen]\napi_key = \"sk-test\"\n").unwrap();
    assert!(config.qwen.has_api_key());
    assert!(config.qwen.model_name.is_none());
}

#[test]
fn test_malformed_config() {
    let err = parse_config("timeout_secs = \"soon\"").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Internal);
    assert!(err.to_string().starts_with("TOML parsing error"));
}

#[test]
fn test_env_overrides() {
    let mut config = parse_config("[qwen]\napi_key = \"from-file\"\n").unwrap();

    // 空值不覆盖文件配置
    apply_env_overrides(&mut config, |name| match name {
        API_KEY_ENV => Some(String::new()),
        MODEL_ENV => Some("qwen-mt-plus".to_string()),
        _ => None,
    });
    assert_eq!(config.qwen.api_key.as_deref(), Some("from-file"));
    assert_eq!(config.qwen.model_name.as_deref(), Some("qwen-mt-plus"));

    apply_env_overrides(&mut config, |name| {
        (name == API_KEY_ENV).then(|| "from-env".to_string())
    });
    assert_eq!(config.qwen.api_key.as_deref(), Some("from-env"));
    assert_eq!(config.qwen.model_name.as_deref(), Some("qwen-mt-plus"));
}

#[test]
fn test_api_key_presence() {
    assert!(!QwenConfig::default().has_api_key());
    assert!(!QwenConfig::new("", None).has_api_key());
    assert!(QwenConfig::new("sk-1", None).has_api_key());
}

#[test]
fn test_read_config_file() {
    let dir = tempfile::tempdir().unwrap();

    // 文件不存在时使用默认值
    let missing = read_config_file(&dir.path().join("missing.toml")).unwrap();
    assert_eq!(missing.qwen, QwenConfig::default());

    let good = dir.path().join("good.toml");
    std::fs::write(&good, "[qwen]\napi_key = \"sk-file\"\n").unwrap();
    let config = read_config_file(&good).unwrap();
    assert_eq!(config.qwen.api_key.as_deref(), Some("sk-file"));

    // 解析失败交给调用方，由其在日志初始化后记录警告
    let bad = dir.path().join("bad.toml");
    std::fs::write(&bad, "[qwen\n").unwrap();
    let err = read_config_file(&bad).unwrap_err();
    assert!(matches!(err, qwen_mt::TranslateError::Toml(_)));
}
