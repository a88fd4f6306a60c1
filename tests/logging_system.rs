//! 日志系统集成测试.
//!
//! tracing 全局订阅器每个进程只能安装一次, 调用 `init()` 的测试标记为 `#[ignore]`,
//! 需要单独运行: `cargo test --test logging_system <名称> -- --ignored`.

use bink2::codec::{CodecId, CodecParameters, CodecParamsType, VideoCodecParams};
use bink2::core::PixelFormat;
use bink2::logging::{LoggingConfig, init};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::TempDir;

fn make_config(dir: &Path, prefix: &str, level: &str, codec_level: Option<&str>) -> LoggingConfig {
    LoggingConfig {
        level: level.to_string(),
        directory: dir.to_string_lossy().to_string(),
        file_prefix: prefix.to_string(),
        codec_level: codec_level.map(str::to_string),
        retention_days: 7,
        compress_history: false,
        cleanup_interval_seconds: 3600,
    }
}

fn today_log(dir: &Path, prefix: &str) -> PathBuf {
    let today = chrono::Local::now().date_naive();
    dir.join(format!("{}.{}.log", prefix, today.format("%Y-%m-%d")))
}

fn read_log_after_flush(path: &Path) -> String {
    std::thread::sleep(Duration::from_millis(200));
    fs::read_to_string(path).unwrap_or_else(|e| panic!("读取日志文件失败: {:?}, 错误: {}", path, e))
}

#[test]
fn test_配置反序列化默认值() {
    let json = r#"{ "level": "info", "directory": "logs", "file_prefix": "bink2" }"#;
    let config: LoggingConfig = serde_json::from_str(json).expect("解析日志配置失败");
    assert_eq!(config.retention_days, 30);
    assert!(config.compress_history);
    assert_eq!(config.cleanup_interval_seconds, 3600);
    assert!(config.codec_level.is_none());
}

#[tokio::test]
#[ignore]
async fn test_解码器日志写入文件() {
    let dir = TempDir::new().unwrap();
    init(make_config(dir.path(), "bink2-test", "info", Some("debug"))).expect("日志初始化失败");

    // 打开解码器时 bink2 模块输出 debug 级别的流参数, 经 log 桥接进入文件
    let registry = bink2::default_codec_registry();
    let mut dec = registry.create_decoder(CodecId::Bink2).unwrap();
    dec.open(&CodecParameters {
        codec_id: CodecId::Bink2,
        codec_tag: *b"KB2g",
        extra_data: 0u32.to_le_bytes().to_vec(),
        bit_rate: 0,
        params: CodecParamsType::Video(VideoCodecParams {
            width: 320,
            height: 240,
            pixel_format: PixelFormat::Yuv420p,
        }),
    })
    .unwrap();
    tracing::debug!("宿主调试日志_DEBUG_MSG");
    tracing::warn!("宿主警告日志_WARN_MSG");

    let content = read_log_after_flush(&today_log(dir.path(), "bink2-test"));
    assert!(content.contains("打开 bink2 解码器: 320x240"), "文件内容:\n{}", content);
    assert!(content.contains("宿主警告日志_WARN_MSG"));
    assert!(content.contains("WARN"));
    assert!(!content.contains("宿主调试日志_DEBUG_MSG"), "宿主 debug 日志应被过滤");
}

#[tokio::test]
#[ignore]
async fn test_嵌套目录自动创建() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("nested").join("logs");
    assert!(!nested.exists());

    init(make_config(&nested, "dir-test", "info", None)).expect("日志初始化失败");
    tracing::info!("测试目录创建");

    let content = read_log_after_flush(&today_log(&nested, "dir-test"));
    assert!(content.contains("测试目录创建"));
}
