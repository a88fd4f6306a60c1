use super::{LoggingConfig, daily_log_path};
use anyhow::{Context, Result};
use chrono::{DateTime, Duration as ChronoDuration, Local, NaiveDate, TimeZone, Utc};
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, SystemTime};
use tracing::{debug, error};

/// 日志目录中一个按日命名的文件
#[derive(Debug, PartialEq, Eq)]
struct DatedLog {
    date: NaiveDate,
    compressed: bool,
}

/// 启动日志维护任务: 定期清理, 每日零点切换当前文件
pub(super) fn spawn_maintenance(config: LoggingConfig, reopen: Arc<AtomicBool>) {
    tokio::spawn(async move {
        let mut sweep_timer =
            tokio::time::interval(Duration::from_secs(config.cleanup_interval_seconds.max(1)));

        if let Err(err) = touch_today(&config) {
            error!("创建当天日志文件失败: {}", err);
        }
        let mut midnight = next_midnight_or_soon(Local::now());

        loop {
            tokio::select! {
                _ = sweep_timer.tick() => {
                    if let Err(err) = sweep(&config, Local::now().date_naive()) {
                        error!("清理日志失败: {}", err);
                    }
                }
                _ = tokio::time::sleep_until(midnight) => {
                    match touch_today(&config) {
                        Ok(()) => reopen.store(true, Ordering::Release),
                        Err(err) => error!("切换日志文件失败: {}", err),
                    }
                    if let Err(err) = sweep(&config, Local::now().date_naive()) {
                        error!("切换后清理日志失败: {}", err);
                    }
                    midnight = next_midnight_or_soon(Local::now());
                }
            }
        }
    });
}

/// 确保当天的日志文件存在
fn touch_today(config: &LoggingConfig) -> Result<()> {
    let directory = Path::new(&config.directory);
    fs::create_dir_all(directory)?;
    let path = daily_log_path(directory, &config.file_prefix, Local::now().date_naive());
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("创建当天日志文件失败, path={}", path.display()))?;
    Ok(())
}

/// 删除超出保留期的日志, 压缩今天之前的未压缩日志
fn sweep(config: &LoggingConfig, today: NaiveDate) -> Result<()> {
    let directory = Path::new(&config.directory);
    if !directory.exists() {
        return Ok(());
    }
    let cutoff = today - ChronoDuration::days(config.retention_days);

    for entry in fs::read_dir(directory)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();
        let Some(log) = parse_dated_log(&name, &config.file_prefix) else {
            continue;
        };
        let path = entry.path();

        if log.date < cutoff {
            if let Err(err) = fs::remove_file(&path) {
                debug!("删除过期日志失败, path={}: {}", path.display(), err);
            }
        } else if config.compress_history && !log.compressed && log.date < today {
            if let Err(err) = gzip_in_place(&path) {
                debug!("压缩历史日志失败, path={}: {}", path.display(), err);
            }
        }
    }
    Ok(())
}

/// 压缩为 `<name>.gz` 后删除原文件; 目标已存在时跳过
fn gzip_in_place(path: &Path) -> Result<()> {
    let gz_path = PathBuf::from(format!("{}.gz", path.display()));
    if gz_path.exists() {
        return Ok(());
    }

    let mut input =
        File::open(path).with_context(|| format!("打开待压缩日志失败, path={}", path.display()))?;
    let output = File::create(&gz_path)
        .with_context(|| format!("创建压缩日志失败, path={}", gz_path.display()))?;
    let mut encoder = GzEncoder::new(output, Compression::default());
    io::copy(&mut input, &mut encoder)?;
    encoder.finish()?;

    fs::remove_file(path)
        .with_context(|| format!("删除已压缩日志失败, path={}", path.display()))?;
    Ok(())
}

/// 解析 `<prefix>.<YYYY-MM-DD>.log[.gz]`
fn parse_dated_log(name: &str, prefix: &str) -> Option<DatedLog> {
    let rest = name.strip_prefix(prefix)?.strip_prefix('.')?;
    let (date_part, compressed) = match rest.strip_suffix(".log.gz") {
        Some(d) => (d, true),
        None => (rest.strip_suffix(".log")?, false),
    };
    if date_part.len() != 10 {
        return None;
    }
    let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()?;
    Some(DatedLog { date, compressed })
}

fn next_midnight(now: DateTime<Local>) -> Result<tokio::time::Instant> {
    let next = (now.date_naive() + ChronoDuration::days(1))
        .and_hms_opt(0, 0, 0)
        .context("计算下一个零点失败")?;
    let next_local = Local
        .from_local_datetime(&next)
        .earliest()
        .context("转换本地时间失败")?;
    let wait = SystemTime::from(next_local.with_timezone(&Utc))
        .duration_since(SystemTime::now())
        .unwrap_or_default();
    Ok(tokio::time::Instant::now() + wait)
}

/// 计算失败时一秒后重试
fn next_midnight_or_soon(now: DateTime<Local>) -> tokio::time::Instant {
    next_midnight(now).unwrap_or_else(|err| {
        error!("计算下一次日志切换时间失败: {}", err);
        tokio::time::Instant::now() + Duration::from_secs(1)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use tempfile::TempDir;

    fn config_in(dir: &TempDir) -> LoggingConfig {
        LoggingConfig {
            level: "info".to_string(),
            directory: dir.path().to_string_lossy().to_string(),
            file_prefix: "bink2".to_string(),
            codec_level: None,
            retention_days: 7,
            compress_history: true,
            cleanup_interval_seconds: 60,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        match NaiveDate::from_ymd_opt(y, m, d) {
            Some(date) => date,
            None => panic!("无效日期 {}-{}-{}", y, m, d),
        }
    }

    #[test]
    fn test_parse_dated_log() {
        assert_eq!(
            parse_dated_log("bink2.2026-02-06.log", "bink2"),
            Some(DatedLog {
                date: date(2026, 2, 6),
                compressed: false
            })
        );
        assert_eq!(
            parse_dated_log("bink2.2026-02-06.log.gz", "bink2"),
            Some(DatedLog {
                date: date(2026, 2, 6),
                compressed: true
            })
        );
        assert!(parse_dated_log("bink2.log", "bink2").is_none());
        assert!(parse_dated_log("other.2026-02-06.log", "bink2").is_none());
    }

    #[test]
    fn test_sweep_压缩与过期删除() {
        let dir = TempDir::new().unwrap_or_else(|err| panic!("创建临时目录失败: {}", err));
        let config = config_in(&dir);
        let today = date(2026, 3, 20);
        let root = dir.path();

        let old = daily_log_path(root, "bink2", date(2026, 3, 1));
        let recent = daily_log_path(root, "bink2", date(2026, 3, 18));
        let current = daily_log_path(root, "bink2", today);
        for path in [&old, &recent, &current] {
            fs::write(path, "帧解码完成\n").unwrap();
        }

        sweep(&config, today).unwrap();

        assert!(!old.exists(), "过期日志应被删除");
        assert!(!recent.exists(), "历史日志应被压缩");
        assert!(current.exists(), "当天日志保持原样");

        let gz = PathBuf::from(format!("{}.gz", recent.display()));
        let mut text = String::new();
        flate2::read::GzDecoder::new(File::open(&gz).unwrap())
            .read_to_string(&mut text)
            .unwrap();
        assert_eq!(text, "帧解码完成\n");
    }

    #[test]
    fn test_touch_today_创建空文件() {
        let dir = TempDir::new().unwrap_or_else(|err| panic!("创建临时目录失败: {}", err));
        let config = config_in(&dir);
        touch_today(&config).unwrap();

        let path = daily_log_path(dir.path(), "bink2", Local::now().date_naive());
        let meta = path.metadata().unwrap();
        assert_eq!(meta.len(), 0);
    }
}
