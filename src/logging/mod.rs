//! 解码器宿主的日志初始化.
//!
//! 解码器 crate 只通过 `log` 门面输出; 这里安装一个 tracing 订阅器,
//! 把这些记录同时写到控制台和按日命名的日志文件. 后台任务负责每日零点切换
//! 文件, 压缩历史日志并删除超出保留期的文件.

use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDate, Timelike};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing_subscriber::{
    EnvFilter, Registry,
    fmt::{self, FormatEvent, FormatFields, format::Writer},
    layer::{Layer, SubscriberExt},
    registry::LookupSpan,
    util::SubscriberInitExt,
};

mod task;

/// 解码器模块的日志目标, 供 `codec_level` 单独调节
const CODEC_TARGET: &str = "bink2_codec::decoders::bink2";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// 文件日志的过滤指令, 例如 `info`
    pub level: String,
    pub directory: String,
    pub file_prefix: String,
    /// 解码器模块单独使用的级别, 例如 `trace` 可看到每帧帧头与条带对齐
    #[serde(default)]
    pub codec_level: Option<String>,
    #[serde(default = "default_retention_days")]
    pub retention_days: i64,
    #[serde(default = "default_true")]
    pub compress_history: bool,
    #[serde(default = "default_cleanup_interval")]
    pub cleanup_interval_seconds: u64,
}

fn default_true() -> bool {
    true
}

fn default_retention_days() -> i64 {
    30
}

fn default_cleanup_interval() -> u64 {
    3600
}

impl LoggingConfig {
    /// 文件层使用的过滤指令
    pub fn file_directives(&self) -> String {
        match &self.codec_level {
            Some(level) => format!("{},{}={}", self.level, CODEC_TARGET, level),
            None => self.level.clone(),
        }
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// 安装全局日志订阅器并启动维护任务
///
/// 必须在 tokio 运行时内调用, 且进程内只能调用一次.
pub fn init(config: LoggingConfig) -> Result<()> {
    std::fs::create_dir_all(&config.directory)
        .with_context(|| format!("创建日志目录失败, path={}", config.directory))?;

    let reopen = Arc::new(AtomicBool::new(false));
    let writer = DailyFileWriter::new(
        Path::new(&config.directory),
        &config.file_prefix,
        Arc::clone(&reopen),
    )?;

    let (non_blocking, guard) = tracing_appender::non_blocking(writer);
    LOG_GUARD.set(guard).ok();

    let console_layer = fmt::Layer::default()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .event_format(ConsoleFormatter)
        .with_filter(EnvFilter::new("debug"));

    let file_layer = fmt::Layer::default()
        .with_writer(non_blocking)
        .with_ansi(false)
        .event_format(FileFormatter)
        .with_filter(EnvFilter::new(config.file_directives()));

    Registry::default()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("安装全局日志订阅器失败")?;

    task::spawn_maintenance(config, reopen);

    Ok(())
}

/// 追加写入当天日志文件; 维护任务置位 `reopen` 后在下一次写入时切换到新日期的文件
struct DailyFileWriter {
    directory: PathBuf,
    prefix: String,
    reopen: Arc<AtomicBool>,
    file: File,
}

impl DailyFileWriter {
    fn new(directory: &Path, prefix: &str, reopen: Arc<AtomicBool>) -> Result<Self> {
        let path = daily_log_path(directory, prefix, Local::now().date_naive());
        Ok(Self {
            directory: directory.to_path_buf(),
            prefix: prefix.to_string(),
            reopen,
            file: open_append(&path)?,
        })
    }

    fn switch_to_today(&mut self) -> std::io::Result<()> {
        let path = daily_log_path(&self.directory, &self.prefix, Local::now().date_naive());
        self.file = open_append(&path).map_err(std::io::Error::other)?;
        Ok(())
    }
}

impl Write for DailyFileWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if self.reopen.swap(false, Ordering::AcqRel) {
            self.switch_to_today()?;
        }
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.file.flush()
    }
}

fn open_append(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("打开日志文件失败, path={}", path.display()))
}

/// `<directory>/<prefix>.<YYYY-MM-DD>.log`
pub(crate) fn daily_log_path(directory: &Path, prefix: &str, date: NaiveDate) -> PathBuf {
    directory.join(format!("{}.{}.log", prefix, date.format("%Y-%m-%d")))
}

fn write_timestamp(writer: &mut Writer<'_>) -> std::fmt::Result {
    let now = Local::now();
    write!(
        writer,
        "[{:02}-{:02} {:02}:{:02}:{:02}.{:03}] ",
        now.month(),
        now.day(),
        now.hour(),
        now.minute(),
        now.second(),
        now.timestamp_subsec_millis()
    )
}

struct ConsoleFormatter;

impl<S, N> FormatEvent<S, N> for ConsoleFormatter
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        write_timestamp(&mut writer)?;
        let color = match *meta.level() {
            tracing::Level::ERROR => "\x1b[31m",
            tracing::Level::WARN => "\x1b[33m",
            tracing::Level::INFO => "\x1b[32m",
            _ => "\x1b[34m",
        };
        write!(
            writer,
            "{}{:5}\x1b[0m {} > ",
            color,
            meta.level().to_string(),
            meta.target()
        )?;
        ctx.format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// 文件格式: 时间, 级别, 目标模块, 消息
struct FileFormatter;

impl<S, N> FormatEvent<S, N> for FileFormatter
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        write_timestamp(&mut writer)?;
        write!(writer, "{:5} {} > ", meta.level().to_string(), meta.target())?;
        ctx.format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}
