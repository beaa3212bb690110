use std::path::PathBuf;

use chrono_tz::Tz;
use shared::models::TimeSlotTable;

use crate::auth::JwtConfig;
use crate::core::{Result, ServerError};

/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | /var/lib/freshsip/orders | 工作目录 (数据库、日志) |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | TIMEZONE | Asia/Kolkata | 业务时区 (IANA) |
/// | TIME_SLOTS_FILE | - | 时段表 JSON 覆盖文件 |
/// | REQUEST_TIMEOUT_MS | 30000 | 请求超时(毫秒) |
/// | LOG_LEVEL | info | 日志级别 (RUST_LOG 优先) |
/// | LOG_DIR | - | 日志目录 (按天滚动) |
///
/// JWT 相关变量见 [`JwtConfig::from_env`]。
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/orders HTTP_PORT=8080 TIMEZONE=Asia/Dubai cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储数据库等文件
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 业务时区，决定 "今天" 的日历日期
    pub timezone: Tz,
    /// 时段表覆盖文件
    pub time_slots_file: Option<String>,
    /// 请求超时时间 (毫秒)
    pub request_timeout_ms: u64,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// JWT 认证配置
    pub jwt: JwtConfig,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 未设置的项使用默认值；时区名无法解析或 JWT 密钥不合规时返回错误
    pub fn from_env() -> Result<Self> {
        let timezone = match std::env::var("TIMEZONE") {
            Ok(name) => name
                .parse::<Tz>()
                .map_err(|e| ServerError::Config(format!("Invalid TIMEZONE '{}': {}", name, e)))?,
            Err(_) => chrono_tz::Asia::Kolkata,
        };

        Ok(Self {
            work_dir: std::env::var("WORK_DIR")
                .unwrap_or_else(|_| "/var/lib/freshsip/orders".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            timezone,
            time_slots_file: std::env::var("TIME_SLOTS_FILE").ok(),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
            jwt: JwtConfig::from_env()?,
        })
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16, jwt: JwtConfig) -> Self {
        Self {
            work_dir: work_dir.into(),
            http_port,
            environment: "development".into(),
            timezone: chrono_tz::Asia::Kolkata,
            time_slots_file: None,
            request_timeout_ms: 30000,
            log_level: "info".into(),
            log_dir: None,
            jwt,
        }
    }

    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    pub fn database_path(&self) -> PathBuf {
        self.database_dir().join("orders.redb")
    }

    /// 创建工作目录结构
    pub fn ensure_work_dir_structure(&self) -> Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        Ok(())
    }

    /// 时段表: 覆盖文件优先，否则内置默认表
    pub fn load_time_slots(&self) -> Result<TimeSlotTable> {
        let Some(path) = &self.time_slots_file else {
            return Ok(TimeSlotTable::default());
        };

        let raw = std::fs::read_to_string(path)?;
        let table: TimeSlotTable = serde_json::from_str(&raw)
            .map_err(|e| ServerError::Config(format!("Invalid time slot file {}: {}", path, e)))?;
        if table.is_empty() {
            return Err(ServerError::Config(format!(
                "Time slot file {} has no slots",
                path
            )));
        }
        tracing::info!(path = %path, slots = table.slots().len(), "Loaded time slot table");
        Ok(table)
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}
