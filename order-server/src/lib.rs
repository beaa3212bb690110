//! FreshSip Order Server - 订单状态 / 配送时段状态机
//!
//! # 架构概述
//!
//! - **订单** (`orders`): QuickSip / FreshPlan 生命周期，redb 文档存储
//! - **认证** (`auth`): 外部签发的 JWT 校验 + 角色中间件
//! - **HTTP API** (`api`): 厨房、配送、订单接口
//!
//! # 模块结构
//!
//! ```text
//! order-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── auth/          # JWT 认证、角色
//! ├── api/           # HTTP 路由和处理器
//! ├── orders/        # 动作、管理器、存储、时段匹配、厨房队列
//! └── utils/         # 日志、日期
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod orders;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use orders::{OrderStorage, OrdersManager};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// 设置运行环境: 加载 .env 并初始化日志
///
/// 日志级别与目录直接读环境变量，因为此时 [`Config`] 尚未加载
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    // .env 可选
    let _ = dotenv::dotenv();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    if let Some(dir) = &log_dir {
        std::fs::create_dir_all(dir)?;
    }
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ______                __    _____ _
   / ____/_______  _____/ /_  / ___/(_)___
  / /_  / ___/ _ \/ ___/ __ \ \__ \/ / __ \
 / __/ / /  /  __(__  ) / / /___/ / / /_/ /
/_/   /_/   \___/____/_/ /_//____/_/ .___/
                                  /_/
              order server
    "#
    );
}
