use std::sync::Arc;

use crate::auth::JwtService;
use crate::core::{Config, Result};
use crate::orders::{OrderStorage, OrdersManager};

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc / Clone 浅拷贝，每个请求通过 axum `State` 拿到同一份存储
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | orders | OrdersManager | 订单生命周期 + redb 存储 |
/// | jwt_service | Arc<JwtService> | JWT 校验 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    pub orders: OrdersManager,
    /// JWT 认证服务 (Arc 共享所有权)
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`ServerState::initialize`] 代替；测试用它注入内存存储
    pub fn new(config: Config, orders: OrdersManager, jwt_service: Arc<JwtService>) -> Self {
        Self {
            config,
            orders,
            jwt_service,
        }
    }

    /// 初始化服务器状态
    ///
    /// 1. 创建工作目录结构
    /// 2. 打开 redb 数据库 (`<work_dir>/database/orders.redb`)
    /// 3. 加载时段表
    /// 4. 构建 JWT 服务
    pub fn initialize(config: &Config) -> Result<Self> {
        config.ensure_work_dir_structure()?;

        let db_path = config.database_path();
        let storage = OrderStorage::open(&db_path)?;
        tracing::info!(path = %db_path.display(), "Order storage opened");

        let slots = config.load_time_slots()?;
        let orders = OrdersManager::new(storage, slots, config.timezone);
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        Ok(Self::new(config.clone(), orders, jwt_service))
    }

    /// 获取 JWT 服务
    pub fn jwt_service(&self) -> &JwtService {
        &self.jwt_service
    }

    /// 获取订单管理器
    pub fn orders(&self) -> &OrdersManager {
        &self.orders
    }
}
