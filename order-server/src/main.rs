use order_server::{Config, Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 设置环境 (dotenv, 日志)
    setup_environment()?;

    print_banner();

    tracing::info!("🥤 FreshSip order server starting...");

    // 2. 加载配置
    let config = Config::from_env()?;
    tracing::info!(
        environment = %config.environment,
        timezone = %config.timezone,
        work_dir = %config.work_dir,
        "Configuration loaded"
    );

    // 3. 初始化服务器状态 (redb, 时段表, JWT)
    let state = ServerState::initialize(&config)?;

    // 4. 启动 HTTP 服务器
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
