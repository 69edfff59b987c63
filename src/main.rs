use anyhow::Result;
use deepfri_batch::{logger, App, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 初始化日志
    logger::init();

    // 加载配置
    let config = Config::from_env();

    // 初始化并运行应用
    let _outcome = App::initialize(config).await?.run().await;

    Ok(())
}
