use stateplayer::{
    config::AppConfig,
    ui::app::App,
    util::{hook::set_panic_hook, log::initialize_logging},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::Result<()> {
    let config = setup()?;

    let mut app = App::new(&config)?;
    app.run().await
}

fn setup() -> color_eyre::Result<AppConfig> {
    color_eyre::install()?;
    dotenv::dotenv().ok();
    set_panic_hook();
    initialize_logging()?;

    let config = AppConfig::from_env()?;
    tracing::info!(tracks = config.tracks.len(), tick_ms = config.tick_rate_ms, "starting");
    Ok(config)
}
