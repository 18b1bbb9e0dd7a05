use anyhow::Result;
use date_access::{config::app::AppConfig, date::Date, logging};
use tracing::{debug, info};

fn main() -> Result<()> {
    let cfg = AppConfig::from_env()?;
    logging::init(&cfg.log)?;
    debug!(
        app_env = %cfg.app_env,
        production = cfg.is_production(),
        level = %cfg.log.level,
        "configuration loaded"
    );

    let mut date = Date::default();
    date.set_day(29);
    date.set_month(8);
    date.set_year(1981);

    assert_eq!(date.day(), 29);
    assert_eq!(date.month(), 8);
    assert_eq!(date.year(), 1981);

    info!(%date, "date populated");
    println!("{date}");
    Ok(())
}
