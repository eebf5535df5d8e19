use anyhow::Context;
use salesdash::*;
use std::env;
use std::path::PathBuf;

fn usage(program: &str) -> ! {
    eprintln!("Usage: {program} [config.toml]");
    std::process::exit(1);
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("salesdash", String::as_str);

    let config_path = match args.get(1..).unwrap_or_default() {
        [] => None,
        [flag] if flag == "-h" || flag == "--help" => usage(program),
        [path] => Some(PathBuf::from(path)),
        _ => usage(program),
    };

    logging::init();

    let config = Config::load(config_path.as_deref())
        .with_context(|| format!("loading config {:?}", config_path))?;
    let summary = run(&config).with_context(|| {
        format!(
            "sales analysis over {} failed",
            config.data_dir.display()
        )
    })?;

    tracing::info!(
        revenue = summary.revenue.total_revenue,
        sales_rows = summary.sales_rows,
        dashboard = %summary.dashboard.display(),
        "done"
    );
    Ok(())
}
