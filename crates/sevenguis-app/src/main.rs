//! Main application entry point.

use sevenguis_app::{print_usage, App, AppConfig, AppResult, Args, Script};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> AppResult<()> {
    let args = Args::parse(std::env::args().skip(1))?;
    if args.help {
        print_usage();
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    let Some(script_path) = &args.script else {
        print_usage();
        return Ok(());
    };
    let script = Script::load(script_path)?;
    log::info!("Loaded {} events from {:?}", script.len(), script_path);

    let app = App::new(config);
    let snapshot = app.run(&script);
    println!("{}", snapshot.to_json(app.config().pretty)?);
    Ok(())
}
