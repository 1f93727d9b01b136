use anyhow::Result;
use std::path::Path;

use healthid::app::App;
use healthid::app::config::HealthIdConfig;

pub fn run_check(config_path: &Path) -> Result<()> {
    println!("\x1b[36m\x1b[1mChecking HealthID configuration...\x1b[0m");

    // 1. Load healthid.toml
    let config = match HealthIdConfig::from_file(config_path) {
        Ok(c) => {
            println!("\x1b[32m\x1b[1m✓\x1b[0m Configuration file is valid TOML.");
            c
        }
        Err(e) => {
            println!("\x1b[31m\x1b[1m✗\x1b[0m Configuration error: {}", e);
            return Ok(());
        }
    };

    // 2. Build the app and cross-check the route table against the registry
    let app = match App::builder(config).build() {
        Ok(a) => a,
        Err(e) => {
            println!("\x1b[31m\x1b[1m✗\x1b[0m Failed to build app: {}", e);
            return Ok(());
        }
    };

    let mut missing = 0;
    for route in app.router().routes() {
        let resolved = app.router().resolve(route.pattern.replace("/{patientId?}", "").as_str());
        if resolved.view != route.view {
            println!(
                "\x1b[33m\x1b[1m! Warning:\x1b[0m route '{}' shadowed by an earlier pattern",
                route.pattern
            );
        }
        if app.views().get(route.view).is_none() {
            println!(
                "\x1b[31m\x1b[1m✗\x1b[0m No view registered for route '{}' ({}).",
                route.pattern, route.view
            );
            missing += 1;
        }
    }
    if missing == 0 {
        println!("\x1b[32m\x1b[1m✓\x1b[0m Every route has a registered view.");
        println!("\n\x1b[32m\x1b[1mAll checks passed.\x1b[0m");
    }

    Ok(())
}
