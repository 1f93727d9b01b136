use anyhow::{Context, Result};
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

use healthid::app::config::{HealthIdConfig, Language};
use healthid::app::event::AppEvent;
use healthid::app::session::Role;
use healthid::app::{App, NavOutcome};
use healthid::auth::LoginRequest;
use healthid::forms::Attachment;

mod commands;

/// HealthID: session, routing, and view rendering for the healthcare-access prototype
#[derive(Parser, Debug)]
#[command(name = "healthid", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    /// Path to log file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Resolve a path and render its view once
    Open {
        /// The path to navigate to (e.g. /patient-dashboard)
        path: String,

        /// Path to healthid.toml config file
        #[arg(long, default_value = "healthid.toml")]
        config: PathBuf,

        /// Log in as this role before navigating
        #[arg(long = "as", value_enum)]
        role: Option<CliRole>,

        /// Name for the pre-navigation login
        #[arg(long)]
        name: Option<String>,

        /// Role identifier (Health ID or Registration ID) for the login
        #[arg(long)]
        id: Option<String>,

        /// Output the document and events as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start the interactive navigator
    Repl {
        /// Path to healthid.toml config file
        #[arg(long, default_value = "healthid.toml")]
        config: PathBuf,
    },

    /// Print the route table with access policies
    Routes {
        /// Path to healthid.toml config file
        #[arg(long, default_value = "healthid.toml")]
        config: PathBuf,
    },

    /// Initialize a new HealthID project in the current directory
    Init,

    /// Validate configuration and the route/view tables
    Check {
        /// Path to healthid.toml config file
        #[arg(long, default_value = "healthid.toml")]
        config: PathBuf,
    },
}

#[derive(clap::ValueEnum, Debug, Clone, Copy)]
enum CliRole {
    Patient,
    Doctor,
}

impl From<CliRole> for Role {
    fn from(role: CliRole) -> Self {
        match role {
            CliRole::Patient => Role::Patient,
            CliRole::Doctor => Role::Doctor,
        }
    }
}

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing(log_level: &str, log_file: Option<PathBuf>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let stdout_layer = fmt::layer().with_writer(std::io::stderr).with_ansi(true);

    let file_layer = log_file.map(|path| {
        let parent = path.parent().unwrap_or_else(|| std::path::Path::new("."));
        let filename = path.file_name().unwrap_or_default();
        let file_appender = tracing_appender::rolling::never(parent, filename);
        fmt::layer()
            .with_writer(file_appender)
            .with_ansi(false)
            .json()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    Ok(())
}

fn load_config(path: &PathBuf) -> Result<HealthIdConfig> {
    if path.exists() {
        HealthIdConfig::from_file(path).with_context(|| "Failed to load config")
    } else {
        // Missing config falls back to defaults so the prototype runs anywhere.
        tracing::debug!(path = %path.display(), "Config file not found, using defaults");
        Ok(HealthIdConfig::default())
    }
}

fn print_outcome(outcome: &NavOutcome, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&outcome.document)?);
    } else {
        if let Some(from) = &outcome.redirected_from {
            println!("\x1b[33m(redirected from {})\x1b[0m", from);
        }
        print!("{}", outcome.document.render_text());
    }
    Ok(())
}

fn print_routes(app: &App) {
    println!("\x1b[36m\x1b[1m── Route Table ──\x1b[0m");
    for route in app.router().routes() {
        println!(
            "  {:36} -> {:20} [{}]",
            route.pattern,
            route.view.to_string(),
            route.policy
        );
    }
    println!("  {:36} -> {:20} [{}]", "*", "not_found", "public");
}

fn drain_toasts(rx: &mut tokio::sync::broadcast::Receiver<AppEvent>) {
    while let Ok(event) = rx.try_recv() {
        if let AppEvent::Toast(toast) = event {
            println!("\x1b[36m\x1b[1m🔔 {}\x1b[0m {}", toast.title, toast.description);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.log_file)?;

    match cli.command {
        Commands::Open {
            path,
            config,
            role,
            name,
            id,
            json,
        } => {
            let config = load_config(&config)?;
            let mut app = App::builder(config).json_mode(json).build()?;

            if let Some(role) = role {
                let mut request = LoginRequest::new(role.into());
                if let Some(name) = name {
                    request = request.with_name(name);
                }
                if let Some(id) = id {
                    request = request.with_id(id);
                }
                app.login(&request)?;
            }

            let outcome = app.goto(&path)?;
            print_outcome(&outcome, json)?;
            Ok(())
        }
        Commands::Repl { config } => {
            let config = load_config(&config)?;
            let mut app = App::builder(config).build()?;
            let mut events = app.subscribe();

            let mut rl = DefaultEditor::new()?;
            println!("HealthID navigator v{}", env!("CARGO_PKG_VERSION"));
            println!("Type a path (e.g. /login) to navigate, '/help' for commands, Ctrl+D to quit.");

            let outcome = app.goto("/")?;
            print_outcome(&outcome, false)?;

            loop {
                let readline = rl.readline("\x1b[36m\x1b[1mhealthid\x1b[0m\x1b[34m>\x1b[0m ");
                match readline {
                    Ok(line) => {
                        let line = line.trim();
                        if line.is_empty() {
                            continue;
                        }
                        if line == "exit" || line == "quit" {
                            break;
                        }
                        let _ = rl.add_history_entry(line);

                        if let Err(e) = handle_line(&mut app, line).await {
                            tracing::error!(error = %e, "Command failed");
                            println!("\x1b[31m\x1b[1m✗\x1b[0m {}", e);
                        }
                        drain_toasts(&mut events);
                    }
                    Err(ReadlineError::Interrupted) => continue,
                    Err(ReadlineError::Eof) => break,
                    Err(e) => return Err(e.into()),
                }
            }

            println!("Goodbye.");
            Ok(())
        }
        Commands::Routes { config } => {
            let config = load_config(&config)?;
            let app = App::builder(config).build()?;
            print_routes(&app);
            Ok(())
        }
        Commands::Init => commands::init::run_init(),
        Commands::Check { config } => commands::check::run_check(&config),
    }
}

/// Dispatch one REPL line: a slash command, or a bare path navigation.
async fn handle_line(app: &mut App, line: &str) -> Result<()> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    match parts[0] {
        "/help" => {
            println!("\n\x1b[36m\x1b[1m── Available Commands ──\x1b[0m");
            println!("  \x1b[1m<path>\x1b[0m                      navigate (e.g. /patient-dashboard)");
            println!("  \x1b[1m/login <role> [name] [id]\x1b[0m   sign in as patient or doctor");
            println!("  \x1b[1m/biometric <role>\x1b[0m           biometric sign in");
            println!("  \x1b[1m/logout\x1b[0m                     clear the session");
            println!("  \x1b[1m/whoami\x1b[0m                     show the current identity");
            println!("  \x1b[1m/routes\x1b[0m                     print the route table");
            println!("  \x1b[1m/set <field> <value>\x1b[0m        edit the consultation draft");
            println!("  \x1b[1m/attach <name> <media-type>\x1b[0m attach a file to the draft");
            println!("  \x1b[1m/save\x1b[0m                       submit the consultation");
            println!("  \x1b[1m/toggle <name>\x1b[0m              flip a settings switch");
            println!("  \x1b[1m/language <lang>\x1b[0m            change the language selector");
            println!("  \x1b[1m/export | /delete\x1b[0m           data-rights requests");
            println!();
            Ok(())
        }
        "/login" | "/biometric" => {
            let role = match parts.get(1) {
                Some(&"patient") => Role::Patient,
                Some(&"doctor") => Role::Doctor,
                // A bare "/login" is the login page, not the command.
                None if parts[0] == "/login" => {
                    let outcome = app.goto("/login")?;
                    return print_outcome(&outcome, false);
                }
                _ => anyhow::bail!("usage: {} <patient|doctor> [name] [id]", parts[0]),
            };
            let mut request = LoginRequest::new(role);
            if let Some(name) = parts.get(2) {
                request = request.with_name(*name);
            }
            if let Some(id) = parts.get(3) {
                request = request.with_id(*id);
            }
            let outcome = if parts[0] == "/biometric" {
                app.biometric_login(&request).await?
            } else {
                app.login(&request)?
            };
            print_outcome(&outcome, false)
        }
        "/logout" => {
            let outcome = app.logout()?;
            print_outcome(&outcome, false)
        }
        "/whoami" => {
            match app.session().get() {
                Some(identity) => {
                    println!("\n\x1b[36m\x1b[1m── Session ──\x1b[0m");
                    println!("  \x1b[1mName:\x1b[0m {}", identity.display_name);
                    println!("  \x1b[1mRole:\x1b[0m {}", identity.role);
                    if let Some(id) = identity.role_id() {
                        println!("  \x1b[1mID:\x1b[0m   {}", id);
                    }
                    println!();
                }
                None => println!("(not signed in)"),
            }
            Ok(())
        }
        "/routes" => {
            print_routes(app);
            Ok(())
        }
        "/set" => {
            let (field, value) = match (parts.get(1), parts.len() > 2) {
                (Some(field), true) => (*field, parts[2..].join(" ")),
                _ => anyhow::bail!("usage: /set <field> <value>"),
            };
            app.update_consultation(field, &value)?;
            println!("\x1b[32m\x1b[1m✓\x1b[0m {} = {}", field, value);
            Ok(())
        }
        "/attach" => {
            let (name, media_type) = match (parts.get(1), parts.get(2)) {
                (Some(name), Some(media_type)) => (*name, *media_type),
                _ => anyhow::bail!("usage: /attach <name> <media-type>"),
            };
            app.attach([Attachment::new(name, media_type)]);
            println!("\x1b[32m\x1b[1m✓\x1b[0m attached {}", name);
            Ok(())
        }
        "/save" => {
            let outcome = app.save_consultation()?;
            print_outcome(&outcome, false)
        }
        "/toggle" => {
            let name = parts.get(1).copied().unwrap_or_default();
            let value = app.toggle_setting(name)?;
            println!("\x1b[32m\x1b[1m✓\x1b[0m {} is now {}", name, if value { "on" } else { "off" });
            Ok(())
        }
        "/language" => {
            let language = match parts.get(1) {
                Some(&"english") => Language::English,
                Some(&"portuguese") => Language::Portuguese,
                Some(&"spanish") => Language::Spanish,
                _ => anyhow::bail!("usage: /language <english|portuguese|spanish>"),
            };
            app.set_language(language);
            println!("\x1b[32m\x1b[1m✓\x1b[0m language set to {}", language.label());
            Ok(())
        }
        "/export" => {
            app.request_data_export();
            Ok(())
        }
        "/delete" => {
            app.request_data_deletion();
            Ok(())
        }
        _ => {
            // Everything else is a path navigation.
            let outcome = app.goto(line)?;
            print_outcome(&outcome, false)
        }
    }
}
