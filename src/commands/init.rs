use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn run_init() -> Result<()> {
    let toml_path = Path::new("healthid.toml");
    if toml_path.exists() {
        println!("\x1b[31m\x1b[1m✗\x1b[0m healthid.toml already exists in this directory. Aborting.");
        return Ok(());
    }

    println!("\x1b[36m\x1b[1mInitializing HealthID project...\x1b[0m");

    let healthid_toml = r#"[app]
# Initial language for the settings selector: english, portuguese, spanish
language = "english"

[login]
# Display names substituted when the login form name is empty
default_patient_name = "João Silva"
default_doctor_name = "Dr. Maria Santos"

# Avatar reference attached to resolved identities
avatar_ref = "/api/placeholder/100/100"

# Simulated hardware round trip for biometric login
biometric_delay_ms = 2000
"#;
    fs::write(toml_path, healthid_toml)?;
    println!("\x1b[32m\x1b[1m✓\x1b[0m Created healthid.toml");

    println!("\nNext steps:");
    println!("  healthid repl      start the interactive navigator");
    println!("  healthid open /    render the landing page");
    println!("  healthid routes    print the route table");

    Ok(())
}
