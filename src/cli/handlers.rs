// src/cli/handlers.rs
use anyhow::Result;
use console::style;

use crate::generators::PasswordEngine;

// Handlers for CLI commands. Business logic lives in the engine; these only
// render its output.

pub fn handle_generate(
    engine: &PasswordEngine,
    length: usize,
    complexity: &str,
    json: bool,
) -> Result<()> {
    let output = engine.generate_password(length, complexity)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Password: {}", style(&output.password).green().bold());
        println!("{}", style(&output.strength_description).cyan());
    }

    Ok(())
}

pub fn handle_generate_list(
    engine: &PasswordEngine,
    count: usize,
    length: usize,
    complexity: &str,
    json: bool,
) -> Result<()> {
    let output = engine.generate_password_list(count, length, complexity)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("🔐 Generated {} passwords:", output.passwords.len());
        for (i, password) in output.passwords.iter().enumerate() {
            println!("{:>5}. {}", i + 1, style(password).green());
        }
        println!("{}", style(&output.strength_description).cyan());
    }

    Ok(())
}
