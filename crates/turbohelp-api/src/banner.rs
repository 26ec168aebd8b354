//! Startup banner printed once the listener is bound.

use std::path::Path;

use console::style;

/// Print where the relay is listening and what it forwards to.
pub fn print_startup_banner(addr: &str, static_dir: &Path, model: &str, provider: &str) {
    println!();
    println!(
        "  {} {}",
        style("⚡").bold(),
        style("TurboHelp Chatbot Server Running!").cyan().bold()
    );
    println!();
    println!(
        "  {}  {}",
        style("Local:").bold(),
        style(format!("http://{addr}")).cyan()
    );
    println!(
        "  {}  {}",
        style("Static files:").bold(),
        style(static_dir.display()).dim()
    );
    println!(
        "  {}  {}",
        style("AI Model:").bold(),
        style(format!("{model} via {provider}")).dim()
    );
    println!();
    println!("  {}", style("Press Ctrl+C to stop").dim());
    println!();
}
