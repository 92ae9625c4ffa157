use chrono::Local;
use colored::*;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub struct Logger;

impl Logger {
    fn get_logs_dir() -> PathBuf {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join("logs")
    }

    fn get_log_file_name() -> PathBuf {
        let date = Local::now().format("%Y-%m-%d").to_string();
        Self::get_logs_dir().join(format!("bot-{}.log", date))
    }

    fn ensure_logs_dir() {
        let logs_dir = Self::get_logs_dir();
        if !logs_dir.exists() {
            let _ = fs::create_dir_all(&logs_dir);
        }
    }

    fn write_to_file(message: &str) {
        if let Err(_) = (|| -> std::io::Result<()> {
            Self::ensure_logs_dir();
            let log_file = Self::get_log_file_name();
            let timestamp = Local::now().to_rfc3339();
            let log_entry = format!("[{}] {}\n", timestamp, message);

            let mut file = fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_file)?;
            file.write_all(log_entry.as_bytes())?;
            Ok(())
        })() {
            // Silently fail to avoid infinite loops
        }
    }

    pub fn format_address(address: &str) -> String {
        if address.len() >= 10 {
            format!("{}...{}", &address[..6], &address[address.len() - 4..])
        } else {
            address.to_string()
        }
    }

    fn mask_address(address: &str) -> String {
        if address.len() >= 10 {
            format!("{}****{}", &address[..6], &address[address.len() - 4..])
        } else {
            address.to_string()
        }
    }

    pub fn header(title: &str) {
        println!("\n{}", "━".repeat(70).cyan());
        println!("{}", format!("  {}", title).cyan().bold());
        println!("{}\n", "━".repeat(70).cyan());
        Self::write_to_file(&format!("HEADER: {}", title));
    }

    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
        Self::write_to_file(&format!("INFO: {}", message));
    }

    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
        Self::write_to_file(&format!("SUCCESS: {}", message));
    }

    pub fn warning(message: &str) {
        println!("{} {}", "⚠".yellow(), message);
        Self::write_to_file(&format!("WARNING: {}", message));
    }

    pub fn error(message: &str) {
        println!("{} {}", "✗".red(), message);
        Self::write_to_file(&format!("ERROR: {}", message));
    }

    pub fn separator() {
        println!("{}", "─".repeat(70).bright_black());
    }

    /// Single-line countdown, redrawn in place once per second. Not mirrored
    /// to the log file.
    pub fn countdown(seconds_left: u64) {
        let minutes = seconds_left / 60;
        let seconds = seconds_left % 60;
        print!(
            "\r{}",
            format!("⏳ Next claim cycle in: {}m {}s ", minutes, seconds).yellow()
        );
        let _ = std::io::stdout().flush();
    }

    pub fn clear_line() {
        print!("\r{}\r", " ".repeat(100));
        let _ = std::io::stdout().flush();
    }

    pub fn startup(wallet: &str, contract: &str, riz_contract: &str, interval_secs: u64) {
        println!("\n{}", "━".repeat(70).cyan());
        println!("{}", "  ⚡ RIVALZ FRAGMENT CLAIM BOT".cyan().bold());
        println!("{}", "━".repeat(70).cyan());
        println!(
            "{}",
            format!("   Wallet:         {}", Self::mask_address(wallet)).bright_black()
        );
        println!(
            "{}",
            format!("   Claim contract: {}", Self::format_address(contract)).bright_black()
        );
        println!(
            "{}",
            format!("   Riz contract:   {}", Self::format_address(riz_contract)).bright_black()
        );
        println!(
            "{}",
            format!("   Cycle interval: {}s\n", interval_secs).bright_black()
        );
        Self::write_to_file(&format!(
            "STARTUP: wallet {} contract {} riz {} interval {}s",
            Self::mask_address(wallet),
            Self::format_address(contract),
            Self::format_address(riz_contract),
            interval_secs
        ));
    }
}
