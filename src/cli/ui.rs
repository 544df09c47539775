use colored::*;
use console::Term;
use indicatif::{ ProgressBar, ProgressStyle };
use std::time::Duration;
use textwrap::wrap;

use fraudlens::{ AnalysisResult, Verdict };

const RULE_WIDTH: usize = 60;

fn term_width() -> usize {
    let width = Term::stdout().size().1 as usize;
    if width == 0 { 80 } else { width }
}

/// Print a section header
pub fn print_header(title: &str) {
    let title = format!(" {} ", title);
    println!("\n{}\n", title.bold().white().on_blue());
}

/// Print text with proper wrapping
pub fn print_text(text: &str) {
    let width = term_width().saturating_sub(4).max(20);
    for line in text.lines() {
        if line.trim().is_empty() {
            println!();
            continue;
        }
        for wrapped_line in wrap(line, width) {
            println!("{}", wrapped_line);
        }
    }
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "ERROR:".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "WARNING:".yellow().bold(), message);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "SUCCESS:".green().bold(), message);
}

/// Print information
pub fn print_info(message: &str) {
    println!("{} {}", "INFO:".blue().bold(), message);
}

/// Print a formatted result
pub fn print_result(label: &str, value: &str) {
    println!("{}: {}", label.bold(), value);
}

/// Create a new progress bar
pub fn create_progress_bar(length: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(length);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos:>3}/{len:3} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("##-");
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb
}

/// Display a spinner while waiting for an operation to complete
pub fn spinner_with_message(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
        .template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Print the verdict with color
pub fn print_verdict(verdict: Verdict) {
    let banner = match verdict {
        Verdict::AiGenerated => "🚨 AI GENERATED".red().bold(),
        Verdict::Authentic => "✅ AUTHENTIC".green().bold(),
        Verdict::Uncertain => "⚠️  UNCERTAIN".yellow().bold(),
    };
    println!("\n{} {}", "VERDICT:".bold(), banner);
}

fn print_list(title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("\n{}", title.bold());
    for item in items {
        println!("  • {}", item);
    }
}

/// Print a formatted analysis report
pub fn print_report(result: &AnalysisResult) {
    let rule = "=".repeat(RULE_WIDTH);

    println!("\n{}", rule);
    println!("{}", "VIDEO FRAUD DETECTION REPORT".bold());
    println!("{}", rule);

    print_verdict(result.verdict());
    print_result("CONFIDENCE", &format!("{:.1}%", result.confidence() * 100.0));

    println!("\n{}", "REASONING:".bold());
    print_text(result.reasoning());

    print_list("INDICATORS FOUND:", result.indicators());
    print_list("RECOMMENDATIONS:", result.recommendations());

    println!("\n{}", rule);
}
