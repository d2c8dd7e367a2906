//! Prompt theme and banner.

use console::{style, Style};
use dialoguer::theme::ColorfulTheme;

/// Returns a `ColorfulTheme` for the export prompt.
///
/// - Prompt prefix: cyan `?`
/// - Success prefix: green `✓`
/// - Error prefix: red `✗`
pub fn imgres_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("?".to_string()).for_stderr().cyan(),
        prompt_style: Style::new().for_stderr().bold(),
        prompt_suffix: style("›".to_string()).for_stderr().bright().black(),
        success_prefix: style("✓".to_string()).for_stderr().green(),
        success_suffix: style("·".to_string()).for_stderr().bright().black(),
        error_prefix: style("✗".to_string()).for_stderr().red(),
        error_style: Style::new().for_stderr().red(),
        values_style: Style::new().for_stderr().green(),
        ..ColorfulTheme::default()
    }
}

/// Program name and rule printed before every scan.
pub fn print_banner() {
    let bold = Style::new().for_stdout().bold();
    println!("{}", bold.apply_to("Image Resolution Scanner"));
    println!("{}", "=".repeat(50));
}
