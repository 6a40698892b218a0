use colored::Colorize;

/// Print the one-line run summary:
/// `Total: <n> Passed: <n> Failed: <n> Skipped: <n>`.
///
/// Colors (underline/green/red/cyan) are dropped automatically when stdout
/// is not a terminal or `NO_COLOR` is set.
pub fn print_run_summary(passes: usize, failures: usize, skipped: usize) {
    let total = passes + failures + skipped;
    println!(
        "Total: {} Passed: {} Failed: {} Skipped: {}",
        total.to_string().underline(),
        passes.to_string().green(),
        failures.to_string().red(),
        skipped.to_string().cyan()
    );
}
