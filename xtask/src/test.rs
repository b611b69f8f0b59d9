use anyhow::{Context, Result};
use colored::Colorize;
use std::process::Command;
use std::time::Instant;

struct Suite {
    label: &'static str,
    args: &'static [&'static str],
}

const UNIT: Suite = Suite {
    label: "unit tests",
    args: &["test", "--lib", "--workspace"],
};

const INTEGRATION: Suite = Suite {
    label: "integration tests",
    args: &["test", "--tests", "-p", "smartdim", "-p", "panel"],
};

const DOC: Suite = Suite {
    label: "doc tests",
    args: &["test", "--doc", "--workspace"],
};

const BENCHES: Suite = Suite {
    label: "bench build",
    args: &["bench", "-p", "smartdim", "--no-run"],
};

pub fn run(unit_only: bool, integration_only: bool) -> Result<()> {
    println!();
    println!("{}", "🧪 Running tests...".cyan().bold());
    println!();

    let total_start = Instant::now();

    if !integration_only {
        run_suite(&UNIT)?;
    }
    if !unit_only {
        run_suite(&INTEGRATION)?;
    }
    if !unit_only && !integration_only {
        // Doc tests and bench builds warn only
        if let Err(e) = run_suite(&DOC).and_then(|()| run_suite(&BENCHES)) {
            eprintln!("{}", format!("  ⚠ {e}").yellow().bold());
            println!();
        }
    }

    println!(
        "{}",
        format!(
            "✓ All tests completed in {:.2}s",
            total_start.elapsed().as_secs_f64()
        )
        .green()
        .bold()
    );
    println!();

    Ok(())
}

fn run_suite(suite: &Suite) -> Result<()> {
    println!("{}", format!("  Running {}...", suite.label).cyan());
    let start = Instant::now();

    let output = Command::new("cargo")
        .args(suite.args)
        .output()
        .with_context(|| format!("Failed to run {}", suite.label))?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    if !output.status.success() {
        eprintln!("{}", format!("  ✗ {} failed", suite.label).red().bold());
        eprintln!();
        for line in stdout.lines() {
            eprintln!("  {line}");
        }
        anyhow::bail!("{} failed", suite.label);
    }

    println!(
        "{}",
        format!(
            "  ✓ {} passed {} in {:.2}s",
            suite.label,
            extract_test_summary(&stdout),
            start.elapsed().as_secs_f64()
        )
        .green()
    );
    println!();
    Ok(())
}

/// Sum the `test result:` lines of a multi-crate run.
fn extract_test_summary(output: &str) -> String {
    let mut passed = 0u32;
    let mut failed = 0u32;
    let mut found = false;
    for line in output.lines() {
        let Some(summary) = line.split("test result:").nth(1) else {
            continue;
        };
        found = true;
        for part in summary.split(';') {
            let mut words = part.split_whitespace().rev();
            let (Some(kind), Some(count)) = (words.next(), words.next()) else {
                continue;
            };
            let Ok(count) = count.parse::<u32>() else {
                continue;
            };
            match kind {
                "passed" => passed = passed.saturating_add(count),
                "failed" => failed = failed.saturating_add(count),
                _ => {}
            }
        }
    }
    if found {
        format!("({passed} passed, {failed} failed)")
    } else {
        "(summary not available)".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_sums_crates() {
        let out = "test result: ok. 5 passed; 0 failed; 0 ignored\n\
                   noise\n\
                   test result: ok. 7 passed; 1 failed; 2 ignored\n";
        assert_eq!(extract_test_summary(out), "(12 passed, 1 failed)");
        assert_eq!(extract_test_summary("nothing"), "(summary not available)");
    }
}
