use anyhow::{Context, Result};
use colored::Colorize;
use std::process::Command;
use std::time::Instant;

/// Embedded target the engine and panel glue must build for.
const TARGET: &str = "thumbv7em-none-eabihf";

struct Step {
    label: &'static str,
    args: &'static [&'static str],
    /// Failure aborts the run instead of warning.
    required: bool,
}

const STEPS: &[Step] = &[
    Step {
        label: "host workspace",
        args: &["check", "--workspace", "--all-targets"],
        required: true,
    },
    Step {
        label: "smartdim (no_std, defmt)",
        args: &["check", "-p", "smartdim", "--target", TARGET, "--features", "defmt"],
        required: true,
    },
    Step {
        label: "panel (no_std, defmt)",
        args: &["check", "-p", "panel", "--target", TARGET, "--features", "defmt"],
        required: true,
    },
    Step {
        label: "clippy",
        args: &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
        required: false,
    },
    Step {
        label: "formatting",
        args: &["fmt", "--all", "--check"],
        required: false,
    },
];

pub fn run() -> Result<()> {
    println!();
    println!("{}", "🔍 Checking builds...".cyan().bold());
    println!();

    let total_start = Instant::now();

    for step in STEPS {
        println!("{}", format!("  Checking {}...", step.label).cyan());
        let start = Instant::now();

        let output = Command::new("cargo")
            .args(step.args)
            .output()
            .with_context(|| format!("Failed to run cargo {}", step.args.join(" ")))?;

        if output.status.success() {
            println!(
                "{}",
                format!(
                    "  ✓ {} passed in {:.2}s",
                    step.label,
                    start.elapsed().as_secs_f64()
                )
                .green()
            );
        } else if step.required {
            eprintln!("{}", format!("  ✗ {} failed", step.label).red().bold());
            eprintln!();
            eprintln!("{}", String::from_utf8_lossy(&output.stderr));
            anyhow::bail!("{} failed", step.label);
        } else {
            eprintln!("{}", format!("  ⚠ {} reported issues", step.label).yellow().bold());
            eprintln!();
            eprintln!("{}", String::from_utf8_lossy(&output.stderr));
        }
        println!();
    }

    println!(
        "{}",
        format!(
            "✓ All checks completed in {:.2}s",
            total_start.elapsed().as_secs_f64()
        )
        .green()
        .bold()
    );
    println!();

    Ok(())
}
