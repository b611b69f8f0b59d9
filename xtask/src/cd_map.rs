//! `cd-map`: resolve a board's backlight to candela table.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use panel::CandelaLuxMap;

pub fn run(table: Option<&Path>, blob: Option<&Path>, level: Option<u8>) -> Result<()> {
    let map = match (table, blob) {
        (Some(path), None) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            CandelaLuxMap::from_quadruples(&parse_rows(&text)?)?
        }
        (None, Some(path)) => {
            let bytes =
                fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
            CandelaLuxMap::from_be_bytes(&bytes)?
        }
        _ => bail!("Pass exactly one of --table or --blob"),
    };

    if let Some(bl) = level {
        let step = map.step(bl);
        println!("bl {bl:3} -> {:3} cd (cmd idx {})", step.candela, step.cmd_idx);
        return Ok(());
    }

    println!();
    println!("{}", format!("💡 {} brightness steps", map.steps().len()).cyan().bold());
    println!();
    for (bl, step) in ranges(&map) {
        println!("  bl {bl:>9}  {:3} cd  idx {}", step.candela, step.cmd_idx);
    }
    println!();
    Ok(())
}

/// `idx from till candela` per line; `#` starts a comment.
fn parse_rows(text: &str) -> Result<Vec<[u32; 4]>> {
    let mut rows = Vec::new();
    for (n, line) in text.lines().enumerate() {
        let line = line.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<u32> = line
            .split_whitespace()
            .map(|t| {
                t.strip_prefix("0x")
                    .map_or_else(|| t.parse(), |h| u32::from_str_radix(h, 16))
            })
            .collect::<Result<_, _>>()
            .with_context(|| format!("Line {}: invalid number", n.saturating_add(1)))?;
        let row: [u32; 4] = fields
            .try_into()
            .map_err(|_| anyhow::anyhow!("Line {}: expected 4 fields", n.saturating_add(1)))?;
        rows.push(row);
    }
    Ok(rows)
}

/// Runs of consecutive backlight levels sharing one step, as `from..till`.
fn ranges(map: &CandelaLuxMap) -> Vec<(String, panel::LuxStep)> {
    let mut out: Vec<(u8, u8, panel::LuxStep)> = Vec::new();
    for bl in 0..=u8::MAX {
        let step = map.step(bl);
        match out.last_mut() {
            Some((_, till, last)) if *last == step => *till = bl,
            _ => out.push((bl, bl, step)),
        }
    }
    out.into_iter()
        .map(|(from, till, step)| (format!("{from}..={till}"), step))
        .collect()
}

#[cfg(test)]
#[allow(clippy::indexing_slicing, clippy::arithmetic_side_effects)]
mod tests {
    use super::*;

    #[test]
    fn rows_parse() {
        let rows = parse_rows("# idx from till cd\n0 0 9 5\n1 10 0xff 350 # top\n").unwrap();
        assert_eq!(rows, vec![[0, 0, 9, 5], [1, 10, 255, 350]]);
        assert!(parse_rows("0 0 9").is_err());
        assert!(parse_rows("0 0 x 5").is_err());
    }

    #[test]
    fn ranges_collapse_runs() {
        let map = CandelaLuxMap::from_quadruples(&[[0, 0, 99, 10], [1, 100, 255, 350]]).unwrap();
        let r = ranges(&map);
        assert_eq!(r.len(), 2);
        assert_eq!(r[0].0, "0..=99");
        assert_eq!(r[1].0, "100..=255");
        assert_eq!(r[1].1.candela, 350);
    }

    #[test]
    fn blob_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cd.bin");
        let bytes: Vec<u8> = [0u32, 0, 255, 350].iter().flat_map(|v| v.to_be_bytes()).collect();
        fs::write(&path, bytes).unwrap();
        run(None, Some(&path), Some(128)).unwrap();
        assert!(run(None, None, None).is_err());
    }
}
