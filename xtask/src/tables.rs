//! `gamma` and `aid-log`: run smart dimming on a captured MTP dump.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use smartdim::{PanelConfig, SmartDimConf, SmartDimming, GAMMA_SET_MAX};

pub fn gamma(config: &Path, mtp: &Path, candela: Option<u16>, hex: bool) -> Result<()> {
    let conf = load(config, mtp)?;
    let ctx = conf.context().context("smart dimming not initialised")?;

    println!();
    println!(
        "{}",
        format!("🔆 {} ({} levels)", ctx.calibration().profile().name, ctx.entries().len())
            .cyan()
            .bold()
    );
    println!();

    match candela {
        Some(cd) => {
            if ctx.lookup(cd).is_none() {
                println!(
                    "{}",
                    format!("  ⚠ {cd} cd is not a configured level, showing max table").yellow()
                );
            }
            let mut out = [0u8; GAMMA_SET_MAX];
            let len = conf.generate_gamma(cd, &mut out)?;
            println!("  lux : {cd:3}  {}", render(out.get(..len).unwrap_or(&[]), hex));
        }
        None => {
            for entry in ctx.entries() {
                println!("  lux : {:3}  {}", entry.lux, render(entry.gamma.as_slice(), hex));
            }
            println!(
                "  {}",
                format!("min : {}", render(ctx.min_lux_table().as_slice(), hex)).dimmed()
            );
        }
    }
    println!();
    Ok(())
}

pub fn aid_log(config: &Path, mtp: &Path) -> Result<()> {
    let conf = load(config, mtp)?;
    let ctx = conf.context().context("smart dimming not initialised")?;
    for line in ctx.aid_log() {
        println!("{line}");
    }
    Ok(())
}

/// Read config and dump, then build every table.
fn load(config: &Path, mtp: &Path) -> Result<SmartDimConf> {
    let text = fs::read_to_string(config)
        .with_context(|| format!("Failed to read {}", config.display()))?;
    let panel: PanelConfig = serde_json::from_str(&text)
        .with_context(|| format!("Invalid panel config {}", config.display()))?;
    let dump = fs::read_to_string(mtp)
        .with_context(|| format!("Failed to read {}", mtp.display()))?;
    let bytes = parse_hex_dump(&dump)?;

    let mut conf = SmartDimConf::from_config(&panel);
    let buf = conf.mtp_buffer_mut();
    if bytes.len() != buf.len() {
        bail!(
            "MTP dump has {} bytes, {} expects {}",
            bytes.len(),
            panel.model.family().name(),
            buf.len()
        );
    }
    buf.copy_from_slice(&bytes);
    conf.init().context("Smart dimming init failed")?;
    Ok(conf)
}

/// Parse `0x01 02, 0xFF …`: hex bytes with optional `0x`, separated by
/// whitespace or commas. `#` starts a comment.
fn parse_hex_dump(text: &str) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    for line in text.lines() {
        let line = line.split('#').next().unwrap_or_default();
        for token in line.split(|c: char| c.is_whitespace() || c == ',') {
            if token.is_empty() {
                continue;
            }
            let digits = token
                .strip_prefix("0x")
                .or_else(|| token.strip_prefix("0X"))
                .unwrap_or(token);
            let byte = u8::from_str_radix(digits, 16)
                .with_context(|| format!("Invalid hex byte '{token}'"))?;
            bytes.push(byte);
        }
    }
    Ok(bytes)
}

fn render(bytes: &[u8], hex: bool) -> String {
    bytes
        .iter()
        .map(|b| if hex { format!("{b:02x}") } else { format!("{b:3}") })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[allow(clippy::indexing_slicing, clippy::arithmetic_side_effects)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn hex_dump_formats() {
        assert_eq!(
            parse_hex_dump("0x01 02,FF\n# comment\n0a # trailing").unwrap(),
            vec![0x01, 0x02, 0xFF, 0x0A]
        );
        assert!(parse_hex_dump("zz").is_err());
        assert!(parse_hex_dump("100").is_err());
    }

    #[test]
    fn render_modes() {
        assert_eq!(render(&[0, 255], false), "  0 255");
        assert_eq!(render(&[0, 255], true), "00 ff");
    }

    #[test]
    fn load_builds_tables() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("panel.json");
        let mtp = dir.path().join("mtp.txt");
        fs::write(
            &config,
            r#"{ "model": "S6e88a0", "ldi_revision": 7, "lux_tab": [10, 100, 350] }"#,
        )
        .unwrap();
        let mut f = fs::File::create(&mtp).unwrap();
        for _ in 0..33 {
            write!(f, "00 ").unwrap();
        }
        drop(f);

        let conf = load(&config, &mtp).unwrap();
        assert!(conf.is_initialized());
        let ctx = conf.context().unwrap();
        assert_eq!(ctx.entries().len(), 3);
        assert_eq!(ctx.calibration().profile().name, smartdim::tables::s6e88a::REV_G.name);
        assert_eq!(ctx.aid_log().count(), 11 + 3);
    }

    #[test]
    fn load_rejects_wrong_length() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("panel.json");
        let mtp = dir.path().join("mtp.txt");
        fs::write(&config, r#"{ "model": "S6e3ha2Wqhd", "lux_tab": [350] }"#).unwrap();
        fs::write(&mtp, "00 01 02").unwrap();
        let err = load(&config, &mtp).unwrap_err();
        assert!(err.to_string().contains("expects 35"));
    }
}
