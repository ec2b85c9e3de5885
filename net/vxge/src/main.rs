use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};

use vxge::regs::{self, RegisterInfo, REGISTERS};
use vxge::MrpcimConfig;

const USAGE: &str = "\
usage: vxge-regs <command>

commands:
    list                        every register of the MRPCIM block
    find <name|0xoffset>        one register and its bitfields
    decode <name> <value>       split a register value into its fields
    check-config <file.toml>    validate an MRPCIM configuration";

fn parse_u64(text: &str) -> Result<u64> {
    let text = text.replace('_', "");
    let value = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => text.parse(),
    };
    value.with_context(|| format!("invalid number {text:?}"))
}

/// Resolves `name`, `name[idx]` or a byte offset to a register element.
fn resolve(target: &str) -> Result<(&'static RegisterInfo, usize)> {
    if target.starts_with("0x") || target.starts_with("0X") {
        let offset = usize::try_from(parse_u64(target)?)?;
        return RegisterInfo::at(offset)
            .ok_or_else(|| anyhow!("no register at offset {offset:#07x}"));
    }

    let (name, idx) = match target.split_once('[') {
        Some((name, rest)) => {
            let idx = rest
                .strip_suffix(']')
                .ok_or_else(|| anyhow!("unterminated index in {target:?}"))?;
            (name, idx.parse().with_context(|| format!("invalid index in {target:?}"))?)
        }
        None => (target, 0),
    };
    let info = RegisterInfo::find(name).ok_or_else(|| anyhow!("unknown register {name:?}"))?;
    if idx >= info.count {
        bail!("{name} has {} elements", info.count);
    }
    Ok((info, idx))
}

fn list() {
    for info in REGISTERS {
        if info.count > 1 {
            println!("{:#07x}  {}[{}]", info.offset, info.name, info.count);
        } else {
            println!("{:#07x}  {}", info.offset, info.name);
        }
    }
}

fn find(target: &str) -> Result<()> {
    let (info, idx) = resolve(target)?;
    let offset = info.element_offset(idx).unwrap_or(info.offset);
    if info.count > 1 {
        println!("{:#07x}  {}[{idx}]", offset, info.name);
    } else {
        println!("{:#07x}  {}", offset, info.name);
    }

    match info.fields() {
        Some(fields) => {
            for (name, field) in fields {
                let last = field.loc + field.width - 1;
                if field.width == 1 {
                    println!("    bit  {:>2}     {name}", field.loc);
                } else {
                    println!("    bits {:>2}..{:<2} {name}", field.loc, last);
                }
            }
        }
        None => println!("    (no bitfields)"),
    }
    Ok(())
}

fn decode(target: &str, value: &str) -> Result<()> {
    let (info, _) = resolve(target)?;
    let value = parse_u64(value)?;
    let fields = regs::decode(info, value);
    if fields.is_empty() {
        bail!("{} has no bitfields", info.name);
    }

    println!("{} = {value:#018x}", info.name);
    for (name, field) in fields {
        println!("    {name:<40} {field:#x}");
    }
    Ok(())
}

fn check_config(path: PathBuf) -> Result<()> {
    let config = MrpcimConfig::load(&path)
        .with_context(|| format!("failed to load {}", path.display()))?;
    log::debug!("vxge-regs: {config:?}");
    println!(
        "{}: ok ({} vpath QoS entries, poll budget {} ms)",
        path.display(),
        config.vp_qos.len(),
        config.device_poll_millis
    );
    Ok(())
}

fn main() -> Result<()> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        println!("{USAGE}");
        return Ok(());
    }

    common::setup_logging(
        "net",
        "vxge",
        "vxge-regs",
        common::output_level(),
        common::file_level(),
    );

    let command: String = args
        .free_from_str()
        .with_context(|| format!("missing command\n\n{USAGE}"))?;
    match command.as_str() {
        "list" => list(),
        "find" => {
            let target: String = args.free_from_str().context("find needs a register")?;
            find(&target)?;
        }
        "decode" => {
            let target: String = args.free_from_str().context("decode needs a register")?;
            let value: String = args.free_from_str().context("decode needs a value")?;
            decode(&target, &value)?;
        }
        "check-config" => {
            let path: PathBuf = args.free_from_str().context("check-config needs a file")?;
            check_config(path)?;
        }
        other => bail!("unknown command {other:?}\n\n{USAGE}"),
    }

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("vxge-regs: ignoring extra arguments {rest:?}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_in_hex_and_decimal() {
        assert_eq!(parse_u64("0x1_0000").unwrap(), 0x10000);
        assert_eq!(parse_u64("42").unwrap(), 42);
        assert!(parse_u64("0xzz").is_err());
    }

    #[test]
    fn resolves_names_indices_and_offsets() {
        let (info, idx) = resolve("rxmac_cfg0_port[2]").unwrap();
        assert_eq!((info.name, idx), ("rxmac_cfg0_port", 2));
        let (info, idx) = resolve("0x4850").unwrap();
        assert_eq!((info.name, idx), ("rxmac_cfg0_port", 2));
        assert_eq!(resolve("bf_sw_reset").unwrap().0.offset, 0x1838);

        assert!(resolve("rxmac_cfg0_port[3]").is_err());
        assert!(resolve("rxmac_cfg0_port[1").is_err());
        assert!(resolve("nonexistent").is_err());
    }
}
