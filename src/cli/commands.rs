//! CLI command implementations.

use std::io::Write;
use std::path::Path;

use crate::config::EnvelopeConfig;
use crate::format::{decode_with, encode, from_msgpack, inspect, to_msgpack};
use crate::types::{LzmpError, LzmpResult};

/// Compress a raw MessagePack file into an envelope.
pub fn cmd_pack(input: &Path, output: Option<&Path>) -> LzmpResult<()> {
    let raw = std::fs::read(input)?;
    let packed = encode(&raw);
    write_output(output, &packed)?;
    if let Some(out) = output {
        println!(
            "Packed {} -> {} ({} -> {}, {})",
            input.display(),
            out.display(),
            format_size(raw.len() as u64),
            format_size(packed.len() as u64),
            if packed.len() < raw.len() {
                "compressed"
            } else {
                "stored"
            }
        );
    }
    Ok(())
}

/// Unwrap an envelope back into plain MessagePack.
pub fn cmd_unpack(input: &Path, output: Option<&Path>, config: &EnvelopeConfig) -> LzmpResult<()> {
    let data = std::fs::read(input)?;
    let plain = decode_with(&data, config)?;
    write_output(output, &plain)?;
    if let Some(out) = output {
        println!(
            "Unpacked {} -> {} ({} -> {})",
            input.display(),
            out.display(),
            format_size(data.len() as u64),
            format_size(plain.len() as u64)
        );
    }
    Ok(())
}

/// Describe the envelope header of a file.
pub fn cmd_inspect(input: &Path, json: bool) -> LzmpResult<()> {
    let data = std::fs::read(input)?;
    let info = inspect(&data);

    if json {
        let value = match info {
            Some(info) => serde_json::json!({
                "file": input.display().to_string(),
                "compressed": true,
                "header": info.header.name(),
                "ext_len": info.declared_ext_len,
                "uncompressed_len": info.uncompressed_len,
                "compressed_len": info.compressed_len,
                "total_len": info.total_len,
            }),
            None => serde_json::json!({
                "file": input.display().to_string(),
                "compressed": false,
                "total_len": data.len(),
            }),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&value).unwrap_or_default()
        );
    } else {
        println!("File: {}", input.display());
        match info {
            Some(info) => {
                println!("Envelope: {}", info.header.name());
                println!("Ext length: {}", info.declared_ext_len);
                println!(
                    "Uncompressed: {}",
                    format_size(info.uncompressed_len as u64)
                );
                println!("Compressed: {}", format_size(info.compressed_len as u64));
                println!("Total: {}", format_size(info.total_len as u64));
            }
            None => {
                println!("Envelope: none (plain MessagePack)");
                println!("Total: {}", format_size(data.len() as u64));
            }
        }
    }
    Ok(())
}

/// Convert a JSON document to MessagePack and compress it.
pub fn cmd_from_json(json_file: &Path, output: Option<&Path>) -> LzmpResult<()> {
    let text = std::fs::read_to_string(json_file)?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .map_err(|e| LzmpError::Codec(e.to_string()))?;
    let raw = to_msgpack(&value)?;
    let packed = encode(&raw);
    write_output(output, &packed)?;
    if let Some(out) = output {
        println!(
            "Converted {} -> {} ({})",
            json_file.display(),
            out.display(),
            format_size(packed.len() as u64)
        );
    }
    Ok(())
}

/// Decompress and print a MessagePack file as JSON.
pub fn cmd_to_json(input: &Path, pretty: bool, config: &EnvelopeConfig) -> LzmpResult<()> {
    let data = std::fs::read(input)?;
    let plain = decode_with(&data, config)?;
    let value: serde_json::Value = from_msgpack(&plain)?;
    let text = if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    };
    println!(
        "{}",
        text.map_err(|e| LzmpError::Codec(e.to_string()))?
    );
    Ok(())
}

fn write_output(output: Option<&Path>, bytes: &[u8]) -> LzmpResult<()> {
    match output {
        Some(path) => std::fs::write(path, bytes)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else if bytes < 1024 * 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else {
        format!("{:.1} GB", bytes as f64 / (1024.0 * 1024.0 * 1024.0))
    }
}
