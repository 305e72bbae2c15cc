//! Text renderings of the tables
//!
//! Values go out in Rust's shortest round-trip form for `f64` (the `Debug`
//! form, which always keeps a decimal point), so reading any emitted value
//! back yields the exact same bits.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::builder::ZigguratTables;
use crate::error::TableError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    /// `X:` and `R:` sections, one value per line with a trailing comma
    #[default]
    Plain,
    /// `ZIG_X` / `ZIG_R` constant arrays ready to drop into a source file
    Rust,
}

impl Format {
    pub fn emit<W: Write>(self, tables: &ZigguratTables, out: &mut W) -> Result<(), TableError> {
        match self {
            Format::Plain => write_plain(tables, out),
            Format::Rust => write_rust(tables, out),
        }
    }
}

impl FromStr for Format {
    type Err = TableError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "plain" => Ok(Self::Plain),
            "rust" => Ok(Self::Rust),
            _ => Err(TableError::InvalidParams {
                reason: format!("unknown output format: {}", name),
            }),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Plain => f.write_str("plain"),
            Format::Rust => f.write_str("rust"),
        }
    }
}

pub fn write_plain<W: Write>(tables: &ZigguratTables, out: &mut W) -> Result<(), TableError> {
    writeln!(out, "X:")?;
    for x in tables.x() {
        writeln!(out, "{:?},", x)?;
    }
    writeln!(out, "R:")?;
    for r in tables.ratio() {
        writeln!(out, "{:?},", r)?;
    }
    Ok(())
}

pub fn write_rust<W: Write>(tables: &ZigguratTables, out: &mut W) -> Result<(), TableError> {
    let p = tables.params();
    writeln!(
        out,
        "// Normal Ziggurat tables: C = {}, R = {:?}, V = {:?}",
        p.layers, p.tail, p.area
    )?;
    write_array(out, "ZIG_X", tables.x())?;
    writeln!(out)?;
    write_array(out, "ZIG_R", tables.ratio())?;
    Ok(())
}

fn write_array<W: Write>(out: &mut W, name: &str, values: &[f64]) -> Result<(), TableError> {
    writeln!(out, "pub const {}: [f64; {}] = [", name, values.len())?;
    for v in values {
        writeln!(out, "    {:?},", v)?;
    }
    writeln!(out, "];")?;
    Ok(())
}
