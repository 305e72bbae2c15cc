use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
};
use ziggurat_tables::{
    Format, ZigguratParams, ZigguratTables,
    constants::{NOR_SECTION_AREA, ZIGGURAT_LAYERS, ZIGGURAT_NOR_R},
};

#[derive(Parser, Debug)]
#[command(version, about = "Generate Ziggurat normal sampler tables", long_about = None)]
struct Args {
    /// Number of layers (C)
    #[arg(short = 'c', long, default_value_t = ZIGGURAT_LAYERS)]
    layers: usize,

    /// Tail boundary (R)
    #[arg(short = 'r', long, default_value_t = ZIGGURAT_NOR_R)]
    tail: f64,

    /// Area of each layer (V)
    #[arg(short = 'v', long, default_value_t = NOR_SECTION_AREA)]
    area: f64,

    /// Output format: plain or rust
    #[arg(short, long, default_value_t = Format::Plain)]
    format: Format,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verify the table invariants before writing
    #[arg(long, default_value_t = false)]
    check: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let params = ZigguratParams::new(args.layers, args.tail, args.area);

    let tables = ZigguratTables::build(params).context("failed to build tables")?;
    if args.check {
        tables.check().context("table check failed")?;
        info!("table check passed");
    }
    info!(
        "{} layers, closure error {:e}",
        tables.layers(),
        tables.closure_error()
    );

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            let mut out = BufWriter::new(file);
            args.format.emit(&tables, &mut out)?;
            out.flush()?;
            info!("wrote {} tables to {}", args.format, path.display());
        }
        None => {
            let mut out = io::stdout().lock();
            args.format.emit(&tables, &mut out)?;
            out.flush()?;
        }
    }

    Ok(())
}
