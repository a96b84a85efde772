//! Report renderers: CSV, ASCII table, and JSON lines.
//!
//! Every renderer writes through a `dyn Write` seam so the caller decides
//! where a row lands; the warm-up pass exploits this by handing in
//! `io::sink()`.

use std::io::{self, Write};

use primebase_core::AnalysisResult;

/// Output format, chosen by the single positional CLI argument.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    Csv,
    #[default]
    Table,
    Json,
}

impl Format {
    /// `csv` and `json` select their renderers; anything else, including no
    /// argument at all, falls back to the table.
    pub fn from_arg(arg: Option<&str>) -> Format {
        match arg {
            Some("csv") => Format::Csv,
            Some("json") => Format::Json,
            _ => Format::Table,
        }
    }
}

const CSV_HEADER: &str = "Class,Base,Next Prime,Memory Use (MiB/Gdigit),Memory Waste (MiB/Gdigit),Calculation Speed (MIPS)";

const TABLE_BORDER: &str = "+--------+--------------------+------------+-------------------------+---------------------------+--------------------------+";
const TABLE_HEADER: &str = "| Class  | Base               | Next Prime | Memory Use (MiB/Gdigit) | Memory Waste (MiB/Gdigit) | Calculation Speed (MIPS) |";

pub fn write_header(out: &mut dyn Write, format: Format) -> io::Result<()> {
    match format {
        Format::Csv => writeln!(out, "{CSV_HEADER}"),
        Format::Table => {
            writeln!(out, "{TABLE_BORDER}")?;
            writeln!(out, "{TABLE_HEADER}")?;
            writeln!(out, "{TABLE_BORDER}")
        }
        Format::Json => Ok(()),
    }
}

pub fn write_row(out: &mut dyn Write, format: Format, row: &AnalysisResult) -> io::Result<()> {
    match format {
        Format::Csv => writeln!(
            out,
            "{},{},{},{:.2},{:.2},{:.2}",
            row.class, row.base, row.next_prime, row.memory_use_mib, row.memory_waste_mib, row.mips
        ),
        Format::Table => writeln!(
            out,
            "| {:>6} | {:>18} | {:>10} | {:>23.2} | {:>25.2} | {:>24.2} |",
            row.class, row.base, row.next_prime, row.memory_use_mib, row.memory_waste_mib, row.mips
        ),
        Format::Json => {
            serde_json::to_writer(&mut *out, row).map_err(io::Error::from)?;
            writeln!(out)
        }
    }
}

/// CSV ends with a deliberate blank line; the table closes its box.
pub fn write_footer(out: &mut dyn Write, format: Format) -> io::Result<()> {
    match format {
        Format::Csv => writeln!(out),
        Format::Table => writeln!(out, "{TABLE_BORDER}"),
        Format::Json => Ok(()),
    }
}
