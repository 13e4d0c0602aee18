use std::io::{self, Write};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use dewcheck_core::tables::{verify_log_table, verify_packed_table, write_log_table};
use dewcheck_core::{
    LogTable, PackedLogTable, PrecisionComparison, Reading, TableLayout, TermDelta,
};

use crate::cli::args::{Cli, Commands, CompareArgs, TableArgs};

/// Run the parsed command against stdout.
pub fn run(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_writer(cli, &mut out)?;
    out.flush().context("failed to flush stdout")
}

/// Run the parsed command, writing the report to `out`.
pub fn run_with_writer<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    match cli.command.unwrap_or_else(|| Commands::Compare(CompareArgs::default())) {
        Commands::Compare(args) => compare(&args, out),
        Commands::Table(args) => table(&args, out),
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    comparison: &'a PrecisionComparison,
    deltas: [TermDelta; 4],
    within_tolerance: bool,
}

fn compare<W: Write>(args: &CompareArgs, out: &mut W) -> Result<()> {
    let reading = args.reading();
    debug!(
        humidity_pct = reading.humidity_pct,
        temperature_c = reading.temperature_c,
        "running both estimators"
    );

    let comparison = PrecisionComparison::run(&reading).with_context(|| describe(&reading))?;
    info!(
        error_c = comparison.dew_point_error_c(),
        within_tolerance = comparison.within_tolerance(),
        "dew point comparison finished"
    );

    if args.json {
        let report = JsonReport {
            comparison: &comparison,
            deltas: comparison.deltas(),
            within_tolerance: comparison.within_tolerance(),
        };
        serde_json::to_writer_pretty(&mut *out, &report)
            .context("failed to serialize comparison")?;
        writeln!(out)?;
    } else {
        write!(out, "{}", comparison.report(args.deltas))?;
    }
    Ok(())
}

fn table<W: Write>(args: &TableArgs, out: &mut W) -> Result<()> {
    let layout = args.layout();
    match layout {
        TableLayout::Wide => verify_log_table(&LogTable::STANDARD),
        TableLayout::Packed => verify_packed_table(&PackedLogTable::STANDARD),
    }
    .with_context(|| format!("stored {} table is inconsistent", layout.name()))?;

    let mut source = String::new();
    write_log_table(&mut source, layout).context("failed to render table")?;
    out.write_all(source.as_bytes())?;
    Ok(())
}

fn describe(reading: &Reading) -> String {
    format!(
        "failed to estimate dew point for {}% RH at {} °C",
        reading.humidity_pct, reading.temperature_c
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::TableArgs;

    fn render(command: Option<Commands>) -> Result<String> {
        let cli = Cli { command, verbose: false };
        let mut out = Vec::new();
        run_with_writer(cli, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn default_command_is_compare() {
        let implicit = render(None).unwrap();
        let explicit = render(Some(Commands::Compare(CompareArgs::default()))).unwrap();
        assert_eq!(implicit, explicit);
        assert!(implicit.starts_with("log=-1.136719\n"));
        assert!(implicit.ends_with("dpf=5.393547\n"));
    }

    #[test]
    fn deltas_flag_adds_block() {
        let args = CompareArgs { deltas: true, ..CompareArgs::default() };
        let text = render(Some(Commands::Compare(args))).unwrap();
        assert!(text.contains("\n\nlog_delta="));
        assert!(text.ends_with("within_tolerance=true\n"));
    }

    #[test]
    fn json_output_parses() {
        let args = CompareArgs { json: true, ..CompareArgs::default() };
        let text = render(Some(Commands::Compare(args))).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["fixed"]["dew_point_q8"], 1366);
        assert_eq!(value["fixed"]["table_index"], 32);
        assert_eq!(value["within_tolerance"], true);
        assert_eq!(value["deltas"].as_array().unwrap().len(), 4);
        assert_eq!(value["deltas"][3]["label"], "dp");
    }

    #[test]
    fn rejected_reading_carries_context() {
        let args = CompareArgs { humidity: 100.0, temperature: 20.0, ..CompareArgs::default() };
        let err = render(Some(Commands::Compare(args))).unwrap_err();
        let chain = format!("{:#}", err);
        assert!(chain.contains("failed to estimate dew point for 100% RH at 20 °C"));
        assert!(chain.contains("Log table index 100 out of bounds"));
    }

    #[test]
    fn table_command_emits_source() {
        let wide = render(Some(Commands::Table(TableArgs::default()))).unwrap();
        assert!(wide.contains("pub const LOG_TABLE_WIDE: [i16; 100] = ["));

        let packed = render(Some(Commands::Table(TableArgs { packed: true }))).unwrap();
        assert!(packed.contains("pub const LOG_TABLE_PACKED: [u8; 100] = ["));
    }
}
