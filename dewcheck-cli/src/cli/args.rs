use clap::{Args, Parser, Subcommand};

use dewcheck_core::constants::{DEFAULT_HUMIDITY_PCT, DEFAULT_TEMPERATURE_C};
use dewcheck_core::{Reading, TableLayout};

#[derive(Parser, Debug)]
#[command(name = "dewcheck")]
#[command(about = "Compare a fixed-point dew point estimate against the float Magnus-Tetens formula")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Print every intermediate term of both estimators (default)
    Compare(CompareArgs),

    /// Print the logarithm table as Rust source
    Table(TableArgs),
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct CompareArgs {
    #[arg(
        long,
        default_value_t = DEFAULT_HUMIDITY_PCT,
        allow_negative_numbers = true,
        help = "Relative humidity in percent"
    )]
    pub humidity: f64,

    #[arg(
        long,
        default_value_t = DEFAULT_TEMPERATURE_C,
        allow_negative_numbers = true,
        help = "Air temperature in °C"
    )]
    pub temperature: f64,

    #[arg(long, help = "Append per-term deltas and the tolerance verdict")]
    pub deltas: bool,

    #[arg(long, help = "Print one JSON object instead of text blocks")]
    pub json: bool,
}

impl CompareArgs {
    pub fn reading(&self) -> Reading {
        Reading::new(self.humidity, self.temperature)
    }
}

impl Default for CompareArgs {
    fn default() -> Self {
        Self {
            humidity: DEFAULT_HUMIDITY_PCT,
            temperature: DEFAULT_TEMPERATURE_C,
            deltas: false,
            json: false,
        }
    }
}

#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct TableArgs {
    #[arg(long, help = "Emit the u8 table with shift hints instead of i16 rows")]
    pub packed: bool,
}

impl TableArgs {
    pub fn layout(&self) -> TableLayout {
        if self.packed {
            TableLayout::Packed
        } else {
            TableLayout::Wide
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::try_parse_from(["dewcheck"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn compare_defaults_match_reference_reading() {
        let cli = Cli::try_parse_from(["dewcheck", "compare"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Compare(CompareArgs::default())));
        assert_eq!(CompareArgs::default().reading(), Reading::default());
    }

    #[test]
    fn negative_temperature_and_global_verbose() {
        let cli = Cli::try_parse_from([
            "dewcheck",
            "compare",
            "--temperature",
            "-12.5",
            "--humidity",
            "80",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Some(Commands::Compare(args)) => {
                assert_eq!(args.reading(), Reading::new(80.0, -12.5));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn table_layout_flag() {
        let cli = Cli::try_parse_from(["dewcheck", "table", "--packed"]).unwrap();
        match cli.command {
            Some(Commands::Table(args)) => assert_eq!(args.layout(), TableLayout::Packed),
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(TableArgs::default().layout(), TableLayout::Wide);
    }

    #[test]
    fn rejects_non_numeric_humidity() {
        assert!(Cli::try_parse_from(["dewcheck", "compare", "--humidity", "wet"]).is_err());
    }
}
