use clap::{Parser, Subcommand, ValueEnum};
use codata::{ConstantRecord, Revision};

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Parser)]
#[command(name = "codata")]
#[command(about = "Look up CODATA recommended values of physical constants")]
struct Cli {
    /// CODATA revision (e.g. 2006, codata_2002)
    #[arg(long, short, default_value = "2006")]
    revision: Revision,

    /// Output format
    #[arg(long, value_enum, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one constant by CODATA name or identifier
    Show {
        /// e.g. "electron mass" or electron_mass
        name: String,
    },
    /// List constants, optionally filtered by a name fragment
    List {
        /// Case-insensitive fragment of the CODATA name
        #[arg(long)]
        search: Option<String>,
    },
    /// Validate every revision table
    Check,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("codata=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show { name } => {
            let record = cli.revision.find(&name)?;
            print_records(&[record], &cli.format)?;
        }
        Commands::List { search } => {
            let records: Vec<&ConstantRecord> = match search {
                Some(fragment) => cli.revision.search(&fragment),
                None => cli.revision.catalog().iter().collect(),
            };
            if records.is_empty() {
                anyhow::bail!("No constants in {} match the search", cli.revision);
            }
            print_records(&records, &cli.format)?;
        }
        Commands::Check => {
            for rev in Revision::ALL {
                rev.validate()
                    .map_err(|e| anyhow::anyhow!("{} failed validation: {}", rev, e))?;
                println!("{}: {} constants OK", rev, rev.catalog().len());
            }
        }
    }

    Ok(())
}

fn print_records(records: &[&ConstantRecord], format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(records),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(records)?),
        OutputFormat::Csv => print_csv(records),
    }
    Ok(())
}

fn print_table(records: &[&ConstantRecord]) {
    let width = records.iter().map(|r| r.name.len()).max().unwrap_or(0);
    for r in records {
        println!(
            "{:<width$}  {:>18e}  ± {:<10e}  rel {:<12.3e}  {}",
            r.name,
            r.value,
            r.uncertainty,
            r.precision(),
            r.unit,
            width = width
        );
    }
}

fn print_csv(records: &[&ConstantRecord]) {
    println!("name,ident,value,uncertainty,precision,unit");
    for r in records {
        println!(
            "\"{}\",{},{:e},{:e},{:e},\"{}\"",
            r.name,
            r.ident,
            r.value,
            r.uncertainty,
            r.precision(),
            r.unit
        );
    }
}
