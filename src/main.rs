use {
    anyhow::{Context, Result},
    clap::Parser,
    int96_ts::{DisplayZone, decode, format},
    std::io::{self, BufRead, BufWriter, Write},
    tracing::{debug, warn},
    tracing_subscriber::EnvFilter,
};

/// Decode hex-encoded Parquet INT96 timestamps and print them as epoch
/// milliseconds and calendar time.
#[derive(Parser)]
#[command(name = "int96-ts", version, about, long_about = None)]
struct Cli {
    /// Hex-encoded 12-byte INT96 values. Read from stdin, one per line, if
    /// none are given.
    values: Vec<String>,

    /// Display zone: a fixed offset (+08:00, GMT-5, Z) or an IANA name
    /// (Asia/Shanghai).
    #[arg(short, long, env = "INT96_TS_ZONE", default_value = "+08:00")]
    zone: DisplayZone,

    /// Log and skip values that cannot be decoded instead of aborting.
    #[arg(long)]
    skip_malformed: bool,
}

/// A decoded value, ready for printing.
struct Record {
    raw: String,
    millis: i64,
    datetime: String,
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    debug!(zone = %cli.zone, "display zone");

    let mut out = BufWriter::new(io::stdout().lock());
    if cli.values.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("Failed to read stdin")?;
            let value = line.trim();
            if value.is_empty() {
                continue;
            }
            process(&mut out, value, &cli)?;
        }
    } else {
        for value in &cli.values {
            process(&mut out, value, &cli)?;
        }
    }
    out.flush().context("Failed to flush stdout")?;

    Ok(())
}

/// Logs go to stderr at `warn` unless overridden via `RUST_LOG`.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}

fn process(out: &mut impl Write, value: &str, cli: &Cli) -> Result<()> {
    let record = match decode_record(value, &cli.zone) {
        Ok(record) => record,
        Err(err) if cli.skip_malformed => {
            warn!(value, error = %format!("{err:#}"), "skipping malformed value");
            return Ok(());
        }
        Err(err) => return Err(err),
    };

    writeln!(out, "Binary: {}", record.raw)?;
    writeln!(out, "Millis: {}", record.millis)?;
    writeln!(out, "Datetime: {}", record.datetime)?;
    writeln!(out, "====")?;
    Ok(())
}

fn decode_record(value: &str, zone: &DisplayZone) -> Result<Record> {
    let hex_digits = value.strip_prefix("0x").unwrap_or(value);
    let bytes =
        hex::decode(hex_digits).with_context(|| format!("Invalid hex value: {value:?}"))?;
    let millis =
        decode(&bytes).with_context(|| format!("Failed to decode INT96 value: {value:?}"))?;
    let datetime = format(millis, zone)
        .with_context(|| format!("Failed to format {millis} ms in zone {zone}"))?;

    Ok(Record {
        raw: hex::encode(&bytes),
        millis,
        datetime,
    })
}
