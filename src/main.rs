/// morton63 command line tool
/// Encodes normalized vectors to Morton keys and decodes keys back
///
/// Usage:
///   morton63 [--config FILE] [--json] encode X Y Z
///   morton63 [--config FILE] [--json] decode KEY

use anyhow::{bail, Context, Result};
use morton63::morton::parse_key_literal;
use morton63::{CodecConfig, MortonCodec, NormalizedVector3};

const USAGE: &str = "usage: morton63 [--config FILE] [--json] encode X Y Z\n       morton63 [--config FILE] [--json] decode KEY";

struct Options {
    config: CodecConfig,
    json: bool,
    command: Vec<String>,
}

fn parse_options(args: Vec<String>) -> Result<Options> {
    let mut config = None;
    let mut json = false;
    let mut command = Vec::new();

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter.next().context("--config needs a file path")?;
                let loaded = CodecConfig::load(&path)
                    .with_context(|| format!("Failed to load config {}", path))?;
                config = Some(loaded);
            }
            "--json" => json = true,
            "-h" | "--help" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            _ => command.push(arg),
        }
    }

    Ok(Options {
        config: config.unwrap_or_default(),
        json,
        command,
    })
}

fn parse_coord(name: &str, raw: Option<&String>) -> Result<f64> {
    let raw = raw.with_context(|| format!("missing {} coordinate\n{}", name, USAGE))?;
    raw.parse::<f64>()
        .with_context(|| format!("{} coordinate is not a number: {}", name, raw))
}

fn main() -> Result<()> {
    let options = parse_options(std::env::args().skip(1).collect())?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(options.config.log_filter.as_str()),
    )
    .init();

    let codec = MortonCodec::new(options.config.clone());
    log::debug!("Validation policy: {:?}", codec.policy());

    let args = &options.command;
    match args.first().map(String::as_str) {
        Some("encode") => {
            let vector = NormalizedVector3::new(
                parse_coord("x", args.get(1))?,
                parse_coord("y", args.get(2))?,
                parse_coord("z", args.get(3))?,
            );
            let key = codec.encode_vector(vector)?;
            if options.json {
                println!("{}", serde_json::json!({ "key": key.raw(), "hex": key.to_string() }));
            } else {
                println!("{} {}", key.raw(), key);
            }
        }
        Some("decode") => {
            let literal = args.get(1).with_context(|| format!("missing key\n{}", USAGE))?;
            let raw = parse_key_literal(literal)?;
            let vector = codec.decode_key(raw)?;
            if options.json {
                println!("{}", serde_json::to_string(&vector)?);
            } else {
                println!("{} {} {}", vector.x, vector.y, vector.z);
            }
        }
        Some(other) => bail!("unknown command: {}\n{}", other, USAGE),
        None => bail!("{}", USAGE),
    }

    Ok(())
}
