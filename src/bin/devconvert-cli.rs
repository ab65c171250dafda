use clap::{Parser, Subcommand};
use devconvert::config::SETTINGS;
use devconvert::converter::{base64, geoip, hash, svg2react, timestamp};
use devconvert::error::ConvertError;
use devconvert::{Conversion, convert};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "devconvert", version, about = "Developer utility converters")]
struct Cli {
    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "PATH", global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert an HTML document to Markdown
    Html2md { input: Option<PathBuf> },
    /// Render Markdown as HTML
    Md2html { input: Option<PathBuf> },
    /// Base64-encode UTF-8 text
    B64encode { input: Option<PathBuf> },
    /// Decode Base64 to UTF-8 text
    B64decode { input: Option<PathBuf> },
    /// Encode an image file as a data URI
    Img2b64 { input: PathBuf },
    /// Decode a data URI or bare Base64 back into an image file
    B642img { input: Option<PathBuf> },
    /// Hex digests of the input text
    Hash {
        input: Option<PathBuf>,
        /// Comma-separated algorithms (md5, sha1, sha256, sha512, sha3-512, ripemd160)
        #[arg(short, long, value_delimiter = ',')]
        algorithms: Vec<String>,
    },
    /// Unix timestamp to UTC date-time
    Ts2date { value: String },
    /// UTC date-time to Unix timestamp
    Date2ts { value: String },
    /// Validate and pretty-print JSON
    Jsonfmt {
        input: Option<PathBuf>,
        #[arg(long)]
        minify: bool,
    },
    /// Format SQL
    Sqlfmt { input: Option<PathBuf> },
    /// Generate a React component from SVG markup
    Svg2react {
        input: Option<PathBuf>,
        /// Component name for the generated source
        #[arg(short, long, default_value = "SvgIcon")]
        name: String,
    },
    /// Geolocation lookup for an IP address
    Geoip { ip: String },
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), ConvertError> {
    let output = match &cli.command {
        // Binary output goes straight to disk; everything else is text.
        Command::B642img { input } => {
            let text = read_input(input.as_deref())?;
            let bytes = base64::data_uri_to_image(&text)?;
            let path = match &cli.output {
                Some(path) => {
                    std::fs::write(path, &bytes).map_err(|e| {
                        ConvertError::conversion(format!(
                            "Failed to write {}: {}",
                            path.display(),
                            e
                        ))
                    })?;
                    path.clone()
                }
                None => base64::save_image(&bytes, &SETTINGS.image_path)?,
            };
            println!("Image written to: {}", path.display());
            return Ok(());
        }
        Command::Html2md { input } => convert(Conversion::HtmlToMarkdown, &read_input(input.as_deref())?)?,
        Command::Md2html { input } => convert(Conversion::MarkdownToHtml, &read_input(input.as_deref())?)?,
        Command::B64encode { input } => convert(Conversion::Base64Encode, &read_input(input.as_deref())?)?,
        Command::B64decode { input } => convert(Conversion::Base64Decode, &read_input(input.as_deref())?)?,
        Command::Img2b64 { input } => {
            let path = input
                .to_str()
                .ok_or_else(|| ConvertError::precondition("Invalid file path"))?;
            devconvert::convert_from_path(Conversion::ImageToDataUri, path)?
        }
        Command::Hash { input, algorithms } => {
            let selection = parse_algorithms(algorithms)?;
            hash::report(&read_input(input.as_deref())?, &selection)?
        }
        Command::Ts2date { value } => timestamp::to_datetime(value)?,
        Command::Date2ts { value } => timestamp::to_unix(value)?.to_string(),
        Command::Jsonfmt { input, minify } => {
            let kind = if *minify {
                Conversion::JsonMinify
            } else {
                Conversion::JsonFormat
            };
            convert(kind, &read_input(input.as_deref())?)?
        }
        Command::Sqlfmt { input } => convert(Conversion::SqlFormat, &read_input(input.as_deref())?)?,
        Command::Svg2react { input, name } => {
            svg2react::generate(&read_input(input.as_deref())?, name)?
        }
        Command::Geoip { ip } => geoip::lookup_text(ip)?,
        Command::B642img { .. } => unreachable!(),
    };

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &output).map_err(|e| {
                ConvertError::conversion(format!("Failed to write {}: {}", path.display(), e))
            })?;
            println!("Output written to: {}", path.display());
        }
        None => println!("{}", output),
    }
    Ok(())
}

/// File contents when a path is given, otherwise stdin to EOF.
fn read_input(path: Option<&std::path::Path>) -> Result<String, ConvertError> {
    match path {
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            ConvertError::precondition(format!("Failed to read file {}: {}", path.display(), e))
        }),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| ConvertError::precondition(format!("Failed to read stdin: {}", e)))?;
            Ok(buffer)
        }
    }
}

fn parse_algorithms(names: &[String]) -> Result<Vec<hash::HashAlgorithm>, ConvertError> {
    if names.is_empty() {
        return Ok(hash::default_selection());
    }
    names
        .iter()
        .map(|name| {
            hash::HashAlgorithm::from_name(name)
                .ok_or_else(|| ConvertError::precondition(format!("Unknown algorithm: {}", name)))
        })
        .collect()
}
