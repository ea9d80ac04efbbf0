use std::ops::Deref;
use std::process::ExitCode;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand};
use spki_parts::{Error, NamedCurve, PublicKey};
use tracing::debug;
use tracing_subscriber::EnvFilter;


#[derive(Clone, Debug, Eq, Hash, Ord, Parser, PartialEq, PartialOrd)]
struct Opts {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub mode: Mode,
}

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Subcommand)]
enum Mode {
    BuildRsa(BuildRsaOpts),
    BuildDsa(BuildDsaOpts),
    BuildEcdsa(BuildEcdsaOpts),
    Decompose(DecomposeOpts),
    Curves,
}

#[derive(Args, Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
struct BuildRsaOpts {
    #[arg(short, long)]
    pub exponent: HexBytes,

    #[arg(short, long)]
    pub modulus: HexBytes,
}

#[derive(Args, Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
struct BuildDsaOpts {
    #[arg(long)]
    pub p: HexBytes,

    #[arg(long)]
    pub q: HexBytes,

    #[arg(long)]
    pub g: HexBytes,

    #[arg(long)]
    pub y: HexBytes,
}

#[derive(Args, Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
struct BuildEcdsaOpts {
    /// P-256, P-384 or P-521.
    #[arg(short, long)]
    pub curve: String,

    #[arg(short, long)]
    pub x: HexBytes,

    #[arg(short, long)]
    pub y: HexBytes,
}

#[derive(Args, Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
struct DecomposeOpts {
    #[arg(short, long)]
    pub der: HexBytes,
}


/// Bytes given on the command line in hexadecimal; whitespace and colons are ignored.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
struct HexBytes(Vec<u8>);
impl FromStr for HexBytes {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits: String = s.chars()
            .filter(|c| !c.is_ascii_whitespace() && *c != ':')
            .collect();
        hex::decode(digits)
            .map(Self)
    }
}
impl Deref for HexBytes {
    type Target = [u8];
    fn deref(&self) -> &Self::Target { &self.0 }
}


fn print_der(der: &[u8]) {
    println!("{}", hex::encode_upper(der));
    print!("{}", spki_parts::hexdump(der));
}


fn print_field(name: &str, value: &[u8]) {
    println!("{:<9} {}", format!("{}:", name), hex::encode_upper(value));
}


fn run(mode: Mode) -> Result<(), Error> {
    match mode {
        Mode::BuildRsa(opts) => {
            let der = spki_parts::rsa::build(&opts.exponent, &opts.modulus)?;
            print_der(&der);
        },
        Mode::BuildDsa(opts) => {
            let der = spki_parts::dsa::build(&opts.p, &opts.q, &opts.g, &opts.y)?;
            print_der(&der);
        },
        Mode::BuildEcdsa(opts) => {
            let der = spki_parts::ecdsa::build(&opts.x, &opts.y, &opts.curve)?;
            print_der(&der);
        },
        Mode::Decompose(opts) => {
            let key = PublicKey::from_der(&opts.der)?;
            println!("algorithm: {}", key.algorithm_name());
            match key {
                PublicKey::Rsa(rsa) => {
                    let parts = rsa.to_parts()?;
                    print_field("exponent", &parts.exponent);
                    print_field("modulus", &parts.modulus);
                },
                PublicKey::Dsa(dsa) => {
                    let parts = dsa.to_parts()?;
                    print_field("p", &parts.p);
                    print_field("q", &parts.q);
                    print_field("g", &parts.g);
                    print_field("y", &parts.y);
                },
                PublicKey::Ecdsa(ecdsa) => {
                    let parts = ecdsa.to_parts()?;
                    println!("curve:    {}", parts.curve_name);
                    print_field("x", &parts.x);
                    print_field("y", &parts.y);
                },
            }
        },
        Mode::Curves => {
            for curve in NamedCurve::ALL {
                let identifier: Vec<String> = curve.identifier().iter()
                    .map(|arc| arc.to_string())
                    .collect();
                println!("{}  {}  {} bytes", curve.name(), identifier.join("."), curve.coordinate_width());
            }
        },
    }
    Ok(())
}


fn main() -> ExitCode {
    let opts = Opts::parse();

    let default_level = if opts.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    spki_parts::init();
    debug!(mode = ?opts.mode, "starting");

    match run(opts.mode) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        },
    }
}
