mod data_types;
use crate::data_types::{BtAddress, BtAddressError};

mod bt_magic;
use crate::bt_magic::BtMagic;

use std::ffi::OsString;
use std::process::ExitCode;

use clap::Parser;
use log::debug;
use thiserror::Error;

/// Derive IPv6 link local addresses from a Bluetooth device address
#[derive(Parser, Debug)]
#[command(
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Args {
    /// Bluetooth device address, xx:xx:xx:xx:xx:xx
    #[arg(num_args = 0.., allow_hyphen_values = true, trailing_var_arg = true)]
    addresses: Vec<OsString>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("Usage: {0} <Bluetooth device address>")]
    Usage(String),
    #[error("Error: invalid Bluetooth device address, must have format xx:xx:xx:xx:xx:xx")]
    Format(#[from] BtAddressError),
}

fn run() -> Result<(), CliError> {
    let mut argv = std::env::args_os();
    let program = argv
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());

    // Everything after the program name is positional, `--` and `-h` included
    let raw = std::iter::once(OsString::from(&program))
        .chain(std::iter::once(OsString::from("--")))
        .chain(argv);
    let args = Args::try_parse_from(raw).map_err(|e| {
        debug!("argument error: {:?}", e.kind());
        CliError::Usage(program.clone())
    })?;

    let [arg] = args.addresses.as_slice() else {
        debug!("expected one argument, got {}", args.addresses.len());
        return Err(CliError::Usage(program));
    };

    let address = BtAddress::try_from(arg.as_os_str()).inspect_err(|e| debug!("{e}"))?;
    debug!("parsed octets {:02x?}", address.raw);

    let bt = BtMagic::new();
    let lla = bt.link_local(&address);
    let public = bt.public(&address);

    debug!(
        "canonical link local {}, public {}",
        bt.canonical(bt.msb_laa(address.msb()), &address),
        bt.canonical(bt.msb_pub(address.msb()), &address),
    );

    println!("Bluetooth device address: {address}");
    println!("IPv6 link local address:  {lla}");
    println!("IPv6 public address:      {public}");

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
