use clap::Parser;
use colored::Colorize;
use std::error::Error;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use cidrl::output::print_hosts;
use cidrl::{Cidr, CidrError};

/// Lists all IP addresses within a CIDR block.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// CIDR block to expand, e.g. 192.168.0.1/28
    cidr: String,

    /// Print only the number of addresses in the block
    #[arg(long)]
    count: bool,
}

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    if let Err(e) = log4rs::init_file("log4rs.yml", Default::default()) {
        log::debug!("log4rs.yml not loaded: {e}");
    }
    let args = Args::parse();
    log::info!("#Start main() cidr={}", args.cidr);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red(), e);
            ExitCode::from(exit_code(e.as_ref()))
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let cidr: Cidr = args.cidr.parse()?;

    if args.count {
        println!("{}", cidr.host_count());
        return Ok(());
    }

    if cidr.prefix_len < 16 {
        log::warn!(
            "{} spans {} addresses, output will be large",
            cidr,
            cidr.host_count()
        );
    }

    let stdout = io::stdout().lock();
    let mut out = BufWriter::new(stdout);
    print_hosts(&mut out, &cidr)?;
    out.flush()?;
    Ok(())
}

// Exit codes follow the original cidrl tool: 2 for a bad address,
// 3 for a bad prefix length, 1 for anything else.
fn exit_code(e: &(dyn Error + 'static)) -> u8 {
    match e.downcast_ref::<CidrError>() {
        Some(CidrError::InvalidAddress(_)) => 2,
        Some(CidrError::InvalidPrefixLength(_)) => 3,
        Some(CidrError::MalformedInput(_)) | None => 1,
    }
}
