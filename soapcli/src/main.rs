//! Command-line calculator over SOAP.
//!
//! ```text
//! soapcli <add|subtract|multiply|divide> <intA> <intB> [endpoint]
//! ```

use std::process;

use soapcalc::{Add, CalculatorClient, Divide, Multiply, Subtract};
use soapcore::CallError;
use tracing::debug;

fn usage() -> ! {
    eprintln!("usage: soapcli <add|subtract|multiply|divide> <intA> <intB> [endpoint]");
    process::exit(1);
}

fn parse_int(text: &str, name: &str) -> i32 {
    match text.parse() {
        Ok(value) => value,
        Err(_) => {
            eprintln!("soapcli: {name} must be an integer, got '{text}'");
            process::exit(1);
        }
    }
}

fn run(operation: &str, int_a: i32, int_b: i32, endpoint: Option<&str>) -> Result<i32, CallError> {
    let client = CalculatorClient::new(endpoint, false, None);
    debug!("calling {} on {}", operation, client.endpoint());

    match operation {
        "add" => Ok(client.add(&Add { int_a, int_b })?.add_result),
        "subtract" => Ok(client.subtract(&Subtract { int_a, int_b })?.subtract_result),
        "multiply" => Ok(client.multiply(&Multiply { int_a, int_b })?.multiply_result),
        "divide" => Ok(client.divide(&Divide { int_a, int_b })?.divide_result),
        _ => usage(),
    }
}

fn main() {
    let _ = tracing_subscriber::fmt::try_init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 || args.len() > 5 {
        usage();
    }

    let operation = args[1].as_str();
    let int_a = parse_int(&args[2], "intA");
    let int_b = parse_int(&args[3], "intB");
    let endpoint = args.get(4).map(|s| s.as_str());

    match run(operation, int_a, int_b, endpoint) {
        Ok(result) => println!("Result: {result}"),
        Err(err) => {
            eprintln!("soapcli: {err}");
            process::exit(1);
        }
    }
}
