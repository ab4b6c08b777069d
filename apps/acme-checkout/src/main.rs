//! # acme-checkout
//!
//! Binary entry point. All logic lives in the library so it can be tested.

use std::process::ExitCode;

fn main() -> ExitCode {
    acme_checkout::run()
}
