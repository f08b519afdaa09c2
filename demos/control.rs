// SPDX-License-Identifier: MPL-2.0

//! Demo program: print the stove status, then change its setpoint.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example control -- <mac> <pin> [target]
//! ```
//!
//! # Example
//!
//! ```bash
//! cargo run --example control -- AABBCCDDEEFF 1234 23.0
//! ```

use std::env;

use fumis_lib::Stove;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if !(3..=4).contains(&args.len()) {
        eprintln!("Usage: {} <mac> <pin> [target]", args[0]);
        eprintln!();
        eprintln!("Example:");
        eprintln!("  cargo run --example control -- AABBCCDDEEFF 1234 23.0");
        std::process::exit(1);
    }

    let target: f64 = args.get(3).map_or(Ok(23.0), |value| value.parse())?;

    let stove = Stove::new(&args[1], &args[2]);
    let session = stove.session()?;

    let info = session.update_info().await?;
    println!("Unit:        {} (firmware {})", info.unit_id(), info.unit_version());
    println!("Controller:  {}", info.controller_version());
    println!("Network:     {} ({}% signal)", info.ip(), info.signal_strength());
    println!("State:       {} / {}", info.state(), info.status());
    println!(
        "Temperature: {} °C (target {} °C)",
        info.temperature(),
        info.target_temperature()
    );
    println!("Fuel:        {:.0}%", info.fuel_quantity());
    println!("Eco mode:    {}", info.ecomode_state());

    println!("Setting target temperature to {target} °C...");
    session.set_target_temperature(target).await?;

    Ok(())
}
