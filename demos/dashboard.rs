// Example: dashboard.rs
// Evaluates the Black-Scholes dashboard once and writes its outputs.
//
// Usage:
//     cargo run --example dashboard -- [config.toml] [call|put]
//
// Without a config path the built-in defaults are used (S=100, K=100, T=1,
// r=5%, sigma=20%). The heatmap is written to option_price_sensitivity.svg and
// the surface values to option_price_sensitivity.csv in the working directory.

use std::env;
use std::error::Error;

use bs_surface_lib::{
    evaluate_dashboard, render_heatmap_svg, write_surface_csv_file, DashboardConfig,
    DashboardOutput, OptionType,
};

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();

    let config = match args.get(1) {
        Some(path) => DashboardConfig::from_file(path)?,
        None => DashboardConfig::standard(),
    };

    let mut inputs = config.inputs.to_inputs();
    if let Some(side) = args.get(2) {
        inputs.option_type = side.parse::<OptionType>()?;
    }

    println!("Black-Scholes Option Pricing");
    println!("============================\n");
    println!("  Spot:       {:?}", inputs.spot);
    println!("  Strike:     {:?}", inputs.strike);
    println!("  Maturity:   {:?} years", inputs.time_to_maturity);
    println!("  Rate:       {:?}", inputs.rate);
    println!("  Volatility: {:?}", inputs.volatility);
    println!("  Type:       {}\n", inputs.option_type);

    let results = match evaluate_dashboard(&inputs, &config)? {
        DashboardOutput::Ready(results) => results,
        DashboardOutput::Incomplete { message } => {
            println!("{}", message);
            return Ok(());
        }
    };

    println!("Option Price:\n{}\n", results.price_text);
    println!("Greeks:\n{}\n", results.greeks_text);

    if let Some((lo, hi)) = results.surface.min_max() {
        let (rows, cols) = results.surface.dims();
        println!(
            "Sensitivity surface: {}x{} grid, prices {:.2} to {:.2}",
            rows, cols, lo, hi
        );
    }

    render_heatmap_svg(&results.surface, &config.heatmap, "option_price_sensitivity.svg")?;
    println!("Chart saved to option_price_sensitivity.svg");

    write_surface_csv_file(&results.surface, "option_price_sensitivity.csv")?;
    println!("Surface saved to option_price_sensitivity.csv");

    Ok(())
}
