//! Greeks curve sweep
//!
//! Sweeps spot over 50%..150% of the strike and tabulates price and Greeks at
//! each point, one engine call per sample. This is the loop the plotting layer
//! runs to draw the Greek curves; here the output is a plain table.

use bs_pricer::prelude::*;

const SAMPLES: usize = 100;

fn main() {
    let strike = 100.0;
    let maturity = 1.0;
    let rate = 0.05;
    let vol = 0.20;
    let option_type = OptionType::Call;

    println!("Greek Curves vs Spot ({})", option_type);
    println!("Strike ${:.0}, T={:.2}y, r={:.1}%, vol={:.1}%\n", strike, maturity, rate * 100.0, vol * 100.0);
    println!("  Spot  |   Price    Delta    Gamma     Vega    Theta      Rho");
    println!("--------+-----------------------------------------------------");

    let lo = 0.5 * strike;
    let hi = 1.5 * strike;

    for i in (0..SAMPLES).step_by(5) {
        let spot = lo + (hi - lo) * i as f64 / (SAMPLES - 1) as f64;
        let params = OptionParams::new(spot, strike, maturity, rate, vol);

        let value = match bs_price(&params, option_type) {
            Ok(v) => v,
            Err(e) => {
                eprintln!("pricing failed at spot {:.2}: {}", spot, e);
                std::process::exit(1);
            }
        };
        let g = bs_greeks(&params, option_type).unwrap_or_else(|e| {
            eprintln!("greeks failed at spot {:.2}: {}", spot, e);
            std::process::exit(1);
        });

        println!(
            " {:>6.1} | {:>8.4} {:>8.4} {:>8.5} {:>8.3} {:>8.4} {:>8.3}",
            spot, value, g.delta, g.gamma, g.vega, g.theta, g.rho
        );
    }

    println!("\nDelta rises from 0 toward 1 through the strike; gamma and vega");
    println!("peak near the money and fade in the wings.");
}
