//! BS Pricer CLI
//!
//! Prices a sample contract and reports its Greeks, the same summary the
//! dashboard layer renders from the engine's outputs.

use bs_pricer::prelude::*;

fn main() {
    // Option parameters
    let params = OptionParams::new(
        100.0, // spot
        100.0, // strike (ATM)
        1.0,   // 1 year to expiry
        0.05,  // 5% risk-free rate
        0.20,  // 20% volatility
    );

    println!("Black-Scholes Pricing Engine");
    println!("============================\n");
    println!("Spot:     ${:.2}", params.spot);
    println!("Strike:   ${:.2}", params.strike);
    println!("Maturity: {:.2} years", params.maturity);
    println!("Rate:     {:.1}%", params.rate * 100.0);
    println!("Vol:      {:.1}%\n", params.vol * 100.0);

    for option_type in [OptionType::Call, OptionType::Put] {
        let value = match bs_price(&params, option_type) {
            Ok(v) => v,
            Err(e) => {
                eprintln!("pricing failed: {}", e);
                std::process::exit(1);
            }
        };
        let greeks = match bs_greeks(&params, option_type) {
            Ok(g) => g,
            Err(e) => {
                eprintln!("greeks failed: {}", e);
                std::process::exit(1);
            }
        };

        println!("=== {} ===", option_type);
        println!("Price:  {:.4}", value);
        println!("Delta:  {:.4}", greeks.delta);
        println!("Gamma:  {:.6}", greeks.gamma);
        println!("Vega:   {:.4}", greeks.vega);
        println!("Theta:  {:.4}", greeks.theta);
        println!("Rho:    {:.4}\n", greeks.rho);
    }

    // Put-call parity check: C - P = S - K*e^(-rT)
    let call = bs_price(&params, OptionType::Call).unwrap();
    let put = bs_price(&params, OptionType::Put).unwrap();
    let parity_rhs = params.spot - params.strike * params.discount_factor();
    println!("Put-Call Parity Check:");
    println!("  C - P           = {:.6}", call - put);
    println!("  S - K*e^(-rT)   = {:.6}", parity_rhs);
    println!("  Difference      = {:.2e}", (call - put - parity_rhs).abs());
}
