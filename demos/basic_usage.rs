// ============================================================================
// Basic Usage Example
// ============================================================================
//
// Run with `RUST_LOG=sd59x18=debug` to see rejected operations logged.

use sd59x18::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== SD59x18 Example ===\n");

    let x: SD59x18 = "2.5".parse().unwrap();
    let y = SD59x18::from_integer(-3);

    println!("x = {}", x);
    println!("y = {}", y);
    println!("raw(x) = {}", x.raw_value());

    // Rounding
    println!("\n=== Rounding ===");
    let z: SD59x18 = "-7.25".parse().unwrap();
    println!("floor({}) = {}", z, z.floor().unwrap());
    println!("ceil({})  = {}", z, z.ceil().unwrap());
    println!("frac({})  = {}", z, z.frac());
    println!("abs({})   = {}", z, z.abs().unwrap());
    println!("avg({}, {}) = {}", x, y, x.avg(y));

    // Arithmetic
    println!("\n=== Arithmetic ===");
    println!("x * y = {}", x.mul(y).unwrap());
    println!("x / y = {}", x.div(y).unwrap());
    println!("1 / x = {}", x.inv().unwrap());
    println!("gm(x, 10) = {}", x.gm(SD59x18::from_integer(10)).unwrap());

    // Logarithms and exponentials
    println!("\n=== Transcendentals ===");
    println!("log2(x)  = {}", x.log2().unwrap());
    println!("ln(x)    = {}", x.ln().unwrap());
    println!("log10(x) = {}", x.log10().unwrap());
    println!("exp2(x)  = {}", x.exp2().unwrap());
    println!("exp(x)   = {}", x.exp().unwrap());
    println!("exp(y)   = {}", y.exp().unwrap());

    // Powers
    println!("\n=== Powers ===");
    println!("x ^ 1.5  = {}", x.pow("1.5".parse().unwrap()).unwrap());
    println!("x ^ 7    = {}", x.powu(U256::new(7)).unwrap());
    println!("y ^ 3    = {}", y.powu(U256::new(3)).unwrap());

    // Raw integer primitives
    println!("\n=== Raw Integers ===");
    println!("sqrt(1e36) = {}", sqrt(SD59x18::ONE.raw_value() * SD59x18::ONE.raw_value()).unwrap());
    println!("msb(1024)  = {}", most_significant_bit(U256::new(1024)).unwrap());

    // Rejected operations return errors and emit a debug event
    println!("\n=== Rejections ===");
    println!("log2({}) -> {:?}", y, y.log2());
    println!("exp2(200) -> {:?}", SD59x18::from_integer(200).exp2());
    println!("abs(MIN)  -> {:?}", SD59x18::MIN.abs());
}
