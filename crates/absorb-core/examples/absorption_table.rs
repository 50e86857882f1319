//! Prints octave-band absorption of the default layer under both models.
//!
//! Run with:
//!   cargo run -p absorb-core --example absorption_table

use absorb_core::{
    effective_medium_absorption, empirical_absorption, AcousticEnvironment, MaterialParameters,
};

fn main() {
    println!("=== Rigid-backed absorption ===");

    let env = AcousticEnvironment::default();
    let material = MaterialParameters::default();
    println!(
        "d = {} mm, sigma = {} Pa·s/m², phi = {}, tortuosity = {}",
        material.thickness * 1e3,
        material.flow_resistivity,
        material.porosity,
        material.tortuosity
    );

    let bands = [125.0, 250.0, 500.0, 1000.0, 2000.0, 4000.0, 8000.0];
    let miki = empirical_absorption(&env, &bands, material.thickness, material.flow_resistivity);
    let jca = effective_medium_absorption(&env, &bands, &material, env.fluid());

    println!("{:>8}  {:>8}  {:>8}", "f (Hz)", "Miki", "JCA");
    for ((f, a), b) in bands.iter().zip(&miki).zip(&jca) {
        println!("{f:>8.0}  {a:>8.3}  {b:>8.3}");
    }
}
