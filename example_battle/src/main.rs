//! Example battle - a minimal runner demonstrating fleet_core
//!
//! This runner shows:
//! - Building fleets from the default archetype catalog
//! - Advancing upgradeable ships
//! - Analyzing a single fleet's hit output (simulation + normal blocks)
//! - Simulating a full matchup with a seeded RNG

use fleet_core::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::error::Error;

const SIMULATIONS: u32 = 10_000;
const TRIALS: u64 = 10_000;

fn main() -> Result<(), Box<dyn Error>> {
    let catalog = default_catalog();
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    // Strike force: a dreadnought with an upgraded escort and fighter screen
    let mut strike_force = Fleet::new();
    strike_force.push(catalog.build(ShipClass::Dreadnought)?);
    strike_force.push(catalog.build(ShipClass::Cruiser)?.advance()?);
    strike_force.push(catalog.build(ShipClass::Cruiser)?);
    strike_force.push(catalog.build(ShipClass::Fighter)?);
    strike_force.push(catalog.build(ShipClass::Fighter)?);
    strike_force.push(catalog.build(ShipClass::Fighter)?);

    // Home guard: capital ships behind a destroyer picket
    let mut home_guard = Fleet::new();
    home_guard.push(catalog.build(ShipClass::Flagship)?);
    home_guard.push(catalog.build(ShipClass::Destroyer)?);
    home_guard.push(catalog.build(ShipClass::Carrier)?);

    println!("Strike force: {}", strike_force.roster().join(", "));
    println!("Home guard:   {}", home_guard.roster().join(", "));
    println!();

    let analysis = analyze_fleet_with_rng(&strike_force, SIMULATIONS, true, &mut rng)?;
    println!("{}\n", analysis.summary());

    let report = simulate_battle_with_rng(&strike_force, &home_guard, TRIALS, &mut rng)?;
    println!("{}", report.summary());

    Ok(())
}
