//! # Spindle CLI Application
//!
//! Terminal front end for the shaft bearing selector. Prompts for the load,
//! geometry, and operating parameters, then prints the bearing reactions and
//! the selected catalog designations.
//!
//! This is illustrative plumbing around `bearing_core::calculate`; the
//! library call is the actual contract.

use std::io::{self, BufRead, Write};

use bearing_core::calculations::shaft::{calculate, ShaftInput};

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn main() {
    println!("Spindle CLI - Shaft Bearing Selector");
    println!("====================================");
    println!();
    println!("Press Enter to accept the bracketed default for each value.");
    println!();

    let input = ShaftInput {
        speed_rpm: prompt_f64("Shaft speed (rev/min) [1500]: ", 1500.0),
        belt_tension_1_n: prompt_f64("Belt tension P1 (N) [100]: ", 100.0),
        belt_tension_2_n: prompt_f64("Belt tension P2 (N) [50]: ", 50.0),
        tangential_force_n: prompt_f64("Gear tangential force Pt (N) [200]: ", 200.0),
        radial_force_n: prompt_f64("Gear radial force Pr (N) [100]: ", 100.0),
        pulley_weight_n: prompt_f64("Pulley weight (N) [50]: ", 50.0),
        life_factor: prompt_f64("Life factor [1.2]: ", 1.2),
        life_hours: prompt_f64("Bearing life (hours) [20000]: ", 20_000.0),
        bearing1_to_gear_mm: prompt_f64("Bearing 1 to gear (mm) [100]: ", 100.0),
        gear_to_bearing2_mm: prompt_f64("Gear to bearing 2 (mm) [150]: ", 150.0),
        bearing2_to_pulley_mm: prompt_f64("Bearing 2 to pulley (mm) [50]: ", 50.0),
    };

    println!();
    println!("Calculating bearing reactions...");
    println!();

    match calculate(&input) {
        Ok(result) => {
            println!("═══════════════════════════════════════");
            println!("  BEARING SELECTION RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Input:");
            println!("  Speed:     {:.0} rev/min", input.speed_rpm);
            println!("  Belt pull: {:.0} N (P1={:.0}, P2={:.0})",
                input.belt_force_total_n(),
                input.belt_tension_1_n,
                input.belt_tension_2_n
            );
            println!("  Gear:      Pt={:.0} N, Pr={:.0} N", input.tangential_force_n, input.radial_force_n);
            println!("  Span:      {:.0} mm (pulley at {:.0} mm)",
                input.bearing_span_mm(),
                input.pulley_offset_mm()
            );
            println!("  Life:      {:.0} h ({:.0} million rev)", input.life_hours, input.life_revolutions_millions());
            println!();
            println!("Vertical Reactions:");
            println!("  Rv1 = {:.4} N", result.vertical_reaction_1_n);
            println!("  Rv2 = {:.4} N", result.vertical_reaction_2_n);
            println!();
            println!("Horizontal Reactions:");
            println!("  Rh1 = {:.4} N", result.horizontal_reaction_1_n);
            println!("  Rh2 = {:.4} N", result.horizontal_reaction_2_n);
            println!();
            println!("Resultant Loads:");
            println!("  R1 = {:.4} N", result.resultant_load_1_n);
            println!("  R2 = {:.4} N", result.resultant_load_2_n);
            println!();
            println!("Required Dynamic Ratings:");
            println!("  C1 = {:.4} N", result.dynamic_capacity_1_n);
            println!("  C2 = {:.4} N", result.dynamic_capacity_2_n);
            println!();
            println!("═══════════════════════════════════════");
            println!("  Bearing 1: {}", result.bearing1_designation);
            println!("  Bearing 2: {}", result.bearing2_designation);
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output (for LLM/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result.rounded()) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}
