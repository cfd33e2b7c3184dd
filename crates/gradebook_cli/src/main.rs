//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `gradebook_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use gradebook_core::{compute_cgpa, total_credits, Grade, Subject};

fn main() {
    // Tiny probe to validate core crate wiring independently from any host
    // UI runtime setup.
    println!("gradebook_core ping={}", gradebook_core::ping());
    println!("gradebook_core version={}", gradebook_core::core_version());

    let sample = [
        Subject::new("Algorithms", 3, Grade::A),
        Subject::new("Databases", 4, Grade::B),
    ];
    println!(
        "gradebook_core sample cgpa={:.2} credits={}",
        compute_cgpa(&sample),
        total_credits(&sample)
    );
}
