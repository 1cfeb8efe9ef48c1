//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `daykeep_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use daykeep_core::{contrasting_text_color, resolve_color, Category, WCAG_AA};

fn main() {
    println!("daykeep_core version={}", daykeep_core::core_version());
    for category in Category::ALL {
        let tint = resolve_color(category.meta().tint);
        let text = contrasting_text_color(tint, WCAG_AA).color();
        println!(
            "tab={} tint={} text={}",
            category.as_str(),
            tint.to_hex(),
            text.to_hex()
        );
    }
}
