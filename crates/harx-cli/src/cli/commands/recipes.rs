//! `harx recipes` – list registered recipes.

use harx_core::config::HarxConfig;
use harx_core::recipe;

pub fn run_recipes(cfg: &HarxConfig) {
    for r in recipe::registry(cfg) {
        let marker = if cfg.recipes.iter().any(|n| n == r.name()) {
            "*"
        } else {
            " "
        };
        println!("{marker} {:<12} {}", r.name(), r.description());
    }
}
