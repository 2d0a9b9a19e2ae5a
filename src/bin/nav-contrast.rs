//! nav-contrast - replay a recorded navbar scene through the classifier.
//!
//! Prints every sample point, the aggregate decision and the classes each
//! navbar element ends up with. Useful when tuning the constants in a TOML
//! override before shipping them in `data-nav-contrast`.

use anyhow::{anyhow, Result};
use serde::Serialize;

use folio_site::contrast::{Decision, NavContrast, Outcome, SamplePoint};
use folio_site::scene::Scene;
use folio_site::{config, debug};

#[derive(Serialize)]
struct Report<'a> {
    scene: &'a str,
    outcome: &'static str,
    scheme: Option<String>,
    decision: Option<&'a Decision>,
    points: &'a [SamplePoint],
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    debug::init_from_url_and_storage_once();

    let cfg = config::load()?;
    if !cfg.json {
        cfg.print_summary();
    }

    let mut scene = Scene::load(&cfg.scene)?;
    let name = if scene.name.is_empty() {
        cfg.scene.display().to_string()
    } else {
        scene.name.clone()
    };

    let mut contrast = NavContrast::new(cfg.contrast.clone());
    let outcome = contrast.trigger(scene.locate());

    let (kind, decision) = match &outcome {
        Outcome::Skipped => ("skipped", None),
        Outcome::Kept(_) => ("kept", None),
        Outcome::Decided(d) => ("decided", Some(d)),
    };
    let points: &[SamplePoint] = decision.map(|d| d.points.as_slice()).unwrap_or_default();

    if cfg.json {
        let report = Report {
            scene: &name,
            outcome: kind,
            scheme: outcome.scheme().map(|s| s.to_string()),
            decision,
            points,
        };
        let out = serde_json::to_string_pretty(&report)
            .map_err(|e| anyhow!("serializing report: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    println!("Scene: {name}");
    println!(
        "{:<14} {:<24} {:>7} {:>7} {:<11} {:>6} {:>6}  dark",
        "role", "label", "x", "y", "surface", "bg", "eff"
    );
    for p in points {
        println!(
            "{:<14} {:<24} {:>7.1} {:>7.1} {:<11} {:>6.1} {:>6.1}  {}",
            format!("{:?}", p.role),
            p.label,
            p.x,
            p.y,
            p.surface_kind.unwrap_or("none"),
            p.background,
            p.effective,
            if p.is_dark { "yes" } else { "no" }
        );
    }

    match &outcome {
        Outcome::Skipped => println!("Navbar or mobile menu missing: nothing applied"),
        Outcome::Kept(s) => println!("No visible targets: kept {s}"),
        Outcome::Decided(d) => println!(
            "{}/{} dark ({:.1}%), average {:.1} -> {}",
            d.dark_count, d.total, d.dark_percent, d.average, d.scheme
        ),
    }

    if let Some(nav) = scene.navbar.as_ref() {
        println!();
        for t in &nav.targets {
            println!("{:<14} {:<24} {}", format!("{:?}", t.role), t.label, t.classes);
        }
    }
    Ok(())
}
