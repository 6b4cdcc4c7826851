use log::*;
use std::env;
use std::path::PathBuf;
use std::process::exit;

use timetable_grid::config::*;
use timetable_grid::error::*;
use timetable_grid::layout::*;
use timetable_grid::load_summary::*;
use timetable_grid::occupancy::*;
use timetable_grid::render::*;
use timetable_grid::storage::*;
use timetable_grid::Occupant;

const DEFAULT_CONFIG_PATH: &str = "./grid.ron";
const COLUMN_WIDTH: usize = 22;

const USAGE: &str = "usage: timetable-grid <assignments.json> [config.ron] [--json <plan.json>]";

struct Args {
    assignments_path: PathBuf,
    config_path: PathBuf,
    json_out: Option<PathBuf>,
}

fn parse_args() -> Option<Args> {
    let mut positional = Vec::new();
    let mut json_out = None;

    let mut args = env::args().skip(1);

    while let Some(arg) = args.next() {
        if arg == "--json" {
            json_out = Some(PathBuf::from(args.next()?));
        } else if arg == "-h" || arg == "--help" {
            return None;
        } else {
            positional.push(PathBuf::from(arg));
        }
    }

    let mut positional = positional.into_iter();

    Some(Args {
        assignments_path: positional.next()?,
        config_path: positional
            .next()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH)),
        json_out,
    })
}

fn run(args: Args) -> Result<()> {
    let config = load_config(&args.config_path)?;

    let assignments = load_assignments(&args.assignments_path)?;
    let slots = config.slots();

    for overlap in find_overlaps(&assignments, &config.days, &slots) {
        let titles = overlap
            .occupants
            .iter()
            .map(|a| a.get_title())
            .collect::<Vec<&str>>()
            .join(", ");

        warn!(
            "Double booking on {} at {}: {} (only the first is drawn)",
            overlap.day,
            slots[overlap.slot_index].get_label(),
            titles
        );
    }

    let plan = layout(&assignments, &config.days, &slots);

    let hidden = assignments
        .iter()
        .filter(|a| {
            !origin_cells(&plan)
                .any(|cell| cell.occupant.map_or(false, |o| std::ptr::eq(o, *a)))
        })
        .count();

    if hidden > 0 {
        info!("{} assignment(s) have no visible block on this grid", hidden);
    }

    println!("{}", render_grid(&plan, &slots, &config.days, COLUMN_WIDTH));
    println!();

    for assignment in &assignments {
        let summary = LoadSummary::new_from_assignment(assignment);
        println!(
            "{:<30} {:<12} {}",
            summary.title,
            summary.section,
            summary.get_weekly_hours_str()
        );
    }

    let occupancy = compute_minute_occupancy(&assignments, &config.days);
    info!("Peak concurrent bookings: {}", peak_concurrency(&occupancy));

    if let Some(path) = args.json_out {
        save_draw_plan(&path, &plan)?;
    }

    Ok(())
}

fn main() {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let args = match parse_args() {
        Some(args) => args,
        None => {
            eprintln!("{}", USAGE);
            exit(2);
        }
    };

    info!("Rendering timetable for {}", args.assignments_path.display());

    if let Err(e) = run(args) {
        error!("{}", e);
        exit(1);
    }
}
