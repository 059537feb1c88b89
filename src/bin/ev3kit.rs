//! ev3kit operator menu on the host.
//!
//! Builds the selected demo configuration on mock hardware and either lists
//! it, runs one entry, or starts the interactive console menu.
//!
//! Usage:
//!   cargo run --bin ev3kit -- [OPTIONS]
//!
//! Options:
//!   --config <NAME>       Configuration to load (default: $EV3KIT_CONFIG)
//!   --list                List configurations, or the entries of the selected one
//!   --run <PAGE:ENTRY>    Run one entry (names or indices) and exit
//!   --interval-ms <N>     Step interval while running (default: 20)

use std::env;
use std::process;
use std::time::Duration;

use ev3kit::config::{ConfigSelector, MenuTiming};
use ev3kit::logging::{init_logging, DEFAULT_FILTER};
use ev3kit::menu::{Catalog, ConsoleInput, MainMenu};
use ev3kit::platform::StdTime;
use ev3kit::{demo, driver, log_info};

struct Args {
    config: Option<String>,
    list: bool,
    run: Option<String>,
    interval_ms: u64,
}

fn parse_args() -> Args {
    let mut args = Args {
        config: None,
        list: false,
        run: None,
        interval_ms: 20,
    };

    let raw: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < raw.len() {
        match raw[i].as_str() {
            "--config" => {
                i += 1;
                args.config = Some(string_arg(&raw, i, "config"));
            }
            "--list" => args.list = true,
            "--run" => {
                i += 1;
                args.run = Some(string_arg(&raw, i, "run"));
            }
            "--interval-ms" => {
                i += 1;
                args.interval_ms = string_arg(&raw, i, "interval-ms")
                    .parse()
                    .unwrap_or_else(|_| {
                        eprintln!("Error: invalid value for --interval-ms");
                        process::exit(1);
                    });
            }
            "-h" | "--help" => {
                print_usage();
                process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {other}");
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    if args.interval_ms == 0 {
        eprintln!("Error: interval must be at least 1 ms");
        process::exit(1);
    }

    args
}

fn string_arg(raw: &[String], i: usize, name: &str) -> String {
    raw.get(i).cloned().unwrap_or_else(|| {
        eprintln!("Error: --{name} requires a value");
        process::exit(1);
    })
}

fn print_usage() {
    eprintln!(
        "Usage: ev3kit [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --config <NAME>       Configuration to load (default: $EV3KIT_CONFIG)\n\
         \x20 --list                List configurations, or the entries of the selected one\n\
         \x20 --run <PAGE:ENTRY>    Run one entry (names or indices) and exit\n\
         \x20 --interval-ms <N>     Step interval while running (default: 20)\n\
         \x20 -h, --help            Show this help"
    );
}

/// Resolve `page:entry`, each part a name or an index.
fn find_entry(catalog: &Catalog, spec: &str) -> Option<(usize, usize)> {
    let (page, entry) = spec.split_once(':')?;
    let page_idx = match page.parse::<usize>() {
        Ok(idx) => idx,
        Err(_) => catalog.pages().iter().position(|p| p.name() == page)?,
    };
    let entries = catalog.page(page_idx)?.entries();
    let entry_idx = match entry.parse::<usize>() {
        Ok(idx) => idx,
        Err(_) => entries.iter().position(|e| e.name() == entry)?,
    };
    (entry_idx < entries.len()).then_some((page_idx, entry_idx))
}

fn print_catalog(catalog: &Catalog) {
    for (p, page) in catalog.pages().iter().enumerate() {
        println!("{p}: {}", page.name());
        for (e, entry) in page.entries().iter().enumerate() {
            println!("  {p}:{e} {}", entry.name());
        }
    }
}

fn main() {
    let args = parse_args();
    init_logging(DEFAULT_FILTER);

    let registry = demo::registry();
    let selector = ConfigSelector::from_env(args.config.clone());

    if args.list && selector.resolve().is_err() {
        for name in registry.names() {
            println!("{name}");
        }
        return;
    }

    let mut catalog = selector.select(&registry).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        eprintln!("Available: {}", registry.names().collect::<Vec<_>>().join(", "));
        process::exit(1);
    });

    if args.list {
        print_catalog(&catalog);
        return;
    }

    let interval = Duration::from_millis(args.interval_ms);

    if let Some(spec) = &args.run {
        let Some((page, entry)) = find_entry(&catalog, spec) else {
            eprintln!("Error: no entry {spec}");
            print_catalog(&catalog);
            process::exit(1);
        };
        let Some(selected) = catalog.entry_mut(page, entry) else {
            process::exit(1);
        };
        let name = selected.name().to_string();
        let report = driver::run_at_fixed_interval(selected.task_mut(), interval);
        log_info!(
            "{} took {:?} ({} ticks, {} overruns, max step {} us)",
            name,
            report.elapsed(),
            report.stats.ticks,
            report.stats.overruns,
            report.stats.max_step_us
        );
        return;
    }

    println!("=== ev3kit ===");
    println!("j/k entry, h/l page, <n> entry, p<n> page, enter run, c cancel, q quit");

    let timing = MenuTiming {
        run_interval: interval,
        ..Default::default()
    };
    let mut menu = MainMenu::new(ConsoleInput::spawn_stdin(), catalog, StdTime::new())
        .with_timing(timing);
    menu.start();
}
