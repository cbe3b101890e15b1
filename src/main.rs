use clap::Parser;
use serde::Serialize;
use std::cell::Cell;
use std::rc::Rc;
use vax_planner::config::toml_config::OutputConfig;
use vax_planner::core::Storage;
use vax_planner::utils::{logger, validation::Validate};
use vax_planner::{
    AllocationReport, CliConfig, DetailedSchedule, LocalStorage, PlannerConfig, Result, WeekPlan,
};

#[derive(Serialize)]
struct PlanOutput<'a> {
    planner: &'a str,
    plan: &'a WeekPlan,
    report: AllocationReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    detailed: Option<DetailedSchedule>,
}

fn main() {
    let args = CliConfig::parse();

    // 初始化日誌
    if args.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting vax-planner");
    if args.verbose {
        tracing::debug!("CLI config: {:?}", args);
    }

    if let Err(e) = run(&args) {
        tracing::error!("❌ Planning failed: {} (Category: {:?})", e, e.category());
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(args: &CliConfig) -> Result<()> {
    args.validate()?;

    // 載入 TOML 配置並套用命令列覆蓋設定
    tracing::info!("📁 Loading configuration from: {}", args.config);
    let mut config = PlannerConfig::from_file(&args.config)?;
    if let Some(people) = &args.people {
        config.input.people = people.clone();
    }
    if let Some(output) = &args.output {
        config
            .output
            .get_or_insert(OutputConfig {
                path: None,
                pretty: None,
                detailed: None,
            })
            .path = Some(output.clone());
    }
    config.validate()?;

    let mut planner = config.build_planner()?;

    let rejected = Rc::new(Cell::new(0usize));
    let counter = Rc::clone(&rejected);
    planner.set_load_listener(move |_line: usize, _raw: &str| counter.set(counter.get() + 1));

    let storage = LocalStorage::new(".");
    let people = storage.read_file(config.people_path())?;
    let added = planner.load_people(people.as_slice())?;
    tracing::info!(
        "👥 {} people added from {} ({} lines rejected)",
        added,
        config.people_path(),
        rejected.get()
    );

    planner.allocate_week();
    let report = planner.report();
    tracing::info!(
        "📊 Allocated {} of {} people ({:.1}%)",
        report.allocated,
        report.people,
        report.overall_proportion * 100.0
    );
    for (interval, share) in &report.distribution {
        tracing::info!("   {} -> {:.1}% of allocations", interval, share * 100.0);
    }

    let detailed = (args.detailed || config.detailed_output()).then(|| planner.detailed_schedule());
    let output = PlanOutput {
        planner: &config.planner.name,
        plan: planner.week_plan(),
        report,
        detailed,
    };
    let json = if config.pretty_output() {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };

    match config.output_path() {
        Some(path) => {
            storage.write_file(path, json.as_bytes())?;
            tracing::info!("📁 Plan saved to: {}", path);
        }
        None => println!("{}", json),
    }

    Ok(())
}
