use anyhow::Result;
use tempfile::TempDir;
use vax_planner::core::Storage;
use vax_planner::{LocalStorage, PlannerConfig};

const CONFIG: &str = r#"
[planner]
name = "end-to-end"
reference_year = 2021

[intervals]
breaks = [40, 60]

[schedule]
hours = [1, 1, 0, 0, 0, 0, 0]

[allocation]
priority_percent = 40

[[hubs]]
name = "Centro"
doctors = 1
nurses = 1
other = 1

[[hubs]]
name = "Periferia"

[input]
people = "people.csv"

[output]
path = "out/plan.json"
"#;

fn people_csv() -> String {
    let mut csv = String::from("SSN,LAST,FIRST,YEAR\n");
    for i in 0..10 {
        csv.push_str(&format!("OLD{:02},Anziano,Nome,{}\n", i, 1940 + i));
    }
    for i in 0..10 {
        csv.push_str(&format!("MID{:02},Medio,Nome,{}\n", i, 1970 + i));
    }
    for i in 0..10 {
        csv.push_str(&format!("YNG{:02},Giovane,Nome,{}\n", i, 1995 + i));
    }
    csv.push_str("BROKEN,Line\n");
    csv
}

#[test]
fn test_config_to_plan_and_report() -> Result<()> {
    let dir = TempDir::new()?;
    let storage = LocalStorage::new(dir.path().to_str().unwrap());
    storage.write_file("planner.toml", CONFIG.as_bytes())?;
    storage.write_file("people.csv", people_csv().as_bytes())?;

    let config = PlannerConfig::from_file(dir.path().join("planner.toml"))?;
    vax_planner::utils::validation::Validate::validate(&config)?;
    let mut planner = config.build_planner()?;

    let people = storage.read_file(config.people_path())?;
    assert_eq!(planner.load_people(people.as_slice())?, 30);

    let plan = planner.allocate_week().clone();
    // Centro: 10 seats on Monday and Tuesday; Periferia has no staff
    assert_eq!(plan.total_allocated(), 20);
    assert_eq!(plan.hub_day("Centro", 0).len(), 10);
    assert_eq!(plan.hub_day("Centro", 1).len(), 10);
    assert!(plan.hub_day("Periferia", 0).is_empty());

    // Monday: 4 old, 2 middle, 1 young in the priority pass, then 3 old
    let monday = plan.hub_day("Centro", 0);
    assert_eq!(monday.iter().filter(|s| s.starts_with("OLD")).count(), 7);
    assert_eq!(monday.iter().filter(|s| s.starts_with("MID")).count(), 2);
    assert_eq!(monday.iter().filter(|s| s.starts_with("YNG")).count(), 1);

    let report = planner.report();
    assert_eq!(report.people, 30);
    assert_eq!(report.allocated, 20);
    assert!((report.overall_proportion - 20.0 / 30.0).abs() < 1e-10);
    assert!(report.availability["Periferia"].is_empty());
    assert_eq!(report.availability["Centro"], vec![10, 10, 0, 0, 0, 0, 0]);
    let distribution_sum: f64 = report.distribution.values().sum();
    assert!((distribution_sum - 1.0).abs() < 1e-10);

    let detailed = planner.detailed_schedule();
    assert_eq!(detailed[0]["Centro"].len(), 4);
    assert_eq!(detailed[0]["Centro"]["09:00"].len(), 3);

    let json = serde_json::to_vec_pretty(&serde_json::json!({
        "plan": &plan,
        "report": &report,
    }))?;
    storage.write_file(config.output_path().unwrap(), &json)?;
    let written: serde_json::Value =
        serde_json::from_slice(&storage.read_file("out/plan.json")?)?;
    assert_eq!(written["report"]["allocated"], 20);
    assert_eq!(written["plan"]["days"].as_array().unwrap().len(), 7);
    Ok(())
}
