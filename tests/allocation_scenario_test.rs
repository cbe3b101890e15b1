use anyhow::Result;
use std::collections::HashSet;
use vax_planner::VaccinationPlanner;

const YEAR: i32 = 2021;

fn scenario_planner() -> Result<VaccinationPlanner> {
    let mut planner = VaccinationPlanner::with_reference_year(YEAR);
    planner.define_intervals(&[40, 60])?;
    planner.define_hub("Hub1")?;
    planner.set_staff("Hub1", 2, 2, 2)?;
    planner.set_hours(&[6, 0, 0, 0, 0, 0, 0])?;
    Ok(planner)
}

fn add_people(planner: &mut VaccinationPlanner, prefix: &str, count: usize, age: i32) -> Result<()> {
    for i in 0..count {
        planner.add_person("First", "Last", &format!("{}{:05}", prefix, i), YEAR - age)?;
    }
    Ok(())
}

#[test]
fn test_two_hundred_seniors_fill_one_hundred_twenty_seats() -> Result<()> {
    let mut planner = scenario_planner()?;
    add_people(&mut planner, "S", 200, 65)?;

    assert_eq!(planner.hourly_capacity("Hub1")?, 20);
    assert_eq!(planner.daily_available("Hub1", 0)?, 120);

    let before: HashSet<String> = planner.members_of("[60,+)").into_iter().collect();
    let day = planner.allocate_day("Hub1", 0);

    assert_eq!(day.len(), 120);
    let unique: HashSet<&String> = day.iter().collect();
    assert_eq!(unique.len(), 120);
    assert!(day.iter().all(|ssn| before.contains(ssn)));
    assert!((planner.overall_proportion_allocated() - 0.6).abs() < 1e-10);
    Ok(())
}

#[test]
fn test_priority_pass_shares_between_two_brackets() -> Result<()> {
    let mut planner = VaccinationPlanner::with_reference_year(YEAR);
    planner.define_intervals(&[50])?;
    planner.define_hub("Hub1")?;
    planner.set_staff("Hub1", 2, 2, 2)?;
    planner.set_hours(&[6, 0, 0, 0, 0, 0, 0])?;
    add_people(&mut planner, "OLD", 500, 75)?;
    add_people(&mut planner, "YNG", 500, 25)?;

    let n = planner.daily_available("Hub1", 0)? as usize;
    let day = planner.allocate_day("Hub1", 0);

    let from_old = n * 4 / 10;
    let from_young = (n - from_old) * 4 / 10;
    assert!(day[..from_old].iter().all(|s| s.starts_with("OLD")));
    assert!(day[from_old..from_old + from_young]
        .iter()
        .all(|s| s.starts_with("YNG")));
    assert_eq!(day.len(), n);
    Ok(())
}

#[test]
fn test_week_plan_respects_daily_capacity() -> Result<()> {
    let mut planner = VaccinationPlanner::with_reference_year(YEAR);
    planner.define_intervals(&[30, 50, 70])?;
    for (name, staff) in [("Alpha", (3, 2, 1)), ("Beta", (1, 5, 5)), ("Gamma", (4, 4, 4))] {
        planner.define_hub(name)?;
        planner.set_staff(name, staff.0, staff.1, staff.2)?;
    }
    planner.define_hub("Closed")?;
    planner.set_hours(&[4, 8, 0, 12, 2, 1, 0])?;
    add_people(&mut planner, "A", 300, 80)?;
    add_people(&mut planner, "B", 300, 60)?;
    add_people(&mut planner, "C", 300, 40)?;
    add_people(&mut planner, "D", 300, 20)?;

    let plan = planner.allocate_week().clone();
    let mut seen = HashSet::new();
    for (day, hubs) in plan.days.iter().enumerate() {
        assert_eq!(hubs.len(), 4);
        for (hub, ssns) in hubs {
            let seats = planner.daily_available(hub, day).unwrap_or(0) as usize;
            assert!(ssns.len() <= seats, "{} day {}", hub, day);
            for ssn in ssns {
                assert!(seen.insert(ssn.clone()), "{} allocated twice", ssn);
            }
        }
        assert!(hubs["Closed"].is_empty());
    }

    assert_eq!(plan.total_allocated(), seen.len());
    assert_eq!(planner.plan_total(), seen.len());
    Ok(())
}

#[test]
fn test_reset_then_reallocate_gives_same_counts() -> Result<()> {
    let mut planner = scenario_planner()?;
    planner.set_hours(&[6, 2, 0, 0, 1, 0, 0])?;
    add_people(&mut planner, "A", 100, 70)?;
    add_people(&mut planner, "B", 100, 45)?;
    add_people(&mut planner, "C", 100, 18)?;

    planner.reset_allocations();
    let first = planner.allocate_week().clone();
    let first_distribution = planner.distribution_of_allocated();

    planner.reset_allocations();
    assert_eq!(planner.overall_proportion_allocated(), 0.0);
    assert!(planner.members_of("[60,+)").iter().all(|ssn| planner
        .person(ssn)
        .map(|p| p.available())
        .unwrap_or(false)));

    let second = planner.allocate_week().clone();
    for day in 0..7 {
        assert_eq!(
            first.hub_day("Hub1", day).len(),
            second.hub_day("Hub1", day).len()
        );
    }
    assert_eq!(first, second);
    assert_eq!(first_distribution, planner.distribution_of_allocated());
    Ok(())
}

#[test]
fn test_new_people_join_later_allocations() -> Result<()> {
    let mut planner = scenario_planner()?;
    add_people(&mut planner, "A", 100, 70)?;
    assert_eq!(planner.allocate_week().total_allocated(), 100);

    add_people(&mut planner, "Z", 30, 90)?;
    let plan = planner.allocate_week();
    assert_eq!(plan.total_allocated(), 30);
    assert!(plan.hub_day("Hub1", 0).iter().all(|s| s.starts_with('Z')));
    Ok(())
}
