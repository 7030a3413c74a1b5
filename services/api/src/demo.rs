use crate::infra::{parse_date, sample_roster, InMemoryEmployeeStore};
use chrono::NaiveDate;
use clap::Args;
use employee_registry::directory::{Employee, EmployeeId, EmployeeRegistry, Position};
use employee_registry::error::AppError;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Hire date for the extra coordinator the demo admits (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) hire_date: Option<NaiveDate>,
    /// Print each roster listing as a full JSON payload
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { hire_date, json } = args;

    let store = Arc::new(InMemoryEmployeeStore::default());
    let registry = EmployeeRegistry::new(store);

    println!("Employee registry demo");
    println!("\nAdmitting sample roster");
    for record in sample_roster() {
        match registry.insert(record.clone()) {
            Ok(stored) => println!(
                "- {} {} ({}, age {}, {} days annual leave)",
                stored.id,
                stored.name,
                stored.position.label(),
                stored.age,
                stored.annual_leave
            ),
            Err(err) => println!("- {} rejected: {err}", record.id),
        }
    }

    let mut extra = sample_roster().remove(1);
    extra.id = EmployeeId("E104".to_string());
    extra.name = "Lamyaa".to_string();
    extra.email = "lamyaa@example.com".to_string();
    extra.age = 31;
    if let Some(date) = hire_date {
        extra.hire_date = date;
    }

    println!("\nAdmitting one more coordinator");
    match registry.insert(extra) {
        Ok(stored) => println!("- {} {} admitted", stored.id, stored.name),
        Err(err) => println!("- rejected: {err}"),
    }

    println!("\nValidator in action (bad phone number)");
    let mut invalid = sample_roster().remove(2);
    invalid.id = EmployeeId("E105".to_string());
    invalid.phone_number = "12345".to_string();
    match registry.insert(invalid) {
        Ok(_) => println!("- unexpectedly admitted"),
        Err(err) => println!("- rejected as expected: {err}"),
    }

    render_roster(&registry, json, "Current roster");

    println!("\nCoordinators on the roster");
    match registry.filter_by_position(Position::Coordinator) {
        Ok(matches) => print_records(&matches),
        Err(err) => println!("- {err}"),
    }

    println!("\nEmployees aged 30 to 55");
    match registry.filter_by_age_range(30, 55) {
        Ok(matches) => print_records(&matches),
        Err(err) => println!("- {err}"),
    }

    println!("\nAnnual leave workflow for E103 (one day remaining)");
    let yousef = EmployeeId("E103".to_string());
    match registry.apply_annual_leave(&yousef) {
        Ok(updated) => println!(
            "- applied; on leave = {}, balance = {}",
            updated.on_leave, updated.annual_leave
        ),
        Err(err) => println!("- rejected: {err}"),
    }
    match registry.apply_annual_leave(&yousef) {
        Ok(_) => println!("- second application unexpectedly accepted"),
        Err(err) => println!("- second application rejected: {err}"),
    }

    println!("\nEmployees with no annual leave remaining");
    match registry.exhausted_leave() {
        Ok(matches) => print_records(&matches),
        Err(err) => println!("- {err}"),
    }

    println!("\nPromotion workflow");
    let supervisor = EmployeeId("S100".to_string());
    match registry.promote(&supervisor, &EmployeeId("E102".to_string())) {
        Ok(promoted) => println!("- {} is now a {}", promoted.id, promoted.position.label()),
        Err(err) => println!("- promotion rejected: {err}"),
    }
    match registry.promote(&supervisor, &EmployeeId("E101".to_string())) {
        Ok(promoted) => println!("- {} is now a {}", promoted.id, promoted.position.label()),
        Err(err) => println!("- E101 promotion rejected: {err}"),
    }
    match registry.promote(&EmployeeId("E104".to_string()), &EmployeeId("E101".to_string())) {
        Ok(_) => println!("- coordinator-authorized promotion unexpectedly accepted"),
        Err(err) => println!("- coordinator-authorized promotion rejected: {err}"),
    }

    println!("\nRemoving E104");
    match registry.delete(&EmployeeId("E104".to_string())) {
        Ok(()) => println!("- removed"),
        Err(err) => println!("- removal failed: {err}"),
    }

    render_roster(&registry, json, "Final roster");

    Ok(())
}

fn render_roster(
    registry: &EmployeeRegistry<InMemoryEmployeeStore>,
    json: bool,
    heading: &str,
) {
    println!("\n{heading}");
    match registry.list() {
        Ok(records) if json => match serde_json::to_string_pretty(&records) {
            Ok(payload) => println!("{payload}"),
            Err(err) => println!("- payload unavailable: {err}"),
        },
        Ok(records) => print_records(&records),
        Err(err) => println!("- roster unavailable: {err}"),
    }
}

fn print_records(records: &[Employee]) {
    for record in records {
        println!(
            "- {} {} | {} | age {} | on leave: {} | annual leave: {}",
            record.id,
            record.name,
            record.position.label(),
            record.age,
            record.on_leave,
            record.annual_leave
        );
    }
}
