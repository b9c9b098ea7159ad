use colored::Colorize;
use serde::Serialize;
use tabled::builder::Builder;
use tabled::settings::Style;

use kidscare_core::{PatientSummary, VaccineRecord};

use crate::cli::OutputFormat;

pub fn print_success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

pub fn print_vaccines(records: &[VaccineRecord], format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(records),
        OutputFormat::Table => {
            if records.is_empty() {
                println!("No vaccine records found.");
                return;
            }
            let mut builder = Builder::default();
            builder.push_record(["Name", "Dose", "Route", "Date", "Details"]);
            for record in records {
                builder.push_record([
                    record.name.as_str(),
                    record.dose.as_str(),
                    record.route.as_str(),
                    record.date.as_str(),
                    record.details.as_str(),
                ]);
            }
            println!("{}", builder.build().with(Style::rounded()));
        }
    }
}

pub fn print_patients(patients: &[PatientSummary], format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(patients),
        OutputFormat::Table => {
            if patients.is_empty() {
                println!("No patients found.");
                return;
            }
            let mut builder = Builder::default();
            builder.push_record(["ID", "Name", "Index"]);
            for patient in patients {
                builder.push_record([
                    patient.id.as_str(),
                    patient.name.as_str(),
                    patient.index.as_str(),
                ]);
            }
            println!("{}", builder.build().with(Style::rounded()));
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(err) => print_error(&format!("Failed to render JSON: {err}")),
    }
}
