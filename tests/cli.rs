//! E2E tests for the fairprice commands

use std::process::{Command, Output};

fn fairprice(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fairprice"))
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// Test the default quote, which matches the single storey example
#[test]
fn quote_defaults() {
    let output = fairprice(&["quote"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("Victoria (VIC)"));
    assert!(stdout.contains("$1,105,500.00"));
    assert!(stdout.contains("$60,802.50"));
    assert!(stdout.contains("Disclaimer"));
}

/// Test JSON output for a property priced per floor
#[test]
fn quote_json_per_floor() {
    let output = fairprice(&[
        "quote",
        "--land-area",
        "1",
        "--floor-areas",
        "1",
        "--state",
        "nt",
        "--json",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    let result = &json["result"];
    assert_eq!(result["jurisdiction"], "NT");
    assert_eq!(result["fair_price"].as_str().unwrap().parse::<f64>().unwrap(), 5500.0);
    assert_eq!(result["stamp_duty"].as_str().unwrap().parse::<f64>().unwrap(), 275.0);
}

/// Zero values are rejected rather than producing a zero price
#[test]
fn quote_rejects_zero_land_area() {
    let output = fairprice(&["quote", "--land-area", "0"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("invalid land_area"), "stderr: {}", stderr);
}

#[test]
fn quote_rejects_mismatched_floor_count() {
    let output = fairprice(&["quote", "--floors", "3", "--floor-areas", "90,60"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("expected 3 floor areas, got 2"), "stderr: {}", stderr);
}

/// Test the report CSV written to stdout
#[test]
fn report_to_stdout() {
    let output = fairprice(&["report", "--output", "-"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_eq!(
        stdout,
        "Category,Amount\n\
         Total Fair Property Price,\"$1,105,500.00\"\n\
         Estimated Stamp Duty,\"$60,802.50\"\n\
         State,Victoria (VIC)\n"
    );
}

/// Test the report written to a file
#[test]
fn report_to_file() {
    let path = std::env::temp_dir().join(format!("FairPrice_Report_{}.csv", std::process::id()));
    let output = fairprice(&[
        "report",
        "--state",
        "act",
        "--output",
        path.to_str().unwrap(),
    ]);

    assert!(output.status.success(), "Command failed: {:?}", output);
    let mut rdr = csv::Reader::from_path(&path).expect("report file");
    let rows: Vec<(String, String)> = rdr.deserialize().map(|r| r.unwrap()).collect();
    std::fs::remove_file(&path).ok();

    assert_eq!(
        rows,
        vec![
            ("Total Fair Property Price".to_string(), "$1,105,500.00".to_string()),
            ("Estimated Stamp Duty".to_string(), "$53,064.00".to_string()),
            ("State".to_string(), "Australian Capital Territory (ACT)".to_string()),
        ]
    );
}

/// Test batch pricing from CSV
#[test]
fn batch_csv() {
    let output = fairprice(&["batch", "-p", "tests/data/properties.csv"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("family-home"));
    assert!(stdout.contains("$1,176,000.00"));
    assert!(stdout.contains("$62,328.00"));
    assert!(stdout.contains("$5,500.00"));
    assert!(stdout.contains("$275.00"));
}

/// Test batch pricing from JSON with CSV output
#[test]
fn batch_json_to_csv() {
    let output = fairprice(&["batch", "-p", "tests/data/properties.json", "--csv"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.starts_with("row_num,id,state,building_area,fair_price,stamp_duty\n"));
    assert!(stdout.contains("acreage,QLD,300 sqm,\"$1,260,000.00\",\"$61,740.00\""));
}

/// One invalid property aborts the whole batch
#[test]
fn batch_rejects_invalid_row() {
    let output = fairprice(&["batch", "-p", "tests/data/invalid_properties.csv"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(!stdout.contains("$1,105,500.00"));
    assert!(stderr.contains("property #2 is invalid"), "stderr: {}", stderr);
    assert!(stderr.contains("invalid land_value"), "stderr: {}", stderr);
}

#[test]
fn rates_table() {
    let output = fairprice(&["rates"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    for expected in ["VIC", "5.5%", "NSW", "5.3%", "TAS", "4.2%", "ACT", "4.8%"] {
        assert!(stdout.contains(expected), "missing {expected}");
    }
    assert!(stdout.contains("https://www.landgate.wa.gov.au/property-reports"));
    assert!(stdout.contains("First home buyers"));
}

#[test]
fn schema_csv_header() {
    let output = fairprice(&["schema", "csv-header"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_eq!(
        stdout.trim(),
        "id,land_area,floors,floor_area,floor_areas,land_value,building_cost,jurisdiction"
    );
}

/// Values too large to price are reported as invalid input, not a crash
#[test]
fn quote_rejects_overflowing_values() {
    let output = fairprice(&[
        "quote",
        "--land-area",
        "79228162514264337593543950335",
        "--land-value",
        "2",
    ]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1), "stderr: {}", stderr);
    assert!(stderr.contains("invalid land_area: value too large"), "stderr: {}", stderr);
}

/// A large uniform floor count is priced without expanding every floor
#[test]
fn quote_many_floors() {
    let output = fairprice(&[
        "quote",
        "--land-area",
        "1",
        "--floors",
        "4000000000",
        "--floor-area",
        "1",
        "--state",
        "nt",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("4000000000 sqm"));
    assert!(stdout.contains("$10,000,000,003,000.00"));
}

/// Batch totals that overflow fail before any table is printed
#[test]
fn batch_rejects_overflowing_totals() {
    let output = fairprice(&["batch", "-p", "tests/data/huge_properties.csv"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1), "stderr: {}", stderr);
    assert!(!stdout.contains("tower-a"));
    assert!(
        stderr.contains("invalid total fair_price: value too large"),
        "stderr: {}",
        stderr
    );
}

/// JSON input accepts per-floor areas as an array
#[test]
fn batch_json_floor_area_array() {
    let output = fairprice(&["batch", "-p", "tests/data/properties.json", "--csv"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("granny-flat,SA,110 sqm,\"$425,000.00\",\"$19,125.00\""));
}
