//! CLI integration tests: invoke the compiled binary and check the report
//! end to end for each format, including the silent fallback.

use std::process::Command;

fn primebase_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_primebase"))
}

fn run_with(args: &[&str]) -> String {
    let output = primebase_bin().args(args).output().expect("run binary");
    assert!(
        output.status.success(),
        "primebase {:?} should exit 0, stderr: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is utf-8")
}

const CLASSES: [&str; 8] = [
    "sbyte", "byte", "short", "ushort", "int", "uint", "long", "ulong",
];

#[test]
fn csv_report_shape() {
    let stdout = run_with(&["csv"]);
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 10, "header + 8 rows + blank line: {lines:#?}");
    assert_eq!(
        lines[0],
        "Class,Base,Next Prime,Memory Use (MiB/Gdigit),Memory Waste (MiB/Gdigit),Calculation Speed (MIPS)"
    );
    assert_eq!(lines[9], "");

    for (line, class) in lines[1..9].iter().zip(CLASSES) {
        let fields: Vec<&str> = line.split(',').collect();
        assert_eq!(fields.len(), 6, "row: {line}");
        assert_eq!(fields[0], class);
        fields[1].parse::<u64>().expect("base is an integer");
        fields[2].parse::<u64>().expect("next prime is an integer");
        for metric in &fields[3..6] {
            assert!(
                metric.contains('.') && metric.rsplit('.').next().unwrap().len() == 2,
                "metric {metric} should carry two decimals"
            );
            let value: f64 = metric.parse().expect("metric is numeric");
            assert!(value.is_finite());
        }
    }
}

#[test]
fn table_report_shape() {
    let stdout = run_with(&["table"]);
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 12, "borders + header + 8 rows: {lines:#?}");
    let border = lines[0];
    assert!(border.starts_with("+--") && border.ends_with("--+"));
    assert_eq!(lines[2], border);
    assert_eq!(lines[11], border);
    assert!(lines[1].contains("| Class  |"));

    for (line, class) in lines[3..11].iter().zip(CLASSES) {
        assert_eq!(line.len(), border.len(), "row: {line}");
        let cells: Vec<&str> = line.trim_matches('|').split('|').collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0].trim(), class);
        // numeric columns are right-aligned into fixed cells
        for cell in &cells[1..] {
            assert!(cell.ends_with(' ') && !cell.trim().is_empty());
            assert!(cell.starts_with(' '), "cell {cell:?} should be padded left");
        }
    }
}

#[test]
fn default_and_unrecognized_arguments_mean_table() {
    let table = run_with(&["table"]);
    let plain = run_with(&[]);
    let bogus = run_with(&["xml"]);

    // Timing columns differ run to run; the fixed layout must not.
    for out in [&plain, &bogus] {
        assert_eq!(out.lines().count(), table.lines().count());
        assert_eq!(out.lines().next(), table.lines().next());
        assert_eq!(out.lines().nth(1), table.lines().nth(1));
    }
}

#[test]
fn json_report_shape() {
    let stdout = run_with(&["json"]);
    let rows: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).expect("each line parses"))
        .collect();

    assert_eq!(rows.len(), 8);
    for (row, class) in rows.iter().zip(CLASSES) {
        assert_eq!(row["class"], class);
        assert!(row["base"].is_u64());
        assert!(row["next_prime"].is_u64());
        assert!(row["mips"].as_f64().expect("mips is a number") > 0.0);
    }
}

#[test]
fn formats_agree_on_the_computed_columns() {
    let csv = run_with(&["csv"]);
    let table = run_with(&["table"]);

    let csv_rows: Vec<Vec<String>> = csv
        .lines()
        .skip(1)
        .take(8)
        .map(|l| l.split(',').take(3).map(str::to_string).collect())
        .collect();
    let table_rows: Vec<Vec<String>> = table
        .lines()
        .skip(3)
        .take(8)
        .map(|l| {
            l.trim_matches('|')
                .split('|')
                .take(3)
                .map(|c| c.trim().to_string())
                .collect()
        })
        .collect();

    // class, base, next prime are deterministic and must match exactly
    assert_eq!(csv_rows, table_rows);
}
