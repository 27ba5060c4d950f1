//! Output formatting for solver results

use aoc_harness::{Part, RunReport, SolverInfo};
use chrono::TimeDelta;

/// Output formatter for run reports
pub struct OutputFormatter {
    quiet: bool,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Render a finished run, one line per item
    pub fn render_report(&self, report: &RunReport) -> Vec<String> {
        if self.quiet {
            return Part::ALL
                .iter()
                .map(|&part| report.result(part).answer.to_string())
                .collect();
        }

        let test = &report.self_test;
        let mut lines = vec![format!(
            "Day {:02} self-test: {} of {} samples checked ({})",
            report.day,
            test.checked(),
            test.checks.len(),
            format_duration(test.duration())
        )];
        lines.push(format!(
            "Day {:02} parse: {}",
            report.day,
            format_duration(report.parse_duration())
        ));
        for part in Part::ALL {
            let result = report.result(part);
            lines.push(format!(
                "Day {:02} Part {}: {} (solve: {})",
                report.day,
                part,
                result.answer,
                format_duration(result.duration())
            ));
        }
        lines.push(format!(
            "Total: {}",
            format_duration(
                test.duration() + report.parse_duration() + report.part_1.duration() + report.part_2.duration()
            )
        ));
        lines
    }

    /// Format and print a finished run
    pub fn print_report(&self, report: &RunReport) {
        for line in self.render_report(report) {
            println!("{line}");
        }
    }

    /// Print the registered days
    pub fn print_listing(&self, infos: impl IntoIterator<Item = SolverInfo>) {
        for info in infos {
            if self.quiet {
                println!("{}", info.day);
            } else {
                println!(
                    "Day {:02}  samples: {} / {}  tags: {}",
                    info.day,
                    info.part_1_expected,
                    info.part_2_expected,
                    info.tags.join(", ")
                );
            }
        }
    }
}

/// Format a TimeDelta for display
pub fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}
