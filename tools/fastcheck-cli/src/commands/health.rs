//! Health probe.

use fastcheck_screening_model::HealthReport;

use super::print_report;

pub fn run() -> anyhow::Result<()> {
    print_report(&HealthReport::now())
}
