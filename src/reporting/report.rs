use std::fmt;
use crate::config::Properties;
use crate::core::{Architecture, Scenario};
use crate::utils::{format_count, format_dollars, format_quantity};

/// Plain-text rendering of evaluated scenarios.
pub struct ScenarioReport<'a> {
    properties: &'a Properties,
    scenarios: &'a [Scenario],
}

impl<'a> ScenarioReport<'a> {
    pub fn new(properties: &'a Properties, scenarios: &'a [Scenario]) -> Self {
        Self { properties, scenarios }
    }

    /// Batch size with the lowest headline cost for `architecture`.
    pub fn cheapest(&self, architecture: Architecture) -> Option<&'a Scenario> {
        self.scenarios
            .iter()
            .min_by(|a, b| a.headline.cost(architecture).total_cmp(&b.headline.cost(architecture)))
    }

    /// Percentage saved by running the headline volume on ARM instead of x86.
    pub fn arm_savings_percent(scenario: &Scenario) -> f64 {
        Self::safe_div(
            (scenario.headline.cost_x86 - scenario.headline.cost_arm) * 100.0,
            scenario.headline.cost_x86,
        )
    }

    fn safe_div(numerator: f64, denominator: f64) -> f64 {
        if denominator == 0.0 {
            0.0
        } else {
            numerator / denominator
        }
    }

    fn write_parameters(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Input Parameters:")?;
        for (key, value) in self.properties.iter() {
            writeln!(f, "- {}: {}", key, value)?;
        }
        writeln!(f)
    }

    fn write_headline_table(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(first) = self.scenarios.first() else {
            return writeln!(f, "No scenarios evaluated.");
        };

        writeln!(f, "Headline ({} messages/day):", format_count(first.headline.messages_per_day as f64))?;
        writeln!(
            f,
            "{:>8} {:>14} {:>16} {:>8} {:>10} {:>18} {:>12} {:>12}",
            "Batch", "Requests/Day", "Requests/Month", "MemMB", "DurMs", "GB-s/Month", "x86 $", "ARM $"
        )?;
        for scenario in self.scenarios {
            let headline = &scenario.headline;
            writeln!(
                f,
                "{:>8} {:>14} {:>16} {:>7}{} {:>10} {:>18} {:>12} {:>12}",
                scenario.batch_size,
                format_count(headline.requests_per_day),
                format_count(headline.requests_per_month),
                scenario.memory_mb,
                if scenario.memory_clamped { "*" } else { " " },
                format_quantity(scenario.duration_ms),
                format_quantity(headline.gb_seconds_per_month),
                format_dollars(headline.cost_x86),
                format_dollars(headline.cost_arm),
            )?;
        }
        if self.scenarios.iter().any(|s| s.memory_clamped) {
            writeln!(f, "  * memory requirement capped at the largest allowed tier")?;
        }
        writeln!(f)
    }

    fn write_cost_matrix(&self, f: &mut fmt::Formatter<'_>, architecture: Architecture) -> fmt::Result {
        let Some(first) = self.scenarios.first() else {
            return Ok(());
        };

        writeln!(f, "Monthly Cost on {} by Million Messages/Day:", architecture)?;
        write!(f, "{:>8}", "Batch")?;
        for point in &first.volume_costs {
            write!(f, " {:>12}", point.million_messages_per_day)?;
        }
        writeln!(f)?;

        for scenario in self.scenarios {
            write!(f, "{:>8}", scenario.batch_size)?;
            for cost in scenario.cost_vector(architecture) {
                write!(f, " {:>12}", format_dollars(cost))?;
            }
            writeln!(f)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for ScenarioReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Monthly Cost vs Performance for Queue Batch Processing ===")?;
        writeln!(f)?;

        self.write_parameters(f)?;
        self.write_headline_table(f)?;
        for architecture in Architecture::ALL {
            self.write_cost_matrix(f, architecture)?;
        }

        writeln!(f, "Summary:")?;
        for architecture in Architecture::ALL {
            if let Some(best) = self.cheapest(architecture) {
                writeln!(
                    f,
                    "- Cheapest on {}: batch {} at {}/month",
                    architecture,
                    best.batch_size,
                    format_dollars(best.headline.cost(architecture))
                )?;
            }
        }
        if let Some(best) = self.cheapest(Architecture::Arm) {
            writeln!(f, "  └── ARM saves {:.1}% over x86 at that batch size", Self::arm_savings_percent(best))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Configuration, parse_properties};
    use crate::processing::evaluate_scenarios;

    const INPUT: &str = "\
base_lambda_memory_mb=512
process_per_message_ms=20
warm_latency_ms=50
max_batch_size=100
batch_memory_overhead_mb=64
batch_increment=10
";

    fn fixture() -> (Properties, Vec<Scenario>) {
        let props = parse_properties(INPUT).unwrap();
        let config = Configuration::from_properties(&props).unwrap();
        let scenarios = evaluate_scenarios(&config).unwrap();
        (props, scenarios)
    }

    #[test]
    fn test_report_lists_parameters_and_batches() {
        let (props, scenarios) = fixture();
        let text = ScenarioReport::new(&props, &scenarios).to_string();

        assert!(text.contains("- base_lambda_memory_mb: 512"));
        assert!(text.contains("- batch_increment: 10"));
        assert!(text.contains("Headline (10,000,000 messages/day):"));
        assert!(text.contains("Monthly Cost on x86"));
        assert!(text.contains("Monthly Cost on ARM"));
        assert!(text.contains("Cheapest on ARM"));
    }

    #[test]
    fn test_cheapest_picks_minimum_headline_cost() {
        let (props, scenarios) = fixture();
        let report = ScenarioReport::new(&props, &scenarios);
        let best = report.cheapest(Architecture::X86).unwrap();

        assert!(scenarios.iter().all(|s| s.headline.cost_x86 >= best.headline.cost_x86));
    }

    #[test]
    fn test_arm_savings_handles_zero_cost() {
        let (_, mut scenarios) = fixture();
        let scenario = &mut scenarios[0];
        scenario.headline.cost_x86 = 0.0;
        scenario.headline.cost_arm = 0.0;
        assert_eq!(ScenarioReport::arm_savings_percent(scenario), 0.0);
    }

    #[test]
    fn test_empty_report() {
        let props = Properties::new();
        let text = ScenarioReport::new(&props, &[]).to_string();
        assert!(text.contains("No scenarios evaluated."));
    }
}
