//! Plain-text rendering of simulation results

use std::fmt::Write;

use scaffold_core::Biomaterial;
use scaffold_core::model::SimulationSummary;
use scaffold_core::preview::QuickEstimate;

use crate::util::format::{format_percent, format_porosity, format_scientific};

const TITLE: &str = "CHITOSAN-BASED TPMS SCAFFOLD PERFORMANCE PREDICTOR";
const SUBTITLE: &str = "Articular Cartilage Tissue Regeneration";
const FOOTER: &str = "Note: This is a predictive model based on Monte Carlo simulation data. \
                      Results should be validated experimentally.";

fn header(out: &mut String) {
    let _ = writeln!(out, "{TITLE}");
    let _ = writeln!(out, "{SUBTITLE}");
    let _ = writeln!(out);
}

fn footer(out: &mut String) {
    let _ = writeln!(out);
    let _ = writeln!(out, "---");
    let _ = writeln!(out, "{FOOTER}");
}

/// Render a Monte Carlo summary, highlighting the group nearest `porosity`
pub fn render_prediction(
    summary: &SimulationSummary,
    biomaterial: Biomaterial,
    porosity: f64,
) -> String {
    let mut out = String::new();
    header(&mut out);

    let _ = writeln!(
        out,
        "Biomaterial: {biomaterial}    Target porosity: {}",
        format_porosity(porosity)
    );
    if !biomaterial.has_measured_data() {
        let _ = writeln!(
            out,
            "(no measured data for {biomaterial}; using chitosan scaffold data)"
        );
    }
    let _ = writeln!(
        out,
        "Trials per group: {}    Seed: {}",
        summary.num_trials, summary.seed
    );
    let _ = writeln!(out);

    if let Some(highlight) = summary.nearest_group(porosity) {
        let group = &summary.per_group[highlight];
        let _ = writeln!(
            out,
            "Predicted Performance Metrics ({} porosity)",
            format_porosity(group.porosity)
        );
        let _ = writeln!(
            out,
            "  Mean Performance:   {}",
            format_scientific(group.stats.mean, 1)
        );
        let _ = writeln!(
            out,
            "  Standard Deviation: {}",
            format_scientific(group.stats.std_dev, 1)
        );
        let _ = writeln!(out);
    }

    for group in &summary.per_group {
        let stats = &group.stats;
        let _ = writeln!(out, "Porosity {}:", format_porosity(group.porosity));
        let _ = writeln!(out, " Mean Performance: {}", format_scientific(stats.mean, 4));
        let _ = writeln!(
            out,
            " Standard Deviation: {}",
            format_scientific(stats.std_dev, 4)
        );
        let _ = writeln!(
            out,
            " 95% Confidence Interval: [{}, {}]",
            format_scientific(stats.ci_low, 4),
            format_scientific(stats.ci_high, 4)
        );
        let b = &group.box_plot;
        let _ = writeln!(
            out,
            " Box: min {} | Q1 {} | median {} | Q3 {} | max {}",
            format_scientific(b.min, 2),
            format_scientific(b.q1, 2),
            format_scientific(b.median, 2),
            format_scientific(b.q3, 2),
            format_scientific(b.max, 2)
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "ANOVA p-value: {}",
        format_scientific(summary.anova.p_value, 4)
    );
    if summary.anova.significant {
        let _ = writeln!(
            out,
            "There are statistically significant differences between groups."
        );
    }

    footer(&mut out);
    out
}

/// Render a placeholder estimate
pub fn render_preview(estimate: &QuickEstimate) -> String {
    let mut out = String::new();
    header(&mut out);

    let _ = writeln!(out, "Predicted Performance Metrics");
    let _ = writeln!(
        out,
        "  Cell Migration:      {}",
        format_percent(estimate.cell_migration, 1)
    );
    let _ = writeln!(
        out,
        "  Mechanical Strength: {}",
        format_percent(estimate.mechanical_strength, 1)
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "Finite Element Analysis Results");
    let _ = writeln!(out, "  Average Stress: {:.2} MPa", estimate.average_stress());
    let _ = writeln!(out, "  Average Strain: {:.2}", estimate.average_strain());
    let _ = writeln!(out);

    let _ = writeln!(out, "Computational Fluid Dynamics Results");
    let _ = writeln!(
        out,
        "  Average Flow Rate:    {:.2} mL/min",
        estimate.average_flow_rate()
    );
    let _ = writeln!(
        out,
        "  Average Shear Stress: {:.2} Pa",
        estimate.average_shear_stress()
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "Parameter Overview");
    let _ = writeln!(out, "  Biomaterial  {}", estimate.biomaterial);
    let _ = writeln!(out, "  Porosity     {} %", estimate.porosity);

    footer(&mut out);
    out
}
