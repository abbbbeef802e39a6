//! Plain-text design report.

use std::fmt::Write;
use wy_results::AssessmentSummary;

/// Render the headline numbers of an assessment.
pub fn render_report(project_name: &str, summary: &AssessmentSummary) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(out, "> Turbine design: {}", project_name);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Average speed at hub height: {:.2} m/s",
        summary.hub_speed_mps
    );
    let _ = writeln!(
        out,
        "Weibull parameters: k = {:.2}, c = {:.2} m/s",
        summary.weibull_k, summary.weibull_c_mps
    );
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Turbine rated power: {:.2} kW",
        summary.rated_power_w / 1000.0
    );
    let _ = writeln!(
        out,
        "Cut-in speed: {:.1} m/s, Rated speed: {} m/s, Cut-out speed: {} m/s",
        summary.speed_cutin_mps, summary.speed_rated_mps, summary.speed_cutout_mps
    );
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "One year energy production: {:.2} MWh",
        summary.energy_production_wh / 1.0e6
    );
    let _ = writeln!(out, "Full-load hours: {:.2} h", summary.full_load_hours);
    let _ = writeln!(
        out,
        "Turbine average power: {:.2} kW",
        summary.average_power_w / 1000.0
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Tower diameter: {:.2} m", summary.tower_diameter_m);
    let _ = writeln!(
        out,
        "Tower thickness due to gravity load: {:.2} mm",
        summary.thickness_gravity_m * 1000.0
    );
    let _ = writeln!(
        out,
        "Tower thickness due to aerodynamic load: {:.2} mm",
        summary.thickness_aerodynamic_m * 1000.0
    );
    let _ = writeln!(
        out,
        "Tower thickness due to extreme wind load: {:.2} mm",
        summary.thickness_extreme_wind_m * 1000.0
    );
    out
}
