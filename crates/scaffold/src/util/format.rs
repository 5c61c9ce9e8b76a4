/// Format a value in scientific notation with a signed, two-digit exponent
/// (e.g. `5.9217e-04`, `2.3e+00`)
pub fn format_scientific(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let raw = format!("{:.*e}", precision, value);
    let Some((mantissa, exponent)) = raw.split_once('e') else {
        return raw;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exponent.abs())
}

/// Format a percentage value already expressed in percent
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value)
}

/// Format a porosity level as a label (e.g. `30%`, `62.5%`)
pub fn format_porosity(porosity: f64) -> String {
    if porosity.fract() == 0.0 {
        format!("{porosity:.0}%")
    } else {
        format!("{porosity}%")
    }
}
