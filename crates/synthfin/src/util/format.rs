/// Insert thousands separators into the integer part of a non-negative value
fn group_thousands(whole: u64) -> String {
    let digits = whole.to_string();
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format an amount in million units with two decimals (e.g. `85,000.00 M$`)
pub fn format_millions(value: f64) -> String {
    let abs_value = value.abs();
    let whole = abs_value as u64;
    let mut cents = ((abs_value - whole as f64) * 100.0).round() as u64;
    let mut whole = whole;
    if cents == 100 {
        whole += 1;
        cents = 0;
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}.{:02} M$", sign, group_thousands(whole), cents)
}

/// Format an amount in million units in compact form (e.g. `$85.0B`, `$450M`)
pub fn format_compact_millions(value: f64) -> String {
    let abs_value = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    if abs_value >= 1_000.0 {
        format!("{}${:.1}B", sign, abs_value / 1_000.0)
    } else if abs_value >= 1.0 {
        format!("{}${:.0}M", sign, abs_value)
    } else {
        format!("{}${:.0}K", sign, abs_value * 1_000.0)
    }
}

/// Format a head count in millions (e.g. `2,000.00 M`)
pub fn format_users(value: f64) -> String {
    let millions = value / 1_000_000.0;
    let whole = millions.abs() as u64;
    let hundredths = ((millions.abs() - whole as f64) * 100.0).round() as u64;
    let (whole, hundredths) = if hundredths == 100 {
        (whole + 1, 0)
    } else {
        (whole, hundredths)
    };
    format!("{}.{:02} M", group_thousands(whole), hundredths)
}

/// Format a head count in compact form (e.g. `2.1B`, `650M`)
pub fn format_compact_users(value: f64) -> String {
    let abs_value = value.abs();
    if abs_value >= 1_000_000_000.0 {
        format!("{:.1}B", abs_value / 1_000_000_000.0)
    } else if abs_value >= 1_000_000.0 {
        format!("{:.0}M", abs_value / 1_000_000.0)
    } else if abs_value >= 1_000.0 {
        format!("{:.0}K", abs_value / 1_000.0)
    } else {
        format!("{:.0}", abs_value)
    }
}

/// Format a fraction as a percentage with one decimal
pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

/// Format an optional statistic, `n/a` when missing
pub fn format_optional(value: Option<f64>, format: impl Fn(f64) -> String) -> String {
    value.map_or_else(|| "n/a".to_string(), format)
}
