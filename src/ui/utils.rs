use itertools::Itertools;

/// Formats a price with "Trader Precision".
/// - Large (>1000): 2 decimals ($95,123.50)
/// - Medium (1-1000): 4 decimals ($12.4829)
/// - Small (<1): 5-8 decimals ($0.00000231)
pub fn format_price(price: f64) -> String {
    if price == 0.0 {
        return "$0.00".to_string();
    }

    let abs_price = price.abs();
    if abs_price >= 1000.0 {
        format!("${}", group_thousands(price, 2))
    } else if abs_price >= 1.0 {
        format!("${:.4}", price)
    } else if abs_price >= 0.01 {
        format!("${:.5}", price)
    } else {
        format!("${:.8}", price)
    }
}

/// Chart tooltip precision.
pub fn format_tooltip_price(price: f64) -> String {
    format!("${:.5}", price)
}

/// Whole units with thousands separators (21,000,000).
pub fn format_supply(supply: f64) -> String {
    group_thousands(supply, 0)
}

/// Large dollar amounts in short form ($820.50B).
pub fn format_compact_usd(value: f64) -> String {
    let abs = value.abs();
    let (scaled, suffix) = if abs >= 1e12 {
        (value / 1e12, "T")
    } else if abs >= 1e9 {
        (value / 1e9, "B")
    } else if abs >= 1e6 {
        (value / 1e6, "M")
    } else {
        return format!("${}", group_thousands(value, 0));
    };
    format!("${:.2}{}", scaled, suffix)
}

/// Signed percentage with two decimals (+1.25%, -0.40%).
pub fn format_pct(value: f64) -> String {
    if value > 0.0 {
        format!("+{:.2}%", value)
    } else {
        format!("{:.2}%", value)
    }
}

fn group_thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let head = digits.len() % 3;
    let mut groups: Vec<String> = Vec::new();
    if head > 0 {
        groups.push(digits[..head].iter().collect());
    }
    for chunk in &digits[head..].iter().chunks(3) {
        groups.push(chunk.collect());
    }

    let sign = if value < 0.0 { "-" } else { "" };
    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, groups.iter().join(","), frac),
        None => format!("{}{}", sign, groups.iter().join(",")),
    }
}
