const UNIT: f64 = 1024.0;

fn unit_label(divisions: u32) -> &'static str {
    match divisions {
        0 => "Byte",
        1 => "KB",
        2 => " MB",
        3 => " GB",
        _ => " TB",
    }
}

/// Renders a byte count such as `"12.34 MB"` or `"512Byte"`.
///
/// Precision 1 to 3 selects that many decimals; anything else rounds to an
/// integer. Values past the terabyte range keep dividing but stay labelled
/// `" TB"`.
pub fn to_readable_size(bytes: u64, precision: u32) -> String {
    let mut value = bytes as f64;
    let mut divisions = 0u32;
    while value >= UNIT {
        value /= UNIT;
        divisions += 1;
    }

    let label = unit_label(divisions);
    if divisions == 0 {
        return format!("{}{label}", value.round_ties_even() as u64);
    }

    match precision {
        1 => format!("{value:.1}{label}"),
        2 => format!("{value:.2}{label}"),
        3 => format!("{value:.3}{label}"),
        _ => format!("{}{label}", value.round_ties_even() as u64),
    }
}
