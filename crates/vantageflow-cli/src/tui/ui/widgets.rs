use ratatui::style::Color;

/// Task counts live in the tens-to-thousands range; group thousands with
/// commas and only go compact past five digits.
pub fn format_count(n: u64) -> String {
    if n >= 100_000 {
        format!("{:.0}K", n as f64 / 1_000.0)
    } else {
        group_thousands(n)
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let lead = digits.len() % 3;

    for (i, c) in digits.chars().enumerate() {
        if i != 0 && i % 3 == lead % 3 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

pub fn stream_color(stream: &str) -> Color {
    match stream {
        "activity" => Color::Rgb(57, 211, 83),
        "due" => Color::Rgb(210, 168, 44),
        "overdue" => Color::Rgb(229, 83, 75),
        _ => Color::Rgb(136, 136, 136),
    }
}

pub fn truncate(s: &str, max_chars: usize) -> String {
    if max_chars == 0 {
        return String::new();
    }
    let char_count = s.chars().count();
    if char_count <= max_chars {
        s.to_string()
    } else if max_chars == 1 {
        "…".to_string()
    } else {
        let head: String = s.chars().take(max_chars - 1).collect();
        format!("{}…", head)
    }
}
