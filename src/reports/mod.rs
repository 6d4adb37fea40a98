use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use pacecalc::consts::{PACE_UNIT, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use pacecalc::feedback::{Feedback, FeedbackTier};
use pacecalc::pace::PaceResult;
use pacecalc::screen::PaceForm;
use strum::IntoEnumIterator;

fn tier_cell(text: &str, tier: FeedbackTier, no_color: bool) -> Cell {
    let cell = Cell::new(text).add_attribute(Attribute::Bold);
    if no_color {
        return cell;
    }
    let (r, g, b) = tier.rgb();
    cell.fg(Color::Rgb { r, g, b })
}

/// `H:MM:SS` for a total duration in seconds.
pub fn format_duration(total_seconds: i64) -> String {
    let h = total_seconds / SECONDS_PER_HOUR;
    let m = (total_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let s = total_seconds % SECONDS_PER_MINUTE;
    format!("{}:{:02}:{:02}", h, m, s)
}

pub fn pace_table(result: &PaceResult, feedback: &Feedback, no_color: bool) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Pace").add_attribute(Attribute::Bold),
        tier_cell(
            &format!("{} {}", result.display, PACE_UNIT),
            feedback.tier,
            no_color,
        ),
    ]);
    table.add_row(vec![
        Cell::new("Distância"),
        Cell::new(format!("{} km", result.distance_km)),
    ]);
    table.add_row(vec![
        Cell::new("Tempo"),
        Cell::new(format_duration(result.total_seconds)),
    ]);
    table.add_row(vec![
        Cell::new("Feedback"),
        tier_cell(feedback.label, feedback.tier, no_color),
    ]);

    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }
    table
}

pub fn form_table(form: &PaceForm) -> Table {
    let blank = |s: &str| if s.is_empty() { "-".to_string() } else { s.to_string() };

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec!["Distância (km)", "h", "min", "s"]);
    table.add_row(vec![
        Cell::new(blank(&form.distance)),
        Cell::new(blank(&form.hours)).set_alignment(CellAlignment::Center),
        Cell::new(blank(&form.minutes)).set_alignment(CellAlignment::Center),
        Cell::new(blank(&form.seconds)).set_alignment(CellAlignment::Center),
    ]);
    table
}

pub fn tier_table(no_color: bool) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Tier", "Pace (min/km)", "Feedback", "Color"]);

    let mut lower: Option<f64> = None;
    for tier in FeedbackTier::iter() {
        let upper = tier.upper_bound_minutes();
        let range = match (lower, upper) {
            (None, Some(u)) => format!("< {}", u),
            (Some(l), Some(u)) => format!("{} - {}", l, u),
            (Some(l), None) => format!(">= {}", l),
            (None, None) => "any".to_string(),
        };

        table.add_row(vec![
            Cell::new(tier.to_string()),
            Cell::new(range).set_alignment(CellAlignment::Right),
            tier_cell(tier.label(), tier, no_color),
            Cell::new(tier.color()),
        ]);
        lower = upper;
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_are_zero_padded() {
        assert_eq!(format_duration(1500), "0:25:00");
        assert_eq!(format_duration(3661), "1:01:01");
        assert_eq!(format_duration(86_400), "24:00:00");
    }
}
