use ratatui::style::Color;

/// Colour for anything outside 1-10
pub const FALLBACK_COLOR: Color = Color::Rgb(0, 0, 0);

/// Index 0 is priority 1 (green), index 9 is priority 10 (red)
const PRIORITY_COLORS: [Color; 10] = [
    Color::Rgb(0, 200, 75),
    Color::Rgb(0, 220, 20),
    Color::Rgb(60, 240, 0),
    Color::Rgb(125, 255, 0),
    Color::Rgb(200, 255, 0),
    Color::Rgb(255, 255, 0),
    Color::Rgb(255, 200, 0),
    Color::Rgb(255, 150, 50),
    Color::Rgb(255, 75, 0),
    Color::Rgb(230, 0, 0),
];

/// Text colour for a priority. Total over all integers.
pub fn priority_color(priority: i64) -> Color {
    priority
        .checked_sub(1)
        .and_then(|i| usize::try_from(i).ok())
        .and_then(|i| PRIORITY_COLORS.get(i))
        .copied()
        .unwrap_or(FALLBACK_COLOR)
}
