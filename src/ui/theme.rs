use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub highlight: Color, // Yellow, the pair/edge/node the current step is about
    pub candidate: Color, // Cyan, Prim's frontier edges
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
    /// One color per connected component, reused cyclically
    pub components: [Color; 6],
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),
    secondary: Color::Rgb(250, 179, 135),
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    highlight: Color::Rgb(249, 226, 175),
    candidate: Color::Rgb(148, 226, 213),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    status_bg: Color::Rgb(50, 50, 70),
    components: [
        Color::Rgb(137, 180, 250), // blue
        Color::Rgb(166, 227, 161), // green
        Color::Rgb(203, 166, 247), // purple
        Color::Rgb(249, 226, 175), // yellow
        Color::Rgb(245, 194, 231), // pink
        Color::Rgb(148, 226, 213), // cyan
    ],
};

impl Theme {
    /// Color for the component at `index` in a partition
    pub fn component_color(&self, index: usize) -> Color {
        self.components[index % self.components.len()]
    }
}
