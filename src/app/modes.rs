/// Which surface currently receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typing into the search bar.
    Search,
    /// Navigating the results grid.
    Results,
}
