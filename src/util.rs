use ratatui::layout::{Flex, Layout, Rect, Size};

/// Return a rectangle of the given size centered within `area`.  If `area` is
/// too small, the result is clipped to it.
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [rect] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(rect);
    rect
}
