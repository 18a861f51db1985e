use ratatui::{
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::level::{AlignItems, JustifyContent, LayoutAttributes};

const BOX_WIDTH: u16 = 7;
const BOX_HEIGHT: u16 = 3;
const BOX_LABELS: [&str; 3] = ["1", "2", "3"];

/// Draws three numbered boxes laid out like a flex container with `attrs`.
pub fn render_playground(f: &mut Frame, attrs: &LayoutAttributes, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Playground ")
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let row = attrs.flex_direction.is_row();
    let reversed = attrs.flex_direction.is_reversed();
    let (main_axis, main_len, cross_axis, cross_len) = if row {
        (Direction::Horizontal, BOX_WIDTH, Direction::Vertical, BOX_HEIGHT)
    } else {
        (Direction::Vertical, BOX_HEIGHT, Direction::Horizontal, BOX_WIDTH)
    };

    let slots = Layout::default()
        .direction(main_axis)
        .constraints([Constraint::Length(main_len); 3])
        .flex(main_flex(attrs.justify_content, reversed))
        .split(inner);

    let mut labels = BOX_LABELS;
    if reversed {
        labels.reverse();
    }

    for (slot, label) in slots.iter().zip(labels) {
        let cell = cross_align(*slot, cross_axis, cross_len, attrs.align_items);
        let item = Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Black).bg(Color::Cyan))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(item, cell);
    }
}

// A reversed direction also swaps which end is the main-axis start.
fn main_flex(justify: JustifyContent, reversed: bool) -> Flex {
    match (justify, reversed) {
        (JustifyContent::FlexStart, false) | (JustifyContent::FlexEnd, true) => Flex::Start,
        (JustifyContent::FlexEnd, false) | (JustifyContent::FlexStart, true) => Flex::End,
        (JustifyContent::Center, _) => Flex::Center,
        (JustifyContent::SpaceBetween, _) => Flex::SpaceBetween,
        (JustifyContent::SpaceAround, _) | (JustifyContent::SpaceEvenly, _) => Flex::SpaceAround,
    }
}

fn cross_align(slot: Rect, axis: Direction, len: u16, align: AlignItems) -> Rect {
    let flex = match align {
        AlignItems::Stretch => return slot,
        AlignItems::FlexStart => Flex::Start,
        AlignItems::FlexEnd => Flex::End,
        AlignItems::Center => Flex::Center,
    };

    Layout::default()
        .direction(axis)
        .constraints([Constraint::Length(len)])
        .flex(flex)
        .split(slot)[0]
}
