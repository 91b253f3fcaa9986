// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Render the URL entry field.
//!
//! The field scrolls horizontally so the cursor stays visible when the URL is
//! wider than the terminal.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::{theme::Theme, view::ViewModel};

const URL_PLACEHOLDER: &str = "Paste a YouTube video or playlist URL";

pub(crate) fn draw_url_input(
    f: &mut Frame,
    area: Rect,
    input: &tui_input::Input,
    view: &ViewModel,
    theme: &Theme,
    focused: bool,
) {
    let border_colour = if focused { theme.focus_border_colour } else { theme.border_colour };

    let hint = if view.parse_enabled { " Enter: parse " } else { " Parsing... " };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_colour))
        .title(Line::from(" YouTube URL ").style(Style::default().fg(theme.accent_colour).bold()))
        .title_bottom(Line::from(hint).style(Style::default().fg(theme.muted_colour)).right_aligned());

    let inner = block.inner(area);

    // Keep two columns free so the cursor never sits on the border.
    let width = inner.width.max(2) as usize - 1;
    let scroll = input.visual_scroll(width);

    let paragraph = if input.value().is_empty() && !focused {
        Paragraph::new(URL_PLACEHOLDER).style(Style::default().fg(theme.muted_colour))
    } else {
        Paragraph::new(input.value()).scroll((0, scroll as u16))
    };

    f.render_widget(paragraph.block(block), area);

    if focused {
        let cursor = input.visual_cursor().saturating_sub(scroll);
        f.set_cursor_position((inner.x + cursor as u16, inner.y));
    }
}
