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

//! UI rendering logic for the track table.
//!
//! This module handles the visual representation of parsed tracks, including
//! column layout, the per-row checkbox, the highlighted row and the download
//! button shown in the block's bottom border.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table},
};

use crate::{
    components::TrackTable,
    render::icons::{ICON_CHECKED, ICON_MUSIC, ICON_UNCHECKED},
    theme::Theme,
    view::ViewModel,
};

const EMPTY_STATE_TEXT: &str = "No tracks yet. Paste a YouTube URL above and press Enter.";

impl TrackTable {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, view: &ViewModel, theme: &Theme, focused: bool) {
        let border_colour = if focused { theme.focus_border_colour } else { theme.border_colour };

        let title = if view.empty_state {
            " Tracks ".to_string()
        } else {
            format!(" Tracks ({} of {} selected) ", view.selected_count, view.rows.len())
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour))
            .title(Line::from(title).style(Style::default().fg(theme.accent_colour).bold()))
            .title_bottom(download_button(view, theme).alignment(Alignment::Right))
            .padding(Padding::horizontal(1));

        if view.empty_state {
            let placeholder = Paragraph::new(Line::from(vec![
                Span::raw(format!("{ICON_MUSIC} ")),
                Span::raw(EMPTY_STATE_TEXT),
            ]))
            .style(Style::default().fg(theme.muted_colour))
            .alignment(Alignment::Center)
            .block(block);
            f.render_widget(placeholder, area);
            return;
        }

        self.draw_table(f, area, view, theme, block);
    }

    fn draw_table(&mut self, f: &mut Frame, area: Rect, view: &ViewModel, theme: &Theme, block: Block) {
        let rows = view.rows.iter().map(|row| {
            let checkbox = if row.checked { ICON_CHECKED } else { ICON_UNCHECKED };

            Row::new(vec![
                Cell::from(Line::from(checkbox).style(Style::default().fg(theme.table_checkbox_fg))),
                Cell::from(Line::from(row.title.as_str()).style(Style::default().fg(theme.table_title_fg))),
                Cell::from(
                    Line::from(row.duration.as_str())
                        .style(Style::default().fg(theme.table_duration_fg))
                        .alignment(Alignment::Right),
                ),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(9),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from(""),
                Cell::from("Title"),
                Cell::from(Line::from("Duration").alignment(Alignment::Right)),
            ])
            .style(Style::default().bold().fg(theme.accent_colour))
            .bottom_margin(1),
        )
        .column_spacing(2)
        .row_highlight_style(Style::default().bg(theme.highlight_bg).fg(theme.highlight_fg))
        .block(block);

        f.render_stateful_widget(table, area, &mut self.table_state);
    }
}

fn download_button(view: &ViewModel, theme: &Theme) -> Line<'static> {
    let style = if view.download.enabled {
        Style::default().fg(theme.button_enabled_fg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.button_disabled_fg)
    };

    Line::from(Span::styled(format!(" [ {} ] ", view.download.label), style))
}
