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

//! Render the key help line for the focused widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{events::Focus, theme::Theme};

const INPUT_KEYS: &[(&str, &str)] = &[
    ("Enter", "parse"),
    ("Tab", "tracks"),
    ("Esc", "leave"),
    ("Ctrl-c", "quit"),
];

const LIST_KEYS: &[(&str, &str)] = &[
    ("Space", "toggle"),
    ("a", "all"),
    ("n", "none"),
    ("d", "download"),
    ("p", "paste"),
    ("i", "url"),
    ("q", "quit"),
];

pub(crate) fn draw_help(f: &mut Frame, area: Rect, focus: Focus, theme: &Theme) {
    let keys = match focus {
        Focus::UrlInput => INPUT_KEYS,
        Focus::TrackList => LIST_KEYS,
    };

    let spans: Vec<Span> = keys
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(format!(" {key}"), Style::default().fg(theme.accent_colour).bold()),
                Span::styled(format!(" {action} "), Style::default().fg(theme.muted_colour)),
            ]
        })
        .collect();

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
