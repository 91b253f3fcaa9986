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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every event. It derives a fresh [`ViewModel`](crate::view::ViewModel) from
//! the session each frame and hands it to the individual widgets.

mod help;
pub(crate) mod icons;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    App,
    components::draw_url_input,
    events::Focus,
    render::{help::draw_help, icons::ICON_MUSIC, status::draw_status},
};

/// Renders the user interface to the terminal frame.
///
/// The screen is split top to bottom into a header, the URL field, the track
/// list, the status line and a key help line.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let view = app.controller.view();

    draw_header(f, outer[0], app);

    draw_url_input(
        f,
        outer[1],
        app.controller.input(),
        &view,
        &app.theme,
        app.focus == Focus::UrlInput,
    );

    app.track_table.draw(f, outer[2], &view, &app.theme, app.focus == Focus::TrackList);

    draw_status(f, outer[3], &view, &app.theme, app.tick);

    draw_help(f, outer[4], app.focus, &app.theme);
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let line = Line::from(vec![
        Span::styled(format!(" {ICON_MUSIC} Pan-Pup "), Style::default().fg(app.theme.accent_colour).bold()),
        Span::styled(app.config.backend_url.as_str(), Style::default().fg(app.theme.muted_colour)),
    ]);

    f.render_widget(Paragraph::new(line), area);
}
