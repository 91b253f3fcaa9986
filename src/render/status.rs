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

//! Render the transient status line.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    controller::StatusKind,
    render::icons::{ICON_ERROR, ICON_SUCCESS, spinner_frame},
    theme::Theme,
    view::ViewModel,
};

pub(crate) fn draw_status(f: &mut Frame, area: Rect, view: &ViewModel, theme: &Theme, tick: u64) {
    let Some(status) = &view.status else {
        return;
    };

    let (icon, colour) = match status.kind {
        StatusKind::Error => (ICON_ERROR, theme.status_error_fg),
        StatusKind::Success => (ICON_SUCCESS, theme.status_success_fg),
        StatusKind::Loading => (spinner_frame(tick), theme.status_loading_fg),
    };

    let line = Line::from(vec![
        Span::styled(format!(" {icon} "), Style::default().fg(colour)),
        Span::styled(status.message.as_str(), Style::default().fg(colour)),
    ]);

    f.render_widget(Paragraph::new(line), area);
}
