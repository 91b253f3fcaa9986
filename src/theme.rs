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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette. Status colours follow
//! the usual traffic-light convention so errors stand out at a glance.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) focus_border_colour: Color,
    pub(crate) muted_colour: Color,
    pub(crate) highlight_bg: Color,
    pub(crate) highlight_fg: Color,

    pub(crate) table_checkbox_fg: Color,
    pub(crate) table_title_fg: Color,
    pub(crate) table_duration_fg: Color,

    pub(crate) button_enabled_fg: Color,
    pub(crate) button_disabled_fg: Color,

    pub(crate) status_error_fg: Color,
    pub(crate) status_success_fg: Color,
    pub(crate) status_loading_fg: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),
            focus_border_colour: Color::Rgb(250, 189, 47),
            muted_colour: Color::Rgb(162, 161, 166),
            highlight_bg: Color::Blue,
            highlight_fg: Color::White,

            table_checkbox_fg: Color::Rgb(179, 157, 219),
            table_title_fg: Color::Rgb(255, 255, 255),
            table_duration_fg: Color::Rgb(162, 161, 166),

            button_enabled_fg: Color::Rgb(250, 189, 47),
            button_disabled_fg: Color::Rgb(102, 102, 102),

            status_error_fg: Color::Rgb(239, 83, 80),
            status_success_fg: Color::Rgb(102, 187, 106),
            status_loading_fg: Color::Rgb(100, 181, 246),
        }
    }
}
