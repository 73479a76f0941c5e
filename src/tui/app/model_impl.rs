//! `Model` trait implementation for the list application.
//!
//! This module translates bubbletea-rs events into [`AppMsg`] values and
//! [`AppEffect`] values into commands.

use std::any::Any;

use bubbletea_rs::{Cmd, Model};
use unicode_width::UnicodeWidthChar;

use super::PullRequestApp;
use crate::tui::browser::open_url;
use crate::tui::input::map_key_to_message;
use crate::tui::messages::{AppEffect, AppMsg};

impl Model for PullRequestApp {
    fn init() -> (Self, Option<Cmd>) {
        // Retrieve initial data from module-level storage
        let (title, items) = crate::tui::get_initial_listing();
        (Self::new(title, items), None)
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        let app_msg = if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            Some(app_msg.clone())
        } else if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            map_key_to_message(key_msg, self.input_context())
        } else {
            msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>()
                .map(|size_msg| AppMsg::WindowResized {
                    width: size_msg.width,
                    height: size_msg.height,
                })
        };

        app_msg
            .and_then(|mapped| self.handle_message(&mapped))
            .map(effect_to_cmd)
    }

    fn view(&self) -> String {
        let mut output = String::new();
        output.push_str(&self.render_header());
        output.push_str(&self.render_filter_bar());
        output.push('\n');
        output.push_str(&self.render_list());
        output.push_str(&self.render_status_bar());

        self.normalise_viewport(&output)
    }
}

/// Turns an effect into the command performing it.
fn effect_to_cmd(effect: AppEffect) -> Cmd {
    match effect {
        AppEffect::Quit => bubbletea_rs::quit(),
        AppEffect::OpenUrl(url) => Box::pin(async move {
            open_url(&url);
            None::<Box<dyn Any + Send>>
        }),
    }
}

impl PullRequestApp {
    /// Normalises the rendered frame to terminal dimensions.
    ///
    /// Rows are clamped to one column less than the terminal width to avoid
    /// autowrap and padded with spaces to clear stale cells after resize.
    /// The status bar stays on the last row.
    fn normalise_viewport(&self, output: &str) -> String {
        let width = self.width.max(1) as usize;
        let safe_width = width.saturating_sub(1).max(1);
        let height = self.height.max(1) as usize;

        let mut lines: Vec<String> = output
            .lines()
            .map(|line| pad_or_truncate_plain_line(line, safe_width))
            .collect();
        let status = lines.pop().unwrap_or_default();
        lines.truncate(height.saturating_sub(1));

        let missing = height.saturating_sub(1).saturating_sub(lines.len());
        let blank = " ".repeat(safe_width);
        lines.extend(std::iter::repeat_with(|| blank.clone()).take(missing));
        lines.push(status);

        let mut normalised = lines.join("\n");
        normalised.push('\n');
        normalised
    }
}

fn pad_or_truncate_plain_line(line: &str, width: usize) -> String {
    let mut output = String::new();
    let mut visible_width = 0usize;

    for ch in line.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if char_width == 0 {
            output.push(ch);
            continue;
        }

        if visible_width.saturating_add(char_width) > width {
            break;
        }

        output.push(ch);
        visible_width = visible_width.saturating_add(char_width);
    }

    if visible_width < width {
        output.push_str(&" ".repeat(width - visible_width));
    }

    output
}
