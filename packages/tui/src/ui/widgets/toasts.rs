use crate::notifications::{Notification, Severity};
use crate::ui::theme::Palette;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

const TOAST_WIDTH: u16 = 40;
const TOAST_HEIGHT: u16 = 3;

/// Visible notifications stacked in the top-right corner, oldest on top
pub struct ToastsWidget<'a> {
    toasts: &'a [Notification],
    palette: &'a Palette,
}

impl<'a> ToastsWidget<'a> {
    pub fn new(toasts: &'a [Notification], palette: &'a Palette) -> Self {
        Self { toasts, palette }
    }

    fn color(&self, severity: Severity) -> Color {
        match severity {
            Severity::Info => self.palette.info,
            Severity::Success => self.palette.success,
            Severity::Error => self.palette.danger,
        }
    }
}

impl<'a> Widget for ToastsWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = TOAST_WIDTH.min(area.width);
        let x = area.x + area.width - width;

        for (i, toast) in self.toasts.iter().enumerate() {
            let y = area.y + 1 + i as u16 * TOAST_HEIGHT;
            if y + TOAST_HEIGHT > area.y + area.height {
                break;
            }
            let rect = Rect::new(x, y, width, TOAST_HEIGHT);
            let color = self.color(toast.severity);

            Clear.render(rect, buf);
            Paragraph::new(toast.message.as_str())
                .style(self.palette.base())
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(color)),
                )
                .render(rect, buf);
        }
    }
}
