use super::*;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

struct Counter {
    hits: usize,
}

impl View for Counter {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        match event {
            InputEvent::Resize(_, _) => EventResult::Redraw,
            InputEvent::Paste(_) => {
                self.hits += 1;
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(ratatui::widgets::Paragraph::new(self.hits.to_string()), area);
    }
}

#[test]
fn default_view_has_no_cursor() {
    let mut view = Counter { hits: 0 };
    let mut terminal = Terminal::new(TestBackend::new(4, 1)).unwrap();

    terminal
        .draw(|frame| {
            let area = frame.area();
            view.render(frame, area);
        })
        .unwrap();

    assert_eq!(view.cursor_position(), None);
}

#[test]
fn results_are_reported_per_event() {
    let mut view = Counter { hits: 0 };

    assert_eq!(view.handle_input(&InputEvent::Resize(10, 10)), EventResult::Redraw);
    assert_eq!(view.handle_input(&InputEvent::Paste("x".into())), EventResult::Consumed);
    assert_eq!(view.handle_input(&InputEvent::FocusLost), EventResult::Ignored);
    assert_eq!(view.hits, 1);
}
