//! Plan view canvas
//!
//! Draws a schematic purlin line with one tick per support, scaled by the
//! page's [`PlanView`] zoom. Span lengths are not drawn to scale; equal spacing
//! is used until real geometry is wired in.

use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke, Text};
use iced::widget::{button, row, text, Canvas, Column, Space};
use iced::{Color, Element, Length, Padding, Point, Rectangle, Renderer, Size, Theme};

use purlin_core::canvas::{PlanView, ZoomMessage};
use purlin_core::pages::ProjectMessage;

use crate::Message;

/// Canvas program for the plan placeholder
pub struct PlanDiagram {
    scale: f32,
    spans: usize,
}

impl PlanDiagram {
    pub fn new(view: &PlanView, spans: usize) -> Self {
        Self {
            scale: view.scale() as f32,
            spans: spans.max(1),
        }
    }
}

impl canvas::Program<Message> for PlanDiagram {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let line_color = Color::from_rgb(0.3, 0.3, 0.3);
        let border_color = Color::from_rgb(0.8, 0.8, 0.8);

        let border = Path::rectangle(Point::ORIGIN, Size::new(bounds.width, bounds.height));
        frame.stroke(&border, Stroke::default().with_color(border_color).with_width(1.0));

        let center = frame.center();
        let width = bounds.width * 0.8 * self.scale;
        let left = center.x - width / 2.0;

        let purlin = Path::line(Point::new(left, center.y), Point::new(left + width, center.y));
        frame.stroke(&purlin, Stroke::default().with_color(line_color).with_width(3.0));

        let tick = 8.0 * self.scale;
        for i in 0..=self.spans {
            let x = left + width * i as f32 / self.spans as f32;
            let support = Path::line(Point::new(x, center.y - tick), Point::new(x, center.y + tick));
            frame.stroke(&support, Stroke::default().with_color(line_color).with_width(2.0));
        }

        frame.fill_text(Text {
            content: format!("{:.0}%", self.scale * 100.0),
            position: Point::new(6.0, 6.0),
            color: line_color,
            size: iced::Pixels(10.0),
            ..Text::default()
        });

        vec![frame.into_geometry()]
    }
}

fn zoom_button(label: &str, zoom: ZoomMessage) -> iced::widget::Button<'_, Message> {
    button(text(label).size(11))
        .on_press(Message::Project(ProjectMessage::Zoom(zoom)))
        .padding(Padding::from([3, 8]))
        .style(button::secondary)
}

/// Plan canvas with its zoom controls
pub fn view(view: &PlanView, spans: usize) -> Column<'static, Message> {
    let canvas_widget: Element<'static, Message> = Canvas::new(PlanDiagram::new(view, spans))
        .width(Length::Fill)
        .height(Length::Fixed(220.0))
        .into();

    Column::new()
        .push(row![
            text("Plan").size(12),
            Space::new().width(Length::Fill),
            zoom_button("+", ZoomMessage::In),
            zoom_button("-", ZoomMessage::Out),
            zoom_button("Fit", ZoomMessage::Fit),
        ]
        .spacing(4))
        .push(Space::new().height(4))
        .push(canvas_widget)
}
