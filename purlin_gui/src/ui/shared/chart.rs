//! Sustainability bar chart

use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke, Text};
use iced::{Color, Point, Rectangle, Renderer, Size, Theme};

use purlin_core::pages::home::ChartBar;

use crate::Message;

pub struct SustainabilityChart {
    bars: Vec<ChartBar>,
}

impl SustainabilityChart {
    pub fn new(bars: Vec<ChartBar>) -> Self {
        Self { bars }
    }
}

impl canvas::Program<Message> for SustainabilityChart {
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
        let axis_color = Color::from_rgb(0.5, 0.5, 0.5);
        let text_color = Color::from_rgb(0.2, 0.2, 0.2);

        let margin = 24.0;
        let plot_height = bounds.height - 2.0 * margin;
        let plot_width = bounds.width - 2.0 * margin;
        let baseline = margin + plot_height;

        let axis = Path::line(Point::new(margin, baseline), Point::new(margin + plot_width, baseline));
        frame.stroke(&axis, Stroke::default().with_color(axis_color).with_width(1.0));

        if self.bars.is_empty() {
            return vec![frame.into_geometry()];
        }

        let slot = plot_width / self.bars.len() as f32;
        let bar_width = slot * 0.6;
        for (i, bar) in self.bars.iter().enumerate() {
            let height = plot_height * (bar.value as f32 / 100.0);
            let x = margin + slot * i as f32 + (slot - bar_width) / 2.0;
            let [r, g, b] = bar.band.color_rgb();

            frame.fill_rectangle(
                Point::new(x, baseline - height),
                Size::new(bar_width, height),
                Color::from_rgb(r, g, b),
            );
            frame.fill_text(Text {
                content: format!("{:.0}", bar.value),
                position: Point::new(x + bar_width / 2.0, baseline - height - 12.0),
                color: text_color,
                size: iced::Pixels(10.0),
                align_x: iced::alignment::Horizontal::Center.into(),
                ..Text::default()
            });
            frame.fill_text(Text {
                content: bar.label.clone(),
                position: Point::new(x + bar_width / 2.0, baseline + 4.0),
                color: text_color,
                size: iced::Pixels(9.0),
                align_x: iced::alignment::Horizontal::Center.into(),
                ..Text::default()
            });
        }

        vec![frame.into_geometry()]
    }
}
