//! Home page: welcome text, sustainability chart and material cards

use iced::widget::{column, container, row, scrollable, text, Canvas, Column, Space};
use iced::{Element, Length};

use purlin_core::materials::MaterialsState;
use purlin_core::pages::home::{
    MaterialCard, CHART_HEADING, FEATURED_HEADING, FEATURES, SUBTITLE, WELCOME_HEADING, WELCOME_TEXT,
};
use purlin_core::pages::HomePage;

use crate::Message;
use super::shared::chart::SustainabilityChart;

pub fn view(page: &HomePage) -> Element<'_, Message> {
    let body: Element<'_, Message> = match &page.materials {
        MaterialsState::Loading => text("Loading materials...").size(12).into(),
        MaterialsState::Failed(message) => text(message.as_str()).size(12).color([0.8, 0.2, 0.2]).into(),
        MaterialsState::Loaded(_) => view_materials(page),
    };

    let mut features = row![].spacing(16);
    for (title, description) in FEATURES {
        features = features.push(
            column![text(title).size(13), text(description).size(11)]
                .spacing(4)
                .width(Length::FillPortion(1)),
        );
    }

    scrollable(
        column![
            text(SUBTITLE).size(12).color([0.5, 0.5, 0.5]),
            Space::new().height(12),
            text(WELCOME_HEADING).size(20),
            text(WELCOME_TEXT).size(12),
            Space::new().height(16),
            body,
            Space::new().height(16),
            features,
        ]
        .spacing(6)
        .padding(8),
    )
    .into()
}

fn view_materials(page: &HomePage) -> Element<'_, Message> {
    let chart: Element<'_, Message> = Canvas::new(SustainabilityChart::new(page.chart_data()))
        .width(Length::Fill)
        .height(Length::Fixed(220.0))
        .into();

    let mut cards = row![].spacing(12);
    for card in page.cards() {
        cards = cards.push(view_card(card));
    }

    column![
        text(CHART_HEADING).size(14),
        chart,
        Space::new().height(12),
        text(FEATURED_HEADING).size(14),
        cards,
    ]
    .spacing(6)
    .into()
}

fn view_card(card: MaterialCard) -> Element<'static, Message> {
    let mut properties = Column::new().spacing(2);
    for (name, value) in card.key_properties {
        properties = properties.push(text(format!("{}: {}", name, value)).size(10));
    }
    let mut use_cases = Column::new().spacing(2);
    for use_case in card.use_cases {
        use_cases = use_cases.push(text(format!("- {}", use_case)).size(10));
    }

    container(
        column![
            text(card.name).size(14),
            text(card.category).size(10).color([0.5, 0.5, 0.5]),
            text(card.description).size(11),
            properties,
            use_cases,
            row![
                text(format!("Sustainability: {}", card.sustainability_score)).size(10),
                Space::new().width(Length::Fill),
                text(format!("{} / unit", card.cost)).size(11),
            ],
        ]
        .spacing(6),
    )
    .padding(10)
    .width(Length::FillPortion(1))
    .style(container::bordered_box)
    .into()
}
