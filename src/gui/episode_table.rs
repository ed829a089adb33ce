use iced::widget::{button, column, container, horizontal_rule, row, text, Column};
use iced::{theme, Alignment, Element, Length};

use crate::core::search_result::{Episode, SearchResult};
use crate::core::view_state::Intent;
use crate::gui::styles;

use super::Message;

const NUMBER_WIDTH: u16 = 70;
const TITLE_WIDTH: u16 = 220;
const RELEASED_WIDTH: u16 = 100;
const RATING_WIDTH: u16 = 90;
const ACTIONS_WIDTH: u16 = 80;

/// The show name and its season's average rating
pub fn summary_row(result: &SearchResult) -> Element<'_, Message> {
    row![
        text("Show Name:"),
        text(result.show_title.as_deref().unwrap_or_default())
            .style(styles::text_styles::accent_color_theme())
            .width(Length::Fill),
        text("Average Rating:"),
        text(result.average_rating()).width(60),
    ]
    .spacing(10)
    .padding(10)
    .into()
}

pub fn episode_table(episodes: &[Episode]) -> Element<'_, Message> {
    let header = row![
        text("Episode #").width(NUMBER_WIDTH),
        text("Title").width(TITLE_WIDTH),
        text("Plot").width(Length::Fill),
        text("Released").width(RELEASED_WIDTH),
        text("IMDb Rating").width(RATING_WIDTH),
        text("Actions").width(ACTIONS_WIDTH),
    ]
    .spacing(10);

    let body: Element<'_, Message> = if episodes.is_empty() {
        container(text("No results found"))
            .width(Length::Fill)
            .center_x()
            .padding(10)
            .into()
    } else {
        Column::with_children(episodes.iter().map(episode_row).collect())
            .spacing(8)
            .into()
    };

    column![header, horizontal_rule(1), body]
        .spacing(8)
        .padding(10)
        .into()
}

fn episode_row(episode: &Episode) -> Element<'_, Message> {
    let mut rating = text(&episode.rating).width(RATING_WIDTH);
    if episode.is_highly_rated() {
        rating = rating.style(styles::text_styles::highlight_theme());
    }

    let title = button(text(&episode.title))
        .style(theme::Button::Text)
        .on_press(Message::EpisodeTitlePressed(episode.imdb_url()))
        .width(TITLE_WIDTH);

    let delete = button(text("Delete"))
        .style(theme::Button::Destructive)
        .on_press(Message::State(
            Intent::DeleteEpisode(episode.id.clone()).into(),
        ));

    row![
        text(episode.episode_number).width(NUMBER_WIDTH),
        title,
        text(episode.plot.as_deref().unwrap_or("…")).width(Length::Fill),
        text(episode.released_month()).width(RELEASED_WIDTH),
        rating,
        container(delete).width(ACTIONS_WIDTH),
    ]
    .spacing(10)
    .align_items(Alignment::Center)
    .into()
}
