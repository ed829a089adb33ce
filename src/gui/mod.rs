use iced::widget::{button, column, container, pick_list, row, scrollable, text, text_input};
use iced::{Alignment, Application, Command, Element, Length};
use iced_aw::Spinner;
use tracing::error;

use crate::core::api::omdb::OmdbClient;
use crate::core::enrichment::{self, Completion};
use crate::core::search_result::SeasonOption;
use crate::core::settings_config::{self, Config};
use crate::core::view_state::{self, Intent, ViewState};

mod episode_table;
mod styles;

#[derive(Debug, Clone)]
pub enum Message {
    State(view_state::Message),
    EpisodeTitlePressed(String),
}

pub struct TvShowFinderGui {
    state: ViewState,
    client: OmdbClient,
    theme: settings_config::Theme,
}

impl Application for TvShowFinderGui {
    type Executor = iced::executor::Default;
    type Message = Message;
    type Theme = iced::Theme;
    type Flags = Config;

    fn new(config: Self::Flags) -> (Self, Command<Self::Message>) {
        let mut gui = Self {
            state: ViewState::default(),
            client: OmdbClient::new(&config.api),
            theme: config.appearance.theme,
        };

        // Showing the default query right away
        let command = gui.update_state(Intent::TriggerSearch.into());
        (gui, command)
    }

    fn title(&self) -> String {
        "TV Shows".to_string()
    }

    fn theme(&self) -> iced::Theme {
        match self.theme {
            settings_config::Theme::Light => iced::Theme::Light,
            settings_config::Theme::Dark => iced::Theme::Dark,
        }
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::State(message) => self.update_state(message),
            Message::EpisodeTitlePressed(url) => {
                webbrowser::open(&url)
                    .unwrap_or_else(|err| error!("failed to open episode page {}: {}", url, err));
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message, iced::Renderer<Self::Theme>> {
        let content = column![
            text("TV Shows").size(28),
            self.search_tools(),
            episode_table::summary_row(&self.state.result),
            scrollable(episode_table::episode_table(&self.state.result.episodes))
                .height(Length::Fill),
        ]
        .spacing(10)
        .padding(20);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl TvShowFinderGui {
    /// Feeds the message to the view state and turns the fetches it asks for into commands
    fn update_state(&mut self, message: view_state::Message) -> Command<Message> {
        let fetches = self.state.update(message);

        Command::batch(fetches.into_iter().map(|fetch| {
            Command::perform(
                enrichment::perform(self.client.clone(), fetch),
                |completion: Completion| Message::State(completion.into()),
            )
        }))
    }

    fn search_tools(&self) -> Element<'_, Message> {
        let search_input = text_input("Search Shows...", &self.state.query.title)
            .on_input(|term| Message::State(Intent::ChangeSearchTerm(term).into()))
            .on_submit(Message::State(Intent::TriggerSearch.into()))
            .width(300);

        let mut search_button = button(text("Search"));
        if !self.state.loading {
            search_button = search_button.on_press(Message::State(Intent::TriggerSearch.into()));
        }

        let season_options = self.state.season_options();
        let selected_season = season_options
            .iter()
            .find(|option| option.value == self.state.query.season_number)
            .cloned();

        let season_picker = pick_list(season_options, selected_season, |option: SeasonOption| {
            Message::State(Intent::ChangeSeason(option.value).into())
        })
        .placeholder("Select Season");

        let mut tools = row![
            text("Search Term:"),
            search_input,
            search_button,
            text("Season:"),
            season_picker,
        ]
        .spacing(10)
        .align_items(Alignment::Center);

        if self.state.loading {
            tools = tools.push(Spinner::new());
        }

        tools.into()
    }
}
