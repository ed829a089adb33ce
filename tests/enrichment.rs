use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tv_show_finder::core::api::omdb::{ApiError, OmdbClient};
use tv_show_finder::core::enrichment::Coordinator;
use tv_show_finder::core::view_state::{Intent, ViewState};

const API_KEY: &str = "test-key";
const EPISODE_COUNT: usize = 8;

fn client(server: &MockServer) -> OmdbClient {
    OmdbClient::with_endpoints(
        format!("{}/", server.uri()),
        format!("{}/img/", server.uri()),
        API_KEY.to_owned(),
    )
}

fn episode_id(index: usize) -> String {
    format!("tt32227{:02}", index)
}

fn season_body(title: &str) -> serde_json::Value {
    let episodes: Vec<_> = (1..=EPISODE_COUNT)
        .map(|index| {
            json!({
                "Title": format!("Episode {}", index),
                "Released": "2014-04-06",
                "Episode": index.to_string(),
                "imdbRating": "8.0",
                "imdbID": episode_id(index),
            })
        })
        .collect();

    json!({
        "Title": title,
        "Season": "1",
        "totalSeasons": "6",
        "Episodes": episodes,
        "Response": "True",
    })
}

async fn mount_season(server: &MockServer, title: &str, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("apikey", API_KEY))
        .and(query_param("t", title))
        .and(query_param("Season", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(season_body(title)))
        .expect(expected_calls)
        .mount(server)
        .await;
}

/// Plots answer in reverse order, the last episode's plot arrives first
async fn mount_plots(server: &MockServer) {
    for index in 1..=EPISODE_COUNT {
        let delay = Duration::from_millis(((EPISODE_COUNT - index) * 6) as u64);

        Mock::given(method("GET"))
            .and(path("/"))
            .and(query_param("i", episode_id(index).as_str()))
            .and(query_param("plot", "short"))
            .and(query_param("r", "json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({
                        "Title": format!("Episode {}", index),
                        "Plot": format!("Plot of episode {}", index),
                        "imdbID": episode_id(index),
                        "Response": "True",
                    }))
                    .set_delay(delay),
            )
            .expect(1)
            .mount(server)
            .await;
    }
}

#[tokio::test]
async fn search_loads_season_and_enriches_every_episode() {
    let server = MockServer::start().await;
    mount_season(&server, "Silicon Valley", 1).await;
    mount_plots(&server).await;

    let mut coordinator = Coordinator::new(client(&server), ViewState::default());
    coordinator.dispatch(Intent::TriggerSearch);
    assert!(coordinator.state().loading);

    coordinator.settle().await;

    let state = coordinator.state();
    assert!(!state.loading);
    assert_eq!(state.result.show_title.as_deref(), Some("Silicon Valley"));
    assert_eq!(state.result.total_seasons, 6);
    assert_eq!(state.result.episodes.len(), EPISODE_COUNT);

    for (index, episode) in state.result.episodes.iter().enumerate() {
        assert_eq!(episode.id, episode_id(index + 1));
        assert_eq!(
            episode.plot.as_deref(),
            Some(format!("Plot of episode {}", index + 1).as_str())
        );
    }
}

#[tokio::test]
async fn search_in_flight_is_not_started_twice() {
    let server = MockServer::start().await;
    mount_season(&server, "Silicon Valley", 1).await;
    mount_plots(&server).await;

    let mut coordinator = Coordinator::new(client(&server), ViewState::default());
    coordinator.dispatch(Intent::TriggerSearch);
    coordinator.dispatch(Intent::TriggerSearch);

    assert_eq!(coordinator.in_flight(), 1);

    coordinator.settle().await;
    assert_eq!(coordinator.state().result.episodes.len(), EPISODE_COUNT);
}

#[tokio::test]
async fn deleted_episode_stays_deleted_when_its_plot_arrives() {
    let server = MockServer::start().await;
    mount_season(&server, "Silicon Valley", 1).await;
    mount_plots(&server).await;

    let mut coordinator = Coordinator::new(client(&server), ViewState::default());
    coordinator.dispatch(Intent::TriggerSearch);

    // The season arrives first, every plot fetch is still pending after it
    assert!(coordinator.apply_next().await);
    assert_eq!(coordinator.in_flight(), EPISODE_COUNT);

    coordinator.dispatch(Intent::DeleteEpisode(episode_id(1)));
    coordinator.settle().await;

    let episodes = &coordinator.state().result.episodes;
    assert_eq!(episodes.len(), EPISODE_COUNT - 1);
    assert!(episodes.iter().all(|episode| episode.id != episode_id(1)));
    assert!(episodes.iter().all(|episode| episode.plot.is_some()));
}

#[tokio::test]
async fn failed_season_keeps_previous_result() {
    let server = MockServer::start().await;
    mount_season(&server, "Silicon Valley", 1).await;
    mount_plots(&server).await;

    Mock::given(method("GET"))
        .and(query_param("t", "Unknown Show"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Response": "False",
            "Error": "Series or season not found!",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut coordinator = Coordinator::new(client(&server), ViewState::default());
    coordinator.dispatch(Intent::TriggerSearch);
    coordinator.settle().await;
    let previous = coordinator.state().result.clone();

    coordinator.dispatch(Intent::ChangeSearchTerm("Unknown Show".to_owned()));
    coordinator.dispatch(Intent::TriggerSearch);
    coordinator.settle().await;

    assert!(!coordinator.state().loading);
    assert_eq!(coordinator.state().result, previous);
}

#[tokio::test]
async fn failed_plot_leaves_only_that_episode_unenriched() {
    let server = MockServer::start().await;
    mount_season(&server, "Silicon Valley", 1).await;

    Mock::given(method("GET"))
        .and(query_param("i", episode_id(3).as_str()))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("plot", "short"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Plot": "Some plot",
            "Response": "True",
        })))
        .mount(&server)
        .await;

    let mut coordinator = Coordinator::new(client(&server), ViewState::default());
    coordinator.dispatch(Intent::TriggerSearch);
    coordinator.settle().await;

    for episode in &coordinator.state().result.episodes {
        if episode.id == episode_id(3) {
            assert_eq!(episode.plot, None);
        } else {
            assert_eq!(episode.plot.as_deref(), Some("Some plot"));
        }
    }
}

#[tokio::test]
async fn empty_title_sends_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut coordinator = Coordinator::new(client(&server), ViewState::default());
    coordinator.dispatch(Intent::ChangeSearchTerm(String::new()));
    coordinator.dispatch(Intent::TriggerSearch);

    assert_eq!(coordinator.in_flight(), 0);
    assert!(!coordinator.apply_next().await);
    assert!(!coordinator.state().loading);
}

#[tokio::test]
async fn poster_is_fetched_from_the_image_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/img/"))
        .and(query_param("apikey", API_KEY))
        .and(query_param("i", "tt3222784"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "image/jpeg")
                .set_body_bytes(vec![0xff, 0xd8, 0xff]),
        )
        .expect(1)
        .mount(&server)
        .await;

    let poster = client(&server)
        .fetch_episode_poster("tt3222784")
        .await
        .unwrap();

    assert_eq!(poster.bytes.as_ref(), &[0xff, 0xd8, 0xff]);
    assert_eq!(poster.content_type.as_deref(), Some("image/jpeg"));
}

#[tokio::test]
async fn server_error_is_a_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client(&server).fetch_episode("tt3222784").await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}
