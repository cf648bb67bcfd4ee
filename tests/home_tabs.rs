mod common;

use common::mock_backend::{MockBackend, MockResponse};
use common::{article_json, article_list_json};
use conduit::state::home::{
    FeedSource, HomeIntent, HomeReducer, HomeState, CUSTOM_TAB_PLACEHOLDER, GLOBAL_FEED, YOUR_FEED,
};
use conduit::state::mvi::Reducer;
use conduit::state::session::SessionIntent;
use conduit::state::{selectors, Action, RootReducer, RootState};
use serde_json::json;

fn titles(state: &HomeState) -> Vec<&str> {
    state.visible_tabs().map(|t| t.title.as_str()).collect()
}

fn reduce(state: HomeState, intents: Vec<HomeIntent>) -> HomeState {
    intents.into_iter().fold(state, HomeReducer::reduce)
}

#[test]
fn initial_state_selects_global_feed_for_guests() {
    let state = HomeState::default();
    assert_eq!(titles(&state), vec![GLOBAL_FEED]);
    assert_eq!(state.selected_tab().title, GLOBAL_FEED);
    assert_eq!(state.feed_source(), FeedSource::Global);
    assert_eq!(
        state.custom_tab().map(|t| t.title.as_str()),
        Some(CUSTOM_TAB_PLACEHOLDER)
    );
}

#[test]
fn selecting_tag_inserts_single_custom_tab() {
    let state = reduce(
        HomeState::default(),
        vec![
            HomeIntent::TagsLoaded(vec!["welcome".into(), "rust".into()]),
            HomeIntent::SelectTag("welcome".into()),
        ],
    );
    assert_eq!(titles(&state), vec![GLOBAL_FEED, "welcome"]);
    assert_eq!(state.tabs.iter().filter(|t| t.custom).count(), 1);
    assert_eq!(state.selected_tab().title, "welcome");
    assert_eq!(state.feed_source(), FeedSource::Tag("welcome".into()));
}

#[test]
fn selecting_global_feed_hides_custom_tab_but_keeps_tag_panel() {
    let state = reduce(
        HomeState::default(),
        vec![
            HomeIntent::TagsLoaded(vec!["welcome".into()]),
            HomeIntent::SelectTag("welcome".into()),
            HomeIntent::SelectTab(GLOBAL_FEED.into()),
        ],
    );
    assert_eq!(titles(&state), vec![GLOBAL_FEED]);
    assert_eq!(state.tags, vec!["welcome".to_string()]);
    let custom = state.custom_tab().unwrap();
    assert!(custom.hidden);
    assert_eq!(custom.title, "welcome");
}

#[test]
fn second_tag_overwrites_custom_slot() {
    let state = reduce(
        HomeState::default(),
        vec![
            HomeIntent::SelectTag("welcome".into()),
            HomeIntent::SelectTag("rust".into()),
        ],
    );
    assert_eq!(titles(&state), vec![GLOBAL_FEED, "rust"]);
    assert_eq!(state.tabs.len(), 3);
}

#[test]
fn hidden_and_unknown_tabs_cannot_be_selected() {
    let state = reduce(
        HomeState::default(),
        vec![
            HomeIntent::SelectTab(YOUR_FEED.into()),
            HomeIntent::SelectTab("nope".into()),
        ],
    );
    assert_eq!(state.selected_tab().title, GLOBAL_FEED);
}

#[test]
fn login_shows_your_feed_without_moving_selection() {
    let state = reduce(
        HomeState::default(),
        vec![HomeIntent::SelectTag("welcome".into()), HomeIntent::AuthChanged(true)],
    );
    assert_eq!(titles(&state), vec![YOUR_FEED, GLOBAL_FEED, "welcome"]);
    assert_eq!(state.selected_tab().title, "welcome");
}

#[test]
fn logout_while_on_your_feed_falls_back_to_global() {
    let state = reduce(
        HomeState::default(),
        vec![
            HomeIntent::AuthChanged(true),
            HomeIntent::SelectTab(YOUR_FEED.into()),
            HomeIntent::AuthChanged(false),
        ],
    );
    assert_eq!(titles(&state), vec![GLOBAL_FEED]);
    assert_eq!(state.selected_tab().title, GLOBAL_FEED);
}

#[test]
fn session_changes_drive_your_feed_visibility() {
    let state = RootReducer::reduce(
        RootState::default(),
        Action::Session(SessionIntent::BootWithoutToken),
    );
    assert_eq!(selectors::visible_tabs(&state).len(), 1);

    let state = RootReducer::reduce(state, Action::Session(SessionIntent::LoggedOut));
    assert!(selectors::visible_tabs(&state)
        .iter()
        .all(|t| t.title != YOUR_FEED));
}

#[tokio::test]
async fn select_tag_loads_first_page_for_that_tag() {
    let backend = MockBackend::start().await;
    let client = common::client(&backend);
    backend
        .enqueue_response(MockResponse::value(article_list_json(
            vec![article_json("hello-welcome", "jake", false, 0)],
            1,
        )))
        .await;

    let status = client.select_tag("welcome").await;
    assert!(status.is_succeeded());

    let requests = backend.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/api/articles");
    assert_eq!(
        requests[0].query.as_deref(),
        Some("limit=10&offset=0&tag=welcome")
    );
    let state = client.store().state();
    assert_eq!(state.home.selected_tab().title, "welcome");
    assert_eq!(state.articles.entities.len(), 1);
}

#[tokio::test]
async fn fetch_tags_fills_tag_panel() {
    let backend = MockBackend::start().await;
    let client = common::client(&backend);
    backend
        .on(
            "GET",
            "/tags",
            MockResponse::value(json!({ "tags": ["welcome", "implementations"] })),
        )
        .await;

    assert!(client.fetch_tags().await.is_succeeded());
    let tags = client.store().select(|s| s.home.tags.clone());
    assert_eq!(tags, vec!["welcome", "implementations"]);
}
