use crate::state::articles::intent::ArticlesIntent;
use crate::state::articles::state::ArticlesState;
use crate::state::mvi::Reducer;
use crate::state::status::RequestStatus;

pub struct ArticlesReducer;

impl Reducer for ArticlesReducer {
    type State = ArticlesState;
    type Intent = ArticlesIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ArticlesIntent::Pending => {
                state.status = RequestStatus::Loading;
                state
            }
            ArticlesIntent::Loaded {
                articles,
                articles_count,
            } => {
                state.entities.set_all(articles);
                state.articles_count = articles_count;
                state.status = RequestStatus::Succeeded;
                state.error = None;
                state
            }
            ArticlesIntent::Failed(message) => {
                state.status = RequestStatus::Failed;
                state.error = Some(message);
                state
            }
            ArticlesIntent::FavoritePending => {
                state.favorite_status = RequestStatus::Loading;
                state
            }
            ArticlesIntent::Upserted(article) => {
                state.entities.set_one(article);
                state.favorite_status = RequestStatus::Succeeded;
                state.favorite_error = None;
                state
            }
            ArticlesIntent::FavoriteFailed(message) => {
                state.favorite_status = RequestStatus::Failed;
                state.favorite_error = Some(message);
                state
            }
            ArticlesIntent::Reset => ArticlesState::default(),
        }
    }
}
