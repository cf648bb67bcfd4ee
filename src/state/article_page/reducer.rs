use crate::state::article_page::intent::ArticlePageIntent;
use crate::state::article_page::state::ArticlePageState;
use crate::state::mvi::Reducer;
use crate::state::status::RequestStatus;

pub struct ArticlePageReducer;

impl Reducer for ArticlePageReducer {
    type State = ArticlePageState;
    type Intent = ArticlePageIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ArticlePageIntent::Enter { slug } => {
                return ArticlePageState {
                    slug: Some(slug),
                    ..Default::default()
                };
            }
            ArticlePageIntent::Leave => return ArticlePageState::default(),

            ArticlePageIntent::ArticlePending { slug } if state.is_current(&slug) => {
                state.status = RequestStatus::Loading;
            }
            ArticlePageIntent::ArticleLoaded { slug, article } if state.is_current(&slug) => {
                state.article = Some(article);
                state.status = RequestStatus::Succeeded;
                state.error = None;
            }
            ArticlePageIntent::ArticleFailed { slug, message } if state.is_current(&slug) => {
                state.status = RequestStatus::Failed;
                state.error = Some(message);
            }
            ArticlePageIntent::ArticleRefreshed(article) => {
                if state.is_current(&article.slug) {
                    state.article = Some(article);
                }
            }

            ArticlePageIntent::DeletePending { slug } if state.is_current(&slug) => {
                state.status = RequestStatus::Loading;
            }
            ArticlePageIntent::ArticleDeleted { slug } if state.is_current(&slug) => {
                state.status = RequestStatus::Succeeded;
                state.deleted = true;
            }

            ArticlePageIntent::CommentsPending { slug } if state.is_current(&slug) => {
                state.comment_status = RequestStatus::Loading;
            }
            ArticlePageIntent::CommentsLoaded { slug, comments } if state.is_current(&slug) => {
                state.comments = comments;
                state.comment_status = RequestStatus::Succeeded;
            }

            ArticlePageIntent::DraftChanged(text) => {
                state.draft = text;
            }
            ArticlePageIntent::CommentSubmitted { slug } if state.is_current(&slug) => {
                state.draft.clear();
                state.comment_status = RequestStatus::Loading;
            }
            ArticlePageIntent::CommentPosted { slug, comment } if state.is_current(&slug) => {
                state.comments.push(comment);
                state.comment_status = RequestStatus::Succeeded;
            }
            ArticlePageIntent::CommentDeleted { slug, id } if state.is_current(&slug) => {
                state.comments.retain(|c| c.id != id);
                state.comment_status = RequestStatus::Succeeded;
            }
            ArticlePageIntent::CommentFailed { slug, message } if state.is_current(&slug) => {
                state.comment_status = RequestStatus::Failed;
                state.error = Some(message);
            }

            // Result for a page that is no longer on screen.
            _ => {}
        }
        state
    }
}
