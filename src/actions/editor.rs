use crate::actions::{report, Conduit};
use crate::model::ArticleDraft;
use crate::state::editor::EditorIntent;
use crate::state::RequestStatus;

impl Conduit {
    /// Load an existing article and prefill the editor with it.
    pub async fn load_for_edit(&self, slug: &str) -> RequestStatus {
        self.store.dispatch(EditorIntent::LoadPending {
            slug: slug.to_string(),
        });
        match self.api.get_article(slug).await {
            Ok(article) => {
                self.store.dispatch(EditorIntent::Loaded(article));
                RequestStatus::Succeeded
            }
            Err(e) => {
                self.store.dispatch(EditorIntent::LoadFailed {
                    slug: slug.to_string(),
                    message: report("load_for_edit", &e),
                });
                RequestStatus::Failed
            }
        }
    }

    pub async fn create_article(&self, draft: &ArticleDraft) -> RequestStatus {
        self.store.dispatch(EditorIntent::SavePending);
        match self.api.create_article(draft).await {
            Ok(article) => {
                self.store.dispatch(EditorIntent::Saved(article));
                RequestStatus::Succeeded
            }
            Err(e) => {
                self.store
                    .dispatch(EditorIntent::SaveFailed(report("create_article", &e)));
                RequestStatus::Failed
            }
        }
    }

    pub async fn edit_article(&self, slug: &str, draft: &ArticleDraft) -> RequestStatus {
        self.store.dispatch(EditorIntent::SavePending);
        match self.api.update_article(slug, draft).await {
            Ok(article) => {
                self.store.dispatch(EditorIntent::Saved(article));
                RequestStatus::Succeeded
            }
            Err(e) => {
                self.store
                    .dispatch(EditorIntent::SaveFailed(report("edit_article", &e)));
                RequestStatus::Failed
            }
        }
    }

    pub fn reset_editor(&self) {
        self.store.dispatch(EditorIntent::Reset);
    }
}
