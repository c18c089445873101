use std::sync::Arc;
use rocket::{State, post, form::{Form, FromForm}, response::{Flash, Redirect}};
use tracing::instrument;
use shared::{models::*, Member};
use crate::{
    aggregator::VoteAggregator,
    config::VotingConfig,
    reader::VoteReader,
    recorder::VoteRecorder,
    store::VoteStore,
    utils::Referrer,
};

pub struct AppState {
    pub store: Arc<dyn VoteStore>,
    pub config: VotingConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn VoteStore>, config: VotingConfig) -> Self {
        Self { store, config }
    }

    pub fn recorder(&self, category: &str) -> VoteRecorder {
        VoteRecorder::new(category, self.config.root_for(category))
    }

    pub fn reader(&self, category: &str) -> VoteReader {
        VoteReader::for_category(self.store.clone(), category)
    }

    pub fn aggregator(&self, category: &str, id_property: &str) -> VoteAggregator {
        VoteAggregator::bind(self.store.clone(), category, id_property)
    }
}

#[derive(Debug, FromForm)]
pub struct VoteForm {
    pub amount: Option<String>,
}

// An empty id never reaches the handler: `/<category>//vote` does not match
// and falls through to the 404 catcher.
#[instrument(skip_all, fields(category = %category, item = %id))]
#[post("/<category>/<id>/vote", data = "<form>")]
pub async fn cast_vote(
    state: &State<AppState>,
    category: &str,
    id: &str,
    form: Option<Form<VoteForm>>,
    member: Option<Member>,
    referrer: Referrer,
) -> Flash<Redirect> {
    let submission = VoteSubmission {
        id: id.to_string(),
        amount: form.and_then(|f| f.into_inner().amount),
    };

    let recorder = state.recorder(category);
    let outcome = recorder.submit(state.store.as_ref(), &submission, member.as_ref()).await;

    recorder.respond(&outcome, referrer.0.as_deref(), &state.config.signup_path)
}
