//! In-memory backend for scenario tests
//!
//! Clones share state, so a test keeps one handle while the App owns
//! another and both see the same posts and call log.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use postdesk::api::{
    ApiError, ApproveRequest, Backend, ImprovePromptRequest, ImproveTextRequest, ImprovedText,
    PostQuery, PostUpdate, PublishRequest, ScheduleRequest,
};
use postdesk::model::{AiModel, Post, PostStatus, TargetChannel};

/// A recorded backend call
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListPosts(PostQuery),
    GetPost(i64),
    UpdatePost(i64, PostUpdate),
    Approve(i64, ApproveRequest),
    Schedule(i64, ScheduleRequest),
    Publish(i64, PublishRequest),
    Classify(i64),
    Improve(ImproveTextRequest),
    ImproveWithPrompt(ImprovePromptRequest),
    ListChannels,
    ListModels,
}

impl Call {
    /// Stable name used to inject failures
    pub fn name(&self) -> &'static str {
        match self {
            Call::ListPosts(_) => "list_posts",
            Call::GetPost(_) => "get_post",
            Call::UpdatePost(..) => "update_post",
            Call::Approve(..) => "approve_post",
            Call::Schedule(..) => "schedule_post",
            Call::Publish(..) => "publish_post",
            Call::Classify(_) => "classify_post",
            Call::Improve(_) => "improve_text",
            Call::ImproveWithPrompt(_) => "improve_text_with_prompt",
            Call::ListChannels => "list_target_channels",
            Call::ListModels => "list_ai_models",
        }
    }
}

#[derive(Default)]
struct State {
    posts: Vec<Post>,
    channels: Vec<TargetChannel>,
    models: Vec<AiModel>,
    calls: Vec<Call>,
    failures: HashMap<&'static str, ApiError>,
}

#[derive(Clone, Default)]
pub struct FakeBackend {
    state: Rc<RefCell<State>>,
}

impl FakeBackend {
    pub fn new(posts: Vec<Post>) -> Self {
        let backend = Self::default();
        backend.state.borrow_mut().posts = posts;
        backend
    }

    pub fn with_channels(self, channels: Vec<TargetChannel>) -> Self {
        self.state.borrow_mut().channels = channels;
        self
    }

    pub fn with_models(self, models: Vec<AiModel>) -> Self {
        self.state.borrow_mut().models = models;
        self
    }

    /// Make every call named `name` fail with `error`
    pub fn fail(&self, name: &'static str, error: ApiError) {
        self.state.borrow_mut().failures.insert(name, error);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    /// Calls other than list reads
    pub fn mutations(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| {
                !matches!(
                    c,
                    Call::ListPosts(_) | Call::GetPost(_) | Call::ListChannels | Call::ListModels
                )
            })
            .collect()
    }

    pub fn count(&self, name: &str) -> usize {
        self.calls().iter().filter(|c| c.name() == name).count()
    }

    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    pub fn post(&self, id: i64) -> Option<Post> {
        self.state.borrow().posts.iter().find(|p| p.id == id).cloned()
    }

    fn record(&self, call: Call) -> Result<(), ApiError> {
        let mut state = self.state.borrow_mut();
        let failure = state.failures.get(call.name()).cloned();
        state.calls.push(call);
        match failure {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn modify(&self, id: i64, change: impl FnOnce(&mut Post)) -> Result<Post, ApiError> {
        let mut state = self.state.borrow_mut();
        let post = state
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ApiError::from_response(404, r#"{"detail":"Post not found"}"#))?;
        change(post);
        Ok(post.clone())
    }
}

impl Backend for FakeBackend {
    fn list_posts(&self, query: &PostQuery) -> Result<Vec<Post>, ApiError> {
        self.record(Call::ListPosts(query.clone()))?;
        let state = self.state.borrow();
        Ok(state
            .posts
            .iter()
            .filter(|p| query.status.as_ref().is_none_or(|s| &p.status == s))
            .cloned()
            .collect())
    }

    fn get_post(&self, id: i64) -> Result<Post, ApiError> {
        self.record(Call::GetPost(id))?;
        self.modify(id, |_| {})
    }

    fn update_post(&self, id: i64, update: &PostUpdate) -> Result<Post, ApiError> {
        self.record(Call::UpdatePost(id, update.clone()))?;
        self.modify(id, |post| {
            if let Some(text) = &update.original_text {
                post.original_text = Some(text.clone());
            }
            if let Some(text) = &update.processed_text {
                post.processed_text = Some(text.clone());
            }
            if let Some(status) = &update.status {
                post.status = status.clone();
            }
            if let Some(notes) = &update.admin_notes {
                post.admin_notes = Some(notes.clone());
            }
        })
    }

    fn approve_post(&self, id: i64, request: &ApproveRequest) -> Result<Post, ApiError> {
        self.record(Call::Approve(id, request.clone()))?;
        self.modify(id, |post| {
            post.status = PostStatus::Approved;
            post.target_channel_id = Some(request.target_channel_id);
        })
    }

    fn schedule_post(&self, id: i64, request: &ScheduleRequest) -> Result<Post, ApiError> {
        self.record(Call::Schedule(id, request.clone()))?;
        self.modify(id, |post| {
            post.status = PostStatus::Scheduled;
            post.scheduled_at = Some(request.scheduled_at.clone());
            post.target_channel_id = Some(request.target_channel_id);
        })
    }

    fn publish_post(&self, id: i64, request: &PublishRequest) -> Result<Post, ApiError> {
        self.record(Call::Publish(id, request.clone()))?;
        self.modify(id, |post| {
            post.status = PostStatus::Published;
            post.target_channel_id = Some(request.target_channel_id);
            if let Some(text) = &request.processed_text {
                post.processed_text = Some(text.clone());
            }
        })
    }

    fn classify_post(&self, id: i64) -> Result<Post, ApiError> {
        self.record(Call::Classify(id))?;
        self.modify(id, |post| {
            post.llm_classification_result = Some("news".to_string());
            post.llm_classification_confidence = Some(87);
        })
    }

    fn improve_text(&self, request: &ImproveTextRequest) -> Result<ImprovedText, ApiError> {
        self.record(Call::Improve(request.clone()))?;
        Ok(ImprovedText {
            improved_text: format!("Improved: {}", request.text),
        })
    }

    fn improve_text_with_prompt(
        &self,
        request: &ImprovePromptRequest,
    ) -> Result<ImprovedText, ApiError> {
        self.record(Call::ImproveWithPrompt(request.clone()))?;
        Ok(ImprovedText {
            improved_text: format!("{} [{}]", request.text, request.prompt),
        })
    }

    fn list_target_channels(&self, active_only: bool) -> Result<Vec<TargetChannel>, ApiError> {
        self.record(Call::ListChannels)?;
        let state = self.state.borrow();
        Ok(state
            .channels
            .iter()
            .filter(|c| !active_only || c.is_active)
            .cloned()
            .collect())
    }

    fn list_ai_models(&self, active_only: bool) -> Result<Vec<AiModel>, ApiError> {
        self.record(Call::ListModels)?;
        let state = self.state.borrow();
        Ok(state
            .models
            .iter()
            .filter(|m| !active_only || m.is_active)
            .cloned()
            .collect())
    }
}
