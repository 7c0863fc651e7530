//! Remote post list
//!
//! The network client and cache live outside this crate behind
//! [`ListRepository`]. [`PostFeed`] holds what the list screen shows and
//! makes sure only the newest fetch decides it.

use serde::{Deserialize, Serialize};

/// A post from the remote list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u32,
    pub user_id: u32,
    pub title: String,
    pub body: String,
}

/// Fetch failures, with messages fit for the UI
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    #[error("Invalid URL")]
    InvalidUrl,

    #[error("Invalid server response")]
    InvalidResponse,

    #[error("HTTP error: {0}")]
    HttpError(u16),

    #[error("Decoding error: {0}")]
    Decoding(String),

    #[error("No internet connection")]
    NoConnection,
}

/// Remote list source with an offline cache
pub trait ListRepository {
    fn fetch_list(&self) -> Result<Vec<Post>, NetworkError>;
    fn cached_list(&self) -> Option<Vec<Post>>;
    fn cache_list(&self, posts: &[Post]);
}

/// What the list screen shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PostListState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<Post>),
    /// Cached posts shown because the network failed
    Offline(Vec<Post>),
    Error(String),
}

impl PostListState {
    pub fn posts(&self) -> &[Post] {
        match self {
            PostListState::Loaded(posts) | PostListState::Offline(posts) => posts,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, PostListState::Loading)
    }

    pub fn is_offline(&self) -> bool {
        matches!(self, PostListState::Offline(_))
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            PostListState::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Identifies one fetch; only the latest ticket may update the feed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket(u64);

/// List state plus fetch reconciliation
#[derive(Debug, Default)]
pub struct PostFeed {
    state: PostListState,
    generation: u64,
    refreshing: bool,
}

impl PostFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PostListState {
        &self.state
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    /// Nothing to show and nothing wrong
    pub fn show_empty_state(&self) -> bool {
        !self.state.is_loading() && self.state.posts().is_empty() && self.state.error_message().is_none()
    }

    /// Show cached posts before the first fetch
    pub fn load_cached_if_idle(&mut self, repo: &dyn ListRepository) {
        if self.state != PostListState::Idle {
            return;
        }
        if let Some(posts) = repo.cached_list().filter(|p| !p.is_empty()) {
            self.state = PostListState::Offline(posts);
        }
    }

    /// Start a fetch. Any ticket issued earlier becomes stale.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.generation += 1;
        self.refreshing = true;
        if self.state.posts().is_empty() {
            self.state = PostListState::Loading;
        }
        RefreshTicket(self.generation)
    }

    /// Apply a fetch result. Returns false if the ticket was stale.
    ///
    /// Success is cached and shown. On failure, posts already on screen are
    /// kept; otherwise cached posts are shown offline, or the error.
    pub fn complete(
        &mut self,
        ticket: RefreshTicket,
        result: Result<Vec<Post>, NetworkError>,
        repo: &dyn ListRepository,
    ) -> bool {
        if ticket.0 != self.generation {
            log::debug!("Dropping stale fetch result {:?}", ticket);
            return false;
        }
        self.refreshing = false;

        match result {
            Ok(posts) => {
                log::info!("Fetched {} posts", posts.len());
                repo.cache_list(&posts);
                self.state = PostListState::Loaded(posts);
            }
            Err(e) => {
                log::warn!("Post fetch failed: {}", e);
                if !self.state.posts().is_empty() {
                    return true;
                }
                self.state = match repo.cached_list().filter(|p| !p.is_empty()) {
                    Some(cached) => PostListState::Offline(cached),
                    None => PostListState::Error(e.to_string()),
                };
            }
        }
        true
    }

    /// Fetch synchronously and apply the result
    pub fn refresh(&mut self, repo: &dyn ListRepository) {
        let ticket = self.begin_refresh();
        let result = repo.fetch_list();
        self.complete(ticket, result, repo);
    }
}
