/// View controller: turns user intents into backend calls and view states

use crate::api::Backend;
use crate::models::{
    Analysis, FetchRequest, Post, ReplyRequest, ReplyResult, SearchRequest, SearchResult,
    ThreadResult,
};
use crate::validation::{validate_keyword, validate_thread_url};

/// Which reply region a generation request belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReplyTarget {
    MainPost { post: usize },
    Comment { post: usize, comment: usize },
}

impl ReplyTarget {
    pub fn is_main_post(self) -> bool {
        matches!(self, ReplyTarget::MainPost { .. })
    }

    fn loading_message(self) -> &'static str {
        match self {
            ReplyTarget::MainPost { .. } => "Generating reply to main post...",
            ReplyTarget::Comment { .. } => "Generating reply...",
        }
    }
}

/// Badge colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Danger,
    Secondary,
}

impl Tone {
    pub fn badge_class(self) -> &'static str {
        match self {
            Tone::Success => "badge bg-success",
            Tone::Danger => "badge bg-danger",
            Tone::Secondary => "badge bg-secondary",
        }
    }
}

/// Two-decimal rendering with ties rounded away from zero and no `-0.00`
fn format_score(score: f64) -> String {
    let rounded = (score * 100.0).round() / 100.0;
    // -0.0 == 0.0, so this also drops the sign of a negative zero
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.2}", rounded)
}

/// A generated reply ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct ReplyView {
    pub reply: String,
    pub sentiment_label: String,
    pub sentiment_tone: Tone,
    pub primary_emotion: String,
    pub brand_badge: Option<String>,
}

impl ReplyView {
    pub fn from_result(result: &ReplyResult, brand_name: &str) -> Self {
        let kind = result
            .sentiment
            .kind
            .as_deref()
            .filter(|k| !k.is_empty())
            .unwrap_or("neutral");

        let sentiment_tone = match kind {
            "positive" => Tone::Success,
            "negative" => Tone::Danger,
            _ => Tone::Secondary,
        };

        let primary_emotion = result
            .emotion
            .emotions_detected
            .first()
            .map(|e| e.emotion.clone())
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| "neutral".to_string());

        let brand_badge = result
            .brand_used
            .then(|| format!("Brand \"{}\" integrated", brand_name));

        ReplyView {
            reply: result.reply.clone(),
            sentiment_label: format!("{} ({})", kind, format_score(result.sentiment.score)),
            sentiment_tone,
            primary_emotion,
            brand_badge,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsKind {
    Search,
    Thread,
}

/// Everything the results panel shows after a successful call
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub kind: ResultsKind,
    pub title: String,
    pub count_label: String,
    pub analysis: Option<Analysis>,
    pub posts: Vec<Post>,
}

impl ResultsView {
    pub fn from_search(result: SearchResult) -> Self {
        let latest = result.is_latest();
        ResultsView {
            kind: ResultsKind::Search,
            title: format!("Search Results{}", if latest { " (Latest Results)" } else { "" }),
            count_label: format!(
                "Found {} posts{}",
                result.count,
                if latest { " from this week" } else { "" }
            ),
            analysis: result.chatgpt_analysis,
            posts: result.posts,
        }
    }

    pub fn from_thread(result: ThreadResult) -> Self {
        ResultsView {
            kind: ResultsKind::Thread,
            title: "Thread Details".to_string(),
            count_label: "Single post fetched".to_string(),
            analysis: None,
            posts: vec![result.post],
        }
    }
}

/// Result panel state: idle -> loading -> results | error
#[derive(Debug, Clone, PartialEq)]
pub enum PanelState {
    Idle,
    Loading,
    Results(ResultsView),
    Error(String),
}

impl PanelState {
    pub fn is_loading(&self) -> bool {
        matches!(self, PanelState::Loading)
    }
}

/// State of a single reply region
#[derive(Debug, Clone, PartialEq)]
pub enum ReplyState {
    Generating(String),
    Ready(ReplyView),
    Failed(String),
}

pub struct ViewController<B> {
    backend: B,
}

impl<B: Backend> ViewController<B> {
    pub fn new(backend: B) -> Self {
        ViewController { backend }
    }

    /// Search posts by keyword. Every state change is handed to `render`.
    pub async fn search_by_keyword(
        &self,
        text: &str,
        force_refresh: bool,
        render: impl Fn(PanelState),
    ) {
        let keyword = match validate_keyword(text) {
            Ok(keyword) => keyword,
            Err(e) => {
                log::warn!("Rejected keyword input: {}", e);
                render(PanelState::Error(e.to_string()));
                return;
            }
        };

        render(PanelState::Loading);
        log::info!("Searching Reddit for keyword: {} (force_refresh={})", keyword, force_refresh);

        let request = SearchRequest {
            keyword: keyword.to_string(),
            force_refresh,
        };

        match self.backend.search_keyword(&request).await {
            Ok(result) => render(PanelState::Results(ResultsView::from_search(result))),
            Err(e) => {
                log::error!("Search error: {}", e);
                render(PanelState::Error(format!("Search failed: {}", e)));
            }
        }
    }

    /// Fetch a single thread by its Reddit URL
    pub async fn fetch_by_url(&self, text: &str, render: impl Fn(PanelState)) {
        let url = match validate_thread_url(text) {
            Ok(url) => url,
            Err(e) => {
                log::warn!("Rejected thread URL input: {}", e);
                render(PanelState::Error(e.to_string()));
                return;
            }
        };

        render(PanelState::Loading);
        log::info!("Fetching Reddit post from URL: {}", url);

        let request = FetchRequest {
            url: url.to_string(),
        };

        match self.backend.fetch_by_url(&request).await {
            Ok(result) => render(PanelState::Results(ResultsView::from_thread(result))),
            Err(e) => {
                log::error!("Fetch error: {}", e);
                render(PanelState::Error(format!("Fetch failed: {}", e)));
            }
        }
    }

    /// Generate (or regenerate) a reply for one post or comment
    pub async fn generate_reply(
        &self,
        target: ReplyTarget,
        text: &str,
        brand_name: &str,
        render: impl Fn(ReplyState),
    ) {
        render(ReplyState::Generating(target.loading_message().to_string()));

        let brand_name = brand_name.trim();
        let request = ReplyRequest {
            comment_text: text.to_string(),
            brand_name: brand_name.to_string(),
            is_main_post: target.is_main_post(),
        };

        match self.backend.generate_reply(&request).await {
            Ok(result) => render(ReplyState::Ready(ReplyView::from_result(&result, brand_name))),
            Err(e) => {
                log::error!("Reply generation error for {:?}: {}", target, e);
                render(ReplyState::Failed(format!("Failed to generate reply: {}", e)));
            }
        }
    }
}
