/// Data structures exchanged with the reply backend
use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A single Reddit comment as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Comment {
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub body: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub score: i64,
}

/// A Reddit post with its top comments
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Post {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subreddit: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub score: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comments: Vec<Comment>,
}

/// Optional AI summary attached to a keyword search
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Analysis {
    #[serde(default, deserialize_with = "null_as_default")]
    pub analysis: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reddit_posts_analyzed: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub query: String,
}

/// Response of `POST /search-keyword`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SearchResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: usize,
    #[serde(default, deserialize_with = "null_as_default")]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub refresh_mode: Option<String>,
    #[serde(default)]
    pub chatgpt_analysis: Option<Analysis>,
}

impl SearchResult {
    pub fn is_latest(&self) -> bool {
        self.refresh_mode.as_deref() == Some("latest")
    }
}

/// Response of `POST /fetch-by-url`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThreadResult {
    pub post: Post,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Sentiment {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DetectedEmotion {
    #[serde(default, deserialize_with = "null_as_default")]
    pub emotion: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Emotion {
    #[serde(default, deserialize_with = "null_as_default")]
    pub emotions_detected: Vec<DetectedEmotion>,
}

/// Response of `POST /generate-reply`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ReplyResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub reply: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sentiment: Sentiment,
    #[serde(default, deserialize_with = "null_as_default")]
    pub emotion: Emotion,
    #[serde(default, deserialize_with = "null_as_default")]
    pub brand_used: bool,
}

/// Body of every non-2xx backend response
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchRequest {
    pub keyword: String,
    pub force_refresh: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FetchRequest {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReplyRequest {
    pub comment_text: String,
    pub brand_name: String,
    pub is_main_post: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_result_deserialization() {
        let json = r#"{
            "success": true,
            "count": 1,
            "posts": [{
                "title": "Best CRM for small business",
                "author": "business_owner",
                "subreddit": "entrepreneur",
                "url": "https://reddit.com/r/entrepreneur/comments/abc/best_crm/",
                "score": 145,
                "comments": [{"author": "sales_expert", "body": "HubSpot works."}]
            }],
            "refresh_mode": "latest"
        }"#;

        let result: SearchResult = serde_json::from_str(json).unwrap();

        assert_eq!(result.count, 1);
        assert_eq!(result.posts[0].subreddit, "entrepreneur");
        assert_eq!(result.posts[0].comments[0].score, 0);
        assert!(result.is_latest());
        assert!(result.chatgpt_analysis.is_none());
    }

    #[test]
    fn test_reply_result_missing_fields_use_defaults() {
        let result: ReplyResult = serde_json::from_str(r#"{"reply": "Thanks!"}"#).unwrap();

        assert_eq!(result.reply, "Thanks!");
        assert_eq!(result.sentiment.kind, None);
        assert_eq!(result.sentiment.score, 0.0);
        assert!(result.emotion.emotions_detected.is_empty());
        assert!(!result.brand_used);
    }

    #[test]
    fn test_reply_result_null_fields_use_defaults() {
        let result: ReplyResult = serde_json::from_str(
            r#"{"reply": "Hi", "sentiment": null, "emotion": null, "brand_used": null}"#,
        )
        .unwrap();

        assert_eq!(result.reply, "Hi");
        assert_eq!(result.sentiment, Sentiment::default());
        assert!(result.emotion.emotions_detected.is_empty());
        assert!(!result.brand_used);

        let sentiment: Sentiment =
            serde_json::from_str(r#"{"type": "positive", "score": null}"#).unwrap();
        assert_eq!(sentiment.kind.as_deref(), Some("positive"));
        assert_eq!(sentiment.score, 0.0);
    }

    #[test]
    fn test_post_null_fields_use_defaults() {
        let thread: ThreadResult = serde_json::from_str(
            r#"{"post": {"title": "x", "author": null, "score": null, "comments": null}}"#,
        )
        .unwrap();

        assert_eq!(thread.post.title, "x");
        assert_eq!(thread.post.author, "");
        assert_eq!(thread.post.score, 0);
        assert!(thread.post.comments.is_empty());

        let comment: Comment =
            serde_json::from_str(r#"{"author": "a", "body": "b", "score": null}"#).unwrap();
        assert_eq!(comment.score, 0);

        let search: SearchResult =
            serde_json::from_str(r#"{"count": null, "posts": null}"#).unwrap();
        assert_eq!(search.count, 0);
        assert!(search.posts.is_empty());
    }

    #[test]
    fn test_sentiment_type_field_is_renamed() {
        let sentiment: Sentiment =
            serde_json::from_str(r#"{"type": "negative", "score": -0.4}"#).unwrap();

        assert_eq!(sentiment.kind.as_deref(), Some("negative"));
        assert_eq!(sentiment.score, -0.4);
    }

    #[test]
    fn test_reply_request_wire_format() {
        let request = ReplyRequest {
            comment_text: "Pipedrive is great".to_string(),
            brand_name: "Acme".to_string(),
            is_main_post: false,
        };

        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "comment_text": "Pipedrive is great",
                "brand_name": "Acme",
                "is_main_post": false
            })
        );
    }
}
