/// Backend location and endpoint resolution
use url::Url;

const DEFAULT_API_BASE: &str = "http://localhost:5000/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    SearchKeyword,
    FetchByUrl,
    GenerateReply,
}

impl Endpoint {
    // Relative so that a base with a path prefix keeps it
    fn path(self) -> &'static str {
        match self {
            Endpoint::SearchKeyword => "search-keyword",
            Endpoint::FetchByUrl => "fetch-by-url",
            Endpoint::GenerateReply => "generate-reply",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    base: Url,
}

impl ApiConfig {
    pub fn parse(base: &str) -> Result<Self, url::ParseError> {
        let mut base = Url::parse(base.trim())?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(ApiConfig { base })
    }

    /// Use the origin of the page that loaded the app
    pub fn from_window() -> Option<Self> {
        let origin = web_sys::window()?.location().origin().ok()?;
        Self::parse(&origin).ok()
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn endpoint(&self, endpoint: Endpoint) -> Result<Url, url::ParseError> {
        self.base.join(endpoint.path())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base: Url::parse(DEFAULT_API_BASE).expect("default API base is a valid URL"),
        }
    }
}
