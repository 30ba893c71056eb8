use url::Url;

use super::Query;

pub const DEFAULT_NEWS_LANG: &str = "en-US";

/// News feed in a given language.
#[derive(Clone, Debug)]
pub struct NewsQuery {
    pub lang: String,
}

impl Default for NewsQuery {
    fn default() -> Self {
        Self {
            lang: DEFAULT_NEWS_LANG.to_string(),
        }
    }
}

impl NewsQuery {
    pub fn with_lang(mut self, lang: &str) -> Self {
        self.lang = lang.to_string();
        self
    }
}

impl Query for NewsQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut().append_pair("lang", &self.lang);
        url
    }
}
