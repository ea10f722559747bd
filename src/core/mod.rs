pub mod display;
pub mod feed;
pub mod query;

use std::collections::BTreeMap;

use display::DisplayService;
use feed::FeedService;
use query::QueryService;

#[derive(Debug, Clone, Default)]
pub struct AppServices {
    query: QueryService,
    feed: FeedService,
    display: DisplayService,
}

impl AppServices {
    pub fn health_report(&self) -> BTreeMap<String, String> {
        let mut report = BTreeMap::new();
        report.insert(
            self.query.name().to_string(),
            self.query.status().to_string(),
        );
        report.insert(self.feed.name().to_string(), self.feed.status().to_string());
        report.insert(
            self.display.name().to_string(),
            self.display.status().to_string(),
        );
        report
    }
}
