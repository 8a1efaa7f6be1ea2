//! Achievement timeline widget state.

use super::{display_value, record_id, str_field};
use crate::format::{format_date, parse_date};
use crate::navigation::{NavigationBus, SubscriptionId};
use crate::query::escape_html;
use serde::Serialize;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tracing::debug;

const EMPTY_TRACK: &str =
    "<p class=\"timeline__message\">لا توجد إنجازات متاحة حالياً</p>";
const ERROR_TRACK: &str =
    "<p class=\"timeline__message timeline__message--error\">حدث خطأ في تحميل الإنجازات</p>";

/// Date-ordered achievements with one active entry.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Timeline {
    #[serde(skip)]
    achievements: Vec<Value>,
    ids: Vec<Option<String>>,
    current: usize,
    failed: bool,
}

impl Timeline {
    /// Build from a merged document and show the first entry.
    ///
    /// Entries are sorted by `date` ascending. Entries whose date does not
    /// parse keep their relative order after the dated ones.
    pub fn from_document(document: &Value) -> Self {
        let mut achievements: Vec<Value> = document
            .get("achievements")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        // Stable sort; `None` keys go last.
        achievements.sort_by_key(|a| {
            let date = a.get("date").and_then(Value::as_str).and_then(parse_date);
            (date.is_none(), date)
        });

        let ids = achievements.iter().map(record_id).collect();
        let mut timeline = Self {
            achievements,
            ids,
            current: 0,
            failed: false,
        };
        timeline.show(0);
        timeline
    }

    /// A timeline whose data could not be loaded.
    pub fn failed() -> Self {
        Self {
            failed: true,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.achievements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.achievements.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Id of the active entry.
    pub fn current_id(&self) -> Option<&str> {
        self.ids.get(self.current).and_then(|id| id.as_deref())
    }

    /// Ids in display order.
    pub fn ids(&self) -> Vec<Option<&str>> {
        self.ids.iter().map(|id| id.as_deref()).collect()
    }

    /// Make entry `index` active. Out-of-range indices are ignored.
    pub fn show(&mut self, index: usize) -> bool {
        if index >= self.achievements.len() {
            return false;
        }
        self.current = index;
        true
    }

    /// Step forward (`1`) or back (`-1`), staying within bounds.
    pub fn navigate(&mut self, direction: isize) -> bool {
        match self.current.checked_add_signed(direction) {
            Some(index) => self.show(index),
            None => false,
        }
    }

    pub fn prev_enabled(&self) -> bool {
        self.current > 0
    }

    pub fn next_enabled(&self) -> bool {
        self.current + 1 < self.achievements.len()
    }

    /// Container key handler. The page is right-to-left, so `ArrowLeft`
    /// moves forward in time.
    pub fn handle_key(&mut self, key: &str) -> bool {
        match key {
            "ArrowLeft" => self.navigate(1),
            "ArrowRight" => self.navigate(-1),
            _ => false,
        }
    }

    /// Key pressed while a track item has focus.
    pub fn handle_item_key(&mut self, index: usize, key: &str) -> bool {
        match key {
            "Enter" | " " => self.show(index),
            _ => false,
        }
    }

    /// Search selection. Unknown ids are ignored.
    pub fn select_achievement_by_id(&mut self, achievement_id: &str) -> bool {
        match self
            .ids
            .iter()
            .position(|id| id.as_deref() == Some(achievement_id))
        {
            Some(index) => self.show(index),
            None => {
                debug!("No timeline entry for achievement {}", achievement_id);
                false
            }
        }
    }

    /// Track HTML: one item per achievement, the active one marked.
    pub fn render_track(&self) -> String {
        if self.failed {
            return ERROR_TRACK.to_string();
        }
        if self.achievements.is_empty() {
            return EMPTY_TRACK.to_string();
        }

        let mut html = String::new();
        for (index, achievement) in self.achievements.iter().enumerate() {
            let title = escape_html(str_field(achievement, "title"));
            let date = str_field(achievement, "date");
            let class = if index == self.current {
                "timeline__item timeline__item--active"
            } else {
                "timeline__item"
            };
            html.push_str(&format!(
                "<article class=\"{}\" data-index=\"{}\" tabindex=\"0\" role=\"button\" aria-label=\"{}\">\
                 <time class=\"timeline__date\" datetime=\"{}\">{}</time>\
                 <h3 class=\"timeline__title\">{}</h3>\
                 <div class=\"timeline__marker\"></div></article>",
                class,
                index,
                title,
                escape_html(date),
                escape_html(&format_date(date)),
                title
            ));
        }
        html
    }

    /// Details panel HTML for the active entry.
    pub fn render_details(&self) -> Option<String> {
        let achievement = self.achievements.get(self.current)?;
        let title = escape_html(str_field(achievement, "title"));
        let date = str_field(achievement, "date");

        let mut html = format!(
            "<article class=\"achievement-detail\"><time datetime=\"{}\">{}</time><h2>{}</h2><p>{}</p>",
            escape_html(date),
            escape_html(&format_date(date)),
            title,
            escape_html(str_field(achievement, "description"))
        );

        let images = images_of(achievement);
        if !images.is_empty() {
            html.push_str("<div class=\"achievement-images\">");
            for src in images {
                html.push_str(&format!(
                    "<img src=\"{}\" alt=\"{}\" loading=\"lazy\">",
                    escape_html(src),
                    title
                ));
            }
            html.push_str("</div>");
        }

        if let Some(metrics) = achievement.get("metrics").and_then(Value::as_object) {
            html.push_str("<dl class=\"achievement-metrics\">");
            for (key, value) in metrics {
                html.push_str(&format!(
                    "<div class=\"achievement-metrics__item\"><dt>{}</dt><dd>{}</dd></div>",
                    escape_html(key),
                    escape_html(&display_value(value))
                ));
            }
            html.push_str("</dl>");
        }

        let sources = achievement
            .get("sources")
            .and_then(Value::as_array)
            .filter(|s| !s.is_empty());
        if let Some(sources) = sources {
            html.push_str("<div class=\"achievement-sources\"><h3>المصادر الرسمية:</h3><ul>");
            for source in sources {
                html.push_str(&format!(
                    "<li><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a></li>",
                    escape_html(str_field(source, "url")),
                    escape_html(str_field(source, "name"))
                ));
            }
            html.push_str("</ul></div>");
        }

        html.push_str("</article>");
        Some(html)
    }

    /// Subscribe `timeline` to achievement selection signals.
    pub fn attach(timeline: Arc<Mutex<Self>>, bus: &NavigationBus) -> SubscriptionId {
        bus.on_select_achievement(move |achievement_id| {
            if let Ok(mut timeline) = timeline.lock() {
                timeline.select_achievement_by_id(achievement_id);
            }
        })
    }
}

/// `images` array, or the single `image` field.
fn images_of(achievement: &Value) -> Vec<&str> {
    if let Some(images) = achievement.get("images").and_then(Value::as_array) {
        return images.iter().filter_map(Value::as_str).collect();
    }
    achievement
        .get("image")
        .and_then(Value::as_str)
        .into_iter()
        .collect()
}
