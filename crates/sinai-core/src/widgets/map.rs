//! Project map widget state.

use super::{display_value, record_id, str_field};
use crate::config::MapConfig;
use crate::navigation::{NavigationBus, SubscriptionId};
use crate::query::escape_html;
use serde::Serialize;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Marker pin color for a project category.
pub fn category_color(category: &str) -> &'static str {
    match category {
        "infrastructure" => "#3498db",
        "housing" => "#e74c3c",
        "transportation" => "#f39c12",
        "education" => "#9b59b6",
        "healthcare" => "#1abc9c",
        "agriculture" => "#27ae60",
        "security" => "#34495e",
        _ => MapConfig::DEFAULT_MARKER_COLOR,
    }
}

/// Arabic display name of a category; unknown categories show as-is.
pub fn category_name(category: &str) -> &str {
    match category {
        "infrastructure" => "البنية التحتية",
        "housing" => "الإسكان",
        "transportation" => "النقل والطرق",
        "education" => "التعليم",
        "healthcare" => "الصحة",
        "agriculture" => "الزراعة",
        "security" => "الأمن",
        other => other,
    }
}

/// A pin placed for one project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub project_id: String,
    pub lat: f64,
    pub lng: f64,
    pub category: String,
    pub color: &'static str,
}

/// Fixed-view map with one marker per located project.
#[derive(Debug, Clone, Serialize)]
pub struct AchievementMap {
    #[serde(skip)]
    projects: Vec<Value>,
    markers: Vec<MapMarker>,
    center: (f64, f64),
    zoom: u8,
    active_project: Option<String>,
    info_panel: Option<String>,
}

impl AchievementMap {
    /// Place markers for every project that has a `location`.
    pub fn from_document(document: &Value) -> Self {
        let projects: Vec<Value> = document
            .get("projects")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        let markers = projects.iter().filter_map(marker_for).collect();

        Self {
            projects,
            markers,
            center: MapConfig::CENTER,
            zoom: MapConfig::ZOOM,
            active_project: None,
            info_panel: None,
        }
    }

    pub fn markers(&self) -> &[MapMarker] {
        &self.markers
    }

    pub fn center(&self) -> (f64, f64) {
        self.center
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn active_project(&self) -> Option<&str> {
        self.active_project.as_deref()
    }

    /// Rendered info panel, `None` while hidden.
    pub fn info_panel(&self) -> Option<&str> {
        self.info_panel.as_deref()
    }

    /// Marker click: show the project's info panel.
    pub fn activate_marker(&mut self, project_id: &str) -> bool {
        if !self.markers.iter().any(|m| m.project_id == project_id) {
            return false;
        }
        let Some(project) = self
            .projects
            .iter()
            .find(|p| record_id(p).as_deref() == Some(project_id))
        else {
            return false;
        };

        self.info_panel = Some(render_info_panel(project));
        self.active_project = Some(project_id.to_string());
        true
    }

    /// Search selection: activate the project's marker and pan to it.
    ///
    /// Unknown ids are ignored.
    pub fn select_project_by_id(&mut self, project_id: &str) -> bool {
        if !self.activate_marker(project_id) {
            debug!("No map marker for project {}", project_id);
            return false;
        }
        if let Some(marker) = self.markers.iter().find(|m| m.project_id == project_id) {
            self.center = (marker.lat, marker.lng);
        }
        true
    }

    pub fn hide_info_panel(&mut self) {
        self.info_panel = None;
        self.active_project = None;
    }

    /// Subscribe `map` to project selection signals.
    pub fn attach(map: Arc<Mutex<Self>>, bus: &NavigationBus) -> SubscriptionId {
        bus.on_select_project(move |project_id| {
            if let Ok(mut map) = map.lock() {
                map.select_project_by_id(project_id);
            }
        })
    }
}

fn marker_for(project: &Value) -> Option<MapMarker> {
    let location = project.get("location")?;
    let lat = location.get("lat")?.as_f64()?;
    let lng = location.get("lng")?.as_f64()?;
    let category = str_field(project, "category").to_string();

    Some(MapMarker {
        project_id: record_id(project)?,
        lat,
        lng,
        color: category_color(&category),
        category,
    })
}

fn render_info_panel(project: &Value) -> String {
    let name = escape_html(str_field(project, "name"));
    let category = str_field(project, "category");
    let mut html = String::from("<div class=\"location-info\"><div class=\"location-info__header\">");

    html.push_str(&format!(
        "<span class=\"location-info__category\">{}</span>",
        escape_html(category_name(category))
    ));
    if let Some(status) = project.get("status").and_then(Value::as_str) {
        let modifier = if status == "مكتمل" { "completed" } else { "ongoing" };
        html.push_str(&format!(
            "<span class=\"location-info__status location-info__status--{}\">{}</span>",
            modifier,
            escape_html(status)
        ));
    }
    html.push_str("</div>");

    html.push_str(&format!("<h3 class=\"location-info__title\">{}</h3>", name));
    html.push_str(&format!(
        "<p class=\"location-info__description\">{}</p>",
        escape_html(str_field(project, "description"))
    ));

    let images: Vec<&str> = project
        .get("images")
        .and_then(Value::as_array)
        .map(|imgs| imgs.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();
    if !images.is_empty() {
        html.push_str("<div class=\"location-info__images\">");
        for src in images {
            html.push_str(&format!(
                "<img src=\"{}\" alt=\"{}\" class=\"location-info__image\">",
                escape_html(src),
                name
            ));
        }
        html.push_str("</div>");
    }

    if let Some(metrics) = project.get("metrics").and_then(Value::as_object) {
        html.push_str("<div class=\"location-info__metrics\">");
        for (key, value) in metrics {
            html.push_str(&format!(
                "<div class=\"metric-item\"><span class=\"metric-item__label\">{}:</span><span class=\"metric-item__value\">{}</span></div>",
                escape_html(key),
                escape_html(&display_value(value))
            ));
        }
        html.push_str("</div>");
    }

    if let Some(date) = project.get("completionDate").and_then(Value::as_str) {
        html.push_str(&format!(
            "<div class=\"location-info__date\"><span class=\"date-label\">تاريخ الإنجاز:</span><span class=\"date-value\">{}</span></div>",
            escape_html(date)
        ));
    }

    html.push_str("</div>");
    html
}
