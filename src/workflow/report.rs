//! Normalizing workflow responses into a [`PackReport`].
//!
//! The automation behind the webhook has changed shape several times: early
//! versions wrapped the report in a `{ message, data }` envelope with `data`
//! JSON-encoded as a string, some versions returned arrays, one nested the
//! whole body under `todo[0]`, and the field names have drifted between
//! English and Chinese. Packing should survive all of them, so normalization
//! is deliberately forgiving: anything it cannot recognize becomes an empty
//! report, never an error.

use serde::{Deserialize, Serialize};
use serde_json::Value;

type Map = serde_json::Map<String, Value>;

const TASK_KEYS: [&str; 4] = ["actionable_tasks", "tasks", "待办", "todo"];
const LESSON_KEYS: [&str; 3] = ["lessons_learned", "lessons", "经验"];
const IDEA_KEYS: [&str; 2] = ["ideas", "点子"];

/// The distilled day: what to do, what was learned, what could be shared.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackReport {
    pub tasks: Vec<String>,
    pub insights: Vec<String>,
    pub drafts: Vec<SocialDraft>,
}

/// A ready-to-post draft for one platform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialDraft {
    pub platform: String,
    pub title: Option<String>,
    pub content: String,
}

impl PackReport {
    /// Builds a report from a raw webhook response body.
    ///
    /// Accepts every response shape the workflow has produced so far; see
    /// the module docs. Unparseable or unrecognized bodies yield an empty
    /// report.
    pub fn from_response(body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(value) => Self::from_value(value),
            Err(_) => Self::default(),
        }
    }

    /// Builds a report from an already-parsed JSON value.
    pub fn from_value(value: Value) -> Self {
        let map = match unwrap_layers(value) {
            Some(map) => map,
            None => return Self::default(),
        };
        // One legacy shape buries the report fields inside `todo[0]`.
        let body = legacy_todo_body(&map).unwrap_or(map);

        Self {
            tasks: string_list_at(&body, &TASK_KEYS),
            insights: collect_insights(&body),
            drafts: collect_drafts(&body),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty() && self.insights.is_empty() && self.drafts.is_empty()
    }
}

/// Peels envelopes until an object that looks like a report body remains:
/// strings are re-parsed as JSON, arrays yield their first element, and a
/// `data` field is entered. Anything else is unrecognizable.
fn unwrap_layers(mut value: Value) -> Option<Map> {
    loop {
        value = match value {
            Value::String(encoded) => match serde_json::from_str(&encoded) {
                Ok(inner) => inner,
                Err(_) => return None,
            },
            Value::Array(mut items) => {
                if items.is_empty() {
                    return None;
                }
                items.remove(0)
            }
            Value::Object(mut map) => match map.remove("data") {
                Some(data) => data,
                None => return Some(map),
            },
            _ => return None,
        };
    }
}

fn legacy_todo_body(map: &Map) -> Option<Map> {
    match map.get("todo")?.as_array()?.first()? {
        Value::Object(inner) => Some(inner.clone()),
        _ => None,
    }
}

/// The string items of the array under the first present key.
fn string_list_at(map: &Map, keys: &[&str]) -> Vec<String> {
    for key in keys {
        if let Some(Value::Array(items)) = map.get(*key) {
            return string_items(items);
        }
    }
    Vec::new()
}

fn string_items(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .filter_map(|item| item.as_str().map(str::to_string))
        .collect()
}

fn collect_insights(map: &Map) -> Vec<String> {
    match map.get("distilled_insights") {
        // Flat list: take it as-is.
        Some(Value::Array(items)) => string_items(items),
        // Grouped lessons and ideas, in that order.
        Some(Value::Object(groups)) => {
            let mut insights = string_list_at(groups, &LESSON_KEYS);
            insights.extend(string_list_at(groups, &IDEA_KEYS));
            insights
        }
        _ => string_list_at(map, &["insights"]),
    }
}

fn collect_drafts(map: &Map) -> Vec<SocialDraft> {
    if let Some(Value::Object(posts)) = map.get("social_media_posts") {
        return posts
            .iter()
            .filter_map(|(platform, post)| draft_from_post(platform, post))
            .collect();
    }
    if let Some(Value::Array(items)) = map.get("drafts") {
        return items.iter().filter_map(draft_from_item).collect();
    }
    Vec::new()
}

fn draft_from_post(platform: &str, post: &Value) -> Option<SocialDraft> {
    match post {
        Value::String(content) => Some(SocialDraft {
            platform: platform.to_string(),
            title: None,
            content: content.clone(),
        }),
        Value::Object(fields) => Some(SocialDraft {
            platform: platform.to_string(),
            title: fields.get("title").and_then(Value::as_str).map(str::to_string),
            content: fields
                .get("content")
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_string(),
        }),
        _ => None,
    }
}

fn draft_from_item(item: &Value) -> Option<SocialDraft> {
    let fields = item.as_object()?;
    Some(SocialDraft {
        platform: fields
            .get("platform")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string(),
        title: fields.get("title").and_then(Value::as_str).map(str::to_string),
        content: fields
            .get("content")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string(),
    })
}
