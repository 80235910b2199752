//! Free-text PRD normalization.
//!
//! Turns a raw Product Requirements Document into a [`NormalizedPrd`] by
//! splitting it into sections and routing each section by keyword. The
//! structured form feeds the diff engine, so two PRD revisions can be
//! compared field by field.

use crate::errors::Result;
use crate::{log_op_end, log_op_start};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::OnceLock;
use std::time::Instant;

static EMPHASIS_RE: OnceLock<Regex> = OnceLock::new();
static SECTION_SPLIT_RE: OnceLock<Regex> = OnceLock::new();
static BACKGROUND_LABEL_RE: OnceLock<Regex> = OnceLock::new();
static BULLET_ITEM_RE: OnceLock<Regex> = OnceLock::new();
static NUMBERED_ITEM_RE: OnceLock<Regex> = OnceLock::new();
static LETTERED_ITEM_RE: OnceLock<Regex> = OnceLock::new();

/// Markdown emphasis markers stripped before sectioning.
fn emphasis_re() -> &'static Regex {
    EMPHASIS_RE.get_or_init(|| Regex::new(r"\*\*|__|\*|_").unwrap())
}

/// Blank-line section separator (a newline, optional whitespace, a newline).
fn section_split_re() -> &'static Regex {
    SECTION_SPLIT_RE.get_or_init(|| Regex::new(r"\n\s*\n").unwrap())
}

/// Leading `background:` / `overview:` / `context:` label on a section.
fn background_label_re() -> &'static Regex {
    BACKGROUND_LABEL_RE.get_or_init(|| Regex::new(r"(?i)^(background|overview|context):?\s*").unwrap())
}

/// `- item`, `• item`, or `* item`.
fn bullet_item_re() -> &'static Regex {
    BULLET_ITEM_RE.get_or_init(|| Regex::new(r"^[-•*]\s+(.+)$").unwrap())
}

/// `1. item`.
fn numbered_item_re() -> &'static Regex {
    NUMBERED_ITEM_RE.get_or_init(|| Regex::new(r"^\d+\.\s+(.+)$").unwrap())
}

/// `a. item`.
fn lettered_item_re() -> &'static Regex {
    LETTERED_ITEM_RE.get_or_init(|| Regex::new(r"^[a-zA-Z]\.\s+(.+)$").unwrap())
}

/// Structured form of a free-text PRD.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizedPrd {
    /// Background / overview prose, label stripped
    pub background: String,
    /// List items routed from goal / objective / purpose sections
    pub goals: Vec<String>,
    /// List items routed from feature / requirement / functionality sections
    pub features: Vec<String>,
    /// List items routed from constraint / limitation / restriction sections
    pub constraints: Vec<String>,
}

impl NormalizedPrd {
    /// True when no section produced any content.
    pub fn is_empty(&self) -> bool {
        self.background.is_empty()
            && self.goals.is_empty()
            && self.features.is_empty()
            && self.constraints.is_empty()
    }

    /// Serialize into a JSON document for the diff engine.
    ///
    /// Field order follows declaration order, so change lists over two
    /// normalized revisions always enumerate `background`, `goals`,
    /// `features`, `constraints` in that order.
    ///
    /// # Errors
    ///
    /// - `Serialization` — the value cannot be represented as JSON
    ///   (does not occur for string data; kept for contract completeness)
    pub fn to_document(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Normalize free-form PRD text into structured sections.
///
/// The heuristics mirror how authors actually write PRDs:
///
/// 1. Markdown emphasis markers (`**`, `__`, `*`, `_`) are stripped and the
///    text trimmed.
/// 2. The text is split into sections on blank lines.
/// 3. Each section routes by case-insensitive keyword containment, first
///    match wins: background/overview/context fills `background` (label
///    stripped, later sections overwrite), goal/objective/purpose appends
///    list items to `goals`, feature/requirement/functionality to
///    `features`, constraint/limitation/restriction to `constraints`.
/// 4. Fallback: when routing produced no background, goals, or features,
///    the first section (or the first 200 characters of the raw input)
///    becomes the background, and list items from the raw input are
///    distributed by item keyword.
pub fn normalize_prd(prd_text: &str) -> NormalizedPrd {
    let start = Instant::now();
    log_op_start!("normalize_prd");

    let clean_text = emphasis_re().replace_all(prd_text, "").trim().to_string();
    let sections: Vec<&str> = section_split_re().split(&clean_text).collect();

    let mut result = NormalizedPrd::default();

    for section in &sections {
        let lower = section.to_lowercase();

        if lower.contains("background") || lower.contains("overview") || lower.contains("context") {
            result.background = background_label_re().replace(section, "").trim().to_string();
        } else if lower.contains("goal") || lower.contains("objective") || lower.contains("purpose")
        {
            result.goals.extend(extract_list_items(section));
        } else if lower.contains("feature")
            || lower.contains("requirement")
            || lower.contains("functionality")
        {
            result.features.extend(extract_list_items(section));
        } else if lower.contains("constraint")
            || lower.contains("limitation")
            || lower.contains("restriction")
        {
            result.constraints.extend(extract_list_items(section));
        }
    }

    // Fallback: no structured content found, extract from the full text
    if result.background.is_empty() && result.goals.is_empty() && result.features.is_empty() {
        result.background = match sections.first() {
            Some(first) if !first.is_empty() => (*first).to_string(),
            _ => prd_text.chars().take(200).collect(),
        };

        for item in extract_list_items(prd_text) {
            let lower = item.to_lowercase();
            if lower.contains("goal") || lower.contains("objective") {
                result.goals.push(item);
            } else if lower.contains("constraint") || lower.contains("limit") {
                result.constraints.push(item);
            } else {
                result.features.push(item);
            }
        }
    }

    let duration_ms = start.elapsed().as_millis() as u64;
    log_op_end!(
        "normalize_prd",
        duration_ms = duration_ms,
        section_count = sections.len()
    );

    result
}

/// Extract bullet, numbered, and lettered list items from text.
fn extract_list_items(text: &str) -> Vec<String> {
    let mut items = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();

        let captured = bullet_item_re()
            .captures(trimmed)
            .or_else(|| numbered_item_re().captures(trimmed))
            .or_else(|| lettered_item_re().captures(trimmed));

        if let Some(caps) = captured {
            items.push(caps[1].trim().to_string());
        }
    }

    items
}
