//! Grounding reply parsing.
//!
//! A grounding reply announces each region as a bold-marked label line, with
//! a tagged coordinate token appearing in the same encounter order, e.g.:
//!
//! ```text
//! 1. **Hammer**: <BBOX>0.12,0.30,0.45,0.82</BBOX>
//! 2. **Wrench**: <BBOX>0.55,0.10,0.90,0.40</BBOX>
//! ```
//!
//! Labels and coordinates are paired positionally: the Nth bold label gets
//! the Nth coordinate token. When the counts differ, pairing stops once
//! either side is exhausted and the remainder is dropped. Prompt templates
//! depend on this exact behavior; a count mismatch is logged but never
//! changes the result.

use std::collections::VecDeque;

use regex::Regex;

/// A rectangle in normalized image-fraction coordinates.
///
/// `x1 <= x2` and `y1 <= y2` are expected from well-formed replies but not
/// enforced here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

/// A named grounded region. Constructed transiently per grounding call.
#[derive(Debug, Clone, PartialEq)]
pub struct Tool {
    pub name: String,
    pub bbox: BoundingBox,
}

/// Marker that announces a label line.
const BOLD_MARKER: &str = "**";

/// Parser for grounding replies.
pub struct GroundingParser {
    token_re: Regex,
}

impl Default for GroundingParser {
    fn default() -> Self {
        Self::new()
    }
}

impl GroundingParser {
    pub fn new() -> Self {
        // Infallible: the pattern is a compile-time constant.
        let token_re = Regex::new(
            r"(?i)<BBOX>\s*([0-9]*\.?[0-9]+)\s*,\s*([0-9]*\.?[0-9]+)\s*,\s*([0-9]*\.?[0-9]+)\s*,\s*([0-9]*\.?[0-9]+)\s*</BBOX>",
        )
        .expect("grounding token regex is valid");
        Self { token_re }
    }

    /// Extract the ordered list of tools from a grounding reply.
    ///
    /// Coordinate tokens are collected first into an ordered queue, then
    /// lines are scanned in order; each line carrying the bold marker pops
    /// the next unconsumed token. Unmatched labels or tokens are dropped
    /// silently.
    pub fn parse(&self, reply: &str) -> Vec<Tool> {
        let mut boxes: VecDeque<BoundingBox> = self
            .token_re
            .captures_iter(reply)
            .filter_map(|caps| {
                Some(BoundingBox {
                    x1: caps[1].parse().ok()?,
                    y1: caps[2].parse().ok()?,
                    x2: caps[3].parse().ok()?,
                    y2: caps[4].parse().ok()?,
                })
            })
            .collect();

        let label_count = reply
            .lines()
            .filter(|line| line.contains(BOLD_MARKER))
            .count();
        if label_count != boxes.len() {
            tracing::warn!(
                labels = label_count,
                coordinates = boxes.len(),
                "Grounding reply label/coordinate counts differ; extra entries dropped"
            );
        }

        let mut tools = Vec::new();
        for line in reply.lines() {
            if !line.contains(BOLD_MARKER) {
                continue;
            }
            let Some(bbox) = boxes.pop_front() else {
                break;
            };
            tools.push(Tool {
                name: self.clean_label(line),
                bbox,
            });
        }
        tools
    }

    /// Strip markup from a label line: coordinate tokens, bold markers,
    /// list prefixes, and a trailing colon.
    fn clean_label(&self, line: &str) -> String {
        let without_token = self.token_re.replace_all(line, "");
        let without_bold = without_token.replace(BOLD_MARKER, "");
        let trimmed = without_bold.trim();
        let without_prefix = trimmed
            .trim_start_matches(|c: char| c.is_ascii_digit())
            .trim_start_matches(['.', ')', '-', '*'])
            .trim_start();
        without_prefix.trim_end_matches(':').trim().to_string()
    }
}
