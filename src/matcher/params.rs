use memchr::memchr_iter;
use regex::Captures;

use crate::pattern::ParamSlot;
use crate::types::{ParamValue, RouteParams};

pub(crate) fn captures_to_params(captures: &Captures<'_>, slots: &[ParamSlot]) -> RouteParams {
    let mut params = RouteParams::with_capacity(slots.len());
    for (idx, slot) in slots.iter().enumerate() {
        // optional catch-alls that matched nothing leave no entry
        let Some(capture) = captures.get(idx + 1) else {
            continue;
        };
        let value = if slot.repeat {
            ParamValue::Multiple(split_segments(capture.as_str()))
        } else {
            ParamValue::Single(capture.as_str().to_string())
        };
        params.insert(slot.name.clone(), value);
    }
    params
}

fn split_segments(joined: &str) -> Vec<String> {
    let mut out = Vec::with_capacity(memchr_iter(b'/', joined.as_bytes()).count() + 1);
    let mut start = 0usize;
    for end in memchr_iter(b'/', joined.as_bytes()) {
        out.push(joined[start..end].to_string());
        start = end + 1;
    }
    out.push(joined[start..].to_string());
    out
}
