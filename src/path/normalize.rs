use crate::path::{PathError, PathResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationOptions {
    pub decode_percent: bool,
    pub normalize_path: bool,
    pub allow_duplicate_slash: bool,
    pub strict_trailing_slash: bool,
}

impl Default for NormalizationOptions {
    fn default() -> Self {
        Self {
            decode_percent: false,
            normalize_path: true,
            allow_duplicate_slash: false,
            strict_trailing_slash: false,
        }
    }
}

#[inline]
#[tracing::instrument(level = "trace", skip(path, options), fields(path_len=path.len() as u64))]
pub fn normalize_path(path: &str, options: &NormalizationOptions) -> PathResult<String> {
    if path.is_empty() {
        return Err(PathError::Empty);
    }
    if !path.starts_with('/') {
        return Err(PathError::MissingLeadingSlash {
            input: path.to_string(),
        });
    }

    let mut writer = SegmentWriter::new(path, options);
    let bytes = path.as_bytes();
    let mut idx = 0usize;
    while idx < bytes.len() {
        let byte = bytes[idx];
        if options.decode_percent && byte == b'%' {
            let value = bytes
                .get(idx + 1..idx + 3)
                .and_then(|pair| decode_hex_pair(pair[0], pair[1]))
                .ok_or_else(|| PathError::InvalidPercentEncoding {
                    input: path.to_string(),
                    index: idx,
                })?;
            // encoded separators stay inside their segment
            if matches!(value, b'/' | b'\\') {
                for &raw in &bytes[idx..idx + 3] {
                    writer.push(raw)?;
                }
            } else {
                writer.push(value)?;
            }
            idx += 3;
            continue;
        }

        writer.push(byte)?;
        idx += 1;
    }

    writer.finish()
}

struct SegmentWriter<'a> {
    original: &'a str,
    options: &'a NormalizationOptions,
    output: Vec<u8>,
    segment_start: usize,
    prev_was_slash: bool,
    saw_parent_traversal: bool,
}

impl<'a> SegmentWriter<'a> {
    fn new(original: &'a str, options: &'a NormalizationOptions) -> Self {
        Self {
            original,
            options,
            output: Vec::with_capacity(original.len()),
            segment_start: 0,
            prev_was_slash: false,
            saw_parent_traversal: false,
        }
    }

    fn push(&mut self, byte: u8) -> PathResult<()> {
        if byte == b'/' {
            if self.options.normalize_path
                && !self.options.allow_duplicate_slash
                && self.prev_was_slash
            {
                return Ok(());
            }

            self.close_segment();
            self.output.push(b'/');
            self.prev_was_slash = true;
            self.segment_start = self.output.len();
            return Ok(());
        }

        if byte <= 0x20 || byte == 0x7f {
            return Err(PathError::ControlOrWhitespace {
                input: self.original.to_string(),
                byte,
            });
        }

        self.output.push(byte);
        self.prev_was_slash = false;
        Ok(())
    }

    fn close_segment(&mut self) {
        if self.output.get(self.segment_start..) == Some(b"..".as_slice()) {
            self.saw_parent_traversal = true;
        }
    }

    fn finish(mut self) -> PathResult<String> {
        self.close_segment();

        if self.options.normalize_path && !self.options.strict_trailing_slash {
            while self.output.len() > 1 && self.output.last() == Some(&b'/') {
                self.output.pop();
            }
        }

        let normalized =
            String::from_utf8(self.output).map_err(|_| PathError::InvalidUtf8AfterDecoding {
                input: self.original.to_string(),
            })?;

        if self.saw_parent_traversal {
            return Err(PathError::InvalidParentTraversal {
                input: self.original.to_string(),
                normalized,
            });
        }

        Ok(normalized)
    }
}

fn decode_hex_pair(hi: u8, lo: u8) -> Option<u8> {
    fn val(byte: u8) -> Option<u8> {
        match byte {
            b'0'..=b'9' => Some(byte - b'0'),
            b'a'..=b'f' => Some(byte - b'a' + 10),
            b'A'..=b'F' => Some(byte - b'A' + 10),
            _ => None,
        }
    }

    Some((val(hi)? << 4) | val(lo)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lenient() -> NormalizationOptions {
        NormalizationOptions::default()
    }

    fn decoding() -> NormalizationOptions {
        NormalizationOptions {
            decode_percent: true,
            ..lenient()
        }
    }

    #[test]
    fn request_paths_fold_onto_route_pathnames() {
        let cases = [
            ("/", "/"),
            ("///", "/"),
            ("/shop/", "/shop"),
            ("//shop//items///", "/shop/items"),
            ("/docs/[[...slug]]", "/docs/[[...slug]]"),
        ];
        for (raw, expected) in cases {
            assert_eq!(normalize_path(raw, &lenient()).as_deref(), Ok(expected), "{raw}");
        }
    }

    #[test]
    fn strict_and_raw_modes_leave_slashes_alone() {
        let strict = NormalizationOptions {
            strict_trailing_slash: true,
            ..lenient()
        };
        assert_eq!(normalize_path("/shop/", &strict).as_deref(), Ok("/shop/"));

        let doubled = NormalizationOptions {
            allow_duplicate_slash: true,
            ..lenient()
        };
        assert_eq!(normalize_path("/shop//items/", &doubled).as_deref(), Ok("/shop//items"));

        let raw = NormalizationOptions {
            normalize_path: false,
            ..lenient()
        };
        assert_eq!(normalize_path("//shop/", &raw).as_deref(), Ok("//shop/"));
    }

    #[test]
    fn decoding_turns_escapes_into_utf8_segments() {
        assert_eq!(normalize_path("/posts/na%C3%AFve", &decoding()).as_deref(), Ok("/posts/naïve"));
        assert_eq!(
            normalize_path("/posts/%ZZ", &lenient()).as_deref(),
            Ok("/posts/%ZZ"),
            "escapes are opaque when decoding is off"
        );
    }

    #[test]
    fn decoding_keeps_encoded_separators_inside_the_segment() {
        assert_eq!(normalize_path("/files/a%2Fb", &decoding()).as_deref(), Ok("/files/a%2Fb"));
        assert_eq!(normalize_path("/files/a%5cb/", &decoding()).as_deref(), Ok("/files/a%5cb"));
        assert_eq!(
            normalize_path("/files/%2F%2F", &decoding()).as_deref(),
            Ok("/files/%2F%2F"),
            "encoded slashes never collapse"
        );
    }

    #[test]
    fn decoding_rejects_broken_escapes() {
        assert_eq!(
            normalize_path("/posts/%4", &decoding()),
            Err(PathError::InvalidPercentEncoding {
                input: "/posts/%4".to_string(),
                index: 7,
            })
        );
        assert!(matches!(
            normalize_path("/posts/%FF", &decoding()),
            Err(PathError::InvalidUtf8AfterDecoding { .. })
        ));
    }

    #[test]
    fn traversal_and_control_bytes_are_refused() {
        assert!(matches!(
            normalize_path("/static/../secrets", &lenient()),
            Err(PathError::InvalidParentTraversal { .. })
        ));
        assert!(matches!(
            normalize_path("/static/%2E%2E", &decoding()),
            Err(PathError::InvalidParentTraversal { .. })
        ));
        assert!(matches!(
            normalize_path("/tab\there", &lenient()),
            Err(PathError::ControlOrWhitespace { byte: b'\t', .. })
        ));
        assert_eq!(normalize_path("", &lenient()), Err(PathError::Empty));
        assert!(matches!(
            normalize_path("shop", &lenient()),
            Err(PathError::MissingLeadingSlash { .. })
        ));
    }
}
