//! Best-effort stack traces for diagnostics.
//!
//! The output is a debugging aid, not an interface: frame descriptions depend
//! on the platform, the symbol information available and inlining.

use std::backtrace::Backtrace;

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum number of frames rendered by [`stack_trace`].
pub const MAX_FRAMES: usize = 128;

/// `  3: 0x55b3f71202eb - app::handler`; newer toolchains print the address.
static FRAME_LINE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^\s*(\d+):\s+(?:0x[0-9a-fA-F]+ - )?(.*)$").ok());
static LOCATION_LINE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^\s+at (.*)$").ok());
/// Crate disambiguators such as `std[e28293b1aa0f68bd]`.
static CRATE_HASH: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"\[[0-9a-f]{8,}\]").ok());

/// Prefixes of frames that belong to the capture machinery itself.
const INTERNAL_PREFIXES: &[&str] = &[
    "std::backtrace",
    "<std::backtrace",
    "hostkit_platform::trace::capture_frames",
    "hostkit_platform::trace::stack_trace",
];

#[derive(Clone, Copy, Debug)]
pub struct TraceOptions {
    max_frames: usize,
    skip:       usize,
}

impl Default for TraceOptions {
    fn default() -> Self { Self::new() }
}

impl TraceOptions {
    pub fn new() -> Self {
        Self {
            max_frames: MAX_FRAMES,
            skip:       0,
        }
    }

    pub fn max_frames(mut self, max_frames: usize) -> Self {
        self.max_frames = max_frames;
        self
    }

    /// Drops this many caller frames in addition to the capture machinery.
    pub fn skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }
}

/// One rendered frame. `index` counts down to 0 at the outermost frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub index:       usize,
    pub description: String,
}

/// The caller's stack, one `"<n>: <frame>\n"` line per frame.
pub fn stack_trace() -> String { stack_trace_with(TraceOptions::default()) }

pub fn stack_trace_with(options: TraceOptions) -> String {
    capture_frames(options)
        .into_iter()
        .map(|frame| format!("{}: {}\n", frame.index, frame.description))
        .collect()
}

/// Captures and parses the caller's stack.
pub fn capture_frames(options: TraceOptions) -> Vec<Frame> {
    let backtrace = Backtrace::force_capture();
    let descriptions = parse_frames(&format!("{backtrace:#}"));

    let caller = descriptions
        .iter()
        .position(|d| !INTERNAL_PREFIXES.iter().any(|p| d.starts_with(p)))
        .unwrap_or(descriptions.len());

    number_frames(
        descriptions
            .into_iter()
            .skip(caller + options.skip)
            .take(options.max_frames)
            .collect(),
    )
}

/// Extracts frame descriptions from `Backtrace`'s alternate rendering.
/// A source location line is folded into the frame that precedes it.
fn parse_frames(rendered: &str) -> Vec<String> {
    let (Some(frame_line), Some(location_line)) = (FRAME_LINE.as_ref(), LOCATION_LINE.as_ref())
    else {
        return rendered.lines().map(str::to_owned).collect();
    };

    let mut frames: Vec<String> = Vec::new();
    for line in rendered.lines() {
        if let Some(caps) = frame_line.captures(line) {
            frames.push(strip_crate_hash(caps[2].trim()));
        } else if let (Some(caps), Some(last)) = (location_line.captures(line), frames.last_mut()) {
            last.push_str(" at ");
            last.push_str(caps[1].trim());
        }
    }
    frames
}

fn strip_crate_hash(description: &str) -> String {
    match CRATE_HASH.as_ref() {
        Some(re) => re.replace_all(description, "").into_owned(),
        None => description.to_owned(),
    }
}

fn number_frames(descriptions: Vec<String>) -> Vec<Frame> {
    let len = descriptions.len();
    descriptions
        .into_iter()
        .enumerate()
        .map(|(i, description)| Frame {
            index: len - i - 1,
            description,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "   0: std::backtrace_rs::backtrace::trace
             at /rustc/library/std/src/../../backtrace/src/backtrace/mod.rs:66:5
   1: std::backtrace::Backtrace::create
   2: app::handler
             at ./src/handler.rs:10:3
   3: <unknown>
";

    #[test]
    fn test_parse_frames_folds_locations() {
        let frames = parse_frames(SAMPLE);
        assert_eq!(frames.len(), 4);
        assert_eq!(frames[2], "app::handler at ./src/handler.rs:10:3");
        assert_eq!(frames[3], "<unknown>");
    }

    const SAMPLE_WITH_ADDRESSES: &str = "   0:     0x55b3f71202eb - std[e28293b1aa0f68bd]::backtrace_rs::backtrace::libunwind::trace
                               at /rustc/library/std/src/../../backtrace/src/backtrace/libunwind.rs:117:9
   1:     0x55b3f71202ff - <std[e28293b1aa0f68bd]::backtrace::Backtrace>::force_capture
   2:     0x55b3f7120300 - hostkit_platform[0a1b2c3d4e5f6789]::trace::capture_frames
   3:     0x55b3f7120400 - <[f32]>::len
   4:     0x55b3f7120500 - app::handler
";

    #[test]
    fn test_parse_frames_strips_addresses_and_crate_hashes() {
        let frames = parse_frames(SAMPLE_WITH_ADDRESSES);
        assert_eq!(frames.len(), 5);
        assert!(frames[0].starts_with("std::backtrace_rs::backtrace::libunwind::trace at "));
        assert_eq!(frames[1], "<std::backtrace::Backtrace>::force_capture");
        assert_eq!(frames[2], "hostkit_platform::trace::capture_frames");
        assert_eq!(frames[3], "<[f32]>::len");
        assert_eq!(frames[4], "app::handler");
        assert!(frames.iter().all(|f| !f.starts_with("0x")));
    }

    #[test]
    fn test_number_frames_counts_down() {
        let frames = number_frames(vec!["a".into(), "b".into(), "c".into()]);
        let indices: Vec<_> = frames.iter().map(|f| f.index).collect();
        assert_eq!(indices, vec![2, 1, 0]);
    }

    #[test]
    fn test_stack_trace_lines() {
        let trace = stack_trace();
        assert!(!trace.is_empty());
        assert!(trace.ends_with('\n'));

        let indices: Vec<usize> = trace
            .lines()
            .map(|line| line.split_once(": ").unwrap().0.parse().unwrap())
            .collect();
        assert_eq!(indices.last(), Some(&0));
        assert!(indices.windows(2).all(|w| w[0] == w[1] + 1));
    }

    #[test]
    fn test_stack_trace_skips_capture_machinery() {
        let frames = capture_frames(TraceOptions::new());
        assert!(!frames.is_empty());

        let caller = frames
            .iter()
            .position(|f| f.description.contains("test_stack_trace_skips_capture_machinery"))
            .unwrap_or(0);
        for frame in &frames[..=caller] {
            if frame.description.contains("test_stack_trace_skips_capture_machinery") {
                continue;
            }
            assert!(!frame.description.contains("backtrace"), "leaked: {}", frame.description);
            assert!(!frame.description.contains("capture_frames"), "leaked: {}", frame.description);
        }
    }

    #[test]
    fn test_stack_trace_respects_max_frames() {
        let frames = capture_frames(TraceOptions::new().max_frames(2));
        assert!(frames.len() <= 2);
        let none = capture_frames(TraceOptions::new().max_frames(0));
        assert!(none.is_empty());
    }
}
