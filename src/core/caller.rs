//! Caller location resolution
//!
//! The front-end captures the call site of every logging call with
//! `#[track_caller]` and hands it to the sink together with the number of
//! frames the snapshot wants skipped. A [`CallerResolver`] turns that into
//! the file and line printed on the line, or `None` when it cannot tell.
//!
//! Skip counts start at the sink: one frame for the sink's entry point and
//! one for the front-end that called it ([`BASE_SKIP_FRAMES`]). Anything
//! above that, from a configured bias or `with_call_depth`, means "report a
//! caller further up the stack than the logging call".

use std::fmt;
use std::panic::Location;
use std::path::Path;

/// Skip count at which the logging call site itself is reported
pub const BASE_SKIP_FRAMES: usize = 2;

/// Source position printed as `<file>: <line>, `
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerLocation {
    pub file: String,
    pub line: u32,
}

impl CallerLocation {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    /// The file name without its directories
    pub fn basename(&self) -> &str {
        match self.file.rfind(|c: char| c == '/' || c == '\\') {
            Some(pos) => &self.file[pos + 1..],
            None => &self.file,
        }
    }
}

impl From<&Location<'_>> for CallerLocation {
    fn from(location: &Location<'_>) -> Self {
        Self::new(location.file(), location.line())
    }
}

impl fmt::Display for CallerLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.basename(), self.line)
    }
}

pub trait CallerResolver: Send + Sync {
    /// Resolve the location to print for a call made at `origin`
    ///
    /// `skip_frames` is the snapshot's call depth: the number of frames
    /// between the sink and the caller that should be reported. At
    /// [`BASE_SKIP_FRAMES`] that caller is `origin` itself.
    fn resolve(&self, origin: &'static Location<'static>, skip_frames: usize)
        -> Option<CallerLocation>;
}

/// The default resolver
///
/// At the base depth it reports the `#[track_caller]` origin without
/// touching the stack. For deeper snapshots it walks the stack, finds the
/// frame executing `origin` and steps up one frame per extra level. Frames
/// without debug info, or an origin that never shows up in the walk,
/// resolve to `None`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BacktraceCallerResolver;

impl CallerResolver for BacktraceCallerResolver {
    fn resolve(
        &self,
        origin: &'static Location<'static>,
        skip_frames: usize,
    ) -> Option<CallerLocation> {
        let extra = skip_frames.saturating_sub(BASE_SKIP_FRAMES);
        if extra == 0 {
            return Some(CallerLocation::from(origin));
        }

        let mut walk = FrameWalk::new(origin, extra);
        backtrace::trace(|frame| {
            let mut resolved = false;
            backtrace::resolve_frame(frame, |symbol| {
                resolved = true;
                walk.visit(symbol.filename(), symbol.lineno());
            });
            if !resolved {
                walk.visit(None, None);
            }
            !walk.is_done()
        });
        walk.finish()
    }
}

/// Stack walk state: look for the origin frame, then count frames above it
struct FrameWalk<'a> {
    origin: &'a Location<'a>,
    extra: usize,
    above_origin: Option<usize>,
    result: Option<Option<CallerLocation>>,
}

impl<'a> FrameWalk<'a> {
    fn new(origin: &'a Location<'a>, extra: usize) -> Self {
        Self {
            origin,
            extra,
            above_origin: None,
            result: None,
        }
    }

    /// Feed one frame, innermost first; inlined functions count as frames
    fn visit(&mut self, file: Option<&Path>, line: Option<u32>) {
        if self.is_done() {
            return;
        }
        match self.above_origin {
            None => {
                if let (Some(file), Some(line)) = (file, line) {
                    if line == self.origin.line() && file.ends_with(self.origin.file()) {
                        self.above_origin = Some(0);
                    }
                }
            }
            Some(seen) => {
                let seen = seen + 1;
                self.above_origin = Some(seen);
                if seen == self.extra {
                    self.result = Some(match (file, line) {
                        (Some(file), Some(line)) => {
                            Some(CallerLocation::new(file.to_string_lossy(), line))
                        }
                        _ => None,
                    });
                }
            }
        }
    }

    fn is_done(&self) -> bool {
        self.result.is_some()
    }

    fn finish(self) -> Option<CallerLocation> {
        self.result.flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basename() {
        assert_eq!(CallerLocation::new("src/core/logger.rs", 1).basename(), "logger.rs");
        assert_eq!(CallerLocation::new("C:\\work\\main.rs", 1).basename(), "main.rs");
        assert_eq!(CallerLocation::new("main.rs", 1).basename(), "main.rs");
        assert_eq!(CallerLocation::new("dir/", 1).basename(), "");
    }

    #[test]
    fn test_display() {
        let location = CallerLocation::new("/srv/app/src/main.rs", 123);
        assert_eq!(location.to_string(), "main.rs: 123");
    }

    #[test]
    fn test_base_depth_reports_origin() {
        let origin = Location::caller();
        for skip in 0..=BASE_SKIP_FRAMES {
            let resolved = BacktraceCallerResolver.resolve(origin, skip).expect("origin is known");
            assert_eq!(resolved.basename(), "caller.rs");
            assert_eq!(resolved.line, origin.line());
        }
    }

    #[inline(never)]
    fn resolve_from_here(skip: usize) -> Option<CallerLocation> {
        BacktraceCallerResolver.resolve(Location::caller(), skip)
    }

    #[test]
    fn test_extra_depth_walks_up_the_stack() {
        let line = line!() + 1;
        let resolved = resolve_from_here(BASE_SKIP_FRAMES + 1).expect("caller has debug info");
        assert_eq!(resolved.basename(), "caller.rs");
        assert_eq!(resolved.line, line);
    }

    #[test]
    fn test_walk_counts_frames_above_origin() {
        let origin = Location::caller();
        let here = Path::new(origin.file());
        let mut walk = FrameWalk::new(origin, 2);

        walk.visit(Some(Path::new("/rustc/library/std/src/rt.rs")), Some(10));
        walk.visit(Some(here), Some(origin.line() + 100));
        walk.visit(Some(here), Some(origin.line()));
        walk.visit(Some(Path::new("/app/src/helper.rs")), Some(20));
        assert!(!walk.is_done());
        walk.visit(Some(Path::new("/app/src/main.rs")), Some(30));
        assert!(walk.is_done());
        walk.visit(Some(Path::new("/app/src/other.rs")), Some(40));

        assert_eq!(walk.finish(), Some(CallerLocation::new("/app/src/main.rs", 30)));
    }

    #[test]
    fn test_walk_matches_origin_by_path_suffix() {
        let origin = Location::caller();
        let absolute = Path::new("/build/checkout").join(origin.file());
        let mut walk = FrameWalk::new(origin, 1);

        walk.visit(Some(&absolute), Some(origin.line()));
        walk.visit(Some(Path::new("/app/src/main.rs")), Some(7));
        assert_eq!(walk.finish(), Some(CallerLocation::new("/app/src/main.rs", 7)));
    }

    #[test]
    fn test_walk_without_debug_info_is_unresolved() {
        let origin = Location::caller();
        let mut walk = FrameWalk::new(origin, 1);
        walk.visit(Some(Path::new(origin.file())), Some(origin.line()));
        walk.visit(None, None);
        assert!(walk.is_done());
        assert_eq!(walk.finish(), None);
    }

    #[test]
    fn test_walk_without_origin_is_unresolved() {
        let origin = Location::caller();
        let mut walk = FrameWalk::new(origin, 1);
        walk.visit(Some(Path::new("/app/src/main.rs")), Some(1));
        walk.visit(Some(Path::new("/app/src/lib.rs")), Some(2));
        assert!(!walk.is_done());
        assert_eq!(walk.finish(), None);
    }

    #[test]
    fn test_stack_too_shallow_is_unresolved() {
        let resolved = BacktraceCallerResolver.resolve(Location::caller(), 10_000);
        assert_eq!(resolved, None);
    }
}
