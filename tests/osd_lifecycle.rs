//! End-to-end OSD session tests using a recording renderer and a manual clock.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use player_osd::clock::MediaClock;
use player_osd::codec::TextPacket;
use player_osd::error::OsdError;
use player_osd::overlay::{OsdSettings, PlayerOsd};
use player_osd::render::{OverlayLayout, RendererFactory, TextRenderer};

#[derive(Debug, Clone, PartialEq, Eq)]
enum RenderEvent {
    Prepared(Vec<String>),
    Shown,
    Unprepared,
    Hidden,
}

#[derive(Default)]
struct RenderLog {
    events: Mutex<Vec<RenderEvent>>,
}

impl RenderLog {
    fn push(&self, event: RenderEvent) {
        self.events.lock().unwrap().push(event);
    }

    fn snapshot(&self) -> Vec<RenderEvent> {
        self.events.lock().unwrap().clone()
    }

    fn last_prepared(&self) -> Option<Vec<String>> {
        self.snapshot().into_iter().rev().find_map(|event| match event {
            RenderEvent::Prepared(lines) => Some(lines),
            _ => None,
        })
    }

    fn count(&self, wanted: &RenderEvent) -> usize {
        self.snapshot().iter().filter(|event| *event == wanted).count()
    }
}

struct RecordingRenderer {
    log: Arc<RenderLog>,
    fail_show: bool,
}

impl TextRenderer for RecordingRenderer {
    fn prepare(&mut self, lines: &[String]) -> Result<(), OsdError> {
        self.log.push(RenderEvent::Prepared(lines.to_vec()));
        Ok(())
    }

    fn show_next(&mut self) -> Result<(), OsdError> {
        if self.fail_show {
            return Err(OsdError::Precondition {
                detail: "display surface lost".to_string(),
                user_message: Some("OSD rendering is unavailable".to_string()),
            });
        }
        self.log.push(RenderEvent::Shown);
        Ok(())
    }

    fn unprepare(&mut self) {
        self.log.push(RenderEvent::Unprepared);
    }

    fn hide(&mut self) -> Result<(), OsdError> {
        self.log.push(RenderEvent::Hidden);
        Ok(())
    }
}

struct RecordingFactory {
    log: Arc<RenderLog>,
    fail_show: bool,
}

impl RecordingFactory {
    fn new(log: Arc<RenderLog>) -> Self {
        Self {
            log,
            fail_show: false,
        }
    }
}

impl RendererFactory for RecordingFactory {
    fn create_renderer(
        &self,
        font_path: &Path,
        _font_size: f32,
        _layout: &OverlayLayout,
    ) -> Result<Box<dyn TextRenderer>, OsdError> {
        if !font_path.exists() {
            return Err(OsdError::Precondition {
                detail: format!("font not found: {}", font_path.display()),
                user_message: Some("the OSD font could not be loaded".to_string()),
            });
        }
        Ok(Box::new(RecordingRenderer {
            log: self.log.clone(),
            fail_show: self.fail_show,
        }))
    }
}

struct ManualClock {
    now_ms: AtomicI64,
}

impl ManualClock {
    fn at(now_ms: i64) -> Arc<Self> {
        Arc::new(Self {
            now_ms: AtomicI64::new(now_ms),
        })
    }
}

impl MediaClock for ManualClock {
    fn media_time_ms(&self) -> i64 {
        self.now_ms.load(Ordering::SeqCst)
    }
}

fn fast_settings() -> OsdSettings {
    OsdSettings {
        refresh_ms: 10,
        ..OsdSettings::default()
    }
}

fn font_fixture() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("osd.ttf");
    std::fs::write(&path, b"stub font").expect("font fixture");
    (dir, path)
}

fn wait_until(timeout: Duration, mut condition: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        thread::sleep(Duration::from_millis(5));
    }
    condition()
}

const WAIT: Duration = Duration::from_secs(2);

#[test]
fn renders_position_over_total_when_shown() {
    let log = Arc::new(RenderLog::default());
    let (_dir, font) = font_fixture();
    let clock = ManualClock::at(65_000);

    let mut osd = PlayerOsd::with_settings(
        Arc::new(RecordingFactory::new(log.clone())),
        fast_settings(),
    );
    assert!(osd.open(&font, 24.0, clock, 3_725_000));

    osd.toggle();
    assert!(wait_until(WAIT, || {
        log.last_prepared() == Some(vec!["0:01:05/1:02:05".to_string()])
    }));
    assert!(wait_until(WAIT, || log.count(&RenderEvent::Shown) > 0));

    osd.close();
}

#[test]
fn tracks_clock_updates_between_ticks() {
    let log = Arc::new(RenderLog::default());
    let (_dir, font) = font_fixture();
    let clock = ManualClock::at(0);

    let mut osd = PlayerOsd::with_settings(
        Arc::new(RecordingFactory::new(log.clone())),
        fast_settings(),
    );
    assert!(osd.open(&font, 24.0, clock.clone(), 0));

    osd.toggle();
    assert!(wait_until(WAIT, || {
        log.last_prepared() == Some(vec!["0:00:00/0:00:00".to_string()])
    }));

    clock.now_ms.store(59_000, Ordering::SeqCst);
    assert!(wait_until(WAIT, || {
        log.last_prepared() == Some(vec!["0:00:59/0:00:00".to_string()])
    }));

    osd.close();
}

#[test]
fn toggle_off_hides_and_toggle_on_resumes() {
    let log = Arc::new(RenderLog::default());
    let (_dir, font) = font_fixture();
    let clock = ManualClock::at(1_000);

    let mut osd = PlayerOsd::with_settings(
        Arc::new(RecordingFactory::new(log.clone())),
        fast_settings(),
    );
    assert!(osd.open(&font, 24.0, clock, 10_000));

    osd.toggle();
    assert!(wait_until(WAIT, || log.count(&RenderEvent::Shown) > 0));

    osd.toggle();
    let hidden_before = log.count(&RenderEvent::Hidden);
    assert!(wait_until(WAIT, || {
        log.count(&RenderEvent::Hidden) > hidden_before
    }));

    let prepared_before = log.count(&RenderEvent::Prepared(vec![
        "0:00:01/0:00:10".to_string(),
    ]));
    osd.toggle();
    assert!(wait_until(WAIT, || {
        log.count(&RenderEvent::Prepared(vec!["0:00:01/0:00:10".to_string()])) > prepared_before
    }));

    osd.close();
    assert!(!osd.is_running());
}

#[test]
fn flush_is_accepted_without_renderer_effect() {
    let log = Arc::new(RenderLog::default());
    let (_dir, font) = font_fixture();
    let clock = ManualClock::at(0);

    let mut osd = PlayerOsd::with_settings(
        Arc::new(RecordingFactory::new(log.clone())),
        fast_settings(),
    );
    assert!(osd.open(&font, 24.0, clock, 0));

    osd.flush();
    assert!(wait_until(WAIT, || log.count(&RenderEvent::Hidden) > 2));

    // Hidden session: flushing never prepares or shows anything.
    assert_eq!(log.count(&RenderEvent::Shown), 0);
    assert!(log.last_prepared().is_none());
    assert!(osd.is_running());

    osd.close();
}

#[test]
fn close_is_idempotent_and_reopen_starts_hidden() {
    let log = Arc::new(RenderLog::default());
    let (_dir, font) = font_fixture();

    let mut osd = PlayerOsd::with_settings(
        Arc::new(RecordingFactory::new(log.clone())),
        fast_settings(),
    );
    assert!(osd.open(&font, 24.0, ManualClock::at(0), 1_000));
    osd.toggle();
    assert!(wait_until(WAIT, || log.count(&RenderEvent::Shown) > 0));

    osd.close();
    osd.close();
    assert!(!osd.is_running());

    // Visibility does not leak from the previous session.
    let shown_before = log.count(&RenderEvent::Shown);
    let hidden_before = log.count(&RenderEvent::Hidden);
    assert!(osd.open(&font, 24.0, ManualClock::at(0), 1_000));
    assert!(wait_until(WAIT, || {
        log.count(&RenderEvent::Hidden) > hidden_before
    }));
    assert_eq!(log.count(&RenderEvent::Shown), shown_before);

    osd.close();
}

#[test]
fn open_while_running_fails() {
    let log = Arc::new(RenderLog::default());
    let (_dir, font) = font_fixture();

    let mut osd = PlayerOsd::with_settings(
        Arc::new(RecordingFactory::new(log.clone())),
        fast_settings(),
    );
    assert!(osd.open(&font, 24.0, ManualClock::at(0), 1_000));
    assert!(osd.is_running());
    assert!(!osd.open(&font, 24.0, ManualClock::at(0), 1_000));
    assert!(osd.is_running());

    osd.close();
}

#[test]
fn renderer_failure_stops_the_loop_and_allows_reopen() {
    let log = Arc::new(RenderLog::default());
    let (_dir, font) = font_fixture();

    let mut factory = RecordingFactory::new(log.clone());
    factory.fail_show = true;

    let mut osd = PlayerOsd::with_settings(Arc::new(factory), fast_settings());
    assert!(osd.open(&font, 24.0, ManualClock::at(0), 1_000));

    osd.toggle();
    assert!(wait_until(WAIT, || !osd.is_running()));

    // A crashed loop counts as inactive; open joins it and starts fresh.
    assert!(osd.open(&font, 24.0, ManualClock::at(0), 1_000));
    osd.close();
}

#[test]
fn missing_font_terminates_before_first_tick() {
    let log = Arc::new(RenderLog::default());

    let mut osd = PlayerOsd::with_settings(
        Arc::new(RecordingFactory::new(log.clone())),
        fast_settings(),
    );
    assert!(osd.open("/nonexistent/osd.ttf", 24.0, ManualClock::at(0), 1_000));

    assert!(wait_until(WAIT, || !osd.is_running()));
    assert!(log.snapshot().is_empty());
}

#[test]
fn add_packet_retains_decoded_lines_until_drained() {
    let log = Arc::new(RenderLog::default());
    let osd = PlayerOsd::with_settings(
        Arc::new(RecordingFactory::new(log)),
        fast_settings(),
    );

    let packet = TextPacket {
        pts_ms: 0,
        duration_ms: 2_000,
        data: b"{\\i1}hello{\\i0}\r\nworld".to_vec(),
    };
    assert!(osd.add_packet(&packet));
    assert!(!osd.add_packet(&TextPacket {
        pts_ms: 0,
        duration_ms: 0,
        data: b"  \n".to_vec(),
    }));

    assert_eq!(
        osd.take_text_lines(),
        vec!["hello".to_string(), "world".to_string()]
    );
    assert!(osd.take_text_lines().is_empty());
}

#[test]
fn add_packet_drops_oldest_lines_past_capacity() {
    let log = Arc::new(RenderLog::default());
    let settings = OsdSettings {
        text_queue_capacity: 2,
        ..fast_settings()
    };
    let osd = PlayerOsd::with_settings(Arc::new(RecordingFactory::new(log)), settings);

    for text in ["one", "two", "three"] {
        assert!(osd.add_packet(&TextPacket {
            pts_ms: 0,
            duration_ms: 1_000,
            data: text.as_bytes().to_vec(),
        }));
    }

    assert_eq!(
        osd.take_text_lines(),
        vec!["two".to_string(), "three".to_string()]
    );
}
