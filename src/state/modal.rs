/// Modal controller
///
/// Owns the detail modal's state machine: open/close lifecycle, the active
/// index into the filtered view, focus containment, the rendered detail
/// pane and the transient assistive-technology announcements.
///
/// All transitions are synchronous. Deferred work (the 300 ms hide after a
/// close, the removal of an announcement) is expressed as [`ModalEffect`]
/// values which the application maps to timer tasks; the timers deliver
/// messages back carrying a generation or id, so a stale timer can never
/// hide a freshly reopened modal or remove a newer announcement.
use crate::state::catalog::PhotoRecord;
use crate::state::focus::{self, ModalControl, PageFocus};
use std::time::Duration;
use tracing::{debug, warn};

/// Visual close transition; the modal detaches from layout when it elapses
pub const HIDE_DELAY: Duration = Duration::from_millis(300);

/// Lifetime of an assistive-technology announcement
pub const ANNOUNCEMENT_TTL: Duration = Duration::from_millis(1000);

/// Known technical-spec keys and their display labels, in render order.
/// Keys outside this table are never rendered.
const TECH_LABELS: [(&str, &str); 7] = [
    ("motor", "Motor"),
    ("leistung", "Leistung"),
    ("hubraum", "Hubraum"),
    ("getriebe", "Getriebe"),
    ("hoechstgeschwindigkeit", "Höchstgeschwindigkeit"),
    ("verbrauch", "Verbrauch"),
    ("gewicht", "Gewicht"),
];

/// Lifecycle phase of the modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalPhase {
    /// Detached from layout
    Closed,
    /// Visible and interactive
    Open,
    /// Close transition running: still in layout, hidden for assistive
    /// technology, waiting for the hide timer
    Closing,
}

/// One row of the technical-specifications panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecRow {
    pub label: &'static str,
    pub value: String,
}

/// The rendered detail content the modal view displays
#[derive(Debug, Clone, PartialEq)]
pub struct DetailPane {
    /// Reference to the fullsize image (falls back to the thumbnail ref)
    pub image: String,
    pub alt: String,
    pub caption: String,
    /// Dialog title line
    pub title: String,
    /// Human-readable "position / total" counter
    pub counter: String,
    pub specs: Vec<SpecRow>,
}

/// A transient live-region announcement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub id: u64,
    pub text: String,
}

/// Deferred work requested by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEffect {
    /// Detach the modal after [`HIDE_DELAY`]; ignored unless the
    /// generation still matches when the timer fires
    ScheduleHide { generation: u64 },
    /// Remove the announcement after [`ANNOUNCEMENT_TTL`]
    ScheduleExpiry { id: u64 },
}

#[derive(Debug)]
pub struct ModalController {
    phase: ModalPhase,
    /// Index into the *current* filtered view, never the full catalog
    active_index: usize,
    /// Page focus captured when the modal opened, restored after close
    return_focus: Option<PageFocus>,
    focused_control: Option<ModalControl>,
    /// Bumped by every close and every open; a hide timer only acts when
    /// its generation is still current
    hide_generation: u64,
    detail: Option<DetailPane>,
    announcements: Vec<Announcement>,
    next_announcement_id: u64,
}

impl Default for ModalController {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalController {
    pub fn new() -> Self {
        Self {
            phase: ModalPhase::Closed,
            active_index: 0,
            return_focus: None,
            focused_control: None,
            hide_generation: 0,
            detail: None,
            announcements: Vec::new(),
            next_announcement_id: 0,
        }
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase == ModalPhase::Open
    }

    /// True while the modal occupies layout (open or mid close transition)
    pub fn is_visible(&self) -> bool {
        self.phase != ModalPhase::Closed
    }

    /// aria-hidden equivalent: hidden for assistive technology whenever
    /// the modal is not fully open
    pub fn hidden_for_at(&self) -> bool {
        self.phase != ModalPhase::Open
    }

    /// Background scroll is disabled while open and re-enabled the moment
    /// a close begins, not when the hide timer fires
    pub fn scroll_locked(&self) -> bool {
        self.phase == ModalPhase::Open
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn detail(&self) -> Option<&DetailPane> {
        self.detail.as_ref()
    }

    pub fn focused_control(&self) -> Option<ModalControl> {
        self.focused_control
    }

    pub fn announcements(&self) -> &[Announcement] {
        &self.announcements
    }

    /// Open the modal at `index` into the filtered view.
    ///
    /// An out-of-range index is a silent no-op: the state stays exactly as
    /// it was, open or closed. `origin` is the page focus to restore after
    /// close; it is only captured when the modal actually enters from a
    /// non-open phase, so re-opening keeps the original return target.
    pub fn open(
        &mut self,
        photos: &[PhotoRecord],
        index: usize,
        origin: Option<PageFocus>,
    ) -> Vec<ModalEffect> {
        if index >= photos.len() {
            debug!(index, total = photos.len(), "open request out of range");
            return Vec::new();
        }

        if self.phase == ModalPhase::Closed {
            self.return_focus = origin;
        }
        // Cancel any hide timer still pending from an earlier close.
        self.hide_generation = self.hide_generation.wrapping_add(1);
        self.phase = ModalPhase::Open;
        self.active_index = index;
        self.focused_control = Some(ModalControl::Close);

        self.render_detail(photos)
    }

    /// Navigate to the next photo; a no-op at the last index
    pub fn next(&mut self, photos: &[PhotoRecord]) -> Vec<ModalEffect> {
        if self.phase != ModalPhase::Open {
            return Vec::new();
        }
        if self.active_index + 1 >= photos.len() {
            return Vec::new();
        }
        self.active_index += 1;
        self.normalize_focus(photos.len());
        self.render_detail(photos)
    }

    /// Navigate to the previous photo; a no-op at index 0
    pub fn previous(&mut self, photos: &[PhotoRecord]) -> Vec<ModalEffect> {
        if self.phase != ModalPhase::Open {
            return Vec::new();
        }
        if self.active_index == 0 {
            return Vec::new();
        }
        self.active_index -= 1;
        self.normalize_focus(photos.len());
        self.render_detail(photos)
    }

    /// Begin closing: mark hidden for assistive technology, unlock
    /// background scroll and schedule the hide timer. Safe to call when
    /// already closing or closed.
    pub fn close(&mut self) -> Vec<ModalEffect> {
        if self.phase != ModalPhase::Open {
            return Vec::new();
        }
        self.phase = ModalPhase::Closing;
        self.focused_control = None;
        self.hide_generation = self.hide_generation.wrapping_add(1);
        vec![ModalEffect::ScheduleHide {
            generation: self.hide_generation,
        }]
    }

    /// Hide timer fired. Detaches the modal and yields the focus target to
    /// restore, unless the timer is stale (the modal was reopened or
    /// another close superseded it).
    pub fn finish_hide(&mut self, generation: u64) -> Option<PageFocus> {
        if self.phase != ModalPhase::Closing || generation != self.hide_generation {
            return None;
        }
        self.phase = ModalPhase::Closed;
        self.detail = None;
        self.return_focus.take()
    }

    /// Re-render the detail pane for the current index, e.g. after the
    /// filtered view changed underneath the modal. No-op unless open.
    pub fn rerender(&mut self, photos: &[PhotoRecord]) -> Vec<ModalEffect> {
        if self.phase != ModalPhase::Open {
            return Vec::new();
        }
        self.render_detail(photos)
    }

    /// Re-validate the active index against a recomputed filtered view.
    ///
    /// While open: an index past the end clamps to the last photo, and the
    /// pane re-renders either way since the records behind the indices may
    /// have changed; an empty view closes the modal.
    pub fn sync_with_view(&mut self, photos: &[PhotoRecord]) -> Vec<ModalEffect> {
        if self.phase != ModalPhase::Open {
            return Vec::new();
        }
        if photos.is_empty() {
            debug!("filtered view emptied while modal open, closing");
            return self.close();
        }
        if self.active_index >= photos.len() {
            self.active_index = photos.len() - 1;
        }
        self.normalize_focus(photos.len());
        self.render_detail(photos)
    }

    /// Tab / Shift+Tab inside the modal. The focusable set is recomputed
    /// on every press so controls disabled at the current bounds drop out.
    pub fn handle_tab(&mut self, photo_count: usize, backwards: bool) {
        if self.phase != ModalPhase::Open {
            return;
        }
        let ring = focus::modal_focus_ring(self.active_index, photo_count);
        self.focused_control = focus::cycle_modal_focus(&ring, self.focused_control, backwards);
    }

    /// Remove an expired announcement; stale ids are simply gone already
    pub fn expire_announcement(&mut self, id: u64) {
        self.announcements.retain(|a| a.id != id);
    }

    /// Keep the focused control inside the current focusable set
    fn normalize_focus(&mut self, photo_count: usize) {
        let ring = focus::modal_focus_ring(self.active_index, photo_count);
        if let Some(control) = self.focused_control {
            if !ring.contains(&control) {
                self.focused_control = Some(ModalControl::Close);
            }
        }
    }

    /// Rebuild the detail pane for the active index and emit the
    /// accompanying announcement. Aborts with a log line when no record
    /// sits behind the surface; never panics.
    fn render_detail(&mut self, photos: &[PhotoRecord]) -> Vec<ModalEffect> {
        let Some(photo) = photos.get(self.active_index) else {
            warn!(
                index = self.active_index,
                total = photos.len(),
                "no photo behind the detail surface, aborting render"
            );
            return Vec::new();
        };

        let image = if photo.fullsize.is_empty() {
            photo.thumbnail.clone()
        } else {
            photo.fullsize.clone()
        };

        self.detail = Some(DetailPane {
            image,
            alt: photo.alt.clone(),
            caption: photo.caption.clone(),
            title: photo.alt.clone(),
            counter: format!("{} / {}", self.active_index + 1, photos.len()),
            specs: build_specs(photo),
        });

        let id = self.next_announcement_id;
        self.next_announcement_id += 1;
        self.announcements.push(Announcement {
            id,
            text: format!(
                "Bild {} von {}: {}",
                self.active_index + 1,
                photos.len(),
                photo.alt
            ),
        });

        vec![ModalEffect::ScheduleExpiry { id }]
    }
}

/// Project a record's technical data through the known-label table.
/// Unknown keys and empty values are silently dropped; rows come out in
/// table order.
fn build_specs(photo: &PhotoRecord) -> Vec<SpecRow> {
    TECH_LABELS
        .iter()
        .filter_map(|(key, label)| {
            photo
                .technical_data
                .get(*key)
                .filter(|value| !value.is_empty())
                .map(|value| SpecRow {
                    label,
                    value: value.clone(),
                })
        })
        .collect()
}
