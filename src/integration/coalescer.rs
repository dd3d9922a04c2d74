/// Coalescing helper for render/resize decisions
pub struct Coalescer;

impl Coalescer {
    /// Whether to render this loop based on coalesced inputs
    #[inline]
    pub fn decide_render(queued_resizes: usize, saw_visible_change: bool) -> bool {
        queued_resizes > 0 || saw_visible_change
    }

    /// Coalesce multiple resizes into last-only
    #[inline]
    pub fn decide_resize(
        last_seen: Option<(u16, u16)>,
        events: &[(u16, u16)],
    ) -> Option<(u16, u16)> {
        events.last().copied().or(last_seen)
    }
}
