/// Decides how much terminal work one loop iteration needs
pub struct Coalescer;

impl Coalescer {
    /// Draw when anything asked for it or the render interval fired
    #[inline]
    pub fn decide_render(queued_render_reqs: usize, saw_tui_render: bool) -> bool {
        queued_render_reqs > 0 || saw_tui_render
    }

    /// Only the last of several resizes matters, and only if it changes the size
    #[inline]
    pub fn decide_resize(current: Option<(u16, u16)>, events: &[(u16, u16)]) -> Option<(u16, u16)> {
        events.last().copied().filter(|size| Some(*size) != current)
    }
}
