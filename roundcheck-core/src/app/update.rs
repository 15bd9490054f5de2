use bitflags::bitflags;

bitflags! {
    /// What the host application should refresh after a widget update.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Update: u8 {
        /// Redraw the scene.
        const DRAW = 1 << 0;
        /// Recompute the layout tree.
        const LAYOUT = 1 << 1;
        /// Re-evaluate widget state.
        const EVAL = 1 << 2;
        /// Force a full update cycle.
        const FORCE = 1 << 3;
    }
}
