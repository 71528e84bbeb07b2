//! Plain data row types written by output backends.

/// One agent's recorded state at the start of a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryRow {
    pub tick:      u64,
    pub agent_id:  u32,
    pub x:         f64,
    pub y:         f64,
    pub heading_x: f64,
    pub heading_y: f64,
}

/// Population statistics after one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:         u64,
    pub agent_count:  u64,
    pub mean_speed:   f64,
    pub polarization: f64,
}
