//! Sequential waypoint connection
//!
//! Only the current target is ever tested, so waypoints connect strictly in
//! order and at most one per step.

use glam::Vec2;

use super::state::LevelRuntime;

/// Outcome of a connection check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connection {
    /// Target still out of reach
    None,
    /// Waypoint `index` connected this step
    Connected { index: usize, completes_level: bool },
    /// Nothing left to connect (also the case for levels without waypoints)
    AlreadyComplete,
}

impl Connection {
    pub fn completes_level(&self) -> bool {
        matches!(
            self,
            Connection::Connected {
                completes_level: true,
                ..
            } | Connection::AlreadyComplete
        )
    }
}

/// Test the ship against the current target and advance on contact.
///
/// Contact means a distance strictly below `radius`.
pub fn check_connection(ship_pos: Vec2, level: &mut LevelRuntime, radius: f32) -> Connection {
    let index = level.next_required;
    let Some(target) = level.waypoints.get_mut(index) else {
        return Connection::AlreadyComplete;
    };

    if ship_pos.distance(target.pos) >= radius {
        return Connection::None;
    }

    target.connected = true;
    level.next_required += 1;
    Connection::Connected {
        index,
        completes_level: level.is_complete(),
    }
}
