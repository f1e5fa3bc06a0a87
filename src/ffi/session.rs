//! Frame-driven session for hosts that own the render loop.

use log::warn;

use crate::config::Config;
use crate::session::{Action, Session};
use crate::state::{Extent, GridSimulator, Point};

pub const GOL_ACTION_PAINT_ALIVE: u8 = 0;
pub const GOL_ACTION_PAINT_DEAD: u8 = 1;
pub const GOL_ACTION_HOVER: u8 = 2;
pub const GOL_ACTION_TOGGLE_TICK: u8 = 3;
pub const GOL_ACTION_STEP_FORWARD: u8 = 4;
pub const GOL_ACTION_STEP_BACKWARD: u8 = 5;
pub const GOL_ACTION_RESET: u8 = 6;

fn decode_action(kind: u8, x: f32, y: f32) -> Option<Action> {
    let point = Point::new(x, y);
    match kind {
        GOL_ACTION_PAINT_ALIVE => Some(Action::PaintAlive(point)),
        GOL_ACTION_PAINT_DEAD => Some(Action::PaintDead(point)),
        GOL_ACTION_HOVER => Some(Action::Hover(point)),
        GOL_ACTION_TOGGLE_TICK => Some(Action::ToggleTick),
        GOL_ACTION_STEP_FORWARD => Some(Action::StepForward),
        GOL_ACTION_STEP_BACKWARD => Some(Action::StepBackward),
        GOL_ACTION_RESET => Some(Action::Reset),
        _ => None,
    }
}

/// Create a session over a `subdivisions × subdivisions` grid covering a
/// `width × height` surface.
/// Returns a pointer to the allocated Session, or NULL if the settings are invalid.
#[no_mangle]
pub extern "C" fn gol_session_create(
    subdivisions: u32,
    tick_rate: u32,
    width: f32,
    height: f32,
) -> *mut Session {
    let config = Config {
        subdivisions: subdivisions as usize,
        tick_rate,
        extent: Extent::new(width, height),
    };

    match Session::new(config) {
        Ok(session) => Box::into_raw(Box::new(session)),
        Err(e) => {
            warn!("gol_session_create: {}", e);
            std::ptr::null_mut()
        }
    }
}

/// Destroy a Session and free its memory.
/// Safe to call with null pointer (no-op).
///
/// # Safety
/// - `session` must be a pointer returned by `gol_session_create()`, or null
#[no_mangle]
pub unsafe extern "C" fn gol_session_destroy(session: *mut Session) {
    if !session.is_null() {
        drop(Box::from_raw(session));
    }
}

/// Apply one user action. `x`/`y` are ignored for actions without a point.
/// Returns 0 on success, 1 on null pointer, unknown action or failure.
///
/// # Safety
/// - `session` must be a valid Session pointer, or null
#[no_mangle]
pub unsafe extern "C" fn gol_session_apply(session: *mut Session, kind: u8, x: f32, y: f32) -> i32 {
    if session.is_null() {
        warn!("gol_session_apply: null session pointer");
        return 1;
    }

    let Some(action) = decode_action(kind, x, y) else {
        warn!("gol_session_apply: unknown action {}", kind);
        return 1;
    };

    match (*session).apply(action) {
        Ok(()) => 0,
        Err(e) => {
            warn!("gol_session_apply: {}", e);
            1
        }
    }
}

/// Call once per rendered frame.
/// Returns 1 if a generation was produced this frame, 0 otherwise.
///
/// # Safety
/// - `session` must be a valid Session pointer, or null
#[no_mangle]
pub unsafe extern "C" fn gol_session_tick(session: *mut Session) -> u8 {
    if session.is_null() {
        return 0;
    }
    (*session).tick() as u8
}

/// Index of the cell under the cursor. 0 for a null pointer.
///
/// # Safety
/// - `session` must be a valid Session pointer, or null
#[no_mangle]
pub unsafe extern "C" fn gol_session_hovered(session: *const Session) -> u64 {
    if session.is_null() {
        return 0;
    }
    (*session).hovered() as u64
}

/// # Safety
/// - `session` must be a valid Session pointer, or null
#[no_mangle]
pub unsafe extern "C" fn gol_session_is_ticking(session: *const Session) -> u8 {
    if session.is_null() {
        return 0;
    }
    (*session).is_ticking() as u8
}

/// Borrow the session's grid for the read-only `gol_*` queries and `gol_extract_region`.
/// The pointer stays valid until the session is destroyed. Null for a null session.
///
/// # Safety
/// - `session` must be a valid Session pointer, or null
/// - the returned pointer must not be passed to `gol_destroy()` or any mutating call
#[no_mangle]
pub unsafe extern "C" fn gol_session_grid(session: *const Session) -> *const GridSimulator {
    if session.is_null() {
        return std::ptr::null();
    }
    (*session).grid() as *const GridSimulator
}
