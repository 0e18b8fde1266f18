// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Move catalog maintenance.
//!
//! After the three-way swap of a move `z -> {x, y}`, only moves touching the
//! neighbourhood of the three swapped cells can appear or disappear. The
//! conditions below compare labels one column before or after the swapped
//! pairs in the post-swap pattern, and are named after the order of the
//! three rows involved (`a` is the fourth row found through the matching
//! label).
//!
//! All writes go through the context so the trail can restore them. The
//! write order is fixed; the trail undoes it newest first.

use crate::braid::{Braid, Move};
use crate::context::SearchContext;
use crate::pattern::Cell;

/// Update both move tables for `mv`, which has just been swapped in.
///
/// Clears the applied move, installs or clears the forward moves around it,
/// then marks `mv.z` as the parent edge and adjusts the neighbouring parent
/// edges.
pub(crate) fn record_move(ctx: &mut SearchContext, mv: &Move) {
    update_braids(ctx, mv);
    update_unbraids(ctx, mv);
}

fn update_braids(ctx: &mut SearchContext, mv: &Move) {
    let Move {
        z: Cell { row: z, col: iz },
        braid: Braid {
            x: Cell { row: x, col: ix },
            y: Cell { row: y, col: iy },
        },
    } = *mv;
    let width = ctx.pattern().width();
    let slots = width - 1;

    ctx.set_braid(mv.z, None);

    // xaz
    if iz + 2 < width && ix > 0 {
        let p = ctx.pattern();
        let a = p.value(x, ix - 1);
        if a == p.value(z, iz + 2) && x < a && a < z {
            if let Some(ia) = p.position_of(a, x) {
                let braid = Braid::new(Cell::new(x, ix - 1), Cell::new(a, ia));
                ctx.set_braid(Cell::new(z, iz + 1), Some(braid));
            }
        }
    }

    // ayz
    if iz > 0 && iy > 0 {
        let p = ctx.pattern();
        let a = p.value(z, iz - 1);
        if a == p.value(y, iy - 1) && a < y {
            if let Some(ia) = p.position_of(a, y) {
                let braid = Braid::new(Cell::new(a, ia), Cell::new(y, iy - 1));
                ctx.set_braid(Cell::new(z, iz - 1), Some(braid));
            }
        }
    }

    // xya
    if ix + 2 < width && iy + 1 < slots {
        let p = ctx.pattern();
        let a = p.value(x, ix + 2);
        if a == p.value(y, iy + 2) && a > y {
            if let Some(ia) = p.position_of(a, x) {
                let braid = Braid::new(Cell::new(x, ix + 1), Cell::new(y, iy + 1));
                ctx.set_braid(Cell::new(a, ia), Some(braid));
            }
        }
    }

    // axy no longer applies
    if iy > 0 {
        ctx.set_braid(Cell::new(y, iy - 1), None);
    }

    // yza no longer applies
    if iy + 2 < width {
        let p = ctx.pattern();
        let a = p.value(y, iy + 2);
        if let Some(ia) = p.position_of(a, y) {
            if ia < slots {
                ctx.set_braid(Cell::new(a, ia), None);
            }
        }
    }
}

fn update_unbraids(ctx: &mut SearchContext, mv: &Move) {
    let Move {
        z: Cell { row: z, col: iz },
        braid: Braid {
            x: Cell { row: x, col: ix },
            y: Cell { row: y, col: iy },
        },
    } = *mv;
    let width = ctx.pattern().width();
    let slots = width - 1;

    ctx.set_unbraid(mv.z, true);

    // xya
    if ix > 0 && iy > 0 {
        let p = ctx.pattern();
        let a = p.value(x, ix - 1);
        if a == p.value(y, iy - 1) && a > y {
            if let Some(ia) = p.position_of(a, y) {
                if ia < slots {
                    ctx.set_unbraid(Cell::new(a, ia), false);
                }
            }
        }
    }

    // xaz
    if iz > 0 && ix + 2 < width {
        let p = ctx.pattern();
        let a = p.value(z, iz - 1);
        if a == p.value(x, ix + 2) && a > x {
            ctx.set_unbraid(Cell::new(z, iz - 1), false);
        }
    }

    // ayz
    if iz + 2 < width && iy + 2 < width {
        let p = ctx.pattern();
        let a = p.value(z, iz + 2);
        if a == p.value(y, iy + 2) && a < y {
            ctx.set_unbraid(Cell::new(z, iz + 1), false);
        }
    }

    // axy
    if ix + 2 < width && iy + 2 < width {
        let p = ctx.pattern();
        let a = p.value(x, ix + 2);
        if a == p.value(y, iy + 2) && a < x {
            ctx.set_unbraid(Cell::new(y, iy + 1), true);
        }
    }

    // yza
    if iy > 0 && iz > 0 {
        let p = ctx.pattern();
        let a = p.value(y, iy - 1);
        if a == p.value(z, iz - 1) && a > z {
            if let Some(ia) = p.position_of(a, z) {
                if ia < slots {
                    ctx.set_unbraid(Cell::new(a, ia), true);
                }
            }
        }
    }
}
