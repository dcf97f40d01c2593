//! Algorithm dispatch into the engine.

use super::Algorithm;
use crate::engine::{
    self, lzo1,
    lzo1x::{self, Compressor},
    Effort, Status,
};

/// Level used by algorithms that only have a best-compression strategy.
const BEST_LEVEL: i32 = 9;

enum Family {
    Lzo1(lzo1::Variant),
    Lzo1x(lzo1x::Variant),
}

const fn family(algo: Algorithm) -> Family {
    match algo {
        Algorithm::Lzo1 => Family::Lzo1(lzo1::Variant::One),
        Algorithm::Lzo1a => Family::Lzo1(lzo1::Variant::OneA),
        Algorithm::Lzo1b => Family::Lzo1(lzo1::Variant::OneB),
        Algorithm::Lzo1c => Family::Lzo1(lzo1::Variant::OneC),
        Algorithm::Lzo2a => Family::Lzo1(lzo1::Variant::TwoA),
        Algorithm::Lzo1f => Family::Lzo1x(lzo1x::Variant::F),
        Algorithm::Lzo1x => Family::Lzo1x(lzo1x::Variant::X),
        Algorithm::Lzo1y => Family::Lzo1x(lzo1x::Variant::Y),
        Algorithm::Lzo1z => Family::Lzo1x(lzo1x::Variant::Z),
    }
}

fn effort(algo: Algorithm, level: i32) -> Effort {
    if algo.traits().honors_level {
        Effort::for_level(level)
    } else {
        Effort::for_level(BEST_LEVEL)
    }
}

pub(crate) fn compress(
    algo: Algorithm,
    level: i32,
    src: &[u8],
    dst: &mut [u8],
    wrkmem: &mut [u32],
) -> Status<usize> {
    let effort = effort(algo, level);
    match family(algo) {
        Family::Lzo1(variant) => {
            let mut enc = lzo1::Compressor::new(variant, dst);
            engine::parse(src, wrkmem, effort, &mut enc)?;
            enc.finish()
        }
        Family::Lzo1x(variant) => {
            let mut enc = Compressor::new(variant, dst);
            engine::parse(src, wrkmem, effort, &mut enc)?;
            enc.finish()
        }
    }
}

pub(crate) fn decompress(algo: Algorithm, src: &[u8], dst: &mut [u8]) -> Status<usize> {
    match family(algo) {
        Family::Lzo1(variant) => lzo1::decompress(variant, src, dst, &mut ()),
        Family::Lzo1x(variant) => lzo1x::decompress(variant, src, dst, &mut ()),
    }
}

/// Returns `None` if `algo` has no optimizer.
pub(crate) fn optimize(
    algo: Algorithm,
    src: &[u8],
    capacity: usize,
) -> Option<Status<(Vec<u8>, usize)>> {
    match family(algo) {
        Family::Lzo1x(variant @ (lzo1x::Variant::X | lzo1x::Variant::Y)) => {
            Some(engine::optimize(variant, src, capacity))
        }
        _ => None,
    }
}
